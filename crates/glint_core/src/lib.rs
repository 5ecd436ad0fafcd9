//! Glint Core - scene description for the sphere path tracer.
//!
//! This crate provides:
//!
//! - **Scene types**: `Scene`, `Sphere`, `Material`
//! - **Intersection**: `Sphere::calc_hit` and `Scene::nearest_hit`
//! - **Color input**: `#rrggbb` parsing for material editors
//!
//! # Example
//!
//! ```
//! use glint_core::{Material, Scene, Sphere};
//! use glint_math::{Ray, Vec3};
//!
//! let mut scene = Scene::new();
//! scene
//!     .add(Sphere::new(Vec3::new(0.0, 0.0, 5.0), 2.0, Material::default()))
//!     .unwrap();
//!
//! let hit = scene.nearest_hit(&Ray::new(Vec3::ZERO, Vec3::Z)).unwrap();
//! assert!((hit.distance - 3.0).abs() < 1e-12);
//! ```

pub mod color;
pub mod material;
pub mod scene;
pub mod sphere;

// Re-export commonly used types
pub use color::{
    hex_to_raw_color, hex_to_unit_color, parse_hex_color, ColorParseError, ColorResult,
};
pub use material::Material;
pub use scene::{Scene, SceneError, SceneResult};
pub use sphere::{CollisionInfo, Sphere, SphereId};
