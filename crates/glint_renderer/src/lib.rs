//! Glint Renderer - CPU Path Tracing
//!
//! A Monte Carlo path tracer for scenes of spheres. Each pixel averages many
//! recursive light paths; a cheaper single-bounce preview shows raw albedo.
//!
//! ```
//! use glint_core::{Material, Scene, Sphere};
//! use glint_renderer::{render_preview, Camera, Color, RgbaBuffer, Vec3};
//!
//! let mut scene = Scene::new();
//! scene
//!     .add(Sphere::new(Vec3::new(0.0, 0.0, 5.0), 2.0, Material::new(Color::X, 1.0)))
//!     .unwrap();
//!
//! let camera = Camera::new().with_position(Vec3::ZERO).with_field_of_view(10.0);
//! let mut frame = RgbaBuffer::new(10, 10);
//! render_preview(&camera, &scene, &mut frame).unwrap();
//! assert_eq!(frame.get(5, 5), [255, 0, 0, 255]);
//! ```

mod camera;
mod renderer;
mod sink;
mod tracer;

pub use camera::{Camera, CameraControl, MovementIntent};
pub use renderer::{
    render, render_preview, render_with_progress, Accumulator, RenderConfig, RenderError,
    RenderResult,
};
pub use sink::{channel_to_byte, color_to_rgba, PixelSink, RgbaBuffer};
pub use tracer::{scatter_ray, trace, MAX_BOUNCES};

/// Re-export common math types from glint_math
pub use glint_math::{Color, Ray, Vec3};
