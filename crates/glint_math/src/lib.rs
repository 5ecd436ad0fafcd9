//! Glint math types.
//!
//! Everything is double precision: the tracer works on `glam::DVec3`,
//! exported here as [`Vec3`] (points and directions) and [`Color`] (RGB).

// Re-export glam for convenience
pub use glam::DVec3;

/// Three-component f64 vector used for points and directions.
pub type Vec3 = DVec3;

/// RGB color. Same storage as [`Vec3`]; channel scale depends on use.
pub type Color = DVec3;

mod ray;
mod rotation;

pub use ray::Ray;
pub use rotation::rotate_vector;
