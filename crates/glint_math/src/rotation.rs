//! Euler rotation used to orient camera rays.

use crate::Vec3;

/// Rotate `v` by the Euler angles in `rotation` (radians).
///
/// `rotation.x`, `rotation.y` and `rotation.z` are alpha, beta and gamma of a
/// single combined matrix `Rz(gamma) * Ry(beta) * Rx(alpha)`, expanded term
/// by term.
pub fn rotate_vector(v: Vec3, rotation: Vec3) -> Vec3 {
    let Vec3 { x, y, z } = v;
    let (sin_a, cos_a) = rotation.x.sin_cos();
    let (sin_b, cos_b) = rotation.y.sin_cos();
    let (sin_g, cos_g) = rotation.z.sin_cos();

    let rotated_x = x * cos_g * cos_b
        + y * (cos_g * sin_b * sin_a - sin_g * cos_a)
        + z * (cos_g * sin_b * cos_a + sin_g * sin_a);

    let rotated_y = x * sin_g * cos_b
        + y * (sin_g * sin_b * sin_a + cos_g * cos_a)
        + z * (sin_g * sin_b * cos_a - cos_g * sin_a);

    let rotated_z = -x * sin_b + y * cos_b * sin_a + z * cos_b * cos_a;

    Vec3::new(rotated_x, rotated_y, rotated_z)
}
