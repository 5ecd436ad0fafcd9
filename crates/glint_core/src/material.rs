//! Surface material attached to each sphere.

use glint_math::Color;

use crate::color::{hex_to_raw_color, hex_to_unit_color, ColorResult};

/// Material parameters used by the path tracer.
///
/// The tracer treats every surface the same way: it adds the emitted light,
/// then multiplies whatever comes back from the (jittered) mirror bounce by
/// `color`.
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    /// Albedo (RGB, 0-1)
    pub color: Color,

    /// Emitted color. Color pickers deliver this on a raw 0-255 scale.
    pub emissive_color: Color,

    /// Scalar multiplier for `emissive_color` (>= 0)
    pub emissive_strength: f64,

    /// Reflection jitter (0 = perfect mirror, typically up to 1)
    pub roughness: f64,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Color::ONE,
            emissive_color: Color::ZERO,
            emissive_strength: 0.0,
            roughness: 1.0,
        }
    }
}

impl Material {
    /// Create a non-emissive material with the given albedo and roughness.
    pub fn new(color: Color, roughness: f64) -> Self {
        Self {
            color,
            roughness,
            ..Default::default()
        }
    }

    /// Set the albedo.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set the emissive color and strength.
    pub fn with_emission(mut self, emissive_color: Color, emissive_strength: f64) -> Self {
        self.emissive_color = emissive_color;
        self.emissive_strength = emissive_strength;
        self
    }

    /// Set the roughness.
    pub fn with_roughness(mut self, roughness: f64) -> Self {
        self.roughness = roughness;
        self
    }

    /// Set the albedo from a `#rrggbb` string (mapped to 0-1).
    pub fn with_color_hex(mut self, hex: &str) -> ColorResult<Self> {
        self.color = hex_to_unit_color(hex)?;
        Ok(self)
    }

    /// Set the emissive color from a `#rrggbb` string (kept at 0-255).
    pub fn with_emissive_hex(mut self, hex: &str, emissive_strength: f64) -> ColorResult<Self> {
        self.emissive_color = hex_to_raw_color(hex)?;
        self.emissive_strength = emissive_strength;
        Ok(self)
    }

    /// Light emitted by this surface: `emissive_color * emissive_strength`.
    #[inline]
    pub fn emission(&self) -> Color {
        self.emissive_color * self.emissive_strength
    }

    /// Check if this material emits any light.
    pub fn is_emissive(&self) -> bool {
        self.emission() != Color::ZERO
    }
}
