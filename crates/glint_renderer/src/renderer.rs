//! Frame-level render driver.
//!
//! Two modes:
//! - progressive full trace: `samples` passes over the whole frame, each pass
//!   adding `trace(..) / samples` into a running accumulator
//! - single-bounce preview: nearest hit only, written as raw albedo

use std::time::Instant;

use glint_core::Scene;
use glint_math::Color;
use rand::RngCore;
use thiserror::Error;

use crate::sink::{color_to_rgba, PixelSink};
use crate::tracer::{trace, MAX_BOUNCES};
use crate::Camera;

/// Errors raised before a render starts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("Frame has no pixels ({width}x{height})")]
    EmptyFrame { width: u32, height: u32 },

    #[error("Sample count must be at least 1")]
    NoSamples,
}

pub type RenderResult<T> = Result<T, RenderError>;

/// Render configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Full-frame passes to average
    pub samples: u32,
    /// Bounce budget per camera ray
    pub max_depth: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            samples: 100,
            max_depth: MAX_BOUNCES,
        }
    }
}

impl RenderConfig {
    /// Set the sample count.
    pub fn with_samples(mut self, samples: u32) -> Self {
        self.samples = samples;
        self
    }

    /// Set the bounce budget.
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Running per-pixel mean in full precision.
pub struct Accumulator {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl Accumulator {
    /// Create a new accumulator filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the accumulated value at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Add `color` to the pixel at (x, y).
    pub fn add(&mut self, x: u32, y: u32, color: Color) {
        let i = self.index(x, y);
        self.pixels[i] += color;
    }

    /// Write every pixel to `sink` as opaque RGBA.
    pub fn write_to<S: PixelSink + ?Sized>(&self, sink: &mut S) {
        for y in 0..self.height {
            for x in 0..self.width {
                sink.put(x, y, color_to_rgba(self.get(x, y)));
            }
        }
    }
}

fn check_frame<S: PixelSink + ?Sized>(sink: &S) -> RenderResult<(u32, u32)> {
    let (width, height) = (sink.width(), sink.height());
    if width == 0 || height == 0 {
        return Err(RenderError::EmptyFrame { width, height });
    }
    Ok((width, height))
}

/// Progressive full trace into `sink`.
pub fn render<S: PixelSink + ?Sized>(
    camera: &Camera,
    scene: &Scene,
    config: &RenderConfig,
    sink: &mut S,
    rng: &mut dyn RngCore,
) -> RenderResult<()> {
    render_with_progress(camera, scene, config, sink, rng, |_, _| {})
}

/// Progressive full trace, calling `on_sample(done, total)` after each pass.
///
/// Passes run outermost, so the accumulator only holds the final mean once
/// every pass has finished. The sink is written exactly once, at the end.
///
/// Accumulation stays in f64 until that write. A dim surface contributing
/// well under one 8-bit step per pass still shows up in the mean, where a
/// per-pass byte buffer would round each contribution away.
pub fn render_with_progress<S, F>(
    camera: &Camera,
    scene: &Scene,
    config: &RenderConfig,
    sink: &mut S,
    rng: &mut dyn RngCore,
    mut on_sample: F,
) -> RenderResult<()>
where
    S: PixelSink + ?Sized,
    F: FnMut(u32, u32),
{
    let (width, height) = check_frame(sink)?;
    if config.samples == 0 {
        return Err(RenderError::NoSamples);
    }

    log::info!(
        "Rendering {}x{} @ {} spp, depth {} ({} objects)",
        width,
        height,
        config.samples,
        config.max_depth,
        scene.len()
    );
    let start = Instant::now();

    let mut accum = Accumulator::new(width, height);
    let weight = config.samples as f64;
    let mut non_finite = 0usize;

    for s in 1..=config.samples {
        for x in 0..width {
            for y in 0..height {
                let ray = camera.primary_ray(x, y, width, height);
                let color = trace(&ray, scene, config.max_depth, rng);
                if !color.is_finite() {
                    non_finite += 1;
                }
                accum.add(x, y, color / weight);
            }
        }
        log::debug!("{} / {}", s, config.samples);
        on_sample(s, config.samples);
    }

    if non_finite > 0 {
        log::warn!("{} samples produced non-finite radiance", non_finite);
    }

    accum.write_to(sink);
    log::info!("Rendered in {:?}", start.elapsed());
    Ok(())
}

/// Single-bounce preview into `sink`.
///
/// Each pixel that sees a sphere gets that sphere's albedo scaled to 0-255.
/// Pixels that see nothing are left as they were.
pub fn render_preview<S: PixelSink + ?Sized>(
    camera: &Camera,
    scene: &Scene,
    sink: &mut S,
) -> RenderResult<()> {
    let (width, height) = check_frame(sink)?;

    for x in 0..width {
        for y in 0..height {
            let ray = camera.primary_ray(x, y, width, height);
            if let Some(hit) = scene.nearest_hit(&ray) {
                sink.put(x, y, color_to_rgba(hit.material().color * 255.0));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RgbaBuffer;
    use glint_core::{Material, Sphere};
    use glint_math::Vec3;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Camera at the origin looking down +Z.
    fn origin_camera() -> Camera {
        Camera::new().with_position(Vec3::ZERO).with_field_of_view(10.0)
    }

    fn red_scene() -> Scene {
        let mut scene = Scene::new();
        scene
            .add(Sphere::new(
                Vec3::new(0.0, 0.0, 5.0),
                2.0,
                Material::new(Color::new(1.0, 0.0, 0.0), 1.0),
            ))
            .unwrap();
        scene
    }

    #[test]
    fn test_preview_writes_albedo_and_skips_background() {
        let scene = red_scene();
        let mut buffer = RgbaBuffer::new(10, 10);

        render_preview(&origin_camera(), &scene, &mut buffer).unwrap();

        assert_eq!(buffer.get(5, 5), [255, 0, 0, 255]);
        // Corner rays miss the sphere and stay transparent
        assert_eq!(buffer.get(0, 0), [0, 0, 0, 0]);
        assert_eq!(buffer.get(9, 0), [0, 0, 0, 0]);
    }

    #[test]
    fn test_preview_ignores_samples_and_emission() {
        let mut scene = Scene::new();
        scene
            .add(Sphere::new(
                Vec3::new(0.0, 0.0, 5.0),
                2.0,
                Material::new(Color::new(0.2, 0.4, 0.6), 0.0)
                    .with_emission(Color::splat(255.0), 5.0),
            ))
            .unwrap();
        let mut buffer = RgbaBuffer::new(10, 10);

        render_preview(&origin_camera(), &scene, &mut buffer).unwrap();
        assert_eq!(buffer.get(5, 5), [51, 102, 153, 255]);
    }

    #[test]
    fn test_full_render_averages_emission() {
        let mut scene = Scene::new();
        scene
            .add(Sphere::new(
                Vec3::new(0.0, 0.0, 5.0),
                2.0,
                Material::new(Color::ZERO, 0.0).with_emission(Color::new(255.0, 0.0, 0.0), 1.0),
            ))
            .unwrap();
        let mut buffer = RgbaBuffer::new(10, 10);
        let mut rng = StdRng::seed_from_u64(42);
        let config = RenderConfig::default().with_samples(4);

        render(&origin_camera(), &scene, &config, &mut buffer, &mut rng).unwrap();

        assert_eq!(buffer.get(5, 5), [255, 0, 0, 255]);
        // Background is black but opaque in full mode
        assert_eq!(buffer.get(0, 0), [0, 0, 0, 255]);
    }

    #[test]
    fn test_dim_contribution_survives_many_samples() {
        let mut scene = Scene::new();
        scene
            .add(Sphere::new(
                Vec3::new(0.0, 0.0, 5.0),
                2.0,
                Material::new(Color::ZERO, 0.0).with_emission(Color::splat(30.0), 1.0),
            ))
            .unwrap();
        let mut buffer = RgbaBuffer::new(1, 1);
        let mut rng = StdRng::seed_from_u64(3);
        // 0.3 per pass, below half a byte step
        let config = RenderConfig::default().with_samples(100);

        render(&origin_camera(), &scene, &config, &mut buffer, &mut rng).unwrap();
        assert_eq!(buffer.get(0, 0), [30, 30, 30, 255]);
    }

    #[test]
    fn test_progress_reports_every_sample() {
        let scene = red_scene();
        let mut buffer = RgbaBuffer::new(4, 3);
        let mut rng = StdRng::seed_from_u64(1);
        let config = RenderConfig::default().with_samples(3).with_max_depth(2);

        let mut seen = Vec::new();
        render_with_progress(&origin_camera(), &scene, &config, &mut buffer, &mut rng, |s, n| {
            seen.push((s, n))
        })
        .unwrap();

        assert_eq!(seen, vec![(1, 3), (2, 3), (3, 3)]);
    }

    #[test]
    fn test_seeded_renders_match() {
        let mut scene = red_scene();
        scene
            .add(Sphere::new(
                Vec3::new(0.0, -6.0, 5.0),
                3.0,
                Material::new(Color::splat(0.5), 0.8).with_emission(Color::splat(255.0), 1.0),
            ))
            .unwrap();
        let config = RenderConfig::default().with_samples(3);

        let run = |seed| {
            let mut buffer = RgbaBuffer::new(8, 8);
            let mut rng = StdRng::seed_from_u64(seed);
            render(&origin_camera(), &scene, &config, &mut buffer, &mut rng).unwrap();
            buffer
        };
        assert_eq!(run(9), run(9));
    }

    #[test]
    fn test_rejects_empty_frame_and_zero_samples() {
        let scene = red_scene();
        let mut rng = StdRng::seed_from_u64(0);

        let mut empty = RgbaBuffer::new(0, 5);
        assert_eq!(
            render(&origin_camera(), &scene, &RenderConfig::default(), &mut empty, &mut rng),
            Err(RenderError::EmptyFrame { width: 0, height: 5 })
        );
        assert_eq!(
            render_preview(&origin_camera(), &scene, &mut empty),
            Err(RenderError::EmptyFrame { width: 0, height: 5 })
        );

        let mut buffer = RgbaBuffer::new(2, 2);
        let config = RenderConfig::default().with_samples(0);
        assert_eq!(
            render(&origin_camera(), &scene, &config, &mut buffer, &mut rng),
            Err(RenderError::NoSamples)
        );
        // Nothing was written
        assert_eq!(buffer, RgbaBuffer::new(2, 2));
    }

    #[test]
    fn test_accumulator() {
        let mut accum = Accumulator::new(2, 2);
        accum.add(1, 0, Color::new(1.0, 2.0, 3.0));
        accum.add(1, 0, Color::new(1.0, 2.0, 3.0));
        assert_eq!(accum.get(1, 0), Color::new(2.0, 4.0, 6.0));
        assert_eq!(accum.get(0, 1), Color::ZERO);

        let mut buffer = RgbaBuffer::new(2, 2);
        accum.write_to(&mut buffer);
        assert_eq!(buffer.get(1, 0), [2, 4, 6, 255]);
        assert_eq!(buffer.get(0, 0), [0, 0, 0, 255]);
    }
}
