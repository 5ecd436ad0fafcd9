use anyhow::{Context, Result};
use clap::Parser;
use glint_core::{Material, Scene, Sphere};
use glint_math::{Color, Vec3};
use glint_renderer::{render_preview, render_with_progress, Camera, CameraControl, RenderConfig};
use log::LevelFilter;
use rand::rngs::StdRng;
use rand::SeedableRng;

mod cli;

use cli::Args;

/// Build the demo scene: a bright emitter above three spheres resting on a
/// large floor sphere.
fn demo_scene() -> Result<Scene> {
    let mut scene = Scene::new();

    let floor = Material::new(Color::ONE, 1.0).with_color_hex("#8c8c8c")?;
    scene.add(Sphere::new(Vec3::new(0.0, 1002.0, 10.0), 1000.0, floor))?;

    let red = Material::new(Color::ONE, 0.9).with_color_hex("#d93b3b")?;
    scene.add(Sphere::new(Vec3::new(-4.0, 0.0, 10.0), 2.0, red))?;

    let mirror = Material::default()
        .with_color(Color::splat(0.9))
        .with_roughness(0.05);
    scene.add(
        Sphere::default()
            .with_center(Vec3::new(0.0, 0.0, 12.0))
            .with_radius(2.0)
            .with_material(mirror),
    )?;

    let green = Material::new(Color::ONE, 0.5).with_color_hex("#3bd96a")?;
    scene.add(Sphere::new(Vec3::new(4.0, 0.0, 10.0), 2.0, green))?;

    let light = Material::new(Color::ZERO, 1.0).with_emissive_hex("#ffffff", 4.0)?;
    scene.add(Sphere::new(Vec3::new(0.0, -30.0, 10.0), 20.0, light))?;

    Ok(scene)
}

fn walk_camera(camera: &mut Camera, steps: &[CameraControl]) {
    for &control in steps {
        camera.press(control);
        camera.apply_movement();
        camera.release(control);
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(LevelFilter::from(args.log_level))
        .init();

    let scene = demo_scene().context("Failed to build demo scene")?;
    log::info!("Scene: {} spheres", scene.len());

    let mut camera = Camera::for_width(args.width);
    let steps: Vec<CameraControl> = args.walk.iter().copied().map(CameraControl::from).collect();
    walk_camera(&mut camera, &steps);
    log::debug!(
        "Camera at {:?}, rotation {:?}, fov {}",
        camera.position,
        camera.rotation,
        camera.field_of_view
    );

    let mut image = image::RgbaImage::new(args.width, args.height);

    if args.preview {
        render_preview(&camera, &scene, &mut image).context("Preview render failed")?;
    } else {
        let config = RenderConfig::default()
            .with_samples(args.samples)
            .with_max_depth(args.max_depth);
        let mut rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let step = (config.samples / 10).max(1);
        render_with_progress(&camera, &scene, &config, &mut image, &mut rng, |done, total| {
            if done % step == 0 || done == total {
                log::info!("Sample {}/{}", done, total);
            }
        })
        .context("Render failed")?;
    }

    image
        .save(&args.output)
        .with_context(|| format!("Failed to write {}", args.output))?;
    log::info!("Saved {}", args.output);

    Ok(())
}
