//! Recursive light transport.
//!
//! Every surface behaves the same way: it emits `emissive_color *
//! emissive_strength` and reflects a jittered mirror ray whose returned light
//! is multiplied by the albedo. There is no environment light, so escaping
//! rays and exhausted bounce budgets contribute black.

use glint_core::{CollisionInfo, Scene};
use glint_math::{Color, Ray};
use rand::{Rng, RngCore};

/// Bounce budget used by the progressive renderer.
pub const MAX_BOUNCES: u32 = 10;

/// Compute the light arriving along `ray`.
///
/// Radiance is never clamped; values above the display range and negative
/// values (from roughness jitter on odd geometry) pass through untouched.
pub fn trace(ray: &Ray, scene: &Scene, bounces: u32, rng: &mut dyn RngCore) -> Color {
    if bounces == 0 {
        return Color::ZERO;
    }

    let Some(hit) = scene.nearest_hit(ray) else {
        return Color::ZERO;
    };

    let material = hit.material();
    let emission = material.emission();
    let bounced = scatter_ray(ray, &hit, rng);
    let incoming = trace(&bounced, scene, bounces - 1, rng);

    emission + material.color * incoming
}

/// Derive the outgoing ray at a hit.
///
/// Mirror reflection of the incoming direction, plus an independent uniform
/// draw in [-1, 1) per axis scaled by `roughness / 2`. The result is not
/// renormalized. If it ends up below the surface the whole vector is negated.
pub fn scatter_ray(ray: &Ray, hit: &CollisionInfo<'_>, rng: &mut dyn RngCore) -> Ray {
    let normal = hit.normal;
    let roughness = hit.material().roughness;

    let mut direction = ray.direction - normal * (2.0 * ray.direction.dot(normal));
    direction.x += gen_signed_unit(rng) * roughness / 2.0;
    direction.y += gen_signed_unit(rng) * roughness / 2.0;
    direction.z += gen_signed_unit(rng) * roughness / 2.0;

    if direction.dot(normal) < 0.0 {
        direction = -direction;
    }

    Ray::new(hit.position, direction)
}

/// Uniform sample in [-1, 1).
#[inline]
fn gen_signed_unit(rng: &mut dyn RngCore) -> f64 {
    rng.gen::<f64>() * 2.0 - 1.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::{Material, Sphere};
    use glint_math::Vec3;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn scene_with(sphere: Sphere) -> Scene {
        let mut scene = Scene::new();
        scene.add(sphere).unwrap();
        scene
    }

    fn camera_ray() -> Ray {
        Ray::new(Vec3::ZERO, Vec3::Z)
    }

    #[test]
    fn test_empty_scene_is_black() {
        let scene = Scene::new();
        let mut rng = StdRng::seed_from_u64(1);

        for bounces in [1, 2, MAX_BOUNCES] {
            assert_eq!(trace(&camera_ray(), &scene, bounces, &mut rng), Color::ZERO);
        }
    }

    #[test]
    fn test_zero_budget_is_black() {
        let scene = scene_with(
            Sphere::new(Vec3::new(0.0, 0.0, 5.0), 2.0, Material::default())
                .with_material(Material::default().with_emission(Color::splat(255.0), 10.0)),
        );
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(trace(&camera_ray(), &scene, 0, &mut rng), Color::ZERO);
    }

    #[test]
    fn test_single_bounce_without_emission_is_black() {
        let scene = scene_with(Sphere::new(
            Vec3::new(0.0, 0.0, 5.0),
            2.0,
            Material::new(Color::ONE, 0.0),
        ));
        let mut rng = StdRng::seed_from_u64(7);

        assert_eq!(trace(&camera_ray(), &scene, 1, &mut rng), Color::ZERO);
    }

    #[test]
    fn test_emissive_sphere_returns_emission() {
        let material = Material::new(Color::splat(0.5), 0.0)
            .with_emission(Color::new(255.0, 128.0, 0.0), 2.0);
        let scene = scene_with(Sphere::new(Vec3::new(0.0, 0.0, 5.0), 2.0, material));
        let mut rng = StdRng::seed_from_u64(7);

        let expected = Color::new(510.0, 256.0, 0.0);
        assert_eq!(trace(&camera_ray(), &scene, 1, &mut rng), expected);
        // The mirror bounce escapes, so deeper budgets add nothing
        assert_eq!(trace(&camera_ray(), &scene, MAX_BOUNCES, &mut rng), expected);
    }

    #[test]
    fn test_light_reflected_off_mirror() {
        // Mirror at z=5 facing the origin, light behind the camera at z=-5
        let mut scene = Scene::new();
        scene
            .add(Sphere::new(
                Vec3::new(0.0, 0.0, 5.0),
                1.0,
                Material::new(Color::new(0.5, 0.25, 1.0), 0.0),
            ))
            .unwrap();
        scene
            .add(Sphere::new(
                Vec3::new(0.0, 0.0, -5.0),
                1.0,
                Material::new(Color::ZERO, 0.0).with_emission(Color::splat(100.0), 1.0),
            ))
            .unwrap();
        let mut rng = StdRng::seed_from_u64(3);

        let color = trace(&camera_ray(), &scene, 2, &mut rng);
        assert!((color - Color::new(50.0, 25.0, 100.0)).length() < 1e-9, "got {:?}", color);

        // One bounce less and the light is never reached
        assert_eq!(trace(&camera_ray(), &scene, 1, &mut rng), Color::ZERO);
    }

    #[test]
    fn test_scatter_without_roughness_is_mirror() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, 5.0), 2.0, Material::new(Color::ONE, 0.0));
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.28, 0.96));
        let hit = sphere.calc_hit(&ray);
        let mut rng = StdRng::seed_from_u64(11);

        let out = scatter_ray(&ray, &hit, &mut rng);
        let n = hit.normal;
        let expected = ray.direction - n * (2.0 * ray.direction.dot(n));

        assert_eq!(out.origin, hit.position);
        assert!((out.direction - expected).length() < 1e-12);
        assert!((out.direction.length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_scatter_jitter_stays_above_surface() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, 5.0), 2.0, Material::new(Color::ONE, 1.0));
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        let hit = sphere.calc_hit(&ray);
        let mirror = Vec3::new(0.0, 0.0, -1.0);
        let mut rng = StdRng::seed_from_u64(5);

        let mut saw_non_unit = false;
        for _ in 0..256 {
            let out = scatter_ray(&ray, &hit, &mut rng);
            assert!(out.direction.dot(hit.normal) >= 0.0);
            // Each axis moves by at most roughness / 2
            let offset = out.direction - mirror;
            assert!(offset.abs().max_element() <= 0.5 + 1e-12);
            saw_non_unit |= (out.direction.length() - 1.0).abs() > 1e-6;
        }
        assert!(saw_non_unit);
    }

    #[test]
    fn test_scatter_flips_below_surface() {
        // Ray coming down onto the top of a unit sphere: normal +Z, mirror +Z
        let sphere = Sphere::new(Vec3::ZERO, 1.0, Material::new(Color::ONE, 4.0));
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), -Vec3::Z);
        let hit = sphere.calc_hit(&ray);
        assert!(hit.intersects);
        assert!((hit.normal - Vec3::Z).length() < 1e-12);

        // Always draws 0.0, i.e. a jitter of -1 * 4 / 2 on every axis
        let mut rng = StepRng::new(0, 0);
        let out = scatter_ray(&ray, &hit, &mut rng);

        // (0, 0, 1) + (-2, -2, -2) = (-2, -2, -1), below the surface, negated
        assert_eq!(out.direction, Vec3::new(2.0, 2.0, 1.0));
    }

    #[test]
    fn test_trace_is_reproducible_with_seed() {
        let mut scene = Scene::new();
        scene
            .add(Sphere::new(Vec3::new(0.0, 0.0, 5.0), 2.0, Material::new(Color::splat(0.8), 0.7)))
            .unwrap();
        scene
            .add(Sphere::new(
                Vec3::new(0.0, 0.0, -4.0),
                3.0,
                Material::new(Color::splat(0.5), 1.0).with_emission(Color::splat(255.0), 1.0),
            ))
            .unwrap();

        let run = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..16)
                .map(|_| trace(&camera_ray(), &scene, MAX_BOUNCES, &mut rng))
                .collect::<Vec<_>>()
        };
        assert_eq!(run(42), run(42));
    }
}
