//! Scene container for the path tracer.
//!
//! A scene is an append-only, ordered list of spheres. Intersection is a
//! brute-force scan in insertion order.

use glint_math::{Ray, Vec3};
use thiserror::Error;

use crate::sphere::{CollisionInfo, Sphere, SphereId};

/// Errors raised when inserting an object into a scene.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("Sphere radius must be positive and finite, got {radius}")]
    InvalidRadius { radius: f64 },

    #[error("Sphere center must be finite, got {center}")]
    NonFiniteCenter { center: Vec3 },
}

pub type SceneResult<T> = Result<T, SceneError>;

/// An ordered collection of spheres.
#[derive(Debug, Default)]
pub struct Scene {
    objects: Vec<Sphere>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sphere, returning its id.
    ///
    /// Rejects spheres the tracer cannot make sense of (non-positive or
    /// non-finite radius, non-finite center).
    pub fn add(&mut self, sphere: Sphere) -> SceneResult<SphereId> {
        if !(sphere.radius.is_finite() && sphere.radius > 0.0) {
            return Err(SceneError::InvalidRadius {
                radius: sphere.radius,
            });
        }
        if !sphere.center.is_finite() {
            return Err(SceneError::NonFiniteCenter {
                center: sphere.center,
            });
        }

        let id = sphere.id();
        log::debug!(
            "Added {} at {} (r={})",
            id,
            sphere.center,
            sphere.radius
        );
        self.objects.push(sphere);
        Ok(id)
    }

    /// All objects, in insertion order.
    pub fn objects(&self) -> &[Sphere] {
        &self.objects
    }

    /// Look up a sphere by id.
    pub fn get(&self, id: SphereId) -> Option<&Sphere> {
        self.objects.iter().find(|s| s.id() == id)
    }

    /// Mutable access for editing a sphere in place between frames.
    pub fn get_mut(&mut self, id: SphereId) -> Option<&mut Sphere> {
        self.objects.iter_mut().find(|s| s.id() == id)
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Find the nearest intersected sphere along `ray`.
    ///
    /// A candidate replaces the current best when its distance is less than
    /// or *equal to* the best, so on exact ties the later object wins.
    pub fn nearest_hit(&self, ray: &Ray) -> Option<CollisionInfo<'_>> {
        let mut best: Option<CollisionInfo<'_>> = None;

        for object in &self.objects {
            let current = object.calc_hit(ray);
            if !current.intersects {
                continue;
            }
            let replace = match &best {
                Some(b) => replaces_best(b.distance, current.distance),
                None => true,
            };
            if replace {
                best = Some(current);
            }
        }

        best
    }
}

/// A NaN on either side compares false and keeps the current best.
#[inline]
fn replaces_best(best: f64, candidate: f64) -> bool {
    best >= candidate
}
