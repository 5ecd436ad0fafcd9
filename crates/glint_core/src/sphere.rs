//! Sphere primitive and its ray intersection test.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use glint_math::{Ray, Vec3};

use crate::Material;

static NEXT_SPHERE_ID: AtomicUsize = AtomicUsize::new(0);

/// Process-unique sphere identifier, assigned at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SphereId(usize);

impl SphereId {
    fn next() -> Self {
        Self(NEXT_SPHERE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for SphereId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sphere#{}", self.0)
    }
}

/// A sphere with its own material.
///
/// Not `Clone`: every sphere keeps a distinct [`SphereId`].
#[derive(Debug)]
pub struct Sphere {
    id: SphereId,
    pub center: Vec3,
    pub radius: f64,
    pub material: Material,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f64, material: Material) -> Self {
        Self {
            id: SphereId::next(),
            center,
            radius,
            material,
        }
    }

    /// Set the center.
    pub fn with_center(mut self, center: Vec3) -> Self {
        self.center = center;
        self
    }

    /// Set the radius.
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Set the material.
    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    /// Identity of this sphere.
    pub fn id(&self) -> SphereId {
        self.id
    }

    /// Intersect `ray` with this sphere.
    ///
    /// Always returns a populated record. Only `intersects` is meaningful on a
    /// miss; the other fields hold whatever the formula produced.
    ///
    /// The near root is `projected - sqrt(|r^2 - d^2 + projected^2|)`. The
    /// `abs` keeps grazing rays from producing NaN, so a near-miss can report
    /// a small positive distance.
    pub fn calc_hit(&self, ray: &Ray) -> CollisionInfo<'_> {
        let to_center = self.center - ray.origin;
        let dist_to_center = to_center.length();
        let projected = to_center.dot(ray.direction);

        let r2 = self.radius * self.radius;
        let d2 = dist_to_center * dist_to_center;
        let p2 = projected * projected;

        let distance = projected - (r2 - d2 + p2).abs().sqrt();
        let intersects = projected >= 0.0 && d2 - p2 <= r2;

        let position = ray.origin + ray.direction * distance;
        let normal = (position - self.center).normalize();

        CollisionInfo {
            intersects,
            distance,
            position,
            normal,
            object: self,
        }
    }
}

impl Default for Sphere {
    fn default() -> Self {
        Self::new(Vec3::ZERO, 1.0, Material::default())
    }
}

/// Result of a ray/sphere test.
#[derive(Clone, Copy, Debug)]
pub struct CollisionInfo<'a> {
    /// Whether the ray actually hits the sphere
    pub intersects: bool,
    /// Ray parameter of the near intersection
    pub distance: f64,
    /// Point of intersection
    pub position: Vec3,
    /// Outward unit normal at `position`
    pub normal: Vec3,
    /// The sphere that was tested
    pub object: &'a Sphere,
}

impl<'a> CollisionInfo<'a> {
    /// Material of the hit sphere.
    #[inline]
    pub fn material(&self) -> &'a Material {
        &self.object.material
    }
}
