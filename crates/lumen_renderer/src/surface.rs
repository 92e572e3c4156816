//! Surface trait and Intersection for ray-object intersection.

use std::fmt;

use lumen_core::Material;
use lumen_math::{Ray, Vec3};

/// Trait for objects that can be hit by rays.
///
/// Only the hit test runs for every object a ray is tested against. Normal
/// and material are asked for afterwards, and only on the winning hit.
pub trait Surface: Send + Sync {
    /// Find the nearest hit along `ray` with `t >= EPSILON`.
    ///
    /// Hits at or behind the ray origin are ignored, so a ray leaving a
    /// surface does not immediately hit that same surface again.
    fn intersect(&self, ray: &Ray) -> Option<Intersection<'_>>;

    /// Unit surface normal at a point previously returned by `intersect`.
    fn normal_at(&self, point: Vec3) -> Vec3;

    /// Material at a point previously returned by `intersect`, with any
    /// texture already applied.
    fn material_at(&self, point: Vec3) -> Material;
}

/// Record of a ray-surface intersection.
#[derive(Clone, Copy)]
pub struct Intersection<'a> {
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Point of intersection
    pub point: Vec3,
    /// The surface that was hit
    surface: &'a dyn Surface,
}

impl<'a> Intersection<'a> {
    pub fn new(t: f32, point: Vec3, surface: &'a dyn Surface) -> Self {
        Self { t, point, surface }
    }

    /// Unit normal of the hit surface at the hit point.
    pub fn normal(&self) -> Vec3 {
        self.surface.normal_at(self.point)
    }

    /// Material of the hit surface at the hit point.
    pub fn material(&self) -> Material {
        self.surface.material_at(self.point)
    }
}

impl fmt::Debug for Intersection<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Intersection")
            .field("t", &self.t)
            .field("point", &self.point)
            .finish_non_exhaustive()
    }
}

/// Find the nearest hit among `objects`.
///
/// Every object is tested; losing intersections are dropped as soon as a
/// nearer one turns up. On equal `t` the earlier object wins.
pub fn closest_hit<'a>(objects: &'a [Box<dyn Surface>], ray: &Ray) -> Option<Intersection<'a>> {
    let mut closest: Option<Intersection<'a>> = None;

    for object in objects {
        if let Some(hit) = object.intersect(ray) {
            if closest.map_or(true, |best| hit.t < best.t) {
                closest = Some(hit);
            }
        }
    }

    closest
}
