//! Infinite plane primitive.

use lumen_core::Material;
use lumen_math::{Ray, Vec3, EPSILON};

use crate::surface::{Intersection, Surface};

/// A plane through `point` facing along `normal`.
#[derive(Debug, Clone)]
pub struct Plane {
    point: Vec3,
    normal: Vec3,
    material: Material,
}

impl Plane {
    /// Create a new plane; `normal` is normalized here.
    pub fn new(point: Vec3, normal: Vec3, material: Material) -> Self {
        Self {
            point,
            normal: normal.normalize_or_zero(),
            material,
        }
    }
}

/// Ray parameter where `ray` crosses the plane through `point` with `normal`.
///
/// `None` when the ray runs parallel to the plane or the crossing is closer
/// than `EPSILON`. The normal need not be unit length, and its sign does not
/// matter.
pub(crate) fn plane_crossing(point: Vec3, normal: Vec3, ray: &Ray) -> Option<f32> {
    let dot_dn = ray.direction().dot(normal);
    if dot_dn == 0.0 {
        return None;
    }

    let t = (point - ray.origin()).dot(normal) / dot_dn;
    if t < EPSILON {
        return None;
    }

    Some(t)
}

impl Surface for Plane {
    fn intersect(&self, ray: &Ray) -> Option<Intersection<'_>> {
        let t = plane_crossing(self.point, self.normal, ray)?;
        Some(Intersection::new(t, ray.at(t), self))
    }

    fn normal_at(&self, _point: Vec3) -> Vec3 {
        self.normal
    }

    fn material_at(&self, _point: Vec3) -> Material {
        self.material
    }
}
