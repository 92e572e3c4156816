//! Sphere primitive for ray tracing.

use lumen_core::Material;
use lumen_math::{Ray, Vec3, EPSILON};

use crate::surface::{Intersection, Surface};

/// A sphere primitive.
#[derive(Debug, Clone)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Material,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }
}

impl Surface for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<Intersection<'_>> {
        let d = ray.direction();
        let p = ray.origin() - self.center;

        let norm_d = d.length_squared();
        if norm_d == 0.0 {
            return None;
        }

        // |p + t d|^2 = r^2, with the common factor of 2 divided out
        let dot_dp = d.dot(p);
        let discriminant = dot_dp * dot_dp - norm_d * (p.length_squared() - self.radius * self.radius);
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        let near = (-dot_dp - sqrtd) / norm_d;
        let far = (-dot_dp + sqrtd) / norm_d;

        // Prefer the near root; from inside the sphere only the far one is ahead
        let t = if near >= EPSILON {
            near
        } else if far >= EPSILON {
            far
        } else {
            return None;
        };

        Some(Intersection::new(t, ray.at(t), self))
    }

    fn normal_at(&self, point: Vec3) -> Vec3 {
        (point - self.center) / self.radius
    }

    fn material_at(&self, _point: Vec3) -> Material {
        self.material
    }
}
