use crate::Vec3;

/// A ray in 3D space with an origin and a direction.
///
/// The direction is stored as given. Shadow rays rely on this: a ray aimed
/// from a surface point at a light with an unnormalized direction reaches the
/// light exactly at `t = 1`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Get the direction vector of the ray.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// A ray starting at `origin` that keeps this ray's direction.
    #[inline]
    pub fn continued_from(&self, origin: Vec3) -> Ray {
        Ray::new(origin, self.direction)
    }
}
