use crate::{Axis, Interval, Vec3};

/// Axis-Aligned Bounding Box.
///
/// An AABB is defined by three intervals (one per axis) that bound a 3D volume.
/// Flat boxes are allowed: a rectangle lying in a plane of constant z has a
/// zero-size z interval.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    pub x: Interval,
    pub y: Interval,
    pub z: Interval,
}

impl Aabb {
    /// Create an AABB from two opposite corner points.
    ///
    /// Unlike a BVH box this is not padded, since surfaces use the exact
    /// extents for texture parameterization.
    pub fn from_corners(a: Vec3, b: Vec3) -> Self {
        Self {
            x: Interval::spanning(a.x, b.x),
            y: Interval::spanning(a.y, b.y),
            z: Interval::spanning(a.z, b.z),
        }
    }

    /// Get the interval for a specific axis.
    pub fn axis_interval(&self, axis: Axis) -> Interval {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// The corner with the largest coordinate on every axis.
    pub fn max_corner(&self) -> Vec3 {
        Vec3::new(self.x.max, self.y.max, self.z.max)
    }

    /// Returns true if `p` lies inside the box grown by `tolerance` on every side.
    pub fn contains_point(&self, p: Vec3, tolerance: f32) -> bool {
        let grow = 2.0 * tolerance;
        self.x.expand(grow).contains(p.x)
            && self.y.expand(grow).contains(p.y)
            && self.z.expand(grow).contains(p.z)
    }
}
