//! Axis-aligned rectangles, plain and textured.

use std::sync::Arc;

use lumen_core::{Material, Texture};
use lumen_math::{Aabb, Axis, Ray, Vec3, EPSILON};

use crate::plane::plane_crossing;
use crate::surface::{Intersection, Surface};

/// A bounded patch of a plane.
///
/// The patch is the part of the plane (through the bounds' max corner, facing
/// `normal`) that lies inside `bounds`. One axis of `bounds` is normally flat.
#[derive(Debug, Clone)]
pub struct Rectangle {
    bounds: Aabb,
    normal: Vec3,
    material: Material,
}

impl Rectangle {
    /// Create a rectangle spanning two opposite corners.
    pub fn new(min: Vec3, max: Vec3, normal: Vec3, material: Material) -> Self {
        Self {
            bounds: Aabb::from_corners(min, max),
            normal: normal.normalize_or_zero(),
            material,
        }
    }

    pub fn bounds(&self) -> &Aabb {
        &self.bounds
    }

    /// Plane hit, kept only if it falls within the bounds (give or take
    /// `EPSILON` on every axis).
    fn hit(&self, ray: &Ray) -> Option<(f32, Vec3)> {
        let t = plane_crossing(self.bounds.max_corner(), self.normal, ray)?;
        let point = ray.at(t);

        self.bounds.contains_point(point, EPSILON).then_some((t, point))
    }
}

impl Surface for Rectangle {
    fn intersect(&self, ray: &Ray) -> Option<Intersection<'_>> {
        let (t, point) = self.hit(ray)?;
        Some(Intersection::new(t, point, self))
    }

    fn normal_at(&self, _point: Vec3) -> Vec3 {
        self.normal
    }

    fn material_at(&self, _point: Vec3) -> Material {
        self.material
    }
}

/// A rectangle with an image stretched across it.
///
/// `s_axis` and `t_axis` pick which world axes run along the image's width and
/// height; the image spans the rectangle's full extent on both.
#[derive(Debug, Clone)]
pub struct TexturedRectangle {
    rect: Rectangle,
    texture: Arc<Texture>,
    s_axis: Axis,
    t_axis: Axis,
}

impl TexturedRectangle {
    pub fn new(rect: Rectangle, texture: Arc<Texture>, s_axis: Axis, t_axis: Axis) -> Self {
        Self {
            rect,
            texture,
            s_axis,
            t_axis,
        }
    }

    /// Texture coordinates of a point on the rectangle.
    pub fn texture_coords(&self, point: Vec3) -> (f32, f32) {
        let bounds = self.rect.bounds();
        let s = bounds.axis_interval(self.s_axis).lerp_param(self.s_axis.of(point));
        let t = bounds.axis_interval(self.t_axis).lerp_param(self.t_axis.of(point));
        (s, t)
    }
}

impl Surface for TexturedRectangle {
    fn intersect(&self, ray: &Ray) -> Option<Intersection<'_>> {
        let (t, point) = self.rect.hit(ray)?;
        Some(Intersection::new(t, point, self))
    }

    fn normal_at(&self, point: Vec3) -> Vec3 {
        self.rect.normal_at(point)
    }

    fn material_at(&self, point: Vec3) -> Material {
        let (s, t) = self.texture_coords(point);
        self.rect.material.textured(self.texture.sample(s, t))
    }
}
