//! Declarative scene description.
//!
//! This is the serialized form of a scene: plain data that can be written by
//! hand as JSON, checked, and then turned into renderable surfaces by the
//! renderer crate.

use lumen_math::{Axis, Vec3};
use serde::{Deserialize, Serialize};

use crate::{Color, DirectionalLight, Material, PointLight};

/// The window through which primary rays leave the eye.
///
/// The eye sits at the origin looking down -z; the view plane is perpendicular
/// to the z axis at `z` (negative) and spans `left..right`, `bottom..top`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewPlane {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
    pub z: f32,
}

impl ViewPlane {
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.top - self.bottom
    }
}

impl Default for ViewPlane {
    fn default() -> Self {
        Self {
            top: 10.0,
            bottom: -10.0,
            left: -10.0,
            right: 10.0,
            z: -20.0,
        }
    }
}

/// One surface of the scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShapeDescription {
    Sphere {
        center: Vec3,
        radius: f32,
        material: Material,
    },
    Plane {
        point: Vec3,
        normal: Vec3,
        material: Material,
    },
    /// An axis-aligned rectangle given by opposite corners. One axis is
    /// expected to be flat; `normal` is the facing direction.
    Rectangle {
        min: Vec3,
        max: Vec3,
        normal: Vec3,
        material: Material,
    },
    /// A rectangle whose material is tinted by an image. `s_axis` and
    /// `t_axis` pick the world axes mapped to horizontal and vertical
    /// texture coordinates.
    TexturedRectangle {
        min: Vec3,
        max: Vec3,
        normal: Vec3,
        material: Material,
        texture: String,
        s_axis: Axis,
        t_axis: Axis,
    },
}

impl ShapeDescription {
    /// Short name of the shape kind, for logs and errors.
    pub fn kind(&self) -> &'static str {
        match self {
            ShapeDescription::Sphere { .. } => "sphere",
            ShapeDescription::Plane { .. } => "plane",
            ShapeDescription::Rectangle { .. } => "rectangle",
            ShapeDescription::TexturedRectangle { .. } => "textured_rectangle",
        }
    }
}

/// A complete scene: environment, surfaces and lights.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SceneDescription {
    /// Color of rays that escape the scene
    #[serde(default)]
    pub background: Color,

    /// Light applied to every surface's ambient term
    #[serde(default)]
    pub ambient_light: Color,

    #[serde(default)]
    pub view_plane: ViewPlane,

    #[serde(default)]
    pub shapes: Vec<ShapeDescription>,

    #[serde(default)]
    pub point_lights: Vec<PointLight>,

    #[serde(default)]
    pub directional_lights: Vec<DirectionalLight>,
}

impl SceneDescription {
    /// Create an empty scene with the default view plane.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a shape.
    pub fn add_shape(&mut self, shape: ShapeDescription) {
        self.shapes.push(shape);
    }

    /// Add a point light.
    pub fn add_point_light(&mut self, light: PointLight) {
        self.point_lights.push(light);
    }

    /// Iterate over the texture paths referenced by shapes, in order.
    pub fn texture_paths(&self) -> impl Iterator<Item = &str> {
        self.shapes.iter().filter_map(|shape| match shape {
            ShapeDescription::TexturedRectangle { texture, .. } => Some(texture.as_str()),
            _ => None,
        })
    }
}
