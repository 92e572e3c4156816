//! Light sources.

use lumen_math::Vec3;
use serde::{Deserialize, Serialize};

use crate::Color;

/// An infinitesimal light at a fixed location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLight {
    pub color: Color,
    pub location: Vec3,
}

impl PointLight {
    pub fn new(color: Color, location: Vec3) -> Self {
        Self { color, location }
    }
}

/// A light infinitely far away, shining along `direction`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DirectionalLight {
    pub color: Color,
    /// Unit vector the light travels along
    pub direction: Vec3,
}

impl DirectionalLight {
    /// Create a directional light; `direction` is normalized here.
    pub fn new(color: Color, direction: Vec3) -> Self {
        Self {
            color,
            direction: direction.normalize_or_zero(),
        }
    }
}
