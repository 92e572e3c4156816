//! Phong-style surface materials.

use lumen_math::Vec3;
use serde::{Deserialize, Serialize};

/// Color type alias (RGB in x, y, z; unclamped while shading)
pub type Color = Vec3;

/// True if every channel is exactly zero.
///
/// Material terms are switched on and off by this test; any nonzero channel
/// enables the term.
#[inline]
pub fn is_black(color: Color) -> bool {
    color == Color::ZERO
}

/// Surface response to light.
///
/// Every color term multiplies the matching light contribution per channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Material {
    /// Scales the scene's ambient light
    pub ambient: Color,
    /// Lambertian response to point lights
    pub diffuse: Color,
    /// Highlight color; also the mirror reflection weight
    pub specular: Color,
    /// Straight-through transmission weight (zero means opaque)
    pub refracted: Color,
    /// Self-luminous color, added regardless of lighting
    pub emission: Color,
    /// Phong exponent for highlights
    pub shininess: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ambient: Color::ZERO,
            diffuse: Color::ZERO,
            specular: Color::ZERO,
            refracted: Color::ZERO,
            emission: Color::ZERO,
            shininess: 1.0,
        }
    }
}

impl Material {
    /// A matte material whose ambient and diffuse terms share one color.
    pub fn matte(color: Color) -> Self {
        Self {
            ambient: color,
            diffuse: color,
            ..Default::default()
        }
    }

    /// A perfect mirror.
    pub fn mirror() -> Self {
        Self {
            specular: Color::ONE,
            shininess: 1000.0,
            ..Default::default()
        }
    }

    pub fn with_specular(mut self, specular: Color, shininess: f32) -> Self {
        self.specular = specular;
        self.shininess = shininess;
        self
    }

    pub fn with_refracted(mut self, refracted: Color) -> Self {
        self.refracted = refracted;
        self
    }

    pub fn with_emission(mut self, emission: Color) -> Self {
        self.emission = emission;
        self
    }

    pub fn has_diffuse(&self) -> bool {
        !is_black(self.diffuse)
    }

    pub fn has_specular(&self) -> bool {
        !is_black(self.specular)
    }

    /// Check if light passes through this material.
    pub fn is_transparent(&self) -> bool {
        !is_black(self.refracted)
    }

    /// Apply a texture sample.
    ///
    /// The texel tints ambient, diffuse and emission. Specular highlights and
    /// transparency keep their own colors.
    pub fn textured(mut self, texel: Color) -> Self {
        self.ambient *= texel;
        self.diffuse *= texel;
        self.emission *= texel;
        self
    }
}
