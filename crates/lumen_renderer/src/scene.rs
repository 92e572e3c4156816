//! Renderable scene: surfaces and lights ready for tracing.

use lumen_core::{
    Color, DirectionalLight, PointLight, SceneDescription, ShapeDescription, TextureCache,
    TextureResult, ViewPlane,
};
use lumen_math::Ray;

use crate::surface::{closest_hit, Intersection, Surface};
use crate::{Plane, Rectangle, Sphere, TexturedRectangle};

/// Everything a trace reads. Never modified while rendering.
pub struct Scene {
    /// Color of rays that escape, and of rays out of depth budget
    pub background: Color,
    /// Scales every surface's ambient term
    pub ambient_light: Color,
    pub view_plane: ViewPlane,
    pub point_lights: Vec<PointLight>,
    pub directional_lights: Vec<DirectionalLight>,
    objects: Vec<Box<dyn Surface>>,
}

impl Scene {
    /// Create an empty scene with the default view plane.
    pub fn new(background: Color, ambient_light: Color) -> Self {
        Self {
            background,
            ambient_light,
            view_plane: ViewPlane::default(),
            point_lights: Vec::new(),
            directional_lights: Vec::new(),
            objects: Vec::new(),
        }
    }

    /// Build the surfaces of a scene description.
    ///
    /// Textures are pulled through `textures`, so pictures that share a file
    /// share the decoded image. Fails only if a texture cannot be loaded.
    pub fn from_description(
        description: &SceneDescription,
        textures: &mut TextureCache,
    ) -> TextureResult<Self> {
        let mut scene = Scene::new(description.background, description.ambient_light);
        scene.view_plane = description.view_plane;
        scene.point_lights = description.point_lights.clone();
        scene.directional_lights = description.directional_lights.clone();

        for shape in &description.shapes {
            let surface: Box<dyn Surface> = match shape {
                ShapeDescription::Sphere {
                    center,
                    radius,
                    material,
                } => Box::new(Sphere::new(*center, *radius, *material)),
                ShapeDescription::Plane {
                    point,
                    normal,
                    material,
                } => Box::new(Plane::new(*point, *normal, *material)),
                ShapeDescription::Rectangle {
                    min,
                    max,
                    normal,
                    material,
                } => Box::new(Rectangle::new(*min, *max, *normal, *material)),
                ShapeDescription::TexturedRectangle {
                    min,
                    max,
                    normal,
                    material,
                    texture,
                    s_axis,
                    t_axis,
                } => {
                    let rect = Rectangle::new(*min, *max, *normal, *material);
                    let texture = textures.load(texture)?;
                    Box::new(TexturedRectangle::new(rect, texture, *s_axis, *t_axis))
                }
            };
            scene.add(surface);
        }

        log::info!(
            "Scene ready: {} objects, {} point lights, {} directional lights, {} textures",
            scene.len(),
            scene.point_lights.len(),
            scene.directional_lights.len(),
            textures.len()
        );

        Ok(scene)
    }

    /// Add a surface.
    pub fn add(&mut self, object: Box<dyn Surface>) {
        self.objects.push(object);
    }

    pub fn add_point_light(&mut self, light: PointLight) {
        self.point_lights.push(light);
    }

    pub fn add_directional_light(&mut self, light: DirectionalLight) {
        self.directional_lights.push(light);
    }

    /// Get the number of surfaces.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the scene has no surfaces.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// The nearest surface hit along `ray`, if any.
    pub fn closest_hit(&self, ray: &Ray) -> Option<Intersection<'_>> {
        closest_hit(&self.objects, ray)
    }
}
