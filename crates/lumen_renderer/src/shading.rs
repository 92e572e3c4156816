//! Recursive shading: the color seen along a ray.
//!
//! `trace` adds up, for the nearest surface a ray hits:
//! - ambient light scaled by the material's ambient color
//! - diffuse and specular light from every point light that reaches the hit
//! - a mirror reflection (when the material is specular)
//! - whatever lies straight behind the surface (when it is transparent)
//! - the material's own emission
//!
//! Reflected and transmitted rays recurse with one less unit of depth.
//! Colors are never clamped here.

use lumen_core::{is_black, Color, Material};
use lumen_math::{Ray, Vec3, EPSILON};

use crate::Scene;

/// How close to exactly opposite a ray must point for a directional light to
/// count as seen along it.
const DIRECTIONAL_TOLERANCE: f32 = 1e-5;

/// Compute the color seen along `ray`.
///
/// `depth` bounds the recursion; at 0 the background is returned without
/// looking at the scene. The ray direction is expected to be normalized.
pub fn trace(scene: &Scene, ray: &Ray, depth: u32) -> Color {
    if depth == 0 {
        return scene.background;
    }

    let Some(hit) = scene.closest_hit(ray) else {
        return light_along_ray(scene, ray).unwrap_or(scene.background);
    };

    let point = hit.point;
    let normal = hit.normal();
    let material = hit.material();

    let mut color = material.ambient * scene.ambient_light;

    if material.has_diffuse() || material.has_specular() {
        color += local_illumination(scene, ray, point, normal, &material, depth);
    }

    if material.has_specular() {
        let incoming = -ray.direction();
        let reflected = Ray::new(point, 2.0 * incoming.dot(normal) * normal - incoming);
        color += trace(scene, &reflected, depth - 1) * material.specular;
    }

    if material.is_transparent() {
        // Transparency passes straight through; no bending
        let transmitted = ray.continued_from(point);
        color += trace(scene, &transmitted, depth - 1) * material.refracted;
    }

    color + material.emission
}

/// Diffuse and specular light from point lights, already scaled by the
/// material's diffuse and specular colors.
fn local_illumination(
    scene: &Scene,
    ray: &Ray,
    point: Vec3,
    normal: Vec3,
    material: &Material,
    depth: u32,
) -> Color {
    let mut diffuse = Color::ZERO;
    let mut specular = Color::ZERO;
    let to_viewer = -ray.direction();

    for light in &scene.point_lights {
        let to_light = (light.location - point).normalize_or_zero();
        let cos = normal.dot(to_light);
        if cos <= 0.0 {
            // Surface faces away from the light
            continue;
        }

        // t = 1 lands on the light
        let shadow_ray = Ray::new(point, light.location - point);
        let shadow = compute_shadow(scene, &shadow_ray, 1.0, depth);
        if is_black(shadow) {
            continue;
        }

        if material.has_diffuse() {
            diffuse += cos * light.color * shadow;
        }

        if material.has_specular() {
            let ideal_reflect = 2.0 * cos * normal - to_light;
            let highlight_cos = ideal_reflect.dot(to_viewer);
            if highlight_cos > 0.0 {
                specular += highlight_cos.powf(material.shininess) * light.color * shadow;
            }
        }
    }

    diffuse * material.diffuse + specular * material.specular
}

/// How much light makes it along `shadow` up to parameter `light_t`.
///
/// White means nothing is in the way, black means an opaque surface blocks
/// the light. Each transparent surface in between multiplies in its
/// `refracted` color. A negative `light_t` puts the light at infinity.
///
/// When `depth` runs out the remaining path is treated as clear.
pub fn compute_shadow(scene: &Scene, shadow: &Ray, light_t: f32, depth: u32) -> Color {
    if depth == 0 {
        return Color::ONE;
    }

    let Some(hit) = scene.closest_hit(shadow) else {
        return Color::ONE;
    };

    if light_t >= 0.0 && hit.t > light_t {
        // Occluder is past the light
        return Color::ONE;
    }

    let material = hit.material();
    if !material.is_transparent() {
        return Color::ZERO;
    }

    let onward = shadow.continued_from(hit.point);
    compute_shadow(scene, &onward, light_t - hit.t, depth - 1) * material.refracted
}

/// Color of a light the ray points straight at, if any.
///
/// Point lights are checked first (nearest along the ray wins), then
/// directional lights the ray points exactly against.
fn light_along_ray(scene: &Scene, ray: &Ray) -> Option<Color> {
    let direction = ray.direction();
    let norm_d = direction.length_squared();
    if norm_d == 0.0 {
        return None;
    }

    let mut nearest: Option<(f32, Color)> = None;
    for light in &scene.point_lights {
        let t = (light.location - ray.origin()).dot(direction) / norm_d;
        if t <= EPSILON || ray.at(t).distance(light.location) > EPSILON {
            continue;
        }
        if nearest.map_or(true, |(best, _)| t < best) {
            nearest = Some((t, light.color));
        }
    }
    if let Some((_, color)) = nearest {
        return Some(color);
    }

    let unit = direction / norm_d.sqrt();
    scene
        .directional_lights
        .iter()
        .find(|light| unit.dot(light.direction) <= -1.0 + DIRECTIONAL_TOLERANCE)
        .map(|light| light.color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Plane, Rectangle, Sphere, TexturedRectangle};
    use lumen_math::Axis;
    use lumen_core::{DirectionalLight, PointLight};

    const BACKGROUND: Color = Color::new(0.1, 0.2, 0.3);

    fn approx(a: Color, b: Color) -> bool {
        (a - b).abs().max_element() < 1e-4
    }

    fn empty_scene() -> Scene {
        Scene::new(BACKGROUND, Color::ZERO)
    }

    fn red_sphere_scene() -> Scene {
        let mut scene = empty_scene();
        scene.add(Box::new(Sphere::new(
            Vec3::new(0.0, 0.0, -10.0),
            2.0,
            Material {
                diffuse: Color::new(1.0, 0.0, 0.0),
                ..Default::default()
            },
        )));
        scene
    }

    fn forward() -> Ray {
        Ray::new(Vec3::ZERO, Vec3::NEG_Z)
    }

    #[test]
    fn test_depth_zero_returns_background() {
        let mut scene = red_sphere_scene();
        scene.ambient_light = Color::ONE;
        scene.add_point_light(PointLight::new(Color::ONE, Vec3::new(0.0, 0.0, -1.0)));

        assert_eq!(trace(&scene, &forward(), 0), BACKGROUND);
        assert_eq!(trace(&scene, &Ray::new(Vec3::ONE, Vec3::X), 0), BACKGROUND);
    }

    #[test]
    fn test_miss_returns_background() {
        let scene = red_sphere_scene();
        assert_eq!(trace(&scene, &Ray::new(Vec3::ZERO, Vec3::Z), 5), BACKGROUND);
    }

    #[test]
    fn test_diffuse_follows_cosine() {
        let mut scene = red_sphere_scene();
        let light = PointLight::new(Color::ONE, Vec3::new(5.0, 5.0, 0.0));
        scene.add_point_light(light);

        let color = trace(&scene, &forward(), 5);

        // Hit at (0, 0, -8) with normal +z
        let to_light = (light.location - Vec3::new(0.0, 0.0, -8.0)).normalize();
        let cos = Vec3::Z.dot(to_light);
        assert!(cos > 0.0);
        assert!(approx(color, Color::new(cos, 0.0, 0.0)));
    }

    #[test]
    fn test_light_behind_surface_contributes_nothing() {
        let mut scene = red_sphere_scene();
        // Behind the hit point's tangent plane
        scene.add_point_light(PointLight::new(Color::ONE, Vec3::new(5.0, 5.0, -10.0)));

        assert_eq!(trace(&scene, &forward(), 5), Color::ZERO);
    }

    #[test]
    fn test_ambient_term() {
        let mut scene = empty_scene();
        scene.ambient_light = Color::splat(0.2);
        scene.add(Box::new(Sphere::new(
            Vec3::new(0.0, 0.0, -10.0),
            2.0,
            Material::matte(Color::new(1.0, 0.5, 0.0)),
        )));

        assert!(approx(trace(&scene, &forward(), 3), Color::new(0.2, 0.1, 0.0)));
    }

    #[test]
    fn test_mirror_at_depth_one_sees_background() {
        let mut scene = empty_scene();
        scene.ambient_light = Color::ONE;
        scene.add(Box::new(Sphere::new(
            Vec3::new(0.0, 0.0, -10.0),
            2.0,
            Material::mirror(),
        )));

        assert_eq!(trace(&scene, &forward(), 1), BACKGROUND * Color::ONE);
    }

    #[test]
    fn test_tinted_mirror_reflects_scene() {
        // Mirror facing the viewer, glowing wall behind the viewer
        let mut scene = empty_scene();
        let tint = Color::new(0.5, 1.0, 0.25);
        scene.add(Box::new(Plane::new(
            Vec3::new(0.0, 0.0, -10.0),
            Vec3::Z,
            Material {
                specular: tint,
                shininess: 50.0,
                ..Default::default()
            },
        )));
        scene.add(Box::new(Plane::new(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::NEG_Z,
            Material::default().with_emission(Color::ONE),
        )));

        // One bounce reaches the wall
        assert!(approx(trace(&scene, &forward(), 2), tint));
    }

    #[test]
    fn test_emission_added_unconditionally() {
        let mut scene = empty_scene();
        scene.add(Box::new(Sphere::new(
            Vec3::new(0.0, 0.0, -10.0),
            2.0,
            Material::default().with_emission(Color::new(0.3, 0.0, 0.3)),
        )));

        assert_eq!(trace(&scene, &forward(), 1), Color::new(0.3, 0.0, 0.3));
    }

    #[test]
    fn test_transparent_surface_passes_background() {
        let mut scene = empty_scene();
        scene.add(Box::new(Rectangle::new(
            Vec3::new(-1.0, -1.0, -5.0),
            Vec3::new(1.0, 1.0, -5.0),
            Vec3::Z,
            Material::default().with_refracted(Color::splat(0.5)),
        )));

        assert!(approx(trace(&scene, &forward(), 2), BACKGROUND * 0.5));
        // Out of depth after the pane: the transmitted ray returns background too
        assert!(approx(trace(&scene, &forward(), 1), BACKGROUND * 0.5));
    }

    #[test]
    fn test_opaque_occluder_casts_shadow() {
        let mut scene = red_sphere_scene();
        let light = Vec3::new(0.0, 0.0, 10.0);
        scene.add_point_light(PointLight::new(Color::ONE, light));

        let lit = trace(&scene, &forward(), 3);
        assert!(lit.x > 0.9);

        // Opaque pane between the sphere and the light
        scene.add(Box::new(Rectangle::new(
            Vec3::new(-5.0, -5.0, 5.0),
            Vec3::new(5.0, 5.0, 5.0),
            Vec3::NEG_Z,
            Material::default(),
        )));
        let primary = Ray::new(Vec3::new(0.0, 0.0, 4.0), Vec3::NEG_Z);
        assert_eq!(trace(&scene, &primary, 3), Color::ZERO);
    }

    #[test]
    fn test_compute_shadow_clear_path() {
        let scene = red_sphere_scene();
        let shadow = Ray::new(Vec3::new(0.0, 0.0, -8.0), Vec3::new(0.0, 0.0, 8.0));

        assert_eq!(compute_shadow(&scene, &shadow, 1.0, 5), Color::ONE);
    }

    #[test]
    fn test_compute_shadow_opaque_blocker() {
        let scene = red_sphere_scene();
        // From behind the sphere toward a light in front of it
        let from = Vec3::new(0.0, 0.0, -20.0);
        let shadow = Ray::new(from, Vec3::new(0.0, 0.0, 20.0));

        assert_eq!(compute_shadow(&scene, &shadow, 1.0, 5), Color::ZERO);
    }

    #[test]
    fn test_compute_shadow_blocker_beyond_light() {
        let scene = red_sphere_scene();
        // Light at z = -15, sphere starts at z = -12 which is past it
        let from = Vec3::new(0.0, 0.0, -20.0);
        let shadow = Ray::new(from, Vec3::new(0.0, 0.0, 5.0));

        assert_eq!(compute_shadow(&scene, &shadow, 1.0, 5), Color::ONE);
    }

    #[test]
    fn test_compute_shadow_through_transparent_panes() {
        let mut scene = empty_scene();
        for (z, tint) in [(-2.0, Color::new(0.5, 1.0, 1.0)), (-4.0, Color::new(1.0, 0.5, 0.25))] {
            scene.add(Box::new(Rectangle::new(
                Vec3::new(-1.0, -1.0, z),
                Vec3::new(1.0, 1.0, z),
                Vec3::Z,
                Material::default().with_refracted(tint),
            )));
        }
        let shadow = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -10.0));

        let light = compute_shadow(&scene, &shadow, 1.0, 5);
        assert!(approx(light, Color::new(0.5, 0.5, 0.25)));
    }

    #[test]
    fn test_compute_shadow_depth_exhaustion_is_clear() {
        let scene = red_sphere_scene();
        let shadow = Ray::new(Vec3::new(0.0, 0.0, -20.0), Vec3::new(0.0, 0.0, 20.0));

        assert_eq!(compute_shadow(&scene, &shadow, 1.0, 0), Color::ONE);
    }

    #[test]
    fn test_ray_at_point_light_sees_it() {
        let mut scene = empty_scene();
        scene.add_point_light(PointLight::new(Color::new(0.0, 0.0, 1.0), Vec3::new(0.0, 0.0, -20.0)));
        scene.add_point_light(PointLight::new(Color::new(1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, -10.0)));
        scene.add_point_light(PointLight::new(Color::new(0.0, 1.0, 0.0), Vec3::new(3.0, 0.0, -5.0)));

        // Nearest light on the ray wins
        assert_eq!(trace(&scene, &forward(), 1), Color::new(1.0, 0.0, 0.0));
        // Lights behind the origin are not seen
        assert_eq!(trace(&scene, &Ray::new(Vec3::ZERO, Vec3::Z), 1), BACKGROUND);
    }

    #[test]
    fn test_ray_against_directional_light_sees_it() {
        let mut scene = empty_scene();
        scene.add_directional_light(DirectionalLight::new(Color::splat(0.7), Vec3::NEG_Y));

        let up = Ray::new(Vec3::ZERO, Vec3::Y);
        assert_eq!(trace(&scene, &up, 1), Color::splat(0.7));

        let sideways = Ray::new(Vec3::ZERO, Vec3::new(0.1, 1.0, 0.0).normalize());
        assert_eq!(trace(&scene, &sideways, 1), BACKGROUND);
    }

    #[test]
    fn test_trace_is_deterministic() {
        let mut scene = red_sphere_scene();
        scene.ambient_light = Color::splat(0.2);
        scene.add_point_light(PointLight::new(Color::ONE, Vec3::new(5.0, 5.0, 0.0)));
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.05, -0.02, -1.0).normalize());

        let first = trace(&scene, &ray, 5);
        let second = trace(&scene, &ray, 5);
        assert_eq!(first.to_array().map(f32::to_bits), second.to_array().map(f32::to_bits));
    }

    /// Sphere with only a specular term, lit by one white light.
    fn shiny_scene(light: Vec3) -> Scene {
        let mut scene = Scene::new(Color::ZERO, Color::ZERO);
        scene.add(Box::new(Sphere::new(
            Vec3::new(0.0, 0.0, -10.0),
            2.0,
            Material::default().with_specular(Color::splat(0.5), 4.0),
        )));
        scene.add_point_light(PointLight::new(Color::ONE, light));
        scene
    }

    #[test]
    fn test_specular_highlight_off_axis_light() {
        // Hit (0, 0, -8), normal +z, light direction (0.8, 0, 0.6)
        let scene = shiny_scene(Vec3::new(4.0, 0.0, -5.0));

        // Reflected light makes cos 0.6 with the view direction
        let expected = Color::splat(0.6f32.powf(4.0) * 0.5);
        assert!(approx(trace(&scene, &forward(), 1), expected));
    }

    #[test]
    fn test_specular_highlight_peaks_at_mirror_direction() {
        let mut scene = Scene::new(Color::ZERO, Color::ZERO);
        scene.add(Box::new(Plane::new(
            Vec3::new(0.0, 0.0, -10.0),
            Vec3::Z,
            Material::default().with_specular(Color::splat(0.5), 4.0),
        )));
        // Ray hits (10, 0, -10); the light sits on the mirror direction
        scene.add_point_light(PointLight::new(Color::ONE, Vec3::new(20.0, 0.0, 0.0)));
        let ray = Ray::new(Vec3::ZERO, Vec3::new(1.0, 0.0, -1.0).normalize());

        assert!(approx(trace(&scene, &ray, 1), Color::splat(0.5)));
    }

    #[test]
    fn test_no_highlight_when_reflection_points_away() {
        let mut scene = Scene::new(Color::ZERO, Color::ZERO);
        scene.add(Box::new(Plane::new(
            Vec3::new(0.0, 0.0, -10.0),
            Vec3::Z,
            Material::default().with_specular(Color::splat(0.5), 4.0),
        )));
        // Lit side faces the light, but the light reflects away from the viewer
        scene.add_point_light(PointLight::new(Color::ONE, Vec3::new(0.0, 0.0, -5.0)));
        let ray = Ray::new(Vec3::ZERO, Vec3::new(1.0, 0.0, -1.0).normalize());

        assert_eq!(trace(&scene, &ray, 1), Color::ZERO);
    }

    #[test]
    fn test_transparent_pane_dims_diffuse() {
        let mut scene = red_sphere_scene();
        scene.add_point_light(PointLight::new(Color::ONE, Vec3::new(0.0, 0.0, 10.0)));
        scene.add(Box::new(Rectangle::new(
            Vec3::new(-5.0, -5.0, 2.0),
            Vec3::new(5.0, 5.0, 2.0),
            Vec3::Z,
            Material::default().with_refracted(Color::splat(0.5)),
        )));
        let primary = Ray::new(Vec3::new(0.0, 0.0, -1.0), Vec3::NEG_Z);

        assert!(approx(trace(&scene, &primary, 3), Color::new(0.5, 0.0, 0.0)));
    }

    #[test]
    fn test_empty_texture_traces_without_panic() {
        let mut scene = empty_scene();
        scene.ambient_light = Color::ONE;
        let rect = Rectangle::new(
            Vec3::new(-1.0, -1.0, -5.0),
            Vec3::new(1.0, 1.0, -5.0),
            Vec3::Z,
            Material::matte(Color::ONE),
        );
        let empty = std::sync::Arc::new(lumen_core::Texture::new(0, 0, Vec::new(), "empty"));
        scene.add(Box::new(TexturedRectangle::new(rect, empty, Axis::X, Axis::Y)));

        assert_eq!(trace(&scene, &forward(), 3), Color::ZERO);
    }
}
