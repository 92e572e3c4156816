//! The built-in gallery scene.
//!
//! A closed room with cyan walls, two solid spheres, a glass table, three
//! glowing light balls and three framed pictures on the back wall.

use lumen_math::{Axis, Vec3, EPSILON};

use crate::scene::{SceneDescription, ShapeDescription, ViewPlane};
use crate::{Color, Material, PointLight};

/// Depth of the view plane; the rest of the room is laid out relative to it.
const VIEW_Z: f32 = -20.0;

/// Picture files on the back wall, relative to the texture directory.
pub const GALLERY_TEXTURES: [&str; 3] = [
    "textures/texture1.png",
    "textures/texture2.png",
    "textures/texture3.png",
];

impl SceneDescription {
    /// Build the gallery scene.
    pub fn gallery() -> Self {
        let view_plane = ViewPlane {
            top: 10.0,
            bottom: -10.0,
            left: -10.0,
            right: 10.0,
            z: VIEW_Z,
        };

        let mut scene = SceneDescription {
            background: Color::ZERO,
            ambient_light: Color::splat(0.2),
            view_plane,
            ..Default::default()
        };

        add_light_balls(&mut scene);
        add_spheres(&mut scene);
        add_glass_table(&mut scene);
        add_walls(&mut scene, &view_plane);
        add_pictures(&mut scene);

        scene
    }
}

/// Each point light sits inside a small see-through ball that glows in the
/// light's color, so the lights show up in the image.
fn add_light_balls(scene: &mut SceneDescription) {
    let emission_scale = 0.65;
    let light_color = Color::splat(0.5);
    let locations = [
        Vec3::new(9.0, 0.0, VIEW_Z - 10.0),
        Vec3::new(-9.0, 0.0, VIEW_Z - 10.0),
        Vec3::new(0.0, 9.0, VIEW_Z - 15.0),
    ];

    for location in locations {
        scene.add_point_light(PointLight::new(light_color, location));

        let material = Material::default()
            .with_specular(Color::splat(0.2), 1000.0)
            .with_refracted(Color::splat(0.8))
            .with_emission(emission_scale * light_color);
        scene.add_shape(ShapeDescription::Sphere {
            center: location,
            radius: 0.5,
            material,
        });
    }
}

fn add_spheres(scene: &mut SceneDescription) {
    let red = Material::matte(Color::new(1.0, 0.0, 0.0)).with_specular(Color::splat(0.2), 3.0);
    scene.add_shape(ShapeDescription::Sphere {
        center: Vec3::new(1.0, -8.0, VIEW_Z - 5.0),
        radius: 2.0,
        material: red,
    });

    let blue = Material::matte(Color::new(0.01, 0.29, 0.7)).with_specular(Color::splat(0.2), 3.0);
    scene.add_shape(ShapeDescription::Sphere {
        center: Vec3::new(-2.0, -3.0, VIEW_Z - 13.0),
        radius: 4.0,
        material: blue,
    });
}

/// Five glass rectangles forming an open-bottomed box.
fn add_glass_table(scene: &mut SceneDescription) {
    let glass = Material::matte(Color::splat(0.1))
        .with_specular(Color::splat(0.35), 1000.0)
        .with_refracted(Color::splat(0.65));

    let (x0, x1) = (-6.0, 2.0);
    let (y0, y1) = (-10.0, -7.0);
    let (z0, z1) = (VIEW_Z - 17.0, VIEW_Z - 9.0);

    let faces = [
        // top
        (Vec3::new(x0, y1, z0), Vec3::new(x1, y1, z1), Vec3::Y),
        // front
        (Vec3::new(x0, y0, z1), Vec3::new(x1, y1, z1), Vec3::Z),
        // back
        (Vec3::new(x0, y0, z0), Vec3::new(x1, y1, z0), Vec3::NEG_Z),
        // right
        (Vec3::new(x1, y0, z0), Vec3::new(x1, y1, z1), Vec3::X),
        // left
        (Vec3::new(x0, y0, z0), Vec3::new(x0, y1, z1), Vec3::NEG_X),
    ];

    for (min, max, normal) in faces {
        scene.add_shape(ShapeDescription::Rectangle {
            min,
            max,
            normal,
            material: glass,
        });
    }
}

/// Walls line up with the view plane edges and face into the room.
fn add_walls(scene: &mut SceneDescription, view: &ViewPlane) {
    let wall = Material::matte(Color::new(0.0, 0.7, 0.7));
    let walls = [
        (Vec3::new(0.0, view.top, 0.0), Vec3::NEG_Y),
        (Vec3::new(0.0, view.bottom, 0.0), Vec3::Y),
        (Vec3::new(view.left, 0.0, 0.0), Vec3::X),
        (Vec3::new(view.right, 0.0, 0.0), Vec3::NEG_X),
        (Vec3::new(0.0, 0.0, VIEW_Z - 20.0), Vec3::Z),
    ];

    for (point, normal) in walls {
        scene.add_shape(ShapeDescription::Plane {
            point,
            normal,
            material: wall,
        });
    }
}

/// Pictures hang just in front of the back wall so they win the closest-hit test.
fn add_pictures(scene: &mut SceneDescription) {
    let (width, height) = (5.0, 8.0);
    let z = VIEW_Z - 20.0 + EPSILON;
    let picture = Material::matte(Color::ONE).with_specular(Color::ZERO, 10.0);

    for (left, texture) in [-9.0, -2.5, 4.0].into_iter().zip(GALLERY_TEXTURES) {
        scene.add_shape(ShapeDescription::TexturedRectangle {
            min: Vec3::new(left, 0.0, z),
            max: Vec3::new(left + width, height, z),
            normal: Vec3::Z,
            material: picture,
            texture: texture.to_string(),
            s_axis: Axis::X,
            t_axis: Axis::Y,
        });
    }
}
