//! Lumen Renderer - recursive Whitted-style ray tracing on the CPU.
//!
//! A ray's color combines local Phong lighting (with shadows that dim through
//! transparent occluders), a mirror reflection, and straight-through
//! transparency, each recursing until a depth budget runs out.

mod bucket;
mod plane;
mod rectangle;
mod renderer;
mod scene;
mod shading;
mod sphere;
mod surface;

pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use plane::Plane;
pub use rectangle::{Rectangle, TexturedRectangle};
pub use renderer::{color_to_rgb, render, render_pixel, ImageBuffer, RenderConfig};
pub use scene::Scene;
pub use shading::{compute_shadow, trace};
pub use sphere::Sphere;
pub use surface::{closest_hit, Intersection, Surface};

/// Re-export shading inputs from lumen_core
pub use lumen_core::{Color, DirectionalLight, Material, PointLight};

/// Re-export Vec3 and common math types from lumen_math
pub use lumen_math::{Ray, Vec3, EPSILON};
