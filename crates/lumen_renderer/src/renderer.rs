//! Image sampling: primary rays through the view plane, averaged per pixel.
//!
//! The eye sits at the origin looking down -z. The view plane's rectangle is
//! split into `width x height` pixels; each pixel is sampled on a regular
//! interior grid, so renders are fully deterministic.

use std::path::Path;

use lumen_math::{Ray, Vec3};
use rayon::prelude::*;

use crate::bucket::{generate_buckets, render_bucket, BucketResult, DEFAULT_BUCKET_SIZE};
use crate::shading::trace;
use crate::{Color, Scene};

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
    /// Recursion budget handed to `trace` for each primary ray
    pub max_depth: u32,
    /// Samples per pixel along each axis (0 is treated as 1)
    pub antialias: u32,
    /// Parallel primary rays instead of rays from the eye
    pub orthographic: bool,
    /// Edge length of the square tiles rendered in parallel
    pub bucket_size: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 1024,
            max_depth: 5,
            antialias: 3,
            orthographic: false,
            bucket_size: DEFAULT_BUCKET_SIZE,
        }
    }
}

impl RenderConfig {
    /// Config for a `width x height` image, other settings default.
    pub fn with_resolution(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    fn samples_per_axis(&self) -> u32 {
        self.antialias.max(1)
    }
}

/// Clamp a value to [0, 1] range.
#[inline]
pub fn clamp_01(x: f32) -> f32 {
    x.clamp(0.0, 1.0)
}

/// Convert a color to 8-bit RGB. No gamma is applied.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    [
        (255.0 * clamp_01(color.x)) as u8,
        (255.0 * clamp_01(color.y)) as u8,
        (255.0 * clamp_01(color.z)) as u8,
    ]
}

/// Primary ray through a point on the view plane.
fn primary_ray(sample: Vec3, orthographic: bool) -> Ray {
    let direction = if orthographic {
        Vec3::NEG_Z
    } else {
        sample.normalize_or_zero()
    };
    Ray::new(sample, direction)
}

/// Render a single pixel.
///
/// `y = 0` is the bottom row of the view plane. The result is clamped to
/// [0, 1] per channel.
pub fn render_pixel(scene: &Scene, x: u32, y: u32, config: &RenderConfig) -> Color {
    let view = &scene.view_plane;
    let pixel_w = view.width() / config.width as f32;
    let pixel_h = view.height() / config.height as f32;

    let n = config.samples_per_axis();
    let k = (n + 1) as f32;
    let left = view.left + pixel_w * x as f32;
    let bottom = view.bottom + pixel_h * y as f32;

    let mut pixel_color = Color::ZERO;
    for i in 1..=n {
        for j in 1..=n {
            let sample = Vec3::new(
                left + j as f32 * pixel_w / k,
                bottom + i as f32 * pixel_h / k,
                view.z,
            );
            let ray = primary_ray(sample, config.orthographic);
            pixel_color += trace(scene, &ray, config.max_depth);
        }
    }

    (pixel_color / (n * n) as f32).clamp(Color::ZERO, Color::ONE)
}

/// Simple image buffer for storing render output.
///
/// Rows run top to bottom.
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Copy a rendered bucket into place.
    pub fn write_bucket(&mut self, result: &BucketResult) {
        let bucket = &result.bucket;
        for (i, color) in result.pixels.iter().enumerate() {
            let local_x = i as u32 % bucket.width;
            let local_y = i as u32 / bucket.width;
            self.set(bucket.x + local_x, bucket.y + local_y, *color);
        }
    }

    /// Convert to packed RGB bytes.
    pub fn to_rgb(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity((self.width * self.height * 3) as usize);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb(*color));
        }
        bytes
    }

    /// Write the image as an 8-bit RGB PNG.
    pub fn save_png(&self, path: impl AsRef<Path>) -> image::ImageResult<()> {
        image::save_buffer_with_format(
            path,
            &self.to_rgb(),
            self.width,
            self.height,
            image::ColorType::Rgb8,
            image::ImageFormat::Png,
        )
    }
}

/// Render the entire scene to an image buffer.
///
/// Buckets are traced in parallel; the output does not depend on how many
/// threads run or in what order buckets finish.
pub fn render(scene: &Scene, config: &RenderConfig) -> ImageBuffer {
    let buckets = generate_buckets(config.width, config.height, config.bucket_size);
    log::debug!(
        "Rendering {}x{} in {} buckets",
        config.width,
        config.height,
        buckets.len()
    );

    let results: Vec<BucketResult> = buckets
        .par_iter()
        .map(|bucket| BucketResult::new(*bucket, render_bucket(bucket, scene, config)))
        .collect();

    let mut image = ImageBuffer::new(config.width, config.height);
    for result in &results {
        image.write_bucket(result);
    }
    image
}
