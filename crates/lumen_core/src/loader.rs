//! JSON scene loading.
//!
//! Parses a scene file into a [`SceneDescription`], resolves texture paths
//! relative to the file, and rejects geometry the renderer cannot use.

use std::path::{Path, PathBuf};

use lumen_math::{Aabb, Vec3};
use thiserror::Error;

use crate::scene::{SceneDescription, ShapeDescription, ViewPlane};

/// Errors that can occur during scene loading.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid view plane: {0}")]
    InvalidViewPlane(String),

    #[error("Invalid {kind} at shapes[{index}]: {reason}")]
    InvalidShape {
        index: usize,
        kind: &'static str,
        reason: String,
    },

    #[error("Invalid directional light at directional_lights[{index}]: {reason}")]
    InvalidLight { index: usize, reason: String },
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Load a JSON scene file.
///
/// Relative texture paths are resolved against the file's directory.
///
/// # Example
///
/// ```ignore
/// use lumen_core::load_scene;
///
/// let scene = load_scene("scenes/room.json")?;
/// println!("Loaded {} shapes", scene.shapes.len());
/// ```
pub fn load_scene<P: AsRef<Path>>(path: P) -> LoadResult<SceneDescription> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let base_dir = path.parent().map(|p| p.to_path_buf());

    log::info!("Loading scene from {}", path.display());
    load_scene_from_str(&content, base_dir)
}

/// Parse and validate a scene from a JSON string.
pub fn load_scene_from_str(content: &str, base_dir: Option<PathBuf>) -> LoadResult<SceneDescription> {
    let mut scene: SceneDescription = serde_json::from_str(content)?;

    validate_view_plane(&scene.view_plane)?;

    for (index, shape) in scene.shapes.iter_mut().enumerate() {
        validate_shape(index, shape)?;

        if let (Some(base), ShapeDescription::TexturedRectangle { texture, .. }) = (&base_dir, shape) {
            if Path::new(texture.as_str()).is_relative() {
                *texture = base.join(texture.as_str()).to_string_lossy().into_owned();
            }
        }
    }

    for (index, light) in scene.directional_lights.iter_mut().enumerate() {
        if light.direction.length_squared() == 0.0 {
            return Err(LoadError::InvalidLight {
                index,
                reason: "direction has zero length".to_string(),
            });
        }
        light.direction = light.direction.normalize();
    }

    log::debug!(
        "Scene has {} shapes, {} point lights, {} directional lights",
        scene.shapes.len(),
        scene.point_lights.len(),
        scene.directional_lights.len()
    );

    Ok(scene)
}

fn validate_view_plane(view: &ViewPlane) -> LoadResult<()> {
    if !(view.right > view.left) {
        return Err(LoadError::InvalidViewPlane(format!(
            "right ({}) must exceed left ({})",
            view.right, view.left
        )));
    }
    if !(view.top > view.bottom) {
        return Err(LoadError::InvalidViewPlane(format!(
            "top ({}) must exceed bottom ({})",
            view.top, view.bottom
        )));
    }
    if view.z >= 0.0 {
        log::warn!("View plane z = {} is not in front of the eye (expected negative)", view.z);
    }
    Ok(())
}

fn validate_shape(index: usize, shape: &ShapeDescription) -> LoadResult<()> {
    shape_problem(shape).map_or(Ok(()), |reason| {
        Err(LoadError::InvalidShape {
            index,
            kind: shape.kind(),
            reason,
        })
    })
}

/// Describe what is wrong with a shape, if anything.
fn shape_problem(shape: &ShapeDescription) -> Option<String> {
    match shape {
        ShapeDescription::Sphere { radius, .. } => {
            if *radius <= 0.0 || !radius.is_finite() {
                return Some(format!("radius must be positive, got {radius}"));
            }
            None
        }
        ShapeDescription::Plane { normal, .. } => normal_problem(*normal),
        ShapeDescription::Rectangle { min, max, normal, .. } => {
            corner_problem(*min, *max).or_else(|| normal_problem(*normal))
        }
        ShapeDescription::TexturedRectangle {
            min,
            max,
            normal,
            s_axis,
            t_axis,
            ..
        } => {
            if let Some(problem) = corner_problem(*min, *max).or_else(|| normal_problem(*normal)) {
                return Some(problem);
            }
            if s_axis == t_axis {
                return Some("s_axis and t_axis must differ".to_string());
            }
            let bounds = Aabb::from_corners(*min, *max);
            [*s_axis, *t_axis]
                .into_iter()
                .find(|axis| bounds.axis_interval(*axis).size() <= 0.0)
                .map(|axis| format!("texture axis {axis:?} has zero extent"))
        }
    }
}

fn normal_problem(normal: Vec3) -> Option<String> {
    (normal.length_squared() == 0.0).then(|| "normal has zero length".to_string())
}

fn corner_problem(min: Vec3, max: Vec3) -> Option<String> {
    (!min.cmple(max).all()).then(|| format!("min corner {min} exceeds max corner {max}"))
}
