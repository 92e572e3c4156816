//! Lumen Core - renderer-agnostic scene data.
//!
//! This crate provides:
//!
//! - **Shading inputs**: `Color`, `Material`, `PointLight`, `DirectionalLight`
//! - **Textures**: decoded images and a path-keyed `TextureCache`
//! - **Scene descriptions**: a serde model of a scene, JSON loading, and the
//!   built-in gallery scene
//!
//! # Example
//!
//! ```ignore
//! use lumen_core::load_scene;
//!
//! let description = load_scene("scenes/room.json")?;
//! println!("Loaded {} shapes, {} point lights",
//!     description.shapes.len(),
//!     description.point_lights.len());
//! ```

pub mod gallery;
pub mod light;
pub mod loader;
pub mod material;
pub mod scene;
pub mod texture;

// Re-export commonly used types
pub use light::{DirectionalLight, PointLight};
pub use loader::{load_scene, load_scene_from_str, LoadError, LoadResult};
pub use material::{is_black, Color, Material};
pub use scene::{SceneDescription, ShapeDescription, ViewPlane};
pub use texture::{Texture, TextureCache, TextureError, TextureResult};
