// Re-export glam for convenience
pub use glam::*;

// Lumen math types
mod aabb;
mod axis;
mod interval;
mod ray;

pub use aabb::Aabb;
pub use axis::Axis;
pub use interval::Interval;
pub use ray::Ray;

/// Smallest ray parameter considered a real hit.
///
/// Also used as the slack when testing points against bounded surfaces,
/// so zero-thickness rectangles still catch the rays that land on them.
pub const EPSILON: f32 = 0.01;
