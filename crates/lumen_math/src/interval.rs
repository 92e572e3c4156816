/// A closed range of `f32` values along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// Create a new interval given min and max values.
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Create the interval spanning two values in either order.
    pub fn spanning(a: f32, b: f32) -> Self {
        Self::new(a.min(b), a.max(b))
    }

    /// Returns the size of the interval (max - min).
    pub fn size(&self) -> f32 {
        self.max - self.min
    }

    /// Returns true if x is within the interval [min, max] (inclusive).
    pub fn contains(&self, x: f32) -> bool {
        self.min <= x && x <= self.max
    }

    /// Expands the interval by delta/2 on each side.
    pub fn expand(&self, delta: f32) -> Interval {
        let padding = delta / 2.0;
        Interval::new(self.min - padding, self.max + padding)
    }

    /// Where `x` falls between `min` (0.0) and `max` (1.0).
    ///
    /// Not clamped; values outside the interval map outside [0, 1].
    pub fn lerp_param(&self, x: f32) -> f32 {
        (x - self.min) / self.size()
    }
}
