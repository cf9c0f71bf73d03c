//! 2D integer vector type

use core::fmt;

/// Ordered pair of integers (x, y)
///
/// A transient value type: constructed per call, never mutated, never
/// persisted. Rendered by `Display` as `(x,y)` with no whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector2 {
    pub x: i32,
    pub y: i32,
}

impl Vector2 {
    /// Create a new vector from its components
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Dot product with another vector
    ///
    /// Overflow of the product-sum wraps in the native integer width; no
    /// overflow check is performed, so the operation is total.
    pub const fn dot(self, other: Self) -> i32 {
        self.x
            .wrapping_mul(other.x)
            .wrapping_add(self.y.wrapping_mul(other.y))
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}
