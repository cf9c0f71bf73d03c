//! 3D integer vector type

use core::fmt;

use vectormath2d::Vector2;

/// Ordered triple of integers (x, y, z)
///
/// Same lifecycle as [`Vector2`]: a transient, immutable value type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3 {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Vector3 {
    /// Create a new vector from its components
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Project onto the xy plane
    pub const fn xy(self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }

    /// Dot product with another vector
    ///
    /// Computed as the xy partial dot product plus the z product, all with
    /// wrapping arithmetic; total over every input.
    pub const fn dot(self, other: Self) -> i32 {
        self.xy()
            .dot(other.xy())
            .wrapping_add(self.z.wrapping_mul(other.z))
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot() {
        // 1*4 + 2*5 + 3*6
        assert_eq!(Vector3::new(1, 2, 3).dot(Vector3::new(4, 5, 6)), 32);
        assert_eq!(Vector3::new(0, 0, 0).dot(Vector3::new(0, 0, 0)), 0);
        assert_eq!(Vector3::new(-1, 2, -3).dot(Vector3::new(3, -4, 5)), -26);
    }

    #[test]
    fn test_dot_wraps_on_overflow() {
        assert_eq!(
            Vector3::new(0, 0, i32::MAX).dot(Vector3::new(0, 0, 2)),
            -2
        );
    }

    #[test]
    fn test_xy_projection() {
        assert_eq!(Vector3::new(1, 2, 3).xy(), Vector2::new(1, 2));
    }

    #[test]
    fn test_display() {
        assert_eq!(Vector3::new(1, -2, 3).to_string(), "(1,-2,3)");
    }
}
