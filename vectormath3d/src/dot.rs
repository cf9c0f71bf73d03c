//! Formatted 3D dot product

use log::info;

use vectormath2d::dot2d;

use crate::Vector3;

/// Compute the dot product of two 3D integer vectors and return the
/// human-readable form `"(x1,y1)·(x2,y2) = xyDot + (z1*z2 = zProduct)"`.
///
/// The xy partial string is produced by delegating to [`dot2d`], so this
/// function exercises the cross-crate dependency. One informational log
/// record carrying the full 3D result is emitted before the delegated call
/// makes its own. The returned string shows only the xy and z parts; the
/// combined 3-term sum appears in the log record, not in the string.
///
/// Total over all integer inputs; overflow wraps.
pub fn dot3d(x1: i32, y1: i32, z1: i32, x2: i32, y2: i32, z2: i32) -> String {
    let a = Vector3::new(x1, y1, z1);
    let b = Vector3::new(x2, y2, z2);
    let result = a.dot(b);
    info!("Computed 3D dot product: {result}");

    let xy_part = dot2d(x1, y1, x2, y2);
    let z_product = z1.wrapping_mul(z2);
    format!("{xy_part} + ({z1}*{z2} = {z_product})")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot3d_example() {
        assert_eq!(dot3d(1, 2, 3, 4, 5, 6), "(1,2)·(4,5) = 14 + (3*6 = 18)");
    }

    #[test]
    fn test_dot3d_zero_vectors() {
        assert_eq!(dot3d(0, 0, 0, 0, 0, 0), "(0,0)·(0,0) = 0 + (0*0 = 0)");
    }

    #[test]
    fn test_dot3d_negative_components() {
        assert_eq!(
            dot3d(-1, 2, -3, 3, -4, 5),
            "(-1,2)·(3,-4) = -11 + (-3*5 = -15)"
        );
    }

    #[test]
    fn test_dot3d_embeds_dot2d_output() {
        let xy = dot2d(7, -3, 2, 9);
        let full = dot3d(7, -3, 4, 2, 9, -5);
        assert_eq!(full, format!("{xy} + (4*-5 = -20)"));
    }

    #[test]
    fn test_dot3d_idempotent() {
        assert_eq!(dot3d(5, 6, 7, 8, 9, 10), dot3d(5, 6, 7, 8, 9, 10));
    }
}
