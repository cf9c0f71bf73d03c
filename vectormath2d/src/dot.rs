//! Formatted 2D dot product

use log::info;

use crate::Vector2;

/// Compute the dot product of two 2D integer vectors and return the
/// human-readable form `"(x1,y1)·(x2,y2) = result"`.
///
/// Emits one informational log record containing the result. Logging is
/// best-effort: an absent or failing sink never aborts the computation.
/// The function is total over all integer inputs; overflow wraps.
pub fn dot2d(x1: i32, y1: i32, x2: i32, y2: i32) -> String {
    let a = Vector2::new(x1, y1);
    let b = Vector2::new(x2, y2);
    let result = a.dot(b);
    info!("Computed 2D dot product: {result}");
    format!("{a}·{b} = {result}")
}
