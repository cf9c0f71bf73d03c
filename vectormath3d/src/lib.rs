//! Vectormath 3D - Integer vector math in space
//!
//! Builds on `vectormath2d`: the 3D dot product reuses the 2D crate to
//! format its xy partial result, which is the dependency chain this
//! workspace exists to demonstrate (`vectorapp` → `vectormath3d` →
//! `vectormath2d`).

pub mod dot;
pub mod vector;

pub use dot::*;
pub use vector::*;
