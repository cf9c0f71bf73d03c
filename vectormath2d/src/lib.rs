//! Vectormath 2D - Integer vector math in the plane
//!
//! This crate provides the 2D integer vector type and the formatted dot
//! product it exists to demonstrate. It is the leaf crate of the workspace:
//! `vectormath3d` builds on it, and `vectorapp` composes both.
//!
//! The crate logs through the [`log`] facade and never configures a sink;
//! the host application owns that decision.

pub mod dot;
pub mod vector;

pub use dot::*;
pub use vector::*;
