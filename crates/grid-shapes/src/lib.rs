//! Umbrella crate for the `grid-shapes` workspace.
//!
//! This crate re-exports the grid primitives and the shape-counting
//! algorithms.

pub use gs_grid::*;
pub use gs_shapes::*;
