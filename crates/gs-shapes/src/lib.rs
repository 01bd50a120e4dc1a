//! Connected-shape counting over binary grids.
//!
//! A shape is a maximal set of 1-cells pairwise reachable through adjacent
//! 1-cells. Traversal uses an explicit heap-allocated stack, so shape size
//! is bounded by memory rather than call-stack depth.
//!
//! Connectivity options:
//! - [`Connectivity::C4`]: axis-aligned neighbors only (default). Diagonal
//!   contact does not connect.
//! - [`Connectivity::C8`]: includes diagonals.
//!
//! Counting never mutates the input grid; [`count_shapes_in_place`] is the
//! explicit opt-in that consumes 1-cells as it visits them, matching
//! destructive flood-fill semantics.

mod count;
mod label;

pub use count::{Connectivity, CountConfig, count_shapes, count_shapes_in_place, shape_sizes};
pub use label::{LabelMap, label_shapes};
