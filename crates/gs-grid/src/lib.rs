//! Foundational primitives for binary-grid shape counting.
//!
//! ## Grid Invariants
//! A [`BitGrid`] is rectangular and every cell is exactly `0` or `1`. Both
//! invariants are enforced at construction time, so the scanning algorithms
//! built on top never have to re-validate their input.
//!
//! ## Text Ingestion
//! [`parse_grid`] reads the line-per-row text format where each row is a run
//! of `0`/`1` digits. Surrounding blank lines and trailing whitespace are
//! trimmed; ragged rows and non-digit characters are rejected.

mod error;
mod grid;
mod parse;

pub use error::Error;
pub use grid::BitGrid;
pub use parse::parse_grid;
