//! Sheet layout computation.

mod grid;

pub use grid::{common_size_yields, compute_layout, require_yield};
