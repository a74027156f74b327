//! Grid packing result.

use serde::{Deserialize, Serialize};

/// How many labels fit on one sheet in an axis-aligned grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PackingResult {
    /// Labels across the sheet width.
    pub per_row: u64,
    /// Labels along the sheet height.
    pub per_column: u64,
    /// Labels per sheet (`per_row * per_column`).
    pub per_sheet: u64,
}

impl PackingResult {
    /// Build from row and column counts. Returns `None` when the product
    /// overflows a `u64`.
    pub fn new(per_row: u64, per_column: u64) -> Option<Self> {
        Some(Self {
            per_row,
            per_column,
            per_sheet: per_row.checked_mul(per_column)?,
        })
    }

    /// Check if at least one label fits.
    pub fn is_producible(&self) -> bool {
        self.per_sheet > 0
    }
}
