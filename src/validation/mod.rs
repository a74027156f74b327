//! Advisory checks on finished calculations.

mod advise;

pub use advise::{check_calculation, ValidationResult};
