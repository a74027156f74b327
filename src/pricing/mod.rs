//! Sheet count and price quoting.

mod quote;

pub use quote::compute_quote;
