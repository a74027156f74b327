//! Data model for label layout and pricing.

mod dimensions;
mod packing;
mod quote;

pub use dimensions::{Dimensions, SheetPreset, SubstrateSheet};
pub use packing::PackingResult;
pub use quote::{DiscountSchedule, PriceQuote, PriceTier, PricingBasis, PricingMode, PrintType};
