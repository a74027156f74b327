//! label-calc - Sheet layout yield and price quoting for UV label printing.
//!
//! Labels are packed in a plain grid onto a roll segment or cut sheet, the
//! sheets needed for an order are counted, and a quote with volume discount
//! is produced.
//!
//! # Example
//!
//! ```
//! use label_calc::{calculate, CalculationRequest, Dimensions, PricingBasis, PrintType, RateCard};
//!
//! let card = RateCard::default();
//! let request = CalculationRequest::from_rate_card(
//!     Dimensions::new(40.0, 40.0),
//!     1000,
//!     PrintType::Normal,
//!     PricingBasis::PerSheet,
//!     &card,
//! )
//! .unwrap();
//! let calc = calculate(&request).unwrap();
//! assert_eq!(calc.packing.per_sheet, 299);
//! assert_eq!(calc.quote.sheets_required, 4);
//! ```

pub mod calculator;
pub mod config;
pub mod error;
pub mod form;
pub mod layout;
pub mod model;
pub mod pricing;
pub mod report;
pub mod validation;

// Re-exports for convenience
pub use calculator::{calculate, Calculation, CalculationRequest};
pub use config::{RateCard, Unit};
pub use error::{CalcError, ErrorCode, ErrorKind, Result};
pub use form::{evaluate, FormInput, FormOutcome};
pub use layout::{common_size_yields, compute_layout, require_yield};
pub use model::{
    Dimensions, DiscountSchedule, PackingResult, PriceQuote, PriceTier, PricingBasis,
    PricingMode, PrintType, SheetPreset, SubstrateSheet,
};
pub use pricing::compute_quote;
pub use validation::{check_calculation, ValidationResult};

/// Calculate and check a request in one step.
///
/// Returns the calculation together with its advisories.
pub fn quote_with_advice(request: &CalculationRequest) -> Result<(Calculation, ValidationResult)> {
    let calc = calculate(request)?;
    let advice = check_calculation(&calc, &request.discounts);
    Ok((calc, advice))
}
