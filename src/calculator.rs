//! Packing followed by pricing, as one call.

use serde::Serialize;

use crate::config::{RateCard, DEFAULT_SPACING_MM};
use crate::error::Result;
use crate::layout::{compute_layout, require_yield};
use crate::model::{
    Dimensions, DiscountSchedule, PackingResult, PriceQuote, PricingBasis, PricingMode,
    PrintType, SheetPreset, SubstrateSheet,
};
use crate::pricing::compute_quote;

/// Everything needed for one calculation. All lengths are millimeters.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationRequest {
    pub label: Dimensions,
    pub quantity: u64,
    pub spacing: f64,
    pub sheet: SubstrateSheet,
    pub print_type: PrintType,
    pub mode: PricingMode,
    pub discounts: DiscountSchedule,
}

impl CalculationRequest {
    /// Request on a roll with the default cutting gap and no discounts.
    pub fn new(label: Dimensions, quantity: u64, mode: PricingMode) -> Self {
        Self {
            label,
            quantity,
            spacing: DEFAULT_SPACING_MM,
            sheet: SheetPreset::Roll.substrate(),
            print_type: PrintType::Normal,
            mode,
            discounts: DiscountSchedule::none(),
        }
    }

    /// Request priced from a rate card.
    pub fn from_rate_card(
        label: Dimensions,
        quantity: u64,
        print_type: PrintType,
        basis: PricingBasis,
        card: &RateCard,
    ) -> Result<Self> {
        Ok(Self {
            print_type,
            discounts: card.discounts(basis)?,
            ..Self::new(label, quantity, card.pricing_mode(print_type, basis))
        })
    }

    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_sheet(mut self, sheet: SubstrateSheet) -> Self {
        self.sheet = sheet;
        self
    }

    pub fn with_discounts(mut self, discounts: DiscountSchedule) -> Self {
        self.discounts = discounts;
        self
    }
}

/// Result of a successful calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Calculation {
    pub label: Dimensions,
    pub spacing: f64,
    pub sheet: SubstrateSheet,
    pub print_type: PrintType,
    pub packing: PackingResult,
    pub quote: PriceQuote,
}

/// Lay out the labels, then price the sheets they need.
pub fn calculate(request: &CalculationRequest) -> Result<Calculation> {
    let packing = compute_layout(request.label, request.spacing, request.sheet)?;
    let per_sheet = require_yield(&packing, request.label, request.spacing, request.sheet)?;
    let quote = compute_quote(request.quantity, per_sheet, request.mode, &request.discounts)?;

    Ok(Calculation {
        label: request.label,
        spacing: request.spacing,
        sheet: request.sheet,
        print_type: request.print_type,
        packing,
        quote,
    })
}
