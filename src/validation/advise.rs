//! Hints shown next to a quote: waste, utilization and discount reach.

use rust_decimal::Decimal;

use crate::calculator::Calculation;
use crate::config::{GOOD_EFFICIENCY_PERCENT, HIGH_WASTE_PERCENT};
use crate::model::{DiscountSchedule, PricingBasis};

/// Advisory findings for one calculation.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ValidationResult {
    /// Things the customer should probably change.
    pub warnings: Vec<String>,
    /// Informational messages.
    pub notes: Vec<String>,
}

impl ValidationResult {
    /// Create an empty result.
    pub fn ok() -> Self {
        Self::default()
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add a note.
    pub fn add_note(&mut self, message: impl Into<String>) {
        self.notes.push(message.into());
    }

    /// Check if nothing needs attention.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

fn percent_of(rate: Decimal) -> Decimal {
    (rate * Decimal::ONE_HUNDRED).normalize()
}

/// Check a calculation for waste and discount opportunities.
pub fn check_calculation(calc: &Calculation, discounts: &DiscountSchedule) -> ValidationResult {
    let mut result = ValidationResult::ok();
    let quote = &calc.quote;

    let waste = quote.waste_percent();
    if waste > HIGH_WASTE_PERCENT {
        result.add_warning(format!(
            "High waste ({:.1}%): {} of {} produced labels are surplus; a small change to the label size may reduce it",
            waste,
            quote.surplus_labels(),
            quote.produced_labels
        ));
    } else if quote.efficiency_percent >= GOOD_EFFICIENCY_PERCENT {
        result.add_note(format!(
            "Good utilization ({:.1}%)",
            quote.efficiency_percent
        ));
    }

    if let Some(tier) = discounts.next_tier(quote.billed_quantity) {
        let more = tier.threshold_quantity - quote.billed_quantity;
        let unit = match quote.mode.basis() {
            PricingBasis::PerSheet => "sheet(s)",
            PricingBasis::PerUnit => "label(s)",
        };
        result.add_note(format!(
            "{} more {} unlock {}% off",
            more,
            unit,
            percent_of(tier.discount_rate)
        ));
    }

    if let Some(tier) = quote.applied_tier {
        result.add_note(format!(
            "{}% volume discount applied ({}+)",
            percent_of(tier.discount_rate),
            tier.threshold_quantity
        ));
    }

    for warning in &result.warnings {
        tracing::warn!("{}", warning);
    }

    result
}
