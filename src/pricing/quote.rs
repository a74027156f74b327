//! Turns a required quantity and per-sheet yield into a price quote.

use rust_decimal::Decimal;

use crate::error::{CalcError, Result};
use crate::model::{DiscountSchedule, PriceQuote, PricingMode};

/// Compute sheets required, subtotal, discount and total.
///
/// Sheets always round up. The discount threshold is compared against the
/// billed quantity: sheets in per-sheet mode, labels in per-unit mode.
/// Nothing is rounded here.
pub fn compute_quote(
    required_quantity: u64,
    per_sheet: u64,
    mode: PricingMode,
    discounts: &DiscountSchedule,
) -> Result<PriceQuote> {
    if required_quantity == 0 {
        return Err(CalcError::InvalidQuantity {
            quantity: required_quantity,
        });
    }
    if per_sheet == 0 {
        return Err(CalcError::InvalidYield { per_sheet });
    }
    let unit_price = mode.unit_price();
    if unit_price <= Decimal::ZERO {
        return Err(CalcError::InvalidPrice { price: unit_price });
    }

    let sheets_required = required_quantity.div_ceil(per_sheet);
    let produced_labels = sheets_required
        .checked_mul(per_sheet)
        .ok_or(CalcError::InvalidQuantity {
            quantity: required_quantity,
        })?;

    let billed_quantity = match mode {
        PricingMode::PerSheet { .. } => sheets_required,
        PricingMode::PerUnit { .. } => required_quantity,
    };

    // Money must stay within Decimal range
    let money_overflow = || CalcError::InvalidPrice { price: unit_price };
    let subtotal = unit_price
        .checked_mul(Decimal::from(billed_quantity))
        .ok_or_else(money_overflow)?;
    let applied_tier = discounts.applicable(billed_quantity).copied();
    let discount = match applied_tier {
        Some(tier) => subtotal
            .checked_mul(tier.discount_rate)
            .ok_or_else(money_overflow)?,
        None => Decimal::ZERO,
    };
    let total = subtotal - discount;

    let efficiency_percent = 100.0 * required_quantity as f64 / produced_labels as f64;

    tracing::debug!(
        "Quote: {} labels / {} per sheet = {} sheets, billed {} x {} = {}, discount {}, total {}",
        required_quantity,
        per_sheet,
        sheets_required,
        billed_quantity,
        unit_price,
        subtotal,
        discount,
        total
    );

    Ok(PriceQuote {
        mode,
        unit_price,
        required_quantity,
        sheets_required,
        produced_labels,
        billed_quantity,
        subtotal,
        discount,
        total,
        applied_tier,
        efficiency_percent,
    })
}
