//! Text and JSON rendering of a calculation.
//!
//! This is the only place money is rounded (2 decimals, half away from zero).

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::calculator::Calculation;
use crate::model::PricingBasis;
use crate::validation::ValidationResult;

/// Format a money amount for display.
pub fn format_money(value: Decimal, currency: &str) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{}{:.2}", currency, rounded)
}

/// Format a percentage for display.
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Render a human-readable report.
pub fn render_text(calc: &Calculation, advice: &ValidationResult, currency: &str) -> String {
    let quote = &calc.quote;
    let packing = &calc.packing;
    let per = match quote.mode.basis() {
        PricingBasis::PerSheet => "sheet",
        PricingBasis::PerUnit => "label",
    };

    let mut lines = vec![
        format!("Label:       {} mm (spacing {} mm)", calc.label, calc.spacing),
        format!(
            "Sheet:       {} x {} mm (margin {} mm)",
            calc.sheet.width, calc.sheet.height, calc.sheet.margin
        ),
        format!(
            "Layout:      {} per row x {} per column = {} per sheet",
            packing.per_row, packing.per_column, packing.per_sheet
        ),
        format!("Required:    {} labels", quote.required_quantity),
        format!(
            "Sheets:      {} ({} labels produced)",
            quote.sheets_required, quote.produced_labels
        ),
        format!(
            "Efficiency:  {} (waste {})",
            format_percent(quote.efficiency_percent),
            format_percent(quote.waste_percent())
        ),
        format!("Print type:  {}", calc.print_type),
        format!(
            "Unit price:  {} per {}",
            format_money(quote.unit_price, currency),
            per
        ),
        format!("Subtotal:    {}", format_money(quote.subtotal, currency)),
        format!("Discount:    {}", format_money(quote.discount, currency)),
        format!("Total:       {}", format_money(quote.total, currency)),
    ];

    for warning in &advice.warnings {
        lines.push(format!("! {}", warning));
    }
    for note in &advice.notes {
        lines.push(format!("- {}", note));
    }

    lines.join("\n")
}

#[derive(Serialize)]
struct JsonReport<'a> {
    currency: &'a str,
    #[serde(flatten)]
    calculation: &'a Calculation,
    waste_percent: f64,
    warnings: &'a [String],
    notes: &'a [String],
}

/// Render the calculation as pretty-printed JSON.
pub fn render_json(
    calc: &Calculation,
    advice: &ValidationResult,
    currency: &str,
) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport {
        currency,
        calculation: calc,
        waste_percent: calc.quote.waste_percent(),
        warnings: &advice.warnings,
        notes: &advice.notes,
    })
}
