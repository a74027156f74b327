//! Axis-aligned grid packing of labels on a substrate sheet.
//!
//! Labels are placed in uniform rows and columns with a fixed cutting gap,
//! never rotated. Each label occupies `size + spacing` along both axes.

use crate::config::float_cmp;
use crate::error::{CalcError, Result};
use crate::model::{Dimensions, PackingResult, SubstrateSheet};

fn check_positive(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CalcError::InvalidDimension { field, value });
    }
    Ok(())
}

fn check_non_negative(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(CalcError::InvalidDimension { field, value });
    }
    Ok(())
}

/// Compute how many labels fit on one sheet.
///
/// A label that does not fit even once yields a zero count rather than an
/// error; pass the result through [`require_yield`] before pricing.
pub fn compute_layout(
    label: Dimensions,
    spacing: f64,
    sheet: SubstrateSheet,
) -> Result<PackingResult> {
    check_positive("label width", label.width)?;
    check_positive("label height", label.height)?;
    check_non_negative("spacing", spacing)?;
    check_positive("sheet width", sheet.width)?;
    check_positive("sheet height", sheet.height)?;
    check_non_negative("margin", sheet.margin)?;

    // Margin must leave a printable area
    let usable_width = sheet.usable_width();
    let usable_height = sheet.usable_height();
    if usable_width <= 0.0 || usable_height <= 0.0 {
        return Err(CalcError::InvalidDimension {
            field: "margin",
            value: sheet.margin,
        });
    }

    let per_row = float_cmp::fit_count(usable_width, label.width + spacing).ok_or(
        CalcError::InvalidDimension {
            field: "label width",
            value: label.width,
        },
    )?;
    let per_column = float_cmp::fit_count(usable_height, label.height + spacing).ok_or(
        CalcError::InvalidDimension {
            field: "label height",
            value: label.height,
        },
    )?;
    // Count per sheet must stay representable
    let packing =
        PackingResult::new(per_row, per_column).ok_or(CalcError::InvalidDimension {
            field: "label size",
            value: label.width.min(label.height),
        })?;

    tracing::debug!(
        "Layout {} on {}x{} usable (spacing {}): {} x {} = {} per sheet",
        label,
        usable_width,
        usable_height,
        spacing,
        packing.per_row,
        packing.per_column,
        packing.per_sheet
    );

    Ok(packing)
}

/// Yield of every size in [`Dimensions::COMMON_SIZES`] on `sheet`.
pub fn common_size_yields(
    spacing: f64,
    sheet: SubstrateSheet,
) -> Result<Vec<(Dimensions, PackingResult)>> {
    Dimensions::COMMON_SIZES
        .iter()
        .map(|&label| Ok((label, compute_layout(label, spacing, sheet)?)))
        .collect()
}

/// Return the per-sheet yield, or `LayoutImpossible` when it is zero.
pub fn require_yield(
    packing: &PackingResult,
    label: Dimensions,
    spacing: f64,
    sheet: SubstrateSheet,
) -> Result<u64> {
    if !packing.is_producible() {
        return Err(CalcError::LayoutImpossible {
            label_width: label.width,
            label_height: label.height,
            spacing,
            usable_width: sheet.usable_width(),
            usable_height: sheet.usable_height(),
        });
    }
    Ok(packing.per_sheet)
}
