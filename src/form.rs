//! Evaluation of raw calculator form fields.
//!
//! The form is re-evaluated on every input change. Blank required fields are
//! not an error, only an incomplete form; anything that has been typed is
//! parsed and handed to the calculator, whose errors are passed through.

use crate::calculator::{calculate, Calculation, CalculationRequest};
use crate::config::{RateCard, Unit, DEFAULT_MARGIN_MM, DEFAULT_SPACING_MM};
use crate::error::{CalcError, ErrorKind, Result};
use crate::model::{Dimensions, PricingBasis, PrintType, SheetPreset};

/// Field values as typed, plus the selections made with controls.
#[derive(Debug, Clone, Default)]
pub struct FormInput {
    pub width: String,
    pub height: String,
    pub quantity: String,
    /// Blank means the default cutting gap.
    pub spacing: String,
    /// Blank means no margin.
    pub margin: String,
    pub unit: Unit,
    pub sheet: SheetPreset,
    pub print_type: PrintType,
    pub basis: PricingBasis,
}

/// What the form should display.
#[derive(Debug)]
pub enum FormOutcome {
    /// Required fields are still blank.
    Incomplete { missing: Vec<&'static str> },
    /// Input was entered but cannot be quoted.
    Invalid(CalcError),
    /// A full result is available.
    Ready(Box<Calculation>),
}

impl FormOutcome {
    /// Error classification, if the outcome is an error.
    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            FormOutcome::Invalid(err) => Some(err.kind()),
            _ => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, FormOutcome::Ready(_))
    }

    pub fn calculation(&self) -> Option<&Calculation> {
        match self {
            FormOutcome::Ready(calc) => Some(calc),
            _ => None,
        }
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Parse a decimal number, accepting a comma as decimal separator.
fn parse_number(field: &'static str, value: &str) -> Result<f64> {
    value
        .trim()
        .replace(',', ".")
        .parse::<f64>()
        .map_err(|_| CalcError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}

fn parse_quantity(value: &str) -> Result<u64> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| CalcError::InvalidNumber {
            field: "quantity",
            value: value.to_string(),
        })
}

fn build_request(input: &FormInput, card: &RateCard) -> Result<CalculationRequest> {
    let label = Dimensions::new(
        parse_number("width", &input.width)?,
        parse_number("height", &input.height)?,
    )
    .to_mm(input.unit);
    let quantity = parse_quantity(&input.quantity)?;

    let spacing = if is_blank(&input.spacing) {
        DEFAULT_SPACING_MM
    } else {
        input.unit.to_mm(parse_number("spacing", &input.spacing)?)
    };
    let margin = if is_blank(&input.margin) {
        DEFAULT_MARGIN_MM
    } else {
        input.unit.to_mm(parse_number("margin", &input.margin)?)
    };

    let request =
        CalculationRequest::from_rate_card(label, quantity, input.print_type, input.basis, card)?
            .with_spacing(spacing)
            .with_sheet(input.sheet.substrate().with_margin(margin));
    Ok(request)
}

/// Evaluate the form against a rate card.
pub fn evaluate(input: &FormInput, card: &RateCard) -> FormOutcome {
    let missing: Vec<&'static str> = [
        ("width", &input.width),
        ("height", &input.height),
        ("quantity", &input.quantity),
    ]
    .into_iter()
    .filter(|(_, value)| is_blank(value))
    .map(|(name, _)| name)
    .collect();

    if !missing.is_empty() {
        return FormOutcome::Incomplete { missing };
    }

    match build_request(input, card).and_then(|request| calculate(&request)) {
        Ok(calc) => FormOutcome::Ready(Box::new(calc)),
        Err(err) => {
            tracing::debug!("Form input rejected: {}", err);
            FormOutcome::Invalid(err)
        }
    }
}
