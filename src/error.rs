//! Error types for layout and price calculation.

use rust_decimal::Decimal;
use thiserror::Error;

/// Error codes for calculator failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Non-positive or non-finite dimension (E100)
    InvalidDimension = 100,
    /// Label does not fit on the sheet even once (E101)
    LayoutImpossible = 101,
    /// Non-positive quantity (E200)
    InvalidQuantity = 200,
    /// Pricing requested with zero yield (E201)
    InvalidYield = 201,
    /// Non-positive unit price (E202)
    InvalidPrice = 202,
    /// Discount rate outside [0, 1) (E203)
    InvalidDiscountRate = 203,
    /// Form field is not a number (E300)
    InvalidNumber = 300,
    /// Rate card could not be read or parsed (E400)
    Config = 400,
}

/// Coarse classification for callers that only need to pick a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input values are malformed or out of range.
    Invalid,
    /// The input is well-formed but cannot be produced on the sheet.
    Impossible,
    /// The rate card or its source is broken.
    Config,
}

/// Main error type for the calculator.
#[derive(Debug, Error)]
pub enum CalcError {
    #[error("Invalid dimension '{field}': {value} (must be positive and countable)")]
    InvalidDimension { field: &'static str, value: f64 },

    #[error("Label {label_width} x {label_height} (spacing {spacing}) does not fit on usable area {usable_width} x {usable_height}")]
    LayoutImpossible {
        label_width: f64,
        label_height: f64,
        spacing: f64,
        usable_width: f64,
        usable_height: f64,
    },

    #[error("Invalid quantity: {quantity} (must be at least 1 and fit a whole sheet count)")]
    InvalidQuantity { quantity: u64 },

    #[error("Invalid yield: {per_sheet} labels per sheet")]
    InvalidYield { per_sheet: u64 },

    #[error("Invalid unit price: {price} (must be positive and keep totals in range)")]
    InvalidPrice { price: Decimal },

    #[error("Invalid discount rate: {rate} (must be in [0, 1))")]
    InvalidDiscountRate { rate: Decimal },

    #[error("Invalid numeric value for '{field}': '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Rate card error: {message}")]
    Config { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CalcError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            CalcError::InvalidDimension { .. } => ErrorCode::InvalidDimension,
            CalcError::LayoutImpossible { .. } => ErrorCode::LayoutImpossible,
            CalcError::InvalidQuantity { .. } => ErrorCode::InvalidQuantity,
            CalcError::InvalidYield { .. } => ErrorCode::InvalidYield,
            CalcError::InvalidPrice { .. } => ErrorCode::InvalidPrice,
            CalcError::InvalidDiscountRate { .. } => ErrorCode::InvalidDiscountRate,
            CalcError::InvalidNumber { .. } => ErrorCode::InvalidNumber,
            CalcError::Config { .. } => ErrorCode::Config,
            CalcError::Io(_) => ErrorCode::Config,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }

    /// Classify the error for user-facing messaging.
    pub fn kind(&self) -> ErrorKind {
        match self.code() {
            ErrorCode::LayoutImpossible => ErrorKind::Impossible,
            ErrorCode::Config => ErrorKind::Config,
            _ => ErrorKind::Invalid,
        }
    }
}

impl From<toml::de::Error> for CalcError {
    fn from(err: toml::de::Error) -> Self {
        CalcError::Config {
            message: err.to_string(),
        }
    }
}

/// Result type alias for calculator operations.
pub type Result<T> = std::result::Result<T, CalcError>;
