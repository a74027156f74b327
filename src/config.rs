//! Configuration constants, units and the rate card.

use std::path::Path;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{CalcError, Result};
use crate::model::{DiscountSchedule, PriceTier, PricingBasis, PricingMode, PrintType};

/// Fraction of one label pitch tolerated as rounding noise when counting fits.
pub const FIT_TOLERANCE: f64 = 1e-9;

/// Default cutting gap between adjacent labels, in mm.
pub const DEFAULT_SPACING_MM: f64 = 2.0;

/// Default unprintable border, in mm.
pub const DEFAULT_MARGIN_MM: f64 = 0.0;

/// Running metre of roll: 57 cm wide, 1 m long.
pub const ROLL_WIDTH_MM: f64 = 570.0;
pub const ROLL_HEIGHT_MM: f64 = 1000.0;

/// Cut sheet: 32 x 45 cm.
pub const SHEET_WIDTH_MM: f64 = 320.0;
pub const SHEET_HEIGHT_MM: f64 = 450.0;

/// Waste percentage above which a size adjustment is suggested.
pub const HIGH_WASTE_PERCENT: f64 = 15.0;

/// Efficiency percentage considered good utilization.
pub const GOOD_EFFICIENCY_PERCENT: f64 = 80.0;

/// Conversion factor: cm to mm.
pub const CONV_CM_MM: f64 = 10.0;

/// Conversion factor: inch to mm.
pub const CONV_INCH_MM: f64 = 25.4;

/// Unit of measurement for dimension input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Millimeters,
    Centimeters,
    Inches,
}

impl Unit {
    /// Get the conversion factor to convert from this unit to millimeters.
    pub fn to_mm_factor(&self) -> f64 {
        match self {
            Unit::Millimeters => 1.0,
            Unit::Centimeters => CONV_CM_MM,
            Unit::Inches => CONV_INCH_MM,
        }
    }

    /// Convert a value in this unit to millimeters.
    pub fn to_mm(&self, value: f64) -> f64 {
        value * self.to_mm_factor()
    }
}

impl FromStr for Unit {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mm" | "millimeters" => Ok(Unit::Millimeters),
            "cm" | "centimeters" => Ok(Unit::Centimeters),
            "in" | "inch" | "inches" => Ok(Unit::Inches),
            other => Err(format!("unknown unit '{}' (expected mm, cm or inch)", other)),
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Unit::Millimeters => write!(f, "mm"),
            Unit::Centimeters => write!(f, "cm"),
            Unit::Inches => write!(f, "inch"),
        }
    }
}

/// Unit prices and discount tiers for one pricing basis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasisRates {
    /// Price for standard UV print.
    pub normal: Decimal,
    /// Price for metallic print.
    pub metallic: Decimal,
    /// Volume discount tiers.
    #[serde(default)]
    pub discounts: Vec<PriceTier>,
}

impl BasisRates {
    /// Unit price for a print type.
    pub fn price_for(&self, print_type: PrintType) -> Decimal {
        match print_type {
            PrintType::Normal => self.normal,
            PrintType::Metallic => self.metallic,
        }
    }
}

/// Storefront price list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateCard {
    /// Currency symbol used in reports.
    pub currency: String,
    /// Prices per sheet (or running metre).
    pub per_sheet: BasisRates,
    /// Prices per label.
    pub per_unit: BasisRates,
}

impl Default for RateCard {
    fn default() -> Self {
        Self {
            currency: "₺".to_string(),
            per_sheet: BasisRates {
                normal: dec!(20),
                metallic: dec!(50),
                discounts: vec![PriceTier::new(10, dec!(0.30))],
            },
            per_unit: BasisRates {
                normal: dec!(2.50),
                metallic: dec!(5.00),
                discounts: vec![
                    PriceTier::new(50, dec!(0.10)),
                    PriceTier::new(100, dec!(0.15)),
                ],
            },
        }
    }
}

impl RateCard {
    /// Parse and validate a rate card from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let card: RateCard = toml::from_str(text)?;
        card.validate()?;
        Ok(card)
    }

    /// Load a rate card from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        tracing::debug!("Loaded rate card from {}", path.display());
        Self::from_toml_str(&text)
    }

    /// Check every price is positive and every discount rate is in range.
    pub fn validate(&self) -> Result<()> {
        for rates in [&self.per_sheet, &self.per_unit] {
            for price in [rates.normal, rates.metallic] {
                if price <= Decimal::ZERO {
                    return Err(CalcError::InvalidPrice { price });
                }
            }
            DiscountSchedule::new(rates.discounts.clone())?;
        }
        Ok(())
    }

    fn rates(&self, basis: PricingBasis) -> &BasisRates {
        match basis {
            PricingBasis::PerSheet => &self.per_sheet,
            PricingBasis::PerUnit => &self.per_unit,
        }
    }

    /// Pricing mode for the given print type and basis.
    pub fn pricing_mode(&self, print_type: PrintType, basis: PricingBasis) -> PricingMode {
        let unit_price = self.rates(basis).price_for(print_type);
        match basis {
            PricingBasis::PerSheet => PricingMode::PerSheet { unit_price },
            PricingBasis::PerUnit => PricingMode::PerUnit { unit_price },
        }
    }

    /// Discount schedule for the given basis.
    pub fn discounts(&self, basis: PricingBasis) -> Result<DiscountSchedule> {
        DiscountSchedule::new(self.rates(basis).discounts.clone())
    }
}

/// Utility functions for floating-point comparisons.
pub mod float_cmp {
    use super::FIT_TOLERANCE;

    /// Number of whole `pitch` steps that fit in `span`.
    ///
    /// Up to `FIT_TOLERANCE` of one pitch is treated as rounding noise so
    /// exact fits are not lost. Returns `None` when the count does not fit
    /// in a `u64`.
    #[inline]
    pub fn fit_count(span: f64, pitch: f64) -> Option<u64> {
        if span <= 0.0 || pitch <= 0.0 {
            return Some(0);
        }
        let count = (span / pitch + FIT_TOLERANCE).floor();
        if !count.is_finite() || count >= u64::MAX as f64 {
            return None;
        }
        Some(count as u64)
    }
}
