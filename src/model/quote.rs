//! Pricing inputs and the resulting quote.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{CalcError, Result};

/// Print finish offered by the shop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrintType {
    #[default]
    Normal,
    Metallic,
}

impl FromStr for PrintType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "normal" => Ok(PrintType::Normal),
            "metallic" => Ok(PrintType::Metallic),
            other => Err(format!(
                "unknown print type '{}' (expected normal or metallic)",
                other
            )),
        }
    }
}

impl std::fmt::Display for PrintType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PrintType::Normal => write!(f, "normal"),
            PrintType::Metallic => write!(f, "metallic"),
        }
    }
}

/// What the unit price is multiplied by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingBasis {
    #[default]
    PerSheet,
    PerUnit,
}

impl FromStr for PricingBasis {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "per-sheet" | "sheet" => Ok(PricingBasis::PerSheet),
            "per-unit" | "unit" => Ok(PricingBasis::PerUnit),
            other => Err(format!(
                "unknown pricing basis '{}' (expected per-sheet or per-unit)",
                other
            )),
        }
    }
}

/// Unit price together with the basis it applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "basis", rename_all = "snake_case")]
pub enum PricingMode {
    /// Billed per sheet used.
    PerSheet { unit_price: Decimal },
    /// Billed per label ordered.
    PerUnit { unit_price: Decimal },
}

impl PricingMode {
    pub fn unit_price(&self) -> Decimal {
        match self {
            PricingMode::PerSheet { unit_price } | PricingMode::PerUnit { unit_price } => {
                *unit_price
            }
        }
    }

    pub fn basis(&self) -> PricingBasis {
        match self {
            PricingMode::PerSheet { .. } => PricingBasis::PerSheet,
            PricingMode::PerUnit { .. } => PricingBasis::PerUnit,
        }
    }
}

/// Flat discount applied once the billed quantity reaches a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTier {
    pub threshold_quantity: u64,
    pub discount_rate: Decimal,
}

impl PriceTier {
    pub fn new(threshold_quantity: u64, discount_rate: Decimal) -> Self {
        Self {
            threshold_quantity,
            discount_rate,
        }
    }
}

/// Volume discount tiers, sorted by ascending threshold.
///
/// The tier with the highest threshold that the billed quantity reaches
/// applies; tiers never stack.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DiscountSchedule {
    tiers: Vec<PriceTier>,
}

impl DiscountSchedule {
    /// Build a schedule, rejecting rates outside [0, 1).
    pub fn new(mut tiers: Vec<PriceTier>) -> Result<Self> {
        for tier in &tiers {
            if tier.discount_rate < Decimal::ZERO || tier.discount_rate >= Decimal::ONE {
                return Err(CalcError::InvalidDiscountRate {
                    rate: tier.discount_rate,
                });
            }
        }
        tiers.sort_by_key(|t| t.threshold_quantity);
        Ok(Self { tiers })
    }

    /// Schedule with a single tier.
    pub fn single(tier: PriceTier) -> Result<Self> {
        Self::new(vec![tier])
    }

    /// Schedule that never discounts.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn tiers(&self) -> &[PriceTier] {
        &self.tiers
    }

    /// Tier applying to `billed_quantity`, if any.
    pub fn applicable(&self, billed_quantity: u64) -> Option<&PriceTier> {
        self.tiers
            .iter()
            .rev()
            .find(|t| billed_quantity >= t.threshold_quantity)
    }

    /// Lowest tier not yet reached by `billed_quantity`.
    pub fn next_tier(&self, billed_quantity: u64) -> Option<&PriceTier> {
        self.tiers
            .iter()
            .find(|t| billed_quantity < t.threshold_quantity)
    }
}

/// Outcome of pricing one calculation.
///
/// Money values are unrounded; round only for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceQuote {
    pub mode: PricingMode,
    pub unit_price: Decimal,
    pub required_quantity: u64,
    pub sheets_required: u64,
    pub produced_labels: u64,
    /// Sheets in per-sheet mode, labels in per-unit mode.
    pub billed_quantity: u64,
    pub subtotal: Decimal,
    pub discount: Decimal,
    pub total: Decimal,
    /// Tier that produced `discount`, if one applied.
    pub applied_tier: Option<PriceTier>,
    pub efficiency_percent: f64,
}

impl PriceQuote {
    /// Share of produced labels that were not ordered.
    pub fn waste_percent(&self) -> f64 {
        100.0 - self.efficiency_percent
    }

    /// Produced labels beyond the required quantity.
    pub fn surplus_labels(&self) -> u64 {
        self.produced_labels - self.required_quantity
    }

    pub fn has_discount(&self) -> bool {
        self.discount > Decimal::ZERO
    }
}
