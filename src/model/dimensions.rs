//! Label and substrate geometry.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::{self, Unit};

/// Width and height of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    /// Square label sizes offered for quick selection, in mm (2 x 2 to 8 x 8 cm).
    pub const COMMON_SIZES: [Dimensions; 6] = [
        Dimensions::new(20.0, 20.0),
        Dimensions::new(30.0, 30.0),
        Dimensions::new(40.0, 40.0),
        Dimensions::new(50.0, 50.0),
        Dimensions::new(60.0, 60.0),
        Dimensions::new(80.0, 80.0),
    ];

    /// Create new dimensions.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Convert from `unit` to millimeters.
    pub fn to_mm(&self, unit: Unit) -> Self {
        Self {
            width: unit.to_mm(self.width),
            height: unit.to_mm(self.height),
        }
    }
}

impl FromStr for Dimensions {
    type Err = String;

    /// Parse `WxH`, e.g. `40x40`, `4.5X3` or `40×25`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s
            .trim()
            .split_once(['x', 'X', '×', '*'])
            .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{}'", s))?;
        let width = w
            .trim()
            .parse::<f64>()
            .map_err(|_| format!("invalid width '{}'", w.trim()))?;
        let height = h
            .trim()
            .parse::<f64>()
            .map_err(|_| format!("invalid height '{}'", h.trim()))?;
        Ok(Self { width, height })
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} x {}", self.width, self.height)
    }
}

/// Printable substrate with a uniform edge margin.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SubstrateSheet {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
}

impl SubstrateSheet {
    /// Create a new sheet.
    pub fn new(width: f64, height: f64, margin: f64) -> Self {
        Self {
            width,
            height,
            margin,
        }
    }

    /// Width left after removing the margin on both sides.
    pub fn usable_width(&self) -> f64 {
        self.width - 2.0 * self.margin
    }

    /// Height left after removing the margin on both sides.
    pub fn usable_height(&self) -> f64 {
        self.height - 2.0 * self.margin
    }

    /// Same sheet with a different margin.
    pub fn with_margin(self, margin: f64) -> Self {
        Self { margin, ..self }
    }

    /// Convert from `unit` to millimeters.
    pub fn to_mm(&self, unit: Unit) -> Self {
        Self {
            width: unit.to_mm(self.width),
            height: unit.to_mm(self.height),
            margin: unit.to_mm(self.margin),
        }
    }
}

/// Standard substrates offered by the shop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SheetPreset {
    /// One running metre of 57 cm roll.
    #[default]
    Roll,
    /// 32 x 45 cm cut sheet.
    Sheet,
}

impl SheetPreset {
    /// Sheet geometry in millimeters, without margin.
    pub fn substrate(&self) -> SubstrateSheet {
        match self {
            SheetPreset::Roll => {
                SubstrateSheet::new(config::ROLL_WIDTH_MM, config::ROLL_HEIGHT_MM, 0.0)
            }
            SheetPreset::Sheet => {
                SubstrateSheet::new(config::SHEET_WIDTH_MM, config::SHEET_HEIGHT_MM, 0.0)
            }
        }
    }
}

impl FromStr for SheetPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "roll" | "metre" | "meter" => Ok(SheetPreset::Roll),
            "sheet" => Ok(SheetPreset::Sheet),
            other => Err(format!("unknown sheet '{}' (expected roll or sheet)", other)),
        }
    }
}
