//! Estimate inputs and the calculated breakdown.

use std::fmt;

use serde::{Deserialize, de};
use thiserror::Error;

use crate::rates::{CityType, ConstructionType};

// ============================================================================
// Area
// ============================================================================

/// Build area in square feet.
///
/// Invariant: finite and strictly positive. Holding an `Area` is the proof
/// that an estimate can be computed.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Area(f64);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AreaError {
    #[error("area is empty")]
    Empty,
    #[error("area {0:?} is not a number")]
    NotANumber(String),
    #[error("area must be greater than zero")]
    NotPositive,
}

impl Area {
    pub fn new(value: f64) -> Result<Self, AreaError> {
        if !value.is_finite() {
            return Err(AreaError::NotANumber(value.to_string()));
        }
        if value <= 0.0 {
            return Err(AreaError::NotPositive);
        }
        Ok(Self(value))
    }

    /// Parse user-entered text. Surrounding whitespace is ignored.
    pub fn parse(text: &str) -> Result<Self, AreaError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(AreaError::Empty);
        }
        let value: f64 = trimmed
            .parse()
            .map_err(|_| AreaError::NotANumber(trimmed.to_string()))?;
        Self::new(value)
    }

    #[must_use]
    pub const fn sq_ft(self) -> f64 {
        self.0
    }
}

impl<'de> Deserialize<'de> for Area {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Self::new(value).map_err(de::Error::custom)
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Material adjustment
// ============================================================================

/// Material finish uplift, an integer percentage in `0..=20`.
///
/// Mirrors a slider: construction clamps and stepping saturates at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct MaterialPercent(u8);

impl MaterialPercent {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 20;

    #[must_use]
    pub fn new(percent: u8) -> Self {
        Self(percent.min(Self::MAX))
    }

    /// Clamp an arbitrary (possibly negative) value into range.
    #[must_use]
    pub fn clamped(percent: i64) -> Self {
        Self(percent.clamp(i64::from(Self::MIN), i64::from(Self::MAX)) as u8)
    }

    #[must_use]
    pub fn step(self, delta: i8) -> Self {
        Self::clamped(i64::from(self.0) + i64::from(delta))
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// The uplift as a fraction (`5%` -> `0.05`).
    #[must_use]
    pub fn fraction(self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl<'de> Deserialize<'de> for MaterialPercent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = i64::deserialize(deserializer)?;
        Ok(Self::clamped(value))
    }
}

// ============================================================================
// Input snapshot and result
// ============================================================================

/// A validated snapshot of the four form inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimateInput {
    pub area: Area,
    pub construction_type: ConstructionType,
    pub city_type: CityType,
    pub material_percent: MaterialPercent,
}

/// Itemized estimate. Every field is derived from an [`EstimateInput`] and the
/// fixed rate tables; a new value replaces the old one on each calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationResult {
    pub base_cost: f64,
    pub city_adjusted_cost: f64,
    pub material_adjustment: f64,
    pub subtotal: f64,
    pub contingency: f64,
    pub final_total: f64,
    pub cost_per_sq_ft: f64,
}

#[cfg(test)]
mod tests {
    use super::{Area, AreaError, MaterialPercent};

    #[test]
    fn area_parses_plain_and_decimal_text() {
        assert_eq!(Area::parse("1200").unwrap().sq_ft(), 1200.0);
        assert_eq!(Area::parse(" 950.5 ").unwrap().sq_ft(), 950.5);
        assert_eq!(Area::parse("12.").unwrap().sq_ft(), 12.0);
        assert_eq!(Area::parse(".5").unwrap().sq_ft(), 0.5);
    }

    #[test]
    fn area_displays_without_trailing_zeros() {
        assert_eq!(Area::parse("1200").unwrap().to_string(), "1200");
        assert_eq!(Area::parse("950.50").unwrap().to_string(), "950.5");
    }

    #[test]
    fn area_rejects_empty_and_garbage() {
        assert_eq!(Area::parse(""), Err(AreaError::Empty));
        assert_eq!(Area::parse("   "), Err(AreaError::Empty));
        assert!(matches!(Area::parse("abc"), Err(AreaError::NotANumber(_))));
        assert!(matches!(Area::parse("."), Err(AreaError::NotANumber(_))));
        assert!(matches!(Area::parse("inf"), Err(AreaError::NotANumber(_))));
        assert!(matches!(Area::parse("NaN"), Err(AreaError::NotANumber(_))));
    }

    #[test]
    fn area_rejects_zero_and_negative() {
        assert_eq!(Area::parse("0"), Err(AreaError::NotPositive));
        assert_eq!(Area::parse("-10"), Err(AreaError::NotPositive));
        assert_eq!(Area::new(-0.0), Err(AreaError::NotPositive));
    }

    #[test]
    fn material_percent_clamps_and_saturates() {
        assert_eq!(MaterialPercent::new(25).value(), 20);
        assert_eq!(MaterialPercent::clamped(-3).value(), 0);
        assert_eq!(MaterialPercent::new(20).step(1).value(), 20);
        assert_eq!(MaterialPercent::new(0).step(-1).value(), 0);
        assert_eq!(MaterialPercent::new(5).step(1).value(), 6);
    }

    #[test]
    fn material_fraction() {
        assert_eq!(MaterialPercent::new(0).fraction(), 0.0);
        assert_eq!(MaterialPercent::new(5).fraction(), 0.05);
        assert_eq!(MaterialPercent::new(20).fraction(), 0.2);
    }
}
