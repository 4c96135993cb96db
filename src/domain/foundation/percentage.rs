//! Percentage value object (0-100 scale, one decimal place).

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::ValidationError;

const TENTHS_PER_HUNDRED: u16 = 1000;

/// A value between 0 and 100 inclusive, held in tenths of a percent.
///
/// Storing tenths keeps the type `Eq + Ord + Hash` while matching the
/// one-decimal precision the dashboard displays (`66.7`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Percentage(u16);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(TENTHS_PER_HUNDRED);

    /// Computes `numerator / denominator × 100`, rounded half-up to tenths.
    ///
    /// Returns `None` when the denominator is zero. Ratios above one clamp
    /// to 100.
    pub fn from_ratio(numerator: u64, denominator: u64) -> Option<Self> {
        if denominator == 0 {
            return None;
        }
        let numerator = numerator.min(denominator);
        let tenths = (numerator * 2 * u64::from(TENTHS_PER_HUNDRED) + denominator)
            / (2 * denominator);
        Some(Self(tenths as u16))
    }

    /// Like [`Percentage::from_ratio`], but a zero denominator yields zero.
    pub fn from_ratio_or_zero(numerator: u64, denominator: u64) -> Self {
        Self::from_ratio(numerator, denominator).unwrap_or(Self::ZERO)
    }

    /// Converts a floating point percentage, clamping into range.
    ///
    /// Non-finite input maps to zero.
    pub fn from_f64(value: f64) -> Self {
        if !value.is_finite() {
            return Self::ZERO;
        }
        let tenths = (value.clamp(0.0, 100.0) * 10.0).round();
        Self(tenths as u16)
    }

    /// Creates a Percentage, returning error if out of range.
    pub fn try_from_f64(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() || !(0.0..=100.0).contains(&value) {
            return Err(ValidationError::out_of_range(
                "percentage",
                0,
                100,
                value as i64,
            ));
        }
        Ok(Self::from_f64(value))
    }

    /// Weighted blend of two percentages, weights given in whole percent.
    ///
    /// The weights are expected to sum to 100; the result is clamped.
    pub fn blend(first: Self, first_weight: u16, second: Self, second_weight: u16) -> Self {
        let total = u32::from(first.0) * u32::from(first_weight)
            + u32::from(second.0) * u32::from(second_weight);
        let tenths = (total + 50) / 100;
        Self(tenths.min(u32::from(TENTHS_PER_HUNDRED)) as u16)
    }

    /// Returns the value on the 0-100 scale.
    pub fn value(&self) -> f64 {
        f64::from(self.0) / 10.0
    }

    /// Returns the value in tenths of a percent (0-1000).
    pub fn tenths(&self) -> u16 {
        self.0
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.value())
    }
}

impl Serialize for Percentage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.value())
    }
}

impl<'de> Deserialize<'de> for Percentage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Percentage::try_from_f64(value).map_err(serde::de::Error::custom)
    }
}
