//! Percentage value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A whole-number value between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Percentage(u8);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(100);

    /// Creates a new Percentage, clamping to valid range.
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Creates a Percentage, returning error if out of range.
    pub fn try_new(value: i64) -> Result<Self, ValidationError> {
        if !(0..=100).contains(&value) {
            return Err(ValidationError::out_of_range("percentage", 0, 100, value));
        }
        Ok(Self(value as u8))
    }

    /// Rounds a probability in `[0, 1]` to the nearest whole percent.
    pub fn from_fraction(fraction: f64) -> Self {
        let scaled = (fraction * 100.0).round();
        Self(scaled.clamp(0.0, 100.0) as u8)
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Adds whole points, capping at 100%.
    pub fn saturating_add(&self, points: u32) -> Self {
        let sum = u32::from(self.0).saturating_add(points).min(100);
        Self(sum as u8)
    }

    /// Points gained from `earlier` to `self`, zero if it did not grow.
    pub fn points_since(&self, earlier: Percentage) -> u8 {
        self.0.saturating_sub(earlier.0)
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl TryFrom<i64> for Percentage {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Percentage> for u8 {
    fn from(p: Percentage) -> Self {
        p.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
