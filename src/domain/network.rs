// Copyright (c) 2025 - Cowboy AI, Inc.
//! Numbering Range Value Objects

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Inclusive interval of candidate VLAN numbers
///
/// A range with `min > max` is empty. Empty ranges are valid values: they
/// contain nothing and yield no free numbers.
///
/// # Examples
///
/// ```rust
/// use cim_vlan_numbering::domain::NumberRange;
///
/// let range = NumberRange::new(100, 110);
/// assert!(range.contains(105));
/// assert_eq!(range.width(), 11);
/// assert!(NumberRange::new(10, 1).is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NumberRange {
    min: u32,
    max: u32,
}

impl NumberRange {
    /// Create a new inclusive range
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Lower bound (inclusive)
    pub fn min(&self) -> u32 {
        self.min
    }

    /// Upper bound (inclusive)
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Check if the range holds no numbers
    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }

    /// Check if `number` falls within the range
    pub fn contains(&self, number: u32) -> bool {
        self.min <= number && number <= self.max
    }

    /// Count of numbers in the range
    pub fn width(&self) -> u64 {
        if self.is_empty() {
            0
        } else {
            u64::from(self.max - self.min) + 1
        }
    }

    /// Iterate the range in ascending order
    pub fn iter(&self) -> RangeInclusive<u32> {
        self.min..=self.max
    }
}

impl fmt::Display for NumberRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

impl From<(u32, u32)> for NumberRange {
    fn from((min, max): (u32, u32)) -> Self {
        Self::new(min, max)
    }
}

/// Primary and secondary numbering ranges, tried in that order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RangePair {
    pub primary: NumberRange,
    pub secondary: NumberRange,
}

impl RangePair {
    /// Create a new range pair
    pub const fn new(primary: NumberRange, secondary: NumberRange) -> Self {
        Self { primary, secondary }
    }

    /// Use the same range for both slots
    pub const fn single(range: NumberRange) -> Self {
        Self {
            primary: range,
            secondary: range,
        }
    }

    /// Check if `number` falls in either range
    pub fn contains(&self, number: u32) -> bool {
        self.primary.contains(number) || self.secondary.contains(number)
    }
}

impl fmt::Display for RangePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.primary, self.secondary)
    }
}
