// Copyright (c) 2025 - Cowboy AI, Inc.
//! Environment Entity
//!
//! An environment is the scope within which VLAN numbers must be unique.
//! It may override the global numbering ranges with up to two custom
//! `(min, max)` pairs.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::NumberRange;

/// Environment identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnvironmentId(Uuid);

impl EnvironmentId {
    /// Generate a new time-ordered identity
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Wrap an existing UUID
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for EnvironmentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EnvironmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-environment override of the numbering ranges
///
/// Each pair counts only when both of its endpoints are set. A zero endpoint
/// counts as unset since VLAN numbers start at 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min1: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max1: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min2: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max2: Option<u32>,
}

impl RangeOverride {
    /// Override with only the first pair set
    pub fn primary(min: u32, max: u32) -> Self {
        Self {
            min1: Some(min),
            max1: Some(max),
            ..Self::default()
        }
    }

    /// Override with only the second pair set
    pub fn secondary(min: u32, max: u32) -> Self {
        Self {
            min2: Some(min),
            max2: Some(max),
            ..Self::default()
        }
    }

    /// Override with both pairs set
    pub fn both(primary: (u32, u32), secondary: (u32, u32)) -> Self {
        Self {
            min1: Some(primary.0),
            max1: Some(primary.1),
            min2: Some(secondary.0),
            max2: Some(secondary.1),
        }
    }

    /// First pair, if both endpoints are set
    pub fn complete_primary(&self) -> Option<NumberRange> {
        complete_pair(self.min1, self.max1)
    }

    /// Second pair, if both endpoints are set
    pub fn complete_secondary(&self) -> Option<NumberRange> {
        complete_pair(self.min2, self.max2)
    }
}

fn complete_pair(min: Option<u32>, max: Option<u32>) -> Option<NumberRange> {
    match (min.filter(|v| *v > 0), max.filter(|v| *v > 0)) {
        (Some(min), Some(max)) => Some(NumberRange::new(min, max)),
        _ => None,
    }
}

/// Environment entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    /// Identity
    pub id: EnvironmentId,

    /// Display name
    pub name: String,

    /// Optional numbering range override
    #[serde(default)]
    pub ranges: RangeOverride,
}

impl Environment {
    /// Create an environment that uses the global default ranges
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: EnvironmentId::new(),
            name: name.into(),
            ranges: RangeOverride::default(),
        }
    }

    /// Set the numbering range override
    pub fn with_ranges(mut self, ranges: RangeOverride) -> Self {
        self.ranges = ranges;
        self
    }

    /// Set a fixed identity
    pub fn with_id(mut self, id: EnvironmentId) -> Self {
        self.id = id;
        self
    }
}
