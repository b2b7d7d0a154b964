// Copyright (c) 2025 - Cowboy AI, Inc.
//! VLAN numbering configuration
//!
//! Loaded once at startup and injected into the resolver and allocator.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::domain::{NumberRange, RangePair};
use crate::errors::{VlanError, VlanResult};

/// Environment variable for the primary range lower bound
pub const ENV_MIN_NUMBER_01: &str = "VLAN_MIN_NUMBER_01";
/// Environment variable for the primary range upper bound
pub const ENV_MAX_NUMBER_01: &str = "VLAN_MAX_NUMBER_01";
/// Environment variable for the secondary range lower bound
pub const ENV_MIN_NUMBER_02: &str = "VLAN_MIN_NUMBER_02";
/// Environment variable for the secondary range upper bound
pub const ENV_MAX_NUMBER_02: &str = "VLAN_MAX_NUMBER_02";
/// Environment variable for the allocation retry bound
pub const ENV_MAX_ALLOCATION_ATTEMPTS: &str = "VLAN_MAX_ALLOCATION_ATTEMPTS";

/// Default bound on allocation attempts after lost races
pub const DEFAULT_MAX_ALLOCATION_ATTEMPTS: u32 = 64;

fn default_max_allocation_attempts() -> u32 {
    DEFAULT_MAX_ALLOCATION_ATTEMPTS
}

/// Configuration for VLAN number allocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberingConfig {
    /// Global default ranges for environments without an override
    #[serde(default)]
    pub default_ranges: Option<RangePair>,

    /// Attempts before a contended allocation gives up
    #[serde(default = "default_max_allocation_attempts")]
    pub max_allocation_attempts: u32,
}

impl Default for NumberingConfig {
    fn default() -> Self {
        Self {
            default_ranges: None,
            max_allocation_attempts: DEFAULT_MAX_ALLOCATION_ATTEMPTS,
        }
    }
}

impl NumberingConfig {
    /// Create a configuration with the given default ranges
    pub fn with_defaults(primary: NumberRange, secondary: NumberRange) -> Self {
        Self {
            default_ranges: Some(RangePair::new(primary, secondary)),
            ..Self::default()
        }
    }

    /// Set the allocation attempt bound
    pub fn with_max_allocation_attempts(mut self, attempts: u32) -> Self {
        self.max_allocation_attempts = attempts;
        self
    }

    /// Load configuration from process environment variables
    ///
    /// The four range bounds are set together or not at all. With none set
    /// there are no global defaults and every environment must override.
    pub fn from_env() -> VlanResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> VlanResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let parse = |key: &str, raw: &str| -> VlanResult<u32> {
            raw.trim()
                .parse::<u32>()
                .map_err(|_| VlanError::Configuration(format!("{key} is not a number: {raw}")))
        };

        let keys = [
            ENV_MIN_NUMBER_01,
            ENV_MAX_NUMBER_01,
            ENV_MIN_NUMBER_02,
            ENV_MAX_NUMBER_02,
        ];
        let raw = keys.map(|key| lookup(key));

        let default_ranges = if raw.iter().all(Option::is_none) {
            None
        } else {
            let mut bounds = [0u32; 4];
            for ((key, value), bound) in keys.into_iter().zip(&raw).zip(bounds.iter_mut()) {
                let value = value.as_deref().ok_or_else(|| {
                    VlanError::Configuration(format!(
                        "{key} is not set; range bounds must be set together"
                    ))
                })?;
                *bound = parse(key, value)?;
            }
            Some(RangePair::new(
                NumberRange::new(bounds[0], bounds[1]),
                NumberRange::new(bounds[2], bounds[3]),
            ))
        };

        let max_allocation_attempts = match lookup(ENV_MAX_ALLOCATION_ATTEMPTS) {
            Some(raw) => parse(ENV_MAX_ALLOCATION_ATTEMPTS, &raw)?,
            None => DEFAULT_MAX_ALLOCATION_ATTEMPTS,
        };

        let config = Self {
            default_ranges,
            max_allocation_attempts,
        };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON file
    pub async fn from_json_file(path: impl AsRef<Path>) -> VlanResult<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
            VlanError::Configuration(format!("cannot read {}: {}", path.display(), e))
        })?;

        let config: Self = serde_json::from_str(&raw).map_err(|e| {
            VlanError::Configuration(format!("cannot parse {}: {}", path.display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check startup invariants
    pub fn validate(&self) -> VlanResult<()> {
        if self.max_allocation_attempts == 0 {
            return Err(VlanError::Configuration(
                "max_allocation_attempts must be at least 1".to_string(),
            ));
        }

        if let Some(ranges) = &self.default_ranges {
            for (slot, range) in [("primary", ranges.primary), ("secondary", ranges.secondary)] {
                if range.min() == 0 || range.is_empty() {
                    return Err(VlanError::Configuration(format!(
                        "invalid {slot} default range {range}"
                    )));
                }
            }
        }

        Ok(())
    }
}
