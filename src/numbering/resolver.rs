// Copyright (c) 2025 - Cowboy AI, Inc.
//! Range resolution
//!
//! Decides which two ranges an environment draws VLAN numbers from.

use tracing::debug;

use crate::domain::{Environment, RangeOverride, RangePair};
use crate::errors::{VlanError, VlanResult};

/// Resolve an override against the global defaults
///
/// # Rules
/// - Both override pairs complete: `(pair1, pair2)`
/// - Only pair 1 complete: `(pair1, pair1)`
/// - Only pair 2 complete: `(pair2, pair2)`
/// - Neither complete: the defaults verbatim
///
/// Returns `None` when no override pair is complete and no defaults exist.
pub fn resolve_ranges(ranges: &RangeOverride, defaults: Option<RangePair>) -> Option<RangePair> {
    match (ranges.complete_primary(), ranges.complete_secondary()) {
        (Some(primary), Some(secondary)) => Some(RangePair::new(primary, secondary)),
        (Some(only), None) | (None, Some(only)) => Some(RangePair::single(only)),
        (None, None) => defaults,
    }
}

/// Resolves the numbering ranges of an environment
///
/// Holds the global defaults injected at construction; resolution is pure
/// for a fixed environment configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeResolver {
    defaults: Option<RangePair>,
}

impl RangeResolver {
    /// Create a resolver with global default ranges
    pub fn new(defaults: RangePair) -> Self {
        Self {
            defaults: Some(defaults),
        }
    }

    /// Create a resolver with no global defaults
    ///
    /// Every environment resolved through it must carry an override.
    pub fn without_defaults() -> Self {
        Self { defaults: None }
    }

    /// Create a resolver from optional defaults
    pub fn from_defaults(defaults: Option<RangePair>) -> Self {
        Self { defaults }
    }

    /// Global defaults, if configured
    pub fn defaults(&self) -> Option<RangePair> {
        self.defaults
    }

    /// Resolve `(primary, secondary)` for an environment
    ///
    /// # Errors
    ///
    /// - `Configuration` if the environment has no complete override and no
    ///   defaults are configured
    pub fn resolve(&self, environment: &Environment) -> VlanResult<RangePair> {
        let pair = resolve_ranges(&environment.ranges, self.defaults).ok_or_else(|| {
            VlanError::Configuration(format!(
                "no default VLAN ranges configured and environment {} has no override",
                environment.id
            ))
        })?;

        debug!(
            environment_id = %environment.id,
            primary = %pair.primary,
            secondary = %pair.secondary,
            "Resolved VLAN number ranges"
        );
        Ok(pair)
    }
}
