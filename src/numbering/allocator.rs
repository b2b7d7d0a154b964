// Copyright (c) 2025 - Cowboy AI, Inc.
//! VLAN number allocation
//!
//! Picks the smallest free number of the primary range, falling back to the
//! secondary range, and claims it in the registry.
//!
//! # Transaction Semantics
//!
//! Each allocation attempt is:
//! 1. Read the numbers in use in the environment
//! 2. Select the smallest free candidate
//! 3. Claim it with an atomic registry `create`
//!
//! The registry's uniqueness constraint is the backstop: a concurrent writer
//! that claims the candidate first turns step 3 into `DuplicateNumber`, and
//! the attempt is repeated against a fresh read. After the attempt bound the
//! allocation fails with `NumberExhausted`.

use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::availability::available_numbers;
use super::resolver::RangeResolver;
use crate::config::{NumberingConfig, DEFAULT_MAX_ALLOCATION_ATTEMPTS};
use crate::domain::{Environment, RangePair, Vlan, VlanDraft};
use crate::errors::{VlanError, VlanResult};
use crate::registry::VlanRegistry;

/// Choose the number to claim
///
/// Smallest free number of the primary range; the secondary range is only
/// consulted once the primary is exhausted.
pub fn select_number(ranges: RangePair, used: &HashSet<u32>) -> Option<u32> {
    available_numbers(ranges.primary, used, true)
        .into_iter()
        .next()
        .or_else(|| available_numbers(ranges.secondary, used, true).into_iter().next())
}

/// Allocates VLAN numbers and claims them in the registry
#[derive(Clone)]
pub struct NumberAllocator {
    resolver: RangeResolver,
    registry: Arc<dyn VlanRegistry>,
    max_attempts: u32,
}

impl NumberAllocator {
    /// Create an allocator with the default attempt bound
    pub fn new(resolver: RangeResolver, registry: Arc<dyn VlanRegistry>) -> Self {
        Self {
            resolver,
            registry,
            max_attempts: DEFAULT_MAX_ALLOCATION_ATTEMPTS,
        }
    }

    /// Create an allocator from startup configuration
    pub fn from_config(config: &NumberingConfig, registry: Arc<dyn VlanRegistry>) -> Self {
        Self {
            resolver: RangeResolver::from_defaults(config.default_ranges),
            registry,
            max_attempts: config.max_allocation_attempts.max(1),
        }
    }

    /// Set the attempt bound
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Range resolver in use
    pub fn resolver(&self) -> &RangeResolver {
        &self.resolver
    }

    /// Allocate a number and create the VLAN that owns it
    ///
    /// # Errors
    ///
    /// - `NumberExhausted` if both ranges are full, or if every attempt lost
    ///   its candidate to a concurrent writer
    /// - `DuplicateName` if the draft's name is taken in the environment
    /// - `Configuration` if the environment's ranges cannot be resolved
    pub async fn allocate(&self, environment: &Environment, draft: &VlanDraft) -> VlanResult<Vlan> {
        let ranges = self.resolver.resolve(environment)?;
        let exhausted = || VlanError::NumberExhausted {
            primary: ranges.primary,
            secondary: ranges.secondary,
        };

        // Numbers lost to concurrent writers during this allocation
        let mut contended: HashSet<u32> = HashSet::new();

        for attempt in 1..=self.max_attempts {
            let mut used = self.registry.used_numbers_in(environment.id).await?;
            used.extend(contended.iter().copied());

            let Some(number) = select_number(ranges, &used) else {
                warn!(
                    environment_id = %environment.id,
                    primary = %ranges.primary,
                    secondary = %ranges.secondary,
                    "VLAN number ranges exhausted"
                );
                return Err(exhausted());
            };

            debug!(environment_id = %environment.id, number, attempt, "Claiming VLAN number");

            match self.registry.create(draft.claim(environment.id, number)).await {
                Ok(vlan) => {
                    info!(
                        environment_id = %environment.id,
                        vlan_id = %vlan.id,
                        number,
                        "Allocated VLAN number"
                    );
                    return Ok(vlan);
                }
                Err(err) if err.is_race() => {
                    warn!(
                        environment_id = %environment.id,
                        number,
                        attempt,
                        "Lost VLAN number to a concurrent allocation, retrying"
                    );
                    contended.insert(number);
                }
                Err(err) => return Err(err),
            }
        }

        warn!(
            environment_id = %environment.id,
            attempts = self.max_attempts,
            "Giving up VLAN allocation after repeated contention"
        );
        Err(exhausted())
    }
}
