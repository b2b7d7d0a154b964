// Copyright (c) 2025 - Cowboy AI, Inc.
//! VLAN number availability checks
//!
//! Read-only. A verdict is a snapshot: it is not a reservation and can be
//! stale by the time a later create runs.

use std::sync::Arc;
use tracing::debug;

use super::availability::is_free;
use super::resolver::RangeResolver;
use crate::domain::{invariants, Environment, VlanId};
use crate::errors::VlanResult;
use crate::registry::VlanRegistry;

/// Answers whether a number is free in an environment
#[derive(Clone)]
pub struct AvailabilityChecker {
    resolver: RangeResolver,
    registry: Arc<dyn VlanRegistry>,
}

impl AvailabilityChecker {
    /// Create a checker
    pub fn new(resolver: RangeResolver, registry: Arc<dyn VlanRegistry>) -> Self {
        Self { resolver, registry }
    }

    /// Check if `candidate` is available in `environment`
    ///
    /// When `editing` names a VLAN that already owns `candidate`, the number
    /// is available to that edit and nothing else is consulted. Otherwise the
    /// number must fall in one of the resolved ranges and be absent from the
    /// registry.
    ///
    /// # Errors
    ///
    /// - `Validation` if `candidate` is zero
    /// - `VlanNotFound` if `editing` names a missing VLAN
    /// - `Configuration` if the environment's ranges cannot be resolved
    pub async fn is_available(
        &self,
        environment: &Environment,
        candidate: u32,
        editing: Option<VlanId>,
    ) -> VlanResult<bool> {
        invariants::validate_candidate_number(candidate)?;

        if let Some(vlan_id) = editing {
            let vlan = self.registry.get_by_id(vlan_id).await?;
            if vlan.number == candidate {
                debug!(
                    vlan_id = %vlan_id,
                    number = candidate,
                    "Number owned by the VLAN being edited"
                );
                return Ok(true);
            }
        }

        self.is_free_in(environment, candidate).await
    }

    /// Check `candidate` against ranges and registry, ignoring edit context
    pub async fn is_free_in(&self, environment: &Environment, candidate: u32) -> VlanResult<bool> {
        let ranges = self.resolver.resolve(environment)?;
        let used = self.registry.used_numbers_in(environment.id).await?;

        let in_free_range = is_free(ranges.primary, &used, candidate)
            || is_free(ranges.secondary, &used, candidate);
        if !in_free_range {
            debug!(
                environment_id = %environment.id,
                number = candidate,
                "Number outside free ranges"
            );
            return Ok(false);
        }

        // The registry has the final word over the range snapshot
        let taken = self.registry.exists(environment.id, candidate).await?;
        debug!(
            environment_id = %environment.id,
            number = candidate,
            available = !taken,
            "Checked VLAN number availability"
        );
        Ok(!taken)
    }
}
