// Copyright (c) 2025 - Cowboy AI, Inc.
//! VLAN Numbering Service
//!
//! Application service exposing number allocation and availability checks
//! to the inventory's request layer. It coordinates:
//! - Input validation
//! - Environment lookup
//! - Number allocation through the registry
//! - Network block assignment for provisioned VLANs
//!
//! # Provisioning Semantics
//!
//! Provisioning is create-then-assign:
//! 1. Allocate a number and create the VLAN
//! 2. Ask the block allocator for a network block
//! 3. If step 2 fails, delete the VLAN created in step 1
//!
//! A VLAN without its network block is never left behind.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::block::{BlockAssignment, NetworkBlockAllocator, NetworkType};
use crate::config::NumberingConfig;
use crate::domain::{invariants, EnvironmentId, RangePair, Vlan, VlanDraft, VlanId};
use crate::errors::{VlanError, VlanResult};
use crate::numbering::{available_numbers, free_count, AvailabilityChecker, NumberAllocator};
use crate::registry::{EnvironmentDirectory, VlanRegistry};

/// Request to create a VLAN with an allocated number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateVlanCommand {
    pub environment_id: EnvironmentId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CreateVlanCommand {
    fn draft(&self) -> VlanDraft {
        VlanDraft {
            name: self.name.trim().to_string(),
            description: self.description.as_ref().map(|d| d.trim().to_string()),
        }
    }
}

/// Request to create a VLAN and assign it a network block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvisionVlanCommand {
    pub environment_id: EnvironmentId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub network_type: NetworkType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment_vip: Option<Uuid>,
}

/// VLAN together with its network block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvisionedVlan {
    pub vlan: Vlan,
    pub block: BlockAssignment,
}

/// Numbering usage of one environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberUsage {
    pub environment_id: EnvironmentId,
    pub ranges: RangePair,
    pub used: usize,
    pub free_primary: u64,
    pub free_secondary: u64,
    pub next_primary: Option<u32>,
    pub next_secondary: Option<u32>,
}

/// VLAN numbering service trait
#[async_trait]
pub trait VlanService: Send + Sync {
    /// Allocate a number for a new VLAN and return it
    ///
    /// The number is claimed by the created VLAN; a later availability check
    /// for it returns `false`.
    async fn allocate_vlan_number(&self, command: CreateVlanCommand) -> VlanResult<u32>;

    /// Create a VLAN with an allocated number
    async fn create_vlan(&self, command: CreateVlanCommand) -> VlanResult<Vlan>;

    /// Check if `number` is available in the environment
    ///
    /// `editing` names a VLAN being edited; its own number is always
    /// available to it. The environment is looked up before the edit
    /// exception applies, so an unknown environment is `EnvironmentNotFound`
    /// even for an edit that keeps its number.
    async fn check_number_available(
        &self,
        environment_id: EnvironmentId,
        number: u32,
        editing: Option<VlanId>,
    ) -> VlanResult<bool>;

    /// Create a VLAN and assign it a network block
    async fn provision_vlan(&self, command: ProvisionVlanCommand) -> VlanResult<ProvisionedVlan>;

    /// Get a VLAN by identity
    async fn get_vlan(&self, vlan_id: VlanId) -> VlanResult<Vlan>;

    /// Delete a VLAN, freeing its number
    async fn delete_vlan(&self, vlan_id: VlanId) -> VlanResult<Vlan>;

    /// Numbering usage of an environment
    async fn number_usage(&self, environment_id: EnvironmentId) -> VlanResult<NumberUsage>;
}

/// Registry-backed implementation of [`VlanService`]
pub struct VlanNumberingService {
    environments: Arc<dyn EnvironmentDirectory>,
    registry: Arc<dyn VlanRegistry>,
    allocator: NumberAllocator,
    checker: AvailabilityChecker,
    blocks: Option<Arc<dyn NetworkBlockAllocator>>,
}

impl VlanNumberingService {
    /// Create a service from startup configuration
    pub fn new(
        config: &NumberingConfig,
        environments: Arc<dyn EnvironmentDirectory>,
        registry: Arc<dyn VlanRegistry>,
    ) -> Self {
        let allocator = NumberAllocator::from_config(config, registry.clone());
        let checker = AvailabilityChecker::new(*allocator.resolver(), registry.clone());

        Self {
            environments,
            registry,
            allocator,
            checker,
            blocks: None,
        }
    }

    /// Attach the network block allocator used by provisioning
    pub fn with_block_allocator(mut self, blocks: Arc<dyn NetworkBlockAllocator>) -> Self {
        self.blocks = Some(blocks);
        self
    }
}

#[async_trait]
impl VlanService for VlanNumberingService {
    async fn allocate_vlan_number(&self, command: CreateVlanCommand) -> VlanResult<u32> {
        Ok(self.create_vlan(command).await?.number)
    }

    async fn create_vlan(&self, command: CreateVlanCommand) -> VlanResult<Vlan> {
        let draft = command.draft();
        invariants::validate_vlan_name(&draft.name)?;
        invariants::validate_description(draft.description.as_deref())?;

        let environment = self.environments.get_environment(command.environment_id).await?;
        self.allocator.allocate(&environment, &draft).await
    }

    async fn check_number_available(
        &self,
        environment_id: EnvironmentId,
        number: u32,
        editing: Option<VlanId>,
    ) -> VlanResult<bool> {
        let environment = self.environments.get_environment(environment_id).await?;
        self.checker.is_available(&environment, number, editing).await
    }

    async fn provision_vlan(&self, command: ProvisionVlanCommand) -> VlanResult<ProvisionedVlan> {
        let blocks = self.blocks.as_ref().ok_or_else(|| {
            VlanError::Configuration("no network block allocator configured".to_string())
        })?;

        let vlan = self
            .create_vlan(CreateVlanCommand {
                environment_id: command.environment_id,
                name: command.name,
                description: command.description,
            })
            .await?;

        match blocks
            .allocate_block(vlan.id, command.network_type, command.environment_vip)
            .await
        {
            Ok(block) => {
                info!(
                    vlan_id = %vlan.id,
                    number = vlan.number,
                    network = %block.as_cidr(),
                    "Provisioned VLAN"
                );
                Ok(ProvisionedVlan { vlan, block })
            }
            Err(block_err) => {
                warn!(
                    vlan_id = %vlan.id,
                    number = vlan.number,
                    network_type = %command.network_type,
                    error = %block_err,
                    "Network block allocation failed, removing VLAN"
                );
                if let Err(rollback_err) = self.registry.delete(vlan.id).await {
                    error!(
                        vlan_id = %vlan.id,
                        error = %rollback_err,
                        "Failed to remove VLAN after block allocation failure"
                    );
                }
                Err(block_err.into())
            }
        }
    }

    async fn get_vlan(&self, vlan_id: VlanId) -> VlanResult<Vlan> {
        self.registry.get_by_id(vlan_id).await
    }

    async fn delete_vlan(&self, vlan_id: VlanId) -> VlanResult<Vlan> {
        self.registry.delete(vlan_id).await
    }

    async fn number_usage(&self, environment_id: EnvironmentId) -> VlanResult<NumberUsage> {
        let environment = self.environments.get_environment(environment_id).await?;
        let ranges = self.allocator.resolver().resolve(&environment)?;
        let used = self.registry.used_numbers_in(environment_id).await?;

        Ok(NumberUsage {
            environment_id,
            ranges,
            used: used.len(),
            free_primary: free_count(ranges.primary, &used),
            free_secondary: free_count(ranges.secondary, &used),
            next_primary: available_numbers(ranges.primary, &used, true).into_iter().next(),
            next_secondary: available_numbers(ranges.secondary, &used, true).into_iter().next(),
        })
    }
}
