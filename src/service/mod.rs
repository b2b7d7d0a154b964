// Copyright (c) 2025 - Cowboy AI, Inc.
//! Service Layer for VLAN Numbering
//!
//! This module provides the application service consumed by the inventory's
//! request layer.
//!
//! # Architecture
//!
//! ```text
//! Client Request
//!     ↓
//! Service Layer (this module)
//!     ↓
//! Environment lookup → RangeResolver
//!     ↓
//! NumberAllocator / AvailabilityChecker
//!     ↓
//! VlanRegistry
//!     ↓
//! Network block allocator (provisioning only)
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use cim_vlan_numbering::config::NumberingConfig;
//! use cim_vlan_numbering::domain::Environment;
//! use cim_vlan_numbering::registry::{InMemoryEnvironmentDirectory, InMemoryVlanRegistry};
//! use cim_vlan_numbering::service::{CreateVlanCommand, VlanNumberingService, VlanService};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = NumberingConfig::from_env()?;
//!     let environments = Arc::new(InMemoryEnvironmentDirectory::new());
//!     let env = Environment::new("datacenter-a");
//!     environments.insert(env.clone()).await;
//!
//!     let service = VlanNumberingService::new(
//!         &config,
//!         environments,
//!         Arc::new(InMemoryVlanRegistry::new()),
//!     );
//!
//!     let number = service
//!         .allocate_vlan_number(CreateVlanCommand {
//!             environment_id: env.id,
//!             name: "frontend".to_string(),
//!             description: None,
//!         })
//!         .await?;
//!     assert!(!service.check_number_available(env.id, number, None).await?);
//!
//!     Ok(())
//! }
//! ```

pub mod vlan;

pub use vlan::{
    CreateVlanCommand, NumberUsage, ProvisionVlanCommand, ProvisionedVlan, VlanNumberingService,
    VlanService,
};
