// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for cim-vlan-numbering
//!
//! Deterministic environments and service wiring shared by the integration
//! tests. Environment identities are fixed constants so failures are
//! reproducible.

#![allow(dead_code)]

use std::sync::Arc;
use uuid::Uuid;

use cim_vlan_numbering::domain::{Environment, EnvironmentId, NumberRange, RangeOverride};
use cim_vlan_numbering::registry::{InMemoryEnvironmentDirectory, InMemoryVlanRegistry};
use cim_vlan_numbering::service::{CreateVlanCommand, VlanNumberingService};
use cim_vlan_numbering::NumberingConfig;

// Fixed test UUIDs (UUID v7 format, but deterministic for testing)
pub const ENVIRONMENT_ID_1: &str = "01934f4a-e001-7000-8000-00000000e001";
pub const ENVIRONMENT_ID_2: &str = "01934f4a-e002-7000-8000-00000000e002";

/// Parse a fixed UUID from a constant string
pub fn parse_uuid(s: &str) -> Uuid {
    Uuid::parse_str(s).expect("Invalid UUID in test fixture")
}

/// Default ranges used across the integration tests: (1,10) and (100,110)
pub fn default_config() -> NumberingConfig {
    NumberingConfig::with_defaults(NumberRange::new(1, 10), NumberRange::new(100, 110))
}

/// Environment without range override
pub fn plain_environment() -> Environment {
    Environment::new("datacenter-a").with_id(EnvironmentId::from_uuid(parse_uuid(ENVIRONMENT_ID_1)))
}

/// Environment with a custom primary pair only
pub fn custom_environment(min: u32, max: u32) -> Environment {
    Environment::new("datacenter-b")
        .with_id(EnvironmentId::from_uuid(parse_uuid(ENVIRONMENT_ID_2)))
        .with_ranges(RangeOverride::primary(min, max))
}

/// Service wiring over in-memory stores
pub struct Harness {
    pub environments: Arc<InMemoryEnvironmentDirectory>,
    pub registry: Arc<InMemoryVlanRegistry>,
    pub service: Arc<VlanNumberingService>,
}

impl Harness {
    /// Build a harness with the given configuration and environments
    pub async fn new(config: NumberingConfig, environments: Vec<Environment>) -> Self {
        let directory = Arc::new(InMemoryEnvironmentDirectory::new());
        for environment in environments {
            directory.insert(environment).await;
        }

        let registry = Arc::new(InMemoryVlanRegistry::new());
        let service = Arc::new(VlanNumberingService::new(
            &config,
            directory.clone(),
            registry.clone(),
        ));

        Self {
            environments: directory,
            registry,
            service,
        }
    }
}

/// Create command with a deterministic name
pub fn create_command(environment_id: EnvironmentId, index: usize) -> CreateVlanCommand {
    CreateVlanCommand {
        environment_id,
        name: format!("vlan-{index:03}"),
        description: Some(format!("test vlan {index}")),
    }
}
