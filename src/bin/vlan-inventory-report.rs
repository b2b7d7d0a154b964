// Copyright (c) 2025 - Cowboy AI, Inc.
//! VLAN Inventory Report
//!
//! Loads an inventory snapshot and reports, per environment, the resolved
//! numbering ranges and the next free VLAN numbers.
//!
//! Run with: cargo run --bin vlan-inventory-report -- inventory.json
//!
//! Prerequisites:
//! 1. VLAN_MIN_NUMBER_01, VLAN_MAX_NUMBER_01, VLAN_MIN_NUMBER_02 and
//!    VLAN_MAX_NUMBER_02 set together, or left unset when every environment
//!    in the snapshot overrides its ranges
//! 2. A snapshot file of the form `{"environments": [...], "vlans": [...]}`

use anyhow::{Context, Result};
use cim_vlan_numbering::{
    domain::{Environment, Vlan},
    registry::{InMemoryEnvironmentDirectory, InMemoryVlanRegistry},
    NumberingConfig, VlanNumberingService, VlanService,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Inventory snapshot file layout
#[derive(Debug, Default, Deserialize)]
struct InventorySnapshot {
    #[serde(default)]
    environments: Vec<Environment>,
    #[serde(default)]
    vlans: Vec<Vlan>,
}

impl InventorySnapshot {
    async fn load(path: Option<String>) -> Result<Self> {
        let Some(path) = path else {
            warn!("No snapshot given, reporting an empty inventory");
            return Ok(Self::default());
        };

        let raw = tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read snapshot {path}"))?;
        serde_json::from_str(&raw).with_context(|| format!("Failed to parse snapshot {path}"))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = NumberingConfig::from_env().context("Invalid VLAN numbering configuration")?;
    match config.default_ranges {
        Some(ranges) => info!(
            primary = %ranges.primary,
            secondary = %ranges.secondary,
            max_allocation_attempts = config.max_allocation_attempts,
            "Configuration loaded"
        ),
        None => warn!(
            max_allocation_attempts = config.max_allocation_attempts,
            "No default VLAN ranges configured, environments must override"
        ),
    }

    let snapshot = InventorySnapshot::load(std::env::args().nth(1)).await?;

    let environments = Arc::new(InMemoryEnvironmentDirectory::new());
    for environment in snapshot.environments {
        environments.insert(environment).await;
    }

    let registry = Arc::new(InMemoryVlanRegistry::new());
    for vlan in snapshot.vlans {
        let vlan_id = vlan.id;
        if let Err(e) = registry.restore(vlan).await {
            error!(vlan_id = %vlan_id, error = %e, "Skipping VLAN from snapshot");
        }
    }
    info!(vlans = registry.len().await, "Inventory loaded");

    let listed = environments.list().await;
    let service = VlanNumberingService::new(&config, environments, registry);

    for environment in listed {
        match service.number_usage(environment.id).await {
            Ok(usage) => info!(
                environment = %environment.name,
                environment_id = %environment.id,
                ranges = %usage.ranges,
                used = usage.used,
                free_primary = usage.free_primary,
                free_secondary = usage.free_secondary,
                next_primary = ?usage.next_primary,
                next_secondary = ?usage.next_secondary,
                "VLAN number usage"
            ),
            Err(e) => error!(
                environment = %environment.name,
                code = e.code(),
                error = %e,
                "Failed to compute VLAN number usage"
            ),
        }
    }

    Ok(())
}
