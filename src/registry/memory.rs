// Copyright (c) 2025 - Cowboy AI, Inc.
//! In-memory registry and environment directory
//!
//! All uniqueness checks and the claiming insert happen under one write
//! lock, which gives `create` the same effect as a unique constraint on
//! `(environment_id, number)` in a relational store.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::{HashMap, HashSet};
use tokio::sync::RwLock;
use tracing::{debug, info};

use super::{EnvironmentDirectory, VlanRegistry};
use crate::domain::{Environment, EnvironmentId, NewVlan, Vlan, VlanId};
use crate::errors::{VlanError, VlanResult};

#[derive(Debug, Default)]
struct RegistryState {
    vlans: HashMap<VlanId, Vlan>,
    // Per-environment index so reads touch only one environment's numbers
    numbers: HashMap<EnvironmentId, HashMap<u32, VlanId>>,
    names: HashMap<(EnvironmentId, String), VlanId>,
}

impl RegistryState {
    fn number_taken(&self, environment_id: EnvironmentId, number: u32) -> bool {
        self.numbers
            .get(&environment_id)
            .is_some_and(|numbers| numbers.contains_key(&number))
    }

    fn check_unique(
        &self,
        environment_id: EnvironmentId,
        number: u32,
        name: &str,
    ) -> VlanResult<()> {
        if self.number_taken(environment_id, number) {
            return Err(VlanError::DuplicateNumber {
                environment_id,
                number,
            });
        }

        if self.names.contains_key(&(environment_id, name_key(name))) {
            return Err(VlanError::DuplicateName {
                environment_id,
                name: name.to_string(),
            });
        }

        Ok(())
    }

    fn insert(&mut self, vlan: Vlan) {
        self.numbers
            .entry(vlan.environment_id)
            .or_default()
            .insert(vlan.number, vlan.id);
        self.names.insert((vlan.environment_id, name_key(&vlan.name)), vlan.id);
        self.vlans.insert(vlan.id, vlan);
    }

    fn remove(&mut self, id: VlanId) -> Option<Vlan> {
        let vlan = self.vlans.remove(&id)?;
        if let Some(numbers) = self.numbers.get_mut(&vlan.environment_id) {
            numbers.remove(&vlan.number);
            if numbers.is_empty() {
                self.numbers.remove(&vlan.environment_id);
            }
        }
        self.names.remove(&(vlan.environment_id, name_key(&vlan.name)));
        Some(vlan)
    }
}

// Names compare case-insensitively
fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// VLAN registry held in process memory
#[derive(Debug, Default)]
pub struct InMemoryVlanRegistry {
    state: RwLock<RegistryState>,
}

impl InMemoryVlanRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an existing record, keeping its identity
    ///
    /// Used to load inventory snapshots. Enforces the same constraints as
    /// [`VlanRegistry::create`].
    pub async fn restore(&self, vlan: Vlan) -> VlanResult<()> {
        let mut state = self.state.write().await;
        state.check_unique(vlan.environment_id, vlan.number, &vlan.name)?;
        state.insert(vlan);
        Ok(())
    }

    /// Number of stored VLANs
    pub async fn len(&self) -> usize {
        self.state.read().await.vlans.len()
    }

    /// Check if the registry holds no VLANs
    pub async fn is_empty(&self) -> bool {
        self.state.read().await.vlans.is_empty()
    }
}

#[async_trait]
impl VlanRegistry for InMemoryVlanRegistry {
    async fn used_numbers_in(&self, environment_id: EnvironmentId) -> VlanResult<HashSet<u32>> {
        let state = self.state.read().await;
        Ok(state
            .numbers
            .get(&environment_id)
            .map(|numbers| numbers.keys().copied().collect())
            .unwrap_or_default())
    }

    async fn create(&self, vlan: NewVlan) -> VlanResult<Vlan> {
        let mut state = self.state.write().await;
        state.check_unique(vlan.environment_id, vlan.number, &vlan.name)?;

        let vlan = vlan.into_vlan(Utc::now());
        state.insert(vlan.clone());

        debug!(
            vlan_id = %vlan.id,
            environment_id = %vlan.environment_id,
            number = vlan.number,
            "Stored VLAN"
        );
        Ok(vlan)
    }

    async fn get_by_id(&self, id: VlanId) -> VlanResult<Vlan> {
        let state = self.state.read().await;
        state.vlans.get(&id).cloned().ok_or(VlanError::VlanNotFound(id))
    }

    async fn exists(&self, environment_id: EnvironmentId, number: u32) -> VlanResult<bool> {
        let state = self.state.read().await;
        Ok(state.number_taken(environment_id, number))
    }

    async fn delete(&self, id: VlanId) -> VlanResult<Vlan> {
        let mut state = self.state.write().await;
        let vlan = state.remove(id).ok_or(VlanError::VlanNotFound(id))?;

        info!(
            vlan_id = %vlan.id,
            environment_id = %vlan.environment_id,
            number = vlan.number,
            "Released VLAN number"
        );
        Ok(vlan)
    }
}

/// Environment directory held in process memory
#[derive(Debug, Default)]
pub struct InMemoryEnvironmentDirectory {
    environments: RwLock<HashMap<EnvironmentId, Environment>>,
}

impl InMemoryEnvironmentDirectory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an environment
    pub async fn insert(&self, environment: Environment) {
        self.environments
            .write()
            .await
            .insert(environment.id, environment);
    }

    /// Remove an environment
    pub async fn remove(&self, id: EnvironmentId) -> Option<Environment> {
        self.environments.write().await.remove(&id)
    }

    /// All environments, ordered by identity
    pub async fn list(&self) -> Vec<Environment> {
        let mut environments: Vec<Environment> =
            self.environments.read().await.values().cloned().collect();
        environments.sort_by_key(|env| env.id);
        environments
    }
}

#[async_trait]
impl EnvironmentDirectory for InMemoryEnvironmentDirectory {
    async fn get_environment(&self, id: EnvironmentId) -> VlanResult<Environment> {
        self.environments
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(VlanError::EnvironmentNotFound(id))
    }
}
