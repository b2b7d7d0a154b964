// Copyright (c) 2025 - Cowboy AI, Inc.
//! VLAN Registry Abstraction
//!
//! The registry is the system of record for `(environment, number) → VLAN`
//! and the only enforcement point for number uniqueness. Request workers
//! share no in-process allocation queue, so every implementation must make
//! [`VlanRegistry::create`] an atomic claim.
//!
//! # Registry Requirements
//!
//! 1. **Unique numbers**: at most one VLAN per `(environment, number)`
//! 2. **Unique names**: at most one VLAN per `(environment, name)`
//! 3. **Atomic claim**: a losing concurrent `create` fails with
//!    `DuplicateNumber` instead of committing
//! 4. **Shared reads**: `used_numbers_in` and `exists` take no exclusive lock

use async_trait::async_trait;
use std::collections::HashSet;

use crate::domain::{Environment, EnvironmentId, NewVlan, Vlan, VlanId};
use crate::errors::VlanResult;

pub mod memory;

pub use memory::{InMemoryEnvironmentDirectory, InMemoryVlanRegistry};

/// Environment lookup
#[async_trait]
pub trait EnvironmentDirectory: Send + Sync {
    /// Get an environment by identity
    ///
    /// # Errors
    ///
    /// - `EnvironmentNotFound` if no such environment exists
    async fn get_environment(&self, id: EnvironmentId) -> VlanResult<Environment>;
}

/// Persistent store of VLAN records
#[async_trait]
pub trait VlanRegistry: Send + Sync {
    /// Numbers currently owned by VLANs in the environment
    async fn used_numbers_in(&self, environment_id: EnvironmentId) -> VlanResult<HashSet<u32>>;

    /// Atomically claim `vlan.number` and store the record
    ///
    /// # Errors
    ///
    /// - `DuplicateNumber` if the number is already owned in the environment
    /// - `DuplicateName` if the name is already used in the environment
    async fn create(&self, vlan: NewVlan) -> VlanResult<Vlan>;

    /// Get a VLAN by identity
    ///
    /// # Errors
    ///
    /// - `VlanNotFound` if no such VLAN exists
    async fn get_by_id(&self, id: VlanId) -> VlanResult<Vlan>;

    /// Check if a VLAN with `number` exists in the environment
    async fn exists(&self, environment_id: EnvironmentId, number: u32) -> VlanResult<bool>;

    /// Remove a VLAN, freeing its number
    ///
    /// # Errors
    ///
    /// - `VlanNotFound` if no such VLAN exists
    async fn delete(&self, id: VlanId) -> VlanResult<Vlan>;
}
