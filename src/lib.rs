// Copyright (c) 2025 - Cowboy AI, Inc.
//! VLAN numbering for the network inventory
//!
//! Given an environment, decides which VLAN numbers are free, allocates one
//! atomically when a VLAN is created, and answers "is this number still
//! available" queries for edit flows. The registry's unique constraint on
//! `(environment, number)` is the only enforcement point for number
//! uniqueness across concurrent requests.

pub mod block;
pub mod config;
pub mod domain;
pub mod errors;
pub mod numbering;
pub mod registry;
pub mod service;

// Re-export commonly used types
pub use config::NumberingConfig;
pub use errors::{ErrorKind, VlanError, VlanResult};
pub use numbering::{AvailabilityChecker, NumberAllocator, RangeResolver};
pub use service::{VlanNumberingService, VlanService};
