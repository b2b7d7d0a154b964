// Copyright (c) 2025 - Cowboy AI, Inc.
//! Network Inventory Domain Models
//!
//! Core domain concepts for VLAN numbering: environments, VLAN records and
//! the numeric ranges VLAN numbers are drawn from.
//!
//! # Value Objects
//!
//! - [`NumberRange`] - Inclusive `[min, max]` interval of VLAN numbers
//! - [`RangePair`] - Primary and secondary ranges, tried in order
//! - [`RangeOverride`] - Per-environment range configuration
//!
//! # Entities
//!
//! - [`Environment`] - Scope within which VLAN numbers are unique
//! - [`Vlan`] - A numbered VLAN owned by one environment

pub mod environment;
pub mod invariants;
pub mod network;
pub mod vlan;

pub use environment::{Environment, EnvironmentId, RangeOverride};
pub use network::{NumberRange, RangePair};
pub use vlan::{NewVlan, Vlan, VlanDraft, VlanId};
