// Copyright (c) 2025 - Cowboy AI, Inc.
//! VLAN Numbering
//!
//! Decides which VLAN numbers are free in an environment, allocates one when
//! a VLAN is created and answers availability checks for edit flows.
//!
//! # Architecture
//!
//! ```text
//! create:  RangeResolver → NumberAllocator → VlanRegistry (write)
//! check:   RangeResolver → AvailabilityChecker → VlanRegistry (read)
//! ```
//!
//! [`availability`] holds the pure free-number calculations both paths
//! share.

pub mod allocator;
pub mod availability;
pub mod checker;
pub mod resolver;

pub use allocator::{select_number, NumberAllocator};
pub use availability::{available_numbers, free_count, is_free};
pub use checker::AvailabilityChecker;
pub use resolver::{resolve_ranges, RangeResolver};
