// Copyright (c) 2025 - Cowboy AI, Inc.
//! Network Block Allocation Interface
//!
//! A newly created VLAN receives an IPv4 or IPv6 network block from an
//! external address-space allocator. Only the interface lives here; the
//! allocator itself belongs to the IPAM side of the inventory.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::IpAddr;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::VlanId;

/// Errors reported by a network block allocator
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BlockAllocationError {
    /// No free block of the requested type remains
    #[error("Address space exhausted: {0}")]
    AddressSpaceExhausted(String),

    /// The environment has no usable network configuration
    #[error("Invalid network configuration: {0}")]
    InvalidConfiguration(String),
}

/// Address family of a network block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkType {
    Ipv4,
    Ipv6,
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkType::Ipv4 => write!(f, "ipv4"),
            NetworkType::Ipv6 => write!(f, "ipv6"),
        }
    }
}

/// Network block assigned to a VLAN
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockAssignment {
    pub vlan_id: VlanId,
    pub network_type: NetworkType,
    pub network: IpAddr,
    pub prefix_length: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment_vip: Option<Uuid>,
}

impl BlockAssignment {
    /// Block in CIDR notation
    pub fn as_cidr(&self) -> String {
        format!("{}/{}", self.network, self.prefix_length)
    }
}

/// External collaborator assigning address space to a VLAN
#[async_trait]
pub trait NetworkBlockAllocator: Send + Sync {
    /// Allocate a network block for a freshly created VLAN
    ///
    /// # Errors
    ///
    /// - `AddressSpaceExhausted` if no block of `network_type` is free
    /// - `InvalidConfiguration` if the environment cannot host the block
    async fn allocate_block(
        &self,
        vlan_id: VlanId,
        network_type: NetworkType,
        environment_vip: Option<Uuid>,
    ) -> Result<BlockAssignment, BlockAllocationError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv6Addr;

    #[test]
    fn test_assignment_cidr() {
        let assignment = BlockAssignment {
            vlan_id: VlanId::new(),
            network_type: NetworkType::Ipv6,
            network: IpAddr::V6(Ipv6Addr::new(0xfd00, 0, 0, 0x10, 0, 0, 0, 0)),
            prefix_length: 64,
            environment_vip: None,
        };
        assert_eq!(assignment.as_cidr(), "fd00:0:0:10::/64");
    }

    #[test]
    fn test_network_type_serde() {
        assert_eq!(serde_json::to_string(&NetworkType::Ipv6).unwrap(), "\"ipv6\"");
        assert_eq!(NetworkType::Ipv4.to_string(), "ipv4");
    }
}
