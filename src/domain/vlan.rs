// Copyright (c) 2025 - Cowboy AI, Inc.
//! VLAN Entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::EnvironmentId;

/// VLAN record identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VlanId(Uuid);

impl VlanId {
    /// Generate a new time-ordered identity
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Wrap an existing UUID
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for VlanId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for VlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// VLAN entity
///
/// # Invariants
/// - `number` is unique within `environment_id`
/// - `number` is assigned at creation and never reassigned
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vlan {
    /// Identity
    pub id: VlanId,

    /// Owning environment
    pub environment_id: EnvironmentId,

    /// VLAN number, unique within the environment
    pub number: u32,

    /// Name, unique within the environment
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Fields needed to claim a number in the registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewVlan {
    pub environment_id: EnvironmentId,
    pub number: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl NewVlan {
    /// Materialize the record with a fresh identity
    pub fn into_vlan(self, created_at: DateTime<Utc>) -> Vlan {
        Vlan {
            id: VlanId::new(),
            environment_id: self.environment_id,
            number: self.number,
            name: self.name,
            description: self.description,
            created_at,
        }
    }
}

/// Caller-supplied fields of a VLAN whose number is yet to be allocated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VlanDraft {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl VlanDraft {
    /// Create a draft with a name and no description
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Bind the draft to an environment and a claimed number
    pub fn claim(&self, environment_id: EnvironmentId, number: u32) -> NewVlan {
        NewVlan {
            environment_id,
            number,
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_vlan_keeps_fields() {
        let env = EnvironmentId::new();
        let draft = NewVlan {
            environment_id: env,
            number: 42,
            name: "storage".to_string(),
            description: None,
        };

        let vlan = draft.into_vlan(Utc::now());
        assert_eq!(vlan.environment_id, env);
        assert_eq!(vlan.number, 42);
        assert_eq!(vlan.name, "storage");
    }

    #[test]
    fn test_draft_claim() {
        let env = EnvironmentId::new();
        let draft = VlanDraft::new("dmz").with_description("public services");
        let claimed = draft.claim(env, 7);

        assert_eq!(claimed.number, 7);
        assert_eq!(claimed.environment_id, env);
        assert_eq!(claimed.description.as_deref(), Some("public services"));
    }

    #[test]
    fn test_vlan_ids_are_distinct() {
        assert_ne!(VlanId::new(), VlanId::new());
    }
}
