// Copyright (c) 2025 - Cowboy AI, Inc.
//! Error types for VLAN numbering operations
//!
//! Every failure crossing the allocator/checker boundary is a [`VlanError`].
//! Each variant maps to a stable [`ErrorKind`] and to the numeric code the
//! inventory wire layer reports.

use thiserror::Error;

use crate::block::BlockAllocationError;
use crate::domain::{EnvironmentId, NumberRange, VlanId};

/// Stable classification of VLAN numbering failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed or out-of-domain input, never retried
    Validation,
    /// A referenced environment or VLAN does not exist
    NotFound,
    /// Both numbering ranges are full
    ResourceExhausted,
    /// A concurrent writer claimed the same number or name first
    Race,
    /// Missing or invalid startup configuration
    Configuration,
    /// Failure reported by an external collaborator
    Collaborator,
    /// Storage backend failure
    Internal,
}

/// Errors that can occur in VLAN numbering operations
#[derive(Debug, Error)]
pub enum VlanError {
    /// Input failed validation
    #[error("Invalid value for {field}: {value}")]
    Validation { field: String, value: String },

    /// Environment does not exist
    #[error("Environment not found: {0}")]
    EnvironmentNotFound(EnvironmentId),

    /// VLAN does not exist
    #[error("VLAN not found: {0}")]
    VlanNotFound(VlanId),

    /// No free number remains in either range
    #[error("No VLAN number available in ranges {primary} and {secondary}")]
    NumberExhausted {
        primary: NumberRange,
        secondary: NumberRange,
    },

    /// The number is already owned by another VLAN in the environment
    #[error("VLAN number {number} already in use in environment {environment_id}")]
    DuplicateNumber {
        environment_id: EnvironmentId,
        number: u32,
    },

    /// The name is already used by another VLAN in the environment
    #[error("VLAN name '{name}' already in use in environment {environment_id}")]
    DuplicateName {
        environment_id: EnvironmentId,
        name: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Network block allocation failed
    #[error("Network block allocation failed: {0}")]
    Block(#[from] BlockAllocationError),

    /// Registry backend failure
    ///
    /// Raised by persistent registry implementations when the store itself
    /// fails; the in-memory registry never produces it.
    #[error("Registry error: {0}")]
    Registry(String),
}

/// Result type for VLAN numbering operations
pub type VlanResult<T> = Result<T, VlanError>;

impl VlanError {
    /// Build a validation error for a named input
    pub fn validation(field: impl Into<String>, value: impl ToString) -> Self {
        VlanError::Validation {
            field: field.into(),
            value: value.to_string(),
        }
    }

    /// Stable error kind
    pub fn kind(&self) -> ErrorKind {
        match self {
            VlanError::Validation { .. } => ErrorKind::Validation,
            VlanError::EnvironmentNotFound(_) | VlanError::VlanNotFound(_) => ErrorKind::NotFound,
            VlanError::NumberExhausted { .. } => ErrorKind::ResourceExhausted,
            VlanError::DuplicateNumber { .. } => ErrorKind::Race,
            // A duplicate name is the caller's mistake, not a lost race
            VlanError::DuplicateName { .. } => ErrorKind::Validation,
            VlanError::Configuration(_) => ErrorKind::Configuration,
            VlanError::Block(_) => ErrorKind::Collaborator,
            VlanError::Registry(_) => ErrorKind::Internal,
        }
    }

    /// Numeric code reported to wire clients
    pub fn code(&self) -> u16 {
        match self {
            VlanError::Validation { .. } => 269,
            VlanError::EnvironmentNotFound(_) => 112,
            VlanError::VlanNotFound(_) => 116,
            VlanError::NumberExhausted { .. } | VlanError::DuplicateNumber { .. } => 109,
            VlanError::DuplicateName { .. } => 108,
            VlanError::Block(BlockAllocationError::InvalidConfiguration(_)) => 294,
            VlanError::Block(BlockAllocationError::AddressSpaceExhausted(_)) => 296,
            VlanError::Configuration(_) | VlanError::Registry(_) => 1,
        }
    }

    /// Whether the allocator may recover by trying another candidate
    pub fn is_race(&self) -> bool {
        self.kind() == ErrorKind::Race
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exhausted_error_reports_all_bounds() {
        let err = VlanError::NumberExhausted {
            primary: NumberRange::new(1, 10),
            secondary: NumberRange::new(100, 110),
        };

        let message = err.to_string();
        assert!(message.contains("1-10"));
        assert!(message.contains("100-110"));
        assert_eq!(err.kind(), ErrorKind::ResourceExhausted);
        assert_eq!(err.code(), 109);
    }

    #[test]
    fn test_duplicate_number_is_race() {
        let err = VlanError::DuplicateNumber {
            environment_id: EnvironmentId::new(),
            number: 42,
        };
        assert!(err.is_race());

        let err = VlanError::DuplicateName {
            environment_id: EnvironmentId::new(),
            name: "backend".to_string(),
        };
        assert!(!err.is_race());
        assert_eq!(err.code(), 108);
    }

    #[test]
    fn test_block_error_codes() {
        let err: VlanError = BlockAllocationError::AddressSpaceExhausted("fd00::/48".into()).into();
        assert_eq!(err.kind(), ErrorKind::Collaborator);
        assert_eq!(err.code(), 296);

        let err: VlanError = BlockAllocationError::InvalidConfiguration("no prefix".into()).into();
        assert_eq!(err.code(), 294);
    }

    #[test]
    fn test_not_found_kinds() {
        assert_eq!(VlanError::VlanNotFound(VlanId::new()).kind(), ErrorKind::NotFound);
        assert_eq!(VlanError::EnvironmentNotFound(EnvironmentId::new()).code(), 112);
    }

    #[test]
    fn test_registry_failure_is_internal() {
        let err = VlanError::Registry("connection reset".to_string());
        assert_eq!(err.kind(), ErrorKind::Internal);
        assert_eq!(err.code(), 1);
        assert!(!err.is_race());
    }
}
