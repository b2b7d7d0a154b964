// Copyright (c) 2025 - Cowboy AI, Inc.
//! Pure Validation Functions - Input Invariants
//!
//! Validation for the inputs of VLAN creation and number checks. All
//! functions are pure and report the offending field and value.

use crate::errors::{VlanError, VlanResult};

/// Minimum VLAN name length
pub const NAME_MIN_LENGTH: usize = 3;

/// Maximum VLAN name length
pub const NAME_MAX_LENGTH: usize = 50;

/// Minimum description length, when a description is given
pub const DESCRIPTION_MIN_LENGTH: usize = 3;

/// Maximum description length
pub const DESCRIPTION_MAX_LENGTH: usize = 200;

/// Validate a VLAN name
///
/// # Rules
/// - 3 to 50 characters after trimming
pub fn validate_vlan_name(name: &str) -> VlanResult<()> {
    let length = name.trim().chars().count();
    if !(NAME_MIN_LENGTH..=NAME_MAX_LENGTH).contains(&length) {
        return Err(VlanError::validation("name", name));
    }
    Ok(())
}

/// Validate an optional VLAN description
///
/// # Rules
/// - Absent is allowed
/// - When present, 3 to 200 characters after trimming
pub fn validate_description(description: Option<&str>) -> VlanResult<()> {
    let Some(description) = description else {
        return Ok(());
    };

    let length = description.trim().chars().count();
    if !(DESCRIPTION_MIN_LENGTH..=DESCRIPTION_MAX_LENGTH).contains(&length) {
        return Err(VlanError::validation("description", description));
    }
    Ok(())
}

/// Validate a candidate VLAN number
///
/// # Rules
/// - Must be greater than zero
pub fn validate_candidate_number(number: u32) -> VlanResult<()> {
    if number == 0 {
        return Err(VlanError::validation("number", number));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_bounds() {
        assert!(validate_vlan_name("ab").is_err());
        assert!(validate_vlan_name("abc").is_ok());
        assert!(validate_vlan_name(&"x".repeat(50)).is_ok());
        assert!(validate_vlan_name(&"x".repeat(51)).is_err());
        assert!(validate_vlan_name("   ").is_err());
    }

    #[test]
    fn test_description_optional() {
        assert!(validate_description(None).is_ok());
        assert!(validate_description(Some("web tier")).is_ok());
        assert!(validate_description(Some("ab")).is_err());
        assert!(validate_description(Some(&"d".repeat(201))).is_err());
    }

    #[test]
    fn test_candidate_number() {
        let err = validate_candidate_number(0).unwrap_err();
        assert!(matches!(err, VlanError::Validation { ref field, .. } if field == "number"));
        assert!(validate_candidate_number(1).is_ok());
    }
}
