// Copyright (c) 2025 - Cowboy AI, Inc.
//! Integration tests for VLAN number allocation and availability checks
//!
//! These tests drive the service surface end to end:
//! 1. Allocate numbers through the registry
//! 2. Check availability against the same registry
//! 3. Delete VLANs and observe numbers being freed

mod fixtures;

use pretty_assertions::assert_eq;

use cim_vlan_numbering::domain::{Environment, NumberRange, RangeOverride, RangePair};
use cim_vlan_numbering::service::VlanService;
use cim_vlan_numbering::{ErrorKind, RangeResolver, VlanError};

use fixtures::*;

/// Allocated numbers are no longer available
#[tokio::test]
async fn test_allocated_number_is_unavailable() {
    let env = plain_environment();
    let harness = Harness::new(default_config(), vec![env.clone()]).await;

    for index in 0..15 {
        let number = harness
            .service
            .allocate_vlan_number(create_command(env.id, index))
            .await
            .expect("allocation failed");

        assert!(!harness
            .service
            .check_number_available(env.id, number, None)
            .await
            .unwrap());
    }
}

/// Primary range is filled before the secondary range is touched
#[tokio::test]
async fn test_primary_last_slot_then_secondary() {
    let env = plain_environment();
    let harness = Harness::new(default_config(), vec![env.clone()]).await;

    // Nine VLANs occupy 1-9
    for index in 0..9 {
        harness.service.create_vlan(create_command(env.id, index)).await.unwrap();
    }

    let tenth = harness
        .service
        .allocate_vlan_number(create_command(env.id, 9))
        .await
        .unwrap();
    assert_eq!(tenth, 10);

    let eleventh = harness
        .service
        .allocate_vlan_number(create_command(env.id, 10))
        .await
        .unwrap();
    assert_eq!(eleventh, 100);
}

/// Both ranges full surfaces exhaustion with all four bounds
#[tokio::test]
async fn test_exhaustion_after_both_ranges() {
    let env = plain_environment();
    let harness = Harness::new(default_config(), vec![env.clone()]).await;

    // 10 primary + 11 secondary
    for index in 0..21 {
        harness.service.create_vlan(create_command(env.id, index)).await.unwrap();
    }

    let err = harness
        .service
        .create_vlan(create_command(env.id, 21))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ResourceExhausted);
    match err {
        VlanError::NumberExhausted { primary, secondary } => {
            assert_eq!(primary, NumberRange::new(1, 10));
            assert_eq!(secondary, NumberRange::new(100, 110));
        }
        other => panic!("unexpected error: {other}"),
    }
}

/// Editing a VLAN may keep its own number
#[tokio::test]
async fn test_edit_exception_and_deletion() {
    let env = Environment::new("edge").with_ranges(RangeOverride::primary(1, 100));
    let harness = Harness::new(default_config(), vec![env.clone()]).await;

    // Fill 1-49 so the next allocation lands on 50
    for index in 0..49 {
        harness.service.create_vlan(create_command(env.id, index)).await.unwrap();
    }
    let vlan = harness.service.create_vlan(create_command(env.id, 49)).await.unwrap();
    assert_eq!(vlan.number, 50);

    assert!(harness
        .service
        .check_number_available(env.id, 50, Some(vlan.id))
        .await
        .unwrap());
    assert!(!harness
        .service
        .check_number_available(env.id, 50, None)
        .await
        .unwrap());

    harness.service.delete_vlan(vlan.id).await.unwrap();

    assert!(harness
        .service
        .check_number_available(env.id, 50, None)
        .await
        .unwrap());
}

/// Freed numbers are reused by the next allocation
#[tokio::test]
async fn test_deleted_number_reused() {
    let env = plain_environment();
    let harness = Harness::new(default_config(), vec![env.clone()]).await;

    let mut vlans = Vec::new();
    for index in 0..5 {
        vlans.push(harness.service.create_vlan(create_command(env.id, index)).await.unwrap());
    }

    harness.service.delete_vlan(vlans[2].id).await.unwrap();

    let reused = harness.service.create_vlan(create_command(env.id, 99)).await.unwrap();
    assert_eq!(reused.number, 3);
}

/// Custom ranges keep environments independent
#[tokio::test]
async fn test_environments_are_independent() {
    let plain = plain_environment();
    let custom = custom_environment(500, 502);
    let harness = Harness::new(default_config(), vec![plain.clone(), custom.clone()]).await;

    let a = harness.service.create_vlan(create_command(plain.id, 0)).await.unwrap();
    let b = harness.service.create_vlan(create_command(custom.id, 0)).await.unwrap();

    assert_eq!(a.number, 1);
    assert_eq!(b.number, 500);
    assert!(harness
        .service
        .check_number_available(custom.id, 1, None)
        .await
        .is_ok_and(|free| !free));
    assert!(harness
        .service
        .check_number_available(plain.id, 500, None)
        .await
        .is_ok_and(|free| !free));
}

/// Pair-one-only override fills the same range twice then exhausts
#[tokio::test]
async fn test_single_pair_override_exhausts() {
    let custom = custom_environment(500, 502);
    let harness = Harness::new(default_config(), vec![custom.clone()]).await;

    for index in 0..3 {
        harness.service.create_vlan(create_command(custom.id, index)).await.unwrap();
    }

    let err = harness
        .service
        .create_vlan(create_command(custom.id, 3))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        VlanError::NumberExhausted { primary, secondary }
            if primary == NumberRange::new(500, 502) && secondary == primary
    ));
}

/// Range resolution for environments without an override returns the defaults
#[test]
fn test_resolution_matches_global_defaults() {
    let config = default_config();
    let defaults = config.default_ranges.expect("defaults configured");
    let resolver = RangeResolver::new(defaults);

    assert_eq!(resolver.resolve(&plain_environment()).unwrap(), defaults);
    assert_eq!(
        resolver.resolve(&custom_environment(20, 30)).unwrap(),
        RangePair::single(NumberRange::new(20, 30))
    );
}

/// Missing global defaults are a configuration error, not a request error
#[test]
fn test_missing_defaults_surface_configuration_kind() {
    let harness = tokio_test::block_on(Harness::new(
        cim_vlan_numbering::NumberingConfig::default(),
        vec![plain_environment()],
    ));

    let err = tokio_test::block_on(
        harness
            .service
            .create_vlan(create_command(plain_environment().id, 0)),
    )
    .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Configuration);
}

/// Duplicate names are rejected without consuming a number
#[tokio::test]
async fn test_duplicate_name_rejected() {
    let env = plain_environment();
    let harness = Harness::new(default_config(), vec![env.clone()]).await;

    harness.service.create_vlan(create_command(env.id, 1)).await.unwrap();
    let err = harness
        .service
        .create_vlan(create_command(env.id, 1))
        .await
        .unwrap_err();

    assert_eq!(err.code(), 108);
    assert_eq!(harness.registry.len().await, 1);
}
