// Copyright (c) 2025 - Cowboy AI, Inc.
//! Free number calculation
//!
//! Pure functions over a range and the set of numbers already in use.
//! Work is linear in the range width with constant-time membership tests.

use std::collections::{BTreeSet, HashSet};

use crate::domain::NumberRange;

/// Free numbers of `range` not present in `used`
///
/// With `stop_at_first`, returns at most one number: the smallest free one.
/// An empty range yields an empty set.
pub fn available_numbers(
    range: NumberRange,
    used: &HashSet<u32>,
    stop_at_first: bool,
) -> BTreeSet<u32> {
    let free = range.iter().filter(|number| !used.contains(number));

    if stop_at_first {
        free.take(1).collect()
    } else {
        free.collect()
    }
}

/// Check a specific number without materializing the free set
pub fn is_free(range: NumberRange, used: &HashSet<u32>, number: u32) -> bool {
    range.contains(number) && !used.contains(&number)
}

/// Count of free numbers in `range`
pub fn free_count(range: NumberRange, used: &HashSet<u32>) -> u64 {
    let taken = used.iter().filter(|number| range.contains(**number)).count() as u64;
    range.width() - taken
}
