//! Small empty-safe statistics helpers over solved-problem counts.
//!
//! Every function returns `None` for an empty slice so callers are forced to
//! handle no-data years explicitly instead of faulting at runtime.

use std::collections::BTreeMap;

pub fn min(values: &[u32]) -> Option<u32> {
    values.iter().copied().min()
}

pub fn max(values: &[u32]) -> Option<u32> {
    values.iter().copied().max()
}

pub fn mean(values: &[u32]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum: u64 = values.iter().map(|v| u64::from(*v)).sum();
    Some(sum as f64 / values.len() as f64)
}

/// Median rounded to the nearest integer, halves away from zero. An even
/// count takes the midpoint of the two central values.
pub fn median_rounded(values: &[u32]) -> Option<u32> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_unstable();

    let len = sorted.len();
    let median = if len % 2 == 0 {
        f64::from(sorted[len / 2 - 1] + sorted[len / 2]) / 2.0
    } else {
        f64::from(sorted[len / 2])
    };
    Some(median.round() as u32)
}

/// Statistical mode; ties between equally frequent values resolve to the
/// smallest value.
pub fn mode(values: &[u32]) -> Option<u32> {
    if values.is_empty() {
        return None;
    }
    let mut counts: BTreeMap<u32, usize> = BTreeMap::new();
    for value in values {
        *counts.entry(*value).or_insert(0) += 1;
    }
    let best = counts.values().max().copied()?;
    counts
        .iter()
        .find(|(_, count)| **count == best)
        .map(|(value, _)| *value)
}
