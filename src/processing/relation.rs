//! Overlap and containment predicates.
//!
//! Ranges of different versions never relate.

use super::merge::coalesce;
use crate::models::{NetworkSet, Range};

/// True if any range in `a` intersects any range in `b`. Inputs need not be merged.
pub fn overlap_ranges(a: &[Range], b: &[Range]) -> bool {
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort_unstable_by_key(|r| r.start);
    b.sort_unstable_by_key(|r| r.start);

    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        let (a_net, b_net) = (&a[i], &b[j]);
        if a_net.start <= b_net.end && b_net.start <= a_net.end {
            log::trace!("overlap: {a_net} meets {b_net}");
            return true;
        }
        // whichever ends first cannot meet anything later on the other side
        if a_net.end < b_net.end {
            i += 1;
        } else {
            j += 1;
        }
    }
    false
}

/// True if every range in `targets` is covered by the union of `containers`.
///
/// Containers are coalesced first so that coverage spread over adjacent containers
/// (two `/25`s holding a `/24`) counts.
pub fn contains_ranges(containers: &[Range], targets: &[Range]) -> bool {
    if targets.is_empty() {
        return true;
    }
    let containers = coalesce(containers);
    if containers.is_empty() {
        return false;
    }

    // max_end[i] = furthest end among containers[..=i]
    let max_end: Vec<u128> = containers
        .iter()
        .scan(containers[0].end, |max, c| {
            *max = (*max).max(c.end);
            Some(*max)
        })
        .collect();

    targets.iter().all(|target| {
        // rightmost container starting at or before the target
        let idx = containers.partition_point(|c| c.start <= target.start);
        let covered = idx > 0 && max_end[idx - 1] >= target.end;
        if !covered {
            log::trace!("contains: {target} not covered");
        }
        covered
    })
}

pub fn overlap_set(a: &NetworkSet, b: &NetworkSet) -> bool {
    a.iter()
        .any(|(version, ranges)| overlap_ranges(ranges, b.ranges(version)))
}

pub fn contains_set(a: &NetworkSet, b: &NetworkSet) -> bool {
    b.iter()
        .all(|(version, targets)| contains_ranges(a.ranges(version), targets))
}
