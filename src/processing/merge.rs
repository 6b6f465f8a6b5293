//! Interval merging.
//!
//! Overlapping or adjacent ranges are swept into maximal contiguous runs, then each
//! run is re-aligned to CIDR blocks.

use super::decompose::decompose_into;
use crate::models::{NetworkSet, Range};

/// Coalesce ranges of one version into sorted, disjoint, non-adjacent runs.
///
/// The runs are not CIDR-aligned.
pub fn coalesce(ranges: &[Range]) -> Vec<Range> {
    let mut sorted = ranges.to_vec();
    sorted.sort_unstable_by_key(|r| (r.start, r.end));

    let mut runs: Vec<Range> = Vec::new();
    for range in sorted {
        match runs.last_mut() {
            // `end + 1` saturates at the top of the address space
            Some(current) if range.start <= current.end.saturating_add(1) => {
                debug_assert_eq!(current.version, range.version);
                current.end = current.end.max(range.end);
            }
            _ => runs.push(range),
        }
    }
    runs
}

/// Merge ranges of one version into the minimal sorted list of CIDR blocks.
pub fn merge_ranges(ranges: &[Range]) -> Vec<Range> {
    let runs = coalesce(ranges);
    let mut blocks = Vec::with_capacity(runs.len());
    for run in runs {
        log::trace!("merge: flushing run {run}");
        decompose_into(run, &mut blocks);
    }
    blocks
}

/// Merge every version of a set.
pub fn merge_set(set: &NetworkSet) -> NetworkSet {
    let mut merged = NetworkSet::new();
    for (version, ranges) in set.iter() {
        let blocks = merge_ranges(ranges);
        log::debug!(
            "merge: IPv{version} {} ranges -> {} blocks",
            ranges.len(),
            blocks.len()
        );
        merged.set_ranges(version, blocks);
    }
    merged
}
