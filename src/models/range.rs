//! Inclusive integer address range.

use super::IpVersion;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Mask with the low `bits` bits set, for `bits` in `0..=128`.
pub fn low_mask(bits: u32) -> u128 {
    assert!(bits <= 128, "bits[{bits}] > 128 should never happen.");
    u128::MAX.checked_shr(128 - bits).unwrap_or(0)
}

/// An inclusive run of consecutive addresses `[start, end]` of one IP version.
///
/// Not necessarily CIDR-aligned; see [`Range::is_cidr_block`].
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Range {
    pub start: u128,
    pub end: u128,
    pub version: IpVersion,
}

impl Range {
    pub fn new(start: u128, end: u128, version: IpVersion) -> Range {
        debug_assert!(
            start <= end && end <= version.max_addr(),
            "invalid range [{start}, {end}] for IPv{version}"
        );
        Range {
            start,
            end,
            version,
        }
    }

    /// Range holding exactly one address.
    pub fn single(addr: u128, version: IpVersion) -> Range {
        Range::new(addr, addr, version)
    }

    /// `end - start`; one less than the address count, so it never overflows.
    pub fn span(&self) -> u128 {
        self.end - self.start
    }

    /// Number of addresses, `None` when it does not fit in a `u128` (`::/0`).
    pub fn size(&self) -> Option<u128> {
        self.span().checked_add(1)
    }

    /// True when the size is a power of two and `start` is aligned to it.
    pub fn is_cidr_block(&self) -> bool {
        let span = self.span();
        // span + 1 is a power of two iff span is all low ones
        (span & span.wrapping_add(1)) == 0 && (self.start & span) == 0
    }

    pub fn contains(&self, addr: u128) -> bool {
        self.start <= addr && addr <= self.end
    }

    /// True when `other` lies entirely inside `self`.
    pub fn covers(&self, other: &Range) -> bool {
        self.version == other.version && self.start <= other.start && other.end <= self.end
    }

    pub fn overlaps(&self, other: &Range) -> bool {
        self.version == other.version && self.start <= other.end && other.start <= self.end
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{:#x}, {:#x}]/v{}", self.start, self.end, self.version)
    }
}
