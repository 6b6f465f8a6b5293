//! Ranges grouped by IP version.

use super::{parse_range, Cidr, IpVersion, Range};
use crate::error::CidrError;

/// Ranges partitioned by version, each list sorted by `(start, end)` without duplicates.
///
/// Built fresh for every operation and dropped when it returns.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NetworkSet {
    v4: Vec<Range>,
    v6: Vec<Range>,
}

impl NetworkSet {
    pub fn new() -> NetworkSet {
        NetworkSet::default()
    }

    /// Parse a list of network tokens. One malformed token fails the whole list.
    pub fn parse<I, S>(networks: I) -> Result<NetworkSet, CidrError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ranges = networks
            .into_iter()
            .map(|net| parse_range(net.as_ref()))
            .collect::<Result<Vec<Range>, CidrError>>()?;
        Ok(NetworkSet::from_ranges(ranges))
    }

    pub fn from_ranges<I>(ranges: I) -> NetworkSet
    where
        I: IntoIterator<Item = Range>,
    {
        let mut set = NetworkSet::new();
        for range in ranges {
            set.ranges_mut(range.version).push(range);
        }
        for version in IpVersion::ALL {
            let list = set.ranges_mut(version);
            list.sort_unstable();
            list.dedup();
        }
        set
    }

    /// Ranges of one version.
    pub fn ranges(&self, version: IpVersion) -> &[Range] {
        match version {
            IpVersion::V4 => &self.v4,
            IpVersion::V6 => &self.v6,
        }
    }

    fn ranges_mut(&mut self, version: IpVersion) -> &mut Vec<Range> {
        match version {
            IpVersion::V4 => &mut self.v4,
            IpVersion::V6 => &mut self.v6,
        }
    }

    /// Replace the ranges of one version; the caller keeps them sorted.
    pub fn set_ranges(&mut self, version: IpVersion, ranges: Vec<Range>) {
        debug_assert!(ranges.iter().all(|r| r.version == version));
        *self.ranges_mut(version) = ranges;
    }

    /// `(version, ranges)` pairs, IPv4 first.
    pub fn iter(&self) -> impl Iterator<Item = (IpVersion, &[Range])> + '_ {
        IpVersion::ALL.into_iter().map(|v| (v, self.ranges(v)))
    }

    pub fn len(&self) -> usize {
        self.v4.len() + self.v6.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All ranges, IPv4 before IPv6.
    pub fn into_ranges(self) -> Vec<Range> {
        let mut all = self.v4;
        all.extend(self.v6);
        all
    }

    /// Format a set of CIDR blocks, IPv4 before IPv6.
    pub fn to_cidrs(&self) -> Vec<Cidr> {
        self.iter()
            .flat_map(|(_, ranges)| ranges.iter().copied().map(Cidr::from_block))
            .collect()
    }
}
