//! Set difference over ranges.

use super::decompose::decompose_into;
use super::merge::merge_ranges;
use crate::models::{NetworkSet, Range};

/// Remove `b` from `a`, returning the remainder as CIDR blocks.
///
/// ```text
///     aaa        aaaa       aaaa       aaaa        aa
///  bbb        bbb            bbb        bb       bbbb
/// ```
pub fn subtract(a: Range, b: Range) -> Vec<Range> {
    debug_assert_eq!(a.version, b.version);

    if !a.overlaps(&b) {
        return vec![a];
    }
    if b.covers(&a) {
        return Vec::new();
    }

    let mut remainder = Vec::new();
    if a.start < b.start {
        decompose_into(Range::new(a.start, b.start - 1, a.version), &mut remainder);
    }
    if a.end > b.end {
        decompose_into(Range::new(b.end + 1, a.end, a.version), &mut remainder);
    }
    remainder
}

/// `base \ exclude` for ranges of one version, as sorted CIDR blocks.
pub fn exclude_ranges(base: &[Range], exclude: &[Range]) -> Vec<Range> {
    let mut bases = merge_ranges(base);
    // each exclude may carve a base block from several sides, so apply them one at a time
    for excl in merge_ranges(exclude) {
        let mut next = Vec::with_capacity(bases.len() + 1);
        for a in bases {
            if a.overlaps(&excl) {
                next.extend(subtract(a, excl));
            } else {
                next.push(a);
            }
        }
        bases = next;
        log::trace!("exclude: after {excl} -> {} blocks", bases.len());
    }
    bases
}

/// `base \ exclude` for every version.
pub fn exclude_set(base: &NetworkSet, exclude: &NetworkSet) -> NetworkSet {
    let mut remaining = NetworkSet::new();
    for (version, ranges) in base.iter() {
        let excluded = exclude.ranges(version);
        let blocks = exclude_ranges(ranges, excluded);
        log::debug!(
            "exclude: IPv{version} {} base, {} exclude -> {} blocks",
            ranges.len(),
            excluded.len(),
            blocks.len()
        );
        remaining.set_ranges(version, blocks);
    }
    remaining
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{parse_range, Cidr, IpVersion};
    use test_log::test;

    fn r(token: &str) -> Range {
        parse_range(token).unwrap()
    }

    fn excluded(base: &[&str], exclude: &[&str]) -> Vec<String> {
        let base = NetworkSet::parse(base).unwrap();
        let exclude = NetworkSet::parse(exclude).unwrap();
        exclude_set(&base, &exclude)
            .to_cidrs()
            .iter()
            .map(Cidr::to_string)
            .collect()
    }

    #[test]
    fn test_subtract_disjoint() {
        assert_eq!(subtract(r("1.0.0.0/24"), r("2.0.0.0/24")), vec![r("1.0.0.0/24")]);
    }

    #[test]
    fn test_subtract_covering() {
        assert!(subtract(r("1.0.0.0/24"), r("1.0.0.0/24")).is_empty());
        assert!(subtract(r("1.0.0.0/24"), r("1.0.0.0/16")).is_empty());
    }

    #[test]
    fn test_subtract_middle() {
        assert_eq!(
            subtract(r("0.0.0.0/30"), r("0.0.0.1/32")),
            vec![r("0.0.0.0"), r("0.0.0.2/31")]
        );
    }

    #[test]
    fn test_subtract_edges() {
        let v4 = |s, e| Range::new(s, e, IpVersion::V4);
        let a = v4(10, 20);
        // b overlaps the right edge: 10-14 remains
        assert_eq!(
            subtract(a, v4(15, 30)),
            vec![v4(10, 11), v4(12, 13), v4(14, 14)]
        );
        // b overlaps the left edge: 13-20 remains
        assert_eq!(
            subtract(a, v4(0, 12)),
            vec![v4(13, 13), v4(14, 15), v4(16, 19), v4(20, 20)]
        );
    }

    #[test]
    fn test_exclude_set() {
        assert_eq!(excluded(&["1.0.0.0/23"], &["1.0.1.0/24"]), vec!["1.0.0.0/24"]);
        assert_eq!(excluded(&["::/127"], &["::1/128"]), vec!["::/128"]);
        assert!(excluded(&["::/120"], &["::1/112"]).is_empty());
        assert_eq!(
            excluded(&["::0/127", "1.2.3.0/24"], &["::/128"]),
            vec!["1.2.3.0/24", "::1/128"]
        );
        assert_eq!(
            excluded(&["0.0.0.0/30"], &["0.0.0.1/32", "0.0.0.2/32"]),
            vec!["0.0.0.0/32", "0.0.0.3/32"]
        );
        assert_eq!(
            excluded(&["10.11.0.0/16"], &["10.11.70.0/24"]),
            vec![
                "10.11.0.0/18",
                "10.11.64.0/22",
                "10.11.68.0/23",
                "10.11.71.0/24",
                "10.11.72.0/21",
                "10.11.80.0/20",
                "10.11.96.0/19",
                "10.11.128.0/17"
            ]
        );
    }

    #[test]
    fn test_exclude_other_version_untouched() {
        assert_eq!(excluded(&["1.2.3.0/24"], &["::/0"]), vec!["1.2.3.0/24"]);
    }
}
