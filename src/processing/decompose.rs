//! Minimal CIDR decomposition of an arbitrary range.
//!
//! Block sizes are carried as a power-of-two exponent `bits` (size = `2^bits`), never
//! as a count: the size of `::/0` does not fit in a `u128`.

use crate::models::{low_mask, Range};

/// Exponent of the largest power of two `<= span + 1`.
fn largest_block_bits(span: u128) -> u32 {
    match span.checked_add(1) {
        Some(size) => size.ilog2(),
        None => 128,
    }
}

fn is_aligned(addr: u128, bits: u32) -> bool {
    addr & low_mask(bits) == 0
}

/// Split `range` into the minimal list of CIDR blocks covering it exactly,
/// appending them to `out` in ascending order.
pub fn decompose_into(range: Range, out: &mut Vec<Range>) {
    let Range {
        start,
        end,
        version,
    } = range;

    if end < start {
        return;
    }
    if start == end {
        out.push(range);
        return;
    }
    if end - start == 1 {
        // a pair ending on an even address straddles a /31 boundary
        if end % 2 == 0 {
            out.push(Range::single(start, version));
            out.push(Range::single(end, version));
        } else {
            out.push(range);
        }
        return;
    }

    let span = end - start;
    let mut bits = largest_block_bits(span);

    if span == low_mask(bits) && is_aligned(start, bits) {
        out.push(range);
        return;
    }

    let (block_start, block_end) = if is_aligned(start, bits) {
        // 0-12 -> take 0-7, the rest is the tail
        (start, start + low_mask(bits))
    } else {
        // 4-16 -> snap to the last block boundary below `end`, shrink until it fits
        loop {
            let mut candidate = end & !low_mask(bits);
            if candidate | low_mask(bits) > end {
                match candidate.checked_sub(1u128 << bits) {
                    Some(previous) => candidate = previous,
                    None => {
                        bits -= 1;
                        continue;
                    }
                }
            }
            if candidate >= start {
                break (candidate, candidate | low_mask(bits));
            }
            bits -= 1;
        }
    };

    if block_start > start {
        decompose_into(Range::new(start, block_start - 1, version), out);
    }
    out.push(Range::new(block_start, block_end, version));
    if block_end < end {
        decompose_into(Range::new(block_end + 1, end, version), out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Cidr, IpVersion};
    use itertools::Itertools;
    use test_log::test;

    fn v4(start: u128, end: u128) -> Range {
        Range::new(start, end, IpVersion::V4)
    }

    fn decompose(range: Range) -> Vec<Range> {
        let mut out = Vec::new();
        decompose_into(range, &mut out);
        out
    }

    fn blocks(range: Range) -> Vec<String> {
        decompose(range)
            .into_iter()
            .map(|b| Cidr::from_block(b).to_string())
            .collect()
    }

    #[test]
    fn test_largest_block_bits() {
        assert_eq!(largest_block_bits(0), 0);
        assert_eq!(largest_block_bits(1), 1);
        assert_eq!(largest_block_bits(2), 1);
        assert_eq!(largest_block_bits(3), 2);
        assert_eq!(largest_block_bits(12), 3);
        assert_eq!(largest_block_bits(u128::MAX - 1), 127);
        assert_eq!(largest_block_bits(u128::MAX), 128);
    }

    #[test]
    fn test_single_and_pairs() {
        assert_eq!(decompose(v4(5, 5)), vec![v4(5, 5)]);
        assert_eq!(decompose(v4(4, 5)), vec![v4(4, 5)]);
        assert_eq!(decompose(v4(5, 6)), vec![v4(5, 5), v4(6, 6)]);
    }

    #[test]
    fn test_degenerate_range_is_empty() {
        let inverted = Range {
            start: 9,
            end: 3,
            version: IpVersion::V4,
        };
        assert!(decompose(inverted).is_empty());
    }

    #[test]
    fn test_aligned_block_returned_as_is() {
        assert_eq!(decompose(v4(0, 255)), vec![v4(0, 255)]);
        let all = Range::new(0, u128::MAX, IpVersion::V6);
        assert_eq!(decompose(all), vec![all]);
    }

    #[test]
    fn test_aligned_start_with_tail() {
        // 0-12 -> 0-7, 8-11, 12
        assert_eq!(
            decompose(v4(0, 12)),
            vec![v4(0, 7), v4(8, 11), v4(12, 12)]
        );
    }

    #[test]
    fn test_unaligned_start() {
        // 4-16 -> 4-7, 8-15, 16
        assert_eq!(
            decompose(v4(4, 16)),
            vec![v4(4, 7), v4(8, 15), v4(16, 16)]
        );
        // 1-254 is the worst case for a /24
        let b = decompose(v4(1, 254));
        assert_eq!(b.len(), 14);
        assert_eq!(b.first(), Some(&v4(1, 1)));
        assert_eq!(b.last(), Some(&v4(254, 254)));
    }

    #[test]
    fn test_remainder_of_slash_24() {
        assert_eq!(
            blocks(v4(0x01000001, 0x010000FF)),
            vec![
                "1.0.0.1/32",
                "1.0.0.2/31",
                "1.0.0.4/30",
                "1.0.0.8/29",
                "1.0.0.16/28",
                "1.0.0.32/27",
                "1.0.0.64/26",
                "1.0.0.128/25"
            ]
        );
    }

    #[test]
    fn test_full_v6_minus_edges() {
        let b = decompose(Range::new(1, u128::MAX - 1, IpVersion::V6));
        assert_eq!(b.len(), 254);
        assert_eq!(b[126], Range::new(1 << 126, (1 << 127) - 1, IpVersion::V6));
    }

    #[test]
    fn test_blocks_are_aligned_contiguous_and_exact() {
        for (start, end) in [(3, 1000), (0, 1), (17, 17), (255, 257), (1, 0xFFFF_FFFE)] {
            let out = decompose(v4(start, end));
            assert!(out.iter().all(Range::is_cidr_block));
            assert_eq!(out.first().map(|b| b.start), Some(start));
            assert_eq!(out.last().map(|b| b.end), Some(end));
            for (a, b) in out.iter().tuple_windows() {
                assert_eq!(a.end + 1, b.start, "gap or overlap in {out:?}");
            }
        }
    }

    #[test]
    fn test_minimal_no_mergeable_siblings() {
        // two adjacent equal blocks that share a parent would mean the output is not minimal
        let out = decompose(v4(6, 1001));
        for (a, b) in out.iter().tuple_windows() {
            let merged = Range::new(a.start, b.end, IpVersion::V4);
            assert!(!merged.is_cidr_block(), "{a} and {b} should have been one block");
        }
    }
}
