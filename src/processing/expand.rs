//! Lazy enumeration of every address in a set of blocks.

use crate::codec::to_ip_addr;
use crate::models::{IpVersion, Range};
use std::iter::FusedIterator;
use std::net::IpAddr;

#[derive(Debug)]
struct Cursor {
    next: u128,
    end: u128,
    version: IpVersion,
}

/// Iterator over the individual addresses of a list of ranges, in list order.
///
/// Single pass: a new enumeration needs a new `Expander`.
#[derive(Debug)]
pub struct Expander {
    blocks: std::vec::IntoIter<Range>,
    current: Option<Cursor>,
}

impl Expander {
    pub fn new(blocks: Vec<Range>) -> Expander {
        Expander {
            blocks: blocks.into_iter(),
            current: None,
        }
    }
}

impl Iterator for Expander {
    type Item = IpAddr;

    fn next(&mut self) -> Option<IpAddr> {
        loop {
            if let Some(cursor) = self.current.as_mut() {
                let (addr, version) = (cursor.next, cursor.version);
                // stop on `end` instead of stepping past it, `end` may be u128::MAX
                if addr == cursor.end {
                    self.current = None;
                } else {
                    cursor.next += 1;
                }
                return Some(to_ip_addr(addr, version));
            }
            let block = self.blocks.next()?;
            self.current = Some(Cursor {
                next: block.start,
                end: block.end,
                version: block.version,
            });
        }
    }
}

impl FusedIterator for Expander {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_blocks_in_order() {
        let blocks = vec![
            Range::new(0x01020300, 0x01020301, IpVersion::V4),
            Range::new(1, 2, IpVersion::V6),
        ];
        let out: Vec<String> = Expander::new(blocks).map(|ip| ip.to_string()).collect();
        assert_eq!(out, vec!["1.2.3.0", "1.2.3.1", "::1", "::2"]);
    }

    #[test]
    fn test_expand_top_of_space_terminates() {
        let top = Range::new(u128::MAX - 1, u128::MAX, IpVersion::V6);
        let mut it = Expander::new(vec![top]);
        assert_eq!(it.next().map(|ip| ip.to_string()).as_deref(), Some("ffff:ffff:ffff:ffff:ffff:ffff:ffff:fffe"));
        assert!(it.next().is_some());
        assert!(it.next().is_none());
        assert!(it.next().is_none());
    }

    #[test]
    fn test_expand_is_lazy() {
        let all = Range::new(0, u128::MAX, IpVersion::V6);
        let first: Vec<IpAddr> = Expander::new(vec![all]).take(3).collect();
        assert_eq!(first.len(), 3);
        assert_eq!(first[2].to_string(), "::2");
    }

    #[test]
    fn test_expand_empty() {
        assert_eq!(Expander::new(Vec::new()).count(), 0);
    }
}
