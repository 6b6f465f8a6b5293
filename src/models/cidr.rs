//! CIDR block value type and prefix arithmetic.
//!
//! Provides [`Cidr`] for representing an aligned address block together with
//! the host mask helper used by the parser.

use super::{low_mask, parse_cidr, IpVersion, Range};
use crate::codec::{format_address, from_ip_addr, to_ip_addr, FormatOpts};
use crate::error::CidrError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::IpAddr;

/// Mask selecting the host bits of a `/len` network, `None` if `len` is too long.
///
/// # Examples
/// ```
/// use cidr_tools::models::{host_mask, IpVersion};
/// assert_eq!(host_mask(IpVersion::V4, 24), Some(0xFF));
/// assert_eq!(host_mask(IpVersion::V4, 33), None);
/// ```
pub fn host_mask(version: IpVersion, len: u8) -> Option<u128> {
    let bits = version.bits();
    let len = len as u32;
    if len > bits {
        None
    } else {
        Some(low_mask(bits - len))
    }
}

/// An aligned address block in `address/prefix` form.
///
/// The host bits of `addr` are always clear, so `addr` is the first address of the block.
/// Only [`Cidr::new`] and [`Cidr::from_block`] build one.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Cidr {
    addr: IpAddr,
    prefix: u8,
}

impl Cidr {
    /// Create a [`Cidr`] from a network token (e.g. "10.0.0.0/24" or "::1").
    ///
    /// Host bits of the address are cleared.
    pub fn new(addr_cidr: &str) -> Result<Cidr, CidrError> {
        let parsed = parse_cidr(addr_cidr)?;
        Ok(Cidr {
            addr: to_ip_addr(parsed.start, parsed.version),
            prefix: parsed.prefix,
        })
    }

    /// Build from a range that is already a CIDR block.
    pub fn from_block(block: Range) -> Cidr {
        debug_assert!(block.is_cidr_block(), "{block} is not a CIDR block");
        let host_bits = block.span().trailing_ones();
        Cidr {
            addr: to_ip_addr(block.start, block.version),
            prefix: (block.version.bits() - host_bits) as u8,
        }
    }

    /// The network address.
    pub fn addr(&self) -> IpAddr {
        self.addr
    }

    /// The prefix length (0-32 or 0-128).
    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    pub fn version(&self) -> IpVersion {
        from_ip_addr(self.addr).1
    }

    /// The block as a numeric range.
    pub fn range(&self) -> Range {
        let (number, version) = from_ip_addr(self.addr);
        let host = host_mask(version, self.prefix).unwrap_or(0);
        Range::new(number & !host, number | host, version)
    }
}

impl Serialize for Cidr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Cidr {
    fn deserialize<D>(deserializer: D) -> Result<Cidr, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Cidr::new(&s).map_err(de::Error::custom)
    }
}

impl std::fmt::Display for Cidr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let (number, version) = from_ip_addr(self.addr);
        let addr = format_address(number, version, FormatOpts::default());
        write!(f, "{}/{}", addr, self.prefix)
    }
}
