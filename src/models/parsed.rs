//! Network token parser.
//!
//! Turns `address`, `address/prefix` or `address%zone/prefix` into a [`Range`]. A bare
//! address is a full-width single-address network.

use super::{host_mask, IpVersion, Range};
use crate::codec::{self, format_address, FormatOpts};
use crate::error::{CidrError, MalformedReason};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Prefix must be all ASCII digits.
static PREFIX_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_prefix_regex() -> &'static Regex {
    PREFIX_REGEX.get_or_init(|| Regex::new(r"^[0-9]+$").expect("Invalid Regex"))
}

/// A parsed network token with the raw integers exposed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ParsedCidr {
    /// `ip/prefix`.
    pub cidr: String,
    /// The address as written (host bits kept), compressed, with its zone id.
    pub ip: String,
    pub version: IpVersion,
    pub prefix: u8,
    /// Whether the token carried an explicit `/prefix`.
    pub prefix_present: bool,
    pub start: u128,
    pub end: u128,
    /// IPv6 zone id without the `%`.
    pub zone: Option<String>,
    /// The address was written with a dotted IPv4 tail.
    pub dotted_tail: bool,
}

impl ParsedCidr {
    pub fn range(&self) -> Range {
        Range::new(self.start, self.end, self.version)
    }
}

/// Split a token into address, optional prefix and validated prefix length.
fn split_token(network: &str) -> Result<(codec::ParsedAddress, u8, bool), CidrError> {
    let malformed = |reason| CidrError::malformed(network, reason);

    if network.is_empty() {
        return Err(malformed(MalformedReason::Empty));
    }

    let mut parts = network.split('/');
    let addr_part = parts.next().unwrap_or_default();
    let prefix_part = parts.next();
    if parts.next().is_some() {
        return Err(malformed(MalformedReason::TooManySlashes));
    }
    if addr_part.is_empty() {
        return Err(malformed(MalformedReason::MissingAddress));
    }
    if let Some(prefix) = prefix_part {
        if prefix.contains('%') {
            return Err(malformed(MalformedReason::ZoneAfterPrefix));
        }
        if !get_prefix_regex().is_match(prefix) {
            return Err(malformed(MalformedReason::InvalidPrefix));
        }
    }

    let address = codec::parse_address(addr_part).map_err(malformed)?;
    let bits = address.version.bits();

    let prefix = match prefix_part {
        // digits only, so a failed parse can only be an overflow
        Some(prefix) => prefix
            .parse::<u32>()
            .map_err(|_| malformed(MalformedReason::PrefixOutOfRange))?,
        None => bits,
    };
    if prefix > bits {
        return Err(malformed(MalformedReason::PrefixOutOfRange));
    }

    Ok((address, prefix as u8, prefix_part.is_some()))
}

/// Parse a network token, exposing its prefix, range and display forms.
///
/// # Examples
/// ```
/// use cidr_tools::parse_cidr;
/// let parsed = parse_cidr("1.2.3.4/24").unwrap();
/// assert_eq!(parsed.start, 0x01020300);
/// assert_eq!(parsed.end, 0x010203FF);
/// assert!(parsed.prefix_present);
/// ```
pub fn parse_cidr(network: &str) -> Result<ParsedCidr, CidrError> {
    let (address, prefix, prefix_present) = split_token(network)?;
    let version = address.version;
    let host = host_mask(version, prefix).unwrap_or(0);

    let mut ip = format_address(
        address.number,
        version,
        FormatOpts {
            compress: true,
            dotted_tail: address.dotted_tail,
        },
    );
    if let Some(zone) = &address.zone {
        ip = format!("{ip}%{zone}");
    }

    Ok(ParsedCidr {
        cidr: format!("{ip}/{prefix}"),
        ip,
        version,
        prefix,
        prefix_present,
        start: address.number & !host,
        end: address.number | host,
        zone: address.zone,
        dotted_tail: address.dotted_tail,
    })
}

/// Parse a network token straight to its [`Range`], skipping the display fields.
pub fn parse_range(network: &str) -> Result<Range, CidrError> {
    let (address, prefix, _) = split_token(network)?;
    let host = host_mask(address.version, prefix).unwrap_or(0);
    Ok(Range::new(
        address.number & !host,
        address.number | host,
        address.version,
    ))
}
