//! Address codec: text addresses to `(u128, IpVersion)` and back.
//!
//! Parsing is delegated to [`std::net`]; an optional IPv6 zone id (`%eth0`) is split off
//! first. Rendering of IPv6 is done here so that zero compression and the dotted IPv4
//! tail can be switched on and off independently.

use crate::error::MalformedReason;
use crate::models::IpVersion;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// An address token decoded into its numeric form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedAddress {
    pub number: u128,
    pub version: IpVersion,
    /// IPv6 zone id without the leading `%`.
    pub zone: Option<String>,
    /// The IPv6 text carried a dotted IPv4 tail (`::ffff:1.2.3.4`).
    pub dotted_tail: bool,
}

/// Rendering switches for [`format_address`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOpts {
    /// Collapse the longest run of zero groups to `::`.
    pub compress: bool,
    /// Print the last 32 bits of an IPv6 address as a dotted quad.
    pub dotted_tail: bool,
}

impl Default for FormatOpts {
    fn default() -> Self {
        FormatOpts {
            compress: true,
            dotted_tail: false,
        }
    }
}

/// Decode an address with optional zone id.
pub fn parse_address(text: &str) -> Result<ParsedAddress, MalformedReason> {
    let (addr, zone) = match text.split_once('%') {
        Some((addr, zone)) => (addr, Some(zone)),
        None => (text, None),
    };

    if addr.contains(':') {
        let ip: Ipv6Addr = addr.parse().map_err(|_| MalformedReason::InvalidAddress)?;
        if zone.is_some_and(|z| z.is_empty() || z.contains('%')) {
            return Err(MalformedReason::InvalidAddress);
        }
        Ok(ParsedAddress {
            number: u128::from(ip),
            version: IpVersion::V6,
            zone: zone.map(str::to_string),
            dotted_tail: addr.contains('.'),
        })
    } else {
        let ip: Ipv4Addr = addr.parse().map_err(|_| MalformedReason::InvalidAddress)?;
        if zone.is_some() {
            return Err(MalformedReason::UnexpectedZone);
        }
        Ok(ParsedAddress {
            number: u32::from(ip) as u128,
            version: IpVersion::V4,
            zone: None,
            dotted_tail: false,
        })
    }
}

/// Convert a numeric address to a [`std::net::IpAddr`].
pub fn to_ip_addr(number: u128, version: IpVersion) -> IpAddr {
    match version {
        IpVersion::V4 => IpAddr::V4(Ipv4Addr::from(number as u32)),
        IpVersion::V6 => IpAddr::V6(Ipv6Addr::from(number)),
    }
}

/// Inverse of [`to_ip_addr`].
pub fn from_ip_addr(ip: IpAddr) -> (u128, IpVersion) {
    match ip {
        IpAddr::V4(v4) => (u32::from(v4) as u128, IpVersion::V4),
        IpAddr::V6(v6) => (u128::from(v6), IpVersion::V6),
    }
}

/// Render a numeric address as text.
pub fn format_address(number: u128, version: IpVersion, opts: FormatOpts) -> String {
    match version {
        IpVersion::V4 => Ipv4Addr::from(number as u32).to_string(),
        IpVersion::V6 => format_v6(number, opts),
    }
}

fn format_v6(number: u128, opts: FormatOpts) -> String {
    let groups = Ipv6Addr::from(number).segments();

    // with a dotted tail only the first six groups are hex
    let (hex_groups, tail) = if opts.dotted_tail {
        let v4 = Ipv4Addr::from(number as u32);
        (&groups[..6], Some(v4.to_string()))
    } else {
        (&groups[..], None)
    };

    let hex: Vec<String> = hex_groups.iter().map(|g| format!("{g:x}")).collect();

    let run = if opts.compress {
        longest_zero_run(hex_groups)
    } else {
        None
    };

    match run {
        Some((start, end)) => {
            let left = hex[..start].join(":");
            let mut right: Vec<String> = hex[end..].to_vec();
            right.extend(tail);
            format!("{left}::{}", right.join(":"))
        }
        None => {
            let mut parts = hex;
            parts.extend(tail);
            parts.join(":")
        }
    }
}

/// Leftmost longest run of at least two zero groups, as a half-open index range.
fn longest_zero_run(groups: &[u16]) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize)> = None;
    let mut i = 0;
    while i < groups.len() {
        if groups[i] != 0 {
            i += 1;
            continue;
        }
        let start = i;
        while i < groups.len() && groups[i] == 0 {
            i += 1;
        }
        let len = i - start;
        let best_len = best.map_or(0, |(s, e)| e - s);
        if len >= 2 && len > best_len {
            best = Some((start, i));
        }
    }
    best
}
