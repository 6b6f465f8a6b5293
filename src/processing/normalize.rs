//! Canonical text form of a network token.

use crate::codec::{format_address, FormatOpts};
use crate::error::CidrError;
use crate::models::parse_cidr;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeOpts {
    /// Collapse the longest run of zero IPv6 groups to `::`.
    pub compress: bool,
    /// Render a dotted IPv4 tail as two hex groups.
    pub hexify: bool,
}

impl Default for NormalizeOpts {
    fn default() -> Self {
        NormalizeOpts {
            compress: true,
            hexify: false,
        }
    }
}

/// Normalize one network.
///
/// A network with a prefix comes back as `network-address/prefix`, a bare address as
/// the address alone (zone id kept).
///
/// # Examples
/// ```
/// use cidr_tools::processing::{normalize_cidr, NormalizeOpts};
/// assert_eq!(normalize_cidr("255.255.255.255/6", NormalizeOpts::default()).unwrap(), "252.0.0.0/6");
/// assert_eq!(normalize_cidr("::0001", NormalizeOpts::default()).unwrap(), "::1");
/// ```
pub fn normalize_cidr(network: &str, opts: NormalizeOpts) -> Result<String, CidrError> {
    let parsed = parse_cidr(network)?;

    if parsed.start != parsed.end || parsed.prefix_present {
        let start = format_address(
            parsed.start,
            parsed.version,
            FormatOpts {
                compress: opts.compress,
                dotted_tail: false,
            },
        );
        return Ok(format!("{start}/{}", parsed.prefix));
    }

    let mut ip = format_address(
        parsed.start,
        parsed.version,
        FormatOpts {
            compress: opts.compress,
            dotted_tail: parsed.dotted_tail && !opts.hexify,
        },
    );
    if let Some(zone) = &parsed.zone {
        ip.push('%');
        ip.push_str(zone);
    }
    Ok(ip)
}

/// [`normalize_cidr`] over a list, failing on the first malformed token.
pub fn normalize_cidrs<I, S>(networks: I, opts: NormalizeOpts) -> Result<Vec<String>, CidrError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    networks
        .into_iter()
        .map(|network| normalize_cidr(network.as_ref(), opts))
        .collect()
}
