//! CIDR and IP range algebra.
//!
//! Every operation takes lists of network tokens (`1.2.3.0/24`, `::1`, `fe80::1%eth0/64`),
//! works on IPv4 and IPv6 independently and reports results IPv4 first, ascending.
//!
//! ```
//! let merged = cidr_tools::merge_cidr(["1.0.0.0/24", "1.0.1.0/24"]).unwrap();
//! assert_eq!(merged[0].to_string(), "1.0.0.0/23");
//! ```

pub mod cli;
pub mod codec;
pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod output;
pub mod processing;

pub use error::{CidrError, MalformedReason};
pub use models::{parse_cidr, Cidr, IpVersion, NetworkSet, ParsedCidr, Range};
pub use processing::{normalize_cidrs, Expander, NormalizeOpts};

/// Merge networks into the minimal list of CIDR blocks covering them exactly.
pub fn merge_cidr<I, S>(networks: I) -> Result<Vec<Cidr>, CidrError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let set = NetworkSet::parse(networks)?;
    Ok(processing::merge_set(&set).to_cidrs())
}

/// `base` minus `exclude`, as the minimal list of CIDR blocks.
pub fn exclude_cidr<I, S, J, T>(base: I, exclude: J) -> Result<Vec<Cidr>, CidrError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    J: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    let base = NetworkSet::parse(base)?;
    let exclude = NetworkSet::parse(exclude)?;
    Ok(processing::exclude_set(&base, &exclude).to_cidrs())
}

/// Every address of the merged networks, lazily.
///
/// ```
/// let ips: Vec<String> = cidr_tools::expand_cidr(["1.2.3.0/31"])
///     .unwrap()
///     .map(|ip| ip.to_string())
///     .collect();
/// assert_eq!(ips, ["1.2.3.0", "1.2.3.1"]);
/// ```
pub fn expand_cidr<I, S>(networks: I) -> Result<Expander, CidrError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let set = NetworkSet::parse(networks)?;
    Ok(Expander::new(processing::merge_set(&set).into_ranges()))
}

/// True if any network in `a` shares an address with any network in `b`.
pub fn overlap_cidr<I, S, J, T>(a: I, b: J) -> Result<bool, CidrError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    J: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    let a = NetworkSet::parse(a)?;
    let b = NetworkSet::parse(b)?;
    Ok(processing::overlap_set(&a, &b))
}

/// True if every network in `b` is covered by the networks in `a`.
pub fn contains_cidr<I, S, J, T>(a: I, b: J) -> Result<bool, CidrError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    J: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    let a = NetworkSet::parse(a)?;
    let b = NetworkSet::parse(b)?;
    Ok(processing::contains_set(&a, &b))
}

/// Canonical text form of one network, see [`NormalizeOpts`].
pub fn normalize_cidr(network: &str, opts: NormalizeOpts) -> Result<String, CidrError> {
    processing::normalize_cidr(network, opts)
}
