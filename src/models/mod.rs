//! Domain models for CIDR range algebra.
//!
//! This module contains the core data structures used throughout the crate:
//! - [`IpVersion`] - address family and its bit width
//! - [`Range`] - inclusive numeric address range
//! - [`Cidr`] - aligned block in `address/prefix` form
//! - [`ParsedCidr`] - a parsed network token
//! - [`NetworkSet`] - ranges grouped by version

mod cidr;
mod network_set;
mod parsed;
mod range;
mod version;

// Re-export public types
pub use cidr::{host_mask, Cidr};
pub use network_set::NetworkSet;
pub use parsed::{parse_cidr, parse_range, ParsedCidr};
pub use range::{low_mask, Range};
pub use version::IpVersion;
