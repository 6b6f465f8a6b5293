//! Range algebra.
//!
//! - [`decompose`] - minimal CIDR decomposition of a range
//! - [`merge`] - union of overlapping and adjacent ranges
//! - [`exclude`] - set difference
//! - [`relation`] - overlap and containment tests
//! - [`expand`] - lazy per-address enumeration
//! - [`normalize`] - canonical text form of a token

mod decompose;
mod exclude;
mod expand;
mod merge;
mod normalize;
mod relation;

pub use decompose::decompose_into;
pub use exclude::{exclude_ranges, exclude_set, subtract};
pub use expand::Expander;
pub use merge::{coalesce, merge_ranges, merge_set};
pub use normalize::{normalize_cidr, normalize_cidrs, NormalizeOpts};
pub use relation::{contains_ranges, contains_set, overlap_ranges, overlap_set};
