//! Error types for network parsing.

use thiserror::Error;

/// Why a network token was rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    #[error("empty network")]
    Empty,

    #[error("missing address before prefix")]
    MissingAddress,

    #[error("address is not a valid IPv4 or IPv6 address")]
    InvalidAddress,

    #[error("prefix is not a non-negative integer")]
    InvalidPrefix,

    #[error("prefix is longer than the address")]
    PrefixOutOfRange,

    #[error("zone id must come before the prefix")]
    ZoneAfterPrefix,

    #[error("zone id is only allowed on IPv6 addresses")]
    UnexpectedZone,

    #[error("more than one '/' in network")]
    TooManySlashes,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CidrError {
    #[error("Network is not a CIDR or IP: \"{network}\" ({reason})")]
    MalformedNetwork {
        network: String,
        reason: MalformedReason,
    },
}

impl CidrError {
    pub(crate) fn malformed(network: &str, reason: MalformedReason) -> CidrError {
        CidrError::MalformedNetwork {
            network: network.to_string(),
            reason,
        }
    }

    /// The reason a token was rejected.
    pub fn reason(&self) -> MalformedReason {
        match self {
            CidrError::MalformedNetwork { reason, .. } => *reason,
        }
    }
}
