use core::fmt;

use alloy_primitives::U256;
use thiserror::Error;

use crate::classify::PermitVariant;

/// Permit fields that can be rejected during compression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Deadline,
    Expiry,
    Allowed,
    Nonce,
    Expiration,
    SigDeadline,
}

impl Field {
    pub const fn name(self) -> &'static str {
        match self {
            Field::Deadline => "deadline",
            Field::Expiry => "expiry",
            Field::Allowed => "allowed",
            Field::Nonce => "nonce",
            Field::Expiration => "expiration",
            Field::SigDeadline => "sigDeadline",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors surfaced by compression, decompression and classification.
///
/// All of these are hard failures; the codec never produces partial output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("invalid permit length: {len} bytes")]
    InvalidLength { len: usize },

    #[error("{variant} permit is already compressed")]
    AlreadyCompressed { variant: PermitVariant },

    #[error("{variant} permit is already decompressed")]
    AlreadyDecompressed { variant: PermitVariant },

    /// The value cannot be stored in its compact slot without changing what was signed.
    #[error("{field} value does not fit its compact slot")]
    FieldNotRepresentable { field: Field, value: U256 },

    /// `v` outside `{27, 28}` or `s` with the parity bit set.
    #[error("malformed signature component")]
    MalformedSignatureComponent,

    /// Input has a canonical length but is not the canonical ABI encoding of its variant.
    #[error("{variant} permit is not canonically ABI encoded")]
    NonCanonicalEncoding { variant: PermitVariant },
}
