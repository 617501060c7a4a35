//! Length-based dispatch between the three permit shapes.
//!
//! A permit blob is identified purely by its byte length; content is never sniffed.

use core::fmt;

use crate::{
    constants::{
        AMOUNT_LEN, COMPACT_SIGNATURE_LEN, PERMIT2_SIGNATURE_LEN, PERMIT2_SIGNATURE_OFFSET, SLOT_LEN,
        WORD,
    },
    errors::CodecError,
};

/// The supported permit call shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PermitVariant {
    /// `IERC20Permit.permit(owner, spender, value, deadline, v, r, s)`
    StandardPermit,
    /// `IDaiLikePermit.permit(holder, spender, nonce, expiry, allowed, v, r, s)`
    DaiLikePermit,
    /// `IPermit2.permit(owner, PermitSingle, signature)`
    Permit2Batch,
}

/// Which of the two byte spaces a blob lives in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Encoding {
    Canonical,
    Compact,
}

impl PermitVariant {
    pub const ALL: [PermitVariant; 3] = [
        PermitVariant::StandardPermit,
        PermitVariant::DaiLikePermit,
        PermitVariant::Permit2Batch,
    ];

    /// ABI-encoded parameter length (no selector).
    pub const fn canonical_len(self) -> usize {
        match self {
            PermitVariant::StandardPermit => 7 * WORD,
            PermitVariant::DaiLikePermit => 8 * WORD,
            // 7 static words + bytes offset, then bytes length + 64-byte payload
            PermitVariant::Permit2Batch => PERMIT2_SIGNATURE_OFFSET + WORD + PERMIT2_SIGNATURE_LEN,
        }
    }

    pub const fn compact_len(self) -> usize {
        match self {
            PermitVariant::StandardPermit => WORD + SLOT_LEN + COMPACT_SIGNATURE_LEN,
            PermitVariant::DaiLikePermit => SLOT_LEN + SLOT_LEN + COMPACT_SIGNATURE_LEN,
            PermitVariant::Permit2Batch => AMOUNT_LEN + 3 * SLOT_LEN + COMPACT_SIGNATURE_LEN,
        }
    }

    pub const fn encoded_len(self, encoding: Encoding) -> usize {
        match encoding {
            Encoding::Canonical => self.canonical_len(),
            Encoding::Compact => self.compact_len(),
        }
    }

    pub fn from_canonical_len(len: usize) -> Option<Self> {
        Self::from_len(len, Encoding::Canonical)
    }

    pub fn from_compact_len(len: usize) -> Option<Self> {
        Self::from_len(len, Encoding::Compact)
    }

    pub fn from_len(len: usize, encoding: Encoding) -> Option<Self> {
        Self::ALL.into_iter().find(|variant| variant.encoded_len(encoding) == len)
    }

    /// Whether the canonical call carries an explicit `token` field.
    pub const fn has_token(self) -> bool {
        matches!(self, PermitVariant::Permit2Batch)
    }

    pub const fn name(self) -> &'static str {
        match self {
            PermitVariant::StandardPermit => "StandardPermit",
            PermitVariant::DaiLikePermit => "DaiLikePermit",
            PermitVariant::Permit2Batch => "Permit2Batch",
        }
    }
}

impl fmt::Display for PermitVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Encoding {
    pub const fn other(self) -> Self {
        match self {
            Encoding::Canonical => Encoding::Compact,
            Encoding::Compact => Encoding::Canonical,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Encoding::Canonical => "canonical",
            Encoding::Compact => "compact",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classify a blob length in either space.
///
/// No canonical length equals a compact length, so the answer is unambiguous.
pub fn classify(len: usize) -> Option<(PermitVariant, Encoding)> {
    PermitVariant::from_canonical_len(len)
        .map(|variant| (variant, Encoding::Canonical))
        .or_else(|| PermitVariant::from_compact_len(len).map(|variant| (variant, Encoding::Compact)))
}

/// Classify a blob that is expected to be in `expected` space.
///
/// A length belonging to the other space is reported as already converted rather than decoded.
pub fn classify_as(len: usize, expected: Encoding) -> Result<PermitVariant, CodecError> {
    if let Some(variant) = PermitVariant::from_len(len, expected) {
        return Ok(variant);
    }
    match PermitVariant::from_len(len, expected.other()) {
        Some(variant) => Err(match expected {
            Encoding::Canonical => CodecError::AlreadyCompressed { variant },
            Encoding::Compact => CodecError::AlreadyDecompressed { variant },
        }),
        None => Err(CodecError::InvalidLength { len }),
    }
}
