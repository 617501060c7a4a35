//! Compact `(r, vs)` signatures.
//!
//! `vs` carries `s` in its low 255 bits and the recovery parity (`v - 27`) in the top bit. This
//! relies on `s` being low-s normalised, which every signer on the authoring path guarantees.

use alloy_primitives::{B256, U256};

use crate::{
    constants::{COMPACT_SIGNATURE_LEN, PARITY_BIT, S_MASK, V_BASE, WORD},
    errors::CodecError,
};

/// Fold `(v, s)` into a single `vs` word.
pub fn pack_vs(v: u8, s: B256) -> Result<B256, CodecError> {
    let parity = match v {
        27 | 28 => v - V_BASE,
        _ => return Err(CodecError::MalformedSignatureComponent),
    };
    let s = U256::from_be_bytes(s.0);
    if s > S_MASK {
        return Err(CodecError::MalformedSignatureComponent);
    }
    let vs = s | (U256::from(parity) << PARITY_BIT);
    Ok(B256::from(vs.to_be_bytes::<32>()))
}

/// Split a `vs` word back into `(v, s)`. Every word is a valid packed half.
pub fn unpack_vs(vs: B256) -> (u8, B256) {
    let vs = U256::from_be_bytes(vs.0);
    let v = V_BASE + u8::from(vs.bit(PARITY_BIT));
    let s = vs & S_MASK;
    (v, B256::from(s.to_be_bytes::<32>()))
}

/// A 64-byte `r ++ vs` signature.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CompactSignature {
    pub r: B256,
    pub vs: B256,
}

impl CompactSignature {
    pub const fn new(r: B256, vs: B256) -> Self {
        Self { r, vs }
    }

    pub fn from_rsv(r: B256, s: B256, v: u8) -> Result<Self, CodecError> {
        Ok(Self { r, vs: pack_vs(v, s)? })
    }

    /// Returns `(r, s, v)`.
    pub fn to_rsv(&self) -> (B256, B256, u8) {
        let (v, s) = unpack_vs(self.vs);
        (self.r, s, v)
    }

    /// Parse a 64-byte `r ++ vs` payload (the Permit2 signature form).
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        if bytes.len() != COMPACT_SIGNATURE_LEN {
            return None;
        }
        Some(Self {
            r: B256::from_slice(&bytes[..WORD]),
            vs: B256::from_slice(&bytes[WORD..]),
        })
    }

    pub fn to_bytes(&self) -> [u8; COMPACT_SIGNATURE_LEN] {
        let mut out = [0u8; COMPACT_SIGNATURE_LEN];
        out[..WORD].copy_from_slice(self.r.as_slice());
        out[WORD..].copy_from_slice(self.vs.as_slice());
        out
    }
}
