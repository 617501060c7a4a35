//! Compact permit layouts.
//!
//! Layouts (big-endian, no padding):
//! - Standard: `value (32) || deadline slot (4) || r (32) || vs (32)` = 100 bytes
//! - Dai-like: `nonce (4) || expiry slot (4) || r (32) || vs (32)` = 72 bytes
//! - Permit2:  `amount (20) || expiration slot (4) || nonce (4) || sigDeadline slot (4) || r (32) || vs (32)` = 96 bytes
//!
//! "slot" fields are sentinel coded: `0` means the type maximum, anything else is `value + 1`.

use alloc::vec::Vec;

use alloy_primitives::{aliases::U160, U256};

use crate::{
    bytes::{finish, read_b32, read_u160, read_u256, read_u32_be},
    classify::{classify_as, Encoding, PermitVariant},
    constants::{MAX_UINT256, MAX_UINT48},
    errors::CodecError,
    sentinel::unpack_slot,
    signature::CompactSignature,
};

/// Compact ERC-2612 permit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompactStandardPermit {
    pub value: U256,
    pub deadline_slot: u32,
    pub signature: CompactSignature,
}

/// Compact Dai-like permit. `allowed` is implied to be `true`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompactDaiLikePermit {
    pub nonce: u32,
    pub expiry_slot: u32,
    pub signature: CompactSignature,
}

/// Compact Permit2 `PermitSingle`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompactPermit2 {
    pub amount: U160,
    pub expiration_slot: u32,
    pub nonce: u32,
    pub sig_deadline_slot: u32,
    pub signature: CompactSignature,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompactPermit {
    Standard(CompactStandardPermit),
    DaiLike(CompactDaiLikePermit),
    Permit2(CompactPermit2),
}

impl CompactStandardPermit {
    pub fn deadline(&self) -> U256 {
        unpack_slot(self.deadline_slot, MAX_UINT256)
    }
}

impl CompactDaiLikePermit {
    pub fn expiry(&self) -> U256 {
        unpack_slot(self.expiry_slot, MAX_UINT256)
    }
}

impl CompactPermit2 {
    pub fn expiration(&self) -> U256 {
        unpack_slot(self.expiration_slot, MAX_UINT48)
    }

    pub fn sig_deadline(&self) -> U256 {
        unpack_slot(self.sig_deadline_slot, MAX_UINT48)
    }
}

impl CompactPermit {
    /// Split a compact blob into its fields by fixed offsets.
    pub fn decode(data: &[u8]) -> Result<Self, CodecError> {
        let variant = classify_as(data.len(), Encoding::Compact)?;
        let mut i = 0usize;
        let permit = match variant {
            PermitVariant::StandardPermit => {
                let value = read_u256(data, &mut i)?;
                let deadline_slot = read_u32_be(data, &mut i)?;
                let signature = read_signature(data, &mut i)?;
                Self::Standard(CompactStandardPermit { value, deadline_slot, signature })
            }
            PermitVariant::DaiLikePermit => {
                let nonce = read_u32_be(data, &mut i)?;
                let expiry_slot = read_u32_be(data, &mut i)?;
                let signature = read_signature(data, &mut i)?;
                Self::DaiLike(CompactDaiLikePermit { nonce, expiry_slot, signature })
            }
            PermitVariant::Permit2Batch => {
                let amount = read_u160(data, &mut i)?;
                let expiration_slot = read_u32_be(data, &mut i)?;
                let nonce = read_u32_be(data, &mut i)?;
                let sig_deadline_slot = read_u32_be(data, &mut i)?;
                let signature = read_signature(data, &mut i)?;
                Self::Permit2(CompactPermit2 {
                    amount,
                    expiration_slot,
                    nonce,
                    sig_deadline_slot,
                    signature,
                })
            }
        };
        finish(data, i)?;
        Ok(permit)
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.variant().compact_len());
        let signature = match self {
            Self::Standard(p) => {
                buf.extend_from_slice(&p.value.to_be_bytes::<32>());
                buf.extend_from_slice(&p.deadline_slot.to_be_bytes());
                p.signature
            }
            Self::DaiLike(p) => {
                buf.extend_from_slice(&p.nonce.to_be_bytes());
                buf.extend_from_slice(&p.expiry_slot.to_be_bytes());
                p.signature
            }
            Self::Permit2(p) => {
                buf.extend_from_slice(&p.amount.to_be_bytes::<20>());
                buf.extend_from_slice(&p.expiration_slot.to_be_bytes());
                buf.extend_from_slice(&p.nonce.to_be_bytes());
                buf.extend_from_slice(&p.sig_deadline_slot.to_be_bytes());
                p.signature
            }
        };
        buf.extend_from_slice(&signature.to_bytes());
        buf
    }

    pub fn variant(&self) -> PermitVariant {
        match self {
            Self::Standard(_) => PermitVariant::StandardPermit,
            Self::DaiLike(_) => PermitVariant::DaiLikePermit,
            Self::Permit2(_) => PermitVariant::Permit2Batch,
        }
    }

    pub fn signature(&self) -> CompactSignature {
        match self {
            Self::Standard(p) => p.signature,
            Self::DaiLike(p) => p.signature,
            Self::Permit2(p) => p.signature,
        }
    }
}

fn read_signature(data: &[u8], i: &mut usize) -> Result<CompactSignature, CodecError> {
    let r = read_b32(data, i)?;
    let vs = read_b32(data, i)?;
    Ok(CompactSignature::new(r, vs))
}
