//! Canonical (ABI-encoded) permit calls.

use alloc::vec::Vec;

use alloy_primitives::Address;
use alloy_sol_types::SolCall;

use crate::{
    classify::{classify_as, Encoding, PermitVariant},
    errors::CodecError,
    interfaces::{IDaiLikePermit, IERC20Permit, IPermit2},
};

/// A decoded canonical permit call, one per supported shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CanonicalPermit {
    Standard(IERC20Permit::permitCall),
    DaiLike(IDaiLikePermit::permitCall),
    Permit2(IPermit2::permitCall),
}

impl CanonicalPermit {
    /// Decode ABI-encoded permit parameters (no selector).
    ///
    /// Only the exact canonical encoding is accepted: dirty padding, a non-standard dynamic
    /// offset or a Permit2 signature that is not 64 bytes are rejected, so that compressing and
    /// decompressing reproduces the input byte for byte.
    pub fn decode(data: &[u8]) -> Result<Self, CodecError> {
        let variant = classify_as(data.len(), Encoding::Canonical)?;
        let permit = match variant {
            PermitVariant::StandardPermit => Self::Standard(decode_call(variant, data)?),
            PermitVariant::DaiLikePermit => Self::DaiLike(decode_call(variant, data)?),
            PermitVariant::Permit2Batch => Self::Permit2(decode_call(variant, data)?),
        };
        if permit.encode() != data {
            return Err(CodecError::NonCanonicalEncoding { variant });
        }
        Ok(permit)
    }

    /// ABI-encode the call parameters (no selector).
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.variant().canonical_len());
        match self {
            Self::Standard(call) => call.abi_encode_raw(&mut out),
            Self::DaiLike(call) => call.abi_encode_raw(&mut out),
            Self::Permit2(call) => call.abi_encode_raw(&mut out),
        }
        out
    }

    pub fn variant(&self) -> PermitVariant {
        match self {
            Self::Standard(_) => PermitVariant::StandardPermit,
            Self::DaiLike(_) => PermitVariant::DaiLikePermit,
            Self::Permit2(_) => PermitVariant::Permit2Batch,
        }
    }

    /// Function selector of the permit entrypoint this call targets.
    pub fn selector(&self) -> [u8; 4] {
        match self {
            Self::Standard(_) => IERC20Permit::permitCall::SELECTOR,
            Self::DaiLike(_) => IDaiLikePermit::permitCall::SELECTOR,
            Self::Permit2(_) => IPermit2::permitCall::SELECTOR,
        }
    }

    /// Token owner (`holder` for Dai-like permits).
    pub fn owner(&self) -> Address {
        match self {
            Self::Standard(call) => call.owner,
            Self::DaiLike(call) => call.holder,
            Self::Permit2(call) => call.owner,
        }
    }

    pub fn spender(&self) -> Address {
        match self {
            Self::Standard(call) => call.spender,
            Self::DaiLike(call) => call.spender,
            Self::Permit2(call) => call.permitSingle.spender,
        }
    }

    /// Embedded token address; only Permit2 calls carry one.
    pub fn token(&self) -> Option<Address> {
        match self {
            Self::Permit2(call) => Some(call.permitSingle.details.token),
            _ => None,
        }
    }
}

fn decode_call<C: SolCall>(variant: PermitVariant, data: &[u8]) -> Result<C, CodecError> {
    C::abi_decode_raw(data, true).map_err(|_| CodecError::NonCanonicalEncoding { variant })
}
