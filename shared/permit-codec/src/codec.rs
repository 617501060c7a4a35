//! Compressor and decompressor.
//!
//! `decompress(compress(p), token(p), owner(p), spender(p)) == p` for every canonical permit `p`
//! that compresses. Identity fields passed to [`decompress`] are trusted, not verified against
//! the signature.

use alloc::vec::Vec;

use alloy_primitives::{aliases::U48, Address, Bytes, U256};

use crate::{
    canonical::CanonicalPermit,
    classify::PermitVariant,
    compact::{CompactDaiLikePermit, CompactPermit, CompactPermit2, CompactStandardPermit},
    constants::{MAX_UINT256, MAX_UINT48},
    errors::{CodecError, Field},
    interfaces::{IDaiLikePermit, IERC20Permit, IPermit2},
    sentinel::{narrow_slot, pack_slot},
    signature::CompactSignature,
};

/// Compress ABI-encoded permit parameters into their compact form.
pub fn compress(canonical: &[u8]) -> Result<Vec<u8>, CodecError> {
    let permit = CanonicalPermit::decode(canonical)?;
    Ok(permit.compress()?.encode())
}

/// Rebuild ABI-encoded permit parameters from a compact blob and the elided identity fields.
///
/// `token` is only read for Permit2 permits.
pub fn decompress(
    compact: &[u8],
    token: Address,
    owner: Address,
    spender: Address,
) -> Result<Vec<u8>, CodecError> {
    let permit = CompactPermit::decode(compact)?;
    Ok(permit.decompress(token, owner, spender).encode())
}

impl CanonicalPermit {
    pub fn compress(&self) -> Result<CompactPermit, CodecError> {
        let compact = match self {
            Self::Standard(call) => CompactPermit::Standard(CompactStandardPermit {
                value: call.value,
                deadline_slot: pack_slot(Field::Deadline, call.deadline, MAX_UINT256)?,
                signature: CompactSignature::from_rsv(call.r, call.s, call.v)?,
            }),
            Self::DaiLike(call) => {
                // The compact form has no slot for `allowed`; decompression restores `true`.
                if !call.allowed {
                    return Err(CodecError::FieldNotRepresentable {
                        field: Field::Allowed,
                        value: U256::ZERO,
                    });
                }
                CompactPermit::DaiLike(CompactDaiLikePermit {
                    nonce: narrow_slot(Field::Nonce, call.nonce)?,
                    expiry_slot: pack_slot(Field::Expiry, call.expiry, MAX_UINT256)?,
                    signature: CompactSignature::from_rsv(call.r, call.s, call.v)?,
                })
            }
            Self::Permit2(call) => {
                let single = &call.permitSingle;
                // Permit2 signatures already travel as `r || vs`.
                let signature = CompactSignature::from_slice(&call.signature).ok_or(
                    CodecError::NonCanonicalEncoding { variant: PermitVariant::Permit2Batch },
                )?;
                CompactPermit::Permit2(CompactPermit2 {
                    amount: single.details.amount,
                    expiration_slot: pack_slot(
                        Field::Expiration,
                        U256::from(single.details.expiration),
                        MAX_UINT48,
                    )?,
                    nonce: narrow_slot(Field::Nonce, U256::from(single.details.nonce))?,
                    sig_deadline_slot: pack_slot(Field::SigDeadline, single.sigDeadline, MAX_UINT48)?,
                    signature,
                })
            }
        };
        Ok(compact)
    }
}

impl CompactPermit {
    pub fn decompress(&self, token: Address, owner: Address, spender: Address) -> CanonicalPermit {
        match self {
            Self::Standard(p) => {
                let (r, s, v) = p.signature.to_rsv();
                CanonicalPermit::Standard(IERC20Permit::permitCall {
                    owner,
                    spender,
                    value: p.value,
                    deadline: p.deadline(),
                    v,
                    r,
                    s,
                })
            }
            Self::DaiLike(p) => {
                let (r, s, v) = p.signature.to_rsv();
                CanonicalPermit::DaiLike(IDaiLikePermit::permitCall {
                    holder: owner,
                    spender,
                    nonce: U256::from(p.nonce),
                    expiry: p.expiry(),
                    allowed: true,
                    v,
                    r,
                    s,
                })
            }
            Self::Permit2(p) => CanonicalPermit::Permit2(IPermit2::permitCall {
                owner,
                permitSingle: IPermit2::PermitSingle {
                    details: IPermit2::PermitDetails {
                        token,
                        amount: p.amount,
                        // at most `MAX_UINT48` by construction of the slot
                        expiration: U48::saturating_from(p.expiration()),
                        nonce: U48::from(p.nonce),
                    },
                    spender,
                    sigDeadline: p.sig_deadline(),
                },
                signature: Bytes::copy_from_slice(&p.signature.to_bytes()),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{aliases::U160, B256};

    const OWNER: Address = Address::repeat_byte(0xaa);
    const SPENDER: Address = Address::repeat_byte(0xbb);
    const TOKEN: Address = Address::repeat_byte(0xcc);

    fn standard(v: u8, deadline: U256) -> CanonicalPermit {
        CanonicalPermit::Standard(IERC20Permit::permitCall {
            owner: OWNER,
            spender: SPENDER,
            value: U256::from(42u64),
            deadline,
            v,
            r: B256::repeat_byte(0x11),
            s: B256::repeat_byte(0x22),
        })
    }

    fn dai(nonce: U256, allowed: bool) -> CanonicalPermit {
        CanonicalPermit::DaiLike(IDaiLikePermit::permitCall {
            holder: OWNER,
            spender: SPENDER,
            nonce,
            expiry: U256::from(1_800_000_000u64),
            allowed,
            v: 28,
            r: B256::repeat_byte(0x11),
            s: B256::repeat_byte(0x22),
        })
    }

    fn permit2(expiration: U48, sig_deadline: U256) -> CanonicalPermit {
        permit2_with_nonce(expiration, sig_deadline, U48::from(12u8))
    }

    fn permit2_with_nonce(expiration: U48, sig_deadline: U256, nonce: U48) -> CanonicalPermit {
        let mut signature = alloc::vec![0x11u8; 32];
        signature.extend_from_slice(&[0x99u8; 32]);
        CanonicalPermit::Permit2(IPermit2::permitCall {
            owner: OWNER,
            permitSingle: IPermit2::PermitSingle {
                details: IPermit2::PermitDetails {
                    token: TOKEN,
                    amount: U160::from(5_000_000u64),
                    expiration,
                    nonce,
                },
                spender: SPENDER,
                sigDeadline: sig_deadline,
            },
            signature: Bytes::from(signature),
        })
    }

    #[test]
    fn test_standard_max_deadline_v27() {
        let canonical = standard(27, U256::MAX).encode();
        let compact = compress(&canonical).unwrap();
        assert_eq!(compact.len(), 100);
        assert_eq!(compact[..32], U256::from(42u64).to_be_bytes::<32>());
        assert_eq!(compact[32..36], [0u8; 4]);
        assert_eq!(compact[36..68], [0x11u8; 32]);
        assert_eq!(compact[68..], [0x22u8; 32]);
        assert_eq!(decompress(&compact, Address::ZERO, OWNER, SPENDER).unwrap(), canonical);
    }

    #[test]
    fn test_standard_v28_sets_parity_bit() {
        let canonical = standard(28, U256::MAX).encode();
        let compact = compress(&canonical).unwrap();
        assert_eq!(compact[68], 0x22 | 0x80);
        assert_eq!(compact[69..], [0x22u8; 31]);
        assert_eq!(decompress(&compact, Address::ZERO, OWNER, SPENDER).unwrap(), canonical);
    }

    #[test]
    fn test_standard_finite_deadline() {
        let canonical = standard(27, U256::from(1_700_000_000u64)).encode();
        let compact = compress(&canonical).unwrap();
        assert_eq!(compact[32..36], 1_700_000_001u32.to_be_bytes());
        assert_eq!(decompress(&compact, TOKEN, OWNER, SPENDER).unwrap(), canonical);
    }

    #[test]
    fn test_standard_unrepresentable_deadline() {
        let deadline = U256::from(1u64 << 40);
        let canonical = standard(27, deadline).encode();
        assert_eq!(
            compress(&canonical),
            Err(CodecError::FieldNotRepresentable { field: Field::Deadline, value: deadline })
        );
    }

    #[test]
    fn test_standard_bad_v() {
        let canonical = standard(1, U256::MAX).encode();
        assert_eq!(compress(&canonical), Err(CodecError::MalformedSignatureComponent));
    }

    #[test]
    fn test_dai_round_trip() {
        let canonical = dai(U256::from(7u8), true).encode();
        let compact = compress(&canonical).unwrap();
        assert_eq!(compact.len(), 72);
        assert_eq!(compact[..4], [0, 0, 0, 7]);
        assert_eq!(compact[4..8], 1_800_000_001u32.to_be_bytes());
        assert_eq!(decompress(&compact, Address::ZERO, OWNER, SPENDER).unwrap(), canonical);
    }

    #[test]
    fn test_dai_nonce_overflow() {
        let nonce = U256::from(u64::from(u32::MAX) + 1);
        assert_eq!(
            compress(&dai(nonce, true).encode()),
            Err(CodecError::FieldNotRepresentable { field: Field::Nonce, value: nonce })
        );
    }

    #[test]
    fn test_dai_disallow_is_rejected() {
        assert_eq!(
            compress(&dai(U256::ZERO, false).encode()),
            Err(CodecError::FieldNotRepresentable { field: Field::Allowed, value: U256::ZERO })
        );
    }

    #[test]
    fn test_permit2_max_time_fields() {
        let canonical = permit2(U48::MAX, MAX_UINT48).encode();
        let compact = compress(&canonical).unwrap();
        assert_eq!(compact.len(), 96);
        assert_eq!(compact[20..24], [0u8; 4]);
        assert_eq!(compact[24..28], [0, 0, 0, 12]);
        assert_eq!(compact[28..32], [0u8; 4]);
        assert_eq!(compact[32..64], [0x11u8; 32]);
        assert_eq!(compact[64..], [0x99u8; 32]);
        assert_eq!(decompress(&compact, TOKEN, OWNER, SPENDER).unwrap(), canonical);
    }

    #[test]
    fn test_permit2_finite_time_fields() {
        let canonical = permit2(U48::from(1_750_000_000u64), U256::from(1_760_000_000u64)).encode();
        let compact = compress(&canonical).unwrap();
        assert_eq!(compact[20..24], 1_750_000_001u32.to_be_bytes());
        assert_eq!(compact[28..32], 1_760_000_001u32.to_be_bytes());
        assert_eq!(decompress(&compact, TOKEN, OWNER, SPENDER).unwrap(), canonical);
    }

    #[test]
    fn test_permit2_uint256_sig_deadline() {
        assert_eq!(
            compress(&permit2(U48::MAX, U256::MAX).encode()),
            Err(CodecError::FieldNotRepresentable { field: Field::SigDeadline, value: U256::MAX })
        );
    }

    #[test]
    fn test_permit2_nonce_overflow() {
        let canonical = permit2_with_nonce(U48::MAX, MAX_UINT48, U48::from(1u64 << 32)).encode();
        assert_eq!(
            compress(&canonical),
            Err(CodecError::FieldNotRepresentable {
                field: Field::Nonce,
                value: U256::from(1u64 << 32),
            })
        );

        let largest = permit2_with_nonce(U48::MAX, MAX_UINT48, U48::from(u32::MAX)).encode();
        let compact = compress(&largest).unwrap();
        assert_eq!(compact[24..28], [0xffu8; 4]);
        assert_eq!(decompress(&compact, TOKEN, OWNER, SPENDER).unwrap(), largest);
    }

    #[test]
    fn test_permit2_expiration_overflow() {
        for expiration in [u64::from(u32::MAX), (1u64 << 48) - 2] {
            let canonical = permit2(U48::from(expiration), MAX_UINT48).encode();
            assert_eq!(
                compress(&canonical),
                Err(CodecError::FieldNotRepresentable {
                    field: Field::Expiration,
                    value: U256::from(expiration),
                })
            );
        }

        let largest = permit2(U48::from(u32::MAX - 1), MAX_UINT48).encode();
        let compact = compress(&largest).unwrap();
        assert_eq!(compact[20..24], [0xffu8; 4]);
        assert_eq!(decompress(&compact, TOKEN, OWNER, SPENDER).unwrap(), largest);
    }

    #[test]
    fn test_permit2_wrong_token_changes_output() {
        let canonical = permit2(U48::MAX, MAX_UINT48).encode();
        let compact = compress(&canonical).unwrap();
        let other = decompress(&compact, Address::repeat_byte(0xdd), OWNER, SPENDER).unwrap();
        assert_ne!(other, canonical);
        assert_eq!(other.len(), canonical.len());
    }

    #[test]
    fn test_direction_confusion() {
        let canonical = standard(27, U256::MAX).encode();
        let compact = compress(&canonical).unwrap();
        assert_eq!(
            compress(&compact),
            Err(CodecError::AlreadyCompressed { variant: PermitVariant::StandardPermit })
        );
        assert_eq!(
            decompress(&canonical, TOKEN, OWNER, SPENDER),
            Err(CodecError::AlreadyDecompressed { variant: PermitVariant::StandardPermit })
        );
        assert_eq!(compress(&[0u8; 10]), Err(CodecError::InvalidLength { len: 10 }));
        assert_eq!(
            decompress(&[0u8; 101], TOKEN, OWNER, SPENDER),
            Err(CodecError::InvalidLength { len: 101 })
        );
    }
}
