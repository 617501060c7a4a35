//! Field widths and numeric limits shared by both directions of the codec.
//!
//! These are frozen wire constants: deployed verifiers decode compact permits with the same
//! offsets, so none of them may change.

use alloy_primitives::U256;

/// ABI word size.
pub const WORD: usize = 32;

/// Width of every compact sentinel / nonce slot, in bytes.
pub const SLOT_LEN: usize = 4;
pub const SLOT_BITS: usize = SLOT_LEN * 8;

/// Width of a packed `(r, vs)` signature.
pub const COMPACT_SIGNATURE_LEN: usize = 2 * WORD;

/// Permit2 `uint160 amount`.
pub const AMOUNT_LEN: usize = 20;

pub const MAX_UINT256: U256 = U256::MAX;

/// `type(uint48).max`, the "never expires" value for Permit2 time fields.
pub const MAX_UINT48: U256 = U256::from_limbs([(1u64 << 48) - 1, 0, 0, 0]);

/// Low 255 bits of a `vs` word; the remaining top bit carries the recovery parity.
pub const S_MASK: U256 = U256::from_limbs([u64::MAX, u64::MAX, u64::MAX, u64::MAX >> 1]);

/// Bit index of the parity flag inside `vs`.
pub const PARITY_BIT: usize = 255;

/// Legacy recovery id offset (`v = 27 + parity`).
pub const V_BASE: u8 = 27;

/// Permit2 `bytes signature` head: offset of the tail (8 head words) and payload length.
pub const PERMIT2_SIGNATURE_OFFSET: usize = 8 * WORD;
pub const PERMIT2_SIGNATURE_LEN: usize = COMPACT_SIGNATURE_LEN;
