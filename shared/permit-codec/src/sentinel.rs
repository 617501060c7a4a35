//! Sentinel-coded and plain narrow slots.
//!
//! A sentinel slot stores `0` for the field's type maximum ("never expires") and `value + 1`
//! otherwise, so any other value still round-trips exactly. Plain slots (nonces) store the value
//! as-is. Neither ever truncates: a value that does not fit is rejected.

use alloy_primitives::U256;

use crate::{
    constants::SLOT_BITS,
    errors::{CodecError, Field},
};

/// Encode `value` into a `bits`-wide sentinel slot.
pub fn pack_sentinel(field: Field, value: U256, max: U256, bits: usize) -> Result<U256, CodecError> {
    if value == max {
        return Ok(U256::ZERO);
    }
    value
        .checked_add(U256::from(1u8))
        .filter(|raw| raw.bit_len() <= bits)
        .ok_or(CodecError::FieldNotRepresentable { field, value })
}

/// Inverse of [`pack_sentinel`].
pub fn unpack_sentinel(raw: U256, max: U256) -> U256 {
    if raw.is_zero() {
        max
    } else {
        raw - U256::from(1u8)
    }
}

/// Sentinel-encode into a 4-byte compact slot.
pub fn pack_slot(field: Field, value: U256, max: U256) -> Result<u32, CodecError> {
    let raw = pack_sentinel(field, value, max, SLOT_BITS)?;
    Ok(raw.as_limbs()[0] as u32)
}

pub fn unpack_slot(raw: u32, max: U256) -> U256 {
    unpack_sentinel(U256::from(raw), max)
}

/// Store `value` in a 4-byte slot with no sentinel semantics.
pub fn narrow_slot(field: Field, value: U256) -> Result<u32, CodecError> {
    if value.bit_len() > SLOT_BITS {
        return Err(CodecError::FieldNotRepresentable { field, value });
    }
    Ok(value.as_limbs()[0] as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{MAX_UINT256, MAX_UINT48};

    #[test]
    fn test_max_is_zero() {
        for max in [MAX_UINT256, MAX_UINT48] {
            assert_eq!(pack_sentinel(Field::Deadline, max, max, 32), Ok(U256::ZERO));
            assert_eq!(unpack_sentinel(U256::ZERO, max), max);
            assert_eq!(pack_slot(Field::Deadline, max, max), Ok(0));
        }
    }

    #[test]
    fn test_finite_values_are_offset() {
        assert_eq!(pack_slot(Field::Deadline, U256::ZERO, MAX_UINT256), Ok(1));
        assert_eq!(pack_slot(Field::Deadline, U256::from(1_700_000_000u64), MAX_UINT256), Ok(1_700_000_001));
        assert_eq!(unpack_slot(1_700_000_001, MAX_UINT256), U256::from(1_700_000_000u64));
    }

    #[test]
    fn test_largest_finite_value() {
        let largest = U256::from(u32::MAX - 1);
        assert_eq!(pack_slot(Field::Expiry, largest, MAX_UINT256), Ok(u32::MAX));
        assert_eq!(unpack_slot(u32::MAX, MAX_UINT256), largest);

        let too_big = U256::from(u32::MAX);
        assert_eq!(
            pack_slot(Field::Expiry, too_big, MAX_UINT256),
            Err(CodecError::FieldNotRepresentable { field: Field::Expiry, value: too_big })
        );
    }

    #[test]
    fn test_uint256_max_against_uint48_sentinel() {
        // An unlimited uint256 sigDeadline is not the uint48 sentinel and cannot be offset.
        assert_eq!(
            pack_slot(Field::SigDeadline, MAX_UINT256, MAX_UINT48),
            Err(CodecError::FieldNotRepresentable { field: Field::SigDeadline, value: MAX_UINT256 })
        );
    }

    #[test]
    fn test_wider_slot() {
        let value = U256::from(u64::MAX - 1);
        let raw = pack_sentinel(Field::Deadline, value, MAX_UINT256, 64).unwrap();
        assert_eq!(raw, U256::from(u64::MAX));
        assert_eq!(unpack_sentinel(raw, MAX_UINT256), value);
    }

    #[test]
    fn test_narrow_slot() {
        assert_eq!(narrow_slot(Field::Nonce, U256::ZERO), Ok(0));
        assert_eq!(narrow_slot(Field::Nonce, U256::from(u32::MAX)), Ok(u32::MAX));
        let over = U256::from(u64::from(u32::MAX) + 1);
        assert_eq!(
            narrow_slot(Field::Nonce, over),
            Err(CodecError::FieldNotRepresentable { field: Field::Nonce, value: over })
        );
    }
}
