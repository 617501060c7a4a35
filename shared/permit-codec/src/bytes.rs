//! Minimal big-endian readers for compact permit blobs.
//!
//! Every reader advances the cursor and fails with `InvalidLength` when the blob is short.

use alloy_primitives::{aliases::U160, B256, U256};

use crate::{
    constants::{AMOUNT_LEN, SLOT_LEN, WORD},
    errors::CodecError,
};

fn take<'a>(bytes: &'a [u8], i: &mut usize, len: usize) -> Result<&'a [u8], CodecError> {
    if bytes.len() < *i + len {
        return Err(CodecError::InvalidLength { len: bytes.len() });
    }
    let out = &bytes[*i..*i + len];
    *i += len;
    Ok(out)
}

pub fn read_u32_be(bytes: &[u8], i: &mut usize) -> Result<u32, CodecError> {
    let mut buf = [0u8; SLOT_LEN];
    buf.copy_from_slice(take(bytes, i, SLOT_LEN)?);
    Ok(u32::from_be_bytes(buf))
}

pub fn read_u160(bytes: &[u8], i: &mut usize) -> Result<U160, CodecError> {
    let mut buf = [0u8; AMOUNT_LEN];
    buf.copy_from_slice(take(bytes, i, AMOUNT_LEN)?);
    Ok(U160::from_be_bytes(buf))
}

pub fn read_u256(bytes: &[u8], i: &mut usize) -> Result<U256, CodecError> {
    Ok(U256::from_be_slice(take(bytes, i, WORD)?))
}

pub fn read_b32(bytes: &[u8], i: &mut usize) -> Result<B256, CodecError> {
    Ok(B256::from_slice(take(bytes, i, WORD)?))
}

/// Reject trailing bytes so each blob has exactly one reading.
pub fn finish(bytes: &[u8], i: usize) -> Result<(), CodecError> {
    if i != bytes.len() {
        return Err(CodecError::InvalidLength { len: bytes.len() });
    }
    Ok(())
}
