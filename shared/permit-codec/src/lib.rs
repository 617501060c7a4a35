//! Compact calldata codec for token permit calls.
//!
//! Three permit call shapes are supported (ERC-2612, Dai-like and Permit2 `permit`). Each has a
//! verbose canonical ABI layout; this crate projects it onto a fixed-width compact layout that
//! drops the identity fields the consuming contract already knows (owner, spender, token), folds
//! the signature parity into the high bit of `s` and encodes "unlimited" time fields as zero.
//!
//! Everything here is pure: no I/O, no allocation beyond the output buffer, no shared state.
#![cfg_attr(not(any(test, feature = "std")), no_std)]

extern crate alloc;

pub mod bytes;
pub mod canonical;
pub mod classify;
pub mod codec;
pub mod compact;
pub mod constants;
pub mod errors;
pub mod interfaces;
pub mod sentinel;
pub mod signature;

pub use canonical::CanonicalPermit;
pub use classify::{classify, classify_as, Encoding, PermitVariant};
pub use codec::{compress, decompress};
pub use compact::{CompactDaiLikePermit, CompactPermit, CompactPermit2, CompactStandardPermit};
pub use errors::{CodecError, Field};
pub use signature::{pack_vs, unpack_vs, CompactSignature};
