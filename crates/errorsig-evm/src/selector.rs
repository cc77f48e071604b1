//! Selector derivation.
//!
//! The selector of a custom error is the first 4 bytes of the keccak256 hash
//! of its canonical signature:
//!   keccak256("InsufficientFee()") → 0x025dbdd4…
//!
//! keccak256 is the pre-standard Keccak padding used by Ethereum. FIPS-202
//! SHA3-256 produces different digests for the same input and must not be
//! substituted here.

use errorsig_core::Selector;
use tiny_keccak::{Hasher, Keccak};

/// Name of the hash primitive reported by resolvers in this crate.
pub const HASH_PRIMITIVE: &str = "keccak256";

/// Compute the 32-byte keccak256 digest of `data`.
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    let mut output = [0u8; 32];
    hasher.update(data);
    hasher.finalize(&mut output);
    output
}

/// Derive the 4-byte selector of a canonical signature string.
pub fn selector_of(signature: &str) -> Selector {
    let hash = keccak256(signature.as_bytes());
    Selector::from_bytes([hash[0], hash[1], hash[2], hash[3]])
}
