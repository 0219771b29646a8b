//! Ethereum address derivation from secp256k1 public keys.
//!
//! EIP-55 rendering is `alloy_primitives::Address::to_checksum`.

use alloy_primitives::Address;

/// Ethereum address of a SEC1 uncompressed public key.
///
/// Hashes the 64-byte `x ∥ y` body (the `0x04` tag is dropped) and keeps the
/// last 20 bytes of the Keccak-256 digest.
pub fn public_key_to_address(uncompressed: &[u8; 65]) -> Address {
    Address::from_raw_public_key(&uncompressed[1..])
}
