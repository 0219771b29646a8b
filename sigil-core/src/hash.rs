//! Hash and checksum helpers shared by the Bitcoin-family encoders.

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// Compute SHA-256 hash
#[inline]
pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

/// Compute double SHA-256 hash (used in Bitcoin)
#[inline]
pub fn double_sha256(data: &[u8]) -> [u8; 32] {
    sha256(&sha256(data))
}

/// Compute Hash160 (SHA-256 followed by RIPEMD-160)
#[inline]
pub fn hash160(data: &[u8]) -> [u8; 20] {
    Ripemd160::digest(sha256(data)).into()
}

/// Base58Check: append the first four bytes of double SHA-256, then base58.
pub fn base58check(payload: &[u8]) -> String {
    let checksum = double_sha256(payload);
    let mut data = Vec::with_capacity(payload.len() + 4);
    data.extend_from_slice(payload);
    data.extend_from_slice(&checksum[..4]);
    bs58::encode(data).into_string()
}

/// Decode Base58Check, verifying and stripping the checksum.
///
/// Returns `None` if the string is not base58 or the checksum does not match.
pub fn base58check_decode(encoded: &str) -> Option<Vec<u8>> {
    let mut data = bs58::decode(encoded).into_vec().ok()?;
    if data.len() < 4 {
        return None;
    }
    let payload_len = data.len() - 4;
    let checksum = double_sha256(&data[..payload_len]);
    if checksum[..4] != data[payload_len..] {
        return None;
    }
    data.truncate(payload_len);
    Some(data)
}
