//! SLIP-0010 Ed25519 key derivation.
//!
//! Implements SLIP-0010 for deriving Ed25519 keys from a seed.
//! Reference: <https://github.com/satoshilabs/slips/blob/master/slip-0010.md>

use ed25519_dalek::SigningKey;
use hmac::{Hmac, Mac};
use sha2::Sha512;
use sigil_core::{ChildIndex, DerivationPath, Error, Result};
use zeroize::Zeroizing;

type HmacSha512 = Hmac<Sha512>;

const ED25519_CURVE: &[u8] = b"ed25519 seed";

/// SLIP-0010 derived key pair.
pub struct DerivedKey {
    /// 32-byte private key.
    pub private_key: Zeroizing<[u8; 32]>,
    /// 32-byte chain code.
    pub chain_code: Zeroizing<[u8; 32]>,
}

impl DerivedKey {
    /// Derive master key from seed using SLIP-0010.
    pub fn from_seed(seed: &[u8]) -> Self {
        Self::split(hmac_sha512(ED25519_CURVE, &[seed]))
    }

    /// Derive child key at hardened index.
    ///
    /// SLIP-0010 only supports hardened derivation for Ed25519.
    pub fn derive_hardened(&self, index: u32) -> Self {
        let hardened_index = index | ChildIndex::HARDENED_OFFSET;

        // For hardened derivation: 0x00 || private_key || index
        Self::split(hmac_sha512(
            &*self.chain_code,
            &[&[0x00], &*self.private_key, &hardened_index.to_be_bytes()],
        ))
    }

    /// Walk `path` from the master key of `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDerivationPath`] if any segment is not
    /// hardened; Ed25519 has no public child derivation.
    pub fn derive_path(seed: &[u8], path: &DerivationPath) -> Result<Self> {
        if let Some(index) = path
            .indices()
            .iter()
            .find(|index| !index.is_hardened())
        {
            return Err(Error::InvalidDerivationPath(format!(
                "ed25519 derivation requires hardened segments, got {index} in {path}"
            )));
        }

        Ok(path
            .indices()
            .iter()
            .fold(Self::from_seed(seed), |key, index| {
                key.derive_hardened(index.index())
            }))
    }

    /// Convert to Ed25519 signing key.
    pub fn to_signing_key(&self) -> SigningKey {
        SigningKey::from_bytes(&self.private_key)
    }

    fn split(i: Zeroizing<[u8; 64]>) -> Self {
        let mut private_key = Zeroizing::new([0u8; 32]);
        let mut chain_code = Zeroizing::new([0u8; 32]);

        private_key.copy_from_slice(&i[..32]);
        chain_code.copy_from_slice(&i[32..]);

        Self {
            private_key,
            chain_code,
        }
    }
}

fn hmac_sha512(key: &[u8], parts: &[&[u8]]) -> Zeroizing<[u8; 64]> {
    let mut mac = HmacSha512::new_from_slice(key).expect("HMAC accepts keys of any length");
    for part in parts {
        mac.update(part);
    }
    let mut out = Zeroizing::new([0u8; 64]);
    out.copy_from_slice(&mac.finalize().into_bytes());
    out
}
