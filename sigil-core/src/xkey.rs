//! BIP-32 hierarchical deterministic keys over secp256k1.
//!
//! An [`ExtendedKey`] wraps the `bitcoin` crate's [`Xpriv`] and [`Xpub`]. It
//! may hold a private key or be public-only. Normal (non-hardened) children
//! can be derived from either; hardened children need the private key.
//!
//! Every operation that touches the curve takes the caller's
//! [`Secp256k1`] context, so one context serves a whole derivation run.

use bitcoin::NetworkKind;
use bitcoin::bip32::{self, ChildNumber, Xpriv, Xpub};
use bitcoin::secp256k1::{Secp256k1, Signing, Verification};
use zeroize::Zeroizing;

use crate::{ChildIndex, DerivationPath, Error, Result};

/// A node in a BIP-32 key tree.
#[derive(Clone)]
pub struct ExtendedKey {
    /// Private half, absent for public-only nodes.
    xpriv: Option<Xpriv>,
    /// Public half, always present.
    xpub: Xpub,
}

impl ExtendedKey {
    /// Create the master key from a seed.
    ///
    /// `I = HMAC-SHA512(key = "Bitcoin seed", data = seed)`; the left half is
    /// the private key and the right half the chain code.
    pub fn from_seed<C: Signing>(secp: &Secp256k1<C>, seed: &[u8]) -> Result<Self> {
        if !(16..=64).contains(&seed.len()) {
            return Err(Error::InvalidSeedLength(seed.len()));
        }

        let xpriv = Xpriv::new_master(NetworkKind::Main, seed)
            .map_err(|_| Error::InvalidMasterKey)?;
        Ok(Self::from_xpriv(secp, xpriv))
    }

    fn from_xpriv<C: Signing>(secp: &Secp256k1<C>, xpriv: Xpriv) -> Self {
        Self {
            xpub: Xpub::from_priv(secp, &xpriv),
            xpriv: Some(xpriv),
        }
    }

    /// Derive the child at `index`.
    pub fn derive_child<C: Signing + Verification>(
        &self,
        secp: &Secp256k1<C>,
        index: ChildIndex,
    ) -> Result<Self> {
        let raw_index = index.to_u32();
        let child = ChildNumber::from(raw_index);
        let map_err = |err: bip32::Error| match err {
            bip32::Error::CannotDeriveFromHardenedKey => {
                Error::HardenedDerivationRequiresPrivateKey { index: raw_index }
            }
            bip32::Error::MaximumDepthExceeded => Error::MaxDepthExceeded,
            _ => Error::InvalidChildKey { index: raw_index },
        };

        match &self.xpriv {
            Some(xpriv) => {
                let derived = xpriv.derive_priv(secp, &[child]).map_err(map_err)?;
                Ok(Self::from_xpriv(secp, derived))
            }
            None => Ok(Self {
                xpriv: None,
                xpub: self.xpub.ckd_pub(secp, child).map_err(map_err)?,
            }),
        }
    }

    /// Walk `path` from this node.
    pub fn derive<C: Signing + Verification>(
        &self,
        secp: &Secp256k1<C>,
        path: &DerivationPath,
    ) -> Result<Self> {
        path.indices()
            .iter()
            .try_fold(self.clone(), |node, index| {
                node.derive_child(secp, *index)
            })
    }

    /// A public-only copy of this node.
    #[must_use]
    pub const fn neuter(&self) -> Self {
        Self {
            xpriv: None,
            xpub: self.xpub,
        }
    }

    /// Whether this node carries a private key.
    pub const fn has_private_key(&self) -> bool {
        self.xpriv.is_some()
    }

    /// Raw 32-byte private key, if present.
    pub fn private_key_bytes(&self) -> Option<Zeroizing<[u8; 32]>> {
        self.xpriv
            .as_ref()
            .map(|xpriv| Zeroizing::new(xpriv.private_key.secret_bytes()))
    }

    /// SEC1 compressed public key (33 bytes).
    pub fn public_key_bytes(&self) -> [u8; 33] {
        self.xpub.public_key.serialize()
    }

    /// SEC1 uncompressed public key (65 bytes, `0x04` prefix).
    pub fn uncompressed_public_key(&self) -> [u8; 65] {
        self.xpub.public_key.serialize_uncompressed()
    }

    /// Get the chain code.
    pub fn chain_code(&self) -> &[u8; 32] {
        self.xpub.chain_code.as_bytes()
    }

    /// Get the depth.
    pub const fn depth(&self) -> u8 {
        self.xpub.depth
    }

    /// Get the parent fingerprint.
    pub fn parent_fingerprint(&self) -> [u8; 4] {
        self.xpub.parent_fingerprint.to_bytes()
    }

    /// Get the child index.
    pub fn child_index(&self) -> ChildIndex {
        ChildIndex::from(u32::from(self.xpub.child_number))
    }

    /// First 4 bytes of hash160 of this node's public key.
    pub fn fingerprint(&self) -> [u8; 4] {
        self.xpub.fingerprint().to_bytes()
    }

    /// Serialize as a mainnet `xprv`, if this node has a private key.
    pub fn to_xprv(&self) -> Option<Zeroizing<String>> {
        self.xpriv
            .as_ref()
            .map(|xpriv| Zeroizing::new(xpriv.to_string()))
    }

    /// Serialize as a mainnet `xpub`.
    pub fn to_xpub(&self) -> String {
        self.xpub.to_string()
    }
}

impl Drop for ExtendedKey {
    fn drop(&mut self) {
        if let Some(xpriv) = self.xpriv.as_mut() {
            xpriv.private_key.non_secure_erase();
        }
    }
}

impl core::fmt::Debug for ExtendedKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ExtendedKey")
            .field("depth", &self.depth())
            .field("child_index", &self.child_index())
            .field("public_key", &hex::encode(self.public_key_bytes()))
            .field(
                "private_key",
                &if self.has_private_key() { "[REDACTED]" } else { "None" },
            )
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use bitcoin::secp256k1::All;

    use super::*;

    // BIP-32 test vector 1
    const TEST_SEED_1: &[u8] = &hex_literal::hex!("000102030405060708090a0b0c0d0e0f");

    fn master(secp: &Secp256k1<All>) -> ExtendedKey {
        ExtendedKey::from_seed(secp, TEST_SEED_1).unwrap()
    }

    #[test]
    fn test_bip32_vector1_chain_m() {
        let secp = Secp256k1::new();
        let xkey = master(&secp);
        assert_eq!(xkey.depth(), 0);
        assert_eq!(
            xkey.to_xprv().unwrap().as_str(),
            "xprv9s21ZrQH143K3QTDL4LXw2F7HEK3wJUD2nW2nRk4stbPy6cq3jPPqjiChkVvvNKmPGJxWUtg6LnF5kejMRNNU3TGtRBeJgk33yuGBxrMPHi"
        );
        assert_eq!(
            xkey.to_xpub(),
            "xpub661MyMwAqRbcFtXgS5sYJABqqG9YLmC4Q1Rdap9gSE8NqtwybGhePY2gZ29ESFjqJoCu1Rupje8YtGqsefD265TMg7usUDFdp6W1EGMcet8"
        );
    }

    #[test]
    fn test_bip32_vector1_chain_m_0h() {
        let secp = Secp256k1::new();
        let child = master(&secp)
            .derive_child(&secp, ChildIndex::Hardened(0))
            .unwrap();
        assert_eq!(child.depth(), 1);
        assert_eq!(
            child.to_xprv().unwrap().as_str(),
            "xprv9uHRZZhk6KAJC1avXpDAp4MDc3sQKNxDiPvvkX8Br5ngLNv1TxvUxt4cV1rGL5hj6KCesnDYUhd7oWgT11eZG7XnxHrnYeSvkzY7d2bhkJ7"
        );
        assert_eq!(
            child.to_xpub(),
            "xpub68Gmy5EdvgibQVfPdqkBBCHxA5htiqg55crXYuXoQRKfDBFA1WEjWgP6LHhwBZeNK1VTsfTFUHCdrfp1bgwQ9xv5ski8PX9rL2dZXvgGDnw"
        );
    }

    #[test]
    fn test_public_only_normal_derivation_matches_private() {
        let secp = Secp256k1::new();
        let account = master(&secp)
            .derive_child(&secp, ChildIndex::Hardened(0))
            .unwrap();
        let from_private = account.derive_child(&secp, ChildIndex::Normal(1)).unwrap();
        let from_public = account
            .neuter()
            .derive_child(&secp, ChildIndex::Normal(1))
            .unwrap();

        assert!(!from_public.has_private_key());
        assert_eq!(
            from_public.public_key_bytes(),
            from_private.public_key_bytes()
        );
        assert_eq!(from_public.chain_code(), from_private.chain_code());
        assert_eq!(
            from_public.to_xpub(),
            "xpub6ASuArnXKPbfEwhqN6e3mwBcDTgzisQN1wXN9BJcM47sSikHjJf3UFHKkNAWbWMiGj7Wf5uMash7SyYq527Hqck2AxYysAA7xmALppuCkwQ"
        );
    }

    #[test]
    fn test_hardened_from_public_only_fails() {
        let secp = Secp256k1::new();
        let public = master(&secp).neuter();
        let err = public
            .derive_child(&secp, ChildIndex::Hardened(0))
            .unwrap_err();
        assert!(matches!(
            err,
            Error::HardenedDerivationRequiresPrivateKey { index: 0x8000_0000 }
        ));
        assert!(public.to_xprv().is_none());
        assert!(public.private_key_bytes().is_none());
    }

    #[test]
    fn test_derive_path_depth_and_fingerprint() {
        let secp = Secp256k1::new();
        let master = master(&secp);
        let path: DerivationPath = "m/0'/1".parse().unwrap();
        let derived = master.derive(&secp, &path).unwrap();
        assert_eq!(derived.depth(), 2);
        assert_eq!(derived.child_index(), ChildIndex::Normal(1));

        let parent = master.derive_child(&secp, ChildIndex::Hardened(0)).unwrap();
        assert_eq!(derived.parent_fingerprint(), parent.fingerprint());
        assert_eq!(hex::encode(master.fingerprint()), "3442193e");
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let secp = Secp256k1::new();
        let path: DerivationPath = "m/44'/60'/0'/0/0".parse().unwrap();
        let a = master(&secp).derive(&secp, &path).unwrap();
        let b = master(&secp).derive(&secp, &path).unwrap();
        assert_eq!(a.private_key_bytes(), b.private_key_bytes());
        assert_eq!(a.public_key_bytes(), b.public_key_bytes());
    }

    #[test]
    fn test_invalid_seed_length() {
        let secp = Secp256k1::new();
        assert!(matches!(
            ExtendedKey::from_seed(&secp, &[0u8; 15]),
            Err(Error::InvalidSeedLength(15))
        ));
        assert!(matches!(
            ExtendedKey::from_seed(&secp, &[0u8; 65]),
            Err(Error::InvalidSeedLength(65))
        ));
    }

    #[test]
    fn test_debug_redacts_private_key() {
        let secp = Secp256k1::new();
        let debug = format!("{:?}", master(&secp));
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("e8f32e723decf4051aefac8e2c93c9c5b214313817cdb01a1494b917c8436b35"));
    }

    #[test]
    fn test_uncompressed_public_key_prefix() {
        let secp = Secp256k1::new();
        let key = master(&secp);
        let uncompressed = key.uncompressed_public_key();
        assert_eq!(uncompressed[0], 0x04);
        assert_eq!(uncompressed[1..33], key.public_key_bytes()[1..]);
    }
}
