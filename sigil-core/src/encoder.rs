//! The per-chain address encoding capability.
//!
//! Every supported chain implements [`AddressEncoder`]. The assembler holds a
//! list of boxed encoders and feeds each the same [`KeyMaterial`], so adding a
//! chain means adding one implementation rather than touching a dispatcher.

use bitcoin::secp256k1::{All, Secp256k1};

use crate::{Chain, ChainAddress, DerivationPath, ExtendedKey, Result};

/// Key material shared by every encoder during one derivation run.
///
/// secp256k1 chains derive from `master` through the shared `secp` context;
/// Ed25519 chains run SLIP-10 over `seed` directly.
#[derive(Debug, Clone, Copy)]
pub struct KeyMaterial<'a> {
    secp: &'a Secp256k1<All>,
    seed: &'a [u8; 64],
    master: &'a ExtendedKey,
}

impl<'a> KeyMaterial<'a> {
    /// Bundle the curve context, a BIP-39 seed and the BIP-32 master key
    /// computed from it.
    pub const fn new(
        secp: &'a Secp256k1<All>,
        seed: &'a [u8; 64],
        master: &'a ExtendedKey,
    ) -> Self {
        Self { secp, seed, master }
    }

    /// The secp256k1 context every secp256k1 encoder shares.
    #[inline]
    pub const fn secp(&self) -> &'a Secp256k1<All> {
        self.secp
    }

    /// The 64-byte BIP-39 seed.
    #[inline]
    pub const fn seed(&self) -> &'a [u8; 64] {
        self.seed
    }

    /// The BIP-32 secp256k1 master key.
    #[inline]
    pub const fn master(&self) -> &'a ExtendedKey {
        self.master
    }

    /// Derive the secp256k1 node at `path` below the master key.
    pub fn derive(&self, path: &DerivationPath) -> Result<ExtendedKey> {
        self.master.derive(self.secp, path)
    }
}

/// Turns key material into one chain's address.
///
/// # Thread Safety
/// This trait requires `Send + Sync` so encoders can run on a thread pool.
pub trait AddressEncoder: Send + Sync {
    /// The chain this encoder produces.
    fn chain(&self) -> Chain;

    /// Derivation path this encoder walks.
    fn path(&self) -> &DerivationPath;

    /// Derive the key at [`path`](Self::path) and encode its address.
    fn encode(&self, material: &KeyMaterial<'_>) -> Result<ChainAddress>;
}
