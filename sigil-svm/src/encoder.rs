//! Solana [`AddressEncoder`].

use sigil_core::{AddressEncoder, Chain, ChainAddress, DerivationPath, KeyMaterial, Result};
use tracing::debug;

use crate::slip10::DerivedKey;

/// Solana address deriver.
///
/// Runs SLIP-0010 over the raw BIP-39 seed (not the secp256k1 master key)
/// and encodes the Ed25519 public key in base58.
#[derive(Debug, Clone)]
pub struct SolanaEncoder {
    path: DerivationPath,
}

impl SolanaEncoder {
    /// Encoder at `m/44'/501'/0'/0'`.
    pub fn new() -> Self {
        Self::with_path(Chain::Solana.default_path())
    }

    /// Encoder at a custom, fully hardened path.
    pub const fn with_path(path: DerivationPath) -> Self {
        Self { path }
    }
}

impl Default for SolanaEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl AddressEncoder for SolanaEncoder {
    fn chain(&self) -> Chain {
        Chain::Solana
    }

    fn path(&self) -> &DerivationPath {
        &self.path
    }

    fn encode(&self, material: &KeyMaterial<'_>) -> Result<ChainAddress> {
        let derived = DerivedKey::derive_path(material.seed(), &self.path)?;
        let verifying_key = derived.to_signing_key().verifying_key();
        let address = bs58::encode(verifying_key.as_bytes()).into_string();

        debug!(chain = %Chain::Solana, path = %self.path, "derived address");

        Ok(ChainAddress {
            chain: Chain::Solana,
            path: self.path.clone(),
            address,
            private_key_hex: None,
        })
    }
}
