//! Ethereum [`AddressEncoder`].

use sigil_core::{
    AddressEncoder, Chain, ChainAddress, DerivationPath, Error, ExtendedKey, KeyMaterial, Result,
};
use tracing::debug;
use zeroize::Zeroizing;

use crate::address::public_key_to_address;

/// Ethereum address deriver.
///
/// Produces the EIP-55 checksummed address and exposes the raw private key
/// as lowercase hex without a `0x` prefix.
///
/// # Example
///
/// ```
/// use sigil_core::secp256k1::Secp256k1;
/// use sigil_core::{AddressEncoder, KeyMaterial, Wallet};
/// use sigil_evm::EthereumEncoder;
///
/// let secp = Secp256k1::new();
/// let wallet = Wallet::generate(12, None)?;
/// let master = wallet.master_key(&secp)?;
/// let material = KeyMaterial::new(&secp, wallet.seed(), &master);
/// let out = EthereumEncoder::new().encode(&material)?;
/// assert_eq!(out.address.len(), 42);
/// assert_eq!(out.private_key_hex.unwrap().len(), 64);
/// # Ok::<(), sigil_core::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct EthereumEncoder {
    path: DerivationPath,
}

impl EthereumEncoder {
    /// Encoder at `m/44'/60'/0'/0/0`.
    pub fn new() -> Self {
        Self::with_path(Chain::Ethereum.default_path())
    }

    /// Encoder at a custom path.
    pub const fn with_path(path: DerivationPath) -> Self {
        Self { path }
    }

    fn encode_node(&self, node: &ExtendedKey) -> Result<ChainAddress> {
        let private_key = node
            .private_key_bytes()
            .ok_or(Error::MissingPrivateKey {
                depth: node.depth(),
            })?;
        let address = public_key_to_address(&node.uncompressed_public_key());

        debug!(chain = %Chain::Ethereum, path = %self.path, "derived address");

        Ok(ChainAddress {
            chain: Chain::Ethereum,
            path: self.path.clone(),
            address: address.to_checksum(None),
            private_key_hex: Some(Zeroizing::new(hex::encode(private_key.as_slice()))),
        })
    }
}

impl Default for EthereumEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl AddressEncoder for EthereumEncoder {
    fn chain(&self) -> Chain {
        Chain::Ethereum
    }

    fn path(&self) -> &DerivationPath {
        &self.path
    }

    fn encode(&self, material: &KeyMaterial<'_>) -> Result<ChainAddress> {
        self.encode_node(&material.derive(&self.path)?)
    }
}

#[cfg(test)]
mod tests {
    use sigil_core::Wallet;
    use sigil_core::secp256k1::Secp256k1;

    use super::*;

    const TEST_MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    fn encode(encoder: &EthereumEncoder) -> ChainAddress {
        let secp = Secp256k1::new();
        let wallet = Wallet::from_mnemonic(TEST_MNEMONIC, None).unwrap();
        let master = wallet.master_key(&secp).unwrap();
        encoder
            .encode(&KeyMaterial::new(&secp, wallet.seed(), &master))
            .unwrap()
    }

    #[test]
    fn test_known_address_and_key() {
        let out = encode(&EthereumEncoder::new());
        assert_eq!(out.chain, Chain::Ethereum);
        assert_eq!(out.path.to_string(), "m/44'/60'/0'/0/0");
        assert_eq!(out.address, "0x9858EfFD232B4033E47d90003D41EC34EcaEda94");
        assert_eq!(
            out.private_key_hex.as_deref().map(String::as_str),
            Some("1ab42cc412b618bdea3a599e3c9bae199ebf030895b039e9db1e30dafb12b727")
        );
    }

    #[test]
    fn test_second_index_differs() {
        let first = encode(&EthereumEncoder::new());
        let path: DerivationPath = "m/44'/60'/0'/0/1".parse().unwrap();
        let second = encode(&EthereumEncoder::with_path(path));
        assert_ne!(first.address, second.address);
        assert_eq!(second.address, "0x6Fac4D18c912343BF86fa7049364Dd4E424Ab9C0");
    }

    #[test]
    fn test_private_key_is_lowercase_hex() {
        let out = encode(&EthereumEncoder::new());
        let key = out.private_key_hex.unwrap();
        assert_eq!(key.len(), 64);
        assert!(!key.starts_with("0x"));
        assert!(key.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
    }

    #[test]
    fn test_public_only_node_has_no_key_to_export() {
        let secp = Secp256k1::new();
        let wallet = Wallet::from_mnemonic(TEST_MNEMONIC, None).unwrap();
        let encoder = EthereumEncoder::new();
        let node = wallet
            .master_key(&secp)
            .unwrap()
            .derive(&secp, encoder.path())
            .unwrap()
            .neuter();

        let err = encoder.encode_node(&node).unwrap_err();
        assert!(matches!(err, Error::MissingPrivateKey { depth: 5 }));
    }
}
