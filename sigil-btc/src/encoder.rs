//! [`AddressEncoder`] implementations for Bitcoin and its P2PKH forks.

use sigil_core::{AddressEncoder, Chain, ChainAddress, DerivationPath, KeyMaterial, Result};
use tracing::debug;

use crate::address::{compressed_public_key, create_address, p2pkh_address};
use crate::{AddressType, ChainParams, DOGECOIN};

/// Bitcoin mainnet encoder for one address type.
///
/// Uses the curve context carried by [`KeyMaterial`] for both derivation and
/// the Taproot tweak, so every encoder in a run shares one context.
#[derive(Debug, Clone)]
pub struct BitcoinEncoder {
    address_type: AddressType,
    path: DerivationPath,
}

impl BitcoinEncoder {
    /// Encoder for `address_type` at its default BIP-44/49/84/86 path.
    pub fn new(address_type: AddressType) -> Self {
        Self::with_path(address_type, address_type.chain().default_path())
    }

    /// Encoder for `address_type` at a custom path.
    pub const fn with_path(address_type: AddressType, path: DerivationPath) -> Self {
        Self { address_type, path }
    }

    /// The address type this encoder produces.
    pub const fn address_type(&self) -> AddressType {
        self.address_type
    }
}

impl AddressEncoder for BitcoinEncoder {
    fn chain(&self) -> Chain {
        self.address_type.chain()
    }

    fn path(&self) -> &DerivationPath {
        &self.path
    }

    fn encode(&self, material: &KeyMaterial<'_>) -> Result<ChainAddress> {
        let node = material.derive(&self.path)?;
        let public_key = compressed_public_key(&node.public_key_bytes())?;
        let address = create_address(material.secp(), &public_key, self.address_type);

        debug!(chain = %self.chain(), path = %self.path, "derived address");

        Ok(ChainAddress {
            chain: self.chain(),
            path: self.path.clone(),
            address: address.to_string(),
            private_key_hex: None,
        })
    }
}

/// Base58Check P2PKH encoder for Bitcoin forks that only differ in version
/// bytes.
#[derive(Debug, Clone)]
pub struct LegacyEncoder {
    chain: Chain,
    params: ChainParams,
    path: DerivationPath,
}

impl LegacyEncoder {
    /// Create an encoder filling `chain` with `params` addresses at `path`.
    pub const fn new(chain: Chain, params: ChainParams, path: DerivationPath) -> Self {
        Self {
            chain,
            params,
            path,
        }
    }

    /// Dogecoin at `m/44'/3'/0'/0/0`.
    pub fn dogecoin() -> Self {
        Self::new(Chain::Dogecoin, DOGECOIN, Chain::Dogecoin.default_path())
    }

    /// Dogecoin at a custom path.
    pub const fn dogecoin_at(path: DerivationPath) -> Self {
        Self::new(Chain::Dogecoin, DOGECOIN, path)
    }

    /// Network constants used for encoding.
    pub const fn params(&self) -> &ChainParams {
        &self.params
    }
}

impl AddressEncoder for LegacyEncoder {
    fn chain(&self) -> Chain {
        self.chain
    }

    fn path(&self) -> &DerivationPath {
        &self.path
    }

    fn encode(&self, material: &KeyMaterial<'_>) -> Result<ChainAddress> {
        let node = material.derive(&self.path)?;
        let address = p2pkh_address(&self.params, &node.public_key_bytes());

        debug!(
            chain = %self.chain,
            network = self.params.name,
            path = %self.path,
            "derived address"
        );

        Ok(ChainAddress {
            chain: self.chain,
            path: self.path.clone(),
            address,
            private_key_hex: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use sigil_core::Wallet;
    use sigil_core::hash::{base58check_decode, hash160};
    use sigil_core::secp256k1::Secp256k1;

    use super::*;
    use crate::BITCOIN;

    const TEST_MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    fn encode(encoder: &dyn AddressEncoder) -> ChainAddress {
        let secp = Secp256k1::new();
        let wallet = Wallet::from_mnemonic(TEST_MNEMONIC, None).unwrap();
        let master = wallet.master_key(&secp).unwrap();
        encoder
            .encode(&KeyMaterial::new(&secp, wallet.seed(), &master))
            .unwrap()
    }

    #[test]
    fn test_known_bitcoin_addresses() {
        let expected = [
            (AddressType::P2pkh, "1LqBGSKuX5yYUonjxT5qGfpUsXKYYWeabA"),
            (AddressType::P2shP2wpkh, "37VucYSaXLCAsxYyAPfbSi9eh4iEcbShgf"),
            (AddressType::P2wpkh, "bc1qcr8te4kr609gcawutmrza0j4xv80jy8z306fyu"),
            (
                AddressType::P2tr,
                "bc1p5cyxnuxmeuwuvkwfem96lqzszd02n6xdcjrs20cac6yqjjwudpxqkedrcr",
            ),
        ];

        for (address_type, address) in expected {
            let out = encode(&BitcoinEncoder::new(address_type));
            assert_eq!(out.address, address, "{address_type}");
            assert_eq!(out.chain, address_type.chain());
            assert_eq!(
                out.path.to_string(),
                address_type.chain().default_path_str()
            );
            assert!(out.private_key_hex.is_none());
        }
    }

    #[test]
    fn test_dogecoin_address() {
        let out = encode(&LegacyEncoder::dogecoin());
        assert_eq!(out.chain, Chain::Dogecoin);
        assert_eq!(out.path.to_string(), "m/44'/3'/0'/0/0");
        assert_eq!(out.address, "DBus3bamQjgJULBJtYXpEzDWQRwF5iwxgC");

        let secp = Secp256k1::new();
        let wallet = Wallet::from_mnemonic(TEST_MNEMONIC, None).unwrap();
        let node = wallet
            .master_key(&secp)
            .unwrap()
            .derive(&secp, &out.path)
            .unwrap();
        let payload = base58check_decode(&out.address).unwrap();
        assert_eq!(payload[0], DOGECOIN.pubkey_hash);
        assert_eq!(payload[1..], hash160(&node.public_key_bytes()));
    }

    #[test]
    fn test_legacy_encoder_matches_bitcoin_p2pkh() {
        let path = Chain::BitcoinLegacy.default_path();
        let generic = LegacyEncoder::new(Chain::BitcoinLegacy, BITCOIN, path);
        let native = BitcoinEncoder::new(AddressType::P2pkh);
        assert_eq!(encode(&generic).address, encode(&native).address);
    }

    #[test]
    fn test_custom_path_changes_address() {
        let path: DerivationPath = "m/84'/0'/0'/0/1".parse().unwrap();
        let custom = encode(&BitcoinEncoder::with_path(AddressType::P2wpkh, path));
        let default = encode(&BitcoinEncoder::new(AddressType::P2wpkh));

        assert_eq!(custom.path.to_string(), "m/84'/0'/0'/0/1");
        assert!(custom.address.starts_with("bc1q"));
        assert_ne!(custom.address, default.address);
    }

    #[test]
    fn test_dogecoin_coin_type_in_path() {
        let encoder = LegacyEncoder::dogecoin();
        assert_eq!(
            encoder.path().indices()[1].index(),
            encoder.params().coin_type
        );
    }
}
