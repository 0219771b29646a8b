//! Bitcoin address creation utilities.

use bitcoin::secp256k1::{Secp256k1, Verification};
use bitcoin::{Address, Network, PublicKey, key::CompressedPublicKey};
use sigil_core::hash::{base58check, hash160};
use sigil_core::{Error, Result};

use crate::{AddressType, ChainParams};

/// Parse a SEC1 compressed public key into the `bitcoin` crate's type.
///
/// # Errors
///
/// Returns [`Error::InvalidPublicKey`] if the bytes are not a curve point.
pub fn compressed_public_key(bytes: &[u8; 33]) -> Result<CompressedPublicKey> {
    CompressedPublicKey::from_slice(bytes).map_err(|_| Error::InvalidPublicKey)
}

/// Create a Bitcoin mainnet address from a compressed public key.
///
/// Taproot tweaks the x-only key with an empty script tree (BIP-86), which
/// needs a verification context; the caller owns it so it is built once.
#[must_use]
pub fn create_address<C: Verification>(
    secp: &Secp256k1<C>,
    public_key: &CompressedPublicKey,
    address_type: AddressType,
) -> Address {
    let network = Network::Bitcoin;

    match address_type {
        AddressType::P2pkh => Address::p2pkh(PublicKey::from(*public_key), network),
        AddressType::P2shP2wpkh => Address::p2shwpkh(public_key, network),
        AddressType::P2wpkh => Address::p2wpkh(public_key, network),
        AddressType::P2tr => {
            let internal_key = public_key.0.x_only_public_key().0;
            Address::p2tr(secp, internal_key, None, network)
        }
    }
}

/// Base58Check P2PKH address: `version || hash160(pubkey)`.
#[must_use]
pub fn p2pkh_address(params: &ChainParams, public_key: &[u8; 33]) -> String {
    let mut payload = [0u8; 21];
    payload[0] = params.pubkey_hash;
    payload[1..].copy_from_slice(&hash160(public_key));
    base58check(&payload)
}

#[cfg(test)]
mod tests {
    use sigil_core::hash::base58check_decode;

    use super::*;
    use crate::{BITCOIN, DOGECOIN};

    // Compressed generator point G (private key 1).
    const G: [u8; 33] =
        hex_literal::hex!("0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798");

    #[test]
    fn test_p2pkh_matches_bitcoin_crate() {
        let secp = Secp256k1::verification_only();
        let public_key = compressed_public_key(&G).unwrap();
        let expected = create_address(&secp, &public_key, AddressType::P2pkh);

        assert_eq!(p2pkh_address(&BITCOIN, &G), expected.to_string());
        assert_eq!(expected.to_string(), "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH");
    }

    #[test]
    fn test_dogecoin_version_byte() {
        let address = p2pkh_address(&DOGECOIN, &G);
        assert!(address.starts_with('D'));

        let payload = base58check_decode(&address).unwrap();
        assert_eq!(payload[0], 0x1e);
        assert_eq!(payload[1..], hash160(&G));
    }

    #[test]
    fn test_script_pubkeys_commit_to_key() {
        let secp = Secp256k1::verification_only();
        let public_key = compressed_public_key(&G).unwrap();
        let key_hash = hash160(&G);

        let p2pkh = create_address(&secp, &public_key, AddressType::P2pkh)
            .script_pubkey();
        assert_eq!(p2pkh.as_bytes()[3..23], key_hash);

        let p2wpkh = create_address(&secp, &public_key, AddressType::P2wpkh)
            .script_pubkey();
        assert_eq!(p2wpkh.as_bytes()[..2], [0x00u8, 0x14]);
        assert_eq!(p2wpkh.as_bytes()[2..22], key_hash);

        let mut redeem_script = vec![0x00, 0x14];
        redeem_script.extend_from_slice(&key_hash);
        let p2sh = create_address(&secp, &public_key, AddressType::P2shP2wpkh)
            .script_pubkey();
        assert_eq!(p2sh.as_bytes()[2..22], hash160(&redeem_script));

        let p2tr = create_address(&secp, &public_key, AddressType::P2tr)
            .script_pubkey();
        assert_eq!(p2tr.as_bytes()[..2], [0x51u8, 0x20]);
        assert_eq!(p2tr.len(), 34);
    }

    #[test]
    fn test_address_prefixes() {
        let secp = Secp256k1::verification_only();
        let public_key = compressed_public_key(&G).unwrap();
        let prefixes = [
            (AddressType::P2pkh, "1"),
            (AddressType::P2shP2wpkh, "3"),
            (AddressType::P2wpkh, "bc1q"),
            (AddressType::P2tr, "bc1p"),
        ];
        for (address_type, prefix) in prefixes {
            let address = create_address(&secp, &public_key, address_type)
                .to_string();
            assert!(address.starts_with(prefix), "{address_type}: {address}");
        }
    }

    #[test]
    fn test_rejects_off_curve_key() {
        let mut bytes = G;
        bytes[0] = 0x05;
        assert!(matches!(
            compressed_public_key(&bytes),
            Err(Error::InvalidPublicKey)
        ));
    }
}
