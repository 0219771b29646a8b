//! Bitcoin-family address encoders for sigil.
//!
//! Derives Bitcoin Legacy, P2SH-P2WPKH, Bech32 and Taproot addresses, plus
//! Dogecoin P2PKH, from a [`sigil_core::KeyMaterial`].
//!
//! # Usage
//!
//! ```
//! use sigil_btc::{AddressType, BitcoinEncoder};
//! use sigil_core::secp256k1::Secp256k1;
//! use sigil_core::{AddressEncoder, KeyMaterial, Wallet};
//!
//! let secp = Secp256k1::new();
//! let wallet = Wallet::generate(12, None)?;
//! let master = wallet.master_key(&secp)?;
//! let material = KeyMaterial::new(&secp, wallet.seed(), &master);
//!
//! let addr = BitcoinEncoder::new(AddressType::P2tr).encode(&material)?;
//! assert!(addr.address.starts_with("bc1p"));
//! # Ok::<(), sigil_core::Error>(())
//! ```

mod address;
mod encoder;
mod params;
mod types;

pub use address::{compressed_public_key, create_address, p2pkh_address};
pub use encoder::{BitcoinEncoder, LegacyEncoder};
pub use params::{BITCOIN, ChainParams, DOGECOIN};
pub use types::{AddressType, ParseAddressTypeError};
