//! Solana address encoder for sigil.
//!
//! Solana keys are Ed25519, so they are derived with SLIP-0010 from the
//! BIP-39 seed rather than with BIP-32 from the secp256k1 master key. Every
//! path segment must be hardened.
//!
//! # Usage
//!
//! ```
//! use sigil_core::secp256k1::Secp256k1;
//! use sigil_core::{AddressEncoder, KeyMaterial, Wallet};
//! use sigil_svm::SolanaEncoder;
//!
//! let secp = Secp256k1::new();
//! let wallet = Wallet::from_mnemonic(
//!     "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about",
//!     None,
//! )?;
//! let master = wallet.master_key(&secp)?;
//! let material = KeyMaterial::new(&secp, wallet.seed(), &master);
//! let addr = SolanaEncoder::new().encode(&material)?;
//! assert_eq!(addr.address, "HAgk14JpMQLgt6rVgv7cBQFJWFto5Dqxi472uT3DKpqk");
//! # Ok::<(), sigil_core::Error>(())
//! ```

mod encoder;
mod slip10;

pub use encoder::SolanaEncoder;
pub use slip10::DerivedKey;
