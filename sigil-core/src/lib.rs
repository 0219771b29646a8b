//! # sigil-core
//!
//! Deterministic key material for the sigil multi-chain address deriver.
//!
//! This crate owns everything that is shared between chains:
//!
//! - **Mnemonic provider**: generate, read from file, or validate BIP-39 phrases
//! - **Seed deriver**: the [`Wallet`] type holding the mnemonic and its 64-byte seed
//! - **Hierarchical key deriver**: BIP-32 [`ExtendedKey`] over secp256k1
//! - **Encoder capability**: the [`AddressEncoder`] trait chain crates implement
//!
//! # Example
//!
//! ```
//! use sigil_core::secp256k1::Secp256k1;
//! use sigil_core::{DerivationPath, ExtendedKey, Wallet};
//!
//! let secp = Secp256k1::new();
//! let wallet = Wallet::from_mnemonic(
//!     "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about",
//!     None,
//! )?;
//! let master = ExtendedKey::from_seed(&secp, wallet.seed())?;
//! let path: DerivationPath = "m/44'/60'/0'/0/0".parse()?;
//! let child = master.derive(&secp, &path)?;
//! assert_eq!(child.depth(), 5);
//! # Ok::<(), sigil_core::Error>(())
//! ```

mod chain;
mod encoder;
mod error;
pub mod hash;
pub mod mnemonic;
mod path;
mod wallet;
mod xkey;

pub use chain::{Chain, ChainAddress, ParseChainError};
pub use encoder::{AddressEncoder, KeyMaterial};
pub use error::{Error, Result};
pub use mnemonic::{MnemonicSource, ResolvedMnemonic};
pub use path::{ChildIndex, DerivationPath};
pub use wallet::Wallet;
pub use xkey::ExtendedKey;

/// Re-exported so downstream crates name the same BIP-39 error type.
pub use bip39;
/// Re-exported so every crate shares the context type `bitcoin` was built
/// against.
pub use bitcoin::secp256k1;
