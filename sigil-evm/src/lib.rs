//! Ethereum address encoder for sigil.
//!
//! Derives the BIP-44 Ethereum account at `m/44'/60'/0'/0/0` from a shared
//! [`sigil_core::KeyMaterial`] and renders it with the EIP-55 mixed-case
//! checksum.

mod address;
mod encoder;

pub use address::public_key_to_address;
pub use encoder::EthereumEncoder;
