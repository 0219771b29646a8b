//! Error types for key derivation and address encoding.

use std::io;
use std::path::PathBuf;

use crate::Chain;

/// Errors that can occur while turning a mnemonic into addresses.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The mnemonic has an unknown word, a bad length, or a bad checksum.
    #[error("invalid mnemonic: {0}")]
    InvalidMnemonic(#[from] bip39::Error),

    /// Invalid word count requested for a new mnemonic.
    #[error("invalid word count {0}, must be 12, 15, 18, 21, or 24")]
    InvalidWordCount(usize),

    /// A mnemonic file exists but could not be read.
    #[error("failed to read mnemonic file {}: {source}", path.display())]
    MnemonicFile {
        /// The file that was being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The derivation path is malformed or unusable for the curve.
    #[error("invalid derivation path: {0}")]
    InvalidDerivationPath(String),

    /// BIP-32 seeds must be between 16 and 64 bytes.
    #[error("invalid seed length {0}, must be between 16 and 64 bytes")]
    InvalidSeedLength(usize),

    /// The seed produced a master key of zero or beyond the curve order.
    #[error("seed produces an invalid master key")]
    InvalidMasterKey,

    /// A hardened step was requested on a public-only node.
    #[error("hardened derivation at index {index} requires a private key")]
    HardenedDerivationRequiresPrivateKey {
        /// The raw child index (with the hardened bit set).
        index: u32,
    },

    /// An encoder needs the private key but the node is public-only.
    #[error("node at depth {depth} has no private key")]
    MissingPrivateKey {
        /// Depth of the public-only node.
        depth: u8,
    },

    /// The child key at this index is invalid; derive the next index instead.
    #[error("derived child key at index {index} is invalid")]
    InvalidChildKey {
        /// The raw child index that produced the invalid key.
        index: u32,
    },

    /// BIP-32 depth is a single byte.
    #[error("maximum derivation depth exceeded")]
    MaxDepthExceeded,

    /// Public key bytes were rejected by the encoder's curve library.
    #[error("invalid public key")]
    InvalidPublicKey,

    /// Deriving or encoding one chain failed, aborting the whole batch.
    #[error("{chain} derivation failed: {source}")]
    DerivationFailed {
        /// The chain whose derivation failed.
        chain: Chain,
        /// What went wrong.
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Wrap this error as a failure of the given chain.
    #[must_use]
    pub fn for_chain(self, chain: Chain) -> Self {
        match self {
            Self::DerivationFailed { .. } => self,
            other => Self::DerivationFailed {
                chain,
                source: Box::new(other),
            },
        }
    }
}

/// A convenient Result type alias for sigil operations.
pub type Result<T> = core::result::Result<T, Error>;
