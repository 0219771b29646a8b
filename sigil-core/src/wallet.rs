//! Mnemonic plus the seed stretched from it.

use bitcoin::secp256k1::{Secp256k1, Signing};
use zeroize::Zeroizing;

use crate::{Error, ExtendedKey, mnemonic};

/// A validated BIP-39 mnemonic and its 64-byte seed.
///
/// The seed is `PBKDF2-HMAC-SHA512(mnemonic, "mnemonic" + passphrase, 2048)`.
/// Both the phrase and the seed are zeroized when the wallet is dropped.
///
/// # Passphrase Support
///
/// BIP-39 allows an optional passphrase (the "25th word"). The same mnemonic
/// with different passphrases produces unrelated seeds.
#[derive(Debug)]
pub struct Wallet {
    /// BIP39 mnemonic phrase.
    mnemonic: Zeroizing<String>,
    /// Seed derived from mnemonic + passphrase.
    seed: Zeroizing<[u8; 64]>,
    /// Whether a passphrase was used.
    has_passphrase: bool,
}

impl Wallet {
    /// Generate a new wallet with a random mnemonic.
    ///
    /// # Errors
    ///
    /// Returns an error if the word count is invalid.
    pub fn generate(word_count: usize, passphrase: Option<&str>) -> Result<Self, Error> {
        let phrase = mnemonic::generate(word_count)?;
        Self::from_mnemonic(&phrase, passphrase)
    }

    /// Create a wallet from raw entropy bytes (16, 20, 24, 28, or 32 bytes).
    ///
    /// # Errors
    ///
    /// Returns an error if the entropy length is invalid.
    pub fn from_entropy(entropy: &[u8], passphrase: Option<&str>) -> Result<Self, Error> {
        let phrase = mnemonic::from_entropy(entropy)?;
        Self::from_mnemonic(&phrase, passphrase)
    }

    /// Create a wallet from an existing mnemonic phrase.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMnemonic`] if the phrase does not validate.
    pub fn from_mnemonic(phrase: &str, passphrase: Option<&str>) -> Result<Self, Error> {
        let mnemonic = mnemonic::validate(phrase)?;
        let passphrase_str = passphrase.unwrap_or("");
        let seed = Zeroizing::new(mnemonic.to_seed(passphrase_str));

        Ok(Self {
            mnemonic: Zeroizing::new(mnemonic.to_string()),
            seed,
            has_passphrase: !passphrase_str.is_empty(),
        })
    }

    /// Get the mnemonic phrase.
    ///
    /// **Security Warning**: Handle this value carefully as it can
    /// reconstruct all derived keys.
    #[inline]
    #[must_use]
    pub fn mnemonic(&self) -> &str {
        &self.mnemonic
    }

    /// Get the seed bytes for key derivation.
    #[inline]
    #[must_use]
    pub fn seed(&self) -> &[u8; 64] {
        &self.seed
    }

    /// BIP-32 master key for this wallet's seed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMasterKey`] in the negligible case the seed
    /// maps outside the curve order.
    pub fn master_key<C: Signing>(&self, secp: &Secp256k1<C>) -> Result<ExtendedKey, Error> {
        ExtendedKey::from_seed(secp, self.seed.as_slice())
    }

    /// Check if a passphrase was used to derive the seed.
    #[must_use]
    pub const fn has_passphrase(&self) -> bool {
        self.has_passphrase
    }

    /// Get the word count of the mnemonic.
    #[inline]
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.mnemonic.split_whitespace().count()
    }
}
