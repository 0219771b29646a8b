//! BIP-39 mnemonic provider.
//!
//! A mnemonic comes from one of three places: freshly generated entropy, a
//! file on disk, or literal text supplied by the caller. Whatever the source,
//! the phrase is validated against the English wordlist and its checksum
//! before anything is derived from it.
//!
//! # Example
//!
//! ```
//! use sigil_core::mnemonic::{self, MnemonicSource};
//!
//! let resolved = mnemonic::resolve(Some(
//!     "  abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about\n",
//! ))?;
//! assert_eq!(resolved.source(), &MnemonicSource::Literal);
//! assert_eq!(resolved.phrase().split(' ').count(), 12);
//! # Ok::<(), sigil_core::Error>(())
//! ```

use core::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use bip39::Mnemonic;
use tracing::debug;
use zeroize::Zeroizing;

use crate::{Error, Result};

/// Word count of freshly generated mnemonics (128 bits of entropy).
pub const DEFAULT_WORD_COUNT: usize = 12;

/// Where a mnemonic came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MnemonicSource {
    /// Generated from fresh random entropy.
    Generated,
    /// Read from a file.
    File(PathBuf),
    /// Supplied directly as text.
    Literal,
}

impl fmt::Display for MnemonicSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generated => f.write_str("generated"),
            Self::File(path) => write!(f, "file {}", path.display()),
            Self::Literal => f.write_str("literal"),
        }
    }
}

/// A validated mnemonic phrase together with its origin.
#[derive(Debug)]
pub struct ResolvedMnemonic {
    phrase: Zeroizing<String>,
    source: MnemonicSource,
}

impl ResolvedMnemonic {
    /// The validated phrase, words separated by single spaces.
    #[must_use]
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    /// Where the phrase came from.
    #[must_use]
    pub const fn source(&self) -> &MnemonicSource {
        &self.source
    }
}

/// Obtain a validated mnemonic.
///
/// - `None` or an empty string: generate a new 12-word mnemonic.
/// - A path to an existing file: read it and trim surrounding whitespace.
/// - Anything else: trim it and use it as the phrase.
///
/// # Errors
///
/// Returns [`Error::InvalidMnemonic`] if the phrase fails validation and
/// [`Error::MnemonicFile`] if an existing file cannot be read.
pub fn resolve(input: Option<&str>) -> Result<ResolvedMnemonic> {
    let resolved = match input.filter(|s| !s.is_empty()) {
        None => ResolvedMnemonic {
            phrase: generate(DEFAULT_WORD_COUNT)?,
            source: MnemonicSource::Generated,
        },
        Some(input) if Path::new(input).is_file() => {
            let path = PathBuf::from(input);
            let contents = fs::read_to_string(&path)
                .map(Zeroizing::new)
                .map_err(|source| Error::MnemonicFile {
                    path: path.clone(),
                    source,
                })?;
            ResolvedMnemonic {
                phrase: normalize(contents.trim())?,
                source: MnemonicSource::File(path),
            }
        }
        Some(input) => ResolvedMnemonic {
            phrase: normalize(input.trim())?,
            source: MnemonicSource::Literal,
        },
    };

    debug!(
        source = %resolved.source,
        words = resolved.phrase.split(' ').count(),
        "resolved mnemonic"
    );
    Ok(resolved)
}

/// Generate a new mnemonic phrase with `word_count` words.
///
/// # Errors
///
/// Returns [`Error::InvalidWordCount`] unless `word_count` is 12, 15, 18,
/// 21, or 24.
pub fn generate(word_count: usize) -> Result<Zeroizing<String>> {
    if !matches!(word_count, 12 | 15 | 18 | 21 | 24) {
        return Err(Error::InvalidWordCount(word_count));
    }
    let mnemonic = Mnemonic::generate(word_count)?;
    Ok(Zeroizing::new(mnemonic.to_string()))
}

/// Encode raw entropy (16, 20, 24, 28, or 32 bytes) as a mnemonic phrase.
///
/// # Errors
///
/// Returns [`Error::InvalidMnemonic`] if the entropy length is invalid.
pub fn from_entropy(entropy: &[u8]) -> Result<Zeroizing<String>> {
    let mnemonic = Mnemonic::from_entropy(entropy)?;
    Ok(Zeroizing::new(mnemonic.to_string()))
}

/// Validate a phrase: words separated by exactly one space, every word in
/// the wordlist, a standard length, and a matching checksum.
///
/// # Errors
///
/// Returns [`Error::InvalidMnemonic`] describing the first problem found. A
/// word that is empty or carries other whitespace is reported as
/// [`bip39::Error::UnknownWord`].
pub fn validate(phrase: &str) -> Result<Mnemonic> {
    if let Some(position) = phrase
        .split(' ')
        .position(|word| word.is_empty() || word.contains(char::is_whitespace))
    {
        return Err(bip39::Error::UnknownWord(position).into());
    }
    Ok(Mnemonic::parse_in(bip39::Language::English, phrase)?)
}

/// Validate `phrase` and keep it as given.
fn normalize(phrase: &str) -> Result<Zeroizing<String>> {
    validate(phrase)?;
    Ok(Zeroizing::new(phrase.to_owned()))
}
