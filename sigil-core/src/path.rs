//! BIP-32 derivation paths.
//!
//! Parses and formats paths like `m/44'/60'/0'/0/0`.

use core::fmt;
use core::str::FromStr;

use crate::{Error, Result};

/// A child index in a derivation path.
///
/// Hardened indices are stored without the 2^31 offset and displayed as `n'`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChildIndex {
    /// Normal (non-hardened) index: 0 to 2^31 - 1
    Normal(u32),
    /// Hardened index: 0 to 2^31 - 1, derived at n + 2^31
    Hardened(u32),
}

impl ChildIndex {
    /// The offset for hardened indices (2^31).
    pub const HARDENED_OFFSET: u32 = 0x8000_0000;

    /// Create a normal (non-hardened) child index.
    pub fn normal(index: u32) -> Result<Self> {
        if index >= Self::HARDENED_OFFSET {
            return Err(Error::InvalidDerivationPath(format!(
                "index {index} is out of range"
            )));
        }
        Ok(Self::Normal(index))
    }

    /// Create a hardened child index.
    pub fn hardened(index: u32) -> Result<Self> {
        if index >= Self::HARDENED_OFFSET {
            return Err(Error::InvalidDerivationPath(format!(
                "index {index}' is out of range"
            )));
        }
        Ok(Self::Hardened(index))
    }

    /// Check if this is a hardened index.
    #[inline]
    pub const fn is_hardened(&self) -> bool {
        matches!(self, Self::Hardened(_))
    }

    /// Get the index value without the hardened flag.
    #[inline]
    pub const fn index(&self) -> u32 {
        match self {
            Self::Normal(i) | Self::Hardened(i) => *i,
        }
    }

    /// Convert to the raw u32 value used in BIP-32 derivation.
    #[inline]
    pub const fn to_u32(&self) -> u32 {
        match self {
            Self::Normal(i) => *i,
            Self::Hardened(i) => *i | Self::HARDENED_OFFSET,
        }
    }
}

impl From<u32> for ChildIndex {
    fn from(value: u32) -> Self {
        if value >= Self::HARDENED_OFFSET {
            Self::Hardened(value & !Self::HARDENED_OFFSET)
        } else {
            Self::Normal(value)
        }
    }
}

impl fmt::Display for ChildIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal(i) => write!(f, "{i}"),
            Self::Hardened(i) => write!(f, "{i}'"),
        }
    }
}

impl FromStr for ChildIndex {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let parse = |digits: &str| {
            digits
                .parse::<u32>()
                .map_err(|_| Error::InvalidDerivationPath(format!("invalid index \"{s}\"")))
        };

        match s.strip_suffix(['\'', 'h', 'H']) {
            Some(digits) => Self::hardened(parse(digits)?),
            None => Self::normal(parse(s)?),
        }
    }
}

/// A BIP-32 derivation path: a sequence of child indices below the master key.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct DerivationPath {
    indices: Vec<ChildIndex>,
}

impl DerivationPath {
    /// The empty path (the master key itself).
    pub const fn master() -> Self {
        Self {
            indices: Vec::new(),
        }
    }

    /// Create a derivation path from child indices.
    pub const fn new(indices: Vec<ChildIndex>) -> Self {
        Self { indices }
    }

    /// Parse a derivation path.
    ///
    /// Accepts `m/44'/60'/0'/0/0`, `m/44h/60h/0h/0/0` and the same without
    /// the leading `m/`.
    pub fn parse(path: &str) -> Result<Self> {
        let path = path.trim();

        if path.is_empty() || path == "m" || path == "M" {
            return Ok(Self::master());
        }

        let body = path
            .strip_prefix("m/")
            .or_else(|| path.strip_prefix("M/"))
            .unwrap_or(path);

        let indices = body
            .split('/')
            .map(|component| {
                if component.is_empty() {
                    Err(Error::InvalidDerivationPath(format!(
                        "empty component in \"{path}\""
                    )))
                } else {
                    component.parse()
                }
            })
            .collect::<Result<Vec<ChildIndex>>>()?;

        Ok(Self { indices })
    }

    /// Get the child indices in this path.
    pub fn indices(&self) -> &[ChildIndex] {
        &self.indices
    }

    /// Number of levels below the master key.
    pub fn depth(&self) -> usize {
        self.indices.len()
    }

    /// Check if this path is empty (master key).
    pub fn is_master(&self) -> bool {
        self.indices.is_empty()
    }

    /// Check if every index in the path is hardened.
    pub fn is_fully_hardened(&self) -> bool {
        self.indices.iter().all(ChildIndex::is_hardened)
    }

    /// Append a child index to the path.
    #[must_use]
    pub fn child(&self, index: ChildIndex) -> Self {
        let mut indices = self.indices.clone();
        indices.push(index);
        Self { indices }
    }
}

impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("m")?;
        for index in &self.indices {
            write!(f, "/{index}")?;
        }
        Ok(())
    }
}

impl FromStr for DerivationPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
