//! Supported chains and their derived outputs.

use core::fmt;
use core::str::FromStr;

use zeroize::Zeroizing;

use crate::DerivationPath;

/// A target network and address format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Chain {
    /// Ethereum, EIP-55 checksummed hex address.
    Ethereum,
    /// Bitcoin Pay to Public Key Hash - starts with 1
    BitcoinLegacy,
    /// Bitcoin P2SH wrapping P2WPKH - starts with 3
    BitcoinP2sh,
    /// Bitcoin native SegWit v0 - starts with bc1q
    BitcoinBech32,
    /// Bitcoin Taproot (SegWit v1) - starts with bc1p
    BitcoinTaproot,
    /// Dogecoin Pay to Public Key Hash - starts with D
    Dogecoin,
    /// Solana, base58 Ed25519 public key.
    Solana,
}

impl Chain {
    /// Every supported chain, in output order.
    pub const ALL: [Self; 7] = [
        Self::Ethereum,
        Self::BitcoinLegacy,
        Self::BitcoinP2sh,
        Self::BitcoinBech32,
        Self::BitcoinTaproot,
        Self::Dogecoin,
        Self::Solana,
    ];

    /// Stable identifier used as the result key.
    #[inline]
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Ethereum => "ethereum",
            Self::BitcoinLegacy => "bitcoinLegacy",
            Self::BitcoinP2sh => "bitcoinP2sh",
            Self::BitcoinBech32 => "bitcoinBech32",
            Self::BitcoinTaproot => "bitcoinTaproot",
            Self::Dogecoin => "dogecoin",
            Self::Solana => "solana",
        }
    }

    /// Human-readable label.
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ethereum => "Ethereum",
            Self::BitcoinLegacy => "Bitcoin Legacy",
            Self::BitcoinP2sh => "Bitcoin P2SH",
            Self::BitcoinBech32 => "Bitcoin Bech32",
            Self::BitcoinTaproot => "Bitcoin Taproot",
            Self::Dogecoin => "Dogecoin",
            Self::Solana => "Solana",
        }
    }

    /// Default derivation path for this chain.
    #[must_use]
    pub const fn default_path_str(self) -> &'static str {
        match self {
            Self::Ethereum => "m/44'/60'/0'/0/0",
            Self::BitcoinLegacy => "m/44'/0'/0'/0/0",
            Self::BitcoinP2sh => "m/49'/0'/0'/0/0",
            Self::BitcoinBech32 => "m/84'/0'/0'/0/0",
            Self::BitcoinTaproot => "m/86'/0'/0'/0/0",
            Self::Dogecoin => "m/44'/3'/0'/0/0",
            Self::Solana => "m/44'/501'/0'/0'",
        }
    }

    /// Parsed default derivation path for this chain.
    #[must_use]
    pub fn default_path(self) -> DerivationPath {
        DerivationPath::parse(self.default_path_str())
            .expect("built-in derivation paths are valid")
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error returned when parsing an unknown chain name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseChainError;

impl fmt::Display for ParseChainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid chain, expected: ethereum, bitcoin-legacy, bitcoin-p2sh, \
             bitcoin-bech32, bitcoin-taproot, dogecoin, or solana"
        )
    }
}

impl std::error::Error for ParseChainError {}

impl FromStr for Chain {
    type Err = ParseChainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_'))
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "ethereum" | "eth" => Ok(Self::Ethereum),
            "bitcoinlegacy" | "legacy" | "p2pkh" => Ok(Self::BitcoinLegacy),
            "bitcoinp2sh" | "p2sh" | "segwit" => Ok(Self::BitcoinP2sh),
            "bitcoinbech32" | "bech32" | "p2wpkh" => Ok(Self::BitcoinBech32),
            "bitcointaproot" | "taproot" | "p2tr" => Ok(Self::BitcoinTaproot),
            "dogecoin" | "doge" => Ok(Self::Dogecoin),
            "solana" | "sol" => Ok(Self::Solana),
            _ => Err(ParseChainError),
        }
    }
}

/// One chain's derived output.
#[derive(Debug, Clone)]
pub struct ChainAddress {
    /// Which chain this address belongs to.
    pub chain: Chain,
    /// Derivation path used.
    pub path: DerivationPath,
    /// Encoded address.
    pub address: String,
    /// Raw private key as lowercase hex without prefix, where exposed.
    pub private_key_hex: Option<Zeroizing<String>>,
}
