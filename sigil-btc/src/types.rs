//! Bitcoin address types.

use core::fmt;
use core::str::FromStr;

use sigil_core::Chain;

/// Bitcoin address types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddressType {
    /// Pay to Public Key Hash (Legacy) - starts with 1
    P2pkh,
    /// Pay to Script Hash wrapping P2WPKH (`SegWit` compatible) - starts with 3
    P2shP2wpkh,
    /// Pay to Witness Public Key Hash (Native `SegWit`) - starts with bc1q
    #[default]
    P2wpkh,
    /// Pay to Taproot (Taproot/SegWit v1) - starts with bc1p
    P2tr,
}

impl AddressType {
    /// Every Bitcoin address type, in output order.
    pub const ALL: [Self; 4] = [Self::P2pkh, Self::P2shP2wpkh, Self::P2wpkh, Self::P2tr];

    /// Get the BIP purpose for this address type.
    #[inline]
    #[must_use]
    pub const fn purpose(self) -> u32 {
        match self {
            Self::P2pkh => 44,
            Self::P2shP2wpkh => 49,
            Self::P2wpkh => 84,
            Self::P2tr => 86,
        }
    }

    /// The result slot this address type fills.
    #[inline]
    #[must_use]
    pub const fn chain(self) -> Chain {
        match self {
            Self::P2pkh => Chain::BitcoinLegacy,
            Self::P2shP2wpkh => Chain::BitcoinP2sh,
            Self::P2wpkh => Chain::BitcoinBech32,
            Self::P2tr => Chain::BitcoinTaproot,
        }
    }

    /// Get address type name.
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::P2pkh => "P2PKH (Legacy)",
            Self::P2shP2wpkh => "P2SH-P2WPKH (SegWit)",
            Self::P2wpkh => "P2WPKH (Native SegWit)",
            Self::P2tr => "P2TR (Taproot)",
        }
    }
}

impl fmt::Display for AddressType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl TryFrom<Chain> for AddressType {
    type Error = Chain;

    /// Map a Bitcoin result slot back to its address type; other chains are
    /// returned unchanged as the error.
    fn try_from(chain: Chain) -> Result<Self, Self::Error> {
        match chain {
            Chain::BitcoinLegacy => Ok(Self::P2pkh),
            Chain::BitcoinP2sh => Ok(Self::P2shP2wpkh),
            Chain::BitcoinBech32 => Ok(Self::P2wpkh),
            Chain::BitcoinTaproot => Ok(Self::P2tr),
            other => Err(other),
        }
    }
}

/// Error returned when parsing an invalid address type string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseAddressTypeError;

impl fmt::Display for ParseAddressTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid address type, expected: p2pkh, p2sh, p2wpkh, or p2tr"
        )
    }
}

impl std::error::Error for ParseAddressTypeError {}

impl FromStr for AddressType {
    type Err = ParseAddressTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "p2pkh" | "legacy" => Ok(Self::P2pkh),
            "p2sh" | "p2sh-p2wpkh" | "segwit" | "nested-segwit" => Ok(Self::P2shP2wpkh),
            "p2wpkh" | "native-segwit" | "bech32" => Ok(Self::P2wpkh),
            "p2tr" | "taproot" | "bech32m" => Ok(Self::P2tr),
            _ => Err(ParseAddressTypeError),
        }
    }
}
