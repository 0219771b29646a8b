//! Version bytes for Bitcoin-family networks.

/// Version bytes and coin type of a Bitcoin-derived network.
///
/// Bitcoin forks such as Dogecoin reuse BIP-32 and P2PKH unchanged and differ
/// only in these constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainParams {
    /// Display name.
    pub name: &'static str,
    /// SLIP-44 coin type.
    pub coin_type: u32,
    /// Version byte prefixed to a P2PKH hash.
    pub pubkey_hash: u8,
    /// Version byte prefixed to a P2SH hash.
    pub script_hash: u8,
    /// Version byte of a WIF private key.
    pub wif: u8,
}

/// Bitcoin mainnet.
pub const BITCOIN: ChainParams = ChainParams {
    name: "Bitcoin",
    coin_type: 0,
    pubkey_hash: 0x00,
    script_hash: 0x05,
    wif: 0x80,
};

/// Dogecoin mainnet.
pub const DOGECOIN: ChainParams = ChainParams {
    name: "Dogecoin",
    coin_type: 3,
    pubkey_hash: 0x1e,
    script_hash: 0x16,
    wif: 0x9e,
};
