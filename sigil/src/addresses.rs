//! Result assembler.

use core::fmt;

use serde::Serialize;
use sigil_core::{Chain, ChainAddress};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Derived addresses keyed by chain, plus Ethereum's private key.
///
/// Chains missing from the plan stay `None` and are left out of the JSON
/// form. Every field is wiped when the record is dropped.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Zeroize, ZeroizeOnDrop)]
#[serde(rename_all = "camelCase")]
pub struct Addresses {
    #[serde(skip_serializing_if = "Option::is_none")]
    ethereum: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ethereum_private_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bitcoin_legacy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bitcoin_p2sh: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bitcoin_bech32: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bitcoin_taproot: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dogecoin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    solana: Option<String>,
}

impl Addresses {
    /// Place each output under its chain.
    ///
    /// A later output for the same chain replaces an earlier one.
    pub fn assemble(outputs: impl IntoIterator<Item = ChainAddress>) -> Self {
        let mut addresses = Self::default();
        for output in outputs {
            if output.chain == Chain::Ethereum {
                addresses.ethereum_private_key = output
                    .private_key_hex
                    .as_ref()
                    .map(|key| key.as_str().to_owned());
            }
            *addresses.slot_mut(output.chain) = Some(output.address);
        }
        addresses
    }

    /// Address derived for `chain`, if it was planned.
    pub fn get(&self, chain: Chain) -> Option<&str> {
        match chain {
            Chain::Ethereum => self.ethereum.as_deref(),
            Chain::BitcoinLegacy => self.bitcoin_legacy.as_deref(),
            Chain::BitcoinP2sh => self.bitcoin_p2sh.as_deref(),
            Chain::BitcoinBech32 => self.bitcoin_bech32.as_deref(),
            Chain::BitcoinTaproot => self.bitcoin_taproot.as_deref(),
            Chain::Dogecoin => self.dogecoin.as_deref(),
            Chain::Solana => self.solana.as_deref(),
        }
    }

    /// Ethereum private key as lowercase hex without `0x`.
    ///
    /// **Security Warning**: this controls the Ethereum account.
    pub fn ethereum_private_key(&self) -> Option<&str> {
        self.ethereum_private_key.as_deref()
    }

    /// Present addresses in output order.
    pub fn iter(&self) -> impl Iterator<Item = (Chain, &str)> + '_ {
        Chain::ALL
            .into_iter()
            .filter_map(|chain| self.get(chain).map(|address| (chain, address)))
    }

    /// Number of chains with an address.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Whether no chain has an address.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn slot_mut(&mut self, chain: Chain) -> &mut Option<String> {
        match chain {
            Chain::Ethereum => &mut self.ethereum,
            Chain::BitcoinLegacy => &mut self.bitcoin_legacy,
            Chain::BitcoinP2sh => &mut self.bitcoin_p2sh,
            Chain::BitcoinBech32 => &mut self.bitcoin_bech32,
            Chain::BitcoinTaproot => &mut self.bitcoin_taproot,
            Chain::Dogecoin => &mut self.dogecoin,
            Chain::Solana => &mut self.solana,
        }
    }
}

impl fmt::Debug for Addresses {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("Addresses");
        for (chain, address) in self.iter() {
            debug.field(chain.key(), &address);
        }
        if self.ethereum_private_key.is_some() {
            debug.field("ethereumPrivateKey", &"[REDACTED]");
        }
        debug.finish()
    }
}

#[cfg(test)]
mod tests {
    use zeroize::Zeroizing;

    use super::*;

    const SECRET: &str = "1ab42cc412b618bdea3a599e3c9bae199ebf030895b039e9db1e30dafb12b727";

    fn output(chain: Chain, address: &str) -> ChainAddress {
        ChainAddress {
            chain,
            path: chain.default_path(),
            address: address.to_owned(),
            private_key_hex: (chain == Chain::Ethereum)
                .then(|| Zeroizing::new(SECRET.to_owned())),
        }
    }

    #[test]
    fn test_assemble_places_each_chain() {
        let addresses = Addresses::assemble(Chain::ALL.map(|chain| output(chain, chain.key())));

        for chain in Chain::ALL {
            assert_eq!(addresses.get(chain), Some(chain.key()));
        }
        assert_eq!(addresses.ethereum_private_key(), Some(SECRET));
        assert_eq!(addresses.len(), 7);
    }

    #[test]
    fn test_partial_assembly() {
        let addresses = Addresses::assemble([output(Chain::Solana, "sol")]);
        assert_eq!(addresses.get(Chain::Solana), Some("sol"));
        assert_eq!(addresses.get(Chain::Ethereum), None);
        assert_eq!(addresses.ethereum_private_key(), None);
        assert!(Addresses::assemble([]).is_empty());
    }

    #[test]
    fn test_json_keys() {
        let addresses = Addresses::assemble(Chain::ALL.map(|chain| output(chain, "x")));
        let json = serde_json::to_value(&addresses).unwrap();
        let object = json.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            [
                "bitcoinBech32",
                "bitcoinLegacy",
                "bitcoinP2sh",
                "bitcoinTaproot",
                "dogecoin",
                "ethereum",
                "ethereumPrivateKey",
                "solana",
            ]
        );
        assert_eq!(object["ethereumPrivateKey"], SECRET);
    }

    #[test]
    fn test_json_omits_missing_chains() {
        let addresses = Addresses::assemble([output(Chain::Dogecoin, "D")]);
        assert_eq!(
            serde_json::to_string(&addresses).unwrap(),
            r#"{"dogecoin":"D"}"#
        );
    }

    #[test]
    fn test_debug_redacts_private_key() {
        let addresses = Addresses::assemble([output(Chain::Ethereum, "0xabc")]);
        let debug = format!("{addresses:?}");
        assert!(debug.contains("0xabc"));
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains(SECRET));
    }
}
