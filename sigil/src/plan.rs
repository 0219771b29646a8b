//! Which chains to derive and at which paths.

use std::collections::BTreeMap;

use sigil_btc::{AddressType, BitcoinEncoder, LegacyEncoder};
use sigil_core::{AddressEncoder, Chain, DerivationPath};
use sigil_evm::EthereumEncoder;
use sigil_svm::SolanaEncoder;

/// Per-chain derivation path configuration.
///
/// The default plan covers every [`Chain`] at its standard path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    paths: BTreeMap<Chain, DerivationPath>,
}

impl Plan {
    /// Every chain at its default path.
    pub fn new() -> Self {
        Self::for_chains(Chain::ALL)
    }

    /// Only the given chains, each at its default path.
    pub fn for_chains(chains: impl IntoIterator<Item = Chain>) -> Self {
        Self {
            paths: chains
                .into_iter()
                .map(|chain| (chain, chain.default_path()))
                .collect(),
        }
    }

    /// Derive `chain` at `path`, adding the chain if it was not planned.
    #[must_use]
    pub fn with_path(mut self, chain: Chain, path: DerivationPath) -> Self {
        self.paths.insert(chain, path);
        self
    }

    /// Drop `chain` from the plan.
    #[must_use]
    pub fn without(mut self, chain: Chain) -> Self {
        self.paths.remove(&chain);
        self
    }

    /// Path planned for `chain`, if any.
    pub fn path(&self, chain: Chain) -> Option<&DerivationPath> {
        self.paths.get(&chain)
    }

    /// Planned chains in output order.
    pub fn chains(&self) -> impl Iterator<Item = Chain> + '_ {
        self.paths.keys().copied()
    }

    /// Number of planned chains.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether no chain is planned.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Build one encoder per planned chain.
    pub fn encoders(&self) -> Vec<Box<dyn AddressEncoder>> {
        self.paths
            .iter()
            .map(|(&chain, path)| -> Box<dyn AddressEncoder> {
                let path = path.clone();
                match chain {
                    Chain::Ethereum => Box::new(EthereumEncoder::with_path(path)),
                    Chain::BitcoinLegacy => {
                        Box::new(BitcoinEncoder::with_path(AddressType::P2pkh, path))
                    }
                    Chain::BitcoinP2sh => {
                        Box::new(BitcoinEncoder::with_path(AddressType::P2shP2wpkh, path))
                    }
                    Chain::BitcoinBech32 => {
                        Box::new(BitcoinEncoder::with_path(AddressType::P2wpkh, path))
                    }
                    Chain::BitcoinTaproot => {
                        Box::new(BitcoinEncoder::with_path(AddressType::P2tr, path))
                    }
                    Chain::Dogecoin => Box::new(LegacyEncoder::dogecoin_at(path)),
                    Chain::Solana => Box::new(SolanaEncoder::with_path(path)),
                }
            })
            .collect()
    }
}

impl Default for Plan {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_plan_covers_all_chains() {
        let plan = Plan::new();
        assert_eq!(plan.chains().collect::<Vec<_>>(), Chain::ALL);
        for chain in Chain::ALL {
            assert_eq!(plan.path(chain), Some(&chain.default_path()));
        }
    }

    #[test]
    fn test_with_path_overrides() {
        let path: DerivationPath = "m/44'/60'/0'/0/7".parse().unwrap();
        let plan = Plan::new().with_path(Chain::Ethereum, path.clone());
        assert_eq!(plan.path(Chain::Ethereum), Some(&path));
        assert_eq!(plan.len(), Chain::ALL.len());
    }

    #[test]
    fn test_partial_plan() {
        let plan = Plan::for_chains([Chain::Solana, Chain::Ethereum])
            .without(Chain::Solana);
        assert_eq!(plan.chains().collect::<Vec<_>>(), [Chain::Ethereum]);
        assert!(Plan::for_chains([]).is_empty());
    }

    #[test]
    fn test_encoders_match_plan() {
        let path = "m/44'/3'/1'/0/0".parse().unwrap();
        let plan = Plan::new().with_path(Chain::Dogecoin, path);
        let encoders = plan.encoders();

        assert_eq!(encoders.len(), Chain::ALL.len());
        for (encoder, chain) in encoders.iter().zip(Chain::ALL) {
            assert_eq!(encoder.chain(), chain);
            assert_eq!(Some(encoder.path()), plan.path(chain));
        }
    }
}
