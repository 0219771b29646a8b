//! # sigil
//!
//! Derive a deterministic set of addresses from one BIP-39 mnemonic:
//! Ethereum, Bitcoin (Legacy, P2SH-P2WPKH, Bech32, Taproot), Dogecoin and
//! Solana.
//!
//! # Example
//!
//! ```
//! use sigil_core::Chain;
//!
//! let generated = sigil::generate(Some(
//!     "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about",
//! ))?;
//! let addresses = generated.addresses();
//! assert_eq!(
//!     addresses.get(Chain::Ethereum),
//!     Some("0x9858EfFD232B4033E47d90003D41EC34EcaEda94")
//! );
//! assert_eq!(
//!     addresses.get(Chain::BitcoinBech32),
//!     Some("bc1qcr8te4kr609gcawutmrza0j4xv80jy8z306fyu")
//! );
//! # Ok::<(), sigil_core::Error>(())
//! ```
//!
//! # Features
//!
//! - `parallel` (default): run the per-chain encoders on the `rayon` pool

mod addresses;
mod plan;

use serde::ser::{Serialize, SerializeStruct, Serializer};
use sigil_core::secp256k1::{All, Secp256k1};
use sigil_core::{
    AddressEncoder, Chain, ChainAddress, KeyMaterial, MnemonicSource, Result, Wallet, mnemonic,
};
use tracing::debug;
use zeroize::Zeroizing;

pub use addresses::Addresses;
pub use plan::Plan;

/// One invocation's output: the mnemonic, where it came from, and the
/// derived addresses.
pub struct Generated {
    mnemonic: Zeroizing<String>,
    source: MnemonicSource,
    addresses: Addresses,
}

impl Generated {
    /// The mnemonic phrase, words separated by single spaces.
    ///
    /// **Security Warning**: this reconstructs every derived key.
    pub fn mnemonic(&self) -> &str {
        &self.mnemonic
    }

    /// Where the mnemonic came from.
    pub const fn source(&self) -> &MnemonicSource {
        &self.source
    }

    /// The derived addresses.
    pub const fn addresses(&self) -> &Addresses {
        &self.addresses
    }
}

impl core::fmt::Debug for Generated {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Generated")
            .field("mnemonic", &"[REDACTED]")
            .field("source", &self.source)
            .field("addresses", &self.addresses)
            .finish()
    }
}

impl Serialize for Generated {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Generated", 2)?;
        state.serialize_field("mnemonic", self.mnemonic.as_str())?;
        state.serialize_field("addresses", &self.addresses)?;
        state.end()
    }
}

/// Derive every chain at its default path.
///
/// `input` is `None` (or empty) to generate a fresh 12-word mnemonic, a path
/// to a file holding the phrase, or the phrase itself.
///
/// # Errors
///
/// Returns [`sigil_core::Error::InvalidMnemonic`] for a bad phrase and
/// [`sigil_core::Error::DerivationFailed`] if any chain fails; no partial
/// result is returned.
pub fn generate(input: Option<&str>) -> Result<Generated> {
    generate_with(input, &Plan::new())
}

/// Derive the chains in `plan` at the planned paths.
///
/// # Errors
///
/// See [`generate`].
pub fn generate_with(input: Option<&str>, plan: &Plan) -> Result<Generated> {
    let resolved = mnemonic::resolve(input)?;
    let wallet = Wallet::from_mnemonic(resolved.phrase(), None)?;
    let secp = Secp256k1::new();

    debug!(source = %resolved.source(), chains = plan.len(), "deriving addresses");

    let outputs = derive_each(&wallet, plan, &secp)?
        .into_iter()
        .map(|(chain, result)| result.map_err(|err| err.for_chain(chain)))
        .collect::<Result<Vec<ChainAddress>>>()?;

    Ok(Generated {
        mnemonic: Zeroizing::new(wallet.mnemonic().to_owned()),
        source: resolved.source().clone(),
        addresses: Addresses::assemble(outputs),
    })
}

/// Run every encoder in `plan` and report each chain's outcome separately.
///
/// Results come back in plan order. `secp` is the one curve context every
/// secp256k1 encoder shares. Only computing the shared master key can fail
/// the call as a whole.
///
/// # Errors
///
/// Returns [`sigil_core::Error::InvalidMasterKey`] if the seed has no valid
/// BIP-32 master key.
pub fn derive_each(
    wallet: &Wallet,
    plan: &Plan,
    secp: &Secp256k1<All>,
) -> Result<Vec<(Chain, Result<ChainAddress>)>> {
    let master = wallet.master_key(secp)?;
    let material = KeyMaterial::new(secp, wallet.seed(), &master);
    let encoders = plan.encoders();

    Ok(run_encoders(&encoders, &material))
}

#[cfg(feature = "parallel")]
fn run_encoders(
    encoders: &[Box<dyn AddressEncoder>],
    material: &KeyMaterial<'_>,
) -> Vec<(Chain, Result<ChainAddress>)> {
    use rayon::prelude::*;

    encoders
        .par_iter()
        .map(|encoder| (encoder.chain(), encoder.encode(material)))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn run_encoders(
    encoders: &[Box<dyn AddressEncoder>],
    material: &KeyMaterial<'_>,
) -> Vec<(Chain, Result<ChainAddress>)> {
    encoders
        .iter()
        .map(|encoder| (encoder.chain(), encoder.encode(material)))
        .collect()
}
