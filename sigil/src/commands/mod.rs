//! CLI definition and output formatting.

use clap::Parser;
use colored::Colorize;
use sigil::{Generated, Plan};
use sigil_core::{Chain, DerivationPath, MnemonicSource};

/// Sigil - derive multi-chain addresses from one BIP-39 mnemonic.
#[derive(Parser, Debug)]
#[command(name = "sigil")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Mnemonic phrase, or a file containing one. Omit to generate a new
    /// 12-word mnemonic.
    #[arg(value_name = "MNEMONIC_OR_FILE")]
    input: Option<String>,

    /// Override a chain's derivation path, e.g. `ethereum=m/44'/60'/0'/0/1`.
    #[arg(
        long = "path",
        value_name = "CHAIN=PATH",
        value_parser = parse_path_override
    )]
    paths: Vec<(Chain, DerivationPath)>,

    /// Print the result as JSON.
    #[arg(long)]
    json: bool,

    /// Enable verbose logging.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Derive and print.
    pub fn execute(self) -> anyhow::Result<()> {
        let plan = self
            .paths
            .into_iter()
            .fold(Plan::new(), |plan, (chain, path)| {
                plan.with_path(chain, path)
            });

        let generated = sigil::generate_with(self.input.as_deref(), &plan)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&generated)?);
        } else {
            print_generated(&generated, &plan);
        }
        Ok(())
    }
}

fn parse_path_override(s: &str) -> Result<(Chain, DerivationPath), String> {
    let (chain, path) = s
        .split_once('=')
        .ok_or_else(|| format!("expected CHAIN=PATH, got \"{s}\""))?;
    let chain = chain.trim().parse::<Chain>().map_err(|e| e.to_string())?;
    let path = path.parse::<DerivationPath>().map_err(|e| e.to_string())?;
    Ok((chain, path))
}

const fn heading(source: &MnemonicSource) -> &'static str {
    match source {
        MnemonicSource::Generated => "Generated mnemonic",
        MnemonicSource::File(_) => "Mnemonic read from file",
        MnemonicSource::Literal => "Mnemonic",
    }
}

fn print_generated(generated: &Generated, plan: &Plan) {
    let addresses = generated.addresses();

    println!();
    println!("  {}", heading(generated.source()).cyan().bold());
    println!("  {}", generated.mnemonic());
    println!();

    for (chain, address) in addresses.iter() {
        let path = plan
            .path(chain)
            .map(ToString::to_string)
            .unwrap_or_default();
        println!(
            "  {:<16} {}  {}",
            chain.name().cyan().bold(),
            address.green(),
            path.dimmed()
        );
        if chain == Chain::Ethereum {
            if let Some(key) = addresses.ethereum_private_key() {
                println!("  {:<16} {}", "Private Key".cyan().bold(), key);
            }
        }
    }
    println!();
}
