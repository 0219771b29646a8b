//! Sigil - derive multi-chain addresses from one BIP-39 mnemonic.

mod commands;

use clap::Parser;
use commands::Cli;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "sigil=debug,sigil_core=debug,sigil_btc=debug,sigil_evm=debug,sigil_svm=debug"
    } else {
        "sigil=warn,sigil_core=warn"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    cli.execute()
}
