use std::{fs::File, io, path::PathBuf};

use anyhow::{Context, Result};
use bank_sim::{
    bank::in_memory_bank::InMemoryBank,
    bin_utils::{Service, load_clients, logger},
    config::BankConfig,
};
use clap::Parser;
use tracing::{info, warn};

/// Interactive bank account simulator.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// TOML file with checking account limits
    #[arg(long)]
    config: Option<PathBuf>,

    /// CSV roster of clients to register at start-up
    #[arg(long)]
    clients: Option<PathBuf>,

    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init_logger(cli.verbose);

    let config = match &cli.config {
        Some(path) => BankConfig::load(path)
            .with_context(|| format!("Failed to load config `{}`", path.display()))?,
        None => BankConfig::default(),
    };
    let mut bank = InMemoryBank::new(config.checking);

    if let Some(path) = &cli.clients {
        let file = File::open(path)
            .with_context(|| format!("Failed to open `{}`", path.display()))?;
        let loaded = load_clients(&mut bank, file, |line, err| {
            warn!("Skipping roster line {line}: {err:#}")
        });
        info!(loaded, "client roster loaded");
    }

    let stdin = io::stdin();
    let service = Service {
        input: stdin.lock(),
        output: &mut io::stdout(),
        bank,
    };
    service.run()
}
