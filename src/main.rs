// main.rs

use clap::Parser;
use log::info;
use paper_trading::config::MarketConfig;
use paper_trading::console::Console;
use paper_trading::{Broker, Session};
use rust_decimal::Decimal;
use std::io;
use std::path::PathBuf;

/// Buy and sell shares against a fixed market from the terminal.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// JSON file with the starting cash and listed instruments.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Display name; asked for interactively when omitted.
    #[arg(short, long)]
    name: Option<String>,

    /// Starting cash, overriding the config file.
    #[arg(long)]
    cash: Option<Decimal>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    // 1. Load market data and account settings
    let mut config = match &args.config {
        Some(path) => MarketConfig::load(path)?,
        None => MarketConfig::default(),
    };
    if let Some(cash) = args.cash {
        config.starting_cash = cash;
    }
    if args.name.is_some() {
        config.user_name = args.name;
    }
    config.validate()?;
    let catalog = config.build_catalog()?;
    info!(
        "Market opened with {} instruments, starting cash {}",
        catalog.len(),
        config.starting_cash
    );

    // 2. Create the user session
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    let name = match config.user_name {
        Some(name) => name,
        None => console.prompt_name()?,
    };
    let mut broker = Broker::new(catalog, Session::new(name, config.starting_cash)?);

    // 3. Trade until the user exits
    console.run(&mut broker)?;
    Ok(())
}
