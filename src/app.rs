use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::Utc;

use crate::cli::{Cli, Commands};
use crate::config::{self, validator, Config, Credentials};
use crate::error::Result;
use crate::fetch::{ExchangeClient, QuoteSource, SpotClient, SpotPrice};
use crate::quotes::{
    BatchFetcher, Pacer, QuoteMode, QuoteResolver, Symbol, ThreadPacer, TradingPair,
};
use crate::records::{load_symbols, write_table, QuoteTable};
use crate::utils::quote_mode_from_arg;

/// Entry point used by `main`.
pub fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => Config::builtin(),
    };

    match cli.command {
        Commands::Bulk {
            infile,
            date,
            output_dir,
            chunk_size,
            pause_ms,
        } => {
            if let Some(dir) = output_dir {
                config.output_dir = dir;
            }
            if let Some(size) = chunk_size {
                config.throttle.chunk_size = size;
            }
            if let Some(ms) = pause_ms {
                config.throttle.pause = Duration::from_millis(ms);
            }
            validator::validate_config(&config)?;

            let mode = quote_mode_from_arg(date.as_deref());
            let path = run_bulk(&config, &infile, mode)?;
            println!("Prices written to {}", path.display());
        }
        Commands::Spot {
            symbol,
            date,
            secrets,
        } => {
            let credentials = config::load_credentials(&secrets)?;
            let mode = quote_mode_from_arg(date.as_deref());
            let spot = run_spot(&config, credentials, &symbol, mode)?;
            println!("{}", describe_spot(&spot, mode));
        }
    }

    Ok(())
}

/// Load the symbol list, fetch every quote against the live exchange, and
/// write the CSV.
pub fn run_bulk(config: &Config, infile: &Path, mode: QuoteMode) -> Result<PathBuf> {
    let source = ExchangeClient::new(&config.exchange)?;
    run_bulk_with(config, source, ThreadPacer, infile, mode)
}

pub fn run_bulk_with<S: QuoteSource, P: Pacer>(
    config: &Config,
    source: S,
    pacer: P,
    infile: &Path,
    mode: QuoteMode,
) -> Result<PathBuf> {
    let symbols = load_symbols(infile)?;
    log::info!("loaded {} symbols from {}", symbols.len(), infile.display());

    let resolver = QuoteResolver::new(source, config.quote_currencies.clone());
    let mut fetcher = BatchFetcher::new(resolver, config.throttle.clone(), pacer);
    let batch = fetcher.fetch(&symbols, mode)?;

    if batch.unresolved() > 0 {
        log::warn!("{} symbols had no quote", batch.unresolved());
    }

    let table = QuoteTable::from_batch(&batch, mode);
    write_table(&table, &config.output_dir, Utc::now())
}

/// Single-symbol lookup against the signed spot endpoint, always in the
/// primary quote currency.
pub fn run_spot(
    config: &Config,
    credentials: Credentials,
    symbol: &str,
    mode: QuoteMode,
) -> Result<SpotPrice> {
    let client = SpotClient::new(&config.exchange, &config.spot, credentials)?;
    let pair = TradingPair::new(&Symbol::new(symbol), config.primary_quote_currency());
    client.spot_price(&pair, mode.target_date())
}

pub fn describe_spot(spot: &SpotPrice, mode: QuoteMode) -> String {
    match mode {
        QuoteMode::Current => format!(
            "Current price of {} is {} {}",
            spot.base, spot.amount, spot.currency
        ),
        QuoteMode::Historic(date) => format!(
            "Price of {} on {} was {} {}",
            spot.base,
            date.format("%Y-%m-%d"),
            spot.amount,
            spot.currency
        ),
    }
}
