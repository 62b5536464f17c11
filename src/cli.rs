use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "crypto-quotes")]
#[command(about = "Fetch current or historic cryptocurrency prices from Coinbase")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// JSON file overriding the builtin endpoints, throttle and quote currencies
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch prices for every symbol in a file and write them to CSV
    Bulk {
        /// Plain text file with one ticker symbol per line
        infile: PathBuf,

        /// As-of date for historic quotes (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,

        /// Directory the CSV is written to
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Symbols resolved per chunk before pausing
        #[arg(long)]
        chunk_size: Option<usize>,

        /// Pause between chunks, in milliseconds
        #[arg(long)]
        pause_ms: Option<u64>,
    },

    /// Print the spot price of a single symbol
    Spot {
        /// Ticker symbol (e.g. btc)
        symbol: String,

        /// As-of date for a historic spot price (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,

        /// JSON file holding `api_key` and `api_secret`
        #[arg(short, long, default_value = "secrets.json")]
        secrets: PathBuf,
    },
}
