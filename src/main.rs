use anyhow::Result;
use clap::Parser;

use crypto_quotes::app;
use crypto_quotes::cli::Cli;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    app::run(cli)?;

    Ok(())
}
