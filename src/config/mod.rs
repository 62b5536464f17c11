use std::path::PathBuf;
use std::time::Duration;

pub mod credentials;
pub mod loader;
pub mod validator;

pub use credentials::{load_credentials, Credentials};
pub use loader::load_config;

const EXCHANGE_BASE_URL: &str = "https://api.exchange.coinbase.com";
const SPOT_BASE_URL: &str = "https://api.coinbase.com";
const SPOT_API_VERSION: &str = "2021-08-08";
const USER_AGENT: &str = concat!("crypto-quotes/", env!("CARGO_PKG_VERSION"));

/// Quote currencies tried, in order, when resolving a symbol.
pub const DEFAULT_QUOTE_CURRENCIES: &[&str] = &["USD", "USDC", "USDT"];

/// Unauthenticated market-data endpoint used by the bulk fetcher.
#[derive(Debug, Clone)]
pub struct ExchangeConfig {
    pub base_url: String,
    pub user_agent: String,
    pub timeout: Duration,
}

/// Signed spot-price endpoint used by the single-symbol lookup.
#[derive(Debug, Clone)]
pub struct SpotConfig {
    pub base_url: String,
    pub api_version: String,
}

/// Client-side rate limiting for the bulk fetcher.
#[derive(Debug, Clone, PartialEq)]
pub struct ThrottleConfig {
    pub chunk_size: usize,
    pub pause: Duration,
    pub pause_after_final_chunk: bool,
}

impl Default for ThrottleConfig {
    fn default() -> Self {
        Self {
            chunk_size: 10,
            pause: Duration::from_secs(2),
            pause_after_final_chunk: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub exchange: ExchangeConfig,
    pub spot: SpotConfig,
    pub throttle: ThrottleConfig,
    pub quote_currencies: Vec<String>,
    pub output_dir: PathBuf,
}

impl Config {
    pub fn builtin() -> Self {
        Config {
            exchange: ExchangeConfig {
                base_url: EXCHANGE_BASE_URL.to_string(),
                user_agent: USER_AGENT.to_string(),
                timeout: Duration::from_secs(10),
            },
            spot: SpotConfig {
                base_url: SPOT_BASE_URL.to_string(),
                api_version: SPOT_API_VERSION.to_string(),
            },
            throttle: ThrottleConfig::default(),
            quote_currencies: DEFAULT_QUOTE_CURRENCIES
                .iter()
                .map(|code| code.to_string())
                .collect(),
            output_dir: PathBuf::from("."),
        }
    }

    /// The currency every single-symbol lookup is denominated in.
    pub fn primary_quote_currency(&self) -> &str {
        self.quote_currencies
            .first()
            .map(String::as_str)
            .unwrap_or(DEFAULT_QUOTE_CURRENCIES[0])
    }
}
