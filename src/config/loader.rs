use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::Deserialize;

use crate::error::{Context, Result};

use super::{validator, Config};

/// Load a JSON override file and layer it on top of the builtin defaults.
pub fn load_config(path: &Path) -> Result<Config> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read config JSON at {}", path.display()))?;

    let raw: RawConfig = serde_json::from_str(&json)
        .with_context(|| format!("failed to parse config JSON at {}", path.display()))?;

    let config = raw.apply(Config::builtin());
    validator::validate_config(&config)?;

    log::debug!("loaded config overrides from {}", path.display());
    Ok(config)
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    exchange: RawExchangeConfig,
    #[serde(default)]
    spot: RawSpotConfig,
    #[serde(default)]
    throttle: RawThrottleConfig,
    quote_currencies: Option<Vec<String>>,
    output_dir: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct RawExchangeConfig {
    base_url: Option<String>,
    user_agent: Option<String>,
    timeout_secs: Option<u64>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct RawSpotConfig {
    base_url: Option<String>,
    api_version: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct RawThrottleConfig {
    chunk_size: Option<usize>,
    pause_ms: Option<u64>,
    pause_after_final_chunk: Option<bool>,
}

impl RawConfig {
    fn apply(self, mut config: Config) -> Config {
        if let Some(base_url) = self.exchange.base_url {
            config.exchange.base_url = base_url;
        }
        if let Some(user_agent) = self.exchange.user_agent {
            config.exchange.user_agent = user_agent;
        }
        if let Some(secs) = self.exchange.timeout_secs {
            config.exchange.timeout = Duration::from_secs(secs);
        }

        if let Some(base_url) = self.spot.base_url {
            config.spot.base_url = base_url;
        }
        if let Some(api_version) = self.spot.api_version {
            config.spot.api_version = api_version;
        }

        if let Some(chunk_size) = self.throttle.chunk_size {
            config.throttle.chunk_size = chunk_size;
        }
        if let Some(pause_ms) = self.throttle.pause_ms {
            config.throttle.pause = Duration::from_millis(pause_ms);
        }
        if let Some(flag) = self.throttle.pause_after_final_chunk {
            config.throttle.pause_after_final_chunk = flag;
        }

        if let Some(currencies) = self.quote_currencies {
            config.quote_currencies = currencies
                .into_iter()
                .map(|code| code.trim().to_uppercase())
                .collect();
        }
        if let Some(dir) = self.output_dir {
            config.output_dir = dir;
        }

        config
    }
}
