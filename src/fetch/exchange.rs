use chrono::NaiveDate;
use reqwest::blocking::Client;

use crate::config::ExchangeConfig;
use crate::error::Context;
use crate::quotes::TradingPair;

use super::decode::{decode_daily_candle, decode_ticker, Candle, Ticker};
use super::request::{build_client, endpoint, read_optional_body};
use super::{FetchResult, QuoteSource, DAILY_GRANULARITY_SECS};

/// Blocking client for the public market-data REST API. No credentials.
pub struct ExchangeClient {
    client: Client,
    base_url: String,
}

impl ExchangeClient {
    pub fn new(cfg: &ExchangeConfig) -> FetchResult<Self> {
        Ok(Self {
            client: build_client(cfg)?,
            base_url: cfg.base_url.clone(),
        })
    }

    fn product_url(&self, pair: &TradingPair, resource: &str) -> String {
        endpoint(
            &self.base_url,
            &format!("/products/{}/{}", pair.product_id(), resource),
        )
    }
}

impl QuoteSource for ExchangeClient {
    fn ticker(&self, pair: &TradingPair) -> FetchResult<Option<Ticker>> {
        let url = self.product_url(pair, "ticker");
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .with_context(|| format!("Ticker request failed for {}", pair))?;

        let Some(body) = read_optional_body(response, &format!("ticker {}", pair))? else {
            return Ok(None);
        };

        Ok(decode_ticker(&body)
            .with_context(|| format!("Failed to parse ticker JSON for {}", pair))?)
    }

    fn daily_candle(&self, pair: &TradingPair, date: NaiveDate) -> FetchResult<Option<Candle>> {
        let url = self.product_url(pair, "candles");
        let day = date.format("%Y-%m-%d").to_string();
        let granularity = DAILY_GRANULARITY_SECS.to_string();
        log::debug!("GET {} start={} end={}", url, day, day);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("start", day.as_str()),
                ("end", day.as_str()),
                ("granularity", granularity.as_str()),
            ])
            .send()
            .with_context(|| format!("Candle request failed for {} on {}", pair, day))?;

        let Some(body) = read_optional_body(response, &format!("candles {}", pair))? else {
            return Ok(None);
        };

        decode_daily_candle(pair, &body)
    }
}
