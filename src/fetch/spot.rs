use chrono::{NaiveDate, Utc};
use reqwest::blocking::Client;

use crate::config::{Credentials, ExchangeConfig, SpotConfig};
use crate::error::{AppError, Context};
use crate::quotes::TradingPair;

use super::auth::signed_headers;
use super::decode::{decode_spot, SpotPrice};
use super::request::{build_client, endpoint, read_optional_body};
use super::FetchResult;

/// Signed client for the single-symbol spot price endpoint.
pub struct SpotClient {
    client: Client,
    base_url: String,
    api_version: String,
    credentials: Credentials,
}

impl SpotClient {
    pub fn new(
        exchange: &ExchangeConfig,
        spot: &SpotConfig,
        credentials: Credentials,
    ) -> FetchResult<Self> {
        Ok(Self {
            client: build_client(exchange)?,
            base_url: spot.base_url.clone(),
            api_version: spot.api_version.clone(),
            credentials,
        })
    }

    /// Fetch the spot price for `pair`, or the historic spot price on `date`.
    pub fn spot_price(&self, pair: &TradingPair, date: Option<NaiveDate>) -> FetchResult<SpotPrice> {
        let request_path = spot_request_path(pair, date);
        let headers = signed_headers(
            &self.credentials,
            &self.api_version,
            Utc::now().timestamp(),
            "GET",
            &request_path,
        )?;

        let url = endpoint(&self.base_url, &request_path);
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .headers(headers)
            .send()
            .with_context(|| format!("Spot price request failed for {}", pair))?;

        let body = read_optional_body(response, &format!("spot price {}", pair))?
            .ok_or_else(|| AppError::message(format!("No spot price available for {}", pair)))?;

        Ok(decode_spot(&body)
            .with_context(|| format!("Failed to parse spot price JSON for {}", pair))?)
    }
}

/// Path (with query) that is both requested and signed.
fn spot_request_path(pair: &TradingPair, date: Option<NaiveDate>) -> String {
    let path = format!("/v2/prices/{}/spot", pair.product_id());
    match date {
        Some(date) => format!("{}?date={}", path, date.format("%Y-%m-%d")),
        None => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quotes::Symbol;

    #[test]
    fn current_spot_path_has_no_query() {
        let pair = TradingPair::new(&Symbol::new("btc"), "USD");
        assert_eq!(spot_request_path(&pair, None), "/v2/prices/BTC-USD/spot");
    }

    #[test]
    fn historic_spot_path_carries_date() {
        let pair = TradingPair::new(&Symbol::new("eth"), "USD");
        let date = NaiveDate::from_ymd_opt(2023, 1, 15).unwrap();
        assert_eq!(
            spot_request_path(&pair, Some(date)),
            "/v2/prices/ETH-USD/spot?date=2023-01-15"
        );
    }
}
