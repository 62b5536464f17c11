use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::AppError;
use crate::quotes::TradingPair;

use super::FetchResult;

/// Last trade for a product.
#[derive(Debug, Clone, PartialEq)]
pub struct Ticker {
    pub price: Decimal,
    pub time: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
struct RawTicker {
    #[serde(default)]
    price: Option<Decimal>,
    #[serde(default)]
    time: Option<DateTime<Utc>>,
}

/// Decode a ticker body. A body without `price` (e.g. `{"message":"NotFound"}`)
/// yields `None`.
pub fn decode_ticker(body: &str) -> FetchResult<Option<Ticker>> {
    let raw: RawTicker = serde_json::from_str(body)?;
    Ok(raw.price.map(|price| Ticker {
        price,
        time: raw.time,
    }))
}

/// One OHLCV bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct Candle {
    pub time: DateTime<Utc>,
    pub low: Decimal,
    pub high: Decimal,
    pub open: Decimal,
    pub close: Decimal,
    pub volume: Decimal,
}

/// Wire layout of a candle: `[time, low, high, open, close, volume]`, no field
/// names, `time` in unix seconds.
#[derive(Debug, Deserialize)]
struct RawCandle(i64, Decimal, Decimal, Decimal, Decimal, Decimal);

impl TryFrom<RawCandle> for Candle {
    type Error = AppError;

    fn try_from(raw: RawCandle) -> Result<Self, Self::Error> {
        let RawCandle(secs, low, high, open, close, volume) = raw;
        let time = Utc
            .timestamp_opt(secs, 0)
            .single()
            .ok_or_else(|| AppError::message(format!("candle timestamp {secs} out of range")))?;

        Ok(Candle {
            time,
            low,
            high,
            open,
            close,
            volume,
        })
    }
}

/// Decode a candles body for a single-day query.
///
/// An empty list means the product had no data that day. More than one record
/// is a shape the single-day query never expects and is reported rather than
/// picking one arbitrarily.
pub fn decode_daily_candle(pair: &TradingPair, body: &str) -> FetchResult<Option<Candle>> {
    let mut records: Vec<RawCandle> = serde_json::from_str(body)?;

    match records.len() {
        0 => Ok(None),
        1 => records.pop().map(Candle::try_from).transpose(),
        n => Err(AppError::UnexpectedShape {
            pair: pair.product_id(),
            records: n,
        }),
    }
}

/// Spot price as returned by the signed prices endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SpotPrice {
    pub amount: Decimal,
    pub base: String,
    pub currency: String,
}

#[derive(Debug, Deserialize)]
struct SpotEnvelope {
    data: SpotPrice,
}

pub fn decode_spot(body: &str) -> FetchResult<SpotPrice> {
    let envelope: SpotEnvelope = serde_json::from_str(body)?;
    Ok(envelope.data)
}
