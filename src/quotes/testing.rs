use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;

use crate::error::AppError;
use crate::fetch::{Candle, FetchResult, QuoteSource, Ticker};
use crate::quotes::TradingPair;

/// In-memory `QuoteSource` that records every call it receives.
#[derive(Default)]
pub struct MockSource {
    tickers: HashMap<String, Ticker>,
    candles: HashMap<String, Candle>,
    failing: HashSet<String>,
    calls: RefCell<Vec<String>>,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ticker(mut self, product_id: &str, price: i64) -> Self {
        self.tickers.insert(
            product_id.to_string(),
            Ticker {
                price: Decimal::from(price),
                time: Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 15).single(),
            },
        );
        self
    }

    pub fn with_candle(mut self, product_id: &str, time: i64, close: i64) -> Self {
        let time = Utc.timestamp_opt(time, 0).unwrap();
        self.candles.insert(
            product_id.to_string(),
            Candle {
                time,
                low: Decimal::from(close - 1),
                high: Decimal::from(close + 1),
                open: Decimal::from(close),
                close: Decimal::from(close),
                volume: Decimal::from(100),
            },
        );
        self
    }

    pub fn failing_on(mut self, product_id: &str) -> Self {
        self.failing.insert(product_id.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn check(&self, product_id: &str) -> FetchResult<()> {
        if self.failing.contains(product_id) {
            Err(AppError::message(format!("connection reset for {product_id}")))
        } else {
            Ok(())
        }
    }
}

impl QuoteSource for MockSource {
    fn ticker(&self, pair: &TradingPair) -> FetchResult<Option<Ticker>> {
        let id = pair.product_id();
        self.calls.borrow_mut().push(format!("ticker {id}"));
        self.check(&id)?;
        Ok(self.tickers.get(&id).cloned())
    }

    fn daily_candle(&self, pair: &TradingPair, date: NaiveDate) -> FetchResult<Option<Candle>> {
        let id = pair.product_id();
        self.calls.borrow_mut().push(format!("candle {id} {date}"));
        self.check(&id)?;
        Ok(self.candles.get(&id).cloned())
    }
}
