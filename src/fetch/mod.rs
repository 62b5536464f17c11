use chrono::NaiveDate;

use crate::error::Result;
use crate::quotes::TradingPair;

pub mod auth;
pub mod decode;
pub mod exchange;
pub mod request;
pub mod spot;

pub use decode::{Candle, SpotPrice, Ticker};
pub use exchange::ExchangeClient;
pub use spot::SpotClient;

/// One day, in seconds; the only candle granularity the fetcher asks for.
pub const DAILY_GRANULARITY_SECS: u32 = 86_400;

pub type FetchResult<T> = Result<T>;

/// Read-only price service the resolver talks to.
///
/// `Ok(None)` means the pair has no usable price (unknown product, no trades
/// that day). Anything else that goes wrong is an `Err` and aborts the run.
pub trait QuoteSource {
    fn ticker(&self, pair: &TradingPair) -> FetchResult<Option<Ticker>>;

    fn daily_candle(&self, pair: &TradingPair, date: NaiveDate) -> FetchResult<Option<Candle>>;
}

impl<S: QuoteSource + ?Sized> QuoteSource for &S {
    fn ticker(&self, pair: &TradingPair) -> FetchResult<Option<Ticker>> {
        (**self).ticker(pair)
    }

    fn daily_candle(&self, pair: &TradingPair, date: NaiveDate) -> FetchResult<Option<Candle>> {
        (**self).daily_candle(pair, date)
    }
}
