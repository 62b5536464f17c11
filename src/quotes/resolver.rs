use crate::error::Result;
use crate::fetch::QuoteSource;

use super::{Quote, QuoteMode, Symbol, TradingPair};

/// Resolves one symbol by walking the quote currencies in priority order.
pub struct QuoteResolver<S> {
    source: S,
    quote_currencies: Vec<String>,
}

impl<S: QuoteSource> QuoteResolver<S> {
    pub fn new(source: S, quote_currencies: Vec<String>) -> Self {
        Self {
            source,
            quote_currencies,
        }
    }

    /// First currency with a usable price wins. `Ok(None)` when none has one.
    pub fn resolve(&self, symbol: &Symbol, mode: QuoteMode) -> Result<Option<Quote>> {
        for currency in &self.quote_currencies {
            let pair = TradingPair::new(symbol, currency);

            let found = match mode {
                QuoteMode::Current => self
                    .source
                    .ticker(&pair)?
                    .map(|ticker| (ticker.price, ticker.time)),
                QuoteMode::Historic(date) => self
                    .source
                    .daily_candle(&pair, date)?
                    .map(|candle| (candle.close, Some(candle.time))),
            };

            if let Some((price, time)) = found {
                log::debug!("{} resolved via {} at {}", symbol, pair, price);
                return Ok(Some(Quote {
                    price,
                    quote_currency: currency.clone(),
                    time,
                }));
            }

            log::debug!("no price for {}, trying next quote currency", pair);
        }

        log::warn!(
            "no quote for {} against any of [{}]",
            symbol,
            self.quote_currencies.join(", ")
        );
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::quotes::testing::MockSource;
    use chrono::{NaiveDate, TimeZone, Utc};
    use rust_decimal::Decimal;

    fn currencies() -> Vec<String> {
        vec!["USD".into(), "USDC".into(), "USDT".into()]
    }

    #[test]
    fn first_currency_hit_skips_the_rest() {
        let source = MockSource::new().with_ticker("BTC-USD", 50_000);
        let resolver = QuoteResolver::new(&source, currencies());

        let quote = resolver
            .resolve(&Symbol::new("btc"), QuoteMode::Current)
            .unwrap()
            .expect("BTC resolves");

        assert_eq!(quote.price, Decimal::from(50_000));
        assert_eq!(quote.quote_currency, "USD");
        assert_eq!(source.calls(), vec!["ticker BTC-USD"]);
    }

    #[test]
    fn falls_back_to_stablecoin_pairs_in_order() {
        let source = MockSource::new().with_ticker("DOGE-USDT", 7);
        let resolver = QuoteResolver::new(&source, currencies());

        let quote = resolver
            .resolve(&Symbol::new("DOGE"), QuoteMode::Current)
            .unwrap()
            .expect("DOGE resolves against USDT");

        assert_eq!(quote.quote_currency, "USDT");
        assert_eq!(
            source.calls(),
            vec!["ticker DOGE-USD", "ticker DOGE-USDC", "ticker DOGE-USDT"]
        );
    }

    #[test]
    fn unknown_symbol_is_no_quote_not_an_error() {
        let source = MockSource::new();
        let resolver = QuoteResolver::new(&source, currencies());

        let quote = resolver.resolve(&Symbol::new("XYZ"), QuoteMode::Current).unwrap();

        assert_eq!(quote, None);
        assert_eq!(source.calls().len(), 3);
    }

    #[test]
    fn historic_mode_uses_candle_close_and_time() {
        let date = NaiveDate::from_ymd_opt(2023, 1, 15).unwrap();
        let source = MockSource::new().with_candle("ETH-USDC", 1_673_740_800, 1_550);
        let resolver = QuoteResolver::new(&source, currencies());

        let quote = resolver
            .resolve(&Symbol::new("ETH"), QuoteMode::Historic(date))
            .unwrap()
            .expect("ETH resolves");

        assert_eq!(quote.price, Decimal::from(1_550));
        assert_eq!(quote.quote_currency, "USDC");
        assert_eq!(
            quote.time,
            Some(Utc.with_ymd_and_hms(2023, 1, 15, 0, 0, 0).unwrap())
        );
        assert_eq!(
            source.calls(),
            vec!["candle ETH-USD 2023-01-15", "candle ETH-USDC 2023-01-15"]
        );
    }

    #[test]
    fn transport_failure_propagates() {
        let source = MockSource::new().failing_on("BTC-USD");
        let resolver = QuoteResolver::new(&source, currencies());

        let err = resolver
            .resolve(&Symbol::new("BTC"), QuoteMode::Current)
            .expect_err("failure should abort");

        assert!(matches!(err, AppError::Message(_)));
        assert_eq!(source.calls(), vec!["ticker BTC-USD"]);
    }
}
