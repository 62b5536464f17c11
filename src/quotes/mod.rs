use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

pub mod batch;
pub mod resolver;
pub mod throttle;

#[cfg(test)]
pub(crate) mod testing;

pub use batch::BatchFetcher;
pub use resolver::QuoteResolver;
pub use throttle::{chunk_count, Pacer, ThreadPacer};

/// Upper-cased ticker symbol. Case is normalised here and nowhere else.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(raw: &str) -> Self {
        Symbol(raw.trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Product identifier of the form `BASE-QUOTE`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradingPair {
    pub base: Symbol,
    pub quote: String,
}

impl TradingPair {
    pub fn new(base: &Symbol, quote: &str) -> Self {
        Self {
            base: base.clone(),
            quote: quote.to_string(),
        }
    }

    pub fn product_id(&self) -> String {
        format!("{}-{}", self.base, self.quote)
    }
}

impl fmt::Display for TradingPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.base, self.quote)
    }
}

/// Whether a run asks for the live price or the close of a past day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteMode {
    Current,
    Historic(NaiveDate),
}

impl QuoteMode {
    pub fn target_date(&self) -> Option<NaiveDate> {
        match self {
            QuoteMode::Current => None,
            QuoteMode::Historic(date) => Some(*date),
        }
    }
}

/// A resolved price for one symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub price: Decimal,
    pub quote_currency: String,
    pub time: Option<DateTime<Utc>>,
}

/// Accumulated results of a run. `None` marks a symbol with no quote.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuoteBatch {
    entries: BTreeMap<Symbol, Option<Quote>>,
}

impl QuoteBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite; repeated symbols keep the last result.
    pub fn insert(&mut self, symbol: Symbol, quote: Option<Quote>) {
        self.entries.insert(symbol, quote);
    }

    pub fn extend(&mut self, other: QuoteBatch) {
        self.entries.extend(other.entries);
    }

    pub fn get(&self, symbol: &Symbol) -> Option<&Option<Quote>> {
        self.entries.get(symbol)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn unresolved(&self) -> usize {
        self.entries.values().filter(|quote| quote.is_none()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, &Option<Quote>)> {
        self.entries.iter()
    }
}
