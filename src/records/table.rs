use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::quotes::{QuoteBatch, QuoteMode};
use crate::utils::format_cell_timestamp;

const CURRENT_HEADERS: [&str; 4] = ["currency", "price", "quote_currency", "timestamp"];
const HISTORIC_HEADERS: [&str; 4] = ["currency", "price", "quote_currency", "date"];

/// One line of the output table. `price` is `None` for a symbol without a quote.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteRow {
    pub currency: String,
    pub price: Option<Decimal>,
    pub quote_currency: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
}

/// Row-per-symbol view of a finished batch.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteTable {
    mode: QuoteMode,
    rows: Vec<QuoteRow>,
}

impl QuoteTable {
    /// Flatten the batch in key order. No filtering or sorting beyond that.
    pub fn from_batch(batch: &QuoteBatch, mode: QuoteMode) -> Self {
        let rows = batch
            .iter()
            .map(|(symbol, quote)| QuoteRow {
                currency: symbol.to_string(),
                price: quote.as_ref().map(|q| q.price),
                quote_currency: quote.as_ref().map(|q| q.quote_currency.clone()),
                timestamp: quote.as_ref().and_then(|q| q.time),
            })
            .collect();

        Self { mode, rows }
    }

    pub fn mode(&self) -> QuoteMode {
        self.mode
    }

    pub fn rows(&self) -> &[QuoteRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn headers(&self) -> [&'static str; 4] {
        match self.mode {
            QuoteMode::Current => CURRENT_HEADERS,
            QuoteMode::Historic(_) => HISTORIC_HEADERS,
        }
    }

    /// Rows as CSV cells. Missing values render as empty cells.
    pub fn records(&self) -> impl Iterator<Item = [String; 4]> + '_ {
        self.rows.iter().map(move |row| {
            [
                row.currency.clone(),
                row.price.map(|price| price.to_string()).unwrap_or_default(),
                row.quote_currency.clone().unwrap_or_default(),
                self.time_cell(row),
            ]
        })
    }

    /// First timestamp found scanning rows in order.
    pub fn first_timestamp(&self) -> Option<DateTime<Utc>> {
        self.rows.iter().find_map(|row| row.timestamp)
    }

    fn time_cell(&self, row: &QuoteRow) -> String {
        match self.mode {
            QuoteMode::Current => row
                .timestamp
                .as_ref()
                .map(format_cell_timestamp)
                .unwrap_or_default(),
            QuoteMode::Historic(date) => date_label(date),
        }
    }
}

fn date_label(date: NaiveDate) -> String {
    date.format(crate::utils::time::DATE_FORMAT).to_string()
}
