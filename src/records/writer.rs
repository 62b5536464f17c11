use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDateTime, NaiveTime, Utc};

use crate::error::{Context, Result};
use crate::quotes::QuoteMode;
use crate::utils::file_timestamp_slug;

use super::table::QuoteTable;

const OUTPUT_PREFIX: &str = "crypto_prices_as_of_";

/// `crypto_prices_as_of_<YYYY-MM-DD_HHMM_SS>.csv`
pub fn output_filename(as_of: NaiveDateTime) -> String {
    format!("{}{}.csv", OUTPUT_PREFIX, file_timestamp_slug(as_of))
}

/// Timestamp that names the output file: the target date at midnight for
/// historic runs, otherwise the first quote's time, otherwise `now`.
pub fn as_of_for(table: &QuoteTable, now: DateTime<Utc>) -> NaiveDateTime {
    match table.mode() {
        QuoteMode::Historic(date) => date.and_time(NaiveTime::MIN),
        QuoteMode::Current => table.first_timestamp().unwrap_or(now).naive_utc(),
    }
}

/// Write the table as CSV under `dir` and return the path written.
pub fn write_table(table: &QuoteTable, dir: &Path, now: DateTime<Utc>) -> Result<PathBuf> {
    let path = dir.join(output_filename(as_of_for(table, now)));

    let mut writer = csv::Writer::from_path(&path)
        .with_context(|| format!("Failed to create CSV writer at {}", path.display()))?;

    writer.write_record(table.headers())?;
    for record in table.records() {
        writer.write_record(&record)?;
    }
    writer.flush()?;

    log::info!("wrote {} rows to {}", table.len(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quotes::{Quote, QuoteBatch, Symbol};
    use chrono::{NaiveDate, TimeZone};
    use std::fs;

    fn batch() -> QuoteBatch {
        let mut batch = QuoteBatch::new();
        batch.insert(
            Symbol::new("BTC"),
            Some(Quote {
                price: "50000.12".parse().unwrap(),
                quote_currency: "USD".to_string(),
                time: Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 15).single(),
            }),
        );
        batch.insert(Symbol::new("XYZ"), None);
        batch
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2030, 12, 31, 23, 59, 58).unwrap()
    }

    #[test]
    fn historic_filename_uses_target_date_at_midnight() {
        let date = NaiveDate::from_ymd_opt(2023, 1, 15).unwrap();
        let table = QuoteTable::from_batch(&batch(), QuoteMode::Historic(date));

        let name = output_filename(as_of_for(&table, now()));

        assert_eq!(name, "crypto_prices_as_of_2023-01-15_0000_00.csv");
    }

    #[test]
    fn current_filename_uses_first_quote_time() {
        let table = QuoteTable::from_batch(&batch(), QuoteMode::Current);

        assert_eq!(
            output_filename(as_of_for(&table, now())),
            "crypto_prices_as_of_2024-03-01_0930_15.csv"
        );
    }

    #[test]
    fn current_filename_falls_back_to_now() {
        let mut only_missing = QuoteBatch::new();
        only_missing.insert(Symbol::new("XYZ"), None);
        let table = QuoteTable::from_batch(&only_missing, QuoteMode::Current);

        assert_eq!(
            output_filename(as_of_for(&table, now())),
            "crypto_prices_as_of_2030-12-31_2359_58.csv"
        );
    }

    #[test]
    fn writes_header_and_rows() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let table = QuoteTable::from_batch(&batch(), QuoteMode::Current);

        let path = write_table(&table, dir.path(), now()).expect("write csv");
        let contents = fs::read_to_string(&path).expect("read csv back");

        assert_eq!(
            contents,
            "currency,price,quote_currency,timestamp\n\
             BTC,50000.12,USD,2024-03-01 09:30:15\n\
             XYZ,,,\n"
        );
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let table = QuoteTable::from_batch(&batch(), QuoteMode::Current);

        let result = write_table(&table, &dir.path().join("nope"), now());

        assert!(result.is_err());
    }
}
