use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::quotes::QuoteMode;

/// Date format accepted on the command line.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Timestamp embedded in output filenames.
pub const FILE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H%M_%S";
/// Timestamp written into CSV cells.
pub const CELL_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Map the optional `--date` argument onto a quote mode. Anything that does
/// not parse as `YYYY-MM-DD` falls back to current quotes.
pub fn quote_mode_from_arg(date: Option<&str>) -> QuoteMode {
    let Some(raw) = date.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return QuoteMode::Current;
    };

    match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        Ok(date) => QuoteMode::Historic(date),
        Err(err) => {
            log::warn!(
                "ignoring date `{}` ({}); fetching current quotes instead",
                raw,
                err
            );
            QuoteMode::Current
        }
    }
}

pub fn file_timestamp_slug(as_of: NaiveDateTime) -> String {
    as_of.format(FILE_TIMESTAMP_FORMAT).to_string()
}

pub fn format_cell_timestamp(time: &DateTime<Utc>) -> String {
    time.format(CELL_TIMESTAMP_FORMAT).to_string()
}
