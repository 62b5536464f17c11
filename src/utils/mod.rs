pub mod time;

pub use time::{file_timestamp_slug, format_cell_timestamp, quote_mode_from_arg};
