pub mod symbols;
pub mod table;
pub mod writer;

pub use symbols::{load_symbols, parse_symbols};
pub use table::{QuoteRow, QuoteTable};
pub use writer::{output_filename, write_table};
