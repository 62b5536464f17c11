use std::fs;
use std::path::Path;

use crate::error::{Context, Result};

/// Read one ticker per line. Order, case and duplicates are kept as written;
/// blank lines and `#` comments are skipped.
pub fn load_symbols(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read symbol list at {}", path.display()))?;

    Ok(parse_symbols(&contents))
}

pub fn parse_symbols(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| line.to_string())
        .collect()
}
