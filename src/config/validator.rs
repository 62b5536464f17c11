use crate::error::{AppError, Result};

use super::Config;

/// Validate a loaded configuration and surface every issue at once.
pub fn validate_config(config: &Config) -> Result<()> {
    let mut issues = Vec::new();

    validate_endpoint("exchange.base_url", &config.exchange.base_url, &mut issues);
    validate_endpoint("spot.base_url", &config.spot.base_url, &mut issues);
    validate_quote_currencies(&config.quote_currencies, &mut issues);

    if config.exchange.timeout.is_zero() {
        issues.push("exchange.timeout_secs must be greater than zero".to_string());
    }
    if config.throttle.chunk_size == 0 {
        issues.push("throttle.chunk_size must be greater than zero".to_string());
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(AppError::message(format!(
            "config invalid:\n  - {}",
            issues.join("\n  - ")
        )))
    }
}

fn validate_endpoint(field: &str, url: &str, issues: &mut Vec<String>) {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        issues.push(format!("{field} must not be empty"));
    } else if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
        issues.push(format!("{field} `{trimmed}` must be an http(s) URL"));
    }
}

fn validate_quote_currencies(currencies: &[String], issues: &mut Vec<String>) {
    if currencies.is_empty() {
        issues.push("quote_currencies must list at least one currency".to_string());
        return;
    }

    for code in currencies {
        if code.is_empty() || !code.chars().all(|c| c.is_ascii_alphanumeric()) {
            issues.push(format!("quote currency `{code}` must be alphanumeric"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_builtin_config() {
        validate_config(&Config::builtin()).expect("builtin config should be valid");
    }

    #[test]
    fn aggregates_every_issue() {
        let mut config = Config::builtin();
        config.throttle.chunk_size = 0;
        config.quote_currencies.clear();
        config.spot.base_url = "ftp://example.com".to_string();

        let err = validate_config(&config).expect_err("validation should fail");
        let message = err.to_string();
        assert!(message.contains("chunk_size"), "unexpected error message: {message}");
        assert!(
            message.contains("quote_currencies"),
            "unexpected error message: {message}"
        );
        assert!(message.contains("http(s)"), "unexpected error message: {message}");
    }

    #[test]
    fn rejects_currency_with_separator() {
        let mut config = Config::builtin();
        config.quote_currencies = vec!["USD".to_string(), "US-D".to_string()];

        let err = validate_config(&config).expect_err("validation should fail");
        assert!(
            err.to_string().contains("`US-D`"),
            "unexpected error message: {}",
            err
        );
    }
}
