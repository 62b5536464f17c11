use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::StatusCode;

use crate::config::ExchangeConfig;
use crate::error::{AppError, Context};

use super::FetchResult;

pub fn build_client(cfg: &ExchangeConfig) -> FetchResult<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(
        USER_AGENT,
        HeaderValue::from_str(&cfg.user_agent)
            .with_context(|| format!("Invalid user agent: {}", cfg.user_agent))?,
    );

    Ok(Client::builder()
        .timeout(cfg.timeout)
        .default_headers(headers)
        .build()
        .context("Failed to construct blocking HTTP client")?)
}

/// Join a base URL and an absolute path without doubling the slash.
pub fn endpoint(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Whether a response with `status` carries a body worth decoding: `false` for
/// 404 (the product does not exist), an error for any other non-success status.
pub fn body_disposition(status: StatusCode, what: &str) -> FetchResult<bool> {
    if status == StatusCode::NOT_FOUND {
        log::debug!("{} not found ({})", what, status);
        return Ok(false);
    }

    if !status.is_success() {
        return Err(AppError::message(format!(
            "Request for {} failed with status {}",
            what, status
        )));
    }

    Ok(true)
}

/// Read the body of a response, mapping 404 to `None` and any other
/// non-success status to an error.
pub fn read_optional_body(response: Response, what: &str) -> FetchResult<Option<String>> {
    if !body_disposition(response.status(), what)? {
        return Ok(None);
    }

    let body = response
        .text()
        .with_context(|| format!("Failed to read response body for {}", what))?;
    Ok(Some(body))
}
