use hmac::{Hmac, Mac};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use sha2::Sha256;

use crate::config::Credentials;
use crate::error::{AppError, Context, Result};

type HmacSha256 = Hmac<Sha256>;

const ACCESS_KEY: &str = "cb-access-key";
const ACCESS_SIGN: &str = "cb-access-sign";
const ACCESS_TIMESTAMP: &str = "cb-access-timestamp";
const API_VERSION: &str = "cb-version";

/// Hex HMAC-SHA256 over `timestamp + method + request_path + body`.
pub fn sign(
    secret: &str,
    timestamp: i64,
    method: &str,
    request_path: &str,
    body: &str,
) -> Result<String> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|_| AppError::Credentials("api_secret cannot be used as an HMAC key".into()))?;
    mac.update(format!("{timestamp}{}{request_path}{body}", method.to_uppercase()).as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Headers authenticating a single request with an API key pair.
pub fn signed_headers(
    credentials: &Credentials,
    api_version: &str,
    timestamp: i64,
    method: &str,
    request_path: &str,
) -> Result<HeaderMap> {
    let signature = sign(&credentials.api_secret, timestamp, method, request_path, "")?;

    let mut headers = HeaderMap::new();
    for (name, value) in [
        (ACCESS_KEY, credentials.api_key.clone()),
        (ACCESS_SIGN, signature),
        (ACCESS_TIMESTAMP, timestamp.to_string()),
        (API_VERSION, api_version.to_string()),
    ] {
        let header_value = HeaderValue::from_str(&value)
            .with_context(|| format!("Invalid header value for {}", name))?;
        headers.insert(HeaderName::from_static(name), header_value);
    }

    Ok(headers)
}
