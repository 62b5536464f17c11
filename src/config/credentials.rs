use std::fmt::Debug;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{AppError, Context, Result};

/// API key pair used to sign spot-price requests.
#[derive(Clone, Deserialize)]
pub struct Credentials {
    pub api_key: String,
    pub api_secret: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .finish_non_exhaustive()
    }
}

const EXPECTED_FORMAT: &str = r#"expected JSON like {"api_key": "...", "api_secret": "..."}"#;

/// Read the secrets file. Missing or malformed content is fatal to the caller.
pub fn load_credentials(path: &Path) -> Result<Credentials> {
    let json = fs::read_to_string(path).with_context(|| {
        format!(
            "failed to read secrets file at {} ({})",
            path.display(),
            EXPECTED_FORMAT
        )
    })?;

    let credentials: Credentials = serde_json::from_str(&json).map_err(|err| {
        AppError::Credentials(format!(
            "{} is malformed ({}): {}",
            path.display(),
            EXPECTED_FORMAT,
            err
        ))
    })?;

    if credentials.api_key.trim().is_empty() || credentials.api_secret.trim().is_empty() {
        return Err(AppError::Credentials(format!(
            "{} must provide non-empty api_key and api_secret",
            path.display()
        )));
    }

    Ok(credentials)
}
