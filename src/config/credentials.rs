use crate::utils::error::{ExportError, Result};
use std::env;

pub const API_KEY_ENV: &str = "STRIPE_SECRET_KEY";

/// Reads the Stripe secret key from `STRIPE_SECRET_KEY`.
pub fn load_api_key() -> Result<String> {
    load_api_key_from(API_KEY_ENV)
}

pub fn load_api_key_from(var_name: &str) -> Result<String> {
    match env::var(var_name) {
        Ok(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(ExportError::MissingConfigError {
            field: var_name.to_string(),
        }),
    }
}

/// Loads `.env` from the working directory or one of its parents.
/// Variables already present in the environment are not overridden.
pub fn load_dotenv() {
    match dotenv::dotenv() {
        Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => tracing::debug!("No .env file found"),
        Err(e) => tracing::warn!("Ignoring unreadable .env file: {}", e),
    }
}
