use secrecy::{ExposeSecret, Secret};
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::time::Duration;
use thiserror::Error;

/// Value shipped in the sample `.env`; never a real key.
pub const API_KEY_PLACEHOLDER: &str = "your_api_key_here";

/// Google API keys start with this prefix.
const API_KEY_PREFIX: &str = "AI";

/// Keys at or below this length are rejected as truncated.
const API_KEY_MIN_LEN: usize = 20;

const DEFAULT_MODEL: &str = "gemini-2.0-flash";
const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub common: core_config::Config,
    pub gemini: GeminiSettings,
}

#[derive(Debug, Clone)]
pub struct GeminiSettings {
    pub api_key: Secret<String>,
    /// Model used for every route (e.g., gemini-2.0-flash)
    pub model: String,
    pub api_base: String,
    /// Upper bound on a single model call
    pub timeout: Duration,
}

/// Why a configured API key was refused.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiKeyError {
    #[error("GEMINI_API_KEY is not set")]
    Missing,

    #[error("GEMINI_API_KEY is still set to the placeholder value")]
    Placeholder,

    #[error("GEMINI_API_KEY does not look like a Google API key (expected prefix 'AI')")]
    UnexpectedPrefix,

    #[error("GEMINI_API_KEY is too short ({0} characters)")]
    TooShort(usize),
}

impl ServiceConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;
        let gemini = GeminiSettings::from_vars(|key| env::var(key).ok())?;

        tracing::info!(
            port = common.port,
            model = %gemini.model,
            timeout_secs = gemini.timeout.as_secs(),
            "Configuration loaded"
        );

        Ok(ServiceConfig { common, gemini })
    }
}

impl GeminiSettings {
    /// Build from a variable lookup, rejecting unusable keys up front.
    pub fn from_vars<F>(var: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = var("GEMINI_API_KEY").unwrap_or_default().trim().to_string();
        validate_api_key(&api_key).map_err(|e| AppError::ConfigError(anyhow::Error::new(e)))?;

        let timeout_secs = match var("GEMINI_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| {
                    AppError::ConfigError(anyhow::anyhow!(
                        "GEMINI_TIMEOUT_SECS must be a positive integer, got '{}'",
                        raw
                    ))
                })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(GeminiSettings {
            api_key: Secret::new(api_key),
            model: var_or(&var, "GEMINI_MODEL", DEFAULT_MODEL),
            api_base: var_or(&var, "GEMINI_API_BASE", DEFAULT_API_BASE),
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

fn var_or<F>(var: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    var(key)
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Heuristic sanity check on a Gemini API key.
pub fn validate_api_key(key: &str) -> Result<(), ApiKeyError> {
    let key = key.trim();

    if key.is_empty() {
        return Err(ApiKeyError::Missing);
    }
    if key == API_KEY_PLACEHOLDER {
        return Err(ApiKeyError::Placeholder);
    }
    if !key.starts_with(API_KEY_PREFIX) {
        return Err(ApiKeyError::UnexpectedPrefix);
    }
    if key.len() <= API_KEY_MIN_LEN {
        return Err(ApiKeyError::TooShort(key.len()));
    }

    Ok(())
}
