//! Configuration for the phone entry form.
//!
//! All values have sensible defaults; `from_env` overrides them from
//! `PHONE_FORM_*` environment variables (a `.env` file is honored when
//! present).

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::time::Duration;

/// Tunable parameters of the form controller.
#[derive(Debug, Clone)]
pub struct FormConfig {
    /// Country code the form starts with (default: "+7")
    pub initial_country_code: String,

    /// Maximum number of country-code digits shown before the text is
    /// offered to the phone parser (default: 5)
    pub max_country_code_digits: usize,

    /// Maximum number of send attempts per submission, including the
    /// first one (default: 3)
    pub max_send_attempts: u32,

    /// Base pause between failed send attempts; grows linearly with the
    /// attempt number (default: 500 ms)
    pub retry_backoff: Duration,
}

impl FormConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `PHONE_FORM_INITIAL_COUNTRY_CODE`: starting country code (default: "+7")
    /// - `PHONE_FORM_MAX_SEND_ATTEMPTS`: send attempts per submission (default: 3)
    /// - `PHONE_FORM_RETRY_BACKOFF_MS`: base retry pause in milliseconds (default: 500)
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        let initial_country_code = env::var("PHONE_FORM_INITIAL_COUNTRY_CODE")
            .unwrap_or(defaults.initial_country_code);

        if !initial_country_code.starts_with('+')
            || initial_country_code.len() < 2
            || !initial_country_code[1..].chars().all(|c| c.is_ascii_digit())
        {
            return Err(ConfigError::InvalidValue {
                var: "PHONE_FORM_INITIAL_COUNTRY_CODE".to_string(),
                reason: "Must be a plus sign followed by digits".to_string(),
            });
        }

        let max_send_attempts =
            Self::parse_env_u32("PHONE_FORM_MAX_SEND_ATTEMPTS", defaults.max_send_attempts)?;
        if max_send_attempts == 0 {
            return Err(ConfigError::InvalidValue {
                var: "PHONE_FORM_MAX_SEND_ATTEMPTS".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let backoff_ms = Self::parse_env_u64(
            "PHONE_FORM_RETRY_BACKOFF_MS",
            defaults.retry_backoff.as_millis() as u64,
        )?;

        Ok(FormConfig {
            initial_country_code,
            max_country_code_digits: defaults.max_country_code_digits,
            max_send_attempts,
            retry_backoff: Duration::from_millis(backoff_ms),
        })
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        FormConfig {
            initial_country_code: "+7".to_string(),
            max_country_code_digits: 5,
            max_send_attempts: 3,
            retry_backoff: Duration::from_millis(500),
        }
    }
}
