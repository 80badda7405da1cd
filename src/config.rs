//! Field configuration
//!
//! Handles the settings of the password field validators.

use thiserror::Error;

/// Minimum length used when `PWD_MIN_LENGTH` is not set.
pub const DEFAULT_MIN_LENGTH: usize = 8;

const MIN_LENGTH_VAR: &str = "PWD_MIN_LENGTH";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid minimum password length: {0:?}")]
    InvalidMinLength(String),
}

/// Settings for [`PasswordField`](crate::PasswordField) validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldConfig {
    /// Minimum number of characters accepted by the length validator.
    pub min_length: usize,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
        }
    }
}

impl FieldConfig {
    /// Builds the configuration from the environment.
    ///
    /// Priority:
    /// 1. Environment variable `PWD_MIN_LENGTH`
    /// 2. Default of 8 characters
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidMinLength`] if the variable is set but
    /// is not a positive integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(MIN_LENGTH_VAR) {
            Ok(raw) => {
                let min_length = parse_min_length(&raw)?;
                #[cfg(feature = "tracing")]
                tracing::info!("Password minimum length set to {} from environment", min_length);
                Ok(Self { min_length })
            }
            Err(_) => Ok(Self::default()),
        }
    }
}

fn parse_min_length(raw: &str) -> Result<usize, ConfigError> {
    match raw.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => {
            #[cfg(feature = "tracing")]
            tracing::warn!("Rejected {}={:?}", MIN_LENGTH_VAR, raw);
            Err(ConfigError::InvalidMinLength(raw.to_string()))
        }
    }
}
