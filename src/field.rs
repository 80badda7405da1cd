//! Password field state.
//!
//! Holds the current value of a password input, normalizes every edit
//! and keeps the strength verdict up to date.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::classifier::classify;
use crate::config::FieldConfig;
use crate::normalize::normalize;
use crate::strength::Strength;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("Password is required")]
    Required,
    #[error("Password must be at least {required} characters (got {actual})")]
    MinLength { required: usize, actual: usize },
}

/// Outcome of one edit of the field.
#[derive(Debug)]
pub struct FieldUpdate {
    /// Normalized value now held by the field.
    pub value: SecretString,
    /// Whether normalization removed a trailing space from the edit.
    pub trimmed: bool,
    pub strength: Strength,
}

#[derive(Debug)]
pub struct PasswordField {
    config: FieldConfig,
    value: SecretString,
    strength: Strength,
}

impl Default for PasswordField {
    fn default() -> Self {
        Self::new(FieldConfig::default())
    }
}

impl PasswordField {
    pub fn new(config: FieldConfig) -> Self {
        Self {
            config,
            value: SecretString::new(String::new().into()),
            strength: Strength::Empty,
        }
    }

    /// Applies an edit: normalizes `raw`, stores it and reclassifies.
    pub fn set_value(&mut self, raw: &str) -> FieldUpdate {
        let value = normalize(raw);
        let trimmed = value.len() != raw.len();
        let strength = classify(&value);

        self.value = SecretString::new(value.clone().into());
        self.strength = strength;

        FieldUpdate {
            value: SecretString::new(value.into()),
            trimmed,
            strength,
        }
    }

    pub fn value(&self) -> &SecretString {
        &self.value
    }

    pub fn strength(&self) -> Strength {
        self.strength
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Length of the current value in UTF-16 code units.
    ///
    /// Characters outside the Basic Multilingual Plane, such as most
    /// emoji, count as two.
    pub fn len(&self) -> usize {
        self.value.expose_secret().encode_utf16().count()
    }

    pub fn is_empty(&self) -> bool {
        self.value.expose_secret().is_empty()
    }

    /// Runs the required and minimum length validators, in that order.
    pub fn validate(&self) -> Result<(), FieldError> {
        if self.is_empty() {
            return Err(FieldError::Required);
        }

        let actual = self.len();
        if actual < self.config.min_length {
            return Err(FieldError::MinLength {
                required: self.config.min_length,
                actual,
            });
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}
