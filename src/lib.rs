//! Password strength classification library
//!
//! This library classifies a password into a strength category by the
//! character classes it contains: letters, digits and symbols.
//!
//! # Features
//!
//! - `async` (default): Enables the field watcher and channel-based classification
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_MIN_LENGTH`: Minimum length for field validation (default: `8`)
//!
//! # Example
//!
//! ```rust
//! use pwd_meter::{classify, normalize, FieldConfig, PasswordField, Strength};
//!
//! assert_eq!(classify("abc123!@#"), Strength::Strong);
//! assert_eq!(normalize("pass "), "pass");
//!
//! let mut field = PasswordField::new(FieldConfig::default());
//! let update = field.set_value("abc123 ");
//! assert_eq!(update.strength, Strength::Medium);
//! println!("Strength: {}", update.strength);
//! ```

// Internal modules
mod classes;
mod classifier;
mod config;
mod field;
mod normalize;
mod rules;
mod strength;

#[cfg(feature = "async")]
mod watcher;

// Public API
pub use classes::CharacterClassSignals;
pub use classifier::{classify, classify_secret};
pub use config::{ConfigError, DEFAULT_MIN_LENGTH, FieldConfig};
pub use field::{FieldError, FieldUpdate, PasswordField};
pub use normalize::normalize;
pub use strength::{ParseStrengthError, Strength};

#[cfg(feature = "async")]
pub use classifier::classify_tx;

#[cfg(feature = "async")]
pub use watcher::watch_password_field;
