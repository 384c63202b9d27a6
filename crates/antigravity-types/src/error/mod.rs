//! Typed error definitions for the dashboard.
//!
//! All errors are designed to be:
//!
//! - **Serializable** so the host shell can inspect them
//! - **Displayable** for logging via Display trait
//! - **Matchable** for error handling logic via enum variants

mod config;
mod locale;

pub use config::ConfigError;
pub use locale::LocaleError;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type that wraps all domain-specific errors.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "domain", content = "error")]
pub enum TypedError {
    /// Wraps a localization error
    #[error("Locale error: {0}")]
    Locale(#[from] LocaleError),

    /// Wraps a configuration or payload error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Standard Result type using TypedError.
pub type Result<T> = std::result::Result<T, TypedError>;
