//! # Antigravity Types
//!
//! Account, quota and display models shared by the Antigravity dashboard.
//!
//! - **`error`** - Typed error hierarchy for localization and configuration
//! - **`models`** - Domain models (Account, Quota, UI config) and the display
//!   helpers derived from them (model names, quota tiers)
//!
//! ## Architecture Role
//!
//! ```text
//!        antigravity-types (this crate)
//!                  │
//!                  ▼
//!        antigravity-dashboard (Leptos)
//! ```
//!
//! Everything here is plain Rust with no browser dependency, so the display
//! rules can be unit tested natively.

pub mod error;
pub mod models;

// Re-export error types for convenience
pub use error::{ConfigError, LocaleError, Result, TypedError};

// Re-export core model types
pub use models::{
    format_model_name, Account, ModelFamily, ModelQuota, QuotaAppearance, QuotaData, QuotaTier,
    UiConfig,
};
