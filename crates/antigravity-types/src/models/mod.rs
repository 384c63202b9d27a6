//! Core domain models for the dashboard.

mod account;
mod model_family;
mod model_name;
mod quota;
mod tier;
mod ui_config;

// Re-export all models
pub use account::Account;
pub use model_family::ModelFamily;
pub use model_name::format_model_name;
pub use quota::{ModelQuota, QuotaData};
pub use tier::{QuotaAppearance, QuotaTier};
pub use ui_config::UiConfig;
