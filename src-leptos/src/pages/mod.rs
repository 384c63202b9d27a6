//! Page components

mod dashboard;

pub use dashboard::summary::{AccountSummary, QuotaRow};
pub use dashboard::Dashboard;
