//! Reusable UI components

mod button;
mod quota_bar;

pub use button::{Button, ButtonVariant};
pub use quota_bar::{fill_class, value_class, QuotaBar};
