//! Plain-data model of the current account card.
//!
//! Everything the card shows is decided here; the component only turns it
//! into markup.

use crate::formatters::{format_reset_tooltip, format_time_remaining};
use crate::i18n::{keys, Catalog};
use antigravity_types::{format_model_name, Account, ModelQuota, QuotaAppearance};
use chrono::{DateTime, Local, Utc};

/// What the current account card displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountSummary {
    /// No account is active.
    Empty { header: String, message: String },
    /// An account is active.
    Active {
        header: String,
        email: String,
        rows: Vec<QuotaRow>,
        /// Label of the switch control, `None` when no handler was supplied.
        switch_label: Option<String>,
    },
}

/// One model's quota line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuotaRow {
    /// List key, "{position}:{model name}"; unique even when a model repeats
    pub key: String,
    pub display_name: String,
    /// "R: 2h 15m", or the localized unknown label
    pub reset_label: String,
    pub reset_tooltip: Option<String>,
    /// "42%"
    pub percentage_label: String,
    /// CSS width of the bar fill, "42%"
    pub fill_width: String,
    pub appearance: QuotaAppearance,
}

impl AccountSummary {
    pub fn build(
        account: Option<&Account>,
        i18n: &Catalog,
        now: DateTime<Utc>,
        can_switch: bool,
    ) -> Self {
        let header = i18n.t(keys::CURRENT_ACCOUNT);
        let Some(account) = account else {
            return Self::Empty { header, message: i18n.t(keys::NO_ACTIVE_ACCOUNT) };
        };

        Self::Active {
            header,
            email: account.email.clone(),
            rows: account
                .quota_models()
                .iter()
                .enumerate()
                .map(|(position, m)| QuotaRow::build(position, m, i18n, now))
                .collect(),
            switch_label: can_switch.then(|| i18n.t(keys::SWITCH_ACCOUNT)),
        }
    }

    #[cfg(test)]
    fn rows(&self) -> &[QuotaRow] {
        match self {
            Self::Empty { .. } => &[],
            Self::Active { rows, .. } => rows.as_slice(),
        }
    }
}

impl QuotaRow {
    pub fn build(position: usize, model: &ModelQuota, i18n: &Catalog, now: DateTime<Utc>) -> Self {
        let (reset_label, reset_tooltip) = match model.reset_time {
            Some(reset_at) => (
                format!("R: {}", format_time_remaining(reset_at, now)),
                Some(format_reset_tooltip(&i18n.t(keys::RESET_TIME), reset_at, &Local)),
            ),
            None => (i18n.t(keys::UNKNOWN), None),
        };

        Self {
            key: format!("{}:{}", position, model.name),
            display_name: format_model_name(&model.name),
            reset_label,
            reset_tooltip,
            percentage_label: format!("{}%", model.percentage),
            fill_width: format!("{}%", model.percentage),
            appearance: QuotaAppearance::for_model(&model.name, model.percentage),
        }
    }
}
