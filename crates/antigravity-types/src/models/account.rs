//! Account model as seen by the dashboard.

use super::{ModelQuota, QuotaData};
use serde::{Deserialize, Serialize};

/// The user's connected account whose quotas are displayed.
///
/// The backend's account record carries tokens and proxy state as well; those
/// fields are ignored on deserialization because the dashboard never reads them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Account {
    /// Unique identifier for the account
    #[serde(default)]
    pub id: String,
    /// Email address associated with the account
    pub email: String,
    /// Optional display name
    #[serde(default)]
    pub name: Option<String>,
    /// Current quota information
    #[serde(default)]
    pub quota: Option<QuotaData>,
}

impl Account {
    /// Create an account with no quota information.
    pub fn new(id: impl Into<String>, email: impl Into<String>) -> Self {
        Self { id: id.into(), email: email.into(), name: None, quota: None }
    }

    /// Attach quota data.
    pub fn with_quota(mut self, quota: QuotaData) -> Self {
        self.quota = Some(quota);
        self
    }

    /// Per-model quota entries, empty when no quota has been fetched yet.
    pub fn quota_models(&self) -> &[ModelQuota] {
        self.quota.as_ref().map(|q| q.models.as_slice()).unwrap_or_default()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_quota_models_without_quota() {
        let account = Account::new("a1", "dev@example.com");
        assert!(account.quota_models().is_empty());
    }

    #[test]
    fn test_quota_models_with_empty_quota() {
        let account = Account::new("a1", "dev@example.com").with_quota(QuotaData::default());
        assert!(account.quota_models().is_empty());
    }

    #[test]
    fn test_deserialize_ignores_backend_fields() {
        let json = r#"{
            "id": "acc-1",
            "email": "dev@example.com",
            "token": {"access_token": "x"},
            "disabled": false,
            "created_at": 0,
            "quota": {"models": [{"name": "claude-opus-4", "percentage": 80, "reset_time": ""}], "last_updated": 0}
        }"#;

        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.email, "dev@example.com");
        assert_eq!(account.quota_models().len(), 1);
        assert_eq!(account.quota_models()[0].reset_time, None);
    }

    #[test]
    fn test_deserialize_minimal() {
        let account: Account = serde_json::from_str(r#"{"email": "a@b.c"}"#).unwrap();
        assert_eq!(account.id, "");
        assert!(account.quota.is_none());
    }
}
