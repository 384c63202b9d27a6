//! Quota data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Model quota information.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModelQuota {
    /// Model name
    pub name: String,
    /// Remaining percentage (0-100, not clamped)
    pub percentage: i32,
    /// Time when quota resets, `None` when unknown
    #[serde(default, deserialize_with = "deserialize_reset_time")]
    pub reset_time: Option<DateTime<Utc>>,
}

impl ModelQuota {
    /// Create a quota entry.
    pub fn new(name: impl Into<String>, percentage: i32, reset_time: Option<DateTime<Utc>>) -> Self {
        Self { name: name.into(), percentage, reset_time }
    }
}

/// The backend reports an unknown reset time as `""`; treat that, `null`, and
/// anything that is not RFC 3339 as absent.
fn deserialize_reset_time<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().map(str::trim).filter(|s| !s.is_empty()).and_then(|s| {
        DateTime::parse_from_rfc3339(s).map(|dt| dt.with_timezone(&Utc)).ok()
    }))
}

/// Aggregated quota data for an account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct QuotaData {
    /// Per-model quota information, in display order
    #[serde(default)]
    pub models: Vec<ModelQuota>,
    /// Last time quota was updated
    #[serde(default)]
    pub last_updated: i64,
    /// Whether the account is in forbidden state
    #[serde(default)]
    pub is_forbidden: bool,
    /// Subscription tier (FREE/PRO/ULTRA)
    #[serde(default)]
    pub subscription_tier: Option<String>,
}

impl QuotaData {
    /// Create empty quota data stamped with the current time.
    pub fn new() -> Self {
        Self { last_updated: Utc::now().timestamp(), ..Self::default() }
    }

    /// Add a model quota entry.
    pub fn add_model(
        &mut self,
        name: impl Into<String>,
        percentage: i32,
        reset_time: Option<DateTime<Utc>>,
    ) {
        self.models.push(ModelQuota::new(name, percentage, reset_time));
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn parse(json: &str) -> ModelQuota {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_reset_time_rfc3339() {
        let quota = parse(r#"{"name": "g", "percentage": 10, "reset_time": "2026-01-19T05:30:00Z"}"#);
        assert_eq!(quota.reset_time, Some(Utc.with_ymd_and_hms(2026, 1, 19, 5, 30, 0).unwrap()));
    }

    #[test]
    fn test_reset_time_with_offset_is_normalized() {
        let quota =
            parse(r#"{"name": "g", "percentage": 10, "reset_time": "2026-01-19T08:30:00+03:00"}"#);
        assert_eq!(quota.reset_time, Some(Utc.with_ymd_and_hms(2026, 1, 19, 5, 30, 0).unwrap()));
    }

    #[test]
    fn test_reset_time_absent_forms() {
        assert_eq!(parse(r#"{"name": "g", "percentage": 1}"#).reset_time, None);
        assert_eq!(parse(r#"{"name": "g", "percentage": 1, "reset_time": null}"#).reset_time, None);
        assert_eq!(parse(r#"{"name": "g", "percentage": 1, "reset_time": ""}"#).reset_time, None);
        assert_eq!(parse(r#"{"name": "g", "percentage": 1, "reset_time": "4h 30m"}"#).reset_time, None);
    }

    #[test]
    fn test_out_of_range_percentage_is_kept() {
        assert_eq!(parse(r#"{"name": "g", "percentage": 140}"#).percentage, 140);
        assert_eq!(parse(r#"{"name": "g", "percentage": -5}"#).percentage, -5);
    }

    #[test]
    fn test_add_model_preserves_order() {
        let mut quota = QuotaData::new();
        quota.add_model("claude-sonnet-4-5", 50, None);
        quota.add_model("gemini-3-flash", 15, None);

        let names: Vec<_> = quota.models.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["claude-sonnet-4-5", "gemini-3-flash"]);
    }
}
