//! Quota tiering used to color remaining-quota indicators.

use super::ModelFamily;

/// Percentage at or above which a model counts as healthy.
const HEALTHY_THRESHOLD: i32 = 50;
/// Percentage at or above which a model counts as warning (below healthy).
const WARNING_THRESHOLD: i32 = 20;

/// Remaining-quota tier derived from a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuotaTier {
    /// 50% or more remaining
    Healthy,
    /// 20% up to 50% remaining
    Warning,
    /// Under 20% remaining
    Critical,
}

impl QuotaTier {
    /// Classify a remaining percentage. Values outside 0-100 are not rejected.
    pub const fn from_percentage(percentage: i32) -> Self {
        if percentage >= HEALTHY_THRESHOLD {
            Self::Healthy
        } else if percentage >= WARNING_THRESHOLD {
            Self::Warning
        } else {
            Self::Critical
        }
    }
}

/// Tier plus the per-family sub-variant used for styling.
///
/// Healthy and warning tiers distinguish Claude models from everything else;
/// critical looks the same for every model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuotaAppearance {
    /// Healthy tier, Claude model
    HealthyClaude,
    /// Healthy tier, any other model
    HealthyGeneric,
    /// Warning tier, Claude model
    WarningClaude,
    /// Warning tier, any other model
    WarningGeneric,
    /// Critical tier, every model
    Critical,
}

impl QuotaAppearance {
    /// Pick the appearance for a model's quota row.
    pub fn for_model(name: &str, percentage: i32) -> Self {
        let claude = ModelFamily::from_model_name(name).is_claude();
        match (QuotaTier::from_percentage(percentage), claude) {
            (QuotaTier::Healthy, true) => Self::HealthyClaude,
            (QuotaTier::Healthy, false) => Self::HealthyGeneric,
            (QuotaTier::Warning, true) => Self::WarningClaude,
            (QuotaTier::Warning, false) => Self::WarningGeneric,
            (QuotaTier::Critical, _) => Self::Critical,
        }
    }

    /// The tier this appearance belongs to.
    pub const fn tier(self) -> QuotaTier {
        match self {
            Self::HealthyClaude | Self::HealthyGeneric => QuotaTier::Healthy,
            Self::WarningClaude | Self::WarningGeneric => QuotaTier::Warning,
            Self::Critical => QuotaTier::Critical,
        }
    }

    /// Stable kebab-case name, used to build CSS class modifiers.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HealthyClaude => "healthy-claude",
            Self::HealthyGeneric => "healthy-generic",
            Self::WarningClaude => "warning-claude",
            Self::WarningGeneric => "warning-generic",
            Self::Critical => "critical",
        }
    }
}
