//! Utility functions for formatting and display
#![allow(
    clippy::integer_division,
    clippy::modulo_arithmetic,
    clippy::arithmetic_side_effects,
    reason = "duration breakdown requires integer division and modulo"
)]

use chrono::{DateTime, TimeZone, Utc};
use std::fmt::Display;

/// Format the time left until `target` as seen from `now`.
///
/// - Already passed -> "0h 0m"
/// - Under a day -> "2h 15m"
/// - A day or more -> "1d 3h"
pub fn format_time_remaining(target: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = target.signed_duration_since(now);

    if diff.num_milliseconds() <= 0 {
        return "0h 0m".to_string();
    }

    let total_minutes = diff.num_minutes();
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    if hours >= 24 {
        let days = hours / 24;
        let remaining_hours = hours % 24;
        format!("{}d {}h", days, remaining_hours)
    } else {
        format!("{}h {}m", hours, minutes)
    }
}

/// Tooltip text for a reset indicator, with the timestamp shown in `tz`.
pub fn format_reset_tooltip<Tz>(label: &str, target: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!("{}: {}", label, target.with_timezone(tz).format("%Y-%m-%d %H:%M:%S"))
}
