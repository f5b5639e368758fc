//! Relative timestamp formatting for feed display

use chrono::{DateTime, Utc};

/// Format a creation timestamp relative to `now`
///
/// Mirrors the feed display buckets: under a minute is "Just now", then
/// minutes, hours, and days. Timestamps in the future also render "Just now".
#[must_use]
pub fn time_ago(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - created_at).num_seconds();
    if seconds < 60 {
        return "Just now".to_string();
    }
    let minutes = seconds / 60;
    if minutes < 60 {
        return format!("{minutes}m ago");
    }
    let hours = minutes / 60;
    if hours < 24 {
        return format!("{hours}h ago");
    }
    format!("{}d ago", hours / 24)
}
