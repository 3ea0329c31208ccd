use chrono::{DateTime, Utc};

/// Format how long ago the project index was synced.
///
/// Ages within the session stay relative ("just now", "12m ago", "3h ago");
/// anything a day or older falls back to the day-precision date the history
/// timeline uses ("2024-06-05").
pub fn format_sync_age(synced_at: &DateTime<Utc>) -> String {
    format_sync_age_at(synced_at, &Utc::now())
}

fn format_sync_age_at(synced_at: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    // Clock skew can put the sync timestamp in the future; clamp to zero
    let seconds = now.signed_duration_since(*synced_at).num_seconds().max(0);
    let minutes = seconds / 60;
    let hours = minutes / 60;

    if hours >= 24 {
        synced_at.format("%Y-%m-%d").to_string()
    } else if hours > 0 {
        format!("{}h ago", hours)
    } else if minutes > 0 {
        format!("{}m ago", minutes)
    } else {
        "just now".to_string()
    }
}
