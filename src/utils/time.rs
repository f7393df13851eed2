//! Time utilities for hit timestamps

use chrono::Utc;
use std::time::Duration;

/// Current wall-clock time in milliseconds since the Unix epoch
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Convert a duration to whole milliseconds, saturating at `i64::MAX`
pub fn duration_millis(duration: Duration) -> i64 {
    i64::try_from(duration.as_millis()).unwrap_or(i64::MAX)
}

/// Short human-readable label for a window, e.g. `5s` or `1m 30s`
pub fn window_title(duration: Duration) -> String {
    humantime::format_duration(duration).to_string()
}
