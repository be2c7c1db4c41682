//! Display Formatting

use chrono::{DateTime, FixedOffset};

/// `YYYY-MM-DD HH:mm:ss`, 24-hour clock, in the offset the server sent
pub fn format_datetime(value: &DateTime<FixedOffset>) -> String {
    value.format("%Y-%m-%d %H:%M:%S").to_string()
}
