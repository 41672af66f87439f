use chrono::{DateTime, Local};
use std::path::Path;
use std::time::SystemTime;

/// Round a similarity ratio to two decimal places for reporting
pub fn round_ratio(ratio: f64) -> f64 {
    (ratio * 100.0).round() / 100.0
}

/// Today's local date as `YYYY-MM-DD`
pub fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// Format a timestamp as a local `YYYY-MM-DD` date
pub fn format_date(time: SystemTime) -> String {
    DateTime::<Local>::from(time).format("%Y-%m-%d").to_string()
}

/// Last-modified date of a file, falling back to today when metadata is unavailable
pub fn modified_date(path: &Path) -> String {
    match std::fs::metadata(path).and_then(|m| m.modified()) {
        Ok(time) => format_date(time),
        Err(e) => {
            ::log::debug!("No modification time for {}: {}", path.display(), e);
            today()
        }
    }
}
