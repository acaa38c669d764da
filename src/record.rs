use chrono::{DateTime, Local, Timelike};
use serde::Serialize;

/// One captured event. Built fresh on every logging call and dropped as
/// soon as it has been written out; nothing in this crate stores records.
#[derive(Debug, Clone, Serialize)]
pub struct EventRecord {
    pub label: String,
    pub timestamp: DateTime<Local>,
    pub formatted: String,
}

impl EventRecord {
    /// Capture the current wall-clock instant under the given label.
    pub fn capture(label: impl Into<String>) -> Self {
        Self::at(label, Local::now())
    }

    /// Build a record for an explicit instant. Exposed mostly so tests can
    /// pin the clock.
    pub fn at(label: impl Into<String>, timestamp: DateTime<Local>) -> Self {
        EventRecord {
            label: label.into(),
            timestamp,
            formatted: format_timestamp(&timestamp),
        }
    }

    /// Render the full diagnostic line, `label: mm:ss_SSSS`.
    pub fn render(&self) -> String {
        format!("{}: {}", self.label, self.formatted)
    }
}

/// Format an instant as `mm:ss_SSSS`: zero-padded minute and second plus
/// four sub-second digits (hundred-microsecond resolution).
pub fn format_timestamp(instant: &DateTime<Local>) -> String {
    // nanosecond() reports values >= 1e9 during a leap second; fold them back.
    let frac = (instant.nanosecond() % 1_000_000_000) / 100_000;
    format!(
        "{:02}:{:02}_{:04}",
        instant.minute(),
        instant.second(),
        frac
    )
}
