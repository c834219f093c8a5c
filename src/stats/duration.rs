use serde::Serialize;

use crate::trips::TripTable;

/// Total and mean trip duration in seconds.
///
/// The total accumulates in `u64`, wide enough for tens of millions of
/// day-scale trips.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DurationStats {
    pub total_seconds: u64,
    pub mean_seconds: f64,
}

impl DurationStats {
    /// `None` when the table has no rows.
    pub fn from_table(table: &TripTable) -> Option<DurationStats> {
        if table.is_empty() {
            return None;
        }
        let total_seconds: u64 = table.trips().iter().map(|t| t.duration_secs).sum();
        let mean_seconds = total_seconds as f64 / table.len() as f64;
        Some(DurationStats {
            total_seconds,
            mean_seconds,
        })
    }

    /// Total rendered as a day/hour/minute/second decomposition.
    pub fn total_breakdown(&self) -> String {
        breakdown(self.total_seconds)
    }

    /// Mean truncated to whole seconds, then decomposed.
    pub fn mean_breakdown(&self) -> String {
        breakdown(self.mean_seconds as u64)
    }
}

/// Renders seconds as `"1d 2h 3m 4s"`. Zero-valued components are
/// dropped; seconds always appear.
pub fn breakdown(total_seconds: u64) -> String {
    let (minutes, seconds) = (total_seconds / 60, total_seconds % 60);
    let (hours, minutes) = (minutes / 60, minutes % 60);
    let (days, hours) = (hours / 24, hours % 24);

    let mut parts = Vec::new();
    if days > 0 {
        parts.push(format!("{days}d"));
    }
    if hours > 0 {
        parts.push(format!("{hours}h"));
    }
    if minutes > 0 {
        parts.push(format!("{minutes}m"));
    }
    parts.push(format!("{seconds}s"));
    parts.join(" ")
}
