use serde::Serialize;

use crate::city::Day;
use crate::stats::mode::mode;
use crate::trips::TripTable;

/// Most frequent times of travel: calendar month number, day of week,
/// and start hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeStats {
    pub month: u32,
    pub day: Day,
    pub hour: u32,
}

impl TimeStats {
    /// `None` when the table has no rows.
    pub fn from_table(table: &TripTable) -> Option<TimeStats> {
        let month = mode(table.trips().iter().map(|t| t.month))?;
        let day = mode(table.trips().iter().map(|t| t.day))?;
        let hour = mode(table.trips().iter().map(|t| t.hour))?;
        Some(TimeStats { month, day, hour })
    }
}
