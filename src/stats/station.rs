use serde::Serialize;

use crate::stats::mode::mode;
use crate::trips::TripTable;

/// Separator used to render a start/end pair as one trip value.
const PAIR_SEPARATOR: &str = " -> ";

/// Most popular stations and start/end pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationStats {
    pub start_station: String,
    pub end_station: String,
    /// Most frequent pair, rendered as `"start -> end"`.
    pub trip: String,
}

impl StationStats {
    /// `None` when the table has no rows.
    pub fn from_table(table: &TripTable) -> Option<StationStats> {
        let start_station = mode(table.trips().iter().map(|t| t.start_station.clone()))?;
        let end_station = mode(table.trips().iter().map(|t| t.end_station.clone()))?;
        let trip = mode(table.trips().iter().map(|t| {
            format!("{}{}{}", t.start_station, PAIR_SEPARATOR, t.end_station)
        }))?;
        Some(StationStats {
            start_station,
            end_station,
            trip,
        })
    }
}
