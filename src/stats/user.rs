use serde::Serialize;

use crate::stats::mode::{frequency, mode};
use crate::trips::TripTable;

/// Bucket label for rows with no value in an optional column.
pub const MISSING_LABEL: &str = "(missing)";

/// Rider demographics. Each field is `None` when the source table lacks
/// the column, or, for birth years, when no numeric values remain after
/// coercion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserStats {
    pub user_types: Option<Vec<(String, usize)>>,
    pub genders: Option<Vec<(String, usize)>>,
    pub birth_years: Option<BirthYearStats>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: i32,
}

impl UserStats {
    /// `None` when the table has no rows.
    pub fn from_table(table: &TripTable) -> Option<UserStats> {
        if table.is_empty() {
            return None;
        }
        let schema = table.schema();
        let user_types = schema
            .user_type
            .then(|| bucket_counts(table.trips().iter().map(|t| t.user_type.as_deref())));
        let genders = schema
            .gender
            .then(|| bucket_counts(table.trips().iter().map(|t| t.gender.as_deref())));
        let birth_years = if schema.birth_year {
            BirthYearStats::from_table(table)
        } else {
            None
        };
        Some(UserStats {
            user_types,
            genders,
            birth_years,
        })
    }
}

impl BirthYearStats {
    fn from_table(table: &TripTable) -> Option<BirthYearStats> {
        let years: Vec<i32> = table.trips().iter().filter_map(|t| t.birth_year).collect();
        let earliest = years.iter().copied().min()?;
        let most_recent = years.iter().copied().max()?;
        let most_common = mode(years)?;
        Some(BirthYearStats {
            earliest,
            most_recent,
            most_common,
        })
    }
}

/// Frequency table over an optional text column; absent values count
/// under [`MISSING_LABEL`].
fn bucket_counts<'a>(values: impl Iterator<Item = Option<&'a str>>) -> Vec<(String, usize)> {
    frequency(values.map(|v| v.unwrap_or(MISSING_LABEL).to_string()))
}
