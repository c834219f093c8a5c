//! Descriptive statistics over a filtered trip table.
//!
//! Each group computes independently and short-circuits to `None` when
//! the table has no rows, so an empty filter result never shows up as
//! misleading zeros.

pub mod duration;
pub mod mode;
pub mod station;
pub mod time;
pub mod user;

pub use duration::DurationStats;
pub use station::StationStats;
pub use time::TimeStats;
pub use user::{BirthYearStats, UserStats};
