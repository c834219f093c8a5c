//! Fatal load-time failures.
//!
//! Only whole-cycle failures live here. Row-level problems (an unparseable
//! end time, a junk birth year) degrade to absent values during loading
//! and never surface as errors.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    /// The city's source table could not be read at all.
    #[error("trip data unavailable at {}: {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A required start time failed to parse. Sources guarantee
    /// well-formed start times, so this means the data itself is broken.
    #[error("malformed start time {value:?} on line {line}: {source}")]
    MalformedTimestamp {
        value: String,
        line: u64,
        #[source]
        source: chrono::ParseError,
    },
}
