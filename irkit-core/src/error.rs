extern crate thiserror;

use self::thiserror::Error as ThisError;

use crate::model::{Query, System};

/// Errors raised when the task is asked about something it does not hold
#[derive(ThisError, Debug, Clone, PartialEq)]
pub enum Error {
    /// No ground truth was registered for the query
    #[error("no ground truth for query {0}")]
    MissingGroundTruth(Query),

    /// The system has no run for the query
    #[error("system {system} has no run for query {query}")]
    MissingRun {
        /// System that was asked for
        system: System,
        /// Query that was asked for
        query: Query,
    },

    /// The system has no registered runs
    #[error("unknown system {0}")]
    UnknownSystem(System),

    /// The query has no registered system runs
    #[error("unknown query {0}")]
    UnknownQuery(Query),
}

/// Result type for task lookups
pub type Result<T> = std::result::Result<T, Error>;
