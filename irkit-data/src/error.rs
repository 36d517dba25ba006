extern crate thiserror;

use std::io;

use self::thiserror::Error;

/// Failures while reading a run or qrel file
#[derive(Error, Debug)]
pub enum LoadError {
    /// The underlying reader failed
    #[error("unable to read runs: {0}")]
    Io(#[from] io::Error),

    /// A line could not be parsed
    #[error("line {line_number}: {reason} in `{line}`")]
    Format {
        /// 1-based line number
        line_number: usize,
        /// Offending line
        line: String,
        /// What was wrong with it
        reason: String,
    },
}
