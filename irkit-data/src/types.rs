use std::io::{self, Write};

use ir_core::{Run, ScoredDocument};

/// One parsed line of a run or qrel file
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// System tag, if the format carries one
    pub system: Option<String>,
    /// Query id
    pub query: String,
    /// Document id
    pub document: String,
    /// Retrieval score or relevance level
    pub score: f64,
    /// Explicit rank, if the format carries one.  Otherwise the read order is used.
    pub rank: Option<usize>,
}

/// Describes how a line based run format is read and written
pub trait RunFormat: Sync {
    /// Parses a single non-empty line
    fn parse_line(&self, line: &str) -> Result<Record, String>;

    /// Whether the record is kept, given the length of the run it would be added to
    fn accepts(&self, _run_len: usize, _record: &Record) -> bool {
        true
    }

    /// System assigned to records which carry none
    fn default_system(&self) -> &str {
        "Unnamed"
    }

    /// Maximum number of results written per run
    fn write_limit(&self) -> Option<usize> {
        None
    }

    /// Writes a single result of `run`
    fn write_result<W: Write>(
        &self,
        run: &Run,
        result: &ScoredDocument,
        writer: &mut W,
    ) -> io::Result<()>;
}

/// Parses a numeric field, naming it in the error
pub fn parse_field<T: std::str::FromStr>(value: &str, name: &str) -> Result<T, String> {
    value
        .parse()
        .map_err(|_| format!("invalid {} `{}`", name, value))
}
