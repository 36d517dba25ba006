//! Library for reading and writing runs and relevance judgments
#![warn(missing_docs, unused)]

/// Load errors
pub mod error;
/// Definitions of records and run formats
pub mod types;
/// TREC qrel and run formats
pub mod trec;
/// EIREX run format
pub mod eirex;
/// Defines methods for loading runs from a file
pub mod load;
/// Defines methods for writing runs to a file
pub mod write;

pub use crate::eirex::EirexRun;
pub use crate::error::LoadError;
pub use crate::load::{read_runs, read_runs_from_path};
pub use crate::trec::{TrecQrels, TrecRun};
pub use crate::types::{Record, RunFormat};
pub use crate::write::{write_runs, write_runs_to_path};
