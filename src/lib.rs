//! Irkit
//!
//! Irkit is a library and an executable to evaluate ranked retrieval runs against
//! relevance judgments, with trec_eval and NTCIREVAL semantics.
#![warn(missing_docs, unused)]

#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate clap;

/// Tools for binaries
pub mod bin_utils;
/// Query level evaluators
pub mod evaluators;
/// Loading of the evaluation config
pub mod load;
/// Gain and discount functions
pub mod metrics;
/// Aggregated reports over systems and queries
pub mod report;
