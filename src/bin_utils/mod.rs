//! Defines methods shared by the evaluation binaries

/// Methods for reading arguments
pub mod args;
/// Methods for loading runs and evaluators
pub mod loaders;
