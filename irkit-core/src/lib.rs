//! IR-Core
//! ===
//!
//! This library contains the data model needed to evaluate ranked retrieval results
//! against relevance judgments.
//!
//! Model
//! ---
//! Documents, queries and systems are identified by string ids and handled through
//! cheap-to-clone interned handles.  A `Run` is the ranked list of scored documents
//! one system returned for one query.  Ground truth uses the same shape, with the
//! relevance level stored as the score.
//!
//! Task
//! ---
//! A `Task` owns the interning collections, the ground truth for every query and the
//! system runs, indexed both by system and by query.  It is the entry point for
//! evaluating one or many runs with an `Evaluator`.
//!

#![warn(missing_docs, unused)]

/// Defines the identity handles, collections and runs
pub mod model;

/// Defines the Task, which registers runs and orchestrates evaluation
pub mod task;

/// Lookup errors raised by the task
pub mod error;

pub use crate::error::{Error, Result};
pub use crate::model::{Document, ItemCollection, Query, Run, ScoredDocument, System};
pub use crate::task::Task;

/// Scores a system run against the ground truth for the same query.
///
/// Configuration lives on the evaluator itself and never changes during evaluation, so
/// a single instance can be shared across threads.
pub trait Evaluator: Send + Sync {
    /// Short name, e.g. `P@10`
    fn short_name(&self) -> String;

    /// Human readable name, e.g. `Precision at 10`
    fn full_name(&self) -> String;

    /// Computes the score of `system_run` given the judgments in `ground_truth`
    fn evaluate(&self, ground_truth: &Run, system_run: &Run) -> f64;
}

impl<E: Evaluator + ?Sized> Evaluator for Box<E> {
    fn short_name(&self) -> String {
        (**self).short_name()
    }

    fn full_name(&self) -> String {
        (**self).full_name()
    }

    fn evaluate(&self, ground_truth: &Run, system_run: &Run) -> f64 {
        (**self).evaluate(ground_truth, system_run)
    }
}
