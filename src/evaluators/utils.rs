extern crate hashbrown;
extern crate ir_core;

use self::hashbrown::{HashMap, HashSet};
use self::ir_core::{Document, Run};

use crate::metrics::GainFunction;

/// Appends `@k` to a short name when a cutoff is set
pub fn short_name_at(name: &str, cutoff: Option<usize>) -> String {
    match cutoff {
        Some(k) => format!("{}@{}", name, k),
        None => name.to_string(),
    }
}

/// Appends ` at k` to a full name when a cutoff is set
pub fn full_name_at(name: &str, cutoff: Option<usize>) -> String {
    match cutoff {
        Some(k) => format!("{} at {}", name, k),
        None => name.to_string(),
    }
}

/// Number of leading results an evaluator looks at: the cutoff if set, otherwise the
/// whole run
pub fn cutoff_or_len(cutoff: Option<usize>, run: &Run) -> usize {
    cutoff.unwrap_or_else(|| run.len())
}

/// Documents judged with a score of at least `min_score`
pub fn relevant_documents(ground_truth: &Run, min_score: f64) -> HashSet<&Document> {
    ground_truth
        .iter()
        .filter(|r| r.score >= min_score)
        .map(|r| &r.document)
        .collect()
}

/// Distinct documents among the first `cutoff` results
pub fn retrieved_documents(run: &Run, cutoff: usize) -> HashSet<&Document> {
    run.top(Some(cutoff)).iter().map(|r| &r.document).collect()
}

/// Number of distinct relevant documents among the first `cutoff` results
pub fn count_hits(relevant: &HashSet<&Document>, run: &Run, cutoff: usize) -> usize {
    retrieved_documents(run, cutoff)
        .intersection(relevant)
        .count()
}

/// Gain of every judged document.  When a document is judged twice, the last judgment
/// wins.
pub fn judged_gains<'a>(ground_truth: &'a Run, gain: &GainFunction) -> HashMap<&'a Document, f64> {
    ground_truth
        .iter()
        .map(|r| (&r.document, gain.gain(r.score)))
        .collect()
}

/// Gain found at each of the first `cutoff` ranks of the run.  Unjudged documents gain 0.
pub fn gains_at_ranks(
    ground_truth: &Run,
    run: &Run,
    cutoff: Option<usize>,
    gain: &GainFunction,
) -> Vec<f64> {
    let gains = judged_gains(ground_truth, gain);
    run.top(cutoff)
        .iter()
        .map(|r| gains.get(&r.document).cloned().unwrap_or(0.0))
        .collect()
}
