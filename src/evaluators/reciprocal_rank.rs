extern crate ir_core;

use self::ir_core::{Evaluator, Run};

use crate::evaluators::parameters::ThresholdParameters;
use crate::evaluators::utils::relevant_documents;

#[derive(Clone, Debug)]
/// Evaluator to compute reciprocal rank
pub struct ReciprocalRank {
    /// Minimum relevance level of a relevant document
    pub min_score: f64,
}

impl ReciprocalRank {
    /// Returns a new ReciprocalRank
    pub fn new(min_score: f64) -> Self {
        ReciprocalRank { min_score }
    }
}

impl From<&ThresholdParameters> for ReciprocalRank {
    fn from(parameters: &ThresholdParameters) -> Self {
        ReciprocalRank::new(parameters.min_score)
    }
}

impl Evaluator for ReciprocalRank {
    fn short_name(&self) -> String {
        "RR".to_string()
    }

    fn full_name(&self) -> String {
        "Reciprocal Rank".to_string()
    }

    fn evaluate(&self, ground_truth: &Run, system_run: &Run) -> f64 {
        let relevant = relevant_documents(ground_truth, self.min_score);
        let index_opt = system_run
            .iter()
            .position(|r| relevant.contains(&r.document));

        match index_opt {
            Some(index) => 1.0 / ((index + 1) as f64),
            None => 0.0,
        }
    }
}
