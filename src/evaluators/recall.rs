extern crate ir_core;

use self::ir_core::{Evaluator, Run};

use crate::evaluators::parameters::BinaryParameters;
use crate::evaluators::utils::*;

#[derive(Clone, Debug)]
/// Fraction of the relevant documents found in the first k results
pub struct Recall {
    /// Minimum relevance level of a relevant document
    pub min_score: f64,
    /// Cutoff.  Without one, the whole run is used
    pub cutoff: Option<usize>,
}

impl Recall {
    /// Returns a new Recall evaluator
    pub fn new(min_score: f64, cutoff: Option<usize>) -> Self {
        Recall { min_score, cutoff }
    }
}

impl From<&BinaryParameters> for Recall {
    fn from(parameters: &BinaryParameters) -> Self {
        Recall::new(parameters.min_score, parameters.k)
    }
}

impl Evaluator for Recall {
    fn short_name(&self) -> String {
        short_name_at("R", self.cutoff)
    }

    fn full_name(&self) -> String {
        full_name_at("Recall", self.cutoff)
    }

    fn evaluate(&self, ground_truth: &Run, system_run: &Run) -> f64 {
        let relevant = relevant_documents(ground_truth, self.min_score);
        if relevant.is_empty() {
            return 0.0;
        }

        let k = cutoff_or_len(self.cutoff, system_run);
        count_hits(&relevant, system_run, k) as f64 / relevant.len() as f64
    }
}
