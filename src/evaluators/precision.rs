extern crate ir_core;

use self::ir_core::{Evaluator, Run};

use crate::evaluators::parameters::BinaryParameters;
use crate::evaluators::utils::*;

#[derive(Clone, Debug)]
/// Fraction of the first k results that are relevant
pub struct Precision {
    /// Minimum relevance level of a relevant document
    pub min_score: f64,
    /// Cutoff.  Without one, the whole run is used
    pub cutoff: Option<usize>,
}

impl Precision {
    /// Returns a new Precision evaluator
    pub fn new(min_score: f64, cutoff: Option<usize>) -> Self {
        Precision { min_score, cutoff }
    }
}

impl From<&BinaryParameters> for Precision {
    fn from(parameters: &BinaryParameters) -> Self {
        Precision::new(parameters.min_score, parameters.k)
    }
}

impl Evaluator for Precision {
    fn short_name(&self) -> String {
        short_name_at("P", self.cutoff)
    }

    fn full_name(&self) -> String {
        full_name_at("Precision", self.cutoff)
    }

    /// Divides by the cutoff even when the run is shorter, as trec_eval does
    fn evaluate(&self, ground_truth: &Run, system_run: &Run) -> f64 {
        let k = cutoff_or_len(self.cutoff, system_run);
        if k == 0 {
            return 0.0;
        }

        let relevant = relevant_documents(ground_truth, self.min_score);
        count_hits(&relevant, system_run, k) as f64 / k as f64
    }
}
