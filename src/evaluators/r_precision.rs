extern crate ir_core;

use self::ir_core::{Evaluator, Run};

use crate::evaluators::parameters::ThresholdParameters;
use crate::evaluators::precision::Precision;
use crate::evaluators::utils::relevant_documents;

#[derive(Clone, Debug)]
/// Precision at the number of relevant documents
pub struct RPrecision {
    /// Minimum relevance level of a relevant document
    pub min_score: f64,
}

impl RPrecision {
    /// Returns a new R-Precision evaluator
    pub fn new(min_score: f64) -> Self {
        RPrecision { min_score }
    }
}

impl From<&ThresholdParameters> for RPrecision {
    fn from(parameters: &ThresholdParameters) -> Self {
        RPrecision::new(parameters.min_score)
    }
}

impl Evaluator for RPrecision {
    fn short_name(&self) -> String {
        "RP".to_string()
    }

    fn full_name(&self) -> String {
        "R-Precision".to_string()
    }

    fn evaluate(&self, ground_truth: &Run, system_run: &Run) -> f64 {
        let num_relevant = relevant_documents(ground_truth, self.min_score).len();
        Precision::new(self.min_score, Some(num_relevant)).evaluate(ground_truth, system_run)
    }
}
