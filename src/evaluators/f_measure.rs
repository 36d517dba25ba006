extern crate ir_core;

use self::ir_core::{Evaluator, Run};

use crate::evaluators::parameters::FMeasureParameters;
use crate::evaluators::utils::*;

#[derive(Clone, Debug)]
/// Weighted harmonic mean of precision and recall at k
pub struct FMeasure {
    /// Minimum relevance level of a relevant document
    pub min_score: f64,
    /// Cutoff.  Without one, the whole run is used
    pub cutoff: Option<usize>,
    /// Relative weight of recall; 1 weighs both equally
    pub beta: f64,
}

impl FMeasure {
    /// Returns a new F-measure evaluator
    pub fn new(min_score: f64, cutoff: Option<usize>, beta: f64) -> Self {
        FMeasure {
            min_score,
            cutoff,
            beta,
        }
    }
}

impl From<&FMeasureParameters> for FMeasure {
    fn from(parameters: &FMeasureParameters) -> Self {
        FMeasure::new(parameters.min_score, parameters.k, parameters.beta)
    }
}

impl Evaluator for FMeasure {
    fn short_name(&self) -> String {
        short_name_at("F", self.cutoff)
    }

    fn full_name(&self) -> String {
        full_name_at("F-measure", self.cutoff)
    }

    fn evaluate(&self, ground_truth: &Run, system_run: &Run) -> f64 {
        let k = cutoff_or_len(self.cutoff, system_run);
        let relevant = relevant_documents(ground_truth, self.min_score);
        if k == 0 || relevant.is_empty() {
            return 0.0;
        }

        let hits = count_hits(&relevant, system_run, k) as f64;
        let precision = hits / k as f64;
        let recall = hits / relevant.len() as f64;
        let beta2 = self.beta * self.beta;
        let denominator = beta2 * precision + recall;
        if denominator == 0.0 {
            0.0
        } else {
            (1.0 + beta2) * precision * recall / denominator
        }
    }
}
