extern crate ir_core;

use self::ir_core::{Evaluator, Run};

use crate::evaluators::parameters::BinaryParameters;
use crate::evaluators::utils::*;

#[derive(Clone, Debug)]
/// Mean of the precision at each relevant document retrieved in the first k results,
/// over all relevant documents
pub struct AveragePrecision {
    /// Minimum relevance level of a relevant document
    pub min_score: f64,
    /// Cutoff.  Without one, the whole run is used
    pub cutoff: Option<usize>,
}

impl AveragePrecision {
    /// Returns a new Average Precision evaluator
    pub fn new(min_score: f64, cutoff: Option<usize>) -> Self {
        AveragePrecision { min_score, cutoff }
    }
}

impl From<&BinaryParameters> for AveragePrecision {
    fn from(parameters: &BinaryParameters) -> Self {
        AveragePrecision::new(parameters.min_score, parameters.k)
    }
}

impl Evaluator for AveragePrecision {
    fn short_name(&self) -> String {
        short_name_at("AP", self.cutoff)
    }

    fn full_name(&self) -> String {
        full_name_at("Average Precision", self.cutoff)
    }

    /// Divides by the number of relevant documents, retrieved or not
    fn evaluate(&self, ground_truth: &Run, system_run: &Run) -> f64 {
        let relevant = relevant_documents(ground_truth, self.min_score);
        if relevant.is_empty() {
            return 0.0;
        }

        let (_, total) = system_run
            .top(self.cutoff)
            .iter()
            .enumerate()
            .filter(|(_, r)| relevant.contains(&r.document))
            .fold((0usize, 0f64), |(hits, total), (i, _)| {
                (hits + 1, total + (hits + 1) as f64 / (i + 1) as f64)
            });

        total / relevant.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluators::test_utils::*;

    #[test]
    fn test_average_precision() {
        let task = fixture();
        let all = scores(&task, &AveragePrecision::new(1.0, None));
        assert_close(all["301"], 0.375);
        assert_close(all["302"], 0.916667);
        assert_close(all["303"], 0.0);
    }

    #[test]
    fn test_average_precision_at_k() {
        let task = fixture();
        let expected_301 = [0.0, 0.125, 0.125, 0.25, 0.25, 0.375];
        let expected_302 = [1.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0, 0.916667];
        for (i, expected) in expected_301.iter().enumerate() {
            let ap = scores(&task, &AveragePrecision::new(1.0, Some(i + 1)));
            assert_close(ap["301"], *expected);
        }
        for (i, expected) in expected_302.iter().enumerate() {
            let ap = scores(&task, &AveragePrecision::new(1.0, Some(i + 1)));
            assert_close(ap["302"], *expected);
        }
    }

    #[test]
    fn test_average_precision_min_score() {
        let task = fixture();
        let all = scores(&task, &AveragePrecision::new(2.0, None));
        assert_close(all["301"], 0.291667);
        assert_close(all["302"], 1.0);
    }
}
