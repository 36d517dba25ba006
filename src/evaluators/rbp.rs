extern crate ir_core;

use self::ir_core::{Evaluator, Run};

use crate::evaluators::parameters::RbpParameters;
use crate::evaluators::utils::judged_gains;
use crate::metrics::GainFunction;

#[derive(Clone, Debug)]
/// Rank-biased precision, for a user who moves from one document to the next with a
/// fixed probability.  It looks at the whole run.
pub struct RankBiasedPrecision {
    /// Highest relevance level of the collection
    pub max_score: f64,
    /// Probability of moving on to the next document
    pub persistence: f64,
    /// Gain of each relevance level
    pub gain: GainFunction,
}

impl RankBiasedPrecision {
    /// Returns a new RankBiasedPrecision
    pub fn new(gain: GainFunction, max_score: f64, persistence: f64) -> Self {
        RankBiasedPrecision {
            max_score,
            persistence,
            gain,
        }
    }
}

impl From<&RbpParameters> for RankBiasedPrecision {
    fn from(parameters: &RbpParameters) -> Self {
        RankBiasedPrecision::new(parameters.gain, parameters.max_score, parameters.persistence)
    }
}

impl Evaluator for RankBiasedPrecision {
    fn short_name(&self) -> String {
        "RBP".to_string()
    }

    fn full_name(&self) -> String {
        "Rank-Biased Precision".to_string()
    }

    fn evaluate(&self, ground_truth: &Run, system_run: &Run) -> f64 {
        let max_gain = self.gain.gain(self.max_score);
        if max_gain == 0.0 {
            return 0.0;
        }

        let gains = judged_gains(ground_truth, &self.gain);
        let total: f64 = system_run
            .iter()
            .enumerate()
            .filter_map(|(i, r)| gains.get(&r.document).map(|g| g * self.persistence.powi(i as i32)))
            .sum();

        (1.0 - self.persistence) * total / max_gain
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluators::test_utils::*;

    #[test]
    fn test_rbp() {
        let task = fixture();
        let rbp = scores(&task, &RankBiasedPrecision::new(GainFunction::Linear, 4.0, 0.95));
        assert_close(rbp["301"], 0.074088);
        assert_close(rbp["302"], 0.071967);
        assert_close(rbp["303"], 0.0);

        let impatient = scores(&task, &RankBiasedPrecision::new(GainFunction::Linear, 4.0, 0.5));
        assert_close(impatient["301"], 0.1328125);
        assert_close(impatient["302"], 0.515625);
    }

    #[test]
    fn test_rbp_without_max_gain() {
        let task = fixture();
        let rbp = scores(&task, &RankBiasedPrecision::new(GainFunction::Linear, 0.0, 0.95));
        assert!(rbp.values().all(|v| *v == 0.0));
    }
}
