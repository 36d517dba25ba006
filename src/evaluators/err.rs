extern crate hashbrown;
extern crate ir_core;

use self::hashbrown::HashMap;
use self::ir_core::{Evaluator, Run};

use crate::evaluators::parameters::ErrParameters;
use crate::evaluators::utils::*;
use crate::metrics::{get_err, GainFunction};

#[derive(Clone, Debug)]
/// Expected reciprocal rank under the cascade model.  A document with gain `g`
/// satisfies the user with probability `(g - 1) / gain(max_score)`.
pub struct ExpectedReciprocalRank {
    /// Cutoff.  Without one, the whole run is used
    pub cutoff: Option<usize>,
    /// Highest relevance level of the collection
    pub max_score: f64,
    /// Gain of each relevance level
    pub gain: GainFunction,
}

impl ExpectedReciprocalRank {
    /// Returns a new ExpectedReciprocalRank
    pub fn new(gain: GainFunction, max_score: f64, cutoff: Option<usize>) -> Self {
        ExpectedReciprocalRank {
            cutoff,
            max_score,
            gain,
        }
    }
}

impl From<&ErrParameters> for ExpectedReciprocalRank {
    fn from(parameters: &ErrParameters) -> Self {
        ExpectedReciprocalRank::new(parameters.gain, parameters.max_score, parameters.k)
    }
}

impl Evaluator for ExpectedReciprocalRank {
    fn short_name(&self) -> String {
        short_name_at("ERR", self.cutoff)
    }

    fn full_name(&self) -> String {
        full_name_at("Expected Reciprocal Rank", self.cutoff)
    }

    fn evaluate(&self, ground_truth: &Run, system_run: &Run) -> f64 {
        let max_gain = self.gain.gain(self.max_score);
        if max_gain == 0.0 {
            return 0.0;
        }

        let gains: HashMap<_, _> = judged_gains(ground_truth, &self.gain)
            .into_iter()
            .filter(|(_, gain)| *gain > 0.0)
            .collect();

        let probabilities: Vec<f64> = system_run
            .top(self.cutoff)
            .iter()
            .map(|r| gains.get(&r.document).map_or(0.0, |g| (g - 1.0) / max_gain))
            .collect();

        get_err(&probabilities)
    }
}

#[derive(Clone, Debug)]
/// ERR divided by the ERR of the ideal run.  The ideal run is never cut, so nERR grows
/// with the cutoff just as ERR does.
pub struct NormalizedExpectedReciprocalRank {
    /// ERR of the system run
    pub err: ExpectedReciprocalRank,
}

impl NormalizedExpectedReciprocalRank {
    /// Returns a new NormalizedExpectedReciprocalRank
    pub fn new(gain: GainFunction, max_score: f64, cutoff: Option<usize>) -> Self {
        NormalizedExpectedReciprocalRank {
            err: ExpectedReciprocalRank::new(gain, max_score, cutoff),
        }
    }
}

impl From<&ErrParameters> for NormalizedExpectedReciprocalRank {
    fn from(parameters: &ErrParameters) -> Self {
        NormalizedExpectedReciprocalRank {
            err: ExpectedReciprocalRank::from(parameters),
        }
    }
}

impl Evaluator for NormalizedExpectedReciprocalRank {
    fn short_name(&self) -> String {
        short_name_at("nERR", self.err.cutoff)
    }

    fn full_name(&self) -> String {
        full_name_at("Normalized Expected Reciprocal Rank", self.err.cutoff)
    }

    fn evaluate(&self, ground_truth: &Run, system_run: &Run) -> f64 {
        let gain = self.err.gain;
        let ideal = ground_truth.ideal_ordering(|s| gain.gain(s));
        let full = ExpectedReciprocalRank {
            cutoff: None,
            ..self.err.clone()
        };
        let ideal_err = full.evaluate(ground_truth, &ideal);
        if ideal_err > 0.0 {
            self.err.evaluate(ground_truth, system_run) / ideal_err
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluators::test_utils::*;

    fn err(cutoff: Option<usize>) -> ExpectedReciprocalRank {
        ExpectedReciprocalRank::new(GainFunction::Exponential(2.0), 4.0, cutoff)
    }

    fn nerr(cutoff: Option<usize>) -> NormalizedExpectedReciprocalRank {
        NormalizedExpectedReciprocalRank::new(GainFunction::Exponential(2.0), 4.0, cutoff)
    }

    #[test]
    fn test_err() {
        let task = fixture();
        let expected_301 = [0.0, 0.03125, 0.03125, 0.2509765625];
        let expected_302 = [0.4375, 0.490234375, 0.490234375, 0.49737548828125];
        for k in 0..4 {
            let at_k = scores(&task, &err(Some(k + 1)));
            assert_close(at_k["301"], expected_301[k]);
            assert_close(at_k["302"], expected_302[k]);
            assert_close(at_k["303"], 0.0);
        }

        let all = scores(&task, &err(None));
        assert_close(all["301"], 0.2528076171875);
    }

    #[test]
    fn test_nerr() {
        let task = fixture();
        let at1 = scores(&task, &nerr(Some(1)));
        assert_close(at1["301"], 0.0);
        assert_close(at1["302"], 0.875427);

        let at2 = scores(&task, &nerr(Some(2)));
        assert_close(at2["301"], 0.033063);
        assert_close(at2["302"], 0.980948);

        let all = scores(&task, &nerr(None));
        assert_close(all["301"], 0.267476);
        assert_close(all["302"], 0.995237);
        assert_close(all["303"], 0.0);
    }

    #[test]
    fn test_without_max_gain() {
        let task = fixture();
        let linear = ExpectedReciprocalRank::new(GainFunction::Linear, 0.0, None);
        assert!(scores(&task, &linear).values().all(|v| *v == 0.0));
    }

    #[test]
    fn test_nerr_with_rejudged_document() {
        let (truth, run) = doubly_judged();
        let nerr = NormalizedExpectedReciprocalRank::new(GainFunction::Linear, 3.0, None);
        assert_close(nerr.evaluate(&truth, &run), 1.0);
    }
}
