extern crate ir_core;

use self::ir_core::{Evaluator, Run};

use crate::evaluators::parameters::DiscountedGainParameters;
use crate::evaluators::utils::*;
use crate::metrics::{dcg, DiscountFunction, GainFunction};

#[derive(Clone, Debug)]
/// Evaluator to compute DCG
pub struct DiscountedCumulatedGain {
    /// Cutoff.  Without one, the whole run is used
    pub cutoff: Option<usize>,
    /// Gain of each relevance level
    pub gain: GainFunction,
    /// Discount at each rank
    pub discount: DiscountFunction,
}

impl DiscountedCumulatedGain {
    /// Returns a new DiscountedCumulatedGain
    pub fn new(gain: GainFunction, discount: DiscountFunction, cutoff: Option<usize>) -> Self {
        DiscountedCumulatedGain {
            cutoff,
            gain,
            discount,
        }
    }
}

impl From<&DiscountedGainParameters> for DiscountedCumulatedGain {
    fn from(parameters: &DiscountedGainParameters) -> Self {
        DiscountedCumulatedGain::new(parameters.gain, parameters.discount, parameters.k)
    }
}

impl Evaluator for DiscountedCumulatedGain {
    fn short_name(&self) -> String {
        short_name_at("DCG", self.cutoff)
    }

    fn full_name(&self) -> String {
        full_name_at("Discounted Cumulated Gain", self.cutoff)
    }

    fn evaluate(&self, ground_truth: &Run, system_run: &Run) -> f64 {
        let gains = gains_at_ranks(ground_truth, system_run, self.cutoff, &self.gain);
        dcg(&gains, &self.discount)
    }
}

#[derive(Clone, Debug)]
/// Evaluator to compute NDCG.  The ideal run orders the ground truth by descending gain
/// and is cut at the same k.
pub struct NormalizedDiscountedCumulatedGain {
    /// DCG of both the system and the ideal run
    pub dcg: DiscountedCumulatedGain,
}

impl NormalizedDiscountedCumulatedGain {
    /// Returns a new NormalizedDiscountedCumulatedGain
    pub fn new(gain: GainFunction, discount: DiscountFunction, cutoff: Option<usize>) -> Self {
        NormalizedDiscountedCumulatedGain {
            dcg: DiscountedCumulatedGain::new(gain, discount, cutoff),
        }
    }
}

impl From<&DiscountedGainParameters> for NormalizedDiscountedCumulatedGain {
    fn from(parameters: &DiscountedGainParameters) -> Self {
        NormalizedDiscountedCumulatedGain {
            dcg: DiscountedCumulatedGain::from(parameters),
        }
    }
}

impl Evaluator for NormalizedDiscountedCumulatedGain {
    fn short_name(&self) -> String {
        short_name_at("nDCG", self.dcg.cutoff)
    }

    fn full_name(&self) -> String {
        full_name_at("Normalized Discounted Cumulated Gain", self.dcg.cutoff)
    }

    fn evaluate(&self, ground_truth: &Run, system_run: &Run) -> f64 {
        let gain = self.dcg.gain;
        let ideal = ground_truth.ideal_ordering(|s| gain.gain(s));
        let idcg = self.dcg.evaluate(ground_truth, &ideal);
        if idcg > 0.0 {
            self.dcg.evaluate(ground_truth, system_run) / idcg
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluators::test_utils::*;

    fn linear_dcg(discount: DiscountFunction) -> DiscountedCumulatedGain {
        DiscountedCumulatedGain::new(GainFunction::Linear, discount, None)
    }

    #[test]
    fn test_dcg_discounts() {
        let task = fixture();
        let original2 = scores(&task, &linear_dcg(DiscountFunction::Original(2.0)));
        assert_close(original2["301"], 3.773706);
        assert_close(original2["302"], 5.5);
        assert_close(original2["303"], 0.0);

        let log2 = scores(&task, &linear_dcg(DiscountFunction::Logarithmic(2.0)));
        assert_close(log2["301"], 3.066050);
        assert_close(log2["302"], 4.692536);

        let original10 = scores(&task, &linear_dcg(DiscountFunction::Original(10.0)));
        assert_close(original10["301"], 7.0);
        assert_close(original10["302"], 6.0);

        let log10 = scores(&task, &linear_dcg(DiscountFunction::Logarithmic(10.0)));
        assert_close(log10["301"], 6.251648);
        assert_close(log10["302"], 5.818217);
    }

    #[test]
    fn test_dcg_exponential_gain() {
        let task = fixture();
        let dcg = DiscountedCumulatedGain::new(
            GainFunction::Exponential(2.0),
            DiscountFunction::Original(2.0),
            Some(3),
        );
        let at3 = scores(&task, &dcg);
        assert_close(at3["301"], 2.0);
        assert_close(at3["302"], 12.0);
    }

    #[test]
    fn test_ndcg() {
        let task = fixture();
        let all = scores(
            &task,
            &NormalizedDiscountedCumulatedGain::new(
                GainFunction::Linear,
                DiscountFunction::default(),
                None,
            ),
        );
        assert_close(all["301"], 0.495120);
        assert_close(all["302"], 0.985442);
        assert_close(all["303"], 0.0);

        let at2 = scores(
            &task,
            &NormalizedDiscountedCumulatedGain::new(
                GainFunction::Linear,
                DiscountFunction::default(),
                Some(2),
            ),
        );
        assert_close(at2["301"], 0.119906);
        assert_close(at2["302"], 1.0);

        let original = scores(
            &task,
            &NormalizedDiscountedCumulatedGain::new(
                GainFunction::Linear,
                DiscountFunction::Original(2.0),
                Some(3),
            ),
        );
        assert_close(original["301"], 0.150808);
        assert_close(original["302"], 0.887953);
    }

    #[test]
    fn test_ndcg_of_ideal_run() {
        let task = fixture();
        let (truth, _) = pair(&task, "301");
        let ndcg = NormalizedDiscountedCumulatedGain::new(
            GainFunction::Exponential(2.0),
            DiscountFunction::default(),
            Some(3),
        );
        let ideal = truth.ideal_ordering(|s| s);
        assert_close(ndcg.evaluate(truth, &ideal), 1.0);
    }

    #[test]
    fn test_ndcg_with_rejudged_document() {
        let (truth, run) = doubly_judged();
        let ndcg = NormalizedDiscountedCumulatedGain::new(
            GainFunction::Linear,
            DiscountFunction::default(),
            None,
        );
        assert_close(ndcg.evaluate(&truth, &run), 1.0);
    }
}
