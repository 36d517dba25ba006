extern crate ir_core;

use self::ir_core::{Evaluator, Run};

use crate::evaluators::parameters::{GainParameters, MaxGainParameters};
use crate::evaluators::utils::*;
use crate::metrics::GainFunction;

#[derive(Clone, Debug)]
/// Sum of the gains of the first k results
pub struct CumulatedGain {
    /// Cutoff.  Without one, the whole run is used
    pub cutoff: Option<usize>,
    /// Gain of each relevance level
    pub gain: GainFunction,
}

impl CumulatedGain {
    /// Returns a new CumulatedGain
    pub fn new(gain: GainFunction, cutoff: Option<usize>) -> Self {
        CumulatedGain { cutoff, gain }
    }
}

impl From<&GainParameters> for CumulatedGain {
    fn from(parameters: &GainParameters) -> Self {
        CumulatedGain::new(parameters.gain, parameters.k)
    }
}

impl Evaluator for CumulatedGain {
    fn short_name(&self) -> String {
        short_name_at("CG", self.cutoff)
    }

    fn full_name(&self) -> String {
        full_name_at("Cumulated Gain", self.cutoff)
    }

    fn evaluate(&self, ground_truth: &Run, system_run: &Run) -> f64 {
        gains_at_ranks(ground_truth, system_run, self.cutoff, &self.gain)
            .iter()
            .sum()
    }
}

#[derive(Clone, Debug)]
/// Cumulated gain divided by the cutoff
pub struct AverageGain {
    /// Cumulated gain at the same cutoff
    pub cumulated: CumulatedGain,
}

impl AverageGain {
    /// Returns a new AverageGain
    pub fn new(gain: GainFunction, cutoff: Option<usize>) -> Self {
        AverageGain {
            cumulated: CumulatedGain::new(gain, cutoff),
        }
    }
}

impl From<&GainParameters> for AverageGain {
    fn from(parameters: &GainParameters) -> Self {
        AverageGain::new(parameters.gain, parameters.k)
    }
}

impl Evaluator for AverageGain {
    fn short_name(&self) -> String {
        short_name_at("AG", self.cumulated.cutoff)
    }

    fn full_name(&self) -> String {
        full_name_at("Average Gain", self.cumulated.cutoff)
    }

    /// Divides by the cutoff even when the run is shorter
    fn evaluate(&self, ground_truth: &Run, system_run: &Run) -> f64 {
        let k = cutoff_or_len(self.cumulated.cutoff, system_run);
        if k == 0 {
            return 0.0;
        }
        self.cumulated.evaluate(ground_truth, system_run) / k as f64
    }
}

#[derive(Clone, Debug)]
/// Average gain divided by the gain of the highest relevance level
pub struct NormalizedAverageGain {
    /// Average gain at the same cutoff
    pub average: AverageGain,
    /// Highest relevance level of the collection
    pub max_score: f64,
}

impl NormalizedAverageGain {
    /// Returns a new NormalizedAverageGain
    pub fn new(gain: GainFunction, max_score: f64, cutoff: Option<usize>) -> Self {
        NormalizedAverageGain {
            average: AverageGain::new(gain, cutoff),
            max_score,
        }
    }
}

impl From<&MaxGainParameters> for NormalizedAverageGain {
    fn from(parameters: &MaxGainParameters) -> Self {
        NormalizedAverageGain::new(parameters.gain, parameters.max_score, parameters.k)
    }
}

impl Evaluator for NormalizedAverageGain {
    fn short_name(&self) -> String {
        short_name_at("nAG", self.average.cumulated.cutoff)
    }

    fn full_name(&self) -> String {
        full_name_at("Normalized Average Gain", self.average.cumulated.cutoff)
    }

    fn evaluate(&self, ground_truth: &Run, system_run: &Run) -> f64 {
        let max_gain = self.average.cumulated.gain.gain(self.max_score);
        if max_gain == 0.0 {
            return 0.0;
        }
        self.average.evaluate(ground_truth, system_run) / max_gain
    }
}
