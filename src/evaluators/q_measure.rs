extern crate hashbrown;
extern crate ir_core;

use self::hashbrown::HashMap;
use self::ir_core::{Evaluator, Run};

use crate::evaluators::parameters::QMeasureParameters;
use crate::evaluators::utils::*;
use crate::metrics::GainFunction;

#[derive(Clone, Debug)]
/// Graded analogue of average precision, using blended ratios of cumulated gain
pub struct QMeasure {
    /// Cutoff.  Without one, the whole run is used
    pub cutoff: Option<usize>,
    /// Weight of the cumulated gain; 0 reduces Q to average precision
    pub beta: f64,
    /// Gain of each relevance level
    pub gain: GainFunction,
}

impl QMeasure {
    /// Returns a new QMeasure
    pub fn new(gain: GainFunction, beta: f64, cutoff: Option<usize>) -> Self {
        QMeasure { cutoff, beta, gain }
    }
}

impl From<&QMeasureParameters> for QMeasure {
    fn from(parameters: &QMeasureParameters) -> Self {
        QMeasure::new(parameters.gain, parameters.beta, parameters.k)
    }
}

impl Evaluator for QMeasure {
    fn short_name(&self) -> String {
        short_name_at("Q", self.cutoff)
    }

    fn full_name(&self) -> String {
        full_name_at("Q-measure", self.cutoff)
    }

    /// Divides by `min(k, |relevant|)`, as NTCIREVAL does
    fn evaluate(&self, ground_truth: &Run, system_run: &Run) -> f64 {
        let k = cutoff_or_len(self.cutoff, system_run);
        let relevant: HashMap<_, _> = judged_gains(ground_truth, &self.gain)
            .into_iter()
            .filter(|(_, gain)| *gain > 0.0)
            .collect();
        if relevant.is_empty() || k == 0 {
            return 0.0;
        }

        let gain = self.gain;
        let ideal: Vec<f64> = ground_truth
            .ideal_ordering(|s| gain.gain(s))
            .iter()
            .map(|r| gain.gain(r.score))
            .collect();

        let mut q = 0.0;
        let mut count = 0.0;
        let mut cg = 0.0;
        let mut cgi = 0.0;
        for (i, result) in system_run.top(Some(k)).iter().enumerate() {
            if i < relevant.len() {
                cgi += ideal[i];
            }
            if let Some(g) = relevant.get(&result.document) {
                cg += g;
                count += 1.0;
                q += (count + self.beta * cg) / ((i + 1) as f64 + self.beta * cgi);
            }
        }

        q / k.min(relevant.len()) as f64
    }
}
