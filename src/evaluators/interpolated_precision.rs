extern crate hashbrown;
extern crate ir_core;

use self::hashbrown::HashSet;
use self::ir_core::{Document, Evaluator, Run};

use crate::evaluators::parameters::RecallPointParameters;
use crate::evaluators::utils::relevant_documents;

/// Computes the interpolated precision at each of the ascending `recall_points` with a
/// single reverse scan of the run.
///
/// The interpolated precision at recall r is the highest precision reached at any
/// recall level of at least r.  Recall points are matched to a number of relevant
/// documents as `floor(r * |relevant| + 0.9)`, and points the run never reaches get 0.
pub fn interpolated_precisions(
    relevant: &HashSet<&Document>,
    run: &Run,
    recall_points: &[f64],
) -> Vec<f64> {
    let mut values = vec![0.0; recall_points.len()];
    if run.is_empty() {
        return values;
    }

    let results = run.as_slice();
    let num_relevant = relevant.len() as f64;
    let boundaries: Vec<usize> = recall_points
        .iter()
        .map(|r| (r * num_relevant + 0.9).floor() as usize)
        .collect();

    let relevant_retrieved = results
        .iter()
        .filter(|r| relevant.contains(&r.document))
        .count();

    // Points left to fill are [0, pending)
    let mut pending = recall_points.len();
    while pending > 0 && boundaries[pending - 1] > relevant_retrieved {
        pending -= 1;
    }

    let mut int_precision = relevant_retrieved as f64 / results.len() as f64;
    let mut relevant_so_far = relevant_retrieved;
    for (i, result) in results.iter().enumerate().rev() {
        if relevant_so_far == 0 {
            break;
        }

        let precision = relevant_so_far as f64 / (i + 1) as f64;
        if precision > int_precision {
            int_precision = precision;
        }

        if relevant.contains(&result.document) {
            while pending > 0 && boundaries[pending - 1] == relevant_so_far {
                values[pending - 1] = int_precision;
                pending -= 1;
            }
            relevant_so_far -= 1;
        }
    }

    while pending > 0 {
        values[pending - 1] = int_precision;
        pending -= 1;
    }

    values
}

#[derive(Clone, Debug)]
/// Interpolated precision at a single recall level
pub struct InterpolatedPrecision {
    /// Minimum relevance level of a relevant document
    pub min_score: f64,
    /// Recall level in [0, 1]
    pub recall: f64,
}

impl InterpolatedPrecision {
    /// Returns a new interpolated precision evaluator
    pub fn new(min_score: f64, recall: f64) -> Self {
        InterpolatedPrecision { min_score, recall }
    }
}

impl From<&RecallPointParameters> for InterpolatedPrecision {
    fn from(parameters: &RecallPointParameters) -> Self {
        InterpolatedPrecision::new(parameters.min_score, parameters.recall)
    }
}

impl Evaluator for InterpolatedPrecision {
    fn short_name(&self) -> String {
        format!("iPR@{}", self.recall)
    }

    fn full_name(&self) -> String {
        format!("Interpolated Precision at {} Recall", self.recall)
    }

    fn evaluate(&self, ground_truth: &Run, system_run: &Run) -> f64 {
        let relevant = relevant_documents(ground_truth, self.min_score);
        interpolated_precisions(&relevant, system_run, &[self.recall])[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluators::test_utils::*;

    const RECALL_POINTS: [f64; 11] = [0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0];

    #[test]
    fn test_interpolated_precision() {
        let task = fixture();
        for recall in RECALL_POINTS.iter() {
            let ipr = scores(&task, &InterpolatedPrecision::new(1.0, *recall));
            let (expected_301, expected_302) = if *recall < 0.75 {
                (0.5, 1.0)
            } else {
                (0.0, 0.75)
            };
            assert_close(ipr["301"], expected_301);
            assert_close(ipr["302"], expected_302);
            assert_close(ipr["303"], 0.0);
        }
    }

    #[test]
    fn test_single_scan_matches_single_points() {
        let task = fixture();
        let (truth, run) = pair(&task, "302");
        let relevant = relevant_documents(truth, 1.0);
        let all = interpolated_precisions(&relevant, run, &RECALL_POINTS);
        for (recall, value) in RECALL_POINTS.iter().zip(all.iter()) {
            let single = InterpolatedPrecision::new(1.0, *recall).evaluate(truth, run);
            assert_close(*value, single);
        }
    }

    #[test]
    fn test_empty_run() {
        let task = fixture();
        let (truth, run) = pair(&task, "301");
        let empty = Run::new(run.query().clone(), run.system().clone());
        let ipr = InterpolatedPrecision::new(1.0, 0.0);
        assert_eq!(ipr.evaluate(truth, &empty), 0.0);
    }

    #[test]
    fn test_names() {
        let ipr = InterpolatedPrecision::new(1.0, 0.5);
        assert_eq!(ipr.short_name(), "iPR@0.5");
        assert_eq!(ipr.full_name(), "Interpolated Precision at 0.5 Recall");
    }
}
