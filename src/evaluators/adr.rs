extern crate float_ord;
extern crate hashbrown;
extern crate ir_core;

use self::float_ord::FloatOrd;
use self::hashbrown::HashSet;
use self::ir_core::{Document, Evaluator, Run, ScoredDocument};

use crate::evaluators::parameters::AtKParameters;
use crate::evaluators::utils::*;

#[derive(Clone, Debug)]
/// Average dynamic recall: at each rank i, the fraction of the first i results found
/// among the documents at least as relevant as the i-th best judged document
pub struct AverageDynamicRecall {
    /// Cutoff.  Without one, the whole run is used
    pub cutoff: Option<usize>,
}

impl AverageDynamicRecall {
    /// Returns a new AverageDynamicRecall
    pub fn new(cutoff: Option<usize>) -> Self {
        AverageDynamicRecall { cutoff }
    }
}

impl From<&AtKParameters> for AverageDynamicRecall {
    fn from(parameters: &AtKParameters) -> Self {
        AverageDynamicRecall::new(parameters.k)
    }
}

impl Evaluator for AverageDynamicRecall {
    fn short_name(&self) -> String {
        short_name_at("ADR", self.cutoff)
    }

    fn full_name(&self) -> String {
        full_name_at("Average Dynamic Recall", self.cutoff)
    }

    fn evaluate(&self, ground_truth: &Run, system_run: &Run) -> f64 {
        let mut sorted: Vec<&ScoredDocument> =
            ground_truth.iter().filter(|r| r.score > 0.0).collect();
        sorted.sort_by_key(|r| FloatOrd(-r.score));

        let k = cutoff_or_len(self.cutoff, system_run)
            .min(system_run.len())
            .min(sorted.len());
        if k == 0 {
            return 0.0;
        }

        let retrieved: Vec<&Document> = system_run.top(Some(k)).iter().map(|r| &r.document).collect();
        let mut total = 0.0;
        for i in 0..k {
            let threshold = sorted[i].score;
            let allowed: HashSet<&Document> = sorted
                .iter()
                .take_while(|r| r.score >= threshold)
                .map(|r| &r.document)
                .collect();
            let seen: HashSet<&Document> = retrieved[..=i].iter().cloned().collect();
            total += seen.intersection(&allowed).count() as f64 / (i + 1) as f64;
        }

        total / k as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluators::test_utils::*;

    #[test]
    fn test_adr() {
        let task = fixture();
        let all = scores(&task, &AverageDynamicRecall::new(None));
        assert_close(all["301"], 0.208333);
        assert_close(all["302"], 0.888889);
        assert_close(all["303"], 0.0);

        let at2 = scores(&task, &AverageDynamicRecall::new(Some(2)));
        assert_close(at2["301"], 0.0);
        assert_close(at2["302"], 1.0);
    }

    #[test]
    fn test_names() {
        assert_eq!(AverageDynamicRecall::new(Some(3)).short_name(), "ADR@3");
        assert_eq!(AverageDynamicRecall::new(None).full_name(), "Average Dynamic Recall");
    }
}
