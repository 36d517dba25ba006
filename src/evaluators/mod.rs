//! Evaluators
//! ---
//!
//! This module contains the query level evaluators.  Each one scores the run a system
//! returned for a query against the ground truth of that query.
//!
//! Binary evaluators, where a document is relevant when its relevance level reaches
//! `min_score`:
//! - Precision, Recall, FMeasure: at an optional cutoff k
//! - AveragePrecision: divided by the number of relevant documents, as trec_eval does
//! - RPrecision: precision at the number of relevant documents
//! - ReciprocalRank: useful for computing MRR
//! - InterpolatedPrecision: at a recall level
//!
//! Graded evaluators, built on a gain function and, for DCG, a discount function:
//! - CumulatedGain, AverageGain, NormalizedAverageGain
//! - DCG, NDCG
//! - QMeasure
//! - RBP
//! - ERR, NERR
//! - ADR: average dynamic recall
//!
//! You'll add them to the evaluation config.
//!
//! ```json
//!    {
//!        "evaluators": [
//!            { "Precision": { "k": 10 } },
//!            { "NDCG": { "k": 20, "gain": { "Exponential": 2.0 } } }
//!        ]
//!    }
//! ```
//!
//! How to add new evaluators:
//! - Define the struct for the new parameters in parameters.rs or use an existing parameter type
//! - add a new variant to EvaluatorParameters in mod.rs
//! - define the evaluator struct and implement Evaluator for it in a new file
//! - add a new statement to the match in From<&EvaluatorParameters>
extern crate ir_core;

use std::convert::From;

/// Shared helpers for evaluators
pub mod utils;

/// Parameters for the different evaluators
pub mod parameters;

/// Evaluator for precision
pub mod precision;

/// Evaluator for recall
pub mod recall;

/// Evaluator for the F-measure
pub mod f_measure;

/// Evaluator for average precision (to compute MAP)
pub mod average_precision;

/// Evaluator for R-precision
pub mod r_precision;

/// Evaluator for reciprocal rank (to compute MRR)
pub mod reciprocal_rank;

/// Evaluator for interpolated precision at a recall level
pub mod interpolated_precision;

/// Evaluators for CG, AG and nAG
pub mod cumulated_gain;

/// Evaluators for DCG and nDCG
pub mod dcg;

/// Evaluator for the Q-measure
pub mod q_measure;

/// Evaluator for rank-biased precision
pub mod rbp;

/// Evaluators for ERR and nERR
pub mod err;

/// Evaluator for average dynamic recall
pub mod adr;

use self::ir_core::Evaluator;

use crate::evaluators::adr::AverageDynamicRecall;
use crate::evaluators::average_precision::AveragePrecision;
use crate::evaluators::cumulated_gain::{AverageGain, CumulatedGain, NormalizedAverageGain};
use crate::evaluators::dcg::{DiscountedCumulatedGain, NormalizedDiscountedCumulatedGain};
use crate::evaluators::err::{ExpectedReciprocalRank, NormalizedExpectedReciprocalRank};
use crate::evaluators::f_measure::FMeasure;
use crate::evaluators::interpolated_precision::InterpolatedPrecision;
use crate::evaluators::parameters::*;
use crate::evaluators::precision::Precision;
use crate::evaluators::q_measure::QMeasure;
use crate::evaluators::r_precision::RPrecision;
use crate::evaluators::rbp::RankBiasedPrecision;
use crate::evaluators::recall::Recall;
use crate::evaluators::reciprocal_rank::ReciprocalRank;

#[derive(Deserialize, Debug, Clone)]
/// Parameters for the evaluators
pub enum EvaluatorParameters {
    /// Config for precision
    Precision(BinaryParameters),
    /// Config for recall
    Recall(BinaryParameters),
    /// Config for the F-measure
    FMeasure(FMeasureParameters),
    /// Config for average precision
    AveragePrecision(BinaryParameters),
    /// Config for R-precision
    RPrecision(ThresholdParameters),
    /// Config for reciprocal rank
    ReciprocalRank(ThresholdParameters),
    /// Config for interpolated precision
    InterpolatedPrecision(RecallPointParameters),
    /// Config for cumulated gain
    CumulatedGain(GainParameters),
    /// Config for average gain
    AverageGain(GainParameters),
    /// Config for normalized average gain
    NormalizedAverageGain(MaxGainParameters),
    /// Config for DCG
    DCG(DiscountedGainParameters),
    /// Config for NDCG
    NDCG(DiscountedGainParameters),
    /// Config for the Q-measure
    QMeasure(QMeasureParameters),
    /// Config for rank-biased precision
    RBP(RbpParameters),
    /// Config for ERR
    ERR(ErrParameters),
    /// Config for normalized ERR
    NERR(ErrParameters),
    /// Config for average dynamic recall
    ADR(AtKParameters),
}

impl From<&EvaluatorParameters> for Box<dyn Evaluator> {
    /// Converts evaluator parameters to an actual evaluator
    fn from(ep: &EvaluatorParameters) -> Box<dyn Evaluator> {
        match ep {
            EvaluatorParameters::Precision(ref param) => Box::new(Precision::from(param)),
            EvaluatorParameters::Recall(ref param) => Box::new(Recall::from(param)),
            EvaluatorParameters::FMeasure(ref param) => Box::new(FMeasure::from(param)),
            EvaluatorParameters::AveragePrecision(ref param) => {
                Box::new(AveragePrecision::from(param))
            }
            EvaluatorParameters::RPrecision(ref param) => Box::new(RPrecision::from(param)),
            EvaluatorParameters::ReciprocalRank(ref param) => {
                Box::new(ReciprocalRank::from(param))
            }
            EvaluatorParameters::InterpolatedPrecision(ref param) => {
                Box::new(InterpolatedPrecision::from(param))
            }
            EvaluatorParameters::CumulatedGain(ref param) => Box::new(CumulatedGain::from(param)),
            EvaluatorParameters::AverageGain(ref param) => Box::new(AverageGain::from(param)),
            EvaluatorParameters::NormalizedAverageGain(ref param) => {
                Box::new(NormalizedAverageGain::from(param))
            }
            EvaluatorParameters::DCG(ref param) => Box::new(DiscountedCumulatedGain::from(param)),
            EvaluatorParameters::NDCG(ref param) => {
                Box::new(NormalizedDiscountedCumulatedGain::from(param))
            }
            EvaluatorParameters::QMeasure(ref param) => Box::new(QMeasure::from(param)),
            EvaluatorParameters::RBP(ref param) => Box::new(RankBiasedPrecision::from(param)),
            EvaluatorParameters::ERR(ref param) => Box::new(ExpectedReciprocalRank::from(param)),
            EvaluatorParameters::NERR(ref param) => {
                Box::new(NormalizedExpectedReciprocalRank::from(param))
            }
            EvaluatorParameters::ADR(ref param) => Box::new(AverageDynamicRecall::from(param)),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_utils {
    use std::collections::BTreeMap;
    use std::io::Cursor;

    use ir_core::{Document, Evaluator, Query, Run, System, Task};
    use ir_data::{read_runs, TrecQrels, TrecRun};

    /// Judgments for three queries; 303 has no relevant document
    pub const QRELS: &str = "\
301 0 D1 1
301 0 D2 0
301 0 D3 2
301 0 D4 0
301 0 D5 1
301 0 D6 4
301 0 D7 -1
302 0 D1 3
302 0 D8 2
302 0 D9 0
302 0 D10 1
303 0 D11 0
303 0 D12 0
";

    /// Run of system STANDARD; the lines of 302 are out of rank order
    pub const RUN: &str = "\
301 Q0 D4 1 9.0 STANDARD
301 Q0 D1 2 8.5 STANDARD
301 Q0 X1 3 8.0 STANDARD
301 Q0 D6 4 7.0 STANDARD
301 Q0 D2 5 6.5 STANDARD
301 Q0 D3 6 6.0 STANDARD
302 Q0 D8 2 4.0 STANDARD
302 Q0 D1 1 5.0 STANDARD
302 Q0 D11 3 3.0 STANDARD
302 Q0 D10 4 2.0 STANDARD
303 Q0 D12 1 1.5 STANDARD
303 Q0 D13 2 1.0 STANDARD
";

    pub fn fixture() -> Task {
        let mut task = Task::new("fixture");
        let qrels = read_runs(&TrecQrels, Cursor::new(QRELS), &mut task).expect("qrels should parse");
        let runs = read_runs(&TrecRun::default(), Cursor::new(RUN), &mut task).expect("run should parse");
        task.add_ground_truths(qrels);
        task.add_system_runs(runs);
        task
    }

    /// Scores of system STANDARD for every query
    pub fn scores<E: Evaluator>(task: &Task, evaluator: &E) -> BTreeMap<Query, f64> {
        let system = task.systems().get("STANDARD").cloned().expect("STANDARD is registered");
        task.evaluate_all_queries(&system, evaluator).expect("every query is judged")
    }

    /// Ground truth and STANDARD run of a query
    pub fn pair<'a>(task: &'a Task, query: &str) -> (&'a Run, &'a Run) {
        let query = task.queries().get(query).expect("query is registered");
        let system = task.systems().get("STANDARD").expect("STANDARD is registered");
        (
            task.ground_truth(query).expect("query is judged"),
            task.run(system, query).expect("STANDARD answered the query"),
        )
    }

    /// Judgments where `a` is judged 3 and then rejudged 1, and the run `b, a` that
    /// matches the final judgments exactly
    pub fn doubly_judged() -> (Run, Run) {
        let mut truth = Run::new(Query::new("q"), System::new("Qrel"));
        truth.push(Document::new("a"), 3.0);
        truth.push(Document::new("b"), 2.0);
        truth.push(Document::new("a"), 1.0);

        let mut run = Run::new(Query::new("q"), System::new("sys"));
        run.push(Document::new("b"), 2.0);
        run.push(Document::new("a"), 1.0);
        (truth, run)
    }

    pub fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-5,
            "expected {} but got {}",
            expected,
            actual
        );
    }
}
