//! Load
//! ---
//!
//! This defines the methods to load the evaluation config
extern crate ir_core;
extern crate serde_json;
extern crate thiserror;

use std::fs;
use std::io;

use self::ir_core::Evaluator;
use self::thiserror::Error;

use crate::evaluators::parameters::*;
use crate::evaluators::EvaluatorParameters;
use crate::metrics::{DiscountFunction, GainFunction};

#[derive(Deserialize, Debug)]
/// Evaluation config: the evaluators to report, in order
pub struct EvaluationConfig {
    /// Parameters of each evaluator
    pub evaluators: Vec<EvaluatorParameters>,
}

/// Failures while reading the evaluation config
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("error reading config file: {0}")]
    Io(#[from] io::Error),

    /// The config is not well-formatted
    #[error("evaluation config JSON was not well-formatted: {0}")]
    Json(#[from] serde_json::Error),
}

/// Builds the evaluators described by the config
pub fn create_evaluators(config: &EvaluationConfig) -> Vec<Box<dyn Evaluator>> {
    config.evaluators.iter().map(|params| params.into()).collect()
}

/// Parses an evaluation config
pub fn parse_config(contents: &str) -> Result<Vec<Box<dyn Evaluator>>, ConfigError> {
    let config: EvaluationConfig = serde_json::from_str(contents)?;
    Ok(create_evaluators(&config))
}

/// Reads an evaluation config from a file
pub fn read_config(fname: &str) -> Result<Vec<Box<dyn Evaluator>>, ConfigError> {
    let file_contents = fs::read_to_string(fname)?;
    parse_config(&file_contents)
}

/// Evaluators used when no config is given, close to the trec_eval summary
pub fn default_evaluators() -> Vec<Box<dyn Evaluator>> {
    let binary = |k: Option<usize>| BinaryParameters { k, min_score: 1.0 };
    let ndcg = |k: Option<usize>| DiscountedGainParameters {
        k,
        gain: GainFunction::Linear,
        discount: DiscountFunction::default(),
    };
    let threshold = ThresholdParameters { min_score: 1.0 };

    let config = EvaluationConfig {
        evaluators: vec![
            EvaluatorParameters::AveragePrecision(binary(None)),
            EvaluatorParameters::RPrecision(threshold.clone()),
            EvaluatorParameters::ReciprocalRank(threshold),
            EvaluatorParameters::Precision(binary(Some(5))),
            EvaluatorParameters::Precision(binary(Some(10))),
            EvaluatorParameters::Precision(binary(Some(20))),
            EvaluatorParameters::Recall(binary(Some(100))),
            EvaluatorParameters::NDCG(ndcg(None)),
            EvaluatorParameters::NDCG(ndcg(Some(10))),
            EvaluatorParameters::QMeasure(QMeasureParameters {
                k: None,
                beta: 1.0,
                gain: GainFunction::Linear,
            }),
        ],
    };
    create_evaluators(&config)
}

#[cfg(test)]
mod tests {
    extern crate tempfile;

    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_config() {
        let config = r#"{
            "evaluators": [
                { "Precision": { "k": 10 } },
                { "RPrecision": {} },
                { "FMeasure": { "k": 5, "min_score": 2.0, "beta": 0.5 } },
                { "InterpolatedPrecision": { "recall": 0.3 } },
                { "NDCG": { "k": 20, "gain": { "Exponential": 2.0 }, "discount": { "Original": 2.0 } } },
                { "DCG": {} },
                { "NormalizedAverageGain": { "max_score": 3.0 } },
                { "RBP": { "max_score": 3.0, "persistence": 0.8 } },
                { "ERR": { "k": 20, "max_score": 4.0 } },
                { "NERR": { "max_score": 4.0, "gain": "Linear" } },
                { "QMeasure": { "beta": 0.5 } },
                { "ADR": { "k": 10 } }
            ]
        }"#;
        let evaluators = parse_config(config).unwrap();
        let names: Vec<String> = evaluators.iter().map(|e| e.short_name()).collect();
        assert_eq!(
            names,
            vec!["P@10", "RP", "F@5", "iPR@0.3", "nDCG@20", "DCG", "nAG", "RBP", "ERR@20", "nERR", "Q", "ADR@10"]
        );
    }

    #[test]
    fn test_parameter_defaults() {
        let config: EvaluationConfig = serde_json::from_str(
            r#"{ "evaluators": [ { "ERR": { "max_score": 4.0 } }, { "DCG": { "k": 3 } }, { "Recall": {} } ] }"#,
        )
        .unwrap();
        match config.evaluators[0] {
            EvaluatorParameters::ERR(ref p) => {
                assert_eq!(p.gain, GainFunction::Exponential(2.0));
                assert_eq!(p.k, None);
            }
            ref other => panic!("unexpected parameters {:?}", other),
        }
        match config.evaluators[1] {
            EvaluatorParameters::DCG(ref p) => {
                assert_eq!(p.gain, GainFunction::Linear);
                assert_eq!(p.discount, DiscountFunction::Logarithmic(2.0));
            }
            ref other => panic!("unexpected parameters {:?}", other),
        }
        match config.evaluators[2] {
            EvaluatorParameters::Recall(ref p) => assert_eq!(p.min_score, 1.0),
            ref other => panic!("unexpected parameters {:?}", other),
        }
    }

    #[test]
    fn test_bad_config() {
        assert!(matches!(
            parse_config(r#"{ "evaluators": [ { "Unknown": {} } ] }"#),
            Err(ConfigError::Json(_))
        ));
        assert!(matches!(
            read_config("/does/not/exist.json"),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_read_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "evaluators": [ {{ "AveragePrecision": {{ "k": 1000 }} }} ] }}"#).unwrap();
        let path = file.path().to_str().unwrap().to_string();
        let evaluators = read_config(&path).unwrap();
        assert_eq!(evaluators.len(), 1);
        assert_eq!(evaluators[0].full_name(), "Average Precision at 1000");
    }

    #[test]
    fn test_default_evaluators() {
        let names: Vec<String> = default_evaluators().iter().map(|e| e.short_name()).collect();
        assert_eq!(
            names,
            vec!["AP", "RP", "RR", "P@5", "P@10", "P@20", "R@100", "nDCG", "nDCG@10", "Q"]
        );
    }
}
