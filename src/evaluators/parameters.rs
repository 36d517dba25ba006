use crate::metrics::{DiscountFunction, GainFunction};

fn default_min_score() -> f64 {
    1.0
}

fn default_beta() -> f64 {
    1.0
}

fn default_persistence() -> f64 {
    0.95
}

fn default_err_gain() -> GainFunction {
    GainFunction::Exponential(2.0)
}

#[derive(Deserialize, Debug, Clone)]
/// Parameters for evaluators that treat documents as relevant or not
pub struct BinaryParameters {
    /// Cutoff.  If none is provided, the whole run is used
    pub k: Option<usize>,
    /// Minimum relevance level for a document to count as relevant
    #[serde(default = "default_min_score")]
    pub min_score: f64,
}

#[derive(Deserialize, Debug, Clone)]
/// Parameters for binary evaluators without a cutoff
pub struct ThresholdParameters {
    /// Minimum relevance level for a document to count as relevant
    #[serde(default = "default_min_score")]
    pub min_score: f64,
}

#[derive(Deserialize, Debug, Clone)]
/// Parameters for the F-measure
pub struct FMeasureParameters {
    /// Cutoff
    pub k: Option<usize>,
    /// Minimum relevance level for a document to count as relevant
    #[serde(default = "default_min_score")]
    pub min_score: f64,
    /// Relative weight of recall over precision
    #[serde(default = "default_beta")]
    pub beta: f64,
}

#[derive(Deserialize, Debug, Clone)]
/// Parameters for interpolated precision
pub struct RecallPointParameters {
    /// Recall level in [0, 1]
    pub recall: f64,
    /// Minimum relevance level for a document to count as relevant
    #[serde(default = "default_min_score")]
    pub min_score: f64,
}

#[derive(Deserialize, Debug, Clone)]
/// Parameters for evaluators summing gains
pub struct GainParameters {
    /// Cutoff
    pub k: Option<usize>,
    /// Gain function, linear by default
    #[serde(default)]
    pub gain: GainFunction,
}

#[derive(Deserialize, Debug, Clone)]
/// Parameters for evaluators normalized by the gain of the highest relevance level
pub struct MaxGainParameters {
    /// Cutoff
    pub k: Option<usize>,
    /// Highest relevance level of the collection
    pub max_score: f64,
    /// Gain function, linear by default
    #[serde(default)]
    pub gain: GainFunction,
}

#[derive(Deserialize, Debug, Clone)]
/// Parameters for ERR and nERR
pub struct ErrParameters {
    /// Cutoff
    pub k: Option<usize>,
    /// Highest relevance level of the collection
    pub max_score: f64,
    /// Gain function, exponential in base 2 by default
    #[serde(default = "default_err_gain")]
    pub gain: GainFunction,
}

#[derive(Deserialize, Debug, Clone)]
/// Parameters for DCG and nDCG
pub struct DiscountedGainParameters {
    /// Cutoff
    pub k: Option<usize>,
    /// Gain function, linear by default
    #[serde(default)]
    pub gain: GainFunction,
    /// Discount function, `Logarithmic(2.0)` by default
    #[serde(default)]
    pub discount: DiscountFunction,
}

#[derive(Deserialize, Debug, Clone)]
/// Parameters for the Q-measure
pub struct QMeasureParameters {
    /// Cutoff
    pub k: Option<usize>,
    /// Weight of the cumulated gain against the rank
    #[serde(default = "default_beta")]
    pub beta: f64,
    /// Gain function, linear by default
    #[serde(default)]
    pub gain: GainFunction,
}

#[derive(Deserialize, Debug, Clone)]
/// Parameters for rank-biased precision
pub struct RbpParameters {
    /// Highest relevance level of the collection
    pub max_score: f64,
    /// Probability that the user moves on to the next document
    #[serde(default = "default_persistence")]
    pub persistence: f64,
    /// Gain function, linear by default
    #[serde(default)]
    pub gain: GainFunction,
}

#[derive(Deserialize, Debug, Clone)]
/// Parameters for evaluators that only take a cutoff
pub struct AtKParameters {
    /// Cutoff
    pub k: Option<usize>,
}
