//! Metrics
//! ---
//! Contains the gain and discount functions shared by the graded evaluators, along with
//! the numeric kernels they are built from.
//!
//! Gain functions map a relevance level to a gain; discount functions map a 1-based rank
//! to the value the gain is divided by.

#[derive(Clone, Copy, Deserialize, Debug, PartialEq)]
/// Maps a relevance level to a gain
pub enum GainFunction {
    /// Gain is the relevance level itself
    Linear,
    /// Gain is `base^score`, or 0 when the score is 0
    Exponential(f64),
}

impl GainFunction {
    /// Computes the gain of a relevance level
    pub fn gain(&self, score: f64) -> f64 {
        match *self {
            GainFunction::Linear => score,
            GainFunction::Exponential(_) if score == 0.0 => 0.0,
            GainFunction::Exponential(base) => base.powf(score),
        }
    }
}

impl Default for GainFunction {
    fn default() -> Self {
        GainFunction::Linear
    }
}

#[derive(Clone, Copy, Deserialize, Debug, PartialEq)]
/// Maps a 1-based rank to the value dividing its gain
pub enum DiscountFunction {
    /// No discount before rank `base`, then `log_base(rank)` (Järvelin & Kekäläinen)
    Original(f64),
    /// `log_base(rank + base - 1)`, so rank 1 is never discounted
    Logarithmic(f64),
}

impl DiscountFunction {
    /// Computes the discount at `rank`
    pub fn discount(&self, rank: usize) -> f64 {
        let rank = rank as f64;
        match *self {
            DiscountFunction::Original(base) if rank < base => 1.0,
            DiscountFunction::Original(base) => rank.log(base),
            DiscountFunction::Logarithmic(base) => (rank + base - 1.0).log(base),
        }
    }
}

impl Default for DiscountFunction {
    fn default() -> Self {
        DiscountFunction::Logarithmic(2.0)
    }
}

/// Computes DCG given the gain found at each rank, starting at rank 1
pub fn dcg(gains: &[f64], discount: &DiscountFunction) -> f64 {
    gains
        .iter()
        .enumerate()
        .map(|(i, gain)| gain / discount.discount(i + 1))
        .sum()
}

/// Computes ERR given the probability of satisfying the user at each rank.  Ranks with
/// a probability of 0 still count towards the rank of later documents.
pub fn get_err(probabilities: &[f64]) -> f64 {
    let mut err = 0.0;
    let mut p = 1.0;
    for (i, relevance) in probabilities.iter().enumerate() {
        err += p * relevance / ((i + 1) as f64);
        p *= 1. - relevance;
    }

    err
}

/// Computes the mean
/// # Arguments
///
/// * `data` list of numbers to average
/// * `k_opt` number of leading values to include. If none is provided, uses all values
pub fn get_mean(data: &[f64], k_opt: Option<usize>) -> f64 {
    let k = k_opt.unwrap_or(data.len()).min(data.len());
    if k == 0 {
        return 0.0;
    }
    let total = data[..k].iter().sum::<f64>();
    total / (k as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        let data = [1., 2., 6.];
        assert_eq!(get_mean(&data, None), 3.);
        assert_eq!(get_mean(&data, Some(2)), 1.5);
        assert_eq!(get_mean(&data, Some(10)), 3.);
        assert_eq!(get_mean(&[], None), 0.);
    }

    #[test]
    fn test_gain() {
        assert_eq!(GainFunction::Linear.gain(3.), 3.);
        assert_eq!(GainFunction::Linear.gain(0.), 0.);
        assert_eq!(GainFunction::Exponential(2.).gain(0.), 0.);
        assert_eq!(GainFunction::Exponential(2.).gain(1.), 2.);
        assert_eq!(GainFunction::Exponential(2.).gain(3.), 8.);
        assert_eq!(GainFunction::default(), GainFunction::Linear);
    }

    #[test]
    fn test_discount() {
        let original = DiscountFunction::Original(2.);
        assert_eq!(original.discount(1), 1.);
        assert_eq!(original.discount(2), 1.);
        assert!((original.discount(4) - 2.).abs() < 1e-12);

        let original10 = DiscountFunction::Original(10.);
        assert_eq!(original10.discount(9), 1.);
        assert!((original10.discount(10) - 1.).abs() < 1e-12);

        let log = DiscountFunction::default();
        assert!((log.discount(1) - 1.).abs() < 1e-12);
        assert!((log.discount(3) - 2.).abs() < 1e-12);
    }

    #[test]
    fn test_dcg() {
        let gains = [4., 0., 2., 1., 2.];
        let original = dcg(&gains, &DiscountFunction::Original(2.));
        assert!((original - (4. + 2. / 3f64.log2() + 0.5 + 2. / 5f64.log2())).abs() < 1e-9);
        assert_eq!(dcg(&[], &DiscountFunction::default()), 0.);
    }

    #[test]
    fn test_err() {
        let probabilities = [15. / 16., 0., 3. / 16., 1. / 16., 3. / 16.];
        assert_eq!(get_err(&[]), 0.);
        assert!((get_err(&probabilities[..1]) - 0.9375).abs() < 1e-6);
        assert!((get_err(&probabilities[..2]) - 0.9375).abs() < 1e-6);
        assert!((get_err(&probabilities[..3]) - 0.94140625).abs() < 1e-6);
        assert!((get_err(&probabilities[..4]) - 0.9421997).abs() < 1e-6);
        assert!((get_err(&probabilities) - 0.94398493).abs() < 1e-6);
    }
}
