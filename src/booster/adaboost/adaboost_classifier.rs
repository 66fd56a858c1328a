//! Provides [`AdaBoostClassifier`],
//! an ensemble of decision stumps trained by [`AdaBoost`].
use crate::{
    Booster,
    Classifier,
    DecisionStump,
    StumpClassifier,
    WeightedMajority,
    Sample,
    Result,
};
use crate::weak_learner::decision_stump::dstump::DEFAULT_N_STEPS;

use super::AdaBoost;


/// A binary classifier that combines `n_estimators` decision stumps.
/// Each stump searches `10` thresholds per feature
/// (plus one below the minimum and one above the maximum).
///
/// # Example
/// ```
/// use stumpboost::prelude::*;
///
/// let sample = Sample::from_rows(vec![
///     vec![0.0], vec![1.0], vec![10.0], vec![11.0],
/// ]).unwrap();
/// let target = vec![-1, -1, 1, 1];
///
/// let mut clf = AdaBoostClassifier::new(1);
/// clf.fit(&sample, &target).unwrap();
///
/// assert_eq!(clf.predict(&sample), target);
/// ```
#[derive(Debug, Clone)]
pub struct AdaBoostClassifier {
    n_estimators: usize,
    n_sample: usize,
    n_feature: usize,
    ensemble: WeightedMajority<StumpClassifier>,
}


impl AdaBoostClassifier {
    /// Construct an unfitted classifier
    /// that combines `n_estimators` stumps.
    pub fn new(n_estimators: usize) -> Self {
        Self {
            n_estimators,
            n_sample: 0,
            n_feature: 0,
            ensemble: WeightedMajority::new(),
        }
    }


    /// Trains the classifier on `sample` with labels `target`.
    /// Each label must be `+1` or `-1`.
    ///
    /// Fails if `target.len()` differs from the number of examples.
    /// On failure, `self` keeps its previous state.
    pub fn fit(&mut self, sample: &Sample, target: &[i64]) -> Result<()> {
        let weak_learner = DecisionStump::init()
            .n_steps(DEFAULT_N_STEPS);

        let ensemble: WeightedMajority<StumpClassifier> =
            AdaBoost::init(sample, target)
                .n_estimators(self.n_estimators)
                .run(&weak_learner)?;

        let (n_sample, n_feature) = sample.shape();
        self.n_sample = n_sample;
        self.n_feature = n_feature;
        self.ensemble = ensemble;

        Ok(())
    }


    /// Returns the margin `sum( alpha[t] * h[t](x) )` of each row.
    /// An unfitted classifier returns `0.0` for every row.
    pub fn raw_predict(&self, sample: &Sample) -> Vec<f64> {
        self.ensemble.confidence_all(sample)
    }


    /// Returns the label of each row.
    /// A row with a positive margin is labeled as `+1`,
    /// and the others as `-1`.
    pub fn predict(&self, sample: &Sample) -> Vec<i64> {
        self.raw_predict(sample)
            .into_iter()
            .map(|fx| if fx > 0f64 { 1 } else { -1 })
            .collect()
    }


    /// Returns the number of stumps this classifier combines.
    pub fn n_estimators(&self) -> usize {
        self.n_estimators
    }


    /// Returns the shape `(n_sample, n_feature)` of the training sample
    /// recorded at the last successful `fit`.
    pub fn shape(&self) -> (usize, usize) {
        (self.n_sample, self.n_feature)
    }


    /// Returns the trained stumps and their voting weights.
    pub fn ensemble(&self) -> &WeightedMajority<StumpClassifier> {
        &self.ensemble
    }
}


impl Classifier for AdaBoostClassifier {
    fn confidence(&self, sample: &Sample, row: usize) -> f64 {
        self.ensemble.confidence(sample, row)
    }


    fn confidence_all(&self, sample: &Sample) -> Vec<f64> {
        self.raw_predict(sample)
    }
}
