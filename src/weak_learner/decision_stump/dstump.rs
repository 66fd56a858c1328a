//! Provides the decision stump weak learner.
use rayon::prelude::*;

use crate::{Result, Sample, WeakLearner};
use crate::common::{checker, utils};

use super::dstump_classifier::{
    predict_by_threshold,
    PositiveSide,
    StumpClassifier,
};


/// The default number of intervals a feature range is divided into.
pub const DEFAULT_N_STEPS: usize = 10;


/// The struct `DecisionStump` generates a [`StumpClassifier`]
/// for each call of `self.fit(..)`.
///
/// For each feature, the range `[min, max]` of the feature is divided into
/// `n_steps` intervals of equal width `s`, and the thresholds
/// ```txt
/// min + k * s,    k = -1, 0, 1, ..., n_steps
/// ```
/// are examined for both [`PositiveSide`]s.
/// The rule with the lowest weighted error rate is returned.
/// If several rules attain the lowest error,
/// the last one in the scan order
/// (feature, then threshold, then `LHS` before `RHS`) is chosen.
///
/// # Example
/// ```
/// use stumpboost::prelude::*;
///
/// let sample = Sample::from_rows(vec![
///     vec![0.0], vec![1.0], vec![10.0], vec![11.0],
/// ]).unwrap();
/// let target = vec![-1, -1, 1, 1];
/// let weights = vec![1.0; 4];
///
/// let stump = DecisionStump::init()
///     .n_steps(10)
///     .fit(&sample, &target, &weights)
///     .unwrap();
/// assert_eq!(stump.predict_all(&sample), target);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DecisionStump {
    n_steps: usize,
}


impl DecisionStump {
    /// Initializes a `DecisionStump` with `DEFAULT_N_STEPS` steps.
    pub fn init() -> Self {
        Self { n_steps: DEFAULT_N_STEPS }
    }


    /// Set the number of intervals per feature.
    ///
    /// # Panics
    /// Panics if `n_steps == 0`.
    pub fn n_steps(mut self, n_steps: usize) -> Self {
        assert!(n_steps > 0, "the number of steps must be positive");
        self.n_steps = n_steps;
        self
    }


    /// Returns the number of intervals per feature.
    pub fn steps(&self) -> usize {
        self.n_steps
    }


    /// Returns the stump that minimizes the weighted error rate
    /// on `(sample, target)` with respect to `weights`.
    ///
    /// Fails if `target` or `weights` do not have one entry per example,
    /// or if the sample is empty.
    pub fn fit(&self, sample: &Sample, target: &[i64], weights: &[f64])
        -> Result<StumpClassifier>
    {
        checker::check_target_length(sample, target)?;
        checker::check_weight_length(sample, weights)?;
        checker::check_sample(sample)?;

        let n_feature = sample.shape().1;

        let candidates = (0..n_feature).into_par_iter()
            .map(|j| self.best_on_feature(sample, j, target, weights))
            .collect::<Vec<_>>();

        // Reduce in the feature order; the last minimal rule wins.
        let mut min_error = f64::INFINITY;
        let mut stump = StumpClassifier::new();
        for (error, h) in candidates.into_iter().flatten() {
            if error <= min_error {
                min_error = error;
                stump = h;
            }
        }

        Ok(stump)
    }


    /// Scans the thresholds on the `j`-th feature.
    /// Returns `None` if no rule has a comparable error (e.g., `NaN`).
    fn best_on_feature(
        &self,
        sample: &Sample,
        j: usize,
        target: &[i64],
        weights: &[f64],
    ) -> Option<(f64, StumpClassifier)>
    {
        let feature = &sample.features()[j];
        let column = feature.values();
        let (min, max) = feature.min_max()?;
        let step_size = (max - min) / self.n_steps as f64;

        let mut min_error = f64::INFINITY;
        let mut best = None;
        for step in -1..=(self.n_steps as isize) {
            let threshold = min + step as f64 * step_size;
            for side in PositiveSide::ALL {
                let predictions = predict_by_threshold(column, threshold, side);
                let error = utils::weighted_error_rate(
                    target, &predictions, weights
                );

                if error <= min_error {
                    min_error = error;
                    best = Some(StumpClassifier {
                        threshold,
                        feature_index: j,
                        positive_side: side,
                    });
                }
            }
        }

        best.map(|h| (min_error, h))
    }
}


impl Default for DecisionStump {
    fn default() -> Self {
        Self::init()
    }
}


impl WeakLearner for DecisionStump {
    type Hypothesis = StumpClassifier;


    fn name(&self) -> &str {
        "Decision Stump"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let info = vec![
            ("# of steps", format!("{}", self.n_steps)),
        ];
        Some(info)
    }


    fn produce(&self, sample: &Sample, target: &[i64], weights: &[f64])
        -> Result<Self::Hypothesis>
    {
        self.fit(sample, target, weights)
    }
}
