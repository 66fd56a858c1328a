//! Provides [`AdaBoost`](AdaBoost) by Freund & Schapire, 1995.
use crate::{
    Booster,
    WeakLearner,
    Classifier,
    WeightedMajority,
    Sample,
    Result,

    common::{checker, utils},
    research::CurrentHypothesis,
};

use std::ops::ControlFlow;


/// The number of rounds used when `n_estimators` is not specified.
pub const DEFAULT_N_ESTIMATORS: usize = 50;


/// Defines `AdaBoost`.
/// This struct is based on the book:
/// [Boosting: Foundations and Algorithms](https://direct.mit.edu/books/oa-monograph/5342/BoostingFoundations-and-Algorithms)
/// by Robert E. Schapire and Yoav Freund.
///
/// `AdaBoost` runs exactly `n_estimators` rounds.
/// In each round,
/// 1. the weak learner returns a hypothesis `h` for the current weights `w`,
/// 2. the weighted error rate `e` of `h` on the training sample gives
///    the voting weight `alpha = ln((1 - e) / e) / 2`,
/// 3. `(alpha, h)` is appended to the combined hypothesis `f`, and
/// 4. every weight is updated as `w[i] *= exp(- y[i] f(x[i]))`,
///    where `f(x[i])` is the margin of the whole combined hypothesis.
///
/// The weights start from `1.0` and are never normalized.
/// `alpha` is not clamped, so a hypothesis with zero error gets
/// an infinite voting weight.
/// Before each round, the weights are reset to `1.0`
/// if their total is not a positive finite number.
/// This happens after a round with an infinite `alpha`
/// (every weight becomes `0`),
/// and also when the unnormalized weights of a long run
/// overflow to infinity or all underflow to zero.
/// In both cases the weighted error rate would be undefined.
///
/// # Example
/// ```no_run
/// use stumpboost::prelude::*;
///
/// let (sample, target) = SampleReader::new()
///     .file("/path/to/csv/file.csv")
///     .has_header(true)
///     .target_feature("class")
///     .read()
///     .unwrap();
///
/// let mut booster = AdaBoost::init(&sample, &target)
///     .n_estimators(100);
/// let weak_learner = DecisionStump::init()
///     .n_steps(10);
///
/// let f = booster.run(&weak_learner).unwrap();
/// let predictions: Vec<i64> = f.predict_all(&sample);
/// ```
pub struct AdaBoost<'a, H> {
    // Training sample
    sample: &'a Sample,

    // Labels of the training sample.
    target: &'a [i64],

    // Weights on the training examples.
    weights: Vec<f64>,

    // Number of rounds.
    n_estimators: usize,

    // Combined hypothesis built so far.
    ensemble: WeightedMajority<H>,
}


impl<'a, H> AdaBoost<'a, H> {
    /// Initialize the `AdaBoost`.
    /// This method sets some parameters `AdaBoost` holds.
    pub fn init(sample: &'a Sample, target: &'a [i64]) -> Self {
        let n_sample = sample.shape().0;

        AdaBoost {
            sample,
            target,

            weights: vec![1f64; n_sample],
            n_estimators: DEFAULT_N_ESTIMATORS,

            ensemble: WeightedMajority::new(),
        }
    }


    /// Set the number of rounds.
    pub fn n_estimators(mut self, n_estimators: usize) -> Self {
        self.n_estimators = n_estimators;
        self
    }


    /// Returns the current weights on the training examples.
    pub fn sample_weights(&self) -> &[f64] {
        &self.weights[..]
    }


    /// Returns the combined hypothesis built so far.
    pub fn ensemble(&self) -> &WeightedMajority<H> {
        &self.ensemble
    }


    /// Returns the voting weight for the weighted error rate `error`.
    #[inline]
    fn alpha(error: f64) -> f64 {
        ((1f64 - error) / error).ln() / 2f64
    }
}


impl<H> AdaBoost<'_, H>
    where H: Classifier,
{
    /// Multiplies each weight by `exp(- y f(x))`,
    /// where `f` is the whole combined hypothesis.
    fn update_weights(&mut self) {
        let margins = self.ensemble.confidence_all(self.sample);

        self.weights.iter_mut()
            .zip(self.target)
            .zip(margins)
            .for_each(|((w, &y), fx)| {
                *w *= (- (y as f64) * fx).exp();
            });
    }
}


impl<H> Booster<H> for AdaBoost<'_, H>
    where H: Classifier + Clone,
{
    type Output = WeightedMajority<H>;


    fn name(&self) -> &str {
        "AdaBoost"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let (n_sample, n_feature) = self.sample.shape();
        let info = Vec::from([
            ("# of examples", format!("{n_sample}")),
            ("# of features", format!("{n_feature}")),
            ("# of rounds", format!("{}", self.n_estimators)),
        ]);
        Some(info)
    }


    fn preprocess(&mut self) -> Result<()> {
        checker::check_target_length(self.sample, self.target)?;
        checker::check_binary_labels(self.target)?;

        let n_sample = self.sample.shape().0;
        self.weights = vec![1f64; n_sample];
        self.ensemble = WeightedMajority::new();

        Ok(())
    }


    fn boost<W>(
        &mut self,
        weak_learner: &W,
        iteration: usize,
    ) -> ControlFlow<Result<usize>>
        where W: WeakLearner<Hypothesis = H>,
    {
        if self.n_estimators < iteration {
            return ControlFlow::Break(Ok(self.n_estimators));
        }

        // The weighted error rate is undefined for a zero total weight.
        if !utils::has_positive_total(&self.weights) {
            self.weights.iter_mut()
                .for_each(|w| { *w = 1f64; });
        }

        // Get a new hypothesis
        let h = weak_learner.produce(self.sample, self.target, &self.weights);
        let h = match h {
            Ok(h) => h,
            Err(e) => return ControlFlow::Break(Err(e)),
        };

        let predictions = h.predict_all(self.sample);
        let error = utils::weighted_error_rate(
            self.target, &predictions, &self.weights
        );

        let alpha = Self::alpha(error);
        self.ensemble.push(alpha, h);

        self.update_weights();

        ControlFlow::Continue(())
    }


    fn postprocess(&mut self) -> Self::Output {
        self.ensemble.clone()
    }
}


impl<H> CurrentHypothesis for AdaBoost<'_, H>
    where H: Classifier + Clone,
{
    type Output = WeightedMajority<H>;


    fn current_hypothesis(&self) -> Self::Output {
        self.ensemble.clone()
    }
}
