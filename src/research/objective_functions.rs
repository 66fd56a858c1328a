use crate::{Classifier, Sample};
use crate::common::utils;


/// The objective function a booster minimizes,
/// evaluated by [`Logger`](crate::research::Logger) in each round.
pub trait ObjectiveFunction {
    /// Returns the name of the objective.
    fn name(&self) -> &str;

    /// Returns the objective value of `f` on `(sample, target)`.
    fn objective_value<H>(&self, sample: &Sample, target: &[i64], f: &H)
        -> f64
        where H: Classifier;
}


/// The exponential loss
/// ```txt
/// (1/m) sum( exp( - y[i] f(x[i]) ) ),
/// ```
/// which `AdaBoost` minimizes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExponentialLoss;


impl ExponentialLoss {
    /// Construct a new instance of `ExponentialLoss`.
    pub fn new() -> Self {
        Self
    }
}


impl ObjectiveFunction for ExponentialLoss {
    fn name(&self) -> &str {
        "Exponential Loss"
    }


    fn objective_value<H>(&self, sample: &Sample, target: &[i64], f: &H)
        -> f64
        where H: Classifier,
    {
        let n_sample = target.len() as f64;
        utils::margins(sample, target, f)
            .map(|yf| (- yf).exp())
            .sum::<f64>()
            / n_sample
    }
}
