use crate::{Result, Sample};


/// An interface that returns a weak hypothesis.
pub trait WeakLearner {
    /// Weak hypothesis type.
    type Hypothesis;

    /// Returns the name of the weak learner.
    fn name(&self) -> &str;

    /// Returns the information of the weak learner as `String`.
    fn info(&self) -> Option<Vec<(&str, String)>> {
        None
    }

    /// Returns a hypothesis trained on `sample` and `target`
    /// with the per-example weights `weights`.
    /// The weights need not sum to one.
    fn produce(&self, sample: &Sample, target: &[i64], weights: &[f64])
        -> Result<Self::Hypothesis>;
}
