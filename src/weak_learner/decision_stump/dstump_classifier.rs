//! Provides the decision stump hypothesis.
use crate::{Classifier, Sample};


/// Defines the ray that are predicted as `+1`.
#[derive(Debug, Eq, PartialEq, Clone, Copy, Hash)]
pub enum PositiveSide {
    /// The left-hand-side ray `x <= threshold` is predicted as `+1`.
    LHS,
    /// The right-hand-side ray `x >= threshold` is predicted as `+1`.
    RHS,
}


impl PositiveSide {
    /// Both sides in the order a stump search visits them.
    pub const ALL: [PositiveSide; 2] = [PositiveSide::LHS, PositiveSide::RHS];


    /// Returns the label of the value `val` for the given `threshold`.
    #[inline(always)]
    pub fn label(&self, val: f64, threshold: f64) -> i64 {
        let positive = match self {
            PositiveSide::LHS => val <= threshold,
            PositiveSide::RHS => val >= threshold,
        };
        if positive { 1 } else { -1 }
    }
}


/// The struct `StumpClassifier` defines the decision stump class.
/// Given a point over the `d`-dimensional space,
/// a stump predicts its label by comparing
/// a single coordinate `x[feature_index]` with `threshold`.
/// Note that a value equal to the threshold is predicted as `+1`
/// for both sides.
#[derive(Debug, Clone, PartialEq)]
pub struct StumpClassifier {
    /// The intercept of the stump
    pub threshold: f64,

    /// The index of the feature used in prediction.
    pub feature_index: usize,

    /// A ray to be predicted as `+1`
    pub positive_side: PositiveSide,
}


impl StumpClassifier {
    /// Produce a `StumpClassifier` that predicts `x[0] <= 0` as `+1`.
    pub fn new() -> StumpClassifier {
        StumpClassifier {
            threshold:     0.0,
            feature_index: 0,
            positive_side: PositiveSide::LHS,
        }
    }
}


impl Default for StumpClassifier {
    fn default() -> Self {
        Self::new()
    }
}


impl Classifier for StumpClassifier {
    fn confidence(&self, sample: &Sample, row: usize) -> f64 {
        let val = sample.column(self.feature_index)[row];
        self.positive_side.label(val, self.threshold) as f64
    }


    /// Only the column `feature_index` of `sample` is read.
    /// The sample must have at least `feature_index + 1` columns.
    fn predict_all(&self, sample: &Sample) -> Vec<i64> {
        let column = sample.column(self.feature_index);
        predict_by_threshold(column, self.threshold, self.positive_side)
    }
}


/// Labels each value of `column` by the rule `(threshold, side)`.
#[inline(always)]
pub(crate) fn predict_by_threshold(
    column: &[f64],
    threshold: f64,
    side: PositiveSide,
) -> Vec<i64>
{
    column.iter()
        .map(|&val| side.label(val, threshold))
        .collect()
}
