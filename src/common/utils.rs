//! This file provides some common functions
//! such as weighted error calculation.
use crate::{Sample, Classifier};


/// Returns the weighted misclassification rate
/// ```txt
/// sum( w[i] | y_true[i] != y_pred[i] ) / sum( w[i] ),
/// ```
/// where `w` is `sample_weight`.
///
/// The caller must guarantee a positive total weight;
/// otherwise the result is `NaN` (or some other non-finite value).
/// The three slices are assumed to have the same length.
#[inline(always)]
pub fn weighted_error_rate(
    y_true: &[i64],
    y_pred: &[i64],
    sample_weight: &[f64],
) -> f64
{
    let (error, total) = y_true.iter()
        .zip(y_pred)
        .zip(sample_weight)
        .fold((0f64, 0f64), |(error, total), ((t, p), &w)| {
            let error = if t != p { error + w } else { error };
            (error, total + w)
        });

    error / total
}


/// Returns the margin vector `y[i] * h(x[i])` of a hypothesis.
///
/// Time complexity: `O(m)`, where `m` is the number of training examples.
#[inline(always)]
pub fn margins<'a, H>(sample: &'a Sample, target: &'a [i64], h: &'a H)
    -> impl Iterator<Item = f64> + 'a
    where H: Classifier,
{
    target.iter()
        .enumerate()
        .map(|(i, &y)| y as f64 * h.confidence(sample, i))
}


/// Returns `true` if the sum of `weights` is positive and finite.
#[inline(always)]
pub(crate) fn has_positive_total(weights: &[f64]) -> bool {
    let total = weights.iter().sum::<f64>();
    total.is_finite() && total > 0f64
}
