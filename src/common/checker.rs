//! This file defines some functions that checks some pre-conditions
//! E.g., Shape of data

use crate::{BoostError, Result, Sample};


/// Check whether the training sample has at least one example
/// and one feature.
#[inline(always)]
pub(crate) fn check_sample(sample: &Sample) -> Result<()> {
    let (n_sample, n_feature) = sample.shape();

    if n_sample == 0 {
        return Err(BoostError::EmptySample);
    }

    if n_feature == 0 {
        return Err(BoostError::NoFeature);
    }
    Ok(())
}


/// Check whether each example has exactly one label.
#[inline(always)]
pub(crate) fn check_target_length(sample: &Sample, target: &[i64])
    -> Result<()>
{
    let n_sample = sample.shape().0;
    let n_target = target.len();
    if n_sample != n_target {
        return Err(BoostError::TargetLengthMismatch { n_sample, n_target });
    }
    Ok(())
}


/// Check whether each example has exactly one weight.
#[inline(always)]
pub(crate) fn check_weight_length(sample: &Sample, weights: &[f64])
    -> Result<()>
{
    let n_sample = sample.shape().0;
    let n_weight = weights.len();
    if n_sample != n_weight {
        return Err(BoostError::WeightLengthMismatch { n_sample, n_weight });
    }
    Ok(())
}


/// Check whether every label is `+1` or `-1`.
#[inline(always)]
pub(crate) fn check_binary_labels(target: &[i64]) -> Result<()> {
    let invalid = target.iter()
        .position(|&y| y != 1 && y != -1);
    match invalid {
        Some(index) => Err(BoostError::InvalidLabel {
            index,
            value: target[index] as f64,
        }),
        None => Ok(()),
    }
}
