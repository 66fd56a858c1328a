use crate::{Classifier, Sample};


/// Returns the fraction of the examples in `sample`
/// that `f` misclassifies.
/// Returns `0.0` for an empty sample.
pub fn zero_one_loss<H>(sample: &Sample, target: &[i64], f: &H) -> f64
    where H: Classifier,
{
    let n_sample = target.len();
    if n_sample == 0 { return 0f64; }

    let n_mistake = f.predict_all(sample)
        .into_iter()
        .zip(target)
        .filter(|(p, y)| p != *y)
        .count();

    n_mistake as f64 / n_sample as f64
}
