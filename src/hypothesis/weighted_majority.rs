use crate::{
    Classifier,
    Sample,
};


/// A weighted majority vote of classifiers.
/// The boosting algorithms in this library return this struct.
///
/// The `k`-th weight is the voting weight (`alpha`)
/// of the `k`-th hypothesis.
/// Members are kept in the order they were pushed.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedMajority<H> {
    /// Weights on each hypothesis in `self.hypotheses`.
    pub weights: Vec<f64>,
    /// Set of hypotheses.
    pub hypotheses: Vec<H>,
}


impl<H> WeightedMajority<H> {
    /// Construct an empty `WeightedMajority`.
    pub fn new() -> Self {
        Self { weights: Vec::new(), hypotheses: Vec::new(), }
    }


    /// Append a pair `(weight, hypothesis)` to the current combined hypothesis.
    #[inline]
    pub fn push(&mut self, weight: f64, hypothesis: H) {
        self.weights.push(weight);
        self.hypotheses.push(hypothesis);
    }


    /// Returns the number of hypotheses.
    #[inline]
    pub fn len(&self) -> usize {
        self.hypotheses.len()
    }


    /// Returns `true` if `self` has no hypothesis.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.hypotheses.is_empty()
    }


    /// Returns an iterator over the pairs `(weight, hypothesis)`.
    pub fn iter(&self) -> impl Iterator<Item = (f64, &H)> + '_ {
        self.weights.iter()
            .copied()
            .zip(&self.hypotheses[..])
    }


    /// Decompose the combined hypothesis
    /// into the two vectors `Vec<f64>` and `Vec<H>`
    #[inline]
    pub fn decompose(self) -> (Vec<f64>, Vec<H>) {
        (self.weights, self.hypotheses)
    }
}


impl<H> Default for WeightedMajority<H> {
    fn default() -> Self {
        Self::new()
    }
}


impl<H> Classifier for WeightedMajority<H>
    where H: Classifier,
{
    fn confidence(&self, sample: &Sample, row: usize) -> f64 {
        self.iter()
            .fold(0f64, |acc, (w, h)| acc + h.confidence(sample, row) * w)
    }


    /// Accumulates `weight * h(x)` hypothesis by hypothesis.
    fn confidence_all(&self, sample: &Sample) -> Vec<f64> {
        let n_sample = sample.shape().0;
        let mut confidences = vec![0f64; n_sample];
        for (w, h) in self.iter() {
            confidences.iter_mut()
                .zip(h.confidence_all(sample))
                .for_each(|(acc, hx)| { *acc += hx * w; });
        }
        confidences
    }
}
