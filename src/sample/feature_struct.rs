use polars::prelude::*;
use std::ops::Index;
use std::slice::Iter;

use crate::{BoostError, Result};


/// Dense representation of a feature (a column of the sample).
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    /// Feature name
    pub name: String,
    /// Feature values.
    pub sample: Vec<f64>,
}


impl Feature {
    /// Construct an empty feature named `name`.
    pub fn new<T: ToString>(name: T) -> Self {
        let name = name.to_string();
        Self { name, sample: Vec::new(), }
    }


    /// Construct a feature from the given values.
    pub fn with_values<T: ToString>(name: T, sample: Vec<f64>) -> Self {
        let name = name.to_string();
        Self { name, sample, }
    }


    /// Convert `polars::Series` into `Feature`.
    /// Integer columns are cast to `f64`.
    pub fn from_series(series: &Series) -> Result<Self> {
        let name = series.name().to_string();

        let series = series.cast(&DataType::Float64)?;
        let sample = series.f64()?
            .into_iter()
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| BoostError::MissingValue(name.clone()))?;

        Ok(Self { name, sample, })
    }


    /// Get the feature name.
    pub fn name(&self) -> &str {
        &self.name
    }


    pub(super) fn replace_name<S: ToString>(&mut self, name: S) -> String {
        std::mem::replace(&mut self.name, name.to_string())
    }


    /// Append an example to this feature.
    pub fn append(&mut self, x: f64) {
        self.sample.push(x);
    }


    /// Returns the values of this feature.
    pub fn values(&self) -> &[f64] {
        &self.sample[..]
    }


    /// Returns an iterator over the values.
    pub fn iter(&self) -> Iter<'_, f64> {
        self.sample.iter()
    }


    /// Returns the number of items in `self.sample`.
    pub fn len(&self) -> usize {
        self.sample.len()
    }


    /// Returns `true` if `self.sample` has no item.
    pub fn is_empty(&self) -> bool {
        self.sample.is_empty()
    }


    /// Returns the pair `(min, max)` of the values,
    /// or `None` if the feature is empty.
    pub fn min_max(&self) -> Option<(f64, f64)> {
        let (&first, rest) = self.sample.split_first()?;
        let min_max = rest.iter()
            .fold((first, first), |(min, max), &x| {
                let min = if x <= min { x } else { min };
                let max = if x >= max { x } else { max };
                (min, max)
            });
        Some(min_max)
    }
}


impl Index<usize> for Feature {
    type Output = f64;
    fn index(&self, idx: usize) -> &Self::Output {
        &self.sample[idx]
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_max_01() {
        let feat = Feature::with_values("x", vec![3.0, -1.5, 8.0, 0.0]);
        assert_eq!(feat.min_max(), Some((-1.5, 8.0)));
    }

    #[test]
    fn test_min_max_02() {
        let feat = Feature::new("x");
        assert_eq!(feat.min_max(), None);
    }

    #[test]
    fn test_from_series() {
        let series = Series::new("count", &[1i64, 2, 3]);
        let feat = Feature::from_series(&series).unwrap();
        assert_eq!(feat.name(), "count");
        assert_eq!(feat.values(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_from_series_missing() {
        let series = Series::new("x", &[Some(1.0f64), None]);
        let err = Feature::from_series(&series).unwrap_err();
        assert!(matches!(err, BoostError::MissingValue(name) if name == "x"));
    }
}
