use std::path::Path;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::collections::HashMap;
use std::ops::Index;

use polars::prelude::*;
use rayon::prelude::*;

use super::feature_struct::Feature;
use crate::{BoostError, Result};


/// Struct `Sample` holds a dense batch sample
/// of `n_sample` rows and `n_feature` columns.
/// The values are stored column by column.
///
/// A `Sample` holds no label.
/// Labels are passed alongside the sample as `&[i64]`.
#[derive(Debug, Clone)]
pub struct Sample {
    pub(super) name_to_index: HashMap<String, usize>,
    pub(super) features: Vec<Feature>,
    pub(super) n_sample: usize,
    pub(super) n_feature: usize,
}


impl Sample {
    /// Construct a `Sample` from rows.
    /// The `i`-th row is the feature vector of the `i`-th example.
    /// Returns an error if some rows have different lengths.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n_sample = rows.len();
        let n_feature = rows.first().map_or(0, |row| row.len());

        let mut features = default_features(n_feature);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n_feature {
                return Err(BoostError::RaggedRow {
                    row: i, expected: n_feature, found: row.len(),
                });
            }
            features.iter_mut()
                .zip(row)
                .for_each(|(feat, x)| { feat.append(x); });
        }

        Ok(Self::new(features, n_sample))
    }


    /// Construct a `Sample` from columns.
    /// The `j`-th column holds the `j`-th feature of all examples.
    pub fn from_columns(columns: Vec<Vec<f64>>) -> Result<Self> {
        let features = columns.into_iter()
            .enumerate()
            .map(|(j, col)| Feature::with_values(feature_name(j), col))
            .collect::<Vec<_>>();
        Self::from_features(features)
    }


    /// Construct a `Sample` from named features.
    pub fn from_features(features: Vec<Feature>) -> Result<Self> {
        let n_sample = features.first().map_or(0, |feat| feat.len());

        let ragged = features.iter()
            .position(|feat| feat.len() != n_sample);
        if let Some(column) = ragged {
            return Err(BoostError::RaggedColumn {
                column, expected: n_sample, found: features[column].len(),
            });
        }

        Ok(Self::new(features, n_sample))
    }


    /// Convert `polars::DataFrame` into `Sample`.
    /// This method takes the ownership for the given `data`.
    pub fn from_dataframe(data: DataFrame) -> Result<Self> {
        let (n_sample, _) = data.shape();

        let features = data.get_columns()
            .into_par_iter()
            .map(Feature::from_series)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::new(features, n_sample))
    }


    /// Read a CSV format file to `Sample` type.
    pub fn from_csv<P>(file: P, has_header: bool) -> Result<Self>
        where P: AsRef<Path>,
    {
        let file = File::open(file)?;
        Self::from_reader(BufReader::new(file), has_header)
    }


    /// Read comma-separated values from `reader`.
    /// If `has_header` is `false`,
    /// the features are named as `Feat. [1]`, `Feat. [2]`, ...
    pub fn from_reader<R>(reader: R, has_header: bool) -> Result<Self>
        where R: BufRead,
    {
        let mut lines = reader.lines().enumerate();

        let mut features: Option<Vec<Feature>> = None;
        if has_header {
            if let Some((_, line)) = lines.next() {
                let header = line?.split(',')
                    .map(|name| Feature::new(name.trim()))
                    .collect::<Vec<_>>();
                features = Some(header);
            }
        }

        let mut n_sample = 0_usize;
        for (k, line) in lines {
            let line = line?;
            if line.trim().is_empty() { continue; }

            let xs = line.split(',')
                .map(|x| {
                    x.trim().parse::<f64>()
                        .map_err(|_| BoostError::Parse {
                            line: k + 1,
                            value: x.trim().to_string(),
                        })
                })
                .collect::<Result<Vec<_>>>()?;

            // If the header does not exist,
            // construct a dummy header from the first line.
            let features = features.get_or_insert_with(|| {
                default_features(xs.len())
            });

            if xs.len() != features.len() {
                return Err(BoostError::RaggedRow {
                    row: n_sample,
                    expected: features.len(),
                    found: xs.len(),
                });
            }
            features.iter_mut()
                .zip(xs)
                .for_each(|(feat, x)| { feat.append(x); });
            n_sample += 1;
        }

        let features = features.unwrap_or_default();
        Ok(Self::new(features, n_sample))
    }


    fn new(features: Vec<Feature>, n_sample: usize) -> Self {
        let n_feature = features.len();
        let name_to_index = index_by_name(&features);
        Self { name_to_index, features, n_sample, n_feature, }
    }


    /// Removes the feature named `target` from `self`
    /// and returns its values as labels.
    /// Every value of the column must be `+1` or `-1`,
    /// otherwise `self` is left untouched and an error is returned.
    pub fn take_target<S: AsRef<str>>(&mut self, target: S)
        -> Result<Vec<i64>>
    {
        let target = target.as_ref();
        let pos = *self.name_to_index.get(target)
            .ok_or_else(|| BoostError::UnknownFeature(target.to_string()))?;

        let labels = self.features[pos].iter()
            .enumerate()
            .map(|(index, &value)| {
                if value == 1.0 {
                    Ok(1)
                } else if value == -1.0 {
                    Ok(-1)
                } else {
                    Err(BoostError::InvalidLabel { index, value })
                }
            })
            .collect::<Result<Vec<i64>>>()?;

        self.features.remove(pos);
        self.n_feature -= 1;
        self.name_to_index = index_by_name(&self.features);

        Ok(labels)
    }


    /// Returns the pair of the number of examples and
    /// the number of features
    pub fn shape(&self) -> (usize, usize) {
        (self.n_sample, self.n_feature)
    }


    /// Returns a slice of type `Feature`.
    pub fn features(&self) -> &[Feature] {
        &self.features[..]
    }


    /// Returns the `j`-th column.
    ///
    /// # Panics
    /// Panics if `j >= self.shape().1`.
    pub fn column(&self, j: usize) -> &[f64] {
        self.features[j].values()
    }


    /// Returns the feature vector of the `i`-th example.
    pub fn row(&self, i: usize) -> Vec<f64> {
        self.features.iter()
            .map(|feat| feat[i])
            .collect()
    }


    /// Set the feature (column) names.
    /// This method panics when the length of given feature names is
    /// not equals to the one of `self.features`.
    pub fn replace_names<S, T>(&mut self, names: T) -> Vec<String>
        where S: ToString,
              T: AsRef<[S]>,
    {
        let names = names.as_ref();

        let n_names = names.len();
        assert_eq!(
            self.n_feature, n_names,
            "The number of names is not equal to the one of `self.features`"
        );

        let old_names = names.iter()
            .zip(&mut self.features[..])
            .map(|(name, feature)| feature.replace_name(name.to_string()))
            .collect();

        self.name_to_index = index_by_name(&self.features);
        old_names
    }
}


impl Index<&str> for Sample {
    type Output = Feature;
    fn index(&self, name: &str) -> &Self::Output {
        let j = self.name_to_index.get(name)
            .unwrap_or_else(|| panic!("feature `{name}` does not exist"));
        &self.features[*j]
    }
}


fn feature_name(j: usize) -> String {
    format!("Feat. [{}]", j + 1)
}


fn default_features(n_feature: usize) -> Vec<Feature> {
    (0..n_feature).map(|j| Feature::new(feature_name(j)))
        .collect()
}


fn index_by_name(features: &[Feature]) -> HashMap<String, usize> {
    features.iter()
        .enumerate()
        .map(|(i, f)| (f.name().to_string(), i))
        .collect()
}
