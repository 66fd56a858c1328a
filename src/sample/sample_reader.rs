use std::path::Path;

use super::sample_struct::Sample;
use crate::Result;


/// A struct that returns a [`Sample`] and its labels.
/// Using this struct, one can read a CSV format file
/// whose target column takes values in `{-1, +1}`.
/// # Example
/// The following code is a simple example to read a CSV file.
/// ```no_run
/// use stumpboost::SampleReader;
/// let filename = "/path/to/csv/file.csv";
/// let (sample, target) = SampleReader::new()
///     .file(filename)
///     .has_header(true)
///     .target_feature("class")
///     .read()
///     .unwrap();
/// ```
pub struct SampleReader<P, S> {
    file: Option<P>,
    has_header: bool,
    target: Option<S>,
}


impl<P, S> SampleReader<P, S> {
    /// Construct a new instance of [`SampleReader`].
    pub fn new() -> Self {
        Self {
            file: None,
            has_header: false,
            target: None,
        }
    }


    /// Set the flag whether the file has the header row or not.
    /// Default is `false.`
    pub fn has_header(mut self, flag: bool) -> Self {
        self.has_header = flag;
        self
    }
}


impl<P, S> Default for SampleReader<P, S> {
    fn default() -> Self {
        Self::new()
    }
}


impl<P, S> SampleReader<P, S>
    where P: AsRef<Path>
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }
}


impl<P, S> SampleReader<P, S>
    where S: AsRef<str>
{
    /// Set the column name that is used for target label.
    /// The each item of the column takes value in `{-1, +1}.`
    /// Without a header, the columns are named `Feat. [1]`, `Feat. [2]`, ...
    pub fn target_feature(mut self, column: S) -> Self {
        self.target = Some(column);
        self
    }
}


impl<P, S> SampleReader<P, S>
    where P: AsRef<Path>,
          S: AsRef<str>
{
    /// Reads the file based on the arguments,
    /// and returns the pair of the sample and its labels.
    /// This method consumes `self.`
    ///
    /// # Panics
    /// Panics if the file name or the target column is not set.
    pub fn read(self) -> Result<(Sample, Vec<i64>)> {
        let file = self.file
            .expect("The file name for csv is not set");
        let target = self.target
            .expect(
                "Target (class) column is not specified. \
                Use `SampleReader::target_feature`."
            );

        let mut sample = Sample::from_csv(file, self.has_header)?;
        let target = sample.take_target(target)?;
        Ok((sample, target))
    }
}
