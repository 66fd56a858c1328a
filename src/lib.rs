#![warn(missing_docs)]

//!
//! A crate that provides AdaBoost over decision stumps
//! for binary classification.
//!
//! The crate is organized as a repeated game between
//! a **booster** and a **weak learner**.
//!
//! - [`DecisionStump`] is the weak learner.
//!     It scans a fixed grid of thresholds on every feature and
//!     returns the [`StumpClassifier`] with the lowest weighted error rate.
//!
//! - [`AdaBoost`] is the booster.
//!     It runs a fixed number of rounds, weighting each stump by
//!     `alpha = ln((1 - e) / e) / 2` and re-weighting the examples
//!     by the margin of the whole ensemble.
//!
//! - [`AdaBoostClassifier`] bundles both behind
//!     `fit` / `predict` / `raw_predict`.
//!
//! ```
//! use stumpboost::prelude::*;
//!
//! let sample = Sample::from_rows(vec![
//!     vec![0.0, 3.0],
//!     vec![1.0, 2.0],
//!     vec![10.0, 3.0],
//!     vec![11.0, 1.0],
//! ]).unwrap();
//! let target = vec![-1, -1, 1, 1];
//!
//! let mut clf = AdaBoostClassifier::new(5);
//! clf.fit(&sample, &target).unwrap();
//! assert_eq!(clf.predict(&sample), target);
//! ```

pub mod error;
pub mod sample;
pub mod common;
pub mod hypothesis;
pub mod weak_learner;
pub mod booster;
pub mod research;
pub mod prelude;


pub use error::{BoostError, Result};

pub use sample::{
    Sample,
    SampleReader,
    Feature,
};

pub use hypothesis::{
    Classifier,
    WeightedMajority,
};

pub use weak_learner::{
    WeakLearner,
    DecisionStump,
    StumpClassifier,
    PositiveSide,
};

pub use booster::{
    Booster,
    AdaBoost,
    AdaBoostClassifier,
};

pub use common::utils::weighted_error_rate;
