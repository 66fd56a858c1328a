//! Defines the decision stump weak learner
//! and the hypothesis it produces.
pub mod dstump;
pub mod dstump_classifier;

pub use dstump::DecisionStump;
pub use dstump_classifier::{PositiveSide, StumpClassifier};
