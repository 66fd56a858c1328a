//! Defines the `Classifier` trait
//! and the weighted majority vote of classifiers.

pub(crate) mod hypothesis_traits;
pub(crate) mod weighted_majority;


pub use hypothesis_traits::Classifier;
pub use weighted_majority::WeightedMajority;
