//! Exports the standard boosting algorithms and traits.
//!
pub use crate::booster::{
    // Booster trait
    Booster,

    AdaBoost,
    AdaBoostClassifier,
};


pub use crate::weak_learner::{
    // Weak Learner trait
    WeakLearner,

    DecisionStump,
    StumpClassifier,
    PositiveSide,
};


pub use crate::hypothesis::{
    Classifier,
    WeightedMajority,
};


pub use crate::sample::{
    Sample,
    SampleReader,
};


pub use crate::common::utils::weighted_error_rate;
pub use crate::error::{BoostError, Result};
