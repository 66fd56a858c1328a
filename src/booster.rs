//! Provides the `Booster` trait and `AdaBoost`.

/// Provides `Booster` trait.
pub mod core;

/// Defines `AdaBoost` and `AdaBoostClassifier`.
pub mod adaboost;


pub use self::core::Booster;
pub use self::adaboost::{
    AdaBoost,
    AdaBoostClassifier,
};
