//! This directory provides some features for research.
//! Measure the followings of boosting algorithm per iteration
//! - Running time
//! - Objective value
//! - Training loss
//! - Test loss

/// Defines a struct that runs a boosting algorithm with logging.
pub mod logger;

/// Defines loss functions (e.g., zero-one loss).
pub mod loss_functions;

/// Defines objective functions.
pub mod objective_functions;


pub use logger::{
    Logger,
    CurrentHypothesis,
};

pub use objective_functions::{
    ObjectiveFunction,
    ExponentialLoss,
};

pub use loss_functions::zero_one_loss;
