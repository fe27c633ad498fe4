//! Online SGD training for the logistic model.
//!
//! [`step`] is the whole update rule: one labeled sample, one new state. The
//! rest of this module threads it through sequences:
//!
//! - [`Trainer`] / [`TrainExt`]: lazy scan over a sample iterator
//! - [`SgdTrainer`]: folding and multi-epoch fitting driven by [`SgdConfig`]

mod config;
mod step;
mod trainer;

pub use config::{ConfigError, SgdConfig, SgdConfigBuilder, DEFAULT_LEARNING_RATE};
pub use step::{step, validate_learning_rate};
pub use trainer::{SgdTrainer, TrainExt, Trainer};
