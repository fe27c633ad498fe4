//! online-logit: incremental binary logistic regression for Rust.
//!
//! A model is an intercept plus one weight per feature. Training consumes
//! labeled samples one at a time, applying a single stochastic gradient step
//! per sample and producing a new model value each time; prediction maps a
//! feature vector to the probability of the positive class.
//!
//! # Quick Start
//!
//! ```
//! use online_logit::{predict, step, LabeledSample};
//!
//! let samples = [
//!     LabeledSample::negative([1.0, 2.0]),
//!     LabeledSample::positive([7.0, 1.0]),
//! ];
//!
//! let mut state = None;
//! for sample in &samples {
//!     state = Some(step(state.as_ref(), sample, 0.1).unwrap());
//! }
//! let model = state.unwrap();
//!
//! let p = predict(&model, &[7.0, 1.0]).unwrap();
//! assert!(p > 0.5);
//! ```
//!
//! # Module Structure
//!
//! - [`data`]: feature vectors, labels and samples
//! - [`repr`]: the [`ModelState`] value
//! - [`training`]: the SGD step, streaming and multi-epoch trainers, metrics
//! - [`inference`]: single, streaming and batch prediction
//! - [`persist`]: flat record and JSON serialization
//! - [`testing`]: shared datasets and assertions

// Re-export approx traits for users who want to compare models
pub use approx;

pub mod data;
pub mod error;
pub mod inference;
pub mod persist;
pub mod repr;
pub mod testing;
pub mod training;
pub mod utils;

// Convenience re-exports
pub use data::{FeatureVector, Label, LabeledSample};
pub use error::SgdError;
pub use inference::{predict, predict_margin, Decision, PredictExt};
pub use persist::ModelRecord;
pub use repr::ModelState;
pub use training::sgd::{step, SgdConfig, SgdTrainer, TrainExt, Trainer};
pub use training::Verbosity;
pub use utils::{sigmoid, Parallelism};
