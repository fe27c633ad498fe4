//! Inference for trained models.
//!
//! Prediction never mutates the model, so a single [`ModelState`](crate::repr::ModelState)
//! can be shared freely across threads.
//!
//! # Module Structure
//!
//! - [`predict`], [`predict_margin`]: one feature vector
//! - [`Predictions`] / [`PredictExt`]: lazy, order-preserving transform over a stream
//! - [`predict_batch`], [`par_predict_batch`]: sample-major matrices
//!
//! # Quick Start
//!
//! ```
//! use online_logit::data::FeatureVector;
//! use online_logit::inference::{Decision, PredictExt};
//! use online_logit::repr::ModelState;
//!
//! let model = ModelState::new(-1.0, vec![2.0]);
//! let stream = vec![FeatureVector::from([0.0]), FeatureVector::from([1.0])];
//!
//! let decisions: Vec<Decision> = stream
//!     .iter()
//!     .predict_with(&model)
//!     .map(|p| Decision::from_probability(p.unwrap()))
//!     .collect();
//! assert_eq!(decisions, [Decision::Negative, Decision::Positive]);
//! ```

mod batch;
mod predict;

pub use batch::{par_predict_batch, predict_batch, predict_batch_with};
pub use predict::{predict, predict_margin, Decision, PredictExt, Predictions};
