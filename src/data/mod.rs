//! Input types for training and prediction.
//!
//! - [`FeatureVector`]: immutable, cheaply clonable feature values
//! - [`LabeledSample`]: a feature vector with its raw 0/1 label
//! - [`Label`]: validated binary label
//!
//! Samples arrive one at a time from whatever source the caller owns; nothing
//! here buffers or reorders them.

mod sample;

pub use sample::{FeatureVector, Label, LabeledSample};
