//! Single-vector prediction and the streaming prediction transform.

use std::borrow::Borrow;
use std::iter::FusedIterator;

use ndarray::ArrayView1;

use crate::data::FeatureVector;
use crate::error::SgdError;
use crate::repr::ModelState;
use crate::utils::{dot, sigmoid};

/// Raw logit `intercept + w·x`, without the sigmoid.
///
/// # Errors
///
/// [`SgdError::DimensionMismatch`] if `features` and the weights differ in length.
#[inline]
pub fn predict_margin(model: &ModelState, features: &[f64]) -> Result<f64, SgdError> {
    SgdError::check_dims(model.n_features(), features.len())?;
    Ok(model.intercept() + dot(model.weights(), ArrayView1::from(features)))
}

/// Probability that `features` belongs to class 1.
///
/// The result lies strictly inside (0, 1) for finite inputs, including inputs
/// whose products overflow `f64`.
///
/// # Errors
///
/// [`SgdError::DimensionMismatch`] if `features` and the weights differ in length.
///
/// # Example
///
/// ```
/// use online_logit::inference::predict;
/// use online_logit::repr::ModelState;
///
/// let model = ModelState::new(0.0, vec![1.0, -1.0]);
/// assert_eq!(predict(&model, &[2.0, 2.0]).unwrap(), 0.5);
/// assert!(predict(&model, &[3.0, 0.0]).unwrap() > 0.5);
/// assert!(predict(&model, &[1.0]).is_err());
/// ```
#[inline]
pub fn predict(model: &ModelState, features: &[f64]) -> Result<f64, SgdError> {
    predict_margin(model, features).map(sigmoid)
}

/// Class decision for a predicted probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// `p > 0.5`
    Positive,
    /// `p < 0.5`
    Negative,
    /// `p == 0.5` (or NaN)
    Undecided,
}

impl Decision {
    pub fn from_probability(p: f64) -> Self {
        if p > 0.5 {
            Decision::Positive
        } else if p < 0.5 {
            Decision::Negative
        } else {
            Decision::Undecided
        }
    }
}

// ============================================================================
// Predictions (streaming transform)
// ============================================================================

/// Iterator adapter mapping feature vectors to probabilities in order.
///
/// Unlike training, a failed vector does not end the stream: each item is
/// scored independently against the same unchanged model.
#[derive(Debug, Clone)]
pub struct Predictions<'m, I> {
    model: &'m ModelState,
    features: I,
}

impl<'m, I> Predictions<'m, I> {
    pub fn new(model: &'m ModelState, features: I) -> Self {
        Self { model, features }
    }

    pub fn model(&self) -> &'m ModelState {
        self.model
    }
}

impl<I, F> Iterator for Predictions<'_, I>
where
    I: Iterator<Item = F>,
    F: Borrow<FeatureVector>,
{
    type Item = Result<f64, SgdError>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let features = self.features.next()?;
        Some(predict(self.model, features.borrow()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.features.size_hint()
    }
}

impl<I, F> ExactSizeIterator for Predictions<'_, I>
where
    I: ExactSizeIterator<Item = F>,
    F: Borrow<FeatureVector>,
{
}

impl<I, F> FusedIterator for Predictions<'_, I>
where
    I: FusedIterator<Item = F>,
    F: Borrow<FeatureVector>,
{
}

/// Extension for scoring an iterator of feature vectors.
pub trait PredictExt: Iterator + Sized {
    fn predict_with(self, model: &ModelState) -> Predictions<'_, Self> {
        Predictions::new(model, self)
    }
}

impl<I: Iterator> PredictExt for I {}
