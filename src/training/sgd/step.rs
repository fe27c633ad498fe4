//! Single-sample SGD update.

use ndarray::Zip;

use crate::data::LabeledSample;
use crate::error::SgdError;
use crate::repr::ModelState;
use crate::utils::{dot, sigmoid};

/// Check that a learning rate is a finite positive number.
#[inline]
pub fn validate_learning_rate(learning_rate: f64) -> Result<(), SgdError> {
    if learning_rate > 0.0 && learning_rate.is_finite() {
        Ok(())
    } else {
        Err(SgdError::InvalidLearningRate(learning_rate))
    }
}

/// Apply one gradient step for `sample` to `state`, returning the next state.
///
/// An absent `state` starts from [`ModelState::zeros`] sized to the sample.
/// For `p = sigmoid(intercept + w·x)` the step is
///
/// ```text
/// delta      = learning_rate × (label − p) × p × (1 − p)
/// intercept' = intercept + delta
/// w'[i]      = w[i] + delta × x[i]
/// ```
///
/// The input state is left untouched, so callers may keep it.
///
/// # Errors
///
/// - [`SgdError::InvalidLearningRate`] if `learning_rate` is not finite and `> 0`
/// - [`SgdError::InvalidLabel`] if the label is not 0 or 1
/// - [`SgdError::DimensionMismatch`] if the sample length differs from the weights
///
/// # Example
///
/// ```
/// use online_logit::data::LabeledSample;
/// use online_logit::training::sgd::step;
///
/// let sample = LabeledSample::positive([1.0, 2.0]);
/// let state = step(None, &sample, 0.1).unwrap();
///
/// // p = 0.5 on a zero model, so delta = 0.1 × 0.5 × 0.25
/// assert_eq!(state.intercept(), 0.0125);
/// assert_eq!(state.weights_slice(), &[0.0125, 0.025]);
/// ```
pub fn step(
    state: Option<&ModelState>,
    sample: &LabeledSample,
    learning_rate: f64,
) -> Result<ModelState, SgdError> {
    validate_learning_rate(learning_rate)?;
    let label = sample.checked_label()?.as_f64();
    let features = sample.features();

    let fresh;
    let state = match state {
        Some(state) => state,
        None => {
            fresh = ModelState::zeros(features.len());
            &fresh
        }
    };
    SgdError::check_dims(state.n_features(), features.len())?;

    let p = sigmoid(state.intercept() + dot(state.weights(), features.view()));
    let delta = learning_rate * (label - p) * p * (1.0 - p);

    let weights = Zip::from(state.weights())
        .and(features.view())
        .map_collect(|&w, &x| w + delta * x);

    Ok(ModelState::new(state.intercept() + delta, weights))
}
