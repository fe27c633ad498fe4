//! Batch prediction over sample-major matrices.

use ndarray::{Array1, ArrayView2, Axis};

use crate::error::SgdError;
use crate::repr::ModelState;
use crate::utils::{dot, sigmoid, Parallelism};

/// Predict probabilities for every row of `data` (`[n_samples, n_features]`).
///
/// # Errors
///
/// [`SgdError::DimensionMismatch`] if the column count differs from the weights.
pub fn predict_batch(
    model: &ModelState,
    data: ArrayView2<'_, f64>,
) -> Result<Array1<f64>, SgdError> {
    predict_batch_with(model, data, Parallelism::Sequential)
}

/// Like [`predict_batch`], spreading rows over the current rayon pool.
pub fn par_predict_batch(
    model: &ModelState,
    data: ArrayView2<'_, f64>,
) -> Result<Array1<f64>, SgdError> {
    predict_batch_with(model, data, Parallelism::Parallel)
}

/// Batch prediction with explicit parallelism control.
pub fn predict_batch_with(
    model: &ModelState,
    data: ArrayView2<'_, f64>,
    parallelism: Parallelism,
) -> Result<Array1<f64>, SgdError> {
    SgdError::check_dims(model.n_features(), data.ncols())?;

    let weights = model.weights();
    let intercept = model.intercept();

    let rows: Vec<_> = data.axis_iter(Axis(0)).collect();
    let probs = parallelism.maybe_par_map(rows, |row| sigmoid(intercept + dot(weights, row)));

    Ok(Array1::from(probs))
}
