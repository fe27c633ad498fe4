//! Evaluation metrics for model quality.
//!
//! Metrics are computed from predicted probabilities and 0/1 labels. Use
//! [`evaluate`] to score a model directly on a slice of labeled samples.
//!
//! - [`LogLoss`]: binary cross-entropy, lower is better
//! - [`Accuracy`]: fraction of correctly classified samples, higher is better

use ndarray::{Array1, ArrayView1};

use crate::data::LabeledSample;
use crate::error::SgdError;
use crate::inference::predict;
use crate::repr::ModelState;

/// A metric over predicted probabilities and labels.
pub trait MetricFn: Send + Sync {
    /// Compute the metric. Returns 0.0 for empty input.
    fn compute(&self, probabilities: ArrayView1<'_, f64>, labels: ArrayView1<'_, f64>) -> f64;

    /// Name of the metric (for logging).
    fn name(&self) -> &'static str;
}

// =============================================================================
// LogLoss (Binary Cross-Entropy)
// =============================================================================

/// Binary cross-entropy: -mean(y*log(p) + (1-y)*log(1-p))
///
/// Probabilities are clipped to `[1e-15, 1 - 1e-15]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogLoss;

impl MetricFn for LogLoss {
    fn compute(&self, probabilities: ArrayView1<'_, f64>, labels: ArrayView1<'_, f64>) -> f64 {
        debug_assert_eq!(probabilities.len(), labels.len());
        let n = probabilities.len();
        if n == 0 {
            return 0.0;
        }

        const EPS: f64 = 1e-15;

        let sum_loss: f64 = probabilities
            .iter()
            .zip(labels.iter())
            .map(|(&p, &y)| {
                let p = p.clamp(EPS, 1.0 - EPS);
                -(y * p.ln() + (1.0 - y) * (1.0 - p).ln())
            })
            .sum();

        sum_loss / n as f64
    }

    fn name(&self) -> &'static str {
        "logloss"
    }
}

// =============================================================================
// Accuracy
// =============================================================================

/// Fraction of samples whose decision matches the label.
///
/// `p > 0.5` predicts class 1 and `p < 0.5` class 0. `p == 0.5` is undecided
/// and counts as wrong.
#[derive(Debug, Clone, Copy, Default)]
pub struct Accuracy;

impl MetricFn for Accuracy {
    fn compute(&self, probabilities: ArrayView1<'_, f64>, labels: ArrayView1<'_, f64>) -> f64 {
        debug_assert_eq!(probabilities.len(), labels.len());
        let n = probabilities.len();
        if n == 0 {
            return 0.0;
        }

        let correct = probabilities
            .iter()
            .zip(labels.iter())
            .filter(|&(&p, &y)| (p > 0.5 && y == 1.0) || (p < 0.5 && y == 0.0))
            .count();

        correct as f64 / n as f64
    }

    fn name(&self) -> &'static str {
        "accuracy"
    }
}

/// Score `model` on `samples` with `metric`.
///
/// # Errors
///
/// Fails on the first sample with an invalid label or mismatched dimension.
pub fn evaluate<M: MetricFn + ?Sized>(
    metric: &M,
    model: &ModelState,
    samples: &[LabeledSample],
) -> Result<f64, SgdError> {
    let mut probabilities = Array1::<f64>::zeros(samples.len());
    let mut labels = Array1::<f64>::zeros(samples.len());

    for (i, sample) in samples.iter().enumerate() {
        labels[i] = sample.checked_label()?.as_f64();
        probabilities[i] = predict(model, sample.features())?;
    }

    Ok(metric.compute(probabilities.view(), labels.view()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn log_loss_perfect_and_uniform() {
        let labels = array![1.0, 0.0];
        let perfect = LogLoss.compute(array![1.0, 0.0].view(), labels.view());
        assert!(perfect < 1e-12);

        let uniform = LogLoss.compute(array![0.5, 0.5].view(), labels.view());
        assert_abs_diff_eq!(uniform, std::f64::consts::LN_2, epsilon = 1e-12);
    }

    #[test]
    fn log_loss_clips_confident_mistakes() {
        let loss = LogLoss.compute(array![0.0].view(), array![1.0].view());
        assert!(loss.is_finite());
        assert_abs_diff_eq!(loss, -(1e-15f64).ln(), epsilon = 1e-9);
    }

    #[test]
    fn accuracy_counts_undecided_as_wrong() {
        let probs = array![0.9, 0.2, 0.5, 0.4];
        let labels = array![1.0, 0.0, 1.0, 1.0];
        assert_eq!(Accuracy.compute(probs.view(), labels.view()), 0.5);
    }

    #[test]
    fn empty_input_is_zero() {
        let empty = Array1::<f64>::zeros(0);
        assert_eq!(LogLoss.compute(empty.view(), empty.view()), 0.0);
        assert_eq!(Accuracy.compute(empty.view(), empty.view()), 0.0);
    }

    #[test]
    fn evaluate_on_samples() {
        let model = ModelState::new(0.0, vec![1.0]);
        let samples = [
            LabeledSample::positive([2.0]),
            LabeledSample::negative([-2.0]),
            LabeledSample::negative([3.0]),
        ];
        let acc = evaluate(&Accuracy, &model, &samples).unwrap();
        assert_abs_diff_eq!(acc, 2.0 / 3.0, epsilon = 1e-12);
        assert_eq!(LogLoss.name(), "logloss");
        assert_eq!(Accuracy.name(), "accuracy");
    }

    #[test]
    fn evaluate_propagates_errors() {
        let model = ModelState::zeros(2);
        let bad_dims = [LabeledSample::positive([1.0])];
        assert_eq!(
            evaluate(&LogLoss, &model, &bad_dims),
            Err(SgdError::DimensionMismatch {
                expected: 2,
                actual: 1
            })
        );

        let bad_label = [LabeledSample::new([1.0, 1.0], 0.3)];
        assert_eq!(
            evaluate(&LogLoss, &model, &bad_label),
            Err(SgdError::InvalidLabel(0.3))
        );
    }
}
