//! Testing utilities shared by unit tests, integration tests and benches.
//!
//! # Usage
//!
//! ```
//! use online_logit::testing::{assert_model_approx_eq, reference_samples};
//! use online_logit::training::SgdTrainer;
//!
//! let samples = reference_samples();
//! let a = SgdTrainer::default().fold(None, &samples).unwrap().unwrap();
//! let b = SgdTrainer::default().fold(None, &samples).unwrap().unwrap();
//! assert_model_approx_eq(&a, &b, 0.0);
//! ```

use approx::AbsDiffEq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::data::{Label, LabeledSample};
use crate::repr::ModelState;

// =============================================================================
// Constants
// =============================================================================

/// Default tolerance for parameter comparisons.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Two well-separated clusters in two dimensions: `(features, label)`.
pub const REFERENCE_DATA: [([f64; 2], f64); 10] = [
    ([2.7810836, 2.550537003], 0.0),
    ([1.465489372, 2.362125076], 0.0),
    ([3.396561688, 4.400293529], 0.0),
    ([1.38807019, 1.850220317], 0.0),
    ([3.06407232, 3.005305973], 0.0),
    ([7.627531214, 2.759262235], 1.0),
    ([5.332441248, 2.088626775], 1.0),
    ([6.922596716, 1.77106367], 1.0),
    ([8.675418651, -0.242068655], 1.0),
    ([7.673756466, 3.508563011], 1.0),
];

// =============================================================================
// Datasets
// =============================================================================

/// [`REFERENCE_DATA`] as labeled samples, in order.
pub fn reference_samples() -> Vec<LabeledSample> {
    REFERENCE_DATA
        .iter()
        .map(|&(features, label)| LabeledSample::new(features, label))
        .collect()
}

/// Random linearly separable samples.
///
/// Features are drawn uniformly from `[-1, 1)`; the label is 1 when
/// `Σ x[i] × (-1)^i > 0`. Deterministic for a given seed.
pub fn synthetic_samples(n_samples: usize, n_features: usize, seed: u64) -> Vec<LabeledSample> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n_samples)
        .map(|_| {
            let features: Vec<f64> = (0..n_features)
                .map(|_| rng.gen_range(-1.0..1.0))
                .collect();
            let score: f64 = features
                .iter()
                .enumerate()
                .map(|(i, x)| if i % 2 == 0 { *x } else { -*x })
                .sum();
            LabeledSample::from((features, Label::from(score > 0.0)))
        })
        .collect()
}

// =============================================================================
// Assertions
// =============================================================================

/// Assert that two models have the same shape and parameters within `tolerance`.
///
/// # Panics
///
/// Panics on a dimension mismatch or any parameter differing by more than
/// `tolerance`.
pub fn assert_model_approx_eq(actual: &ModelState, expected: &ModelState, tolerance: f64) {
    assert_eq!(
        actual.n_features(),
        expected.n_features(),
        "model dimension mismatch - got {}, expected {}",
        actual.n_features(),
        expected.n_features()
    );
    assert!(
        actual.intercept().abs_diff_eq(&expected.intercept(), tolerance),
        "intercept: {} ≠ {} (tolerance={tolerance})",
        actual.intercept(),
        expected.intercept()
    );
    let pairs = actual.weights().into_iter().zip(expected.weights());
    for (i, (a, e)) in pairs.enumerate() {
        assert!(
            a.abs_diff_eq(e, tolerance),
            "weights[{i}]: {a} ≠ {e} (tolerance={tolerance})"
        );
    }
}
