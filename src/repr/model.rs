//! Logistic model parameters.

use ndarray::{Array1, ArrayView1};

/// Parameters of a binary logistic model.
///
/// Scores a feature vector `x` as
///
/// ```text
/// p = sigmoid(intercept + Σ weights[i] × x[i])
/// ```
///
/// The number of weights fixes the dimensionality every later sample must
/// have. States with equal fields are interchangeable.
///
/// # Example
///
/// ```
/// use online_logit::repr::ModelState;
///
/// let model = ModelState::new(0.5, vec![0.1, -0.2]);
/// assert_eq!(model.n_features(), 2);
/// assert_eq!(model.intercept(), 0.5);
/// assert_eq!(model.weight(1), -0.2);
///
/// let fresh = ModelState::zeros(3);
/// assert!(fresh.weights().iter().all(|&w| w == 0.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ModelState {
    intercept: f64,
    weights: Array1<f64>,
}

impl ModelState {
    /// Create a model from an intercept and weights.
    ///
    /// Weights in a non-standard memory order (e.g. after `invert_axis`) are
    /// copied into standard order; the logical order is kept.
    pub fn new(intercept: f64, weights: impl Into<Array1<f64>>) -> Self {
        let weights = weights.into();
        let weights = if weights.is_standard_layout() {
            weights
        } else {
            weights.as_standard_layout().into_owned()
        };
        Self { intercept, weights }
    }

    /// Zero intercept and `n_features` zero weights.
    ///
    /// This is the state an untrained lineage starts from.
    pub fn zeros(n_features: usize) -> Self {
        Self {
            intercept: 0.0,
            weights: Array1::zeros(n_features),
        }
    }

    #[inline]
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Weight vector, one entry per feature.
    #[inline]
    pub fn weights(&self) -> ArrayView1<'_, f64> {
        self.weights.view()
    }

    /// Weights as a contiguous slice.
    #[inline]
    pub fn weights_slice(&self) -> &[f64] {
        // `new` normalizes to standard layout.
        self.weights
            .as_slice()
            .expect("owned 1-D weights are contiguous")
    }

    /// Weight for a single feature.
    #[inline]
    pub fn weight(&self, feature: usize) -> f64 {
        self.weights[feature]
    }

    /// Number of features (the dimensionality).
    #[inline]
    pub fn n_features(&self) -> usize {
        self.weights.len()
    }

    /// Whether every parameter is finite.
    pub fn is_finite(&self) -> bool {
        self.intercept.is_finite() && self.weights.iter().all(|w| w.is_finite())
    }

    /// Split into `(intercept, weights)`.
    pub fn into_parts(self) -> (f64, Array1<f64>) {
        (self.intercept, self.weights)
    }
}
