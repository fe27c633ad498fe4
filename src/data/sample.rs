//! Feature vectors and labeled samples.

use std::ops::Deref;
use std::sync::Arc;

use ndarray::ArrayView1;

use crate::error::SgdError;

// =============================================================================
// FeatureVector
// =============================================================================

/// Ordered, immutable sequence of feature values.
///
/// Backed by a shared buffer: cloning is a reference-count bump, and the
/// values can never change after construction.
///
/// ```
/// use online_logit::data::FeatureVector;
///
/// let x = FeatureVector::from(vec![1.0, 2.5]);
/// assert_eq!(x.len(), 2);
/// assert_eq!(x[1], 2.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector(Arc<[f64]>);

impl FeatureVector {
    /// Number of features (the dimensionality).
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the vector has no features.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Feature values as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Feature values as an ndarray view.
    #[inline]
    pub fn view(&self) -> ArrayView1<'_, f64> {
        ArrayView1::from(&self.0[..])
    }
}

impl Deref for FeatureVector {
    type Target = [f64];

    #[inline]
    fn deref(&self) -> &[f64] {
        &self.0
    }
}

impl AsRef<[f64]> for FeatureVector {
    #[inline]
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

impl From<Vec<f64>> for FeatureVector {
    fn from(values: Vec<f64>) -> Self {
        Self(values.into())
    }
}

impl From<&[f64]> for FeatureVector {
    fn from(values: &[f64]) -> Self {
        Self(values.into())
    }
}

impl<const N: usize> From<[f64; N]> for FeatureVector {
    fn from(values: [f64; N]) -> Self {
        Self(Arc::from(values.as_slice()))
    }
}

impl From<ArrayView1<'_, f64>> for FeatureVector {
    fn from(values: ArrayView1<'_, f64>) -> Self {
        Self(values.iter().copied().collect())
    }
}

impl FromIterator<f64> for FeatureVector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

// =============================================================================
// Label
// =============================================================================

/// Binary class label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    /// Class 0.
    Negative,
    /// Class 1.
    Positive,
}

impl Label {
    /// Numeric value used by the update rule (0.0 or 1.0).
    #[inline]
    pub fn as_f64(self) -> f64 {
        match self {
            Label::Negative => 0.0,
            Label::Positive => 1.0,
        }
    }
}

impl TryFrom<f64> for Label {
    type Error = SgdError;

    /// Accepts exactly `0.0` and `1.0`; anything else (including NaN) is
    /// [`SgdError::InvalidLabel`].
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if value == 0.0 {
            Ok(Label::Negative)
        } else if value == 1.0 {
            Ok(Label::Positive)
        } else {
            Err(SgdError::InvalidLabel(value))
        }
    }
}

impl From<Label> for f64 {
    #[inline]
    fn from(label: Label) -> f64 {
        label.as_f64()
    }
}

impl From<bool> for Label {
    #[inline]
    fn from(positive: bool) -> Self {
        if positive {
            Label::Positive
        } else {
            Label::Negative
        }
    }
}

// =============================================================================
// LabeledSample
// =============================================================================

/// A feature vector paired with its label.
///
/// The label is kept exactly as supplied so that a bad value surfaces as
/// [`SgdError::InvalidLabel`] at the training step that consumes it.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledSample {
    features: FeatureVector,
    label: f64,
}

impl LabeledSample {
    /// Create a sample from features and a raw label.
    pub fn new(features: impl Into<FeatureVector>, label: f64) -> Self {
        Self {
            features: features.into(),
            label,
        }
    }

    /// Create a sample with label 1.
    pub fn positive(features: impl Into<FeatureVector>) -> Self {
        Self::new(features, 1.0)
    }

    /// Create a sample with label 0.
    pub fn negative(features: impl Into<FeatureVector>) -> Self {
        Self::new(features, 0.0)
    }

    #[inline]
    pub fn features(&self) -> &FeatureVector {
        &self.features
    }

    /// Raw label as supplied.
    #[inline]
    pub fn label(&self) -> f64 {
        self.label
    }

    /// Validated label.
    #[inline]
    pub fn checked_label(&self) -> Result<Label, SgdError> {
        Label::try_from(self.label)
    }

    /// Number of features.
    #[inline]
    pub fn n_features(&self) -> usize {
        self.features.len()
    }
}

impl<F: Into<FeatureVector>> From<(F, Label)> for LabeledSample {
    fn from((features, label): (F, Label)) -> Self {
        Self::new(features, label.as_f64())
    }
}
