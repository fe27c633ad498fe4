//! Errors raised by training and prediction.

/// Error raised by a single training step or prediction.
///
/// Every variant aborts exactly the operation that triggered it. Nothing is
/// clamped or corrected; recovery (skipping the sample, restarting from an
/// earlier state) is up to the caller.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum SgdError {
    /// Feature vector length disagrees with the model's weight count.
    #[error("dimension mismatch: model has {expected} weights, got {actual} features")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Label is neither 0 nor 1.
    #[error("label must be 0 or 1, got {0}")]
    InvalidLabel(f64),

    /// Learning rate is not a finite positive number.
    #[error("learning_rate must be > 0, got {0}")]
    InvalidLearningRate(f64),
}

impl SgdError {
    /// Check that `actual` features can be scored against `expected` weights.
    #[inline]
    pub(crate) fn check_dims(expected: usize, actual: usize) -> Result<(), SgdError> {
        if expected == actual {
            Ok(())
        } else {
            Err(SgdError::DimensionMismatch { expected, actual })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_dims_accepts_equal() {
        assert!(SgdError::check_dims(3, 3).is_ok());
    }

    #[test]
    fn check_dims_reports_both_sides() {
        let err = SgdError::check_dims(2, 5).unwrap_err();
        assert_eq!(
            err,
            SgdError::DimensionMismatch {
                expected: 2,
                actual: 5
            }
        );
        assert_eq!(
            err.to_string(),
            "dimension mismatch: model has 2 weights, got 5 features"
        );
    }

    #[test]
    fn messages() {
        assert_eq!(
            SgdError::InvalidLabel(0.5).to_string(),
            "label must be 0 or 1, got 0.5"
        );
        assert_eq!(
            SgdError::InvalidLearningRate(0.0).to_string(),
            "learning_rate must be > 0, got 0"
        );
    }
}
