//! Schema types for model serialization.

use serde::{Deserialize, Serialize};

/// Flat persisted form of a model.
///
/// Field order is fixed so JSON output is deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelRecord {
    /// Bias term.
    pub intercept: f64,
    /// One coefficient per feature.
    pub weights: Vec<f64>,
}

impl ModelRecord {
    /// Whether every value is finite (JSON cannot carry NaN or infinities).
    pub fn is_finite(&self) -> bool {
        self.intercept.is_finite() && self.weights.iter().all(|w| w.is_finite())
    }
}
