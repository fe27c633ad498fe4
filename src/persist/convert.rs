//! Conversions between runtime and schema types.

use crate::repr::ModelState;

use super::schema::ModelRecord;

impl From<&ModelState> for ModelRecord {
    fn from(model: &ModelState) -> Self {
        ModelRecord {
            intercept: model.intercept(),
            weights: model.weights().to_vec(),
        }
    }
}

impl From<ModelState> for ModelRecord {
    fn from(model: ModelState) -> Self {
        let (intercept, weights) = model.into_parts();
        ModelRecord {
            intercept,
            weights: weights.to_vec(),
        }
    }
}

impl From<ModelRecord> for ModelState {
    fn from(record: ModelRecord) -> Self {
        ModelState::new(record.intercept, record.weights)
    }
}
