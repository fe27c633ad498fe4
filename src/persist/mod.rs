//! Model persistence.
//!
//! A [`ModelState`](crate::repr::ModelState) persists as the flat
//! [`ModelRecord`] `{ "intercept": number, "weights": [number, ...] }`.
//! The record is a schema type kept separate from the runtime type so the two
//! can evolve independently.
//!
//! JSON is the only format provided. `serde_json` writes `f64` in shortest
//! round-trip form, so finite values reload bit-identically.
//!
//! # Example
//!
//! ```
//! use online_logit::persist::{from_json_str, to_json_string, JsonWriteOptions};
//! use online_logit::repr::ModelState;
//!
//! let model = ModelState::new(-0.25, vec![1.5, 0.1]);
//! let json = to_json_string(&model, JsonWriteOptions::compact()).unwrap();
//! assert_eq!(json, r#"{"intercept":-0.25,"weights":[1.5,0.1]}"#);
//! assert_eq!(from_json_str(&json).unwrap(), model);
//! ```

mod convert;
mod error;
mod json;
mod schema;

pub use error::{ReadError, WriteError};
pub use json::{
    from_json_reader, from_json_str, load_json, save_json, to_json_string, to_json_writer,
    JsonWriteOptions,
};
pub use schema::ModelRecord;
