//! Model representation.
//!
//! [`ModelState`] is the whole classifier: an intercept plus one weight per
//! feature. It is a plain value; training produces new values rather than
//! mutating existing ones.

mod model;

pub use model::ModelState;
