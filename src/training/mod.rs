//! Training infrastructure.
//!
//! ## Update rule
//!
//! - [`sgd`]: single-sample step, streaming [`Trainer`](sgd::Trainer), and
//!   [`SgdTrainer`](sgd::SgdTrainer) for multi-epoch fitting
//!
//! ## Shared Infrastructure
//!
//! - [`LogLoss`], [`Accuracy`], [`evaluate`]: Evaluation metrics
//! - [`EarlyStopping`]: Stops fitting when the eval metric plateaus
//! - [`TrainingLogger`], [`Verbosity`]: Verbosity-gated logging via `log`

mod callback;
mod logger;
mod metrics;
pub mod sgd;

pub use callback::EarlyStopping;
pub use logger::{TrainingLogger, Verbosity};
pub use metrics::{evaluate, Accuracy, LogLoss, MetricFn};
pub use sgd::{SgdConfig, SgdTrainer, TrainExt, Trainer};
