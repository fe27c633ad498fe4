//! Training progress logging.
//!
//! [`TrainingLogger`] filters messages by [`Verbosity`] and forwards them to
//! the [`log`] facade. The crate never installs a logger; binaries pick one
//! (the demos use `env_logger`).

use serde::{Deserialize, Serialize};

/// How much the trainer reports.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Verbosity {
    /// Nothing.
    #[default]
    Silent,
    /// Only suspicious conditions (non-finite losses).
    Warning,
    /// Start, per-epoch losses, early stopping.
    Info,
    /// Everything, including per-sample updates.
    Debug,
}

/// Verbosity-gated logger for a single training run.
#[derive(Debug, Clone)]
pub struct TrainingLogger {
    verbosity: Verbosity,
    n_epochs: usize,
}

impl TrainingLogger {
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            n_epochs: 0,
        }
    }

    #[inline]
    pub fn enabled(&self, level: Verbosity) -> bool {
        level != Verbosity::Silent && self.verbosity >= level
    }

    pub fn start_training(&mut self, n_epochs: usize, n_samples: usize, learning_rate: f64) {
        self.n_epochs = n_epochs;
        if self.enabled(Verbosity::Info) {
            log::info!(
                "training for {} epochs over {} samples (learning_rate={})",
                n_epochs,
                n_samples,
                learning_rate
            );
        }
    }

    pub fn log_epoch(&self, epoch: usize, train_loss: f64, eval_loss: Option<f64>) {
        if !(train_loss.is_finite() && eval_loss.map_or(true, f64::is_finite))
            && self.enabled(Verbosity::Warning)
        {
            log::warn!("[{}] non-finite loss, model may have diverged", epoch);
        }
        if !self.enabled(Verbosity::Info) {
            return;
        }
        match eval_loss {
            Some(eval) => log::info!(
                "[{}/{}] train-logloss:{:.6} eval-logloss:{:.6}",
                epoch,
                self.n_epochs,
                train_loss,
                eval
            ),
            None => log::info!(
                "[{}/{}] train-logloss:{:.6}",
                epoch,
                self.n_epochs,
                train_loss
            ),
        }
    }

    pub fn warn_early_stopping_without_eval(&self) {
        if self.enabled(Verbosity::Warning) {
            log::warn!("early_stopping_rounds ignored: no eval set");
        }
    }

    pub fn log_sample(&self, index: usize, intercept: f64) {
        if self.enabled(Verbosity::Debug) {
            log::debug!("sample {}: intercept={}", index, intercept);
        }
    }

    pub fn log_early_stop(&self, epoch: usize, best_epoch: usize, best_value: f64) {
        if self.enabled(Verbosity::Info) {
            log::info!(
                "early stopping at epoch {}, best epoch {} (eval-logloss:{:.6})",
                epoch,
                best_epoch,
                best_value
            );
        }
    }

    pub fn finish_training(&self, epochs_run: usize) {
        if self.enabled(Verbosity::Info) {
            log::info!("training finished after {} epochs", epochs_run);
        }
    }
}
