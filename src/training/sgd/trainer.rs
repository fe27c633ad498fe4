//! Sequence-level SGD training.
//!
//! - [`Trainer`]: scan adapter emitting one model state per consumed sample
//! - [`TrainExt`]: builds a [`Trainer`] from any iterator of samples
//! - [`SgdTrainer`]: config-driven folding and multi-epoch fitting

use std::borrow::Borrow;
use std::iter::FusedIterator;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::data::LabeledSample;
use crate::error::SgdError;
use crate::repr::ModelState;
use crate::training::metrics::{evaluate, LogLoss};
use crate::training::{EarlyStopping, TrainingLogger, Verbosity};

use super::step::step;
use super::SgdConfig;

// ============================================================================
// Trainer (streaming transform)
// ============================================================================

/// Iterator adapter that folds samples into a model, yielding every state.
///
/// Pulls exactly one sample per emitted state and keeps only the current
/// state, so the upstream iterator fully controls pacing. The first error is
/// yielded once and then the adapter is exhausted; previously yielded states
/// stay valid and [`Trainer::resume`] can continue from any of them.
///
/// # Example
///
/// ```
/// use online_logit::data::LabeledSample;
/// use online_logit::training::sgd::TrainExt;
///
/// let samples = vec![
///     LabeledSample::positive([1.0, 0.0]),
///     LabeledSample::negative([0.0, 1.0]),
/// ];
///
/// let states: Vec<_> = samples.iter().train_sgd(0.1).collect::<Result<_, _>>().unwrap();
/// assert_eq!(states.len(), 2);
/// assert!(states[0].weight(0) > 0.0);
/// assert!(states[1].weight(1) < 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct Trainer<I> {
    samples: I,
    learning_rate: f64,
    state: Option<ModelState>,
    failed: bool,
}

impl<I> Trainer<I> {
    /// Start a new lineage; the first sample fixes the dimensionality.
    pub fn new(samples: I, learning_rate: f64) -> Self {
        Self {
            samples,
            learning_rate,
            state: None,
            failed: false,
        }
    }

    /// Continue an existing lineage from `state`.
    pub fn resume(samples: I, state: ModelState, learning_rate: f64) -> Self {
        Self {
            samples,
            learning_rate,
            state: Some(state),
            failed: false,
        }
    }

    /// Last successfully produced (or initial) state.
    pub fn state(&self) -> Option<&ModelState> {
        self.state.as_ref()
    }

    /// Consume the adapter, returning the last good state.
    pub fn into_state(self) -> Option<ModelState> {
        self.state
    }
}

impl<I, S> Iterator for Trainer<I>
where
    I: Iterator<Item = S>,
    S: Borrow<LabeledSample>,
{
    type Item = Result<ModelState, SgdError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let sample = self.samples.next()?;

        match step(self.state.as_ref(), sample.borrow(), self.learning_rate) {
            Ok(next) => {
                self.state = Some(next.clone());
                Some(Ok(next))
            }
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            (0, Some(0))
        } else {
            let (_, upper) = self.samples.size_hint();
            // A failing sample ends the sequence early.
            (0, upper)
        }
    }
}

impl<I, S> FusedIterator for Trainer<I>
where
    I: Iterator<Item = S>,
    S: Borrow<LabeledSample>,
{
}

/// Extension for turning a sample iterator into a [`Trainer`].
pub trait TrainExt: Iterator + Sized {
    /// Train a fresh lineage over this iterator.
    fn train_sgd(self, learning_rate: f64) -> Trainer<Self> {
        Trainer::new(self, learning_rate)
    }

    /// Continue training `state` over this iterator.
    fn train_sgd_from(self, state: ModelState, learning_rate: f64) -> Trainer<Self> {
        Trainer::resume(self, state, learning_rate)
    }
}

impl<I: Iterator> TrainExt for I {}

// ============================================================================
// SgdTrainer
// ============================================================================

/// Config-driven SGD trainer.
#[derive(Debug, Clone, Default)]
pub struct SgdTrainer {
    config: SgdConfig,
}

impl SgdTrainer {
    pub fn new(config: SgdConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SgdConfig {
        &self.config
    }

    /// One update with the configured learning rate.
    pub fn step(
        &self,
        state: Option<&ModelState>,
        sample: &LabeledSample,
    ) -> Result<ModelState, SgdError> {
        step(state, sample, self.config.learning_rate)
    }

    /// Streaming transform with the configured learning rate.
    pub fn transform<T>(&self, samples: T) -> Trainer<T::IntoIter>
    where
        T: IntoIterator,
        T::Item: Borrow<LabeledSample>,
    {
        Trainer::new(samples.into_iter(), self.config.learning_rate)
    }

    /// Fold `samples` in order, returning only the final state.
    ///
    /// Returns `Ok(None)` when `init` is `None` and `samples` is empty.
    pub fn fold<T>(
        &self,
        init: Option<ModelState>,
        samples: T,
    ) -> Result<Option<ModelState>, SgdError>
    where
        T: IntoIterator,
        T::Item: Borrow<LabeledSample>,
    {
        let learning_rate = self.config.learning_rate;
        samples.into_iter().try_fold(init, |state, sample| {
            step(state.as_ref(), sample.borrow(), learning_rate).map(Some)
        })
    }

    /// Fit over `train` for `n_epochs` passes.
    ///
    /// Each epoch folds the samples in slice order, or in a seeded shuffled
    /// order when `shuffle` is set. With `early_stopping_rounds` and an `eval`
    /// set, fitting stops once the eval log loss has not improved for that
    /// many epochs and the best state is returned.
    ///
    /// Returns `Ok(None)` when `init` is `None` and `train` is empty.
    ///
    /// # Errors
    ///
    /// The first invalid sample (in `train` or `eval`) aborts fitting.
    pub fn fit(
        &self,
        init: Option<ModelState>,
        train: &[LabeledSample],
        eval: Option<&[LabeledSample]>,
    ) -> Result<Option<ModelState>, SgdError> {
        let config = &self.config;
        let n_epochs = config.n_epochs as usize;

        let mut logger = TrainingLogger::new(config.verbosity);
        logger.start_training(n_epochs, train.len(), config.learning_rate);

        let mut order: Vec<usize> = (0..train.len()).collect();
        let mut rng = StdRng::seed_from_u64(config.seed);

        let mut early_stopping = match (config.early_stopping_rounds, eval) {
            (Some(rounds), Some(_)) => Some(EarlyStopping::new(rounds as usize)),
            (Some(_), None) => {
                logger.warn_early_stopping_without_eval();
                None
            }
            (None, _) => None,
        };
        let mut best: Option<ModelState> = None;

        let mut state = init;
        let mut epochs_run = 0;

        for epoch in 1..=n_epochs {
            if config.shuffle {
                order.shuffle(&mut rng);
            }
            for &idx in &order {
                let next = step(state.as_ref(), &train[idx], config.learning_rate)?;
                logger.log_sample(idx, next.intercept());
                state = Some(next);
            }
            epochs_run = epoch;

            let Some(model) = state.as_ref() else {
                break;
            };

            let eval_loss = match eval {
                Some(eval) if early_stopping.is_some() || logger.enabled(Verbosity::Warning) => {
                    Some(evaluate(&LogLoss, model, eval)?)
                }
                _ => None,
            };

            if logger.enabled(Verbosity::Warning) {
                let train_loss = evaluate(&LogLoss, model, train)?;
                logger.log_epoch(epoch, train_loss, eval_loss);
            }

            if let (Some(es), Some(loss)) = (early_stopping.as_mut(), eval_loss) {
                let stop = es.should_stop(loss);
                if es.improved_last() {
                    best = Some(model.clone());
                }
                if stop {
                    logger.log_early_stop(
                        epoch,
                        es.best_round() + 1,
                        es.best_value().unwrap_or(loss),
                    );
                    break;
                }
            }
        }

        logger.finish_training(epochs_run);
        Ok(best.or(state))
    }
}
