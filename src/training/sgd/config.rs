//! Configuration for SGD training.
//!
//! # Example
//!
//! ```
//! use online_logit::training::sgd::SgdConfig;
//! use online_logit::training::Verbosity;
//!
//! let config = SgdConfig::builder()
//!     .learning_rate(0.3)
//!     .n_epochs(100)
//!     .verbosity(Verbosity::Info)
//!     .build()
//!     .unwrap();
//! assert_eq!(config.n_epochs, 100);
//! ```

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::training::Verbosity;

/// Default step size when none is configured.
pub const DEFAULT_LEARNING_RATE: f64 = 0.01;

/// Errors that can occur during configuration validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Learning rate must be finite and positive.
    #[error("learning_rate must be positive, got {0}")]
    InvalidLearningRate(f64),
    /// Number of epochs must be at least 1.
    #[error("n_epochs must be at least 1")]
    InvalidNEpochs,
    /// Early stopping patience must be at least 1 when set.
    #[error("early_stopping_rounds must be at least 1 when set")]
    InvalidEarlyStoppingRounds,
}

/// SGD training configuration.
///
/// The learning rate lives here rather than in the update rule itself: the
/// single-step API always takes it explicitly.
#[derive(Debug, Clone, PartialEq, Builder, Serialize, Deserialize)]
#[builder(
    derive(Clone, Debug),
    finish_fn(vis = "", name = __build_internal)
)]
#[serde(try_from = "SgdConfigFields")]
pub struct SgdConfig {
    /// Step size. Default: 0.01.
    #[builder(default = DEFAULT_LEARNING_RATE)]
    pub learning_rate: f64,

    /// Passes over the training slice in [`SgdTrainer::fit`](super::SgdTrainer::fit).
    /// Default: 1.
    #[builder(default = 1)]
    pub n_epochs: u32,

    /// Shuffle sample order at the start of every epoch. Default: false.
    ///
    /// Streaming transforms never shuffle; this only affects `fit`.
    #[builder(default)]
    pub shuffle: bool,

    /// Seed for epoch shuffling. Default: 42.
    #[builder(default = 42)]
    pub seed: u64,

    /// Stop `fit` when the eval log loss has not improved for this many epochs.
    /// `None` disables early stopping.
    pub early_stopping_rounds: Option<u32>,

    /// Verbosity level. Default: `Silent`.
    #[builder(default)]
    pub verbosity: Verbosity,
}

impl<S: sgd_config_builder::IsComplete> SgdConfigBuilder<S> {
    /// Build and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if:
    /// - `learning_rate` is not finite and `> 0`
    /// - `n_epochs == 0`
    /// - `early_stopping_rounds == Some(0)`
    pub fn build(self) -> Result<SgdConfig, ConfigError> {
        let config = self.__build_internal();
        config.validate()?;
        Ok(config)
    }
}

impl SgdConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.learning_rate > 0.0 && self.learning_rate.is_finite()) {
            return Err(ConfigError::InvalidLearningRate(self.learning_rate));
        }
        if self.n_epochs == 0 {
            return Err(ConfigError::InvalidNEpochs);
        }
        if self.early_stopping_rounds == Some(0) {
            return Err(ConfigError::InvalidEarlyStoppingRounds);
        }
        Ok(())
    }
}

/// Deserialized fields, validated before becoming an [`SgdConfig`].
#[derive(Deserialize)]
struct SgdConfigFields {
    learning_rate: f64,
    n_epochs: u32,
    shuffle: bool,
    seed: u64,
    early_stopping_rounds: Option<u32>,
    #[serde(default)]
    verbosity: Verbosity,
}

impl TryFrom<SgdConfigFields> for SgdConfig {
    type Error = ConfigError;

    fn try_from(fields: SgdConfigFields) -> Result<Self, Self::Error> {
        let config = SgdConfig {
            learning_rate: fields.learning_rate,
            n_epochs: fields.n_epochs,
            shuffle: fields.shuffle,
            seed: fields.seed,
            early_stopping_rounds: fields.early_stopping_rounds,
            verbosity: fields.verbosity,
        };
        config.validate()?;
        Ok(config)
    }
}

impl Default for SgdConfig {
    fn default() -> Self {
        Self::builder().build().expect("default config is valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SgdConfig::builder().build().unwrap();
        assert_eq!(config.learning_rate, DEFAULT_LEARNING_RATE);
        assert_eq!(config.n_epochs, 1);
        assert!(!config.shuffle);
        assert_eq!(config.seed, 42);
        assert_eq!(config.early_stopping_rounds, None);
        assert_eq!(config.verbosity, Verbosity::Silent);
        assert_eq!(config, SgdConfig::default());
    }

    #[test]
    fn test_invalid_learning_rate_zero() {
        let result = SgdConfig::builder().learning_rate(0.0).build();
        assert_eq!(result, Err(ConfigError::InvalidLearningRate(0.0)));
    }

    #[test]
    fn test_invalid_learning_rate_negative() {
        let result = SgdConfig::builder().learning_rate(-0.1).build();
        assert!(matches!(result, Err(ConfigError::InvalidLearningRate(_))));
    }

    #[test]
    fn test_invalid_learning_rate_nan() {
        let result = SgdConfig::builder().learning_rate(f64::NAN).build();
        assert!(matches!(result, Err(ConfigError::InvalidLearningRate(_))));
    }

    #[test]
    fn test_learning_rate_greater_than_one_is_valid() {
        assert!(SgdConfig::builder().learning_rate(1.5).build().is_ok());
    }

    #[test]
    fn test_invalid_n_epochs_zero() {
        let result = SgdConfig::builder().n_epochs(0).build();
        assert_eq!(result, Err(ConfigError::InvalidNEpochs));
    }

    #[test]
    fn test_invalid_early_stopping_zero() {
        let result = SgdConfig::builder().early_stopping_rounds(0).build();
        assert_eq!(result, Err(ConfigError::InvalidEarlyStoppingRounds));
    }

    #[test]
    fn test_builder_pattern() {
        let config = SgdConfig::builder()
            .learning_rate(0.3)
            .n_epochs(20)
            .shuffle(true)
            .seed(7)
            .early_stopping_rounds(3)
            .build()
            .unwrap();

        assert_eq!(config.learning_rate, 0.3);
        assert_eq!(config.n_epochs, 20);
        assert!(config.shuffle);
        assert_eq!(config.seed, 7);
        assert_eq!(config.early_stopping_rounds, Some(3));
    }

    #[test]
    fn test_serde_round_trip() {
        let config = SgdConfig::builder()
            .learning_rate(0.05)
            .n_epochs(4)
            .verbosity(Verbosity::Debug)
            .build()
            .unwrap();
        let json = serde_json::to_string(&config).unwrap();
        let back: SgdConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_deserialize_validates() {
        let fields = |learning_rate: f64, n_epochs: u32, rounds: Option<u32>| {
            serde_json::json!({
                "learning_rate": learning_rate,
                "n_epochs": n_epochs,
                "shuffle": false,
                "seed": 1,
                "early_stopping_rounds": rounds,
            })
        };

        let ok: SgdConfig = serde_json::from_value(fields(0.1, 3, None)).unwrap();
        assert_eq!(ok.verbosity, Verbosity::Silent);
        assert_eq!(ok.n_epochs, 3);

        for bad in [
            fields(0.1, 0, None),
            fields(-0.1, 3, None),
            fields(0.1, 3, Some(0)),
        ] {
            let err = serde_json::from_value::<SgdConfig>(bad).unwrap_err();
            assert!(err.to_string().contains("must be"), "{err}");
        }
    }
}
