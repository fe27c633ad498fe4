//! Early stopping callback for multi-epoch fitting.
//!
//! Monitors the evaluation log loss and stops fitting when no improvement is
//! seen for a specified number of epochs.

/// Early stopping configuration and state.
///
/// Lower metric values are better.
///
/// # Example
///
/// ```
/// use online_logit::training::EarlyStopping;
///
/// let mut early_stop = EarlyStopping::new(2);
///
/// assert!(!early_stop.should_stop(0.7));
/// assert!(!early_stop.should_stop(0.8));
/// assert!(early_stop.should_stop(0.75));
/// assert_eq!(early_stop.best_round(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct EarlyStopping {
    /// Number of epochs without improvement before stopping.
    patience: usize,
    /// Best metric value seen so far.
    best_value: Option<f64>,
    /// Epoch at which best value was observed.
    best_round: usize,
    /// Current epoch.
    current_round: usize,
}

impl EarlyStopping {
    /// Create a new early stopping callback with the given patience.
    pub fn new(patience: usize) -> Self {
        Self {
            patience,
            best_value: None,
            best_round: 0,
            current_round: 0,
        }
    }

    /// Record a metric value and check if fitting should stop.
    ///
    /// NaN never counts as an improvement.
    pub fn should_stop(&mut self, value: f64) -> bool {
        let is_improvement = match self.best_value {
            None => !value.is_nan(),
            Some(best) => value < best,
        };

        if is_improvement {
            self.best_value = Some(value);
            self.best_round = self.current_round;
        }

        self.current_round += 1;

        self.current_round - self.best_round > self.patience
    }

    /// Whether the most recent [`should_stop`](Self::should_stop) call set a new best.
    pub fn improved_last(&self) -> bool {
        self.current_round > 0
            && self.best_value.is_some()
            && self.best_round + 1 == self.current_round
    }

    /// Get the best metric value observed.
    pub fn best_value(&self) -> Option<f64> {
        self.best_value
    }

    /// Get the epoch at which the best value was observed.
    pub fn best_round(&self) -> usize {
        self.best_round
    }

}
