//! Common utilities used across the crate.
//!
//! Numeric primitives shared by the trainer and the predictor, and the
//! parallelism flag used by batch prediction.

use ndarray::{ArrayView1, Zip};
use rayon::prelude::*;

// =============================================================================
// Numeric Primitives
// =============================================================================

/// Bound applied to the logit before exponentiation in [`sigmoid`].
///
/// `1 + exp(-35)` is still distinguishable from `1.0` in `f64`, so
/// `sigmoid(35)` stays strictly below 1 and `sigmoid(-35)` strictly above 0.
pub const SIGMOID_CLAMP: f64 = 35.0;

/// Logistic function `1 / (1 + exp(-z))`.
///
/// `z` is clamped to `[-SIGMOID_CLAMP, SIGMOID_CLAMP]` first, so the result is
/// always finite and lies strictly inside (0, 1), even for infinite input.
/// NaN propagates.
///
/// ```
/// use online_logit::utils::sigmoid;
///
/// assert_eq!(sigmoid(0.0), 0.5);
/// assert!(sigmoid(1e300) < 1.0);
/// assert!(sigmoid(-1e300) > 0.0);
/// ```
#[inline]
pub fn sigmoid(z: f64) -> f64 {
    let z = z.clamp(-SIGMOID_CLAMP, SIGMOID_CLAMP);
    1.0 / (1.0 + (-z).exp())
}

/// Inner product of two equal-length views of any stride.
///
/// Callers validate lengths; mismatched views are a bug here.
///
/// Finite inputs never produce NaN. When the plain sum overflows (products of
/// opposite sign reaching `±inf`), it is recomputed on operands scaled down by
/// a power of two and scaled back up, saturating to `±inf`.
#[inline]
pub fn dot(a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>) -> f64 {
    debug_assert_eq!(a.len(), b.len(), "dot of unequal lengths");
    let sum = a.dot(&b);
    if sum.is_finite() {
        sum
    } else {
        rescaled_dot(a, b)
    }
}

#[cold]
fn rescaled_dot(a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>) -> f64 {
    // Each scaled operand is at most 2^484, so products and their sum stay finite.
    let scale = 2f64.powi(-540);
    let scaled = Zip::from(&a)
        .and(&b)
        .fold(0.0, |acc, &x, &y| acc + (x * scale) * (y * scale));
    scaled / scale / scale
}

// =============================================================================
// Parallelism Configuration
// =============================================================================

/// Whether parallel execution is allowed.
///
/// When `Parallel`, batch prediction spreads rows over the current rayon pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Parallelism {
    Sequential,
    Parallel,
}

impl Parallelism {
    /// Create from thread count semantics.
    ///
    /// - 0 = auto (parallel if rayon pool has multiple threads, sequential otherwise)
    /// - 1 = sequential
    /// - >1 = parallel
    #[inline]
    pub fn from_threads(n_threads: usize) -> Self {
        if n_threads == 1 || (n_threads == 0 && rayon::current_num_threads() == 1) {
            Parallelism::Sequential
        } else {
            Parallelism::Parallel
        }
    }

    /// Returns `true` if parallel execution is allowed.
    #[inline]
    pub fn is_parallel(self) -> bool {
        matches!(self, Parallelism::Parallel)
    }

    #[inline]
    pub fn maybe_par_map<T, B, I, F>(self, iter: I, f: F) -> Vec<B>
    where
        T: Send,
        B: Send,
        I: IntoIterator<Item = T> + IntoParallelIterator<Item = T>,
        F: Fn(T) -> B + Sync + Send,
    {
        if self.is_parallel() {
            iter.into_par_iter().map(f).collect()
        } else {
            iter.into_iter().map(f).collect()
        }
    }
}
