//! Bivariate statistics over paired samples.
//!
//! Index `i` of `x` is paired with index `i` of `y`. Every function checks
//! that both samples have the same length before doing anything else.

use simplestats_core::{Observation, Result, StatsError};

use crate::descriptive::{mean_of, sample_variance};

/// Unbiased sample covariance: `n / (n - 1) * (mean(x*y) - mean(x) * mean(y))`.
///
/// Fails with `LengthMismatch` if the lengths differ, `EmptyInput` if both
/// samples are empty and `InsufficientData` for a single pair.
pub fn covariance<X: Observation, Y: Observation>(x: &[X], y: &[Y]) -> Result<f64> {
    check_paired("covariance", x, y)?;
    Ok(sample_covariance(x, y))
}

/// Pearson's correlation coefficient.
///
/// A constant sample has zero standard deviation, so the result is NaN or
/// infinite rather than an error.
pub fn correlation<X: Observation, Y: Observation>(x: &[X], y: &[Y]) -> Result<f64> {
    check_paired("correlation", x, y)?;
    Ok(pearson(x, y))
}

/// Coefficient of determination for a single predictor: `correlation(x, y)²`.
pub fn rsquared<X: Observation, Y: Observation>(x: &[X], y: &[Y]) -> Result<f64> {
    check_paired("rsquared", x, y)?;
    Ok(pearson(x, y).powi(2))
}

// ── Internal ───────────────────────────────────────────────────────────────

/// Length checks shared by the paired functions: mismatch first, then the
/// empty sample, then the two-observation floor.
pub(crate) fn check_paired<X: Observation, Y: Observation>(
    operation: &'static str,
    x: &[X],
    y: &[Y],
) -> Result<()> {
    if x.len() != y.len() {
        return Err(StatsError::mismatch(operation, x.len(), y.len()));
    }
    if x.is_empty() {
        return Err(StatsError::empty(operation, x));
    }
    if x.len() < 2 {
        return Err(StatsError::insufficient(operation, 2, x));
    }
    Ok(())
}

/// Mean of the elementwise product `x[i] * y[i]`.
pub(crate) fn mean_product<X: Observation, Y: Observation>(x: &[X], y: &[Y]) -> f64 {
    mean_of(
        x.iter().zip(y).map(|(a, b)| a.to_f64() * b.to_f64()),
        x.len(),
    )
}

/// Covariance without checks. Caller guarantees equal lengths of at least 2.
pub(crate) fn sample_covariance<X: Observation, Y: Observation>(x: &[X], y: &[Y]) -> f64 {
    let n = x.len() as f64;
    let mean_x = mean_of(x.iter().map(|v| v.to_f64()), x.len());
    let mean_y = mean_of(y.iter().map(|v| v.to_f64()), y.len());
    (n / (n - 1.0)) * (mean_product(x, y) - mean_x * mean_y)
}

/// Pearson correlation without checks. Caller guarantees equal lengths of at
/// least 2.
pub(crate) fn pearson<X: Observation, Y: Observation>(x: &[X], y: &[Y]) -> f64 {
    let sd_x = sample_variance(x).sqrt();
    let sd_y = sample_variance(y).sqrt();
    sample_covariance(x, y) / (sd_x * sd_y)
}

// ── Tests ──────────────────────────────────────────────────────────────────
