//! Simple linear regression by ordinary least squares.
//!
//! [`ordinary_least_square`] returns a [`LinearFit`] directly. The
//! [`LinearRegression`] holder binds one `(x, y)` pair and computes its fit,
//! r-squared and residuals on first access, caching each for the lifetime of
//! the holder.

use std::fmt;
use std::sync::OnceLock;

use log::{debug, trace, warn};
use simplestats_core::{Observation, Result, StatsError, Summarizable};

use crate::correlation::{mean_product, pearson};
use crate::descriptive::mean_of;

/// Slope and intercept of the line `slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    /// Value of the fitted line at `value`.
    pub fn forecast<T: Observation>(&self, value: T) -> f64 {
        linear_forecast(self.slope, self.intercept, value)
    }

    /// Observed minus fitted value for every pair in `(x, y)`.
    pub fn residuals<X: Observation, Y: Observation>(&self, x: &[X], y: &[Y]) -> Result<Vec<f64>> {
        residuals(self.slope, self.intercept, x, y)
    }
}

impl Summarizable for LinearFit {
    fn summary(&self) -> String {
        format!("slope={:.4}, intercept={:.4}", self.slope, self.intercept)
    }
}

/// Closed-form least-squares fit of `y` against `x`.
///
/// Fails with `LengthMismatch` when the lengths differ, otherwise with
/// `InsufficientData` when there are fewer than two pairs.
///
/// A constant `x` makes the slope denominator zero. That is not an error:
/// the slope and intercept come back infinite or NaN.
///
/// ```
/// let fit = simplestats::ordinary_least_square(&[1, 2, 3], &[1.0, 3.0, 4.5]).unwrap();
/// assert!((fit.slope - 1.75).abs() < 1e-12);
/// ```
pub fn ordinary_least_square<X: Observation, Y: Observation>(
    x: &[X],
    y: &[Y],
) -> Result<LinearFit> {
    check_regression("ordinary_least_square", x, y)?;
    Ok(least_squares(x, y))
}

/// Evaluate the line `slope * value + intercept`.
pub fn linear_forecast<T: Observation>(slope: f64, intercept: f64, value: T) -> f64 {
    slope * value.to_f64() + intercept
}

/// Elementwise `y[i] - linear_forecast(slope, intercept, x[i])`.
pub fn residuals<X: Observation, Y: Observation>(
    slope: f64,
    intercept: f64,
    x: &[X],
    y: &[Y],
) -> Result<Vec<f64>> {
    if x.len() != y.len() {
        return Err(StatsError::mismatch("residuals", x.len(), y.len()));
    }
    Ok(residual_values(slope, intercept, x, y))
}

/// Build a [`LinearRegression`] holder for `(x, y)`.
///
/// Fails exactly as [`ordinary_least_square`] does, before anything is fitted.
pub fn linear_regression<'a, X: Observation, Y: Observation>(
    x: &'a [X],
    y: &'a [Y],
) -> Result<LinearRegression<'a, X, Y>> {
    LinearRegression::new(x, y)
}

// ── Regression holder ──────────────────────────────────────────────────────

/// A least-squares regression bound to one pair of samples.
///
/// Slope and intercept are computed together on first access and never
/// recomputed. R-squared and residuals have their own caches. Every cache is
/// a [`OnceLock`], so the holder can be shared across threads and each value
/// is computed at most once.
#[derive(Debug, Clone)]
pub struct LinearRegression<'a, X, Y> {
    x: &'a [X],
    y: &'a [Y],
    fit: OnceLock<LinearFit>,
    rsquared: OnceLock<f64>,
    residuals: OnceLock<Vec<f64>>,
}

impl<'a, X: Observation, Y: Observation> LinearRegression<'a, X, Y> {
    /// Validate and bind `(x, y)`. Nothing is computed yet.
    pub fn new(x: &'a [X], y: &'a [Y]) -> Result<Self> {
        check_regression("linear_regression", x, y)?;
        debug!("linear regression bound to {} observations", x.len());
        Ok(Self {
            x,
            y,
            fit: OnceLock::new(),
            rsquared: OnceLock::new(),
            residuals: OnceLock::new(),
        })
    }

    /// The predictor sample.
    pub fn x(&self) -> &'a [X] {
        self.x
    }

    /// The response sample.
    pub fn y(&self) -> &'a [Y] {
        self.y
    }

    /// Number of paired observations.
    pub fn n(&self) -> usize {
        self.x.len()
    }

    /// Slope and intercept, fitted on first call.
    pub fn fit(&self) -> LinearFit {
        *self.fit.get_or_init(|| {
            trace!("fitting least squares over {} observations", self.n());
            least_squares(self.x, self.y)
        })
    }

    pub fn slope(&self) -> f64 {
        self.fit().slope
    }

    pub fn intercept(&self) -> f64 {
        self.fit().intercept
    }

    /// Squared Pearson correlation of the bound samples.
    ///
    /// Cached separately; reading it does not fit the line.
    pub fn rsquared(&self) -> f64 {
        *self.rsquared.get_or_init(|| {
            trace!("computing r-squared over {} observations", self.n());
            pearson(self.x, self.y).powi(2)
        })
    }

    /// Residuals of the fitted line, one per observation.
    pub fn residuals(&self) -> &[f64] {
        self.residuals.get_or_init(|| {
            let fit = self.fit();
            trace!("computing residuals over {} observations", self.n());
            residual_values(fit.slope, fit.intercept, self.x, self.y)
        })
    }

    /// Value of the fitted line at `value`. Not cached.
    pub fn linear_forecast<T: Observation>(&self, value: T) -> f64 {
        self.fit().forecast(value)
    }
}

impl<X: Observation, Y: Observation> fmt::Display for LinearRegression<'_, X, Y> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LinearRegression({:?}, {:?})", self.x, self.y)
    }
}

impl<X: Observation, Y: Observation> Summarizable for LinearRegression<'_, X, Y> {
    fn summary(&self) -> String {
        format!(
            "n={}, {}, r2={:.4}",
            self.n(),
            self.fit().summary(),
            self.rsquared(),
        )
    }
}

// ── Internal ───────────────────────────────────────────────────────────────

/// Mismatch is reported before the two-observation floor.
fn check_regression<X: Observation, Y: Observation>(
    operation: &'static str,
    x: &[X],
    y: &[Y],
) -> Result<()> {
    if x.len() != y.len() {
        return Err(StatsError::mismatch(operation, x.len(), y.len()));
    }
    if x.len() < 2 {
        return Err(StatsError::insufficient(operation, 2, x));
    }
    Ok(())
}

/// Least-squares fit without checks. Caller guarantees equal lengths of at
/// least 2.
fn least_squares<X: Observation, Y: Observation>(x: &[X], y: &[Y]) -> LinearFit {
    let n = x.len();
    let mean_x = mean_of(x.iter().map(|v| v.to_f64()), n);
    let mean_y = mean_of(y.iter().map(|v| v.to_f64()), n);
    let mean_xy = mean_product(x, y);
    let mean_x2 = mean_of(x.iter().map(|v| v.to_f64().powi(2)), n);

    let denominator = mean_x.powi(2) - mean_x2;
    if denominator == 0.0 {
        warn!("least squares: x is constant over {} observations, slope is undefined", n);
    }
    let slope = -(mean_xy - mean_x * mean_y) / denominator;
    LinearFit {
        slope,
        intercept: mean_y - slope * mean_x,
    }
}

fn residual_values<X: Observation, Y: Observation>(
    slope: f64,
    intercept: f64,
    x: &[X],
    y: &[Y],
) -> Vec<f64> {
    x.iter()
        .zip(y)
        .map(|(&xi, &yi)| yi.to_f64() - linear_forecast(slope, intercept, xi))
        .collect()
}

// ── Tests ──────────────────────────────────────────────────────────────────
