//! Descriptive statistics and simple linear regression over numeric samples.
//!
//! - **Descriptive** — [`mean`], [`median`], [`variance`], [`standard_deviation`]
//! - **Bivariate** — [`covariance`], [`correlation`], [`rsquared`]
//! - **Regression** — [`ordinary_least_square`], [`linear_forecast`],
//!   [`residuals`], and the lazily-fitted [`LinearRegression`] holder
//!
//! Samples are borrowed slices of any primitive numeric type (see
//! [`Observation`]); results are always `f64`.
//!
//! ```
//! use simplestats::{linear_regression, rsquared};
//!
//! let x = [1, 2, 3, 4, 5];
//! let y = [4.0, 4.5, 5.5, 5.3, 6.0];
//! let reg = linear_regression(&x, &y).unwrap();
//! assert!((reg.slope() - 0.48).abs() < 1e-12);
//! assert_eq!(reg.rsquared(), rsquared(&x, &y).unwrap());
//! ```

pub mod correlation;
pub mod descriptive;
pub mod regression;

pub use correlation::{correlation, covariance, rsquared};
pub use descriptive::{mean, median, standard_deviation, variance};
pub use regression::{
    linear_forecast, linear_regression, ordinary_least_square, residuals, LinearFit,
    LinearRegression,
};
pub use simplestats_core::{ErrorKind, Observation, Result, StatsError, Summarizable};
