//! Descriptive statistics for a single sample.
//!
//! [`mean`] and [`median`] need at least one observation; [`variance`] and
//! [`standard_deviation`] need at least two. Sums are accumulated with
//! [`compensated_sum`] so results are independent of summation order at the
//! precision callers compare against.

use simplestats_core::{compensated_sum, Observation, Result, StatsError};

/// Arithmetic mean.
///
/// ```
/// assert_eq!(simplestats::mean(&[1, 2, 3, 4, 5]).unwrap(), 3.0);
/// ```
pub fn mean<T: Observation>(x: &[T]) -> Result<f64> {
    if x.is_empty() {
        return Err(StatsError::empty("mean", x));
    }
    Ok(mean_of(x.iter().map(|v| v.to_f64()), x.len()))
}

/// Median (middle value of the sorted sample).
///
/// With an even number of observations, the mean of the two central values.
pub fn median<T: Observation>(x: &[T]) -> Result<f64> {
    if x.is_empty() {
        return Err(StatsError::empty("median", x));
    }
    let mut sorted: Vec<f64> = x.iter().map(|v| v.to_f64()).collect();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let n = sorted.len();
    let mid = n / 2;
    if n % 2 == 0 {
        Ok((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Ok(sorted[mid])
    }
}

/// Unbiased sample variance (Bessel's correction, denominator `n - 1`).
///
/// The population variance is `(n - 1) / n * variance(x)`.
pub fn variance<T: Observation>(x: &[T]) -> Result<f64> {
    if x.len() < 2 {
        return Err(StatsError::insufficient("variance", 2, x));
    }
    Ok(sample_variance(x))
}

/// Unbiased sample standard deviation, the square root of [`variance`].
pub fn standard_deviation<T: Observation>(x: &[T]) -> Result<f64> {
    Ok(variance(x)?.sqrt())
}

// ── Internal ───────────────────────────────────────────────────────────────

/// Mean of `n` already-converted values. Caller guarantees `n > 0`.
pub(crate) fn mean_of<I>(values: I, n: usize) -> f64
where
    I: IntoIterator<Item = f64>,
{
    compensated_sum(values) / n as f64
}

/// Sample variance without the length check. Caller guarantees `x.len() >= 2`.
pub(crate) fn sample_variance<T: Observation>(x: &[T]) -> f64 {
    let m = mean_of(x.iter().map(|v| v.to_f64()), x.len());
    let ss = compensated_sum(x.iter().map(|v| (v.to_f64() - m).powi(2)));
    ss / (x.len() - 1) as f64
}

// ── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use simplestats_core::ErrorKind;

    const TOL: f64 = 1e-10;

    #[test]
    fn mean_integers() {
        assert_eq!(mean(&[1, 2, 3, 4, 5]).unwrap(), 3.0);
    }

    #[test]
    fn mean_floats() {
        assert!((mean(&[2.0, 4.0, 6.0]).unwrap() - 4.0).abs() < TOL);
    }

    #[test]
    fn mean_is_compensated() {
        assert_eq!(mean(&[0.1; 10]).unwrap(), 0.1);
    }

    #[test]
    fn mean_empty() {
        let err = mean::<f64>(&[]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyInput);
        assert_eq!(err.to_string(), "mean: an empty sample has no mean []");
    }

    #[test]
    fn median_odd() {
        assert_eq!(median(&[5, 2, 4, 1, 3]).unwrap(), 3.0);
    }

    #[test]
    fn median_even() {
        assert_eq!(median(&[5, 2, 6, 4, 1, 3]).unwrap(), 3.5);
    }

    #[test]
    fn median_single() {
        assert_eq!(median(&[42_u8]).unwrap(), 42.0);
    }

    #[test]
    fn median_does_not_touch_input() {
        let data = [3.0, 1.0, 2.0];
        median(&data).unwrap();
        assert_eq!(data, [3.0, 1.0, 2.0]);
    }

    #[test]
    fn median_empty() {
        let err = median::<i32>(&[]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyInput);
    }

    #[test]
    fn variance_known() {
        assert_eq!(variance(&[1, 2, 3, 4, 5]).unwrap(), 2.5);
    }

    #[test]
    fn variance_constant() {
        assert_eq!(variance(&[42, 42, 42]).unwrap(), 0.0);
    }

    #[test]
    fn variance_sample_correction() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((variance(&data).unwrap() - 32.0 / 7.0).abs() < TOL);
    }

    #[test]
    fn variance_too_few() {
        let err = variance(&[1]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InsufficientData);
        assert_eq!(
            err.to_string(),
            "variance: needs at least 2 observations, got 1 [1]"
        );
        assert_eq!(
            variance::<f64>(&[]).unwrap_err().kind(),
            ErrorKind::InsufficientData
        );
    }

    #[test]
    fn standard_deviation_known() {
        let sd = standard_deviation(&[1, 2, 3, 4, 5]).unwrap();
        assert!((sd - 1.5811388300842).abs() < 5e-14);
    }

    #[test]
    fn standard_deviation_too_few() {
        let err = standard_deviation(&[7.5]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InsufficientData);
    }
}
