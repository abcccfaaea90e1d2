//! Compensated floating-point summation.
//!
//! [`compensated_sum`] uses Neumaier's variant of Kahan summation: a running
//! correction term recovers the low-order bits lost by each addition, so the
//! error bound does not grow with the number of terms.

/// Sum `values` with Neumaier compensation.
///
/// Infinite or NaN terms propagate exactly as in a plain sum.
pub fn compensated_sum<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let mut sum = 0.0_f64;
    let mut compensation = 0.0_f64;
    for x in values {
        let t = sum + x;
        if sum.abs() >= x.abs() {
            compensation += (sum - t) + x;
        } else {
            compensation += (x - t) + sum;
        }
        sum = t;
    }
    // The correction term is meaningless once the running sum overflows.
    if !sum.is_finite() {
        return sum;
    }
    sum + compensation
}
