//! Structured error types for simplestats.

use core::fmt::Write;

use thiserror::Error;

use crate::traits::Observation;

/// How many values of an offending sample are echoed in an error message.
const ECHO_LIMIT: usize = 8;

/// Unified error type for all simplestats operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatsError {
    /// A function that needs at least one observation received none.
    #[error("{operation}: an empty sample has no {operation} {sample}")]
    EmptyInput {
        operation: &'static str,
        sample: String,
    },

    /// A function that needs a minimum number of observations received fewer.
    #[error("{operation}: needs at least {needed} observations, got {got} {sample}")]
    InsufficientData {
        operation: &'static str,
        needed: usize,
        got: usize,
        sample: String,
    },

    /// Two paired samples differ in length.
    #[error("{operation}: samples must have the same length ({x_len} vs {y_len})")]
    LengthMismatch {
        operation: &'static str,
        x_len: usize,
        y_len: usize,
    },
}

/// Fieldless discriminant of [`StatsError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    EmptyInput,
    InsufficientData,
    LengthMismatch,
}

impl StatsError {
    pub fn empty<T: Observation>(operation: &'static str, sample: &[T]) -> Self {
        StatsError::EmptyInput {
            operation,
            sample: render_sample(sample),
        }
    }

    pub fn insufficient<T: Observation>(
        operation: &'static str,
        needed: usize,
        sample: &[T],
    ) -> Self {
        StatsError::InsufficientData {
            operation,
            needed,
            got: sample.len(),
            sample: render_sample(sample),
        }
    }

    pub fn mismatch(operation: &'static str, x_len: usize, y_len: usize) -> Self {
        StatsError::LengthMismatch {
            operation,
            x_len,
            y_len,
        }
    }

    /// The kind of failure, without its diagnostic payload.
    pub fn kind(&self) -> ErrorKind {
        match self {
            StatsError::EmptyInput { .. } => ErrorKind::EmptyInput,
            StatsError::InsufficientData { .. } => ErrorKind::InsufficientData,
            StatsError::LengthMismatch { .. } => ErrorKind::LengthMismatch,
        }
    }

    /// Name of the operation that failed.
    pub fn operation(&self) -> &'static str {
        match self {
            StatsError::EmptyInput { operation, .. }
            | StatsError::InsufficientData { operation, .. }
            | StatsError::LengthMismatch { operation, .. } => operation,
        }
    }
}

/// Render a sample as `[a, b, c]` for diagnostics.
///
/// Long samples are cut after the first few values and end with `, ...`.
pub fn render_sample<T: Observation>(sample: &[T]) -> String {
    let mut out = String::from("[");
    for (i, value) in sample.iter().take(ECHO_LIMIT).enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{:?}", value);
    }
    if sample.len() > ECHO_LIMIT {
        out.push_str(", ...");
    }
    out.push(']');
    out
}

/// Convenience alias used throughout simplestats.
pub type Result<T> = std::result::Result<T, StatsError>;
