//! Shared primitives and traits for the simplestats crates.
//!
//! `simplestats-core` provides the foundation the statistics crate builds on:
//!
//! - **Error types** — [`StatsError`], [`ErrorKind`] and [`Result`]
//! - **Traits** — [`Observation`] for numeric sample elements, [`Summarizable`]
//! - **Summation** — [`compensated_sum`] for low-error accumulation

pub mod error;
pub mod sum;
pub mod traits;

pub use error::{ErrorKind, Result, StatsError};
pub use sum::compensated_sum;
pub use traits::*;
