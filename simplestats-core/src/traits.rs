//! Core trait definitions shared across simplestats crates.

use core::fmt::Debug;

/// A single numeric observation in a sample.
///
/// Implemented for every primitive integer and float type. Samples are
/// borrowed as `&[T]` and each value is widened to `f64` before any
/// arithmetic, so all outputs are `f64`.
pub trait Observation: Copy + Debug {
    /// The observation as a double-precision float.
    fn to_f64(self) -> f64;
}

macro_rules! impl_observation {
    ($($t:ty),* $(,)?) => {
        $(
            impl Observation for $t {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_observation!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

/// A type that can produce a summary of its contents.
pub trait Summarizable {
    /// A one-line summary suitable for display.
    fn summary(&self) -> String;
}
