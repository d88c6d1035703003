use core::fmt::Debug;

use num_traits::{Float, FloatConst};

/// Floating-point types that filter coefficients can be derived in.
///
/// Besides the arithmetic provided by [`Float`] and [`FloatConst`], this
/// carries the handful of literal constants the derivations are written in
/// terms of, so generic code never has to go through a fallible cast.
pub trait FloatSample: Copy + Clone + PartialOrd + PartialEq + Debug + Float + FloatConst {
    const HALF: Self;
    const ONE: Self;
    const TWO: Self;
    const TWENTY: Self;

    /// Widens this value to an [`f64`], for error reporting.
    fn as_f64(self) -> f64;

    /// Converts an [`f64`] to this type, rounding to the nearest
    /// representable value.
    fn from_f64_lossy(value: f64) -> Self;
}

/// A macro used to simplify the implementation of [`FloatSample`].
macro_rules! impl_float_sample {
    ($($T:ty),* $(,)?) => {
        $(
            impl FloatSample for $T {
                const HALF: Self = 0.5;
                const ONE: Self = 1.0;
                const TWO: Self = 2.0;
                const TWENTY: Self = 20.0;

                #[inline]
                fn as_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_f64_lossy(value: f64) -> Self {
                    value as $T
                }
            }
        )*
    }
}

impl_float_sample!(f32, f64);
