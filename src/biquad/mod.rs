//! Coefficient derivations for biquad filter sections.
//!
//! Every derivation maps physical parameters (sample period, corner frequency,
//! and where applicable Q and linear gain) to a [`Coefficients`] record that is
//! already normalized by `a0`. The records follow the add-sign recursion
//!
//! ```text
//! y[n] = b0*x[n] + b1*x[n-1] + b2*x[n-2] + a1*y[n-1] + a2*y[n-2]
//! ```
//!
//! so `a1` and `a2` carry the sign flip that a subtract-sign evaluator would
//! otherwise apply.
//!
//! The plain functions (e.g. [`second_order_low_pass`]) perform no validation
//! and propagate IEEE-754 infinities and NaNs for out-of-domain input. The
//! `try_` variants (e.g. [`try_second_order_low_pass`]) check the domain first
//! and return an [`Error`](crate::Error) instead.

mod checked;
mod design;
mod omega;
mod pass;
mod shelf;

pub use self::checked::{
    try_first_order_high_pass, try_first_order_high_shelf, try_first_order_low_pass,
    try_first_order_low_shelf, try_second_order_high_pass, try_second_order_high_shelf,
    try_second_order_low_pass, try_second_order_low_shelf,
};
pub use self::design::{Design, Kind, Order};
pub use self::pass::{
    first_order_high_pass, first_order_low_pass, second_order_high_pass, second_order_low_pass,
};
pub use self::shelf::{
    first_order_high_shelf, first_order_low_shelf, second_order_high_shelf,
    second_order_low_shelf,
};

use crate::sample::FloatSample;

/// Coefficients for a digital biquad filter.
///
/// It is assumed that the `a0` coefficient is always normalized to 1.0,
/// and thus not included.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coefficients<X>
where
    X: FloatSample,
{
    // Transfer function numerator coefficients.
    pub b0: X,
    pub b1: X,
    pub b2: X,

    // Transfer function denominator coefficients, pre-negated so that the
    // feedback terms are added in the recursion.
    pub a1: X,
    pub a2: X,
}

impl<X> Coefficients<X>
where
    X: FloatSample,
{
    /// Coefficients that pass the input through unchanged.
    ///
    /// ```
    /// use iir_coeffs::biquad::Coefficients;
    ///
    /// fn main() {
    ///     let c = Coefficients::<f32>::identity();
    ///     assert_eq!(c.dc_gain(), 1.0);
    ///     assert_eq!(c.nyquist_gain(), 1.0);
    /// }
    /// ```
    pub fn identity() -> Self {
        Self {
            b0: X::ONE,
            b1: X::zero(),
            b2: X::zero(),
            a1: X::zero(),
            a2: X::zero(),
        }
    }

    /// Returns `true` if none of the coefficients is infinite or NaN.
    pub fn is_finite(&self) -> bool {
        self.b0.is_finite()
            && self.b1.is_finite()
            && self.b2.is_finite()
            && self.a1.is_finite()
            && self.a2.is_finite()
    }

    /// Returns `true` if this is a first-order section in biquad form, i.e.
    /// both second-order terms are zero.
    pub fn is_first_order(&self) -> bool {
        self.a2 == X::zero() && self.b2 == X::zero()
    }

    /// Evaluates the transfer function at `z = 1`.
    #[inline]
    pub fn dc_gain(&self) -> X {
        (self.b0 + self.b1 + self.b2) / (X::ONE - self.a1 - self.a2)
    }

    /// Evaluates the transfer function at `z = -1`.
    #[inline]
    pub fn nyquist_gain(&self) -> X {
        (self.b0 - self.b1 + self.b2) / (X::ONE + self.a1 - self.a2)
    }

    /// Converts every coefficient to another float type. Narrowing rounds to
    /// the nearest representable value.
    ///
    /// ```
    /// use iir_coeffs::biquad::{self, Coefficients};
    ///
    /// fn main() {
    ///     let c: Coefficients<f64> = biquad::first_order_low_pass(1.0 / 48000.0, 1000.0);
    ///     let narrowed = c.cast::<f32>();
    ///     assert_eq!(narrowed.b0, c.b0 as f32);
    /// }
    /// ```
    pub fn cast<Y>(&self) -> Coefficients<Y>
    where
        Y: FloatSample,
    {
        Coefficients {
            b0: Y::from_f64_lossy(self.b0.as_f64()),
            b1: Y::from_f64_lossy(self.b1.as_f64()),
            b2: Y::from_f64_lossy(self.b2.as_f64()),
            a1: Y::from_f64_lossy(self.a1.as_f64()),
            a2: Y::from_f64_lossy(self.a2.as_f64()),
        }
    }
}

impl<X> Default for Coefficients<X>
where
    X: FloatSample,
{
    fn default() -> Self {
        Self::identity()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_abs_diff_eq;

    #[test]
    fn identity() {
        let c = Coefficients::<f64>::identity();
        assert_eq!(c, Coefficients::default());
        assert!(c.is_finite());
        assert!(c.is_first_order());
        assert_eq!(c.dc_gain(), 1.0);
        assert_eq!(c.nyquist_gain(), 1.0);
    }

    #[test]
    fn finiteness() {
        let mut c = Coefficients::<f32>::identity();
        assert!(c.is_finite());

        c.a1 = f32::INFINITY;
        assert!(!c.is_finite());

        c.a1 = 0.0;
        c.b2 = f32::NAN;
        assert!(!c.is_finite());
    }

    #[test]
    fn point_gains() {
        // Two-sample moving average: y[n] = (x[n] + x[n-1]) / 2.
        let avg = Coefficients {
            b0: 0.5f64,
            b1: 0.5,
            b2: 0.0,
            a1: 0.0,
            a2: 0.0,
        };
        assert_abs_diff_eq!(avg.dc_gain(), 1.0);
        assert_abs_diff_eq!(avg.nyquist_gain(), 0.0);

        // Leaky integrator: y[n] = x[n] + 0.5 * y[n-1].
        let leaky = Coefficients {
            b0: 1.0f64,
            b1: 0.0,
            b2: 0.0,
            a1: 0.5,
            a2: 0.0,
        };
        assert_abs_diff_eq!(leaky.dc_gain(), 2.0);
        assert_abs_diff_eq!(leaky.nyquist_gain(), 1.0 / 1.5);
    }

    #[test]
    fn cast() {
        let c = Coefficients {
            b0: 0.25f32,
            b1: -0.5,
            b2: 0.125,
            a1: 1.5,
            a2: -0.75,
        };
        let wide: Coefficients<f64> = c.cast();
        assert_eq!(wide.b1, -0.5);
        assert_eq!(wide.cast::<f32>(), c);

        let huge = Coefficients {
            b0: 1e300f64,
            ..Coefficients::identity()
        };
        assert_eq!(huge.cast::<f32>().b0, f32::INFINITY);
        assert!(!huge.cast::<f32>().is_finite());
    }
}
