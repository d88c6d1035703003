//! Low-pass and high-pass sections.
//!
//! Each complementary pair shares its pole placement; only the zeros differ.

use crate::biquad::omega::Omega;
use crate::biquad::Coefficients;
use crate::sample::FloatSample;

/// First-order low-pass: unity gain at DC, a zero at Nyquist.
///
/// Valid for `sample_period > 0` and `0 < freq * sample_period < 0.5`.
///
/// ```
/// use iir_coeffs::biquad;
///
/// fn main() {
///     let c = biquad::first_order_low_pass(1.0 / 44100.0f32, 500.0);
///     assert!(c.is_first_order());
///     assert!((c.dc_gain() - 1.0).abs() < 1e-5);
/// }
/// ```
#[inline]
pub fn first_order_low_pass<X>(sample_period: X, freq: X) -> Coefficients<X>
where
    X: FloatSample,
{
    let w = Omega::new(sample_period, freq);
    let cos_p1 = w.cos_p1();

    let a0inverse = X::ONE / (w.sin + cos_p1);
    let b0 = w.sin * a0inverse;

    Coefficients {
        b0,
        b1: b0,
        b2: X::zero(),
        a1: -(w.sin - cos_p1) * a0inverse,
        a2: X::zero(),
    }
}

/// First-order high-pass: a zero at DC, unity gain at Nyquist.
///
/// Valid for `sample_period > 0` and `0 < freq * sample_period < 0.5`.
#[inline]
pub fn first_order_high_pass<X>(sample_period: X, freq: X) -> Coefficients<X>
where
    X: FloatSample,
{
    let w = Omega::new(sample_period, freq);
    let cos_p1 = w.cos_p1();

    let a0inverse = X::ONE / (w.sin + cos_p1);
    let b0 = cos_p1 * a0inverse;

    Coefficients {
        b0,
        b1: -b0,
        b2: X::zero(),
        a1: -(w.sin - cos_p1) * a0inverse,
        a2: X::zero(),
    }
}

/// Resonant second-order low-pass: a double zero at Nyquist, unity gain at DC.
///
/// Valid for `sample_period > 0`, `0 < freq * sample_period < 0.5` and
/// `q > 0`. Larger `q` sharpens the peak at `freq`.
#[inline]
pub fn second_order_low_pass<X>(sample_period: X, freq: X, q: X) -> Coefficients<X>
where
    X: FloatSample,
{
    let w = Omega::new(sample_period, freq);
    let alpha = w.alpha(q);

    let a0inverse = X::ONE / (X::ONE + alpha);
    let b1 = (X::ONE - w.cos) * a0inverse;
    let b0 = b1 * X::HALF;

    Coefficients {
        b0,
        b1,
        b2: b0,
        a1: X::TWO * w.cos * a0inverse,
        a2: -(X::ONE - alpha) * a0inverse,
    }
}

/// Resonant second-order high-pass: a double zero at DC, unity gain at
/// Nyquist.
///
/// Valid for `sample_period > 0`, `0 < freq * sample_period < 0.5` and
/// `q > 0`.
#[inline]
pub fn second_order_high_pass<X>(sample_period: X, freq: X, q: X) -> Coefficients<X>
where
    X: FloatSample,
{
    let w = Omega::new(sample_period, freq);
    let alpha = w.alpha(q);

    let a0inverse = X::ONE / (X::ONE + alpha);
    let b1 = -(X::ONE + w.cos) * a0inverse;
    let b0 = -b1 * X::HALF;

    Coefficients {
        b0,
        b1,
        b2: b0,
        a1: X::TWO * w.cos * a0inverse,
        a2: -(X::ONE - alpha) * a0inverse,
    }
}
