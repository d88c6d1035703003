//! Low-shelf and high-shelf sections.
//!
//! `gain` is a linear amplitude ratio applied on the shelved side of the
//! corner; the other side passes at unity. A `gain` of 1 yields a record whose
//! numerator equals its denominator, i.e. a flat response.

use crate::biquad::omega::Omega;
use crate::biquad::Coefficients;
use crate::sample::FloatSample;

/// First-order low-shelf: `gain` at DC, unity at Nyquist.
///
/// Valid for `sample_period > 0`, `0 < freq * sample_period < 0.5` and
/// `gain > 0`.
///
/// ```
/// use iir_coeffs::{biquad, units};
///
/// fn main() {
///     let gain = units::db_to_gain(6.0f64);
///     let c = biquad::first_order_low_shelf(1.0 / 48000.0, 200.0, gain);
///     assert!((c.dc_gain() - gain).abs() < 1e-9);
///     assert!((c.nyquist_gain() - 1.0).abs() < 1e-9);
/// }
/// ```
#[inline]
pub fn first_order_low_shelf<X>(sample_period: X, freq: X, gain: X) -> Coefficients<X>
where
    X: FloatSample,
{
    let w = Omega::new(sample_period, freq);
    let cos_p1 = w.cos_p1();

    let a = gain.sqrt();
    let sin_a = w.sin * a;
    let sin_a_inverse = w.sin * (X::ONE / a);

    let a0inverse = X::ONE / (sin_a_inverse + cos_p1);

    Coefficients {
        b0: (sin_a + cos_p1) * a0inverse,
        b1: (sin_a - cos_p1) * a0inverse,
        b2: X::zero(),
        a1: -(sin_a_inverse - cos_p1) * a0inverse,
        a2: X::zero(),
    }
}

/// First-order high-shelf: unity at DC, `gain` at Nyquist.
///
/// Valid for `sample_period > 0`, `0 < freq * sample_period < 0.5` and
/// `gain > 0`.
#[inline]
pub fn first_order_high_shelf<X>(sample_period: X, freq: X, gain: X) -> Coefficients<X>
where
    X: FloatSample,
{
    let w = Omega::new(sample_period, freq);
    let cos_p1 = w.cos_p1();

    let a = gain.sqrt();
    let cos_p1_a = cos_p1 * a;
    let cos_p1_a_inverse = cos_p1 * (X::ONE / a);

    let a0inverse = X::ONE / (w.sin + cos_p1_a_inverse);

    Coefficients {
        b0: (w.sin + cos_p1_a) * a0inverse,
        b1: (w.sin - cos_p1_a) * a0inverse,
        b2: X::zero(),
        a1: -(w.sin - cos_p1_a_inverse) * a0inverse,
        a2: X::zero(),
    }
}

/// Intermediate terms shared by the second-order shelves.
struct Terms<X>
where
    X: FloatSample,
{
    a: X,
    am1: X,
    cos_ap1: X,
    // (A + 1) + cos(ω0)(A - 1) and (A + 1) - cos(ω0)(A - 1).
    s_plus: X,
    s_minus: X,
    two_sqrt_a_alpha: X,
}

impl<X> Terms<X>
where
    X: FloatSample,
{
    #[inline]
    fn new(sample_period: X, freq: X, q: X, gain: X) -> Self {
        let w = Omega::new(sample_period, freq);

        let a = gain.sqrt();
        let ap1 = a + X::ONE;
        let am1 = a - X::ONE;
        let cos_am1 = w.cos * am1;

        Self {
            a,
            am1,
            cos_ap1: w.cos * ap1,
            s_plus: ap1 + cos_am1,
            s_minus: ap1 - cos_am1,
            two_sqrt_a_alpha: X::TWO * a.sqrt() * w.alpha(q),
        }
    }
}

/// Second-order low-shelf: `gain` at DC, unity at Nyquist, with `q` setting
/// the steepness of the transition.
///
/// Valid for `sample_period > 0`, `0 < freq * sample_period < 0.5`, `q > 0`
/// and `gain > 0`.
#[inline]
pub fn second_order_low_shelf<X>(sample_period: X, freq: X, q: X, gain: X) -> Coefficients<X>
where
    X: FloatSample,
{
    let t = Terms::new(sample_period, freq, q, gain);

    let a0inverse = X::ONE / (t.s_plus + t.two_sqrt_a_alpha);

    Coefficients {
        b0: t.a * (t.s_minus + t.two_sqrt_a_alpha) * a0inverse,
        b1: X::TWO * t.a * (t.am1 - t.cos_ap1) * a0inverse,
        b2: t.a * (t.s_minus - t.two_sqrt_a_alpha) * a0inverse,
        a1: X::TWO * (t.am1 + t.cos_ap1) * a0inverse,
        a2: -(t.s_plus - t.two_sqrt_a_alpha) * a0inverse,
    }
}

/// Second-order high-shelf: unity at DC, `gain` at Nyquist, with `q` setting
/// the steepness of the transition.
///
/// Valid for `sample_period > 0`, `0 < freq * sample_period < 0.5`, `q > 0`
/// and `gain > 0`.
#[inline]
pub fn second_order_high_shelf<X>(sample_period: X, freq: X, q: X, gain: X) -> Coefficients<X>
where
    X: FloatSample,
{
    let t = Terms::new(sample_period, freq, q, gain);

    let a0inverse = X::ONE / (t.s_minus + t.two_sqrt_a_alpha);

    Coefficients {
        b0: t.a * (t.s_plus + t.two_sqrt_a_alpha) * a0inverse,
        b1: -X::TWO * t.a * (t.am1 + t.cos_ap1) * a0inverse,
        b2: t.a * (t.s_plus - t.two_sqrt_a_alpha) * a0inverse,
        a1: -X::TWO * (t.am1 - t.cos_ap1) * a0inverse,
        a2: -(t.s_minus - t.two_sqrt_a_alpha) * a0inverse,
    }
}
