//! Conversions between the units callers usually hold and the units the
//! derivations take.

use crate::sample::FloatSample;

/// Seconds per sample at `sample_rate` Hz.
#[inline]
pub fn sample_period<X: FloatSample>(sample_rate: X) -> X {
    X::ONE / sample_rate
}

/// The Nyquist frequency in Hz for a given sample period.
#[inline]
pub fn nyquist<X: FloatSample>(sample_period: X) -> X {
    X::HALF / sample_period
}

/// Converts decibels to a linear amplitude ratio.
///
/// ```
/// use iir_coeffs::units;
///
/// fn main() {
///     assert_eq!(units::db_to_gain(0.0f32), 1.0);
///     assert!((units::db_to_gain(-20.0f64) - 0.1).abs() < 1e-12);
/// }
/// ```
#[inline]
pub fn db_to_gain<X: FloatSample>(db: X) -> X {
    (db / X::TWENTY * X::LN_10()).exp()
}

/// Converts a linear amplitude ratio to decibels.
#[inline]
pub fn gain_to_db<X: FloatSample>(gain: X) -> X {
    X::TWENTY * gain.log10()
}
