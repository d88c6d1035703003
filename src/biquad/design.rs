use crate::biquad::{self, Coefficients};
use crate::error::Result;
use crate::sample::FloatSample;

/// The response shape of a filter section.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Kind {
    LowPass,
    HighPass,
    LowShelf,
    HighShelf,
}

/// The order of a filter section.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Order {
    First,
    Second,
}

/// A sample-rate independent description of a filter section: which
/// derivation to run and the physical parameters to run it with.
///
/// ```
/// use iir_coeffs::biquad::{self, Design, Kind, Order};
///
/// fn main() {
///     let design = Design::SecondOrderLowPass { freq: 1000.0f64, q: 0.707 };
///     assert_eq!(design.kind(), Kind::LowPass);
///     assert_eq!(design.order(), Order::Second);
///
///     let period = 1.0 / 48000.0;
///     assert_eq!(
///         design.coefficients(period),
///         biquad::second_order_low_pass(period, 1000.0, 0.707),
///     );
///     assert!(design.with_freq(30000.0).try_coefficients(period).is_err());
/// }
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum Design<X>
where
    X: FloatSample,
{
    FirstOrderLowPass { freq: X },
    FirstOrderHighPass { freq: X },
    SecondOrderLowPass { freq: X, q: X },
    SecondOrderHighPass { freq: X, q: X },
    FirstOrderLowShelf { freq: X, gain: X },
    FirstOrderHighShelf { freq: X, gain: X },
    SecondOrderLowShelf { freq: X, q: X, gain: X },
    SecondOrderHighShelf { freq: X, q: X, gain: X },
}

impl<X> Design<X>
where
    X: FloatSample,
{
    pub fn kind(&self) -> Kind {
        match self {
            Self::FirstOrderLowPass { .. } | Self::SecondOrderLowPass { .. } => Kind::LowPass,
            Self::FirstOrderHighPass { .. } | Self::SecondOrderHighPass { .. } => Kind::HighPass,
            Self::FirstOrderLowShelf { .. } | Self::SecondOrderLowShelf { .. } => Kind::LowShelf,
            Self::FirstOrderHighShelf { .. } | Self::SecondOrderHighShelf { .. } => {
                Kind::HighShelf
            }
        }
    }

    pub fn order(&self) -> Order {
        match self {
            Self::FirstOrderLowPass { .. }
            | Self::FirstOrderHighPass { .. }
            | Self::FirstOrderLowShelf { .. }
            | Self::FirstOrderHighShelf { .. } => Order::First,
            Self::SecondOrderLowPass { .. }
            | Self::SecondOrderHighPass { .. }
            | Self::SecondOrderLowShelf { .. }
            | Self::SecondOrderHighShelf { .. } => Order::Second,
        }
    }

    /// The corner (or shelf midpoint) frequency, in Hz.
    pub fn freq(&self) -> X {
        match *self {
            Self::FirstOrderLowPass { freq }
            | Self::FirstOrderHighPass { freq }
            | Self::SecondOrderLowPass { freq, .. }
            | Self::SecondOrderHighPass { freq, .. }
            | Self::FirstOrderLowShelf { freq, .. }
            | Self::FirstOrderHighShelf { freq, .. }
            | Self::SecondOrderLowShelf { freq, .. }
            | Self::SecondOrderHighShelf { freq, .. } => freq,
        }
    }

    /// Returns the same design moved to a new corner frequency.
    pub fn with_freq(mut self, new_freq: X) -> Self {
        match &mut self {
            Self::FirstOrderLowPass { freq }
            | Self::FirstOrderHighPass { freq }
            | Self::SecondOrderLowPass { freq, .. }
            | Self::SecondOrderHighPass { freq, .. }
            | Self::FirstOrderLowShelf { freq, .. }
            | Self::FirstOrderHighShelf { freq, .. }
            | Self::SecondOrderLowShelf { freq, .. }
            | Self::SecondOrderHighShelf { freq, .. } => *freq = new_freq,
        }
        self
    }

    /// Derives the coefficients without checking the parameters.
    #[inline]
    pub fn coefficients(&self, sample_period: X) -> Coefficients<X> {
        match *self {
            Self::FirstOrderLowPass { freq } => biquad::first_order_low_pass(sample_period, freq),
            Self::FirstOrderHighPass { freq } => biquad::first_order_high_pass(sample_period, freq),
            Self::SecondOrderLowPass { freq, q } => {
                biquad::second_order_low_pass(sample_period, freq, q)
            }
            Self::SecondOrderHighPass { freq, q } => {
                biquad::second_order_high_pass(sample_period, freq, q)
            }
            Self::FirstOrderLowShelf { freq, gain } => {
                biquad::first_order_low_shelf(sample_period, freq, gain)
            }
            Self::FirstOrderHighShelf { freq, gain } => {
                biquad::first_order_high_shelf(sample_period, freq, gain)
            }
            Self::SecondOrderLowShelf { freq, q, gain } => {
                biquad::second_order_low_shelf(sample_period, freq, q, gain)
            }
            Self::SecondOrderHighShelf { freq, q, gain } => {
                biquad::second_order_high_shelf(sample_period, freq, q, gain)
            }
        }
    }

    /// Derives the coefficients, rejecting parameters outside the valid
    /// domain.
    pub fn try_coefficients(&self, sample_period: X) -> Result<Coefficients<X>> {
        match *self {
            Self::FirstOrderLowPass { freq } => {
                biquad::try_first_order_low_pass(sample_period, freq)
            }
            Self::FirstOrderHighPass { freq } => {
                biquad::try_first_order_high_pass(sample_period, freq)
            }
            Self::SecondOrderLowPass { freq, q } => {
                biquad::try_second_order_low_pass(sample_period, freq, q)
            }
            Self::SecondOrderHighPass { freq, q } => {
                biquad::try_second_order_high_pass(sample_period, freq, q)
            }
            Self::FirstOrderLowShelf { freq, gain } => {
                biquad::try_first_order_low_shelf(sample_period, freq, gain)
            }
            Self::FirstOrderHighShelf { freq, gain } => {
                biquad::try_first_order_high_shelf(sample_period, freq, gain)
            }
            Self::SecondOrderLowShelf { freq, q, gain } => {
                biquad::try_second_order_low_shelf(sample_period, freq, q, gain)
            }
            Self::SecondOrderHighShelf { freq, q, gain } => {
                biquad::try_second_order_high_shelf(sample_period, freq, q, gain)
            }
        }
    }
}
