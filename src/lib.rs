//! Coefficient derivations for first- and second-order biquad sections:
//! low-pass, high-pass, low-shelf and high-shelf.
//!
//! ```
//! use iir_coeffs::{biquad, units};
//!
//! fn main() {
//!     let period = units::sample_period(48000.0f32);
//!     let c = biquad::second_order_low_pass(period, 1000.0, 0.707);
//!
//!     assert!((c.dc_gain() - 1.0).abs() < 1e-3);
//!     assert!(biquad::try_second_order_low_pass(period, 1000.0, 0.0).is_err());
//! }
//! ```

pub mod biquad;
mod error;
pub mod sample;
pub mod units;

pub use biquad::Coefficients;
pub use error::{Error, Result};
pub use sample::FloatSample;
