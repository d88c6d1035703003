use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

/// Reasons a filter parameter falls outside its valid domain.
///
/// The domain is checked on the parameters alone; an accepted corner very
/// close to Nyquist may still round to a pole on the unit circle.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// The sample period is not a finite, positive number of seconds.
    #[error("sample period must be finite and positive, got {0}")]
    SamplePeriod(f64),

    /// The corner frequency is not strictly between zero and Nyquist.
    #[error("frequency must lie strictly between 0 and {nyquist} Hz, got {freq}")]
    Frequency { freq: f64, nyquist: f64 },

    /// The quality factor is not finite and positive.
    #[error("Q must be finite and positive, got {0}")]
    Q(f64),

    /// The linear gain is not finite and positive.
    #[error("linear gain must be finite and positive, got {0}")]
    Gain(f64),
}
