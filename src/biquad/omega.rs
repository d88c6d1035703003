use crate::sample::FloatSample;

/// Trigonometric preamble shared by every derivation.
///
/// This is the direct (non-prewarped) mapping `ω0 = 2π · freq · sample_period`,
/// which becomes increasingly inexact as `freq` approaches Nyquist.
#[derive(Copy, Clone, Debug)]
pub(super) struct Omega<X>
where
    X: FloatSample,
{
    pub cos: X,
    pub sin: X,
}

impl<X> Omega<X>
where
    X: FloatSample,
{
    #[inline]
    pub fn new(sample_period: X, freq: X) -> Self {
        let omega0 = X::TWO * X::PI() * freq * sample_period;
        let (sin, cos) = omega0.sin_cos();
        Self { cos, sin }
    }

    /// `cos ω0 + 1`; zero at exactly Nyquist.
    #[inline]
    pub fn cos_p1(&self) -> X {
        self.cos + X::ONE
    }

    /// Bandwidth term for the resonant and Q-shaped shelf sections.
    #[inline]
    pub fn alpha(&self, q: X) -> X {
        self.sin * X::HALF / q
    }
}
