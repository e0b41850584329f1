use rand::rngs::StdRng;
use rand::Rng;

/// Source of uniform samples for target rerolls and turbulence.
///
/// Hosts hand the controller a seeded or entropy-backed [`StdRng`]; tests
/// plug in fixed sources to force a path.
pub trait RandomSource {
    /// Uniform sample in `[0, 1]`.
    fn unit(&mut self) -> f32;

    /// Uniform sample in `[-1, 1]`.
    #[inline]
    fn signed_unit(&mut self) -> f32 {
        (self.unit() - 0.5) * 2.0
    }
}

impl RandomSource for StdRng {
    #[inline]
    fn unit(&mut self) -> f32 {
        self.gen::<f32>()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    #[inline]
    fn unit(&mut self) -> f32 {
        (**self).unit()
    }
}
