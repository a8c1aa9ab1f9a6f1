use rand::Rng;

/// Source of uniform integers for the random sampler.
///
/// Any [`rand::Rng`] qualifies; tests seed a `ChaCha8Rng` or supply a
/// scripted source to pin the output.
pub trait RandomSource {
    /// Uniform value in `low..=high`. Callers guarantee `low <= high`.
    fn uniform_inclusive(&mut self, low: usize, high: usize) -> usize;

    /// Uniform index in `0..len`. Callers guarantee `len > 0`.
    fn index(&mut self, len: usize) -> usize {
        self.uniform_inclusive(0, len - 1)
    }
}

impl<R: Rng> RandomSource for R {
    fn uniform_inclusive(&mut self, low: usize, high: usize) -> usize {
        self.random_range(low..=high)
    }
}
