//! Random source injected into the tick rules.
//!
//! Every stochastic choice in the kernel goes through [`RandomSource`], so a
//! seeded generator replays a run and tests can script individual rolls.

/// Source of uniform rolls used by ant and ant-eater behavior
pub trait RandomSource {
    /// Uniform value in `[0, 1)`
    fn unit(&mut self) -> f64;

    /// Uniform index in `0..len`. `len` is never zero.
    fn index(&mut self, len: usize) -> usize;

    /// True with probability `p`
    #[inline]
    fn chance(&mut self, p: f64) -> bool {
        self.unit() < p
    }

    /// Uniformly chosen element of a non-empty slice
    #[inline]
    fn pick<T: Copy>(&mut self, items: &[T]) -> Option<T>
    where
        Self: Sized,
    {
        if items.is_empty() {
            None
        } else {
            Some(items[self.index(items.len())])
        }
    }
}

impl RandomSource for fastrand::Rng {
    #[inline]
    fn unit(&mut self) -> f64 {
        self.f64()
    }

    #[inline]
    fn index(&mut self, len: usize) -> usize {
        self.usize(..len)
    }
}
