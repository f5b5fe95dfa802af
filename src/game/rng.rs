//! Random source used to place items.
//!
//! Any `rand` generator is a [`RandomSource`]; tests may also script the
//! exact cells that get sampled.

use rand::{Rng, RngCore};

/// Uniform integer sampler
pub trait RandomSource {
    /// Returns a value in `[0, upper)`. `upper` is never zero.
    fn next_in_range(&mut self, upper: usize) -> usize;
}

impl<R: RngCore> RandomSource for R {
    fn next_in_range(&mut self, upper: usize) -> usize {
        self.gen_range(0..upper)
    }
}
