//! Injectable randomness.
//!
//! The generator never reaches for a global RNG itself; it asks a
//! [`RandomSource`] handed to it at construction. [`OsRandom`] (the OS
//! CSPRNG) is the default. Tests and reproducible tooling can wrap any
//! seeded `rand` RNG in a `Mutex`.

use std::sync::{Arc, Mutex, PoisonError};

use rand::{Rng, RngCore};

/// A thread-safe source of uniformly distributed indices.
pub trait RandomSource: Send + Sync {
    /// Return an index drawn uniformly from `0..upper`.
    ///
    /// Callers guarantee `upper > 0`.
    fn next_index(&self, upper: usize) -> usize;
}

/// OS-level CSPRNG (`getrandom`). Stateless, so sharing it across
/// threads needs no synchronization.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn next_index(&self, upper: usize) -> usize {
        rand::rngs::OsRng.gen_range(0..upper)
    }
}

/// `rand`'s thread-local generator. Each calling thread samples from its
/// own reseeding ChaCha state.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_index(&self, upper: usize) -> usize {
        rand::thread_rng().gen_range(0..upper)
    }
}

/// Any `rand` RNG behind a mutex, e.g. a seeded `StdRng`.
///
/// A poisoned lock is recovered: the RNG state is still a valid RNG
/// state even if another sampler panicked mid-call.
impl<R: RngCore + Send> RandomSource for Mutex<R> {
    fn next_index(&self, upper: usize) -> usize {
        let mut rng = self.lock().unwrap_or_else(PoisonError::into_inner);
        rng.gen_range(0..upper)
    }
}

impl<T: RandomSource + ?Sized> RandomSource for Arc<T> {
    fn next_index(&self, upper: usize) -> usize {
        (**self).next_index(upper)
    }
}

impl<T: RandomSource + ?Sized> RandomSource for &T {
    fn next_index(&self, upper: usize) -> usize {
        (**self).next_index(upper)
    }
}
