use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const MULTIPLIER_A: i64 = 1103515245;
const INCREMENT_C: i64 = 12345;
const DEFAULT_SEED: i64 = 3819201;

/// A source of uniformly distributed integers.
///
/// Only the difficulty policy draws from it; pass a deterministic implementation to make
/// computer play reproducible.
pub trait RandomGenerator {
    /// Returns an integer in `from..to`. Callers guarantee `from < to`.
    fn next_range(&mut self, from: usize, to: usize) -> usize;

    /// Picks one element uniformly, or `None` for an empty slice.
    fn choose<'a, K>(&mut self, items: &'a [K]) -> Option<&'a K> {
        if items.is_empty() {
            return None;
        }
        items.get(self.next_range(0, items.len()))
    }
}

/// Random generator backed by `rand`'s standard RNG.
pub struct StandardRandomGenerator {
    rng: StdRng,
}

impl Default for StandardRandomGenerator {
    /// Seeds from the operating system.
    fn default() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl StandardRandomGenerator {
    /// Creates a generator that yields the same sequence for the same seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomGenerator for StandardRandomGenerator {
    fn next_range(&mut self, from: usize, to: usize) -> usize {
        self.rng.random_range(from..to)
    }
}

/// A tiny linear congruential generator with a fixed default seed.
pub struct CustomNumberGenerator {
    seed: i64,
}

impl Default for CustomNumberGenerator {
    fn default() -> Self {
        CustomNumberGenerator::new(DEFAULT_SEED)
    }
}

impl CustomNumberGenerator {
    /// Creates a generator from any seed. The seed is reduced modulo `i32::MAX` first, so every
    /// `i64` is accepted and the state stays within range of the multiplication in `next`.
    pub const fn new(seed: i64) -> Self {
        Self {
            seed: seed.rem_euclid(i32::MAX as i64),
        }
    }

    pub fn next(&mut self) -> i32 {
        self.seed = (self.seed * MULTIPLIER_A + INCREMENT_C) % (i32::MAX as i64);
        self.seed as i32
    }
}

impl RandomGenerator for CustomNumberGenerator {
    fn next_range(&mut self, from: usize, to: usize) -> usize {
        (self.next().unsigned_abs() as usize) % (to - from) + from
    }
}
