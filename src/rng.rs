//! Randomness source for prize placement and host tie-breaks

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::door::Door;

/// Uniform door draws backed by `StdRng`.
///
/// A seeded source replays the same sequence of draws on every run; an
/// unseeded one is initialised from operating system entropy.
#[derive(Debug, Clone)]
pub struct DoorRng {
    inner: StdRng,
}

impl DoorRng {
    pub fn new(seed: Option<i64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }

    /// Negative seeds are reinterpreted bit-for-bit as `u64`.
    pub fn seeded(seed: i64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed as u64),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            inner: StdRng::from_entropy(),
        }
    }

    /// Draw one of the three doors uniformly.
    pub fn door(&mut self) -> Door {
        Door::ALL[self.inner.gen_range(0..Door::ALL.len())]
    }

    /// Pick `a` or `b` with equal probability.
    pub fn pick(&mut self, a: Door, b: Door) -> Door {
        if self.inner.gen_bool(0.5) {
            a
        } else {
            b
        }
    }
}
