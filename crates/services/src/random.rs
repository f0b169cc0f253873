use std::sync::{Arc, Mutex};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the uniform draw used to pick quiz questions.
///
/// `Thread` uses the thread-local generator. `Seeded` shares one seeded
/// generator between clones so a sequence of picks is reproducible.
#[derive(Debug, Clone, Default)]
pub enum RandomSource {
    #[default]
    Thread,
    Seeded(Arc<Mutex<StdRng>>),
}

impl RandomSource {
    /// Returns a source backed by the thread-local generator.
    #[must_use]
    pub fn thread() -> Self {
        Self::Thread
    }

    /// Returns a deterministic source seeded with `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::Seeded(Arc::new(Mutex::new(StdRng::seed_from_u64(seed))))
    }

    /// Uniformly pick an index in `0..len`, or `None` when `len` is zero.
    #[must_use]
    pub fn choose_index(&self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        match self {
            Self::Thread => Some(rand::rng().random_range(0..len)),
            Self::Seeded(rng) => {
                // A poisoned lock still holds a usable generator.
                let mut guard = rng.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
                Some(guard.random_range(0..len))
            }
        }
    }
}
