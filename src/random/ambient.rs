use rand::{Rng as _, SeedableRng as _};

use crate::random::source::ChaosSource;

/// Non-deterministic draws from an OS-seeded generator.
///
/// Carries no seed and no replayable state.
pub struct AmbientRng {
    rng: rand::rngs::StdRng,
}

impl AmbientRng {
    /// Fresh generator seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: rand::rngs::StdRng::from_os_rng(),
        }
    }
}

impl Default for AmbientRng {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AmbientRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AmbientRng")
    }
}

impl ChaosSource for AmbientRng {
    fn next_f64(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}
