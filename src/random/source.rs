use crate::random::ambient::AmbientRng;
use crate::random::mulberry::Mulberry32;

/// The single draw interface every randomized filter and shuffle consumes.
///
/// Locked and unlocked chaos are two implementations of this trait, picked once by the caller;
/// filters never branch on the lock themselves.
pub trait ChaosSource {
    /// Next uniform draw in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Uniform draw in `[lo, hi)` (or `(hi, lo]` when `hi < lo`).
    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_f64() * (hi - lo)
    }

    /// `floor(range(lo, hi))`.
    fn floor_range(&mut self, lo: f64, hi: f64) -> f64 {
        self.range(lo, hi).floor()
    }

    /// `true` with probability `p`.
    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}

impl<S: ChaosSource + ?Sized> ChaosSource for &mut S {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

/// Chaos-lock configuration: a seed plus whether draws replay from it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ChaosLock {
    /// Seed for the locked generator. `0` asks [`ChaosLock::resolve_seed`] to pick one.
    pub seed: u32,
    /// Replay draws from `seed` instead of ambient randomness.
    pub locked: bool,
}

impl ChaosLock {
    /// Largest seed picked when resolving a zero seed (exclusive).
    pub const RANDOM_SEED_SPAN: f64 = 1_000_000.0;

    /// Locked at `seed`.
    pub fn locked(seed: u32) -> Self {
        Self { seed, locked: true }
    }

    /// Ambient randomness; the seed is ignored.
    pub fn unlocked() -> Self {
        Self::default()
    }

    /// Replace a locked zero seed with `floor(draw * 1_000_000)` from `ambient`, so the chosen
    /// seed can be recorded and replayed later.
    pub fn resolve_seed(self, ambient: &mut dyn ChaosSource) -> Self {
        if self.locked && self.seed == 0 {
            let seed = (ambient.next_f64() * Self::RANDOM_SEED_SPAN).floor() as u32;
            return Self { seed, ..self };
        }
        self
    }
}

/// A generator built from a [`ChaosLock`].
#[derive(Debug)]
pub enum ChaosGenerator {
    /// Replayable draws from a seed.
    Locked(Mulberry32),
    /// Fresh entropy on every draw.
    Ambient(AmbientRng),
}

impl ChaosGenerator {
    /// Build the generator the lock asks for. A locked generator starts before its first draw.
    pub fn from_lock(lock: &ChaosLock) -> Self {
        if lock.locked {
            Self::Locked(Mulberry32::new(lock.seed))
        } else {
            Self::Ambient(AmbientRng::new())
        }
    }

    /// `true` for [`ChaosGenerator::Locked`].
    pub fn is_locked(&self) -> bool {
        matches!(self, Self::Locked(_))
    }
}

impl ChaosSource for ChaosGenerator {
    fn next_f64(&mut self) -> f64 {
        match self {
            Self::Locked(g) => g.next_f64(),
            Self::Ambient(g) => g.next_f64(),
        }
    }
}

/// `createGenerator(seed)`: a locked generator positioned before its first draw.
pub fn create_generator(seed: u32) -> Mulberry32 {
    Mulberry32::new(seed)
}

/// `draw(generator)`: the next value in `[0, 1)`.
pub fn draw(generator: &mut dyn ChaosSource) -> f64 {
    generator.next_f64()
}

#[cfg(test)]
#[path = "../../tests/unit/random/source.rs"]
mod tests;
