use crate::random::source::ChaosSource;

/// Seeded 32-bit mixing generator used for chaos-lock replay.
///
/// The output sequence is part of the public contract: a recorded seed must reproduce the same
/// chaos result in every conforming implementation, so the mixing steps below must not change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    const INCREMENT: u32 = 0x6D2B_79F5;

    /// Generator positioned before its first draw.
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Current internal state; equal states produce equal futures.
    pub fn state(&self) -> u32 {
        self.state
    }

    /// Advance and return the next raw 32-bit output.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(Self::INCREMENT);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }
}

impl ChaosSource for Mulberry32 {
    fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/random/mulberry.rs"]
mod tests;
