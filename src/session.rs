use std::borrow::Cow;

use crate::foundation::core::PixelBuffer;
use crate::foundation::error::ChaosResult;
use crate::params::model::EffectParams;
use crate::params::presets::Preset;
use crate::params::shuffle::{
    GachaRoll, Mutation, chaos_shuffle, gacha_roll, mutate, reactor_shuffle,
};
use crate::random::ambient::AmbientRng;
use crate::random::source::{ChaosGenerator, ChaosLock};
use crate::render::pipeline::{PipelineOpts, PipelineStats, apply_pipeline, apply_pipeline_with};

/// Editor state the effects pipeline runs against: the knobs, the chaos lock, and the generator
/// built from that lock.
///
/// The generator lives as long as the lock it was built from; changing the lock replaces it.
#[derive(Debug)]
pub struct ChaosSession {
    params: EffectParams,
    lock: ChaosLock,
    rng: ChaosGenerator,
}

impl ChaosSession {
    /// A session over `params`. A locked zero seed is resolved to a concrete seed first.
    pub fn new(params: EffectParams, lock: ChaosLock) -> Self {
        let lock = lock.resolve_seed(&mut AmbientRng::new());
        Self {
            params,
            rng: ChaosGenerator::from_lock(&lock),
            lock,
        }
    }

    /// Current knobs.
    pub fn params(&self) -> &EffectParams {
        &self.params
    }

    /// Mutable knobs, for slider edits.
    pub fn params_mut(&mut self) -> &mut EffectParams {
        &mut self.params
    }

    /// Current lock, with any zero seed already resolved.
    pub fn lock(&self) -> ChaosLock {
        self.lock
    }

    /// Replace the lock and rebuild the generator from it.
    pub fn set_lock(&mut self, lock: ChaosLock) {
        self.lock = lock.resolve_seed(&mut AmbientRng::new());
        self.rng = ChaosGenerator::from_lock(&self.lock);
        tracing::debug!(seed = self.lock.seed, locked = self.lock.locked, "chaos lock changed");
    }

    /// Overwrite the knobs `preset` owns.
    pub fn apply_preset(&mut self, preset: Preset) {
        preset.apply(&mut self.params);
    }

    /// The chaos button. With the lock on, the generator restarts from the seed first, so every
    /// press with the same seed rolls the same knobs.
    pub fn chaos(&mut self) {
        if self.lock.locked {
            self.rng = ChaosGenerator::from_lock(&self.lock);
        }
        chaos_shuffle(&mut self.params, &mut self.rng);
    }

    /// The red button.
    pub fn reactor(&mut self) {
        reactor_shuffle(&mut self.params, &mut self.rng);
    }

    /// Roll the meme gacha.
    pub fn gacha(&mut self) -> GachaRoll {
        gacha_roll(&mut self.params, &mut self.rng)
    }

    /// One mutation-engine tick. Variants that don't touch the knobs are returned for the caller.
    pub fn mutate(&mut self) -> Mutation {
        mutate(&mut self.params, &mut self.rng)
    }

    /// Run the pipeline over `src` with the session's knobs and generator.
    pub fn render<'a>(&mut self, src: &'a PixelBuffer) -> Cow<'a, PixelBuffer> {
        apply_pipeline(src, &self.params, &mut self.rng)
    }

    /// [`ChaosSession::render`] with cancellation and stage timings.
    pub fn render_with<'a>(
        &mut self,
        src: &'a PixelBuffer,
        opts: &PipelineOpts,
    ) -> ChaosResult<(Cow<'a, PixelBuffer>, PipelineStats)> {
        apply_pipeline_with(src, &self.params, &mut self.rng, opts)
    }
}

#[cfg(test)]
#[path = "../tests/unit/session/session.rs"]
mod tests;
