//! Randomized knob rolls behind the chaos, reactor, gacha and mutation buttons.
//!
//! Every roll reads only from the `ChaosSource` it is handed, in a fixed order, so a locked
//! generator replays the same knobs. Caption, font, overlay and sticker picks are left to the
//! caller and happen after these functions return.

use std::time::Duration;

use crate::params::model::EffectParams;
use crate::params::presets::{DEEP_FRIED_BRIGHTNESS, DEEP_FRIED_CONTRAST};
use crate::random::source::ChaosSource;

/// Outcome of [`gacha_roll`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GachaRoll {
    /// Fixed contrast/brightness plus heavy noise, posterize and glitch.
    DeepFried,
    /// Strong swirl and kaleidoscope over big pixels.
    CurseMode,
    /// Gentle posterize with light noise and glitch.
    WholesomeChaos,
}

/// Outcome of [`mutate`]. Only `InvertPulse` and `EffectsShuffle` touch [`EffectParams`]; the
/// rest name work for the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mutation {
    /// Replace both captions.
    SwapCaptions,
    /// Drop an overlay image on the canvas.
    AddOverlay,
    /// Flip the glitch-font toggle.
    ToggleGlitchFonts,
    /// Flip inversion.
    InvertPulse,
    /// Re-roll the main knobs within light ranges.
    EffectsShuffle,
    /// Add a sticker.
    DropSticker,
}

/// Interval used when the requested one is zero or non-finite.
pub const DEFAULT_MUTATION_SECS: f64 = 5.0;

/// The chaos button: re-roll every knob except contrast and brightness.
pub fn chaos_shuffle(p: &mut EffectParams, rng: &mut dyn ChaosSource) {
    p.hue_degrees = rng.floor_range(0.0, 360.0);
    p.noise = rng.floor_range(0.0, 80.0);
    p.pixel_size = maybe(rng, 0.6, 3.0, 18.0);
    p.posterize_levels = maybe(rng, 0.7, 3.0, 9.0);
    p.swirl = f64::from(maybe(rng, 0.5, 10.0, 70.0));
    p.kaleidoscope_segments = maybe(rng, 0.45, 4.0, 12.0);
    p.glitch = rng.floor_range(0.0, 90.0);
    p.dither = rng.chance(0.25);
    p.invert = rng.chance(0.25);
    tracing::debug!(?p, "chaos shuffle");
}

/// The red button: every main knob goes wild. Dither, contrast and brightness are untouched.
pub fn reactor_shuffle(p: &mut EffectParams, rng: &mut dyn ChaosSource) {
    p.hue_degrees = rng.floor_range(0.0, 360.0);
    p.noise = rng.floor_range(20.0, 100.0);
    p.pixel_size = int_range(rng, 0.0, 24.0);
    p.posterize_levels = int_range(rng, 2.0, 8.0);
    p.swirl = rng.floor_range(0.0, 80.0);
    p.kaleidoscope_segments = int_range(rng, 0.0, 12.0);
    p.glitch = rng.floor_range(30.0, 100.0);
    p.invert = rng.chance(0.5);
    tracing::debug!(?p, "reactor shuffle");
}

/// Roll one of three looks and apply its knobs.
pub fn gacha_roll(p: &mut EffectParams, rng: &mut dyn ChaosSource) -> GachaRoll {
    let roll = match rng.floor_range(0.0, 3.0) as u32 {
        0 => GachaRoll::DeepFried,
        1 => GachaRoll::CurseMode,
        _ => GachaRoll::WholesomeChaos,
    };
    match roll {
        GachaRoll::DeepFried => {
            p.contrast = DEEP_FRIED_CONTRAST;
            p.brightness = DEEP_FRIED_BRIGHTNESS;
            p.noise = rng.floor_range(40.0, 100.0);
            p.posterize_levels = int_range(rng, 2.0, 4.0);
            p.pixel_size = int_range(rng, 0.0, 6.0);
            p.glitch = rng.floor_range(10.0, 40.0);
        }
        GachaRoll::CurseMode => {
            p.swirl = rng.floor_range(50.0, 90.0);
            p.kaleidoscope_segments = int_range(rng, 6.0, 12.0);
            p.pixel_size = int_range(rng, 10.0, 22.0);
            p.hue_degrees = rng.floor_range(0.0, 360.0);
            p.invert = rng.chance(0.5);
        }
        GachaRoll::WholesomeChaos => {
            p.posterize_levels = int_range(rng, 4.0, 7.0);
            p.noise = rng.floor_range(0.0, 20.0);
            p.glitch = rng.floor_range(0.0, 20.0);
            p.invert = false;
        }
    }
    tracing::debug!(?roll, ?p, "gacha roll");
    roll
}

/// One tick of the mutation engine.
pub fn mutate(p: &mut EffectParams, rng: &mut dyn ChaosSource) -> Mutation {
    let action = match rng.floor_range(0.0, 6.0) as u32 {
        0 => Mutation::SwapCaptions,
        1 => Mutation::AddOverlay,
        2 => Mutation::ToggleGlitchFonts,
        3 => Mutation::InvertPulse,
        4 => Mutation::EffectsShuffle,
        _ => Mutation::DropSticker,
    };
    match action {
        Mutation::InvertPulse => p.invert = !p.invert,
        Mutation::EffectsShuffle => {
            p.hue_degrees = rng.floor_range(0.0, 360.0);
            p.noise = rng.floor_range(0.0, 60.0);
            p.pixel_size = int_range(rng, 0.0, 16.0);
            p.posterize_levels = int_range(rng, 2.0, 8.0);
            p.glitch = rng.floor_range(0.0, 70.0);
        }
        _ => {}
    }
    tracing::debug!(?action, "mutation");
    action
}

/// Period between mutation ticks. Zero or non-finite means the default; the result is clamped
/// to 1..=30 seconds.
pub fn mutation_interval(seconds: f64) -> Duration {
    let secs = if seconds == 0.0 || !seconds.is_finite() {
        DEFAULT_MUTATION_SECS
    } else {
        seconds
    };
    Duration::from_secs_f64(secs.clamp(1.0, 30.0))
}

fn int_range(rng: &mut dyn ChaosSource, lo: f64, hi: f64) -> u32 {
    rng.floor_range(lo, hi) as u32
}

/// `chance(p) ? floor(range(lo, hi)) : 0`, with the range drawn only on success.
fn maybe(rng: &mut dyn ChaosSource, p: f64, lo: f64, hi: f64) -> u32 {
    if rng.chance(p) {
        int_range(rng, lo, hi)
    } else {
        0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/params/shuffle.rs"]
mod tests;
