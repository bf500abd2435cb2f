use std::borrow::Cow;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use smallvec::SmallVec;

use crate::effects::dither::dither;
use crate::effects::glitch::glitch;
use crate::effects::hue::{hue_shift, hue_turns};
use crate::effects::pixelate::pixelate;
use crate::effects::polar::{kaleidoscope, swirl};
use crate::effects::tone::{contrast_brightness, invert, noise, posterize};
use crate::foundation::core::PixelBuffer;
use crate::foundation::error::{ChaosError, ChaosResult};
use crate::params::model::EffectParams;
use crate::random::source::ChaosSource;

/// One filter in the fixed pipeline order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    /// [`hue_shift`] by `hue_degrees`.
    Hue,
    /// [`posterize`] to `posterize_levels`.
    Posterize,
    /// [`noise`] with amplitude `noise`.
    Noise,
    /// [`pixelate`] with block `pixel_size`.
    Pixelate,
    /// [`glitch`] at `glitch` intensity.
    Glitch,
    /// [`swirl`] by `swirl`.
    Swirl,
    /// [`kaleidoscope`] with `kaleidoscope_segments` wedges.
    Kaleidoscope,
    /// [`contrast_brightness`].
    ContrastBrightness,
    /// [`invert`].
    Invert,
    /// [`dither`].
    Dither,
}

impl Stage {
    /// Application order. Colour and noise distortions come before the geometric remaps so the
    /// remaps act on already-degraded pixels.
    pub const ORDER: [Stage; 10] = [
        Stage::Hue,
        Stage::Posterize,
        Stage::Noise,
        Stage::Pixelate,
        Stage::Glitch,
        Stage::Swirl,
        Stage::Kaleidoscope,
        Stage::ContrastBrightness,
        Stage::Invert,
        Stage::Dither,
    ];

    /// Short name used in logs and stats.
    pub fn name(self) -> &'static str {
        match self {
            Stage::Hue => "hue",
            Stage::Posterize => "posterize",
            Stage::Noise => "noise",
            Stage::Pixelate => "pixelate",
            Stage::Glitch => "glitch",
            Stage::Swirl => "swirl",
            Stage::Kaleidoscope => "kaleidoscope",
            Stage::ContrastBrightness => "contrast-brightness",
            Stage::Invert => "invert",
            Stage::Dither => "dither",
        }
    }

    /// `false` when the stage's knob sits at its identity value, in which case [`Stage::apply`]
    /// would return its input unchanged without drawing from the generator.
    pub fn is_active(self, p: &EffectParams) -> bool {
        match self {
            Stage::Hue => hue_turns(p.hue_degrees) != 0.0,
            Stage::Posterize => p.posterize_levels >= 2,
            Stage::Noise => live(p.noise),
            Stage::Pixelate => p.pixel_size >= 2,
            Stage::Glitch => live(p.glitch) && p.glitch > 0.0,
            Stage::Swirl => live(p.swirl) && p.swirl > 0.0,
            Stage::Kaleidoscope => p.kaleidoscope_segments >= 2,
            Stage::ContrastBrightness => live(p.contrast) || live(p.brightness),
            Stage::Invert => p.invert,
            Stage::Dither => p.dither,
        }
    }

    /// Run this stage's filter on `buf`.
    pub fn apply<'a>(
        self,
        buf: &'a PixelBuffer,
        p: &EffectParams,
        rng: &mut dyn ChaosSource,
    ) -> Cow<'a, PixelBuffer> {
        match self {
            Stage::Hue => hue_shift(buf, p.hue_degrees),
            Stage::Posterize => posterize(buf, p.posterize_levels),
            Stage::Noise => noise(buf, p.noise, rng),
            Stage::Pixelate => pixelate(buf, p.pixel_size),
            Stage::Glitch => glitch(buf, p.glitch, rng),
            Stage::Swirl => swirl(buf, p.swirl),
            Stage::Kaleidoscope => kaleidoscope(buf, p.kaleidoscope_segments),
            Stage::ContrastBrightness => contrast_brightness(buf, p.contrast, p.brightness),
            Stage::Invert => invert(buf, p.invert),
            Stage::Dither => dither(buf, p.dither),
        }
    }
}

fn live(v: f64) -> bool {
    v.is_finite() && v != 0.0
}

/// Active stages for `p`, in application order.
pub fn plan_stages(p: &EffectParams) -> SmallVec<[Stage; 10]> {
    Stage::ORDER
        .into_iter()
        .filter(|stage| stage.is_active(p))
        .collect()
}

/// Shared flag for stopping a pipeline run between stages.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// A token that has not been cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask every run holding a clone of this token to stop before its next stage.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// `true` once [`CancelToken::cancel`] has been called on any clone.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Options for [`apply_pipeline_with`].
#[derive(Clone, Debug, Default)]
pub struct PipelineOpts {
    /// Checked before every stage.
    pub cancel: Option<CancelToken>,
}

/// Wall time spent in one executed stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StageTiming {
    /// The stage.
    pub stage: Stage,
    /// Time spent in its filter.
    pub elapsed: Duration,
}

/// What a pipeline run did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PipelineStats {
    /// Stages that ran, in order.
    pub executed: Vec<StageTiming>,
    /// Stages skipped at their identity value.
    pub skipped: usize,
}

/// Run every active stage over `src` in [`Stage::ORDER`].
///
/// Returns `Cow::Borrowed(src)` when every knob is at identity. Given the same buffer, params and
/// generator sequence the output is identical.
pub fn apply_pipeline<'a>(
    src: &'a PixelBuffer,
    params: &EffectParams,
    rng: &mut dyn ChaosSource,
) -> Cow<'a, PixelBuffer> {
    let mut cur = Cow::Borrowed(src);
    for stage in plan_stages(params) {
        advance(&mut cur, stage, params, rng);
    }
    cur
}

/// [`apply_pipeline`] with cancellation and per-stage timings.
///
/// Fails with [`ChaosError::Cancelled`] when the token trips before any stage; `src` is never
/// modified either way.
#[tracing::instrument(
    skip(src, params, rng, opts),
    fields(width = src.width(), height = src.height())
)]
pub fn apply_pipeline_with<'a>(
    src: &'a PixelBuffer,
    params: &EffectParams,
    rng: &mut dyn ChaosSource,
    opts: &PipelineOpts,
) -> ChaosResult<(Cow<'a, PixelBuffer>, PipelineStats)> {
    let mut cur = Cow::Borrowed(src);
    let mut stats = PipelineStats::default();
    for stage in Stage::ORDER {
        if opts.cancel.as_ref().is_some_and(CancelToken::is_cancelled) {
            tracing::debug!(stage = stage.name(), "pipeline cancelled");
            return Err(ChaosError::Cancelled);
        }
        if !stage.is_active(params) {
            tracing::trace!(stage = stage.name(), "stage skipped");
            stats.skipped += 1;
            continue;
        }

        let t0 = Instant::now();
        advance(&mut cur, stage, params, rng);
        let elapsed = t0.elapsed();
        tracing::debug!(
            stage = stage.name(),
            elapsed_us = elapsed.as_micros() as u64,
            "stage applied"
        );
        stats.executed.push(StageTiming { stage, elapsed });
    }
    Ok((cur, stats))
}

/// Raw-bytes entry point: validate `width * height * 4 == data.len()`, run the pipeline, and
/// return the resulting bytes.
pub fn apply_pipeline_rgba8(
    width: u32,
    height: u32,
    data: &[u8],
    params: &EffectParams,
    rng: &mut dyn ChaosSource,
) -> ChaosResult<Vec<u8>> {
    let src = PixelBuffer::from_rgba8(width, height, data.to_vec())?;
    let out = apply_pipeline(&src, params, rng).into_owned();
    Ok(out.into_rgba8())
}

/// Replace `cur` with the stage output when the stage produced a new buffer.
fn advance(
    cur: &mut Cow<'_, PixelBuffer>,
    stage: Stage,
    params: &EffectParams,
    rng: &mut dyn ChaosSource,
) {
    let next = match stage.apply(&**cur, params, rng) {
        Cow::Owned(buf) => Some(buf),
        Cow::Borrowed(_) => None,
    };
    if let Some(next) = next {
        *cur = Cow::Owned(next);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
