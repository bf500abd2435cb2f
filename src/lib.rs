//! chaosfx is a deterministic chaos image-effects pipeline for meme editors.
//!
//! A [`PixelBuffer`] runs through a fixed sequence of filters (hue rotation, posterize, noise,
//! pixelate, scanline glitch, swirl, kaleidoscope, contrast/brightness, invert, ordered dither),
//! each driven by one knob of an [`EffectParams`] record. Randomized filters and knob shuffles
//! draw from a single [`ChaosSource`]; with the chaos lock on that source is a seeded
//! [`Mulberry32`], so a recorded seed reproduces the same result bit-for-bit.
//!
//! # Pipeline overview
//!
//! 1. **Fit**: size the working surface with [`fit_within`] (the caller resamples).
//! 2. **Plan**: [`plan_stages`] drops every stage whose knob is at its identity value.
//! 3. **Apply**: [`apply_pipeline`] runs the remaining stages in [`Stage::ORDER`], handing each
//!    stage's output to the next.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **No IO**: decoding and encoding images is the caller's job (see the `image` feature).
//! - **No hidden state**: knobs and generator are passed in explicitly; [`ChaosSession`] is a
//!   convenience owner for both.
//! - **Straight-alpha RGBA8** end-to-end; filters keep alpha except where a remap samples
//!   outside the source.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod color;
mod effects;
mod foundation;
mod params;
mod random;
mod render;
mod session;

pub use color::hsl::{Hsl, hsl_to_rgb, rgb_to_hsl};
pub use effects::dither::{BAYER_4X4, dither, luminance};
pub use effects::glitch::{BLEED_CHANCE, MAX_DISPLACEMENT, glitch};
pub use effects::hue::hue_shift;
pub use effects::pixelate::pixelate;
pub use effects::polar::{kaleidoscope, swirl};
pub use effects::tone::{contrast_brightness, invert, noise, posterize};
pub use foundation::core::{PixelBuffer, Rgba8, TRANSPARENT};
pub use foundation::error::{ChaosError, ChaosResult};
pub use params::model::EffectParams;
pub use params::presets::Preset;
pub use params::shuffle::{
    DEFAULT_MUTATION_SECS, GachaRoll, Mutation, chaos_shuffle, gacha_roll, mutate,
    mutation_interval, reactor_shuffle,
};
pub use random::ambient::AmbientRng;
pub use random::mulberry::Mulberry32;
pub use random::source::{ChaosGenerator, ChaosLock, ChaosSource, create_generator, draw};
pub use render::pipeline::{
    CancelToken, PipelineOpts, PipelineStats, Stage, StageTiming, apply_pipeline,
    apply_pipeline_rgba8, apply_pipeline_with, plan_stages,
};
pub use render::surface::{MAX_DIM, fit_within};
pub use session::ChaosSession;
