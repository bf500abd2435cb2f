//! Buffer-in/buffer-out image filters.
//!
//! Every filter returns `Cow::Borrowed` at its identity parameter and a fresh buffer of the same
//! dimensions otherwise. Randomized filters draw from a caller-supplied `ChaosSource`.

pub(crate) mod dither;
pub(crate) mod glitch;
pub(crate) mod hue;
pub(crate) mod pixelate;
pub(crate) mod polar;
pub(crate) mod tone;
