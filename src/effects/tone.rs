use std::borrow::Cow;

use crate::foundation::core::PixelBuffer;
use crate::foundation::math::{round_half_up, store_channel};
use crate::random::source::ChaosSource;

/// Quantize each colour channel to `levels` evenly spaced values.
///
/// `value -> round(value / step) * step` with `step = 255 / (levels - 1)`. The quotient rounds
/// half-up and the product is stored half-to-even, so mid-grey 128 at three levels lands on 128.
/// No-op below two levels.
pub fn posterize(buf: &PixelBuffer, levels: u32) -> Cow<'_, PixelBuffer> {
    if levels < 2 {
        return Cow::Borrowed(buf);
    }

    let step = 255.0 / f64::from(levels - 1);
    let quantize = |v: u8| store_channel(round_half_up(f64::from(v) / step) * step);
    Cow::Owned(buf.map_pixels(|[r, g, b, a]| [quantize(r), quantize(g), quantize(b), a]))
}

/// Add independent uniform noise in `[-amplitude, amplitude)` to every colour channel.
///
/// Draws three values per pixel (red, green, blue) in row-major order. No-op when `amplitude`
/// is zero or not finite.
pub fn noise<'a>(
    buf: &'a PixelBuffer,
    amplitude: f64,
    rng: &mut dyn ChaosSource,
) -> Cow<'a, PixelBuffer> {
    if amplitude == 0.0 || !amplitude.is_finite() {
        return Cow::Borrowed(buf);
    }

    let mut jitter =
        |v: u8| store_channel(f64::from(v) + (rng.next_f64() * 2.0 - 1.0) * amplitude);
    Cow::Owned(buf.map_pixels(|[r, g, b, a]| {
        let r = jitter(r);
        let g = jitter(g);
        let b = jitter(b);
        [r, g, b, a]
    }))
}

/// Classic contrast curve plus a brightness offset, both in `-100..=100`.
///
/// Out-of-range values are clamped and non-finite ones count as zero. No-op when both are zero.
pub fn contrast_brightness(
    buf: &PixelBuffer,
    contrast: f64,
    brightness: f64,
) -> Cow<'_, PixelBuffer> {
    let c = finite_or_zero(contrast).clamp(-100.0, 100.0) / 100.0;
    let b = finite_or_zero(brightness).clamp(-100.0, 100.0);
    if c == 0.0 && b == 0.0 {
        return Cow::Borrowed(buf);
    }

    let f = contrast_factor(c);
    let adjust = |v: u8| store_channel(f * (f64::from(v) - 128.0) + 128.0 + b);
    Cow::Owned(buf.map_pixels(|[r, g, bl, a]| [adjust(r), adjust(g), adjust(bl), a]))
}

/// `255 - v` on every colour channel when `on`.
pub fn invert(buf: &PixelBuffer, on: bool) -> Cow<'_, PixelBuffer> {
    if !on {
        return Cow::Borrowed(buf);
    }
    Cow::Owned(buf.map_pixels(|[r, g, b, a]| [255 - r, 255 - g, 255 - b, a]))
}

/// Contrast multiplier for a normalized contrast `c` in `[-1, 1]`.
pub(crate) fn contrast_factor(c: f64) -> f64 {
    (259.0 * (c * 255.0 + 255.0)) / (255.0 * (259.0 - c * 255.0))
}

fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/tone.rs"]
mod tests;
