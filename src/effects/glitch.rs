//! Scanline glitch: horizontal band displacement plus occasional red-channel bleed.
//!
//! The filter copies its input once into a working buffer, then applies stripes in sequence.
//! Each stripe reads the working buffer as the previous stripes left it, so overlapping stripes
//! compound.

use std::borrow::Cow;
use std::ops::Range;

use crate::foundation::core::PixelBuffer;
use crate::random::source::ChaosSource;

/// Probability that a stripe also bleeds its red channel sideways.
pub const BLEED_CHANCE: f64 = 0.18;

/// Maximum horizontal displacement, in pixels, at full intensity.
pub const MAX_DISPLACEMENT: f64 = 30.0;

/// Displace random horizontal bands of the image.
///
/// `intensity` is clamped to `0..=100`; zero, negative or non-finite intensity is a no-op and
/// consumes no draws. Runs `floor(intensity / 8) + 3` stripes. Per stripe the draws are: row,
/// band height, displacement, bleed chance, and on bleed the direction and magnitude.
pub fn glitch<'a>(
    buf: &'a PixelBuffer,
    intensity: f64,
    rng: &mut dyn ChaosSource,
) -> Cow<'a, PixelBuffer> {
    if !intensity.is_finite() || intensity <= 0.0 || buf.is_empty() {
        return Cow::Borrowed(buf);
    }
    let intensity = intensity.min(100.0);

    let mut work = buf.clone();
    let h = buf.height() as usize;
    let stripes = (intensity / 8.0).floor() as usize + 3;
    for _ in 0..stripes {
        let y = rng.floor_range(0.0, h as f64) as usize;
        let band_h = rng
            .floor_range(4.0, (h as f64 / 6.0).min(40.0))
            .max(0.0) as usize;
        let dx = (rng.range(-MAX_DISPLACEMENT, MAX_DISPLACEMENT) * (intensity / 100.0)).floor();
        let rows = y..(y + band_h).min(h);

        shift_rows(&mut work, rows, dx as i64);

        if rng.chance(BLEED_CHANCE) {
            let dir = if rng.chance(0.5) { -1 } else { 1 };
            let magnitude = rng.floor_range(1.0, 3.0) as i64;
            bleed_red(&mut work, y, band_h, dir * magnitude);
        }
    }
    Cow::Owned(work)
}

/// Shift every row in `rows` right by `dx` pixels (left when negative). Destination pixels the
/// shifted row does not cover keep their current values.
fn shift_rows(work: &mut PixelBuffer, rows: Range<usize>, dx: i64) {
    let w = work.width() as usize;
    let n = dx.unsigned_abs() as usize;
    if dx == 0 || n >= w {
        return;
    }
    let stride = work.stride();
    for y in rows {
        let row = &mut work.bytes_mut()[y * stride..(y + 1) * stride];
        if dx > 0 {
            row.copy_within(0..(w - n) * 4, n * 4);
        } else {
            row.copy_within(n * 4.., 0);
        }
    }
}

/// Treat the `band_h` rows starting at `y` as one contiguous pixel stream and overwrite each
/// pixel's red byte, in stream order, with the red byte `shift` pixels away. Reads see earlier
/// writes, so a negative shift smears the leading reds down the band. Rows past the bottom edge
/// read as red 0 and are never written; the stream's last pixel is left alone.
fn bleed_red(work: &mut PixelBuffer, y: usize, band_h: usize, shift: i64) {
    let w = work.width() as usize;
    let stride = work.stride();
    let end = (y + band_h).min(work.height() as usize);
    let band = &mut work.bytes_mut()[y * stride..end * stride];
    let len = band.len() / 4;
    let span = (band_h * w) as i64;
    for p in 0..len.min((span - 1).max(0) as usize) {
        let q = p as i64 + shift;
        if (0..span).contains(&q) {
            band[p * 4] = band.get(q as usize * 4).copied().unwrap_or(0);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/glitch.rs"]
mod tests;
