//! Geometric remaps in polar coordinates about the image center.
//!
//! Both filters are inverse maps: every destination pixel computes the source position it reads
//! from, rounds it, and writes [`TRANSPARENT`] when that position falls outside the buffer.

use std::borrow::Cow;
use std::f64::consts::TAU;

use kurbo::{Point, Vec2};

use crate::foundation::core::{PixelBuffer, TRANSPARENT};
use crate::foundation::math::round_half_up;

/// Rotate pixels about the center, more strongly near the center than at the corners.
///
/// `amount` is clamped to `0..=100`; the center rotates by `amount / 50` radians and the corners
/// stay put. Zero, negative or non-finite amounts are a no-op.
pub fn swirl(buf: &PixelBuffer, amount: f64) -> Cow<'_, PixelBuffer> {
    if !amount.is_finite() || amount <= 0.0 || buf.is_empty() {
        return Cow::Borrowed(buf);
    }
    let k = amount.min(100.0) / 100.0 * 2.0;
    let center = center_of(buf);
    let max_r = center.to_vec2().hypot2().sqrt();

    Cow::Owned(remap(buf, center, |theta, r| theta + k * (1.0 - r / max_r)))
}

/// Fold the image into `segments` mirrored wedges around the center.
///
/// Every angle is reduced into the first wedge and reflected about its midline, so all wedges
/// show the same slice of the source. No-op when `segments < 2`.
pub fn kaleidoscope(buf: &PixelBuffer, segments: u32) -> Cow<'_, PixelBuffer> {
    if segments < 2 || buf.is_empty() {
        return Cow::Borrowed(buf);
    }
    let wedge = TAU / f64::from(segments);

    Cow::Owned(remap(buf, center_of(buf), |theta, _| {
        let theta = ((theta % TAU) + TAU) % TAU;
        let m = theta % wedge;
        if m > wedge / 2.0 { wedge - m } else { m }
    }))
}

fn center_of(buf: &PixelBuffer) -> Point {
    Point::new(f64::from(buf.width()) / 2.0, f64::from(buf.height()) / 2.0)
}

/// Inverse polar remap. `source_angle(theta, r)` gives the angle to sample for a destination
/// pixel at angle `theta` and radius `r`; the radius itself is kept.
fn remap(
    buf: &PixelBuffer,
    center: Point,
    source_angle: impl Fn(f64, f64) -> f64,
) -> PixelBuffer {
    let mut out = buf.clone();
    let width = buf.width() as usize;
    for (i, dst) in out.bytes_mut().chunks_exact_mut(4).enumerate() {
        let p = Point::new((i % width) as f64, (i / width) as f64);
        let d = p - center;
        let r = d.hypot2().sqrt();
        let s = center + Vec2::from_angle(source_angle(d.atan2(), r)) * r;
        let px = buf
            .sample(round_half_up(s.x) as i64, round_half_up(s.y) as i64)
            .unwrap_or(TRANSPARENT);
        dst.copy_from_slice(&px);
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/effects/polar.rs"]
mod tests;
