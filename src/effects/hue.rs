use std::borrow::Cow;

use crate::color::hsl::{Hsl, hsl_to_rgb, rgb_to_hsl};
use crate::foundation::core::PixelBuffer;

/// Rotate every pixel's hue by `degrees`, leaving alpha untouched.
///
/// No-op when `degrees` is a whole number of turns or not finite.
pub fn hue_shift(buf: &PixelBuffer, degrees: f64) -> Cow<'_, PixelBuffer> {
    let shift = hue_turns(degrees);
    if shift == 0.0 {
        return Cow::Borrowed(buf);
    }

    Cow::Owned(buf.map_pixels(|[r, g, b, a]| {
        let hsl = rgb_to_hsl(r, g, b);
        let [r, g, b] = hsl_to_rgb(Hsl {
            h: (hsl.h + shift) % 1.0,
            ..hsl
        });
        [r, g, b, a]
    }))
}

/// `degrees` reduced to a fraction of a turn in `[0, 1)`.
pub(crate) fn hue_turns(degrees: f64) -> f64 {
    if !degrees.is_finite() {
        return 0.0;
    }
    ((degrees % 360.0) + 360.0) % 360.0 / 360.0
}

#[cfg(test)]
#[path = "../../tests/unit/effects/hue.rs"]
mod tests;
