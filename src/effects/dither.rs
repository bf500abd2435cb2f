use std::borrow::Cow;

use crate::foundation::core::PixelBuffer;

/// 4x4 Bayer ordered-dither matrix, indexed `[y & 3][x & 3]`, values `0..16`.
pub const BAYER_4X4: [[u8; 4]; 4] = [[0, 8, 2, 10], [12, 4, 14, 6], [3, 11, 1, 9], [15, 7, 13, 5]];

/// Rec. 709 luma of an 8-bit RGB triple, normalized to `[0, 1]`.
pub fn luminance(r: u8, g: u8, b: u8) -> f64 {
    (0.2126 * f64::from(r) + 0.7152 * f64::from(g) + 0.0722 * f64::from(b)) / 255.0
}

/// Ordered black/white halftone. Alpha is preserved.
pub fn dither(buf: &PixelBuffer, on: bool) -> Cow<'_, PixelBuffer> {
    if !on {
        return Cow::Borrowed(buf);
    }

    let mut out = buf.clone();
    let width = buf.width() as usize;
    for (i, px) in out.bytes_mut().chunks_exact_mut(4).enumerate() {
        let (x, y) = (i % width, i / width);
        let threshold = f64::from(BAYER_4X4[y & 3][x & 3]) / 16.0;
        let v = if luminance(px[0], px[1], px[2]) + threshold - 0.5 > 0.0 {
            255
        } else {
            0
        };
        px[..3].fill(v);
    }
    Cow::Owned(out)
}

#[cfg(test)]
#[path = "../../tests/unit/effects/dither.rs"]
mod tests;
