use std::borrow::Cow;

use crate::foundation::core::PixelBuffer;
use crate::foundation::math::nearest_index;

/// Blocky mosaic: nearest-neighbour downsample to `floor(w / block) x floor(h / block)` (at least
/// 1x1), then nearest-neighbour upsample back to the original size.
///
/// No-op when `block < 2`.
pub fn pixelate(buf: &PixelBuffer, block: u32) -> Cow<'_, PixelBuffer> {
    if block < 2 || buf.is_empty() {
        return Cow::Borrowed(buf);
    }

    let (w, h) = (buf.width() as usize, buf.height() as usize);
    let small_w = (w / block as usize).max(1);
    let small_h = (h / block as usize).max(1);

    // Down pass: each small cell keeps the source pixel nearest its centre.
    let mut small = Vec::with_capacity(small_w * small_h * 4);
    for sy in 0..small_h {
        let row = buf.row(nearest_index(sy, h, small_h) as u32);
        for sx in 0..small_w {
            let i = nearest_index(sx, w, small_w) * 4;
            small.extend_from_slice(&row[i..i + 4]);
        }
    }

    // Up pass: no smoothing.
    let col_map: Vec<usize> = (0..w).map(|x| nearest_index(x, small_w, w) * 4).collect();
    let mut out = buf.clone();
    let stride = out.stride();
    for (y, dst_row) in out.bytes_mut().chunks_exact_mut(stride).enumerate() {
        let src_row = &small[nearest_index(y, small_h, h) * small_w * 4..][..small_w * 4];
        for (dst, &si) in dst_row.chunks_exact_mut(4).zip(&col_map) {
            dst.copy_from_slice(&src_row[si..si + 4]);
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
#[path = "../../tests/unit/effects/pixelate.rs"]
mod tests;
