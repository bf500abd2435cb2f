use crate::foundation::error::{ChaosError, ChaosResult};

/// Byte length of a tightly packed RGBA8 buffer, or a dimension error on overflow.
pub(crate) fn rgba8_len(width: u32, height: u32) -> ChaosResult<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| ChaosError::dimension(format!("{width}x{height} rgba8 size overflow")))
}

/// Write a floating channel value back to a byte.
///
/// Clamps to `[0, 255]`, rounds half-to-even and maps NaN to 0, which is how clamped byte
/// arrays store doubles.
pub(crate) fn store_channel(v: f64) -> u8 {
    if v.is_nan() {
        return 0;
    }
    v.clamp(0.0, 255.0).round_ties_even() as u8
}

/// `floor(x + 0.5)`: rounds halves toward positive infinity.
pub(crate) fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Nearest-neighbour source index for destination index `dst` when resampling an axis of
/// `src_len` samples to `dst_len` samples, sampling at pixel centres.
pub(crate) fn nearest_index(dst: usize, src_len: usize, dst_len: usize) -> usize {
    debug_assert!(src_len > 0 && dst_len > 0);
    let pos = (dst as f64 + 0.5) * (src_len as f64) / (dst_len as f64);
    (pos.floor() as usize).min(src_len - 1)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
