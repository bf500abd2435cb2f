use crate::foundation::math::round_half_up;

/// Longest side of the working surface the editor renders at.
pub const MAX_DIM: u32 = 1200;

/// Size of the working surface for a `width x height` source.
///
/// When the longer side exceeds `max_dim` it becomes `max_dim` and the other side keeps the
/// aspect ratio (rounded half-up). Smaller sources are used as-is. Neither side is ever 0.
pub fn fit_within(width: u32, height: u32, max_dim: u32) -> (u32, u32) {
    let (width, height, max_dim) = (width.max(1), height.max(1), max_dim.max(1));
    if width.max(height) <= max_dim {
        return (width, height);
    }

    let ratio = f64::from(width) / f64::from(height);
    let side = |v: f64| (round_half_up(v) as u32).max(1);
    if width > height {
        (max_dim, side(f64::from(max_dim) / ratio))
    } else {
        (side(f64::from(max_dim) * ratio), max_dim)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
