use crate::foundation::error::{ChaosError, ChaosResult};
use crate::foundation::math::rgba8_len;

/// One straight-alpha RGBA8 sample.
pub type Rgba8 = [u8; 4];

/// Fully transparent black, written wherever a geometric remap samples outside the source.
pub const TRANSPARENT: Rgba8 = [0, 0, 0, 0];

/// Row-major, tightly packed straight-alpha RGBA8 image.
///
/// The byte length always equals `width * height * 4`; every constructor enforces it, so filters
/// can index without re-validating.
#[derive(Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// A fully transparent buffer.
    pub fn new(width: u32, height: u32) -> ChaosResult<Self> {
        let len = rgba8_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![0; len],
        })
    }

    /// A buffer with every pixel set to `px`.
    pub fn filled(width: u32, height: u32, px: Rgba8) -> ChaosResult<Self> {
        let len = rgba8_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: px.repeat(len / 4),
        })
    }

    /// Wrap raw RGBA8 bytes, failing with [`ChaosError::Dimension`] when the length does not
    /// match the declared size.
    pub fn from_rgba8(width: u32, height: u32, data: Vec<u8>) -> ChaosResult<Self> {
        let expected = rgba8_len(width, height)?;
        if data.len() != expected {
            return Err(ChaosError::dimension(format!(
                "expected {expected} bytes for {width}x{height} rgba8, got {}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `true` when the buffer holds no pixels.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Raw row-major RGBA8 bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume the buffer, returning its raw bytes.
    pub fn into_rgba8(self) -> Vec<u8> {
        self.data
    }

    /// Pixel at `(x, y)`. Panics when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Rgba8 {
        let i = self.offset(x, y);
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    /// Overwrite the pixel at `(x, y)`. Panics when out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, px: Rgba8) {
        let i = self.offset(x, y);
        self.data[i..i + 4].copy_from_slice(&px);
    }

    /// Bytes of row `y`.
    pub fn row(&self, y: u32) -> &[u8] {
        let stride = self.stride();
        let start = y as usize * stride;
        &self.data[start..start + stride]
    }

    /// Pixel at signed coordinates, or `None` when outside the buffer.
    pub(crate) fn sample(&self, x: i64, y: i64) -> Option<Rgba8> {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return None;
        }
        Some(self.pixel(x as u32, y as u32))
    }

    pub(crate) fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub(crate) fn stride(&self) -> usize {
        self.width as usize * 4
    }

    /// Same-sized buffer whose bytes are produced by `f` from the current bytes, pixel by pixel.
    pub(crate) fn map_pixels(&self, mut f: impl FnMut(Rgba8) -> Rgba8) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for px in self.data.chunks_exact(4) {
            data.extend_from_slice(&f([px[0], px[1], px[2], px[3]]));
        }
        Self {
            width: self.width,
            height: self.height,
            data,
        }
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x},{y}) out of bounds for {}x{}",
            self.width,
            self.height
        );
        (y as usize * self.width as usize + x as usize) * 4
    }
}

impl std::fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.data.len())
            .finish()
    }
}

#[cfg(feature = "image")]
impl From<image::RgbaImage> for PixelBuffer {
    fn from(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            data: img.into_raw(),
        }
    }
}

#[cfg(feature = "image")]
impl PixelBuffer {
    /// Convert into an [`image::RgbaImage`] without copying.
    pub fn into_rgba_image(self) -> image::RgbaImage {
        let (width, height) = (self.width, self.height);
        image::RgbaImage::from_raw(width, height, self.data)
            .unwrap_or_else(|| unreachable!("PixelBuffer length invariant violated"))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
