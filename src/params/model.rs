use crate::foundation::error::{ChaosError, ChaosResult};

/// Flat record of every effect knob the pipeline reads.
///
/// Each knob defaults to its identity value, so `EffectParams::default()` renders the source
/// unchanged. The pipeline reads the record and never mutates it.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EffectParams {
    /// Hue rotation in degrees. Whole turns are the identity.
    #[serde(alias = "hue")]
    pub hue_degrees: f64,
    /// Noise amplitude, `0..=100`.
    pub noise: f64,
    /// Pixelation block size in pixels; below 2 is the identity.
    #[serde(alias = "pixel")]
    pub pixel_size: u32,
    /// Posterize level count; below 2 is the identity.
    #[serde(alias = "posterize")]
    pub posterize_levels: u32,
    /// Swirl strength, `0..=100`.
    pub swirl: f64,
    /// Kaleidoscope wedge count; below 2 is the identity.
    #[serde(alias = "kaleido")]
    pub kaleidoscope_segments: u32,
    /// Scanline glitch intensity, `0..=100`.
    pub glitch: f64,
    /// Ordered black/white dithering.
    pub dither: bool,
    /// Contrast, `-100..=100`.
    pub contrast: f64,
    /// Brightness offset, `-100..=100`.
    pub brightness: f64,
    /// Colour inversion.
    pub invert: bool,
}

impl EffectParams {
    /// Parse a JSON parameter record. Missing knobs take their identity value.
    pub fn from_json_str(s: &str) -> ChaosResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Pretty-printed JSON.
    pub fn to_json_string(&self) -> ChaosResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Strict range check for configuration files.
    ///
    /// Filters never need this: they accept any value and degrade out-of-range input to a no-op
    /// or a clamp. Use it to reject a bad config up front instead.
    pub fn validate(&self) -> ChaosResult<()> {
        if !self.hue_degrees.is_finite() {
            return Err(ChaosError::validation("hue_degrees must be finite"));
        }
        for (name, value) in [
            ("noise", self.noise),
            ("swirl", self.swirl),
            ("glitch", self.glitch),
        ] {
            if !value.is_finite() || !(0.0..=100.0).contains(&value) {
                return Err(ChaosError::validation(format!(
                    "{name} must be finite and within 0..=100, got {value}"
                )));
            }
        }
        for (name, value) in [("contrast", self.contrast), ("brightness", self.brightness)] {
            if !value.is_finite() || !(-100.0..=100.0).contains(&value) {
                return Err(ChaosError::validation(format!(
                    "{name} must be finite and within -100..=100, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Lenient counterpart of [`EffectParams::validate`]: non-finite knobs become their identity
    /// value and the rest are clamped into range.
    pub fn sanitized(&self) -> Self {
        let clamp = |v: f64, lo: f64, hi: f64| if v.is_finite() { v.clamp(lo, hi) } else { 0.0 };
        Self {
            hue_degrees: if self.hue_degrees.is_finite() {
                self.hue_degrees
            } else {
                0.0
            },
            noise: clamp(self.noise, 0.0, 100.0),
            swirl: clamp(self.swirl, 0.0, 100.0),
            glitch: clamp(self.glitch, 0.0, 100.0),
            contrast: clamp(self.contrast, -100.0, 100.0),
            brightness: clamp(self.brightness, -100.0, 100.0),
            ..self.clone()
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/params/model.rs"]
mod tests;
