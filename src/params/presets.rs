use std::fmt;
use std::str::FromStr;

use crate::foundation::error::ChaosError;
use crate::params::model::EffectParams;

/// Named one-click looks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Preset {
    /// Pink-shifted, posterized, lightly swirled.
    Vaporwave,
    /// Plain black/white dither.
    Noir,
    /// Warm hue, flat colour, a touch of glitch.
    Pop,
    /// Chunky pixels on a cyan shift.
    Pixel,
    /// Crushed contrast and blown highlights.
    DeepFried,
}

impl Preset {
    /// Every preset, in menu order.
    pub const ALL: [Preset; 5] = [
        Preset::Vaporwave,
        Preset::Noir,
        Preset::Pop,
        Preset::Pixel,
        Preset::DeepFried,
    ];

    /// Kebab-case name, as accepted by [`Preset::from_str`].
    pub fn name(self) -> &'static str {
        match self {
            Preset::Vaporwave => "vaporwave",
            Preset::Noir => "noir",
            Preset::Pop => "pop",
            Preset::Pixel => "pixel",
            Preset::DeepFried => "deep-fried",
        }
    }

    /// Overwrite the knobs this preset owns. Every other knob is left as it was.
    pub fn apply(self, p: &mut EffectParams) {
        match self {
            Preset::Vaporwave => Look {
                hue: 300.0,
                posterize: 6,
                glitch: 60.0,
                swirl: 20.0,
                noise: 10.0,
                ..Look::default()
            }
            .apply_to(p),
            Preset::Noir => Look {
                dither: true,
                ..Look::default()
            }
            .apply_to(p),
            Preset::Pop => Look {
                hue: 40.0,
                posterize: 5,
                glitch: 10.0,
                noise: 5.0,
                ..Look::default()
            }
            .apply_to(p),
            Preset::Pixel => Look {
                hue: 180.0,
                posterize: 4,
                pixel: 14,
                glitch: 25.0,
                noise: 8.0,
                ..Look::default()
            }
            .apply_to(p),
            Preset::DeepFried => {
                p.contrast = DEEP_FRIED_CONTRAST;
                p.brightness = DEEP_FRIED_BRIGHTNESS;
            }
        }
        tracing::debug!(preset = self.name(), ?p, "preset applied");
    }

    /// Fresh identity params with this preset applied.
    pub fn params(self) -> EffectParams {
        let mut p = EffectParams::default();
        self.apply(&mut p);
        p
    }
}

/// Contrast used by the deep-fried preset and gacha roll.
pub(crate) const DEEP_FRIED_CONTRAST: f64 = 80.0;
/// Brightness used by the deep-fried preset and gacha roll.
pub(crate) const DEEP_FRIED_BRIGHTNESS: f64 = 40.0;

/// The knobs a look preset owns. Unnamed knobs reset to identity; invert is always cleared.
#[derive(Clone, Copy, Debug, Default)]
struct Look {
    hue: f64,
    posterize: u32,
    pixel: u32,
    glitch: f64,
    swirl: f64,
    kaleido: u32,
    noise: f64,
    dither: bool,
}

impl Look {
    fn apply_to(self, p: &mut EffectParams) {
        p.hue_degrees = self.hue;
        p.posterize_levels = self.posterize;
        p.pixel_size = self.pixel;
        p.glitch = self.glitch;
        p.swirl = self.swirl;
        p.kaleidoscope_segments = self.kaleido;
        p.noise = self.noise;
        p.dither = self.dither;
        p.invert = false;
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = ChaosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('_', "-");
        match key.as_str() {
            "vaporwave" => Ok(Preset::Vaporwave),
            "noir" => Ok(Preset::Noir),
            "pop" => Ok(Preset::Pop),
            "pixel" => Ok(Preset::Pixel),
            "deep-fried" | "deepfried" => Ok(Preset::DeepFried),
            "" => Err(ChaosError::validation("preset name must be non-empty")),
            other => Err(ChaosError::validation(format!("unknown preset '{other}'"))),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/params/presets.rs"]
mod tests;
