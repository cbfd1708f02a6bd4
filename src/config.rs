//! Effect configuration and tuning, loadable from a JSON options string.

use crate::color::Color;
use crate::error::EffectResult;
use crate::noise::NoiseTuning;

/// Finest stroke sampling accepted from options, in perimeter pixels.
pub const MIN_SAMPLE_SPACING: f64 = 0.5;

/// Most noise octaves accepted from options.
pub const MAX_OCTAVES: u32 = 16;

/// What the caller picks per border. Replaced wholesale on reconfigure.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EffectConfig {
    pub color: Color,
    /// Multiplier on elapsed real time.
    pub speed: f64,
    /// Noise amplitude; 0 draws the plain rounded rectangle.
    pub chaos: f64,
    /// Requested radius, clamped to half the smaller box side at draw time.
    pub corner_radius: f64,
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            color: Color::default(),
            speed: 1.0,
            chaos: 0.12,
            corner_radius: 24.0,
        }
    }
}

fn non_negative(name: &str, value: f64) -> f64 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        log::warn!("{name} must be a non-negative number, got {value}; using 0");
        0.0
    }
}

impl EffectConfig {
    /// Replaces negative or non-finite scalars with 0.
    pub fn sanitized(self) -> Self {
        Self {
            speed: non_negative("speed", self.speed),
            chaos: non_negative("chaos", self.chaos),
            corner_radius: non_negative("cornerRadius", self.corner_radius),
            ..self
        }
    }
}

/// Layout constants of the animated layer.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutTuning {
    /// Padding around the container on every side of the surface.
    pub border_offset: f64,
    /// Perimeter pixels per stroke sample.
    pub sample_spacing: f64,
    pub line_width: f64,
    pub max_pixel_ratio: f64,
}

impl Default for LayoutTuning {
    fn default() -> Self {
        Self {
            border_offset: 40.0,
            sample_spacing: 3.0,
            line_width: 1.5,
            max_pixel_ratio: 2.0,
        }
    }
}

/// Everything below the public knobs.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Tuning {
    pub noise: NoiseTuning,
    pub layout: LayoutTuning,
    /// Pixel displacement at noise output 1.
    pub displacement: f64,
    /// Progress-to-noise-space scale along the perimeter.
    pub noise_scale: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            noise: NoiseTuning::default(),
            layout: LayoutTuning::default(),
            displacement: 40.0,
            noise_scale: 8.0,
        }
    }
}

impl Tuning {
    /// Clamps values that would stall or break the per-frame loop: spacing
    /// is floored at [`MIN_SAMPLE_SPACING`], octaves capped at
    /// [`MAX_OCTAVES`], and negative or non-finite lengths become 0.
    pub fn sanitized(self) -> Self {
        let mut t = self;
        let spacing = t.layout.sample_spacing;
        if !(spacing.is_finite() && spacing >= MIN_SAMPLE_SPACING) {
            log::warn!("sampleSpacing must be at least {MIN_SAMPLE_SPACING}, got {spacing}; using {MIN_SAMPLE_SPACING}");
            t.layout.sample_spacing = MIN_SAMPLE_SPACING;
        }
        if t.noise.octaves > MAX_OCTAVES {
            log::warn!("octaves capped at {MAX_OCTAVES}, got {}", t.noise.octaves);
            t.noise.octaves = MAX_OCTAVES;
        }
        t.noise.lacunarity = non_negative("lacunarity", t.noise.lacunarity);
        t.noise.gain = non_negative("gain", t.noise.gain);
        t.noise.base_frequency = non_negative("baseFrequency", t.noise.base_frequency);
        t.noise.base_flatness = non_negative("baseFlatness", t.noise.base_flatness);
        t.layout.border_offset = non_negative("borderOffset", t.layout.border_offset);
        t.layout.line_width = non_negative("lineWidth", t.layout.line_width);
        t.displacement = non_negative("displacement", t.displacement);
        t.noise_scale = non_negative("noiseScale", t.noise_scale);
        t
    }
}

/// The full options object accepted by the browser binding.
///
/// ```json
/// { "color": "#7df9ff", "speed": 1, "chaos": 0.12, "cornerRadius": 16,
///   "tuning": { "layout": { "borderOffset": 40 } } }
/// ```
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Options {
    #[serde(flatten)]
    pub effect: EffectConfig,
    pub tuning: Tuning,
}

impl Options {
    /// Parses a JSON options object. Blank input yields the defaults.
    pub fn from_json(json: &str) -> EffectResult<Self> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        let mut options: Options = serde_json::from_str(json)?;
        options.effect = options.effect.sanitized();
        options.tuning = options.tuning.sanitized();
        Ok(options)
    }
}
