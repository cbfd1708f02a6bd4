//! Samples the distorted outline that is stroked every frame.

use crate::color::Color;
use crate::config::{EffectConfig, Tuning};
use crate::noise::octaved_noise;
use crate::perimeter::{Point, RoundedRect};

/// How the traced outline is painted.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub line_width: f64,
}

impl StrokeStyle {
    pub fn new(config: &EffectConfig, tuning: &Tuning) -> Self {
        Self {
            color: config.color,
            line_width: tuning.layout.line_width,
        }
    }
}

/// Upper bound on outline segments per frame.
pub const MAX_SAMPLES: usize = 20_000;

/// Number of outline segments: one per `spacing` pixels of the estimated
/// perimeter, between one and [`MAX_SAMPLES`].
pub fn sample_count(rect: &RoundedRect, spacing: f64) -> usize {
    let spacing = if spacing.is_finite() && spacing > 0.0 { spacing } else { 1.0 };
    ((rect.approx_perimeter() / spacing).floor() as usize).clamp(1, MAX_SAMPLES)
}

/// Fills `out` with the displaced outline at animation time `time`.
///
/// The result holds `sample_count + 1` points; the last one sits on the same
/// base point as the first but samples noise at the far end of the noise
/// domain, so the two ends may not meet exactly. Callers close the path.
pub fn trace_border(out: &mut Vec<Point>, rect: &RoundedRect, config: &EffectConfig, tuning: &Tuning, time: f64) {
    let samples = sample_count(rect, tuning.layout.sample_spacing);
    out.clear();
    out.reserve(samples.saturating_add(1));

    for i in 0..=samples {
        let progress = i as f64 / samples as f64;
        let base = rect.point_at(progress);
        let x = progress * tuning.noise_scale;
        let dx = octaved_noise(x, time, 0, config.chaos, &tuning.noise);
        let dy = octaved_noise(x, time, 1, config.chaos, &tuning.noise);
        out.push(Point::new(
            base.x + dx * tuning.displacement,
            base.y + dy * tuning.displacement,
        ));
    }
}
