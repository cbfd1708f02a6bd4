//! Deterministic value noise and its octave sum.
//!
//! Everything here is pure arithmetic: same inputs, same outputs, no hidden
//! state. The distortion of the border is two of these fields (one per axis)
//! sampled along the perimeter.

/// Largest `f64` strictly below one.
const BELOW_ONE: f64 = 1.0 - f64::EPSILON / 2.0;

/// Lattice row stride used to fold a 2D cell index into one hash input.
const ROW_STRIDE: f64 = 57.0;

/// Per-seed offset along x that decorrelates the displacement channels.
const SEED_OFFSET: f64 = 100.0;

/// How fast the time axis is traversed relative to the octave frequency.
const TIME_RATE: f64 = 0.3;

/// Fractional part in `[0, 1)`, also for negative inputs.
#[inline]
fn fract(v: f64) -> f64 {
    let f = v - v.floor();
    if f >= 1.0 {
        0.0
    } else {
        f
    }
}

#[inline]
fn smoothstep(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Classic `fract(sin(x * 12.9898) * 43758.5453)` scalar hash, in `[0, 1)`.
pub fn scalar_hash(x: f64) -> f64 {
    fract((x * 12.9898).sin() * 43758.5453)
}

/// Smoothed 2D lattice value noise, in `[0, 1)`.
pub fn value_noise_2d(x: f64, y: f64) -> f64 {
    let i = x.floor();
    let j = y.floor();
    let u = smoothstep(x - i);
    let v = smoothstep(y - j);

    let corner = |di: f64, dj: f64| scalar_hash((i + di) + (j + dj) * ROW_STRIDE);
    let top = lerp(corner(0.0, 0.0), corner(1.0, 0.0), u);
    let bottom = lerp(corner(0.0, 1.0), corner(1.0, 1.0), u);

    lerp(top, bottom, v).clamp(0.0, BELOW_ONE)
}

/// Shape of the octave sum. The amplitude is not part of the tuning: it is
/// the effect's `chaos` and is passed per call.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NoiseTuning {
    pub octaves: u32,
    pub lacunarity: f64,
    pub gain: f64,
    pub base_frequency: f64,
    /// Weight of octave 0 only; 0 drops the slow wobble entirely.
    pub base_flatness: f64,
}

impl Default for NoiseTuning {
    fn default() -> Self {
        Self {
            octaves: 10,
            lacunarity: 1.6,
            gain: 0.7,
            base_frequency: 10.0,
            base_flatness: 0.0,
        }
    }
}

impl NoiseTuning {
    /// Upper bound of [`octaved_noise`] for the given amplitude; times the
    /// pixel displacement it bounds how far a border point can move.
    pub fn max_output(&self, base_amplitude: f64) -> f64 {
        let mut amplitude = base_amplitude;
        let mut total = 0.0;
        for i in 0..self.octaves {
            total += if i == 0 { amplitude * self.base_flatness } else { amplitude };
            amplitude *= self.gain;
        }
        total
    }
}

/// Sum of `tuning.octaves` value-noise octaves over `(x, time)`.
///
/// Octave `i` samples at frequency `base_frequency * lacunarity^i` with
/// amplitude `base_amplitude * gain^i`; octave 0 is further scaled by
/// `base_flatness`. `seed` shifts the sample along x so different seeds give
/// uncorrelated fields over the same inputs.
pub fn octaved_noise(x: f64, time: f64, seed: u32, base_amplitude: f64, tuning: &NoiseTuning) -> f64 {
    let offset = f64::from(seed) * SEED_OFFSET;
    let mut amplitude = base_amplitude;
    let mut frequency = tuning.base_frequency;
    let mut sum = 0.0;

    for i in 0..tuning.octaves {
        let weight = if i == 0 { amplitude * tuning.base_flatness } else { amplitude };
        sum += weight * value_noise_2d(frequency * x + offset, time * frequency * TIME_RATE);
        frequency *= tuning.lacunarity;
        amplitude *= tuning.gain;
    }
    sum
}
