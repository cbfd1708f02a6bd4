//! Animated, noise-distorted glowing border around an arbitrary box.
//!
//! The math (noise, perimeter walk, stroke sampling) and the driver are
//! plain Rust and run anywhere; the browser binding is only compiled for
//! wasm32.

pub mod color;
pub mod config;
pub mod driver;
pub mod error;
pub mod glow;
pub mod noise;
pub mod perimeter;
pub mod stroke;

pub use color::Color;
pub use config::{EffectConfig, LayoutTuning, Options, Tuning};
pub use driver::{BorderDriver, BoxSize, FrameScheduler, RenderState, Surface, SurfaceLayout};
pub use error::{EffectError, EffectResult};
pub use noise::{octaved_noise, scalar_hash, value_noise_2d, NoiseTuning};
pub use perimeter::{corner_point, rounded_rect_point, Point, RoundedRect};
pub use stroke::{sample_count, trace_border, StrokeStyle};

// Only compile wasm-specific code when targeting wasm32.
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::ElectricBorder;
