//! The stateful half of the effect: surface sizing, time keeping and the
//! once-per-refresh draw, written against two small traits so the browser
//! and the tests plug in their own surface and scheduler.

use crate::config::{EffectConfig, LayoutTuning, Options, Tuning};
use crate::error::EffectResult;
use crate::perimeter::{Point, RoundedRect};
use crate::stroke::{trace_border, StrokeStyle};

/// Observed size of the wrapped container, in logical pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoxSize {
    pub width: f64,
    pub height: f64,
}

impl BoxSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Size and placement of the drawing surface.
///
/// `width`/`height` are logical pixels; the surface sits `offset` pixels up
/// and left of the container so outward displacement is not clipped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceLayout {
    pub width: f64,
    pub height: f64,
    pub offset: f64,
    pub pixel_ratio: f64,
}

impl SurfaceLayout {
    pub fn compute(container: BoxSize, tuning: &LayoutTuning, pixel_ratio: f64) -> Self {
        let side = |v: f64| if v.is_finite() { v.max(0.0) } else { 0.0 };
        let offset = side(tuning.border_offset);
        let ratio = if pixel_ratio.is_finite() && pixel_ratio > 0.0 { pixel_ratio } else { 1.0 };
        Self {
            width: side(container.width) + 2.0 * offset,
            height: side(container.height) + 2.0 * offset,
            offset,
            pixel_ratio: ratio.min(tuning.max_pixel_ratio.max(1.0)),
        }
    }

    /// Backing-store width in device pixels.
    pub fn backing_width(&self) -> u32 {
        (self.width * self.pixel_ratio).round() as u32
    }

    /// Backing-store height in device pixels.
    pub fn backing_height(&self) -> u32 {
        (self.height * self.pixel_ratio).round() as u32
    }
}

/// Animation clock of one running border.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RenderState {
    time_accumulator: f64,
    last_frame_timestamp: Option<f64>,
}

impl RenderState {
    /// Advances the clock to the refresh `timestamp_ms` and returns the
    /// elapsed seconds. The first frame, and any frame whose timestamp does
    /// not move forward, counts as zero.
    pub fn advance(&mut self, timestamp_ms: f64, speed: f64) -> f64 {
        let delta = match self.last_frame_timestamp {
            Some(last) if timestamp_ms > last => (timestamp_ms - last) / 1000.0,
            _ => 0.0,
        };
        if timestamp_ms.is_finite() {
            self.last_frame_timestamp = Some(timestamp_ms);
        }
        if delta.is_finite() && speed.is_finite() && speed > 0.0 {
            self.time_accumulator += delta * speed;
        }
        delta
    }

    pub fn time(&self) -> f64 {
        self.time_accumulator
    }

    pub fn last_frame_timestamp(&self) -> Option<f64> {
        self.last_frame_timestamp
    }
}

/// A raster surface owned by one border.
///
/// All coordinates are logical pixels with the origin at the surface's
/// top-left; implementations map them to the backing store.
pub trait Surface {
    fn resize(&mut self, layout: &SurfaceLayout);
    fn clear(&mut self);
    /// Strokes `path` as one closed polyline.
    fn stroke(&mut self, path: &[Point], style: &StrokeStyle);
}

/// Per-display-refresh callback scheduling.
pub trait FrameScheduler {
    type Handle: Copy;

    fn request_frame(&mut self) -> EffectResult<Self::Handle>;
    fn cancel_frame(&mut self, handle: Self::Handle);
}

/// Drives one border: owns its surface, its clock and its single pending
/// frame request.
pub struct BorderDriver<S, F: FrameScheduler> {
    surface: S,
    scheduler: F,
    config: EffectConfig,
    tuning: Tuning,
    container: BoxSize,
    layout: SurfaceLayout,
    state: RenderState,
    pending: Option<F::Handle>,
    live: bool,
    path: Vec<Point>,
}

impl<S: Surface, F: FrameScheduler> BorderDriver<S, F> {
    /// Sizes the surface for `container`; nothing is scheduled until
    /// [`BorderDriver::start`].
    pub fn new(mut surface: S, scheduler: F, options: Options, container: BoxSize, pixel_ratio: f64) -> Self {
        let config = options.effect.sanitized();
        let tuning = options.tuning.sanitized();
        let layout = SurfaceLayout::compute(container, &tuning.layout, pixel_ratio);
        surface.resize(&layout);
        Self {
            surface,
            scheduler,
            config,
            tuning,
            container,
            layout,
            state: RenderState::default(),
            pending: None,
            live: true,
            path: Vec::new(),
        }
    }

    /// Requests the first frame. When the scheduler refuses, one static
    /// frame is drawn instead so the border still shows.
    pub fn start(&mut self) {
        if !self.live || self.pending.is_some() {
            return;
        }
        if !self.schedule() {
            self.draw();
        }
    }

    /// One display refresh at `timestamp_ms`.
    pub fn on_frame(&mut self, timestamp_ms: f64) {
        if !self.live {
            return;
        }
        self.pending = None;
        self.state.advance(timestamp_ms, self.config.speed);
        self.draw();
        self.schedule();
    }

    /// The container's box changed; the next draw uses the new size.
    pub fn on_box_changed(&mut self, container: BoxSize, pixel_ratio: f64) {
        if !self.live {
            return;
        }
        self.container = container;
        self.relayout(pixel_ratio);
    }

    pub fn set_config(&mut self, config: EffectConfig) {
        self.config = config.sanitized();
    }

    pub fn set_tuning(&mut self, tuning: Tuning) {
        self.tuning = tuning.sanitized();
        self.relayout(self.layout.pixel_ratio);
    }

    /// Cancels the pending frame; every later call becomes a no-op.
    pub fn teardown(&mut self) {
        if !self.live {
            return;
        }
        self.live = false;
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
        log::debug!("border driver torn down at t={:.3}", self.state.time());
    }

    pub fn is_live(&self) -> bool {
        self.live
    }

    pub fn has_pending_frame(&self) -> bool {
        self.pending.is_some()
    }

    pub fn state(&self) -> &RenderState {
        &self.state
    }

    pub fn layout(&self) -> &SurfaceLayout {
        &self.layout
    }

    pub fn config(&self) -> &EffectConfig {
        &self.config
    }

    /// Outline drawn by the most recent frame.
    pub fn last_path(&self) -> &[Point] {
        &self.path
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn scheduler(&self) -> &F {
        &self.scheduler
    }

    fn relayout(&mut self, pixel_ratio: f64) {
        let layout = SurfaceLayout::compute(self.container, &self.tuning.layout, pixel_ratio);
        if layout != self.layout {
            self.layout = layout;
            self.surface.resize(&layout);
        }
    }

    fn schedule(&mut self) -> bool {
        match self.scheduler.request_frame() {
            Ok(handle) => {
                self.pending = Some(handle);
                true
            }
            Err(err) => {
                log::warn!("border animation stopped: {err}");
                false
            }
        }
    }

    fn draw(&mut self) {
        self.surface.clear();
        let offset = self.layout.offset;
        let Some(rect) = RoundedRect::new(
            offset,
            offset,
            self.container.width,
            self.container.height,
            self.config.corner_radius,
        ) else {
            self.path.clear();
            return;
        };
        trace_border(&mut self.path, &rect, &self.config, &self.tuning, self.state.time());
        let style = StrokeStyle::new(&self.config, &self.tuning);
        self.surface.stroke(&self.path, &style);
    }
}
