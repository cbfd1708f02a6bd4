use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement, Window};

use crate::driver::{FrameScheduler, Surface, SurfaceLayout};
use crate::error::{EffectError, EffectResult};
use crate::glow::canvas_style;
use crate::perimeter::Point;
use crate::stroke::StrokeStyle;

/// Writes inline style properties, logging the ones the browser rejects.
pub fn apply_style(el: &HtmlElement, style: &[(&'static str, String)]) {
    let decl = el.style();
    for (name, value) in style {
        if let Err(err) = decl.set_property(name, value) {
            log::warn!("could not set {name}: {err:?}");
        }
    }
}

/// A `<canvas>` with its 2D context, drawn in logical pixels.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pixel_ratio: f64,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> EffectResult<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|err| EffectError::dom(format!("{err:?}")))?
            .ok_or(EffectError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| EffectError::NoContext)?;
        Ok(Self {
            canvas,
            ctx,
            pixel_ratio: 1.0,
        })
    }

    fn reset_transform(&self) {
        let r = self.pixel_ratio;
        // Only fails for non-finite arguments, which the layout never produces.
        let _ = self.ctx.set_transform(r, 0.0, 0.0, r, 0.0, 0.0);
    }
}

impl Surface for CanvasSurface {
    fn resize(&mut self, layout: &SurfaceLayout) {
        // Assigning the backing size also resets the context state.
        self.canvas.set_width(layout.backing_width());
        self.canvas.set_height(layout.backing_height());
        apply_style(&self.canvas, &canvas_style(layout));
        self.pixel_ratio = layout.pixel_ratio;
        self.reset_transform();
    }

    fn clear(&mut self) {
        let _ = self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        self.ctx.clear_rect(
            0.0,
            0.0,
            f64::from(self.canvas.width()),
            f64::from(self.canvas.height()),
        );
        self.reset_transform();
    }

    fn stroke(&mut self, path: &[Point], style: &StrokeStyle) {
        let Some((first, rest)) = path.split_first() else {
            return;
        };
        let ctx = &self.ctx;
        ctx.begin_path();
        ctx.move_to(first.x, first.y);
        for p in rest {
            ctx.line_to(p.x, p.y);
        }
        ctx.close_path();
        ctx.set_stroke_style_str(&style.color.to_rgba_css(1.0));
        ctx.set_line_width(style.line_width);
        ctx.set_line_cap("round");
        ctx.set_line_join("round");
        ctx.stroke();
    }
}

/// Shared slot for the animation-frame closure. The closure is created after
/// the driver that schedules it, so it is filled in later.
pub type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// `requestAnimationFrame` / `cancelAnimationFrame` on one window.
pub struct AnimationFrames {
    window: Window,
    callback: FrameCallback,
}

impl AnimationFrames {
    pub fn new(window: Window, callback: FrameCallback) -> Self {
        Self { window, callback }
    }
}

impl FrameScheduler for AnimationFrames {
    type Handle = i32;

    fn request_frame(&mut self) -> EffectResult<i32> {
        let slot = self.callback.borrow();
        let callback = slot
            .as_ref()
            .ok_or_else(|| EffectError::scheduler("frame callback released"))?;
        self.window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .map_err(|err| EffectError::scheduler(format!("{err:?}")))
    }

    fn cancel_frame(&mut self, handle: i32) {
        if let Err(err) = self.window.cancel_animation_frame(handle) {
            log::warn!("cancelAnimationFrame failed: {err:?}");
        }
    }
}
