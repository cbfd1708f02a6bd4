//! Browser binding: the `ElectricBorder` class exported to JavaScript.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, HtmlElement, ResizeObserver, Window};

use crate::config::Options;
use crate::driver::{BorderDriver, BoxSize};
use crate::error::{EffectError, EffectResult};
use crate::glow::{glow_layers, overlay_style};

mod render;

use render::{apply_style, AnimationFrames, CanvasSurface, FrameCallback};

type Driver = BorderDriver<CanvasSurface, AnimationFrames>;
type ResizeCallback = Closure<dyn FnMut(js_sys::Array)>;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
}

fn container_box(container: &HtmlElement) -> BoxSize {
    let rect = container.get_bounding_client_rect();
    BoxSize::new(rect.width(), rect.height())
}

fn create_div(document: &Document, class: &str) -> EffectResult<HtmlElement> {
    let el = document
        .create_element("div")
        .map_err(|err| EffectError::dom(format!("{err:?}")))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| EffectError::dom("div is not an HtmlElement"))?;
    el.set_class_name(class);
    Ok(el)
}

/// A glowing animated border drawn behind one container element.
///
/// The container is only measured and observed; the effect adds a single
/// decorative overlay as its first child and removes it on `destroy`.
#[wasm_bindgen]
pub struct ElectricBorder {
    overlay: Option<HtmlElement>,
    glow: Vec<HtmlElement>,
    options: Options,
    driver: Option<Rc<RefCell<Driver>>>,
    frame_callback: FrameCallback,
    observer: Option<(ResizeObserver, ResizeCallback)>,
}

#[wasm_bindgen]
impl ElectricBorder {
    /// Mounts the effect on `container`. `options` is a JSON object with
    /// `color`, `speed`, `chaos` and `cornerRadius`; blank means defaults.
    ///
    /// Never throws: whatever fails is logged and the border degrades to a
    /// static or absent one.
    #[wasm_bindgen(constructor)]
    pub fn new(container: HtmlElement, options: &str) -> ElectricBorder {
        let options = Options::from_json(options).unwrap_or_else(|err| {
            log::warn!("{err}; using default border options");
            Options::default()
        });
        let mut border = ElectricBorder {
            overlay: None,
            glow: Vec::new(),
            options,
            driver: None,
            frame_callback: Rc::new(RefCell::new(None)),
            observer: None,
        };
        if let Err(err) = border.mount(&container) {
            log::warn!("electric border disabled: {err}");
        }
        border
    }

    /// Replaces the configuration; the next frame picks it up.
    pub fn configure(&mut self, options: &str) {
        let options = match Options::from_json(options) {
            Ok(options) => options,
            Err(err) => {
                log::warn!("{err}; keeping current border options");
                return;
            }
        };
        self.options = options;
        self.restyle();
        if let Some(driver) = &self.driver {
            if let Ok(mut driver) = driver.try_borrow_mut() {
                driver.set_config(self.options.effect.clone());
                driver.set_tuning(self.options.tuning);
            }
        }
    }

    /// Stops the animation, disconnects resize observation and removes the
    /// overlay. Safe to call more than once.
    pub fn destroy(&mut self) {
        let mut torn_down = true;
        if let Some(driver) = self.driver.take() {
            torn_down = if let Ok(mut driver) = driver.try_borrow_mut() {
                driver.teardown();
                true
            } else {
                log::warn!("border driver busy during destroy; its pending frame was not cancelled");
                false
            };
        }
        if let Some((observer, _callback)) = self.observer.take() {
            observer.disconnect();
        }
        let callback = self.frame_callback.borrow_mut().take();
        if let Some(callback) = callback {
            if !torn_down {
                // A frame may still fire; with the driver gone it finds
                // nothing to upgrade, but the closure itself must stay valid.
                callback.forget();
            }
        }
        if let Some(overlay) = self.overlay.take() {
            overlay.remove();
        }
        self.glow.clear();
    }

    /// Whether the animation loop is running.
    #[wasm_bindgen(getter)]
    pub fn animating(&self) -> bool {
        self.driver
            .as_ref()
            .and_then(|d| d.try_borrow().ok().map(|d| d.is_live()))
            .unwrap_or(false)
    }
}

impl ElectricBorder {
    fn mount(&mut self, container: &HtmlElement) -> EffectResult<()> {
        let window = web_sys::window().ok_or_else(|| EffectError::dom("no window"))?;
        let document = window.document().ok_or_else(|| EffectError::dom("no document"))?;

        let overlay = create_div(&document, "eb-overlay")?;
        overlay
            .set_attribute("aria-hidden", "true")
            .map_err(|err| EffectError::dom(format!("{err:?}")))?;
        for layer in glow_layers(&self.options.effect) {
            let el = create_div(&document, layer.class)?;
            overlay
                .append_child(&el)
                .map_err(|err| EffectError::dom(format!("{err:?}")))?;
            self.glow.push(el);
        }
        container
            .insert_before(&overlay, container.first_child().as_ref())
            .map_err(|err| EffectError::dom(format!("{err:?}")))?;
        self.overlay = Some(overlay.clone());
        self.restyle();

        // From here on the glow layers are in place; the animated line is
        // extra and may fail on its own.
        let canvas = document
            .create_element("canvas")
            .map_err(|err| EffectError::dom(format!("{err:?}")))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| EffectError::dom("canvas is not an HtmlCanvasElement"))?;
        overlay
            .append_child(&canvas)
            .map_err(|err| EffectError::dom(format!("{err:?}")))?;
        let surface = CanvasSurface::new(canvas)?;

        let scheduler = AnimationFrames::new(window.clone(), self.frame_callback.clone());
        let driver = Rc::new(RefCell::new(BorderDriver::new(
            surface,
            scheduler,
            self.options.clone(),
            container_box(container),
            window.device_pixel_ratio(),
        )));

        let weak = Rc::downgrade(&driver);
        *self.frame_callback.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
            if let Some(driver) = weak.upgrade() {
                if let Ok(mut driver) = driver.try_borrow_mut() {
                    driver.on_frame(timestamp);
                }
            }
        }) as Box<dyn FnMut(f64)>));

        match observe_resize(container, &window, Rc::downgrade(&driver)) {
            Ok(observer) => self.observer = Some(observer),
            Err(err) => log::warn!("{err}; border keeps its initial size"),
        }

        driver.borrow_mut().start();
        self.driver = Some(driver);
        log::debug!("electric border mounted");
        Ok(())
    }

    fn restyle(&self) {
        let radius = self.options.effect.corner_radius;
        if let Some(overlay) = &self.overlay {
            apply_style(overlay, &overlay_style(radius));
        }
        for (el, layer) in self.glow.iter().zip(glow_layers(&self.options.effect)) {
            apply_style(el, &layer.style);
        }
    }
}

impl Drop for ElectricBorder {
    fn drop(&mut self) {
        self.destroy();
    }
}

fn observe_resize(
    container: &HtmlElement,
    window: &Window,
    driver: Weak<RefCell<Driver>>,
) -> EffectResult<(ResizeObserver, ResizeCallback)> {
    let target = container.clone();
    let window = window.clone();
    let callback: ResizeCallback = Closure::wrap(Box::new(move |_entries: js_sys::Array| {
        if let Some(driver) = driver.upgrade() {
            if let Ok(mut driver) = driver.try_borrow_mut() {
                driver.on_box_changed(container_box(&target), window.device_pixel_ratio());
            }
        }
    }) as Box<dyn FnMut(js_sys::Array)>);

    let observer = ResizeObserver::new(callback.as_ref().unchecked_ref())
        .map_err(|err| EffectError::observer(format!("{err:?}")))?;
    observer.observe(container);
    Ok((observer, callback))
}
