//! Static decoration around the animated line, as inline CSS.
//!
//! Three layers sit under the canvas: a faint crisp border, the same border
//! blurred into a halo, and a wide blurred radial wash of the effect color.
//! They only change when the color or radius changes.

use crate::config::EffectConfig;
use crate::driver::SurfaceLayout;

/// One absolutely positioned decoration element.
#[derive(Clone, Debug, PartialEq)]
pub struct GlowLayer {
    /// Class name, for host stylesheets to hook into.
    pub class: &'static str,
    pub style: Vec<(&'static str, String)>,
}

impl GlowLayer {
    /// Value of a single property, if set.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.style
            .iter()
            .find(|(name, _)| *name == property)
            .map(|(_, value)| value.as_str())
    }
}

fn px(v: f64) -> String {
    format!("{}px", (v * 100.0).round() / 100.0)
}

fn fill_parent(radius: f64) -> Vec<(&'static str, String)> {
    vec![
        ("position", "absolute".into()),
        ("inset", "0".into()),
        ("border-radius", px(radius)),
        ("box-sizing", "border-box".into()),
        ("pointer-events", "none".into()),
    ]
}

/// The three glow layers for `config`, bottom-most first.
pub fn glow_layers(config: &EffectConfig) -> [GlowLayer; 3] {
    let radius = config.corner_radius.max(0.0);
    let color = config.color;

    let mut ambient = fill_parent(radius);
    ambient.extend([
        ("transform", "scale(1.05)".into()),
        (
            "background",
            format!("radial-gradient(circle, {}, transparent)", color.to_rgba_css(1.0)),
        ),
        ("filter", "blur(20px)".into()),
        ("opacity", "0.1".into()),
    ]);

    let mut halo = fill_parent(radius);
    halo.extend([
        ("border", format!("1px solid {}", color.to_rgba_css(0.4))),
        ("filter", "blur(2px)".into()),
    ]);

    let mut crisp = fill_parent(radius);
    crisp.push(("border", format!("1px solid {}", color.to_rgba_css(0.2))));

    [
        GlowLayer { class: "eb-glow-ambient", style: ambient },
        GlowLayer { class: "eb-glow-halo", style: halo },
        GlowLayer { class: "eb-glow-border", style: crisp },
    ]
}

/// Style of the overlay that holds the glow layers and the canvas. It never
/// takes pointer input and is hidden from assistive technology by the caller.
///
/// The negative z-index keeps it behind the wrapped content as long as the
/// container forms a stacking context (`isolation: isolate` is enough).
pub fn overlay_style(radius: f64) -> Vec<(&'static str, String)> {
    let mut style = fill_parent(radius.max(0.0));
    style.push(("overflow", "visible".into()));
    style.push(("z-index", "-1".into()));
    style
}

/// Logical placement of the canvas for `layout`.
pub fn canvas_style(layout: &SurfaceLayout) -> Vec<(&'static str, String)> {
    vec![
        ("position", "absolute".into()),
        ("left", px(-layout.offset)),
        ("top", px(-layout.offset)),
        ("width", px(layout.width)),
        ("height", px(layout.height)),
        ("pointer-events", "none".into()),
        ("display", "block".into()),
    ]
}
