//! Arc-length parametrization of a rounded rectangle.
//!
//! The outline is walked clockwise from the left end of the top edge:
//! top edge, top-right arc, right edge, bottom-right arc, bottom edge,
//! bottom-left arc, left edge, top-left arc. A progress value `t` is turned
//! into a distance along that walk, so equal steps in `t` are equal steps
//! along the outline no matter the aspect ratio or radius.

use std::f64::consts::{FRAC_PI_2, PI};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Point on a circle: `center + radius * (cos θ, sin θ)` with
/// `θ = start_angle + progress * arc`.
pub fn corner_point(center: Point, radius: f64, start_angle: f64, arc: f64, progress: f64) -> Point {
    let theta = start_angle + progress * arc;
    Point::new(center.x + radius * theta.cos(), center.y + radius * theta.sin())
}

/// Largest usable corner radius for a `width × height` box.
pub fn clamp_radius(radius: f64, width: f64, height: f64) -> f64 {
    let max = (width.min(height) / 2.0).max(0.0);
    if radius.is_finite() {
        radius.clamp(0.0, max)
    } else {
        max
    }
}

/// A rounded rectangle whose radius has already been clamped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoundedRect {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
    radius: f64,
}

enum Segment {
    Line { from: Point, to: Point },
    Arc { center: Point, start_angle: f64 },
}

impl RoundedRect {
    /// `None` for degenerate boxes (non-positive or non-finite sides).
    pub fn new(left: f64, top: f64, width: f64, height: f64, radius: f64) -> Option<Self> {
        let sane = |v: f64| v.is_finite() && v > 0.0;
        if !sane(width) || !sane(height) || !left.is_finite() || !top.is_finite() {
            return None;
        }
        Some(Self {
            left,
            top,
            width,
            height,
            radius: clamp_radius(radius, width, height),
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Exact outline length.
    pub fn perimeter(&self) -> f64 {
        let r = self.radius;
        2.0 * (self.width - 2.0 * r) + 2.0 * (self.height - 2.0 * r) + 2.0 * PI * r
    }

    /// Cheap over-estimate `2(w + h) + 2πr` used to size the sample count.
    pub fn approx_perimeter(&self) -> f64 {
        2.0 * (self.width + self.height) + 2.0 * PI * self.radius
    }

    fn segments(&self) -> [(f64, Segment); 8] {
        let (l, t, w, h, r) = (self.left, self.top, self.width, self.height, self.radius);
        let (right, bottom) = (l + w, t + h);
        let horizontal = w - 2.0 * r;
        let vertical = h - 2.0 * r;
        let arc = FRAC_PI_2 * r;
        let line = |x0, y0, x1, y1| Segment::Line {
            from: Point::new(x0, y0),
            to: Point::new(x1, y1),
        };
        let corner = |cx, cy, start_angle| Segment::Arc {
            center: Point::new(cx, cy),
            start_angle,
        };
        [
            (horizontal, line(l + r, t, right - r, t)),
            (arc, corner(right - r, t + r, -FRAC_PI_2)),
            (vertical, line(right, t + r, right, bottom - r)),
            (arc, corner(right - r, bottom - r, 0.0)),
            (horizontal, line(right - r, bottom, l + r, bottom)),
            (arc, corner(l + r, bottom - r, FRAC_PI_2)),
            (vertical, line(l, bottom - r, l, t + r)),
            (arc, corner(l + r, t + r, PI)),
        ]
    }

    /// Point at progress `t` (wrapped into `[0, 1)`) along the outline.
    pub fn point_at(&self, t: f64) -> Point {
        let t = if t.is_finite() { t - t.floor() } else { 0.0 };
        let mut remaining = t * self.perimeter();

        for (length, segment) in self.segments() {
            if length <= 0.0 {
                continue;
            }
            if remaining <= length {
                let progress = remaining / length;
                return match segment {
                    Segment::Line { from, to } => Point::new(
                        from.x + (to.x - from.x) * progress,
                        from.y + (to.y - from.y) * progress,
                    ),
                    Segment::Arc { center, start_angle } => {
                        corner_point(center, self.radius, start_angle, FRAC_PI_2, progress)
                    }
                };
            }
            remaining -= length;
        }
        // Rounding pushed us past the last segment: that is the start point.
        Point::new(self.left + self.radius, self.top)
    }
}

/// Free-function form of [`RoundedRect::point_at`]; degenerate boxes map
/// every `t` to the top-left corner.
pub fn rounded_rect_point(t: f64, left: f64, top: f64, width: f64, height: f64, radius: f64) -> Point {
    match RoundedRect::new(left, top, width, height, radius) {
        Some(rect) => rect.point_at(t),
        None => Point::new(left, top),
    }
}
