use crate::foundation::core::{Point, Rgba8, Vec2};
use crate::surface::corner::CornerRounding;

pub use kurbo::{Cap, Join};

/// How a polyline is stroked.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub width: f64,
    pub color: Rgba8,
    pub join: Join,
    pub cap: Cap,
    pub anti_alias: bool,
    pub corners: CornerRounding,
}

impl StrokeStyle {
    /// Anti-aliased stroke with round joins and caps.
    pub fn rounded(width: f64, color: Rgba8, corners: CornerRounding) -> Self {
        Self {
            width,
            color,
            join: Join::Round,
            cap: Cap::Round,
            anti_alias: true,
            corners,
        }
    }
}

/// Something a squiggle can be drawn onto.
///
/// Coordinates are in the text's content space: `(0, 0)` is the top-left of the laid-out text.
pub trait DrawSurface {
    /// Stroke an open polyline, applying `style.corners` before stroking.
    fn stroke_polyline(&mut self, points: &[Point], style: &StrokeStyle);
}

impl<S: DrawSurface + ?Sized> DrawSurface for &mut S {
    fn stroke_polyline(&mut self, points: &[Point], style: &StrokeStyle) {
        (**self).stroke_polyline(points, style);
    }
}

/// Translates every point by `by` before forwarding to the wrapped surface.
pub struct Offset<S> {
    inner: S,
    by: Vec2,
}

impl<S: DrawSurface> Offset<S> {
    pub fn new(inner: S, by: Vec2) -> Self {
        Self { inner, by }
    }
}

impl<S: DrawSurface> DrawSurface for Offset<S> {
    fn stroke_polyline(&mut self, points: &[Point], style: &StrokeStyle) {
        if self.by == Vec2::ZERO {
            self.inner.stroke_polyline(points, style);
            return;
        }
        let moved: Vec<Point> = points.iter().map(|&p| p + self.by).collect();
        self.inner.stroke_polyline(&moved, style);
    }
}
