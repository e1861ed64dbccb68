use crate::foundation::core::{Rect, Rgba8};
use crate::span::tessellate::{WaveGeometry, tessellate};
use crate::surface::backend::{DrawSurface, StrokeStyle};
use crate::surface::corner::CornerRounding;

/// A wavy decoration drawn under a range of text.
///
/// Parameters are read on every draw, so implementations may derive any of them from the
/// current time. [`WaveSpan`](crate::WaveSpan) is the standard implementation.
pub trait Squiggle {
    fn color(&self, now_ms: u64) -> Rgba8;
    fn line_width(&self) -> f64;
    /// Horizontal length of one full wave cycle, px.
    fn wave_period(&self) -> f64;
    /// Peak deviation from the baseline, px.
    fn amplitude(&self) -> f64;
    fn padding_left(&self) -> f64;
    fn padding_right(&self) -> f64;
    /// Vertical shift of the baseline, px. Positive moves the wave down.
    fn baseline_offset(&self) -> f64;
    /// Radian phase of the wave at its left end.
    fn wave_offset(&self, now_ms: u64) -> f64;

    /// Whether the coordinator must keep producing frames while this squiggle is attached.
    fn is_animated(&self) -> bool {
        true
    }

    fn stroke_cache(&mut self) -> &mut StrokeCache;

    fn geometry(&self) -> WaveGeometry {
        WaveGeometry {
            line_width: self.line_width(),
            wave_period: self.wave_period(),
            amplitude: self.amplitude(),
            padding_left: self.padding_left(),
            padding_right: self.padding_right(),
            baseline_offset: self.baseline_offset(),
        }
    }

    /// Draw the wave under one line's worth of text bounded by `bounds`.
    ///
    /// Inverted bounds are normalized; bounds too narrow for the stroke draw nothing.
    fn draw_line(&mut self, surface: &mut dyn DrawSurface, bounds: Rect, now_ms: u64) {
        let bounds = bounds.abs();
        let points = tessellate(
            &self.geometry(),
            bounds.x0,
            bounds.x1,
            bounds.y1,
            self.wave_offset(now_ms),
        );
        if points.is_empty() {
            return;
        }

        let (width, color, period) = (self.line_width(), self.color(now_ms), self.wave_period());
        let style = self.stroke_cache().style(width, color, period);
        surface.stroke_polyline(&points, style);
    }
}

/// Last stroke style used by a squiggle.
///
/// The corner rounding is rebuilt only when the wave period changes; width and color are
/// refreshed on every use.
#[derive(Clone, Debug, Default)]
pub struct StrokeCache {
    style: Option<StrokeStyle>,
    rebuilds: u64,
}

impl StrokeCache {
    pub fn style(&mut self, width: f64, color: Rgba8, period: f64) -> &StrokeStyle {
        let style = match self.style.take() {
            Some(s) if s.corners.radius() == period => s,
            _ => {
                self.rebuilds += 1;
                StrokeStyle::rounded(width, color, CornerRounding::new(period))
            }
        };
        let style = self.style.insert(style);
        style.width = width;
        style.color = color;
        style
    }

    /// How many times the corner rounding has been rebuilt.
    pub fn rebuilds(&self) -> u64 {
        self.rebuilds
    }
}
