//! Sampling a sine wave into a polyline.
//!
//! The wave is sampled every `period / SEGMENTS_PER_PERIOD` px so smoothness is independent of
//! zoom; the stroke's corner rounding then turns the polyline into a smooth curve. The last sample
//! is clamped to the end of the region, which can leave a shorter final segment.

use std::f64::consts::TAU;

use crate::foundation::core::Point;

/// Straight segments used to approximate one full wave cycle.
pub const SEGMENTS_PER_PERIOD: f64 = 10.0;

/// Upper bound on samples per px of stroke length; denser waves are not drawn.
pub const MAX_SAMPLES_PER_PX: f64 = 100.0;

/// Shape parameters of a wave, all in px.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveGeometry {
    pub line_width: f64,
    pub wave_period: f64,
    pub amplitude: f64,
    pub padding_left: f64,
    pub padding_right: f64,
    pub baseline_offset: f64,
}

impl WaveGeometry {
    /// Horizontal extent of the stroke centre line inside `[left, right]`, or `None` if empty.
    pub fn stroke_span(&self, left: f64, right: f64) -> Option<(f64, f64)> {
        let start = left + self.padding_left + self.line_width / 2.0;
        let end = right + self.padding_right - self.line_width / 2.0;
        if !start.is_finite() || !end.is_finite() || end < start {
            return None;
        }
        Some((start, end))
    }
}

/// Number of samples for a stroke `width` px wide.
pub fn point_count(width: f64, period: f64) -> usize {
    let segment = period / SEGMENTS_PER_PERIOD;
    (width / segment).ceil() as usize + 1
}

/// Sample the wave under a region whose bottom edge is `bottom`.
///
/// Returns no points when the region is too narrow for the stroke or the period is not a
/// positive finite number.
pub fn tessellate(
    g: &WaveGeometry,
    left: f64,
    right: f64,
    bottom: f64,
    wave_offset: f64,
) -> Vec<Point> {
    if !(g.wave_period.is_finite() && g.wave_period > 0.0) {
        return Vec::new();
    }
    let Some((start, end)) = g.stroke_span(left, right) else {
        return Vec::new();
    };

    let baseline = bottom + g.baseline_offset;
    let segment = g.wave_period / SEGMENTS_PER_PERIOD;
    let n = point_count(end - start, g.wave_period);
    let limit = ((end - start) * MAX_SAMPLES_PER_PX).ceil() as usize + 2;
    if n > limit {
        tracing::debug!(
            points = n,
            limit,
            period = g.wave_period,
            "wave period too small to sample, skipping"
        );
        return Vec::new();
    }

    (0..n)
        .map(|i| {
            let x = if i + 1 == n {
                end
            } else {
                (start + i as f64 * segment).min(end)
            };
            let phase = (x - start) / g.wave_period * TAU + wave_offset;
            Point::new(x, baseline + phase.sin() * g.amplitude)
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/span/tessellate.rs"]
mod tests;
