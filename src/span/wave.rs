use crate::animation::clock::{CycleDuration, phase};
use crate::foundation::core::Rgba8;
use crate::foundation::error::{SquigglyError, SquigglyResult};
use crate::foundation::math::{dp, ensure_finite};
use crate::span::color::ColorSource;
use crate::span::squiggle::{Squiggle, StrokeCache};

/// Default stroke width, dp.
pub const DEFAULT_LINE_WIDTH_DP: f64 = 4.0;
/// Default wave period, dp.
pub const DEFAULT_WAVE_PERIOD_DP: f64 = 48.0;
/// Default amplitude, dp.
pub const DEFAULT_AMPLITUDE_DP: f64 = 4.0;

/// The standard squiggle: a sine wave whose phase advances once per cycle.
///
/// All lengths are in px. Attributes are plain state; set them between frames.
#[derive(Clone, Debug)]
pub struct WaveSpan {
    color: ColorSource,
    line_width: f64,
    wave_period: f64,
    amplitude: f64,
    padding_left: f64,
    padding_right: f64,
    baseline_offset: f64,
    cycle: CycleDuration,
    phase_offset_rad: f64,
    animated: bool,
    stroke: StrokeCache,
}

impl WaveSpan {
    /// A span with the default parameters at the given display density (px per dp).
    pub fn new(density: f64) -> Self {
        Self {
            color: ColorSource::default(),
            line_width: dp(DEFAULT_LINE_WIDTH_DP, density),
            wave_period: dp(DEFAULT_WAVE_PERIOD_DP, density),
            amplitude: dp(DEFAULT_AMPLITUDE_DP, density),
            padding_left: 0.0,
            padding_right: 0.0,
            baseline_offset: 0.0,
            cycle: CycleDuration::DEFAULT,
            phase_offset_rad: 0.0,
            animated: true,
            stroke: StrokeCache::default(),
        }
    }

    pub fn set_color(&mut self, color: impl Into<ColorSource>) {
        self.color = color.into();
    }

    /// Stroke width. Must be finite and > 0.
    pub fn set_line_width(&mut self, px: f64) -> SquigglyResult<()> {
        self.line_width = positive("line width", px)?;
        Ok(())
    }

    /// Horizontal length of one full cycle. Must be finite and > 0.
    pub fn set_wave_period(&mut self, px: f64) -> SquigglyResult<()> {
        self.wave_period = positive("wave period", px)?;
        Ok(())
    }

    /// Peak deviation from the baseline; the wave is twice this tall. Must be finite and >= 0.
    pub fn set_amplitude(&mut self, px: f64) -> SquigglyResult<()> {
        let px = ensure_finite("amplitude", px).map_err(SquigglyError::validation)?;
        if px < 0.0 {
            return Err(SquigglyError::validation(format!(
                "amplitude must be >= 0, got {px}"
            )));
        }
        self.amplitude = px;
        Ok(())
    }

    pub fn set_padding_left(&mut self, px: f64) {
        self.padding_left = px;
    }

    pub fn set_padding_right(&mut self, px: f64) {
        self.padding_right = px;
    }

    pub fn set_baseline_offset(&mut self, px: f64) {
        self.baseline_offset = px;
    }

    /// Time for one full cycle. Non-positive durations are rejected.
    pub fn set_cycle_duration_ms(&mut self, ms: i64) -> SquigglyResult<()> {
        self.cycle = CycleDuration::new(ms)?;
        Ok(())
    }

    /// Constant phase shift, e.g. to offset one of several squiggles layered on the same text.
    pub fn set_phase_offset(&mut self, radians: f64) {
        self.phase_offset_rad = radians;
    }

    /// A static span is drawn at its phase offset and never keeps frames coming.
    pub fn set_animated(&mut self, animated: bool) {
        self.animated = animated;
    }

    pub fn color_source(&self) -> ColorSource {
        self.color
    }

    pub fn cycle_duration(&self) -> CycleDuration {
        self.cycle
    }

    pub fn phase_offset(&self) -> f64 {
        self.phase_offset_rad
    }

    /// Normalized position within the current cycle at `now_ms`.
    pub fn animation_progress(&self, now_ms: u64) -> f64 {
        crate::animation::clock::progress(now_ms, self.cycle)
    }
}

fn positive(name: &str, v: f64) -> SquigglyResult<f64> {
    let v = ensure_finite(name, v).map_err(SquigglyError::validation)?;
    if v <= 0.0 {
        return Err(SquigglyError::validation(format!("{name} must be > 0, got {v}")));
    }
    Ok(v)
}

impl Default for WaveSpan {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Squiggle for WaveSpan {
    fn color(&self, now_ms: u64) -> Rgba8 {
        self.color.resolve(now_ms, self.cycle)
    }

    fn line_width(&self) -> f64 {
        self.line_width
    }

    fn wave_period(&self) -> f64 {
        self.wave_period
    }

    fn amplitude(&self) -> f64 {
        self.amplitude
    }

    fn padding_left(&self) -> f64 {
        self.padding_left
    }

    fn padding_right(&self) -> f64 {
        self.padding_right
    }

    fn baseline_offset(&self) -> f64 {
        self.baseline_offset
    }

    fn wave_offset(&self, now_ms: u64) -> f64 {
        if self.animated {
            phase(now_ms, self.cycle, self.phase_offset_rad)
        } else {
            self.phase_offset_rad
        }
    }

    fn is_animated(&self) -> bool {
        self.animated
    }

    fn stroke_cache(&mut self) -> &mut StrokeCache {
        &mut self.stroke
    }
}

#[cfg(test)]
#[path = "../../tests/unit/span/wave.rs"]
mod tests;
