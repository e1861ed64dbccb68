use serde::{Deserialize, Serialize};

use crate::config::color::ColorDef;
use crate::foundation::error::{SquigglyError, SquigglyResult};
use crate::foundation::math::{dp, ensure_finite};
use crate::span::wave::{
    DEFAULT_AMPLITUDE_DP, DEFAULT_LINE_WIDTH_DP, DEFAULT_WAVE_PERIOD_DP, WaveSpan,
};

/// JSON description of one squiggle, lengths in dp.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SquiggleDef {
    #[serde(default)]
    pub color: ColorDef,
    #[serde(default = "default_line_width_dp")]
    pub line_width_dp: f64,
    #[serde(default = "default_wave_period_dp")]
    pub wave_period_dp: f64,
    #[serde(default = "default_amplitude_dp")]
    pub amplitude_dp: f64,
    #[serde(default)]
    pub padding_left_dp: f64,
    #[serde(default)]
    pub padding_right_dp: f64,
    #[serde(default)]
    pub baseline_offset_dp: f64,
    #[serde(default = "default_cycle_duration_ms")]
    pub cycle_duration_ms: i64,
    #[serde(default)]
    pub phase_offset_rad: f64,
    #[serde(default = "default_animated")]
    pub animated: bool,
}

fn default_line_width_dp() -> f64 {
    DEFAULT_LINE_WIDTH_DP
}

fn default_wave_period_dp() -> f64 {
    DEFAULT_WAVE_PERIOD_DP
}

fn default_amplitude_dp() -> f64 {
    DEFAULT_AMPLITUDE_DP
}

fn default_cycle_duration_ms() -> i64 {
    1000
}

fn default_animated() -> bool {
    true
}

impl Default for SquiggleDef {
    fn default() -> Self {
        Self {
            color: ColorDef::default(),
            line_width_dp: DEFAULT_LINE_WIDTH_DP,
            wave_period_dp: DEFAULT_WAVE_PERIOD_DP,
            amplitude_dp: DEFAULT_AMPLITUDE_DP,
            padding_left_dp: 0.0,
            padding_right_dp: 0.0,
            baseline_offset_dp: 0.0,
            cycle_duration_ms: default_cycle_duration_ms(),
            phase_offset_rad: 0.0,
            animated: true,
        }
    }
}

impl SquiggleDef {
    /// Build a [`WaveSpan`] at `density` px per dp, validating every field.
    pub fn to_span(&self, density: f64) -> SquigglyResult<WaveSpan> {
        let density = ensure_finite("density", density).map_err(SquigglyError::validation)?;
        if density <= 0.0 {
            return Err(SquigglyError::validation("density must be > 0"));
        }

        let finite = |name: &str, v: f64| ensure_finite(name, v).map_err(SquigglyError::validation);

        let line_width = finite("line_width_dp", self.line_width_dp)?;
        if line_width <= 0.0 {
            return Err(SquigglyError::validation("line_width_dp must be > 0"));
        }
        let wave_period = finite("wave_period_dp", self.wave_period_dp)?;
        if wave_period <= 0.0 {
            return Err(SquigglyError::validation("wave_period_dp must be > 0"));
        }
        let amplitude = finite("amplitude_dp", self.amplitude_dp)?;
        if amplitude < 0.0 {
            return Err(SquigglyError::validation("amplitude_dp must be >= 0"));
        }

        let mut span = WaveSpan::new(density);
        span.set_color(self.color.to_source());
        span.set_line_width(dp(line_width, density))?;
        span.set_wave_period(dp(wave_period, density))?;
        span.set_amplitude(dp(amplitude, density))?;
        span.set_padding_left(dp(finite("padding_left_dp", self.padding_left_dp)?, density));
        span.set_padding_right(dp(finite("padding_right_dp", self.padding_right_dp)?, density));
        span.set_baseline_offset(dp(
            finite("baseline_offset_dp", self.baseline_offset_dp)?,
            density,
        ));
        span.set_cycle_duration_ms(self.cycle_duration_ms)?;
        span.set_phase_offset(finite("phase_offset_rad", self.phase_offset_rad)?);
        span.set_animated(self.animated);
        Ok(span)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/style.rs"]
mod tests;
