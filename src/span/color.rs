use crate::animation::clock::{CycleDuration, progress};
use crate::foundation::core::Rgba8;

/// Where a squiggle's stroke color comes from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ColorSource {
    Solid(Rgba8),
    /// Hue sweeps through the full wheel once per animation cycle, starting at `hue_offset_deg`.
    HueCycle {
        hue_offset_deg: f64,
        saturation: f64,
        value: f64,
    },
}

impl ColorSource {
    pub fn resolve(&self, now_ms: u64, cycle: CycleDuration) -> Rgba8 {
        match *self {
            Self::Solid(c) => c,
            Self::HueCycle {
                hue_offset_deg,
                saturation,
                value,
            } => {
                let hue = (progress(now_ms, cycle) * 360.0 + hue_offset_deg).rem_euclid(360.0);
                Rgba8::from_hsv(hue, saturation, value)
            }
        }
    }
}

impl Default for ColorSource {
    fn default() -> Self {
        Self::Solid(Rgba8::RED)
    }
}

impl From<Rgba8> for ColorSource {
    fn from(c: Rgba8) -> Self {
        Self::Solid(c)
    }
}
