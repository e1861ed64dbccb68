use std::f64::consts::TAU;

/// Convert density-independent units to pixels.
pub fn dp(value: f64, density: f64) -> f64 {
    value * density
}

/// Map a normalized cycle position in [0, 1) to radians.
pub(crate) fn progress_to_radians(progress: f64) -> f64 {
    progress * TAU
}

pub(crate) fn ensure_finite(name: &str, v: f64) -> Result<f64, String> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(format!("{name} must be finite"))
    }
}
