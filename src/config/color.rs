use serde::{Deserialize, Serialize};

use crate::foundation::core::Rgba8;
use crate::span::color::ColorSource;

/// JSON-facing color: a fixed color or a hue cycle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum ColorDef {
    /// Straight RGBA, channels in 0..=1.
    Rgba { r: f64, g: f64, b: f64, a: f64 },
    HueCycle {
        hue_offset_deg: f64,
        saturation: f64,
        value: f64,
    },
}

impl ColorDef {
    pub(crate) fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self::Rgba { r, g, b, a }
    }

    pub fn to_source(self) -> ColorSource {
        fn to_u8(x: f64) -> u8 {
            (x.clamp(0.0, 1.0) * 255.0).round() as u8
        }

        match self {
            Self::Rgba { r, g, b, a } => {
                ColorSource::Solid(Rgba8::new(to_u8(r), to_u8(g), to_u8(b), to_u8(a)))
            }
            Self::HueCycle {
                hue_offset_deg,
                saturation,
                value,
            } => ColorSource::HueCycle {
                hue_offset_deg,
                saturation,
                value,
            },
        }
    }
}

impl Default for ColorDef {
    fn default() -> Self {
        Self::rgba(1.0, 0.0, 0.0, 1.0)
    }
}

impl<'de> Deserialize<'de> for ColorDef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct HueCycleObj {
            #[serde(default)]
            hue_offset_deg: f64,
            #[serde(default = "one")]
            saturation: f64,
            #[serde(default = "one")]
            value: f64,
        }

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            HueCycle {
                hue_cycle: HueCycleObj,
            },
            RgbaObj {
                r: f64,
                g: f64,
                b: f64,
                #[serde(default = "one")]
                a: f64,
            },
            HslaObj {
                h: f64,
                s: f64,
                l: f64,
                #[serde(default = "one")]
                a: f64,
            },
            Arr(Vec<f64>),
        }

        fn one() -> f64 {
            1.0
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => parse_hex(&s).map_err(serde::de::Error::custom),
            Repr::HueCycle { hue_cycle: h } => Ok(Self::HueCycle {
                hue_offset_deg: h.hue_offset_deg,
                saturation: h.saturation,
                value: h.value,
            }),
            Repr::RgbaObj { r, g, b, a } => Ok(Self::rgba(r, g, b, a)),
            Repr::HslaObj { h, s, l, a } => Ok(hsla_to_rgba(h, s, l, a)),
            Repr::Arr(v) => match v.as_slice() {
                &[r, g, b] => Ok(Self::rgba(r, g, b, 1.0)),
                &[r, g, b, a] => Ok(Self::rgba(r, g, b, a)),
                _ => Err(serde::de::Error::custom(
                    "rgba array must have len 3 ([r,g,b]) or 4 ([r,g,b,a])",
                )),
            },
        }
    }
}

fn parse_hex(s: &str) -> Result<ColorDef, String> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);
    if !s.is_ascii() {
        return Err("hex color must be #RRGGBB or #RRGGBBAA (case-insensitive)".to_owned());
    }

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    let (r, g, b, a) = match s.len() {
        6 => (hex_byte(&s[0..2])?, hex_byte(&s[2..4])?, hex_byte(&s[4..6])?, 255),
        8 => (
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
            hex_byte(&s[6..8])?,
        ),
        _ => {
            return Err("hex color must be #RRGGBB or #RRGGBBAA (case-insensitive)".to_owned());
        }
    };

    Ok(ColorDef::rgba(
        f64::from(r) / 255.0,
        f64::from(g) / 255.0,
        f64::from(b) / 255.0,
        f64::from(a) / 255.0,
    ))
}

fn hsla_to_rgba(h: f64, s: f64, l: f64, a: f64) -> ColorDef {
    let h = h.rem_euclid(360.0) / 360.0;
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);

    if s == 0.0 {
        return ColorDef::rgba(l, l, l, a);
    }

    fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }
        if t < 1.0 / 6.0 {
            return p + (q - p) * 6.0 * t;
        }
        if t < 1.0 / 2.0 {
            return q;
        }
        if t < 2.0 / 3.0 {
            return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
        }
        p
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;

    ColorDef::rgba(
        hue_to_rgb(p, q, h + 1.0 / 3.0),
        hue_to_rgb(p, q, h),
        hue_to_rgb(p, q, h - 1.0 / 3.0),
        a,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/config/color.rs"]
mod tests;
