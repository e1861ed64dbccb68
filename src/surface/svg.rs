use std::fmt::Write as _;

use crate::foundation::core::Point;
use crate::surface::backend::{Cap, DrawSurface, Join, StrokeStyle};

/// Vector surface that accumulates `<path>` elements for an SVG document.
#[derive(Clone, Debug)]
pub struct SvgSurface {
    width: f64,
    height: f64,
    body: String,
    paths: usize,
}

impl SvgSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            body: String::new(),
            paths: 0,
        }
    }

    pub fn path_count(&self) -> usize {
        self.paths
    }

    pub fn finish(self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n{body}</svg>\n",
            w = self.width,
            h = self.height,
            body = self.body,
        )
    }
}

impl DrawSurface for SvgSurface {
    fn stroke_polyline(&mut self, points: &[Point], style: &StrokeStyle) {
        if points.is_empty() {
            return;
        }
        let d = style.corners.apply(points).to_svg();
        let _ = writeln!(
            self.body,
            "  <path d=\"{d}\" fill=\"none\" stroke=\"{color}\" stroke-opacity=\"{opacity:.3}\" stroke-width=\"{width}\" stroke-linejoin=\"{join}\" stroke-linecap=\"{cap}\" shape-rendering=\"{aa}\"/>",
            color = style.color.to_hex_rgb(),
            opacity = f64::from(style.color.a) / 255.0,
            width = style.width,
            join = match style.join {
                Join::Bevel => "bevel",
                Join::Miter => "miter",
                Join::Round => "round",
            },
            cap = match style.cap {
                Cap::Butt => "butt",
                Cap::Square => "square",
                Cap::Round => "round",
            },
            aa = if style.anti_alias {
                "geometricPrecision"
            } else {
                "crispEdges"
            },
        );
        self.paths += 1;
    }
}
