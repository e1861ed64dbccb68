use crate::foundation::core::{Affine, BezPath, Point, Rect, Rgba8};
use crate::foundation::error::{SquigglyError, SquigglyResult};
use crate::surface::backend::{Cap, DrawSurface, Join, StrokeStyle};

/// A rendered frame as RGBA8 pixels.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// RGBA8 bytes of pixel `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Convert to straight alpha in place (for PNG output).
    pub fn unpremultiply(&mut self) {
        if !self.premultiplied {
            return;
        }
        for px in self.data.chunks_exact_mut(4) {
            let a = u16::from(px[3]);
            if a == 0 || a == 255 {
                continue;
            }
            for c in &mut px[..3] {
                *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
            }
        }
        self.premultiplied = false;
    }
}

/// CPU raster surface backed by `vello_cpu`.
///
/// Strokes are always anti-aliased.
pub struct CpuSurface {
    ctx: vello_cpu::RenderContext,
    width: u16,
    height: u16,
}

impl CpuSurface {
    pub fn new(width: u32, height: u32) -> SquigglyResult<Self> {
        let to_u16 = |v: u32, what: &str| -> SquigglyResult<u16> {
            u16::try_from(v)
                .ok()
                .filter(|&v| v > 0)
                .ok_or_else(|| SquigglyError::render(format!("{what} must be in 1..=65535, got {v}")))
        };
        let width = to_u16(width, "surface width")?;
        let height = to_u16(height, "surface height")?;
        Ok(Self {
            ctx: vello_cpu::RenderContext::new(width, height),
            width,
            height,
        })
    }

    /// Surface filled with `color` before anything else is drawn.
    pub fn with_background(width: u32, height: u32, color: Rgba8) -> SquigglyResult<Self> {
        let mut s = Self::new(width, height)?;
        let full = Rect::new(0.0, 0.0, f64::from(s.width), f64::from(s.height));
        s.fill_rect(full, color);
        Ok(s)
    }

    pub fn width(&self) -> u32 {
        u32::from(self.width)
    }

    pub fn height(&self) -> u32 {
        u32::from(self.height)
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Rgba8) {
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(color_to_cpu(color));
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            rect.x0, rect.y0, rect.x1, rect.y1,
        ));
    }

    /// Rasterize everything drawn so far.
    pub fn finish(mut self) -> FrameRGBA {
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);
        FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        }
    }
}

impl DrawSurface for CpuSurface {
    fn stroke_polyline(&mut self, points: &[Point], style: &StrokeStyle) {
        if points.is_empty() {
            return;
        }
        let path = style.corners.apply(points);
        let stroke = vello_cpu::kurbo::Stroke::new(style.width)
            .with_join(join_to_cpu(style.join))
            .with_caps(cap_to_cpu(style.cap));

        self.ctx.set_transform(affine_to_cpu(Affine::IDENTITY));
        self.ctx.set_paint(color_to_cpu(style.color));
        self.ctx.set_stroke(stroke);
        self.ctx.stroke_path(&bezpath_to_cpu(&path));
    }
}

fn color_to_cpu(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn join_to_cpu(j: Join) -> vello_cpu::kurbo::Join {
    match j {
        Join::Bevel => vello_cpu::kurbo::Join::Bevel,
        Join::Miter => vello_cpu::kurbo::Join::Miter,
        Join::Round => vello_cpu::kurbo::Join::Round,
    }
}

fn cap_to_cpu(c: Cap) -> vello_cpu::kurbo::Cap {
    match c {
        Cap::Butt => vello_cpu::kurbo::Cap::Butt,
        Cap::Square => vello_cpu::kurbo::Cap::Square,
        Cap::Round => vello_cpu::kurbo::Cap::Round,
    }
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/surface/cpu.rs"]
mod tests;
