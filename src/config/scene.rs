use std::fs::File;
use std::io::BufReader;
use std::ops::Range;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::color::ColorDef;
use crate::config::style::SquiggleDef;
use crate::foundation::core::{Direction, Rgba8, Vec2};
use crate::foundation::error::{SquigglyError, SquigglyResult};
use crate::layout::mono::{MonoLayoutOpts, MonospaceLayout};
use crate::layout::oracle::LineSpacing;
use crate::span::color::ColorSource;
use crate::surface::cpu::{CpuSurface, FrameRGBA};
use crate::surface::svg::SvgSurface;
use crate::view::coordinator::{DrawStats, FrameHost};
use crate::view::text::DecoratedText;
use crate::view::text_view::SquigglyTextView;

/// JSON description of a decorated text block on a canvas.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneDef {
    pub text: String,
    /// Canvas size, px.
    pub width: u32,
    pub height: u32,
    #[serde(default = "default_density")]
    pub density: f64,
    #[serde(default = "default_columns")]
    pub columns: usize,
    #[serde(default = "default_advance")]
    pub advance: f64,
    #[serde(default = "default_glyph_height")]
    pub glyph_height: f64,
    #[serde(default)]
    pub spacing: LineSpacing,
    #[serde(default)]
    pub top_padding: f64,
    #[serde(default)]
    pub bottom_padding: f64,
    #[serde(default)]
    pub direction: Option<Direction>,
    /// Distance from the canvas origin to the text origin, `[x, y]`.
    #[serde(default)]
    pub insets: [f64; 2],
    #[serde(default = "default_background")]
    pub background: ColorDef,
    /// Placeholder glyph boxes are painted in this color; `None` leaves them out.
    #[serde(default)]
    pub glyph_color: Option<ColorDef>,
    #[serde(default)]
    pub decorations: Vec<DecorationDef>,
}

/// A squiggle attached to the char range `start..end`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DecorationDef {
    pub start: usize,
    pub end: usize,
    #[serde(default)]
    pub style: SquiggleDef,
}

fn default_density() -> f64 {
    1.0
}

fn default_columns() -> usize {
    MonoLayoutOpts::default().columns
}

fn default_advance() -> f64 {
    MonoLayoutOpts::default().advance
}

fn default_glyph_height() -> f64 {
    MonoLayoutOpts::default().glyph_height
}

fn default_background() -> ColorDef {
    ColorDef::rgba(1.0, 1.0, 1.0, 1.0)
}

/// A parsed scene file.
#[derive(Clone, Debug)]
pub struct Scene {
    def: SceneDef,
}

impl Scene {
    pub fn new(def: SceneDef) -> Self {
        Self { def }
    }

    /// Parse a scene from JSON.
    pub fn from_reader<R: std::io::Read>(r: R) -> SquigglyResult<Self> {
        let def: SceneDef = serde_json::from_reader(r)
            .map_err(|e| SquigglyError::serde(format!("parse scene JSON: {e}")))?;
        Ok(Self { def })
    }

    /// Parse a scene from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> SquigglyResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            SquigglyError::validation(format!("open scene JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn def(&self) -> &SceneDef {
        &self.def
    }

    pub fn layout_opts(&self) -> MonoLayoutOpts {
        MonoLayoutOpts {
            columns: self.def.columns,
            advance: self.def.advance,
            glyph_height: self.def.glyph_height,
            spacing: self.def.spacing,
            top_padding: self.def.top_padding,
            bottom_padding: self.def.bottom_padding,
            direction: self.def.direction,
        }
    }

    /// Lay out the text and attach every decoration.
    pub fn decorated_text(&self) -> SquigglyResult<(DecoratedText, MonospaceLayout)> {
        let layout = MonospaceLayout::new(&self.def.text, self.layout_opts())?;
        let mut text = DecoratedText::new(self.def.text.as_str());
        for (i, d) in self.def.decorations.iter().enumerate() {
            let span = d
                .style
                .to_span(self.def.density)
                .map_err(|e| SquigglyError::validation(format!("decorations[{i}]: {e}")))?;
            let range: Range<usize> = d.start..d.end;
            text.attach(span, range)?;
        }
        Ok((text, layout))
    }

    /// Build a focused view over this scene and start its frame loop on `host`.
    pub fn renderer(&self, host: &mut dyn FrameHost) -> SquigglyResult<SceneRenderer> {
        let background = solid_color("background", self.def.background)?;
        let glyph_color = self
            .def
            .glyph_color
            .map(|c| solid_color("glyph_color", c))
            .transpose()?;

        let (text, layout) = self.decorated_text()?;
        let [ix, iy] = self.def.insets;
        let mut view = SquigglyTextView::new(true).with_insets(Vec2::new(ix, iy));
        view.set_content(text, Some(layout), host);

        Ok(SceneRenderer {
            view,
            width: self.def.width,
            height: self.def.height,
            background,
            glyph_color,
        })
    }
}

fn solid_color(field: &str, c: ColorDef) -> SquigglyResult<Rgba8> {
    match c.to_source() {
        ColorSource::Solid(rgba) => Ok(rgba),
        ColorSource::HueCycle { .. } => Err(SquigglyError::validation(format!(
            "{field} must be a fixed color"
        ))),
    }
}

/// Draws a scene's view onto raster or vector surfaces.
pub struct SceneRenderer {
    view: SquigglyTextView<MonospaceLayout>,
    width: u32,
    height: u32,
    background: Rgba8,
    glyph_color: Option<Rgba8>,
}

impl SceneRenderer {
    pub fn view(&self) -> &SquigglyTextView<MonospaceLayout> {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut SquigglyTextView<MonospaceLayout> {
        &mut self.view
    }

    /// Rasterize the scene at `now_ms`.
    pub fn render_frame(&mut self, now_ms: u64) -> SquigglyResult<(FrameRGBA, DrawStats)> {
        let mut surface = CpuSurface::with_background(self.width, self.height, self.background)?;
        if let (Some(color), Some(layout)) = (self.glyph_color, self.view.layout()) {
            let by = self.view.insets();
            for glyph in layout.glyph_boxes() {
                surface.fill_rect(glyph + by, color);
            }
        }
        let stats = self.view.draw(&mut surface, now_ms)?;
        Ok((surface.finish(), stats))
    }

    /// Squiggles at `now_ms` as an SVG document.
    pub fn render_svg(&mut self, now_ms: u64) -> SquigglyResult<(String, DrawStats)> {
        let mut surface = SvgSurface::new(f64::from(self.width), f64::from(self.height));
        let stats = self.view.draw(&mut surface, now_ms)?;
        Ok((surface.finish(), stats))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/scene.rs"]
mod tests;
