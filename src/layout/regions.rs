//! Splitting a character range into one rectangle per visual line.

use crate::foundation::core::Rect;
use crate::foundation::error::{SquigglyError, SquigglyResult};
use crate::layout::oracle::LineLayout;

/// The part of a decorated range that falls on one visual line.
///
/// `start_x`/`end_x` follow the text direction, so `start_x > end_x` is legal; renderers use
/// [`LineRegion::left`] and [`LineRegion::right`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineRegion {
    pub line: usize,
    pub top: f64,
    pub bottom: f64,
    pub start_x: f64,
    pub end_x: f64,
}

impl LineRegion {
    pub fn left(&self) -> f64 {
        self.start_x.min(self.end_x)
    }

    pub fn right(&self) -> f64 {
        self.start_x.max(self.end_x)
    }

    pub fn width(&self) -> f64 {
        self.right() - self.left()
    }

    /// Axis-aligned bounds with left <= right.
    pub fn to_rect(&self) -> Rect {
        Rect::new(self.left(), self.top, self.right(), self.bottom)
    }
}

/// Decompose `[start, end)` into per-line regions, in increasing line order.
///
/// Offsets past the end of the text, or `start > end`, mean the decoration's attachment is broken
/// and are reported as [`SquigglyError::Layout`].
pub fn decompose<L: LineLayout + ?Sized>(
    layout: &L,
    start: usize,
    end: usize,
) -> SquigglyResult<Vec<LineRegion>> {
    let len = layout.text_len();
    if start > end {
        return Err(SquigglyError::layout(format!(
            "range start {start} is after end {end}"
        )));
    }
    if end > len {
        return Err(SquigglyError::layout(format!(
            "range end {end} is past text length {len}"
        )));
    }
    if layout.line_count() == 0 {
        return Err(SquigglyError::layout("layout has no lines"));
    }

    let start_line = layout.line_for_offset(start);
    let end_line = layout.line_for_offset(end);
    let start_x = layout.primary_horizontal(start);
    let end_x = layout.primary_horizontal(end);

    if start_line == end_line {
        return Ok(vec![LineRegion {
            line: start_line,
            top: glyph_top(layout, start_line),
            bottom: glyph_bottom(layout, start_line),
            start_x: start_x.min(end_x),
            end_x: start_x.max(end_x),
        }]);
    }

    let mut out = Vec::with_capacity(end_line - start_line + 1);
    out.push(LineRegion {
        line: start_line,
        top: glyph_top(layout, start_line),
        bottom: glyph_bottom(layout, start_line),
        start_x,
        end_x: trailing_edge(layout, start_line),
    });
    for line in start_line + 1..end_line {
        out.push(LineRegion {
            line,
            top: glyph_top(layout, line),
            bottom: glyph_bottom(layout, line),
            start_x: layout.line_left(line),
            end_x: layout.line_right(line),
        });
    }
    out.push(LineRegion {
        line: end_line,
        top: glyph_top(layout, end_line),
        bottom: glyph_bottom(layout, end_line),
        start_x: leading_edge(layout, end_line),
        end_x,
    });
    Ok(out)
}

/// Edge where text on `line` ends: left for RTL paragraphs, right otherwise.
fn trailing_edge<L: LineLayout + ?Sized>(layout: &L, line: usize) -> f64 {
    if layout.paragraph_direction(line).is_rtl() {
        layout.line_left(line)
    } else {
        layout.line_right(line)
    }
}

/// Edge where text on `line` begins: right for RTL paragraphs, left otherwise.
fn leading_edge<L: LineLayout + ?Sized>(layout: &L, line: usize) -> f64 {
    if layout.paragraph_direction(line).is_rtl() {
        layout.line_right(line)
    } else {
        layout.line_left(line)
    }
}

/// Line top without the layout's top padding on the first line.
pub(crate) fn glyph_top<L: LineLayout + ?Sized>(layout: &L, line: usize) -> f64 {
    let top = layout.line_top(line);
    if line == 0 {
        top + layout.top_padding()
    } else {
        top
    }
}

/// Line bottom without inter-line spacing, and without the bottom padding on the last line.
pub(crate) fn glyph_bottom<L: LineLayout + ?Sized>(layout: &L, line: usize) -> f64 {
    let last = layout.line_count().saturating_sub(1);
    let bottom = layout.line_bottom(line);
    if line == last {
        return bottom - layout.bottom_padding();
    }

    let spacing = layout.spacing();
    if spacing.is_none() {
        return bottom;
    }
    let extra = if spacing.multiplier != 1.0 {
        let height = layout.line_top(line + 1) - glyph_top(layout, line);
        height - (height - spacing.add) / spacing.multiplier
    } else {
        spacing.add
    };
    bottom - extra
}

#[cfg(test)]
#[path = "../../tests/unit/layout/regions.rs"]
mod tests;
