use crate::foundation::core::{Direction, Rect};
use crate::foundation::error::{SquigglyError, SquigglyResult};
use crate::foundation::math::ensure_finite;
use crate::layout::oracle::{LineLayout, LineSpacing};
use crate::layout::regions::{glyph_bottom, glyph_top};

/// Options for [`MonospaceLayout`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonoLayoutOpts {
    /// Wrap width, in cells.
    pub columns: usize,
    /// Horizontal advance of one cell, px.
    pub advance: f64,
    /// Height of the glyph box of one line, px.
    pub glyph_height: f64,
    pub spacing: LineSpacing,
    pub top_padding: f64,
    pub bottom_padding: f64,
    /// Force a direction for every paragraph. `None` detects it per paragraph.
    pub direction: Option<Direction>,
}

impl Default for MonoLayoutOpts {
    fn default() -> Self {
        Self {
            columns: 40,
            advance: 12.0,
            glyph_height: 24.0,
            spacing: LineSpacing::NONE,
            top_padding: 0.0,
            bottom_padding: 0.0,
            direction: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct MonoLine {
    start: usize,
    end: usize,
    visible: usize,
    direction: Direction,
}

/// Fixed-advance text layout with greedy word wrapping.
///
/// Each paragraph (split on `\n`) wraps independently to `columns` cells. Lines of right-to-left
/// paragraphs are right-aligned and their carets advance leftwards.
#[derive(Clone, Debug)]
pub struct MonospaceLayout {
    chars: Vec<char>,
    lines: Vec<MonoLine>,
    opts: MonoLayoutOpts,
}

impl MonospaceLayout {
    pub fn new(text: &str, opts: MonoLayoutOpts) -> SquigglyResult<Self> {
        validate_opts(&opts)?;

        let chars: Vec<char> = text.chars().collect();
        let mut lines = Vec::new();
        let mut para_start = 0usize;
        loop {
            let para_end = chars[para_start..]
                .iter()
                .position(|&c| c == '\n')
                .map(|i| para_start + i);
            let body_end = para_end.unwrap_or(chars.len());
            let body = &chars[para_start..body_end];
            let direction = opts.direction.unwrap_or_else(|| detect_direction(body));

            let first = lines.len();
            wrap_paragraph(body, para_start, opts.columns, direction, &mut lines);
            if para_end.is_some() {
                // The newline belongs to the paragraph's last line.
                if let Some(last) = lines[first..].last_mut() {
                    last.end += 1;
                }
            }

            match para_end {
                Some(i) => para_start = i + 1,
                None => break,
            }
        }

        Ok(Self { chars, lines, opts })
    }

    pub fn opts(&self) -> &MonoLayoutOpts {
        &self.opts
    }

    /// Total wrap width, px.
    pub fn width(&self) -> f64 {
        self.opts.columns as f64 * self.opts.advance
    }

    /// Height from the top of the first line to the bottom of the last, px.
    pub fn height(&self) -> f64 {
        self.line_bottom(self.lines.len() - 1)
    }

    /// Character range `[start, end)` of a line, including trailing whitespace.
    pub fn line_range(&self, line: usize) -> std::ops::Range<usize> {
        let l = &self.lines[line];
        l.start..l.end
    }

    /// Glyph-box rectangles of every visible, non-whitespace character.
    pub fn glyph_boxes(&self) -> Vec<Rect> {
        let mut out = Vec::new();
        for (i, line) in self.lines.iter().enumerate() {
            let top = glyph_top(self, i);
            let bottom = glyph_bottom(self, i);
            for col in 0..line.visible {
                if self.chars[line.start + col].is_whitespace() {
                    continue;
                }
                let a = self.caret_x(line, col);
                let b = self.caret_x(line, col + 1);
                out.push(Rect::new(a.min(b), top, a.max(b), bottom));
            }
        }
        out
    }

    fn spaced_height(&self) -> f64 {
        self.opts.glyph_height * self.opts.spacing.multiplier + self.opts.spacing.add
    }

    fn caret_x(&self, line: &MonoLine, col: usize) -> f64 {
        let dx = col as f64 * self.opts.advance;
        match line.direction {
            Direction::Ltr => dx,
            Direction::Rtl => self.width() - dx,
        }
    }
}

impl LineLayout for MonospaceLayout {
    fn text_len(&self) -> usize {
        self.chars.len()
    }

    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line_for_offset(&self, offset: usize) -> usize {
        self.lines
            .partition_point(|l| l.start <= offset)
            .saturating_sub(1)
    }

    fn line_top(&self, line: usize) -> f64 {
        if line == 0 {
            0.0
        } else {
            self.opts.top_padding + line as f64 * self.spaced_height()
        }
    }

    fn line_bottom(&self, line: usize) -> f64 {
        if line + 1 < self.lines.len() {
            self.line_top(line + 1)
        } else {
            self.opts.top_padding
                + line as f64 * self.spaced_height()
                + self.opts.glyph_height
                + self.opts.bottom_padding
        }
    }

    fn line_left(&self, line: usize) -> f64 {
        let l = &self.lines[line];
        self.caret_x(l, 0).min(self.caret_x(l, l.visible))
    }

    fn line_right(&self, line: usize) -> f64 {
        let l = &self.lines[line];
        self.caret_x(l, 0).max(self.caret_x(l, l.visible))
    }

    fn primary_horizontal(&self, offset: usize) -> f64 {
        let line = &self.lines[self.line_for_offset(offset)];
        let col = offset.saturating_sub(line.start).min(line.visible);
        self.caret_x(line, col)
    }

    fn paragraph_direction(&self, line: usize) -> Direction {
        self.lines[line].direction
    }

    fn top_padding(&self) -> f64 {
        self.opts.top_padding
    }

    fn bottom_padding(&self) -> f64 {
        self.opts.bottom_padding
    }

    fn spacing(&self) -> LineSpacing {
        self.opts.spacing
    }
}

fn validate_opts(opts: &MonoLayoutOpts) -> SquigglyResult<()> {
    if opts.columns == 0 {
        return Err(SquigglyError::validation("layout columns must be > 0"));
    }
    for (name, v) in [
        ("advance", opts.advance),
        ("glyph_height", opts.glyph_height),
        ("spacing multiplier", opts.spacing.multiplier),
    ] {
        let v = ensure_finite(name, v).map_err(SquigglyError::validation)?;
        if v <= 0.0 {
            return Err(SquigglyError::validation(format!("{name} must be > 0")));
        }
    }
    for (name, v) in [
        ("spacing add", opts.spacing.add),
        ("top_padding", opts.top_padding),
        ("bottom_padding", opts.bottom_padding),
    ] {
        ensure_finite(name, v).map_err(SquigglyError::validation)?;
    }
    Ok(())
}

/// Greedy wrap of one paragraph body (no newline) starting at char offset `base`.
fn wrap_paragraph(
    body: &[char],
    base: usize,
    columns: usize,
    direction: Direction,
    out: &mut Vec<MonoLine>,
) {
    let mut push = |start: usize, end: usize| {
        let trimmed = body[start..end]
            .iter()
            .rposition(|c| !c.is_whitespace())
            .map_or(0, |i| i + 1);
        out.push(MonoLine {
            start: base + start,
            end: base + end,
            visible: trimmed.min(columns),
            direction,
        });
    };

    let mut i = 0usize;
    loop {
        if body.len() - i <= columns {
            push(i, body.len());
            return;
        }
        let window_end = (i + columns).min(body.len() - 1);
        match (i + 1..=window_end).rev().find(|&j| body[j].is_whitespace()) {
            Some(j) => {
                push(i, j + 1);
                i = j + 1;
            }
            None => {
                push(i, i + columns);
                i += columns;
            }
        }
    }
}

/// Direction of the first strongly-directional character, LTR when there is none.
pub fn detect_direction(text: &[char]) -> Direction {
    for &c in text {
        if is_rtl_char(c) {
            return Direction::Rtl;
        }
        if c.is_alphabetic() {
            return Direction::Ltr;
        }
    }
    Direction::Ltr
}

fn is_rtl_char(c: char) -> bool {
    matches!(
        c as u32,
        0x0590..=0x05FF
            | 0x0600..=0x06FF
            | 0x0700..=0x074F
            | 0x0750..=0x077F
            | 0x08A0..=0x08FF
            | 0xFB1D..=0xFDFF
            | 0xFE70..=0xFEFF
    )
}

#[cfg(test)]
#[path = "../../tests/unit/layout/mono.rs"]
mod tests;
