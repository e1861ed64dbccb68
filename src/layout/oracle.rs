use crate::foundation::core::Direction;

/// Extra inter-line spacing applied by a layout.
///
/// A spaced line is `glyph_height * multiplier + add` tall.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LineSpacing {
    pub add: f64,
    pub multiplier: f64,
}

impl LineSpacing {
    pub const NONE: Self = Self {
        add: 0.0,
        multiplier: 1.0,
    };

    pub fn is_none(self) -> bool {
        self.add == Self::NONE.add && self.multiplier == Self::NONE.multiplier
    }
}

impl Default for LineSpacing {
    fn default() -> Self {
        Self::NONE
    }
}

/// Read-only queries against a host text layout.
///
/// Offsets are character offsets into the laid-out text, valid in `0..=text_len()`. Every query
/// should be cheap and free of side effects; they are issued every frame.
pub trait LineLayout {
    /// Length of the laid-out text, in characters.
    fn text_len(&self) -> usize;

    fn line_count(&self) -> usize;

    /// Visual line containing `offset`. `text_len()` maps to the last line.
    fn line_for_offset(&self, offset: usize) -> usize;

    /// Raw line top, including any top padding for the first line.
    fn line_top(&self, line: usize) -> f64;

    /// Raw line bottom, including spacing and any bottom padding for the last line.
    fn line_bottom(&self, line: usize) -> f64;

    fn line_left(&self, line: usize) -> f64;

    fn line_right(&self, line: usize) -> f64;

    /// Direction-aware caret position of `offset`.
    fn primary_horizontal(&self, offset: usize) -> f64;

    fn paragraph_direction(&self, line: usize) -> Direction;

    /// Extra space the layout adds above the first line.
    fn top_padding(&self) -> f64 {
        0.0
    }

    /// Extra space the layout adds below the last line.
    fn bottom_padding(&self) -> f64 {
        0.0
    }

    fn spacing(&self) -> LineSpacing {
        LineSpacing::NONE
    }
}
