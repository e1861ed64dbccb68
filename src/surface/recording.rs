use crate::foundation::core::Point;
use crate::surface::backend::{DrawSurface, StrokeStyle};

/// One recorded [`DrawSurface::stroke_polyline`] call.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeCall {
    pub points: Vec<Point>,
    pub style: StrokeStyle,
}

/// Surface that records stroke calls instead of drawing.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<StrokeCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl DrawSurface for RecordingSurface {
    fn stroke_polyline(&mut self, points: &[Point], style: &StrokeStyle) {
        self.calls.push(StrokeCall {
            points: points.to_vec(),
            style: *style,
        });
    }
}
