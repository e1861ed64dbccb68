use crate::foundation::core::{BezPath, Point, Vec2};

/// Replaces every interior corner of a polyline with a quadratic curve.
///
/// The curve around vertex `b` starts `min(radius, |ab| / 2)` before `b` along the incoming
/// segment and ends `min(radius, |bc| / 2)` after it along the outgoing one, with `b` as the
/// control point. With a radius of at least half a segment, consecutive curves meet at segment
/// midpoints and the polyline becomes a smooth quadratic spline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CornerRounding {
    radius: f64,
}

impl CornerRounding {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn apply(&self, points: &[Point]) -> BezPath {
        let mut path = BezPath::new();
        let Some((&first, rest)) = points.split_first() else {
            return path;
        };
        path.move_to(first);

        if points.len() < 3 || self.radius.is_nan() || self.radius <= 0.0 {
            for &p in rest {
                path.line_to(p);
            }
            return path;
        }

        for w in points.windows(3) {
            let (a, b, c) = (w[0], w[1], w[2]);
            path.line_to(b - self.step(a, b));
            path.quad_to(b, b + self.step(b, c));
        }
        if let Some(&last) = points.last() {
            path.line_to(last);
        }
        path
    }

    fn step(&self, from: Point, to: Point) -> Vec2 {
        let v = to - from;
        let len = v.hypot();
        if len <= self.radius * 2.0 {
            v * 0.5
        } else {
            v * (self.radius / len)
        }
    }
}
