use crate::geometry::draw::PathSink;
use crate::math::{lerp_point, safe_normalize, Point2, Vector2};

use super::{CurvePoint, SegmentGeometry};

/// A straight segment from `from` to `to`.
///
/// The tangent is constant along the segment. A zero-length line has a
/// zero tangent rather than NaN.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSegment {
    from: Point2,
    to: Point2,
    direction: Vector2,
    length: f64,
}

impl LineSegment {
    /// Creates a new line segment.
    #[must_use]
    pub fn new(from: Point2, to: Point2) -> Self {
        let vector = to - from;
        Self {
            from,
            to,
            direction: safe_normalize(vector),
            length: vector.norm(),
        }
    }

    /// Returns the start point.
    #[must_use]
    pub fn from(&self) -> &Point2 {
        &self.from
    }

    /// Returns the end point.
    #[must_use]
    pub fn to(&self) -> &Point2 {
        &self.to
    }

    /// Returns the unit direction, or zero for a degenerate line.
    #[must_use]
    pub fn direction(&self) -> &Vector2 {
        &self.direction
    }

    #[allow(clippy::float_cmp)]
    fn position(&self, distance: f64) -> Point2 {
        // Endpoints are returned verbatim so that joints compare exactly.
        if distance == 0.0 {
            self.from
        } else if distance == 1.0 {
            self.to
        } else {
            lerp_point(&self.from, &self.to, distance)
        }
    }
}

impl SegmentGeometry for LineSegment {
    fn arc_length(&self) -> f64 {
        self.length
    }

    fn point(&self, distance: f64) -> CurvePoint {
        CurvePoint::new(self.position(distance), self.direction)
    }

    fn start(&self) -> Point2 {
        self.from
    }

    fn end(&self) -> Point2 {
        self.to
    }

    fn draw<S: PathSink + ?Sized>(
        &self,
        sink: &mut S,
        start: f64,
        end: f64,
        move_to: bool,
    ) -> (CurvePoint, CurvePoint) {
        let first = self.point(start);
        let last = self.point(end);
        if move_to {
            sink.move_to(first.position);
        }
        sink.line_to(last.position);
        (first, last)
    }
}
