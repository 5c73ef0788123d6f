mod arc;
mod bezier;
mod line;

pub use arc::ArcSegment;
pub use bezier::{CubicBezierSegment, QuadBezierSegment};
pub use line::LineSegment;

use crate::geometry::draw::PathSink;
use crate::math::{left_normal, safe_normalize, Point2, Vector2, TOLERANCE};

/// A point on a segment together with its local frame.
///
/// `tangent` is the unit traversal direction (zero on degenerate geometry)
/// and `normal` is the tangent rotated by 90°.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    pub position: Point2,
    pub tangent: Vector2,
    pub normal: Vector2,
}

impl CurvePoint {
    /// Creates a curve point, normalizing `direction` and deriving the normal.
    #[must_use]
    pub fn new(position: Point2, direction: Vector2) -> Self {
        let tangent = safe_normalize(direction);
        Self {
            position,
            tangent,
            normal: left_normal(tangent),
        }
    }
}

impl Default for CurvePoint {
    fn default() -> Self {
        Self::new(Point2::origin(), Vector2::zeros())
    }
}

/// Common contract of all segment kinds.
///
/// Distances passed to [`point`](SegmentGeometry::point) and
/// [`draw`](SegmentGeometry::draw) are fractions of the segment's arc
/// length in `[0, 1]`. Out-of-range values are not guarded.
pub trait SegmentGeometry {
    /// Length of the segment. Non-negative and finite.
    fn arc_length(&self) -> f64;

    /// Point at the given arc-length fraction. `point(0)` and `point(1)`
    /// return [`start`](Self::start) and [`end`](Self::end) exactly.
    fn point(&self, distance: f64) -> CurvePoint;

    /// Exact start point.
    fn start(&self) -> Point2;

    /// Exact end point.
    fn end(&self) -> Point2;

    /// Emits the `[start, end]` portion of the segment into `sink`,
    /// preceded by a `move_to` when `move_to` is set. Returns the curve
    /// points at both ends of the drawn range.
    fn draw<S: PathSink + ?Sized>(
        &self,
        sink: &mut S,
        start: f64,
        end: f64,
        move_to: bool,
    ) -> (CurvePoint, CurvePoint);
}

/// An atomic piece of a curve profile.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    Line(LineSegment),
    QuadBezier(QuadBezierSegment),
    CubicBezier(CubicBezierSegment),
    Arc(ArcSegment),
}

impl Segment {
    /// Creates a line segment.
    #[must_use]
    pub fn line(from: Point2, to: Point2) -> Self {
        Self::Line(LineSegment::new(from, to))
    }

    /// Creates a quadratic Bézier segment.
    #[must_use]
    pub fn quad(p0: Point2, p1: Point2, p2: Point2) -> Self {
        Self::QuadBezier(QuadBezierSegment::new(p0, p1, p2))
    }

    /// Creates a cubic Bézier segment.
    #[must_use]
    pub fn cubic(p0: Point2, p1: Point2, p2: Point2, p3: Point2) -> Self {
        Self::CubicBezier(CubicBezierSegment::new(p0, p1, p2, p3))
    }

    /// Returns whether this is a straight line.
    #[must_use]
    pub fn is_line(&self) -> bool {
        matches!(self, Self::Line(_))
    }
}

impl SegmentGeometry for Segment {
    fn arc_length(&self) -> f64 {
        match self {
            Self::Line(s) => s.arc_length(),
            Self::QuadBezier(s) => s.arc_length(),
            Self::CubicBezier(s) => s.arc_length(),
            Self::Arc(s) => s.arc_length(),
        }
    }

    fn point(&self, distance: f64) -> CurvePoint {
        match self {
            Self::Line(s) => s.point(distance),
            Self::QuadBezier(s) => s.point(distance),
            Self::CubicBezier(s) => s.point(distance),
            Self::Arc(s) => s.point(distance),
        }
    }

    fn start(&self) -> Point2 {
        match self {
            Self::Line(s) => s.start(),
            Self::QuadBezier(s) => s.start(),
            Self::CubicBezier(s) => s.start(),
            Self::Arc(s) => s.start(),
        }
    }

    fn end(&self) -> Point2 {
        match self {
            Self::Line(s) => s.end(),
            Self::QuadBezier(s) => s.end(),
            Self::CubicBezier(s) => s.end(),
            Self::Arc(s) => s.end(),
        }
    }

    fn draw<S: PathSink + ?Sized>(
        &self,
        sink: &mut S,
        start: f64,
        end: f64,
        move_to: bool,
    ) -> (CurvePoint, CurvePoint) {
        match self {
            Self::Line(s) => s.draw(sink, start, end, move_to),
            Self::QuadBezier(s) => s.draw(sink, start, end, move_to),
            Self::CubicBezier(s) => s.draw(sink, start, end, move_to),
            Self::Arc(s) => s.draw(sink, start, end, move_to),
        }
    }
}

impl From<LineSegment> for Segment {
    fn from(s: LineSegment) -> Self {
        Self::Line(s)
    }
}

impl From<ArcSegment> for Segment {
    fn from(s: ArcSegment) -> Self {
        Self::Arc(s)
    }
}

/// Direction of a parametric curve at `t`, falling back to a short chord
/// when the derivative vanishes (coincident control points).
fn tangent_or_chord<F, D>(eval: F, derivative: D, t: f64) -> Vector2
where
    F: Fn(f64) -> Point2,
    D: Fn(f64) -> Vector2,
{
    const STEP: f64 = 1e-3;
    let d = derivative(t);
    if d.norm() >= TOLERANCE {
        return d;
    }
    if t + STEP <= 1.0 {
        eval(t + STEP) - eval(t)
    } else {
        eval(t) - eval(t - STEP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curve_point_default_is_origin() {
        let p = CurvePoint::default();
        assert_eq!(p.position, Point2::origin());
        assert_eq!(p.tangent, Vector2::zeros());
        assert_eq!(p.normal, Vector2::zeros());
    }

    #[test]
    fn dispatch_matches_variant() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(4.0, 0.0);
        let seg = Segment::line(a, b);
        assert!(seg.is_line());
        assert!((seg.arc_length() - 4.0).abs() < TOLERANCE);
        assert_eq!(seg.start(), a);
        assert_eq!(seg.end(), b);

        let quad = Segment::quad(a, Point2::new(2.0, 0.0), b);
        assert!(!quad.is_line());
        assert!((quad.arc_length() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn chord_fallback_for_coincident_controls() {
        // Cubic whose first control point sits on the start point.
        let seg = Segment::cubic(
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 0.0),
        );
        let t0 = seg.point(0.0).tangent;
        assert!((t0.x - 1.0).abs() < 1e-9, "t0={t0}");
        let t1 = seg.point(1.0).tangent;
        assert!((t1.x - 1.0).abs() < 1e-9, "t1={t1}");
    }
}
