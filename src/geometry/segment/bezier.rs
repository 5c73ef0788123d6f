use crate::geometry::draw::PathSink;
use crate::math::arc_length::{ArcLengthTable, DEFAULT_SAMPLES};
use crate::math::{Point2, Vector2};

use super::{tangent_or_chord, CurvePoint, SegmentGeometry};

/// Quadratic Bézier segment with control points `p0, p1, p2`.
///
/// `B(t) = (1-t)² p0 + 2(1-t)t p1 + t² p2`
#[derive(Debug, Clone, PartialEq)]
pub struct QuadBezierSegment {
    points: [Point2; 3],
    table: ArcLengthTable,
}

impl QuadBezierSegment {
    /// Creates a new quadratic Bézier segment.
    #[must_use]
    pub fn new(p0: Point2, p1: Point2, p2: Point2) -> Self {
        let points = [p0, p1, p2];
        let table = ArcLengthTable::new(|t| quad_eval(&points, t), DEFAULT_SAMPLES);
        Self { points, table }
    }

    /// Returns the control points.
    #[must_use]
    pub fn points(&self) -> &[Point2; 3] {
        &self.points
    }

    /// Control point used to reflect a following smooth quadratic.
    #[must_use]
    pub fn control(&self) -> Point2 {
        self.points[1]
    }

    /// Evaluates the curve at parameter `t`.
    #[must_use]
    pub fn evaluate(&self, t: f64) -> Point2 {
        quad_eval(&self.points, t)
    }

    /// Control points of the sub-curve over the parameter range `[a, b]`.
    #[must_use]
    pub fn subdivide(&self, a: f64, b: f64) -> [Point2; 3] {
        let [p0, p1, p2] = self.points.map(|p| p.coords);
        let blossom = |u: f64, v: f64| {
            Point2::from(
                p0 * ((1.0 - u) * (1.0 - v)) + p1 * ((1.0 - u) * v + u * (1.0 - v)) + p2 * (u * v),
            )
        };
        [blossom(a, a), blossom(a, b), blossom(b, b)]
    }

    fn derivative(&self, t: f64) -> Vector2 {
        let [p0, p1, p2] = self.points;
        (p1 - p0) * (2.0 * (1.0 - t)) + (p2 - p1) * (2.0 * t)
    }
}

impl SegmentGeometry for QuadBezierSegment {
    fn arc_length(&self) -> f64 {
        self.table.length()
    }

    fn point(&self, distance: f64) -> CurvePoint {
        let t = self.table.parameter_at(distance);
        let tangent = tangent_or_chord(|t| self.evaluate(t), |t| self.derivative(t), t);
        CurvePoint::new(self.evaluate(t), tangent)
    }

    fn start(&self) -> Point2 {
        self.points[0]
    }

    fn end(&self) -> Point2 {
        self.points[2]
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
        let [q0, q1, _] = self.subdivide(
            self.table.parameter_at(start),
            self.table.parameter_at(end),
        );
        if move_to {
            sink.move_to(q0);
        }
        sink.quad_to(q1, last.position);
        (first, last)
    }
}

/// Cubic Bézier segment with control points `p0, p1, p2, p3`.
///
/// `B(t) = (1-t)³ p0 + 3(1-t)²t p1 + 3(1-t)t² p2 + t³ p3`
#[derive(Debug, Clone, PartialEq)]
pub struct CubicBezierSegment {
    points: [Point2; 4],
    table: ArcLengthTable,
}

impl CubicBezierSegment {
    /// Creates a new cubic Bézier segment.
    #[must_use]
    pub fn new(p0: Point2, p1: Point2, p2: Point2, p3: Point2) -> Self {
        let points = [p0, p1, p2, p3];
        let table = ArcLengthTable::new(|t| cubic_eval(&points, t), DEFAULT_SAMPLES);
        Self { points, table }
    }

    /// Returns the control points.
    #[must_use]
    pub fn points(&self) -> &[Point2; 4] {
        &self.points
    }

    /// Second control point, reflected by a following smooth cubic.
    #[must_use]
    pub fn control(&self) -> Point2 {
        self.points[2]
    }

    /// Evaluates the curve at parameter `t`.
    #[must_use]
    pub fn evaluate(&self, t: f64) -> Point2 {
        cubic_eval(&self.points, t)
    }

    /// Control points of the sub-curve over the parameter range `[a, b]`.
    #[must_use]
    pub fn subdivide(&self, a: f64, b: f64) -> [Point2; 4] {
        let [p0, p1, p2, p3] = self.points.map(|p| p.coords);
        let blossom = |u: f64, v: f64, w: f64| {
            let (mu, mv, mw) = (1.0 - u, 1.0 - v, 1.0 - w);
            Point2::from(
                p0 * (mu * mv * mw)
                    + p1 * (u * mv * mw + mu * v * mw + mu * mv * w)
                    + p2 * (u * v * mw + u * mv * w + mu * v * w)
                    + p3 * (u * v * w),
            )
        };
        [
            blossom(a, a, a),
            blossom(a, a, b),
            blossom(a, b, b),
            blossom(b, b, b),
        ]
    }

    fn derivative(&self, t: f64) -> Vector2 {
        let [p0, p1, p2, p3] = self.points;
        let mt = 1.0 - t;
        (p1 - p0) * (3.0 * mt * mt) + (p2 - p1) * (6.0 * mt * t) + (p3 - p2) * (3.0 * t * t)
    }
}

impl SegmentGeometry for CubicBezierSegment {
    fn arc_length(&self) -> f64 {
        self.table.length()
    }

    fn point(&self, distance: f64) -> CurvePoint {
        let t = self.table.parameter_at(distance);
        let tangent = tangent_or_chord(|t| self.evaluate(t), |t| self.derivative(t), t);
        CurvePoint::new(self.evaluate(t), tangent)
    }

    fn start(&self) -> Point2 {
        self.points[0]
    }

    fn end(&self) -> Point2 {
        self.points[3]
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
        let [q0, q1, q2, _] = self.subdivide(
            self.table.parameter_at(start),
            self.table.parameter_at(end),
        );
        if move_to {
            sink.move_to(q0);
        }
        sink.cubic_to(q1, q2, last.position);
        (first, last)
    }
}

fn quad_eval(points: &[Point2; 3], t: f64) -> Point2 {
    let [p0, p1, p2] = points.map(|p| p.coords);
    let mt = 1.0 - t;
    Point2::from(p0 * (mt * mt) + p1 * (2.0 * mt * t) + p2 * (t * t))
}

fn cubic_eval(points: &[Point2; 4], t: f64) -> Point2 {
    let [p0, p1, p2, p3] = points.map(|p| p.coords);
    let mt = 1.0 - t;
    Point2::from(
        p0 * (mt * mt * mt) + p1 * (3.0 * mt * mt * t) + p2 * (3.0 * mt * t * t) + p3 * (t * t * t),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::draw::{DrawCommand, PathRecorder};
    use approx::assert_relative_eq;

    fn arch() -> CubicBezierSegment {
        CubicBezierSegment::new(
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 10.0),
            Point2::new(10.0, 10.0),
            Point2::new(10.0, 0.0),
        )
    }

    #[test]
    fn cubic_endpoints_are_exact() {
        let seg = arch();
        assert_eq!(seg.point(0.0).position, Point2::new(0.0, 0.0));
        assert_eq!(seg.point(1.0).position, Point2::new(10.0, 0.0));
    }

    #[test]
    fn cubic_tangents_follow_control_polygon() {
        let seg = arch();
        let t0 = seg.point(0.0).tangent;
        assert_relative_eq!(t0.y, 1.0, epsilon = 1e-12);
        let t1 = seg.point(1.0).tangent;
        assert_relative_eq!(t1.y, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn cubic_midpoint_by_symmetry() {
        // Symmetric arch: half the arc length lands on the apex.
        let seg = arch();
        let mid = seg.point(0.5).position;
        assert_relative_eq!(mid.x, 5.0, epsilon = 1e-9);
        assert_relative_eq!(mid.y, 7.5, epsilon = 1e-3);
    }

    #[test]
    fn cubic_length_close_to_reference() {
        // Reference from dense sampling.
        let seg = arch();
        let reference = ArcLengthTable::new(|t| seg.evaluate(t), 20_000).length();
        assert_relative_eq!(seg.arc_length(), reference, max_relative = 1e-3);
    }

    #[test]
    fn quad_straight_line_length() {
        let seg = QuadBezierSegment::new(
            Point2::new(0.0, 0.0),
            Point2::new(5.0, 0.0),
            Point2::new(10.0, 0.0),
        );
        assert_relative_eq!(seg.arc_length(), 10.0, epsilon = 1e-9);
        assert_relative_eq!(seg.point(0.3).position.x, 3.0, epsilon = 1e-9);
    }

    #[test]
    fn quad_point_distance_is_arc_length_fraction() {
        let seg = QuadBezierSegment::new(
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 20.0),
            Point2::new(20.0, 0.0),
        );
        let quarter = seg.point(0.25).position;
        let walked = ArcLengthTable::new(
            |t| seg.evaluate(t * seg.table.parameter_at(0.25)),
            4_000,
        )
        .length();
        assert_relative_eq!(walked, seg.arc_length() * 0.25, max_relative = 1e-3);
        assert!(quarter.x < 10.0);
    }

    #[test]
    fn subdivide_full_range_is_identity() {
        let seg = arch();
        let sub = seg.subdivide(0.0, 1.0);
        for (a, b) in sub.iter().zip(seg.points()) {
            assert_relative_eq!(a.x, b.x, epsilon = 1e-12);
            assert_relative_eq!(a.y, b.y, epsilon = 1e-12);
        }
    }

    #[test]
    fn subdivide_halves_meet() {
        let seg = arch();
        let left = seg.subdivide(0.0, 0.5);
        let right = seg.subdivide(0.5, 1.0);
        assert_relative_eq!(left[3].x, right[0].x, epsilon = 1e-12);
        assert_relative_eq!(left[3].y, right[0].y, epsilon = 1e-12);
        assert_relative_eq!(left[3].y, 7.5, epsilon = 1e-12);
    }

    #[test]
    fn draw_emits_cubic_command() {
        let seg = arch();
        let mut rec = PathRecorder::new();
        seg.draw(&mut rec, 0.0, 1.0, true);
        assert_eq!(rec.commands().len(), 2);
        assert_eq!(rec.commands()[0], DrawCommand::MoveTo(Point2::new(0.0, 0.0)));
        match rec.commands()[1] {
            DrawCommand::CubicTo(c1, c2, end) => {
                assert_relative_eq!(c1.y, 10.0, epsilon = 1e-12);
                assert_relative_eq!(c2.x, 10.0, epsilon = 1e-12);
                assert_eq!(end, Point2::new(10.0, 0.0));
            }
            ref other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn draw_partial_quad_ends_on_curve() {
        let seg = QuadBezierSegment::new(
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 20.0),
            Point2::new(20.0, 0.0),
        );
        let mut rec = PathRecorder::new();
        let (a, b) = seg.draw(&mut rec, 0.25, 0.75, true);
        match rec.commands() {
            [DrawCommand::MoveTo(start), DrawCommand::QuadTo(_, end)] => {
                assert_relative_eq!(start.x, a.position.x, epsilon = 1e-9);
                assert_eq!(*end, b.position);
            }
            other => panic!("unexpected commands {other:?}"),
        }
    }
}
