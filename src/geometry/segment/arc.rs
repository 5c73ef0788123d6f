use std::f64::consts::TAU;

use crate::geometry::draw::PathSink;
use crate::math::arc_2d::{ellipse_derivative, ellipse_point, svg_arc_to_center, ArcCenter};
use crate::math::arc_length::{ArcLengthTable, DEFAULT_SAMPLES};
use crate::math::{Point2, Vector2, TOLERANCE};

use super::{CurvePoint, SegmentGeometry};

/// An elliptical arc.
///
/// Stored in center form: the point at angle `θ` is the ellipse point
/// `center + R(x_rotation) · (rx cos θ, ry sin θ)`, and the arc runs from
/// `start_angle` over the signed `delta_angle`. The exact endpoints are kept
/// alongside so that joints with neighbouring segments compare exactly.
///
/// Circular arcs use the closed-form length `r·|Δθ|`; elliptical arcs use a
/// sampled arc-length table.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcSegment {
    from: Point2,
    to: Point2,
    center: Point2,
    rx: f64,
    ry: f64,
    x_rotation: f64,
    start_angle: f64,
    delta_angle: f64,
    length: f64,
    table: Option<ArcLengthTable>,
}

impl ArcSegment {
    /// Creates an arc from SVG endpoint parameters. `x_rotation` is in radians.
    ///
    /// Returns `None` when SVG would draw a straight line instead (zero
    /// radius or coincident endpoints).
    #[must_use]
    pub fn from_svg(
        from: Point2,
        to: Point2,
        rx: f64,
        ry: f64,
        x_rotation: f64,
        large_arc: bool,
        sweep: bool,
    ) -> Option<Self> {
        let ArcCenter {
            center,
            rx,
            ry,
            start_angle,
            delta_angle,
        } = svg_arc_to_center(&from, &to, rx, ry, x_rotation, large_arc, sweep)?;
        Some(Self::build(
            from,
            to,
            center,
            rx,
            ry,
            x_rotation,
            start_angle,
            delta_angle,
        ))
    }

    /// Creates an arc from its center parameterization.
    #[must_use]
    pub fn from_center(
        center: Point2,
        rx: f64,
        ry: f64,
        x_rotation: f64,
        start_angle: f64,
        delta_angle: f64,
    ) -> Self {
        let rx = rx.abs();
        let ry = ry.abs();
        let from = ellipse_point(&center, rx, ry, x_rotation, start_angle);
        // A full turn must close on itself exactly.
        let to = if delta_angle.abs() >= TAU - TOLERANCE {
            from
        } else {
            ellipse_point(&center, rx, ry, x_rotation, start_angle + delta_angle)
        };
        Self::build(
            from,
            to,
            center,
            rx,
            ry,
            x_rotation,
            start_angle,
            delta_angle,
        )
    }

    /// Circular arc helper.
    #[must_use]
    pub fn circle(center: Point2, radius: f64, start_angle: f64, delta_angle: f64) -> Self {
        Self::from_center(center, radius, radius, 0.0, start_angle, delta_angle)
    }

    #[allow(clippy::too_many_arguments)]
    fn build(
        from: Point2,
        to: Point2,
        center: Point2,
        rx: f64,
        ry: f64,
        x_rotation: f64,
        start_angle: f64,
        delta_angle: f64,
    ) -> Self {
        let (length, table) = if (rx - ry).abs() < TOLERANCE {
            (rx * delta_angle.abs(), None)
        } else {
            let table = ArcLengthTable::new(
                |t| ellipse_point(&center, rx, ry, x_rotation, start_angle + delta_angle * t),
                DEFAULT_SAMPLES,
            );
            (table.length(), Some(table))
        };
        Self {
            from,
            to,
            center,
            rx,
            ry,
            x_rotation,
            start_angle,
            delta_angle,
            length,
            table,
        }
    }

    /// Returns the center of the ellipse.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the radii `(rx, ry)`.
    #[must_use]
    pub fn radii(&self) -> (f64, f64) {
        (self.rx, self.ry)
    }

    /// Returns the x-axis rotation in radians.
    #[must_use]
    pub fn x_rotation(&self) -> f64 {
        self.x_rotation
    }

    /// Returns the start angle in radians.
    #[must_use]
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    /// Returns the signed angular extent in radians.
    #[must_use]
    pub fn delta_angle(&self) -> f64 {
        self.delta_angle
    }

    /// Angle reached after travelling the given arc-length fraction.
    #[must_use]
    pub fn angle_at(&self, distance: f64) -> f64 {
        let t = match &self.table {
            Some(table) => table.parameter_at(distance),
            None => distance,
        };
        self.start_angle + self.delta_angle * t
    }

    #[allow(clippy::float_cmp)]
    fn position(&self, distance: f64, angle: f64) -> Point2 {
        if distance == 0.0 {
            self.from
        } else if distance == 1.0 {
            self.to
        } else {
            ellipse_point(&self.center, self.rx, self.ry, self.x_rotation, angle)
        }
    }
}

impl SegmentGeometry for ArcSegment {
    fn arc_length(&self) -> f64 {
        self.length
    }

    fn point(&self, distance: f64) -> CurvePoint {
        let angle = self.angle_at(distance);
        let tangent = if self.delta_angle.abs() < TOLERANCE {
            Vector2::zeros()
        } else {
            ellipse_derivative(self.rx, self.ry, self.x_rotation, angle) * self.delta_angle.signum()
        };
        CurvePoint::new(self.position(distance, angle), tangent)
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
        sink.ellipse(
            self.center,
            self.rx,
            self.ry,
            self.x_rotation,
            self.angle_at(start),
            self.angle_at(end),
            self.delta_angle < 0.0,
        );
        (first, last)
    }
}
