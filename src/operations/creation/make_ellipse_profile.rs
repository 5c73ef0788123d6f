use std::f64::consts::TAU;

use crate::error::Result;
use crate::geometry::{ArcSegment, CurveProfile, Segment, SegmentGeometry};
use crate::math::Point2;

use super::{check_finite, check_size};

/// Builds a circle, ellipse, elliptical arc or pie slice.
///
/// Angles are in radians and increase from +x towards +y. By default the
/// full ellipse is built as a single closed arc.
pub struct MakeEllipseProfile {
    center: Point2,
    rx: f64,
    ry: f64,
    start_angle: f64,
    end_angle: f64,
    counterclockwise: bool,
    pie: bool,
}

impl MakeEllipseProfile {
    /// Creates a new `MakeEllipseProfile` operation for a full ellipse.
    #[must_use]
    pub fn new(center: Point2, rx: f64, ry: f64) -> Self {
        Self {
            center,
            rx,
            ry,
            start_angle: 0.0,
            end_angle: TAU,
            counterclockwise: false,
            pie: false,
        }
    }

    /// Creates the operation for a circle.
    #[must_use]
    pub fn circle(center: Point2, radius: f64) -> Self {
        Self::new(center, radius, radius)
    }

    /// Restricts the outline to the arc between two angles.
    #[must_use]
    pub fn with_angles(mut self, start_angle: f64, end_angle: f64) -> Self {
        self.start_angle = start_angle;
        self.end_angle = end_angle;
        self
    }

    /// Runs the arc towards decreasing angles.
    #[must_use]
    pub fn counterclockwise(mut self, counterclockwise: bool) -> Self {
        self.counterclockwise = counterclockwise;
        self
    }

    /// Connects both arc ends to the center.
    #[must_use]
    pub fn pie(mut self, pie: bool) -> Self {
        self.pie = pie;
        self
    }

    /// Signed sweep of the arc, following canvas `ellipse()` rules: a
    /// span of a full turn or more draws the whole ellipse, anything else
    /// is reduced modulo a full turn in the drawing direction.
    fn sweep(&self) -> f64 {
        let span = self.end_angle - self.start_angle;
        if self.counterclockwise {
            if -span >= TAU {
                -TAU
            } else {
                -(-span).rem_euclid(TAU)
            }
        } else if span >= TAU {
            TAU
        } else {
            span.rem_euclid(TAU)
        }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError`](crate::error::GeometryError) for negative
    /// or non-finite radii and non-finite angles.
    #[allow(clippy::float_cmp)]
    pub fn execute(&self) -> Result<CurveProfile> {
        check_size("rx", self.rx)?;
        check_size("ry", self.ry)?;
        check_finite("start_angle", self.start_angle)?;
        check_finite("end_angle", self.end_angle)?;

        let sweep = self.sweep();
        let mut profile = CurveProfile::new();
        if sweep == 0.0 {
            return Ok(profile);
        }

        let arc =
            ArcSegment::from_center(self.center, self.rx, self.ry, 0.0, self.start_angle, sweep);
        let full = sweep.abs() >= TAU;
        if self.pie && !full {
            profile.push(Segment::line(self.center, arc.start()));
            let end = arc.end();
            profile.push(arc.into());
            profile.push(Segment::line(end, self.center));
        } else {
            profile.push(arc.into());
        }
        profile.finish();
        Ok(profile)
    }
}
