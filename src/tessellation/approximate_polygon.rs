use tracing::{trace, warn};

use crate::geometry::{SegmentGeometry, SubpathRun};
use crate::math::polygon_2d::signed_area_2d;
use crate::math::{lerp_point, Point2};

use super::{Polygon, TessellationParams};

/// Approximates a subpath run by a polygon.
///
/// A run made only of lines keeps its exact vertices, with every edge longer
/// than `max_length` bisected until it fits. Any other run is sampled at
/// `max(3, ceil(arc_length / max_length))` points spaced evenly by arc
/// length, first and last included, and reversed if its shoelace area is
/// positive.
///
/// A run whose length is not finite collapses to its start point, and the
/// sample count never exceeds [`MAX_SAMPLES`].
#[must_use]
pub fn approximate_polygon(run: &SubpathRun, params: &TessellationParams) -> Polygon {
    if !run.arc_length.is_finite() {
        warn!(arc_length = run.arc_length, "collapsing subpath of non-finite length");
        let point = run.start().unwrap_or_else(Point2::origin);
        return Polygon::new(vec![point; 2], run.closed);
    }
    let points = if run.is_polyline() {
        let mut points: Vec<Point2> = run.segments.iter().map(SegmentGeometry::start).collect();
        points.extend(run.segments.last().map(SegmentGeometry::end));
        bisect(&mut points, params.max_length());
        points
    } else {
        sample(run, params.max_length())
    };
    trace!(
        points = points.len(),
        closed = run.closed,
        polyline = run.is_polyline(),
        "approximated subpath"
    );
    Polygon::new(points, run.closed)
}

/// Upper bound on the number of samples taken from a curved run.
pub const MAX_SAMPLES: usize = 1 << 16;

/// Halves each edge in place until no edge exceeds `max_length`. Inserted
/// midpoints become the new far end of the edge being tested.
fn bisect(points: &mut Vec<Point2>, max_length: f64) {
    let mut i = 0;
    while i + 1 < points.len() {
        let a = points[i];
        let mut b = points[i + 1];
        while (b - a).norm() > max_length {
            b = lerp_point(&a, &b, 0.5);
            points.insert(i + 1, b);
        }
        i += 1;
    }
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn sample(run: &SubpathRun, max_length: f64) -> Vec<Point2> {
    let count = ((run.arc_length / max_length).ceil() as usize).clamp(3, MAX_SAMPLES);
    let last = (count - 1) as f64;
    let mut points: Vec<Point2> = (0..count)
        .map(|i| {
            run.point_at_distance(run.arc_length * (i as f64 / last))
                .position
        })
        .collect();
    if run.closed {
        if let Some(&first) = points.first() {
            points[count - 1] = first;
        }
    }
    if signed_area_2d(&points) > 0.0 {
        points.reverse();
    }
    points
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::Segment;
    use crate::operations::creation::{MakeEllipseProfile, MakePathProfile};
    use approx::assert_relative_eq;
    use std::f64::consts::TAU;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn single_run(data: &str) -> SubpathRun {
        let mut runs = MakePathProfile::new(data)
            .execute()
            .unwrap()
            .subpath_runs();
        assert_eq!(runs.len(), 1);
        runs.remove(0)
    }

    #[test]
    fn line_run_is_bisected_exactly() {
        let run = SubpathRun::new(vec![
            Segment::line(p(0.0, 0.0), p(10.0, 0.0)),
            Segment::line(p(10.0, 0.0), p(10.0, 10.0)),
        ]);
        let polygon = approximate_polygon(&run, &TessellationParams::default());
        assert_eq!(
            polygon.points,
            vec![p(0.0, 0.0), p(5.0, 0.0), p(10.0, 0.0), p(10.0, 5.0), p(10.0, 10.0)]
        );
        assert!(!polygon.closed);
    }

    #[test]
    fn bisection_follows_the_evolving_list() {
        // 12 is halved to 6 and then to 3; the remaining 6 is halved once.
        let run = SubpathRun::new(vec![Segment::line(p(0.0, 0.0), p(12.0, 0.0))]);
        let polygon = approximate_polygon(&run, &TessellationParams::default());
        let xs: Vec<f64> = polygon.points.iter().map(|q| q.x).collect();
        assert_eq!(xs, vec![0.0, 3.0, 6.0, 9.0, 12.0]);
    }

    #[test]
    fn closed_line_run_keeps_duplicate() {
        let run = single_run("M0 0 L4 0 L4 4 Z");
        let polygon = approximate_polygon(&run, &TessellationParams::default());
        assert!(polygon.closed);
        assert_eq!(polygon.points.first(), polygon.points.last());
        assert_eq!(polygon.len(), 5);
    }

    #[test]
    fn curved_run_is_sampled() {
        let run = single_run("M0 0 Q10 10 20 0");
        let params = TessellationParams::new(2.0).unwrap();
        let polygon = approximate_polygon(&run, &params);
        let expected = (run.arc_length / 2.0).ceil();
        #[allow(clippy::cast_precision_loss)]
        let len = polygon.len() as f64;
        assert_relative_eq!(len, expected);
        assert!(signed_area_2d(&polygon.points) <= 0.0);
    }

    #[test]
    fn short_curve_gets_three_points() {
        let run = single_run("M0 0 Q1 1 2 0");
        let polygon = approximate_polygon(&run, &TessellationParams::default());
        assert_eq!(polygon.len(), 3);
    }

    #[test]
    fn overflowing_line_collapses_to_its_start() {
        let run = SubpathRun::new(vec![Segment::line(
            p(-1e308, 0.0),
            p(1e308, 0.0),
        )]);
        assert!(run.arc_length.is_infinite());
        let polygon = approximate_polygon(&run, &TessellationParams::default());
        assert_eq!(polygon.points, vec![p(-1e308, 0.0); 2]);
    }

    #[test]
    fn huge_curve_sample_count_is_bounded() {
        let run = single_run("M0 0 Q1e150 1e150 2e150 0");
        assert!(run.arc_length.is_finite());
        let polygon = approximate_polygon(&run, &TessellationParams::default());
        assert_eq!(polygon.len(), MAX_SAMPLES);
    }

    #[test]
    fn sampled_circle_winding_is_normalized() {
        for ccw in [false, true] {
            let end = if ccw { -TAU } else { TAU };
            let profile = MakeEllipseProfile::circle(p(0.0, 0.0), 10.0)
                .counterclockwise(ccw)
                .with_angles(0.0, end)
                .execute()
                .unwrap();
            let runs = profile.subpath_runs();
            let polygon = approximate_polygon(&runs[0], &TessellationParams::default());
            assert!(polygon.closed);
            assert_eq!(polygon.points.first(), polygon.points.last());
            assert!(polygon.signed_area() < 0.0, "ccw={ccw}");
        }
    }
}
