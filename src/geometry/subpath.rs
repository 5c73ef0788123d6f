use super::profile::CurveProfile;
use super::segment::{CurvePoint, Segment, SegmentGeometry};
use crate::math::Point2;

/// A maximal run of positionally connected segments within a profile.
#[derive(Debug, Clone, PartialEq)]
pub struct SubpathRun {
    pub segments: Vec<Segment>,
    pub arc_length: f64,
    /// Whether the first segment starts exactly where the last one ends.
    pub closed: bool,
}

impl SubpathRun {
    /// Creates a run from connected segments.
    #[must_use]
    pub fn new(segments: Vec<Segment>) -> Self {
        let arc_length = segments.iter().map(SegmentGeometry::arc_length).sum();
        let closed = match (segments.first(), segments.last()) {
            (Some(first), Some(last)) => first.start() == last.end(),
            _ => false,
        };
        Self {
            segments,
            arc_length,
            closed,
        }
    }

    /// A run made of a single zero-length line at `point`.
    #[must_use]
    pub fn degenerate(point: Point2) -> Self {
        Self::new(vec![Segment::line(point, point)])
    }

    /// Start of the first segment.
    #[must_use]
    pub fn start(&self) -> Option<Point2> {
        self.segments.first().map(SegmentGeometry::start)
    }

    /// Whether every segment is a straight line.
    #[must_use]
    pub fn is_polyline(&self) -> bool {
        self.segments.iter().all(Segment::is_line)
    }

    /// Curve point at an absolute arc-length offset into the run.
    #[must_use]
    pub fn point_at_distance(&self, distance: f64) -> CurvePoint {
        point_at_distance(&self.segments, self.arc_length, distance)
    }
}

impl CurveProfile {
    /// Splits the profile wherever a segment does not start exactly where
    /// the previous one ended. An empty profile has no runs.
    #[must_use]
    pub fn subpath_runs(&self) -> Vec<SubpathRun> {
        let mut runs = Vec::new();
        let mut current: Vec<Segment> = Vec::new();
        for segment in &self.segments {
            if let Some(prev) = current.last() {
                if prev.end() != segment.start() {
                    runs.push(SubpathRun::new(std::mem::take(&mut current)));
                }
            }
            current.push(segment.clone());
        }
        if !current.is_empty() {
            runs.push(SubpathRun::new(current));
        }
        runs
    }
}

/// Walks `segments` to an absolute arc-length offset, clamped to
/// `[0, total]`. Zero-length segments are passed over unless nothing else
/// remains. No segments yields [`CurvePoint::default`].
pub(super) fn point_at_distance(segments: &[Segment], total: f64, distance: f64) -> CurvePoint {
    let Some(last) = segments.last() else {
        return CurvePoint::default();
    };
    let distance = distance.clamp(0.0, total);
    let mut walked = 0.0;
    for segment in segments {
        let length = segment.arc_length();
        if length > 0.0 && distance <= walked + length {
            return segment.point((distance - walked) / length);
        }
        walked += length;
    }
    last.point(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn profile(segments: Vec<Segment>) -> CurveProfile {
        let mut profile = CurveProfile::new();
        for segment in segments {
            profile.push(segment);
        }
        profile
    }

    #[test]
    fn connected_profile_is_one_run() {
        let profile = profile(vec![
            Segment::line(p(0.0, 0.0), p(1.0, 0.0)),
            Segment::quad(p(1.0, 0.0), p(2.0, 1.0), p(3.0, 0.0)),
            Segment::line(p(3.0, 0.0), p(0.0, 0.0)),
        ]);
        let runs = profile.subpath_runs();
        assert_eq!(runs.len(), 1);
        assert!(runs[0].closed);
        assert!(!runs[0].is_polyline());
        assert_relative_eq!(runs[0].arc_length, profile.arc_length);
    }

    #[test]
    fn discontinuity_starts_new_run() {
        let profile = profile(vec![
            Segment::line(p(0.0, 0.0), p(1.0, 0.0)),
            Segment::line(p(1.0, 0.0), p(1.0, 1.0)),
            Segment::line(p(5.0, 5.0), p(6.0, 5.0)),
        ]);
        let runs = profile.subpath_runs();
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].segments.len(), 2);
        assert!(!runs[0].closed);
        assert_eq!(runs[1].start(), Some(p(5.0, 5.0)));
        assert_relative_eq!(runs[1].arc_length, 1.0);
    }

    #[test]
    fn empty_profile_has_no_runs() {
        assert!(CurveProfile::new().subpath_runs().is_empty());
    }

    #[test]
    fn degenerate_run_is_a_closed_point() {
        let run = SubpathRun::degenerate(p(2.0, 3.0));
        assert_eq!(run.segments.len(), 1);
        assert!(run.closed);
        assert_relative_eq!(run.arc_length, 0.0);
        assert_eq!(run.point_at_distance(0.0).position, p(2.0, 3.0));
        assert_eq!(run.point_at_distance(1.0).position, p(2.0, 3.0));
    }

    #[test]
    fn run_point_at_distance() {
        let run = SubpathRun::new(vec![
            Segment::line(p(0.0, 0.0), p(4.0, 0.0)),
            Segment::line(p(4.0, 0.0), p(4.0, 4.0)),
        ]);
        let mid = run.point_at_distance(6.0);
        assert_relative_eq!(mid.position.x, 4.0);
        assert_relative_eq!(mid.position.y, 2.0);
    }
}
