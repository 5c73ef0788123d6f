use super::draw::{draw_profile, PathRecorder};
use super::segment::{CurvePoint, Segment, SegmentGeometry};
use super::subpath::point_at_distance;

/// An ordered sequence of segments forming one or more subpaths.
///
/// Consecutive segments within a subpath share endpoints exactly; a new
/// subpath begins wherever a segment does not start at the previous end.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveProfile {
    pub segments: Vec<Segment>,
    /// Sum of the segment arc lengths.
    pub arc_length: f64,
    /// Minimum `sin(θ/2)` over all joints, where `θ` is the corner angle
    /// between the two segments meeting there. `1` for a smooth joint,
    /// approaching `0` for a hairpin turn.
    pub min_sin: f64,
    pub closed: bool,
}

impl Default for CurveProfile {
    fn default() -> Self {
        Self {
            segments: Vec::new(),
            arc_length: 0.0,
            min_sin: 1.0,
            closed: false,
        }
    }
}

impl CurveProfile {
    /// Creates an empty profile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a segment and accumulates its length.
    pub fn push(&mut self, segment: Segment) {
        self.arc_length += segment.arc_length();
        self.segments.push(segment);
    }

    /// Appends all segments of `other`, keeping the smaller `min_sin`.
    pub fn append(&mut self, other: CurveProfile) {
        self.arc_length += other.arc_length;
        self.min_sin = self.min_sin.min(other.min_sin);
        self.segments.extend(other.segments);
    }

    /// Returns whether the profile has no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the curve point at an absolute arc-length offset.
    ///
    /// The offset is clamped to `[0, arc_length]`. Zero-length segments are
    /// passed over unless the offset lands exactly on them at the very end.
    /// An empty profile yields [`CurvePoint::default`].
    #[must_use]
    pub fn point_at_distance(&self, distance: f64) -> CurvePoint {
        point_at_distance(&self.segments, self.arc_length, distance)
    }

    /// Derives `closed` (first start equals last end, exactly) and
    /// `min_sin` from the current segments.
    pub fn finish(&mut self) {
        self.closed = match (self.segments.first(), self.segments.last()) {
            (Some(first), Some(last)) => first.start() == last.end(),
            _ => false,
        };
        self.compute_min_sin();
    }

    /// Recomputes [`min_sin`](Self::min_sin) over every joint.
    ///
    /// Joints are taken between segment `i` and segment `(i + 1) mod n`
    /// across the whole list, so the end of one subpath is also compared
    /// with the start of the next (and the last segment with the first),
    /// even when those segments are not adjacent on screen. A degenerate
    /// segment has a zero tangent, which makes its joints read as right
    /// angles.
    pub fn compute_min_sin(&mut self) {
        let n = self.segments.len();
        let mut min_sin: f64 = 1.0;
        for i in 0..n {
            let outgoing = self.segments[i].point(1.0).tangent;
            let incoming = self.segments[(i + 1) % n].point(0.0).tangent;
            // Angle between the two edges as seen from the joint.
            let cos = (-outgoing).dot(&incoming).clamp(-1.0, 1.0);
            let sin_half = (cos.acos() * 0.5).sin().abs();
            min_sin = min_sin.min(sin_half);
        }
        self.min_sin = min_sin;
    }

    /// Renders the whole profile as SVG path data.
    #[must_use]
    pub fn to_path_data(&self) -> String {
        let mut recorder = PathRecorder::new();
        draw_profile(&mut recorder, self, 0.0, 1.0);
        recorder.to_path_data()
    }
}
