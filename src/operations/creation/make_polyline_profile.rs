use crate::error::Result;
use crate::geometry::{ArcSegment, CurveProfile, Segment};
use crate::math::{safe_normalize, Point2, TOLERANCE};

use super::check_size;

/// Builds a profile through a sequence of points, optionally rounding
/// every corner with a circular arc.
///
/// With a zero corner radius the profile is made of one line per edge,
/// including zero-length edges, so that point lists of equal length always
/// yield the same segment count.
pub struct MakePolylineProfile {
    points: Vec<Point2>,
    corner_radius: f64,
    closed: bool,
}

impl MakePolylineProfile {
    /// Creates a new `MakePolylineProfile` operation.
    #[must_use]
    pub fn new(points: Vec<Point2>, corner_radius: f64, closed: bool) -> Self {
        Self {
            points,
            corner_radius,
            closed,
        }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError`](crate::error::GeometryError) if the corner
    /// radius is negative or not finite.
    pub fn execute(&self) -> Result<CurveProfile> {
        check_size("corner_radius", self.corner_radius)?;

        if self.corner_radius > 0.0 {
            let mut profile = self.rounded();
            profile.finish();
            Ok(profile)
        } else {
            Ok(sharp_polyline(&self.points, self.closed))
        }
    }

    fn rounded(&self) -> CurveProfile {
        let mut vertices = self.points.as_slice();
        if self.closed && vertices.len() > 1 && vertices.first() == vertices.last() {
            vertices = &vertices[..vertices.len() - 1];
        }
        let n = vertices.len();
        let mut profile = CurveProfile::new();
        if n < 2 {
            return profile;
        }

        if self.closed {
            let corners: Vec<Corner> = (0..n)
                .map(|i| {
                    Corner::new(
                        vertices[(i + n - 1) % n],
                        vertices[i],
                        vertices[(i + 1) % n],
                        self.corner_radius,
                    )
                })
                .collect();
            let mut current = corners[0].exit;
            for corner in corners.iter().skip(1).chain(corners.first()) {
                corner.push_into(&mut profile, &mut current);
            }
        } else {
            let mut current = vertices[0];
            for i in 1..n - 1 {
                let corner = Corner::new(
                    vertices[i - 1],
                    vertices[i],
                    vertices[i + 1],
                    self.corner_radius,
                );
                corner.push_into(&mut profile, &mut current);
            }
            push_line(&mut profile, &mut current, vertices[n - 1]);
        }
        profile
    }
}

/// A rounded corner: the edge is shortened to `entry`, an arc runs to
/// `exit`, and the next edge continues from there. Corners that cannot be
/// rounded have `entry == exit == vertex` and no arc.
struct Corner {
    entry: Point2,
    exit: Point2,
    arc: Option<ArcSegment>,
}

impl Corner {
    fn new(prev: Point2, vertex: Point2, next: Point2, radius: f64) -> Self {
        let sharp = Self {
            entry: vertex,
            exit: vertex,
            arc: None,
        };
        let back = prev - vertex;
        let ahead = next - vertex;
        let (back_len, ahead_len) = (back.norm(), ahead.norm());
        if back_len < TOLERANCE || ahead_len < TOLERANCE {
            return sharp;
        }
        let back_dir = safe_normalize(back);
        let ahead_dir = safe_normalize(ahead);

        // Interior angle at the vertex.
        let angle = back_dir.dot(&ahead_dir).clamp(-1.0, 1.0).acos();
        if angle < TOLERANCE || std::f64::consts::PI - angle < TOLERANCE {
            return sharp;
        }
        let half_tan = (angle * 0.5).tan();
        let offset = (radius / half_tan).min(back_len * 0.5).min(ahead_len * 0.5);
        let radius = offset * half_tan;

        let entry = vertex + back_dir * offset;
        let exit = vertex + ahead_dir * offset;
        let incoming = -back_dir;
        let turns_left = incoming.x * ahead_dir.y - incoming.y * ahead_dir.x > 0.0;
        let arc = ArcSegment::from_svg(entry, exit, radius, radius, 0.0, false, turns_left);
        match arc {
            Some(arc) => Self {
                entry,
                exit,
                arc: Some(arc),
            },
            None => sharp,
        }
    }

    fn push_into(&self, profile: &mut CurveProfile, current: &mut Point2) {
        push_line(profile, current, self.entry);
        if let Some(arc) = &self.arc {
            profile.push(arc.clone().into());
        }
        *current = self.exit;
    }
}

/// One line per edge, plus the closing edge when `closed` and the chain
/// does not already end on its first point.
pub(crate) fn sharp_polyline(points: &[Point2], closed: bool) -> CurveProfile {
    let mut profile = CurveProfile::new();
    for pair in points.windows(2) {
        profile.push(Segment::line(pair[0], pair[1]));
    }
    if closed && points.len() > 1 {
        if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
            if first != last {
                profile.push(Segment::line(last, first));
            }
        }
    }
    profile.finish();
    profile
}

fn push_line(profile: &mut CurveProfile, current: &mut Point2, to: Point2) {
    if *current != to {
        profile.push(Segment::line(*current, to));
    }
    *current = to;
}
