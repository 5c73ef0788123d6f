use crate::error::{ConfigError, Result};
use crate::geometry::{ArcSegment, CurveProfile, Segment};
use crate::math::{Point2, Vector2};

use super::check_size;

/// Per-corner radii of a rectangle, in screen order.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RectCorners {
    pub top_left: f64,
    pub top_right: f64,
    pub bottom_right: f64,
    pub bottom_left: f64,
}

impl RectCorners {
    /// The same radius on every corner.
    #[must_use]
    pub fn uniform(radius: f64) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_right: radius,
            bottom_left: radius,
        }
    }

    fn as_array(self) -> [(&'static str, f64); 4] {
        [
            ("top_left", self.top_left),
            ("top_right", self.top_right),
            ("bottom_right", self.bottom_right),
            ("bottom_left", self.bottom_left),
        ]
    }
}

/// How rounded corners are drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum CornerStyle {
    /// Circular quarter arcs.
    #[default]
    Round,
    /// Cubic Bézier corners. `sharpness` in `[0, 1]` moves the control
    /// points from the tangent points (`0`) towards the corner (`1`).
    Smooth { sharpness: f64 },
}

/// Builds the outline of an axis-aligned rectangle with optional rounded
/// corners.
///
/// The rectangle spans `origin` to `origin + (width, height)` in screen
/// coordinates (y pointing down). The outline runs clockwise on screen,
/// starting on the top edge just after the top-left corner, and closes
/// exactly.
pub struct MakeRectProfile {
    origin: Point2,
    width: f64,
    height: f64,
    corners: RectCorners,
    style: CornerStyle,
}

impl MakeRectProfile {
    /// Creates a new `MakeRectProfile` operation with sharp corners.
    #[must_use]
    pub fn new(origin: Point2, width: f64, height: f64) -> Self {
        Self {
            origin,
            width,
            height,
            corners: RectCorners::default(),
            style: CornerStyle::Round,
        }
    }

    /// Sets the corner radii.
    #[must_use]
    pub fn with_corners(mut self, corners: RectCorners) -> Self {
        self.corners = corners;
        self
    }

    /// Sets the corner style.
    #[must_use]
    pub fn with_style(mut self, style: CornerStyle) -> Self {
        self.style = style;
        self
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError`](crate::error::GeometryError) for negative
    /// or non-finite sizes and radii, and [`ConfigError`] for a smooth
    /// sharpness outside `[0, 1]`.
    pub fn execute(&self) -> Result<CurveProfile> {
        check_size("width", self.width)?;
        check_size("height", self.height)?;
        for (parameter, radius) in self.corners.as_array() {
            check_size(parameter, radius)?;
        }
        if let CornerStyle::Smooth { sharpness } = self.style {
            if !(0.0..=1.0).contains(&sharpness) {
                return Err(ConfigError::InvalidParameter {
                    parameter: "sharpness",
                    value: sharpness,
                    reason: "must be within [0, 1]",
                }
                .into());
            }
        }

        let limit = self.width.min(self.height) * 0.5;
        let [tl, tr, br, bl] = self.corners.as_array().map(|(_, r)| r.min(limit));
        let (x, y) = (self.origin.x, self.origin.y);
        let (right, bottom) = (x + self.width, y + self.height);

        // Corner vertex, radius, heading along the incoming edge, heading
        // along the outgoing edge.
        let corners = [
            (Point2::new(right, y), tr, Vector2::x(), Vector2::y()),
            (Point2::new(right, bottom), br, Vector2::y(), -Vector2::x()),
            (Point2::new(x, bottom), bl, -Vector2::x(), -Vector2::y()),
            (Point2::new(x, y), tl, -Vector2::y(), Vector2::x()),
        ];

        let mut profile = CurveProfile::new();
        let start = Point2::new(x + tl, y);
        let mut current = start;
        for (vertex, radius, incoming, outgoing) in corners {
            let entry = vertex - incoming * radius;
            let exit = vertex + outgoing * radius;
            if current != entry {
                profile.push(Segment::line(current, entry));
            }
            if radius > 0.0 {
                profile.push(self.corner(entry, exit, vertex, radius));
            }
            current = exit;
        }
        profile.finish();
        Ok(profile)
    }

    fn corner(&self, entry: Point2, exit: Point2, vertex: Point2, radius: f64) -> Segment {
        match self.style {
            CornerStyle::Smooth { sharpness } => Segment::cubic(
                entry,
                entry + (vertex - entry) * sharpness,
                exit + (vertex - exit) * sharpness,
                exit,
            ),
            CornerStyle::Round => {
                ArcSegment::from_svg(entry, exit, radius, radius, 0.0, false, true)
                    .map_or_else(|| Segment::line(entry, exit), Segment::from)
            }
        }
    }
}
