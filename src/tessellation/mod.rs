//! Polygon approximation of subpath runs.

mod approximate_polygon;

pub use approximate_polygon::{approximate_polygon, MAX_SAMPLES};

use crate::error::{ConfigError, Result};
use crate::math::polygon_2d::signed_area_2d;
use crate::math::Point2;

/// Parameters controlling polygon approximation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TessellationParams {
    max_length: f64,
}

impl TessellationParams {
    /// Creates tessellation parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `max_length` is not a positive finite number.
    pub fn new(max_length: f64) -> Result<Self> {
        if !(max_length.is_finite() && max_length > 0.0) {
            return Err(ConfigError::InvalidParameter {
                parameter: "max_length",
                value: max_length,
                reason: "must be positive and finite",
            }
            .into());
        }
        Ok(Self { max_length })
    }

    /// Target distance between neighbouring polygon points.
    #[must_use]
    pub fn max_length(&self) -> f64 {
        self.max_length
    }
}

impl Default for TessellationParams {
    fn default() -> Self {
        Self { max_length: 5.0 }
    }
}

/// An ordered point list approximating one subpath run.
///
/// Closed polygons repeat their first point at the end.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    pub points: Vec<Point2>,
    pub closed: bool,
}

impl Polygon {
    /// Creates a polygon.
    #[must_use]
    pub fn new(points: Vec<Point2>, closed: bool) -> Self {
        Self { points, closed }
    }

    /// Number of points, including the closing duplicate.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the polygon has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Shoelace area; see [`signed_area_2d`].
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area_2d(&self.points)
    }
}
