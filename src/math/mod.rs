pub mod arc_2d;
pub mod arc_length;
pub mod polygon_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Normalizes `v`, returning the zero vector instead of NaN when `v` has no length.
#[must_use]
pub fn safe_normalize(v: Vector2) -> Vector2 {
    let len = v.norm();
    if len < TOLERANCE {
        Vector2::zeros()
    } else {
        v / len
    }
}

/// Returns `dir` rotated by 90° (the left-pointing normal).
#[must_use]
pub fn left_normal(dir: Vector2) -> Vector2 {
    Vector2::new(-dir.y, dir.x)
}

/// Linear interpolation between two points.
#[must_use]
pub fn lerp_point(a: &Point2, b: &Point2, t: f64) -> Point2 {
    a + (b - a) * t
}

/// Rounds `value` to `decimals` decimal digits.
#[must_use]
pub fn round_to_decimals(value: f64, decimals: u32) -> f64 {
    #[allow(clippy::cast_possible_wrap)]
    let factor = 10f64.powi(decimals as i32);
    let scaled = value * factor;
    if scaled.is_finite() {
        scaled.round() / factor
    } else {
        value
    }
}
