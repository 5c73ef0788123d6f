use super::Point2;

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise in a y-up frame, negative for clockwise.
/// The polygon is closed implicitly from the last point back to the first.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Sum of edge lengths between consecutive points.
#[must_use]
pub fn polyline_length(points: &[Point2]) -> f64 {
    points.windows(2).map(|w| (w[1] - w[0]).norm()).sum()
}

/// Sum of squared distances between corresponding points.
///
/// Only the common prefix is compared when lengths differ.
#[must_use]
pub fn squared_displacement(a: &[Point2], b: &[Point2]) -> f64 {
    a.iter().zip(b).map(|(p, q)| (p - q).norm_squared()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    fn unit_square() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ]
    }

    #[test]
    fn signed_area_ccw_square() {
        let area = signed_area_2d(&unit_square());
        assert!((area - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_cw_square() {
        let mut pts = unit_square();
        pts.reverse();
        let area = signed_area_2d(&pts);
        assert!((area + 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_ignores_closing_duplicate() {
        let mut pts = unit_square();
        pts.push(pts[0]);
        assert!((signed_area_2d(&pts) - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_degenerate() {
        assert!(signed_area_2d(&[Point2::new(0.0, 0.0)]).abs() < TOLERANCE);
        assert!(signed_area_2d(&[]).abs() < TOLERANCE);
    }

    #[test]
    fn polyline_length_follows_the_chain() {
        let mut pts = unit_square();
        assert!((polyline_length(&pts) - 3.0).abs() < TOLERANCE);
        pts.push(pts[0]);
        assert!((polyline_length(&pts) - 4.0).abs() < TOLERANCE);
        assert!(polyline_length(&[]).abs() < TOLERANCE);
    }

    #[test]
    fn squared_displacement_sums_components() {
        let a = [Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)];
        let b = [Point2::new(3.0, 4.0), Point2::new(1.0, 2.0)];
        assert!((squared_displacement(&a, &b) - 26.0).abs() < TOLERANCE);
    }
}
