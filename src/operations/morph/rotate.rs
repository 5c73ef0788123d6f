use crate::math::polygon_2d::squared_displacement;
use crate::math::{round_to_decimals, Point2};

use crate::tessellation::Polygon;

/// Reorders `polygon` so that its points travel the least total squared
/// distance to the matching points of `reference`.
///
/// An open polygon is either kept or reversed. A closed polygon is rotated
/// over all cyclic offsets of its interior points, the closing duplicate is
/// restored afterwards, and the smallest offset wins ties. Returns the
/// chosen offset (`0` or `1` for reversal in the open case).
pub(super) fn align(polygon: &mut Polygon, reference: &[Point2]) -> usize {
    if polygon.closed {
        align_closed(&mut polygon.points, reference)
    } else {
        align_open(&mut polygon.points, reference)
    }
}

fn align_open(points: &mut [Point2], reference: &[Point2]) -> usize {
    let forward = squared_displacement(points, reference);
    let backward: f64 = points
        .iter()
        .rev()
        .zip(reference)
        .map(|(p, q)| (p - q).norm_squared())
        .sum();
    if backward < forward {
        points.reverse();
        1
    } else {
        0
    }
}

fn align_closed(points: &mut Vec<Point2>, reference: &[Point2]) -> usize {
    if points.len() < 2 {
        return 0;
    }
    points.pop();
    let offset = best_rotation(points, reference);
    points.rotate_left(offset);
    points.push(points[0]);
    offset
}

/// Exhaustive search for the cyclic offset minimizing the squared
/// displacement of `ring[(i + offset) % n]` against `reference[i]`.
pub(super) fn best_rotation(ring: &[Point2], reference: &[Point2]) -> usize {
    let n = ring.len();
    let mut best = 0;
    let mut min = f64::INFINITY;
    for offset in 0..n {
        let sum: f64 = reference
            .iter()
            .take(n)
            .enumerate()
            .map(|(i, q)| (ring[(i + offset) % n] - q).norm_squared())
            .sum();
        if sum < min {
            min = sum;
            best = offset;
        }
    }
    best
}

/// Rounds every coordinate to `decimals` decimal digits.
pub(super) fn round_polygon(polygon: &mut Polygon, decimals: u32) {
    for point in &mut polygon.points {
        point.x = round_to_decimals(point.x, decimals);
        point.y = round_to_decimals(point.y, decimals);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn cost(ring: &[Point2], reference: &[Point2], offset: usize) -> f64 {
        let n = ring.len();
        (0..n)
            .map(|i| (ring[(i + offset) % n] - reference[i]).norm_squared())
            .sum()
    }

    #[test]
    fn open_polygon_is_reversed_when_closer() {
        let mut polygon = Polygon::new(vec![p(10.0, 0.0), p(5.0, 0.0), p(0.0, 0.0)], false);
        let reference = [p(0.0, 1.0), p(5.0, 1.0), p(10.0, 1.0)];
        assert_eq!(align(&mut polygon, &reference), 1);
        assert_eq!(polygon.points, vec![p(0.0, 0.0), p(5.0, 0.0), p(10.0, 0.0)]);
    }

    #[test]
    fn open_polygon_tie_keeps_order() {
        let mut polygon = Polygon::new(vec![p(0.0, 0.0), p(1.0, 0.0), p(0.0, 0.0)], false);
        let reference = [p(0.0, 0.0), p(1.0, 0.0), p(0.0, 0.0)];
        assert_eq!(align(&mut polygon, &reference), 0);
    }

    #[test]
    fn closed_polygon_rotates_and_recloses() {
        let square = [p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)];
        let mut points: Vec<Point2> = square[2..].iter().chain(&square[..2]).copied().collect();
        points.push(points[0]);
        let mut polygon = Polygon::new(points, true);
        let mut reference = square.to_vec();
        reference.push(square[0]);

        assert_eq!(align(&mut polygon, &reference), 2);
        assert_eq!(polygon.points, reference);
    }

    #[test]
    fn chosen_rotation_is_optimal() {
        let ring: Vec<Point2> = (0..7)
            .map(|i| {
                let a = f64::from(i) * 0.9;
                p(a.cos() * 3.0 + f64::from(i % 3), a.sin() * 2.0)
            })
            .collect();
        let reference: Vec<Point2> = (0..7)
            .map(|i| {
                let a = f64::from(i) * 0.8 + 2.0;
                p(a.cos() * 2.5, a.sin() * 2.5 - 0.5)
            })
            .collect();
        let best = best_rotation(&ring, &reference);
        let best_cost = cost(&ring, &reference, best);
        for offset in 0..ring.len() {
            assert!(best_cost <= cost(&ring, &reference, offset));
        }
    }

    #[test]
    fn rotation_tie_picks_smallest_offset() {
        let ring = vec![p(1.0, 1.0); 4];
        let reference = vec![p(0.0, 0.0); 4];
        assert_eq!(best_rotation(&ring, &reference), 0);
    }

    #[test]
    fn rounding_to_four_decimals() {
        let mut polygon = Polygon::new(vec![p(1.234_56, -0.000_04), p(2.000_05, 9.999_99)], false);
        round_polygon(&mut polygon, 4);
        assert!((polygon.points[0].x - 1.2346).abs() < 1e-12);
        assert!(polygon.points[0].y.abs() < 1e-12);
        assert!((polygon.points[1].y - 10.0).abs() < 1e-12);
    }
}
