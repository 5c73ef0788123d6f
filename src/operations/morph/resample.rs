use crate::math::polygon_2d::polyline_length;
use crate::math::{lerp_point, Point2};

/// Inserts `count` points along the chain of `points`, spaced
/// `perimeter / count` apart starting half a step in.
///
/// Points are inserted into the list as it grows, so a long edge may
/// receive several. The shape of the chain does not change. On a chain of
/// zero length every new point duplicates its neighbour.
pub(super) fn add_points(points: &mut Vec<Point2>, count: usize) {
    if count == 0 || points.is_empty() {
        return;
    }
    let target = points.len() + count;
    #[allow(clippy::cast_precision_loss)]
    let step = polyline_length(points) / count as f64;
    let mut insert_at = step * 0.5;
    let mut walked = 0.0;
    let mut i = 0;

    while points.len() < target {
        if i + 1 >= points.len() {
            // Rounding carried the cursor past the end.
            let last = points[points.len() - 1];
            points.push(last);
            continue;
        }
        let a = points[i];
        let b = points[i + 1];
        let edge = (b - a).norm();
        if insert_at <= walked + edge {
            let point = if edge > 0.0 {
                lerp_point(&a, &b, (insert_at - walked) / edge)
            } else {
                a
            };
            points.insert(i + 1, point);
            insert_at += step;
            continue;
        }
        walked += edge;
        i += 1;
    }
}
