use crate::geometry::SubpathRun;
use crate::math::Point2;

/// Pads the shorter run list with zero-length runs until both lists have
/// the same length.
///
/// Each padding run sits at the start point of the run it will be paired
/// with, so extra subpaths grow out of (or shrink into) a single point.
pub(super) fn balance_runs(from: &mut Vec<SubpathRun>, to: &mut Vec<SubpathRun>) {
    pad(from, to);
    pad(to, from);
}

fn pad(short: &mut Vec<SubpathRun>, long: &[SubpathRun]) {
    while short.len() < long.len() {
        let anchor = long[short.len()].start().unwrap_or_else(Point2::origin);
        short.push(SubpathRun::degenerate(anchor));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Segment;

    fn run(from: (f64, f64), to: (f64, f64)) -> SubpathRun {
        SubpathRun::new(vec![Segment::line(
            Point2::new(from.0, from.1),
            Point2::new(to.0, to.1),
        )])
    }

    #[test]
    fn pads_the_shorter_side() {
        let mut from = vec![run((0.0, 0.0), (1.0, 0.0))];
        let mut to = vec![run((0.0, 0.0), (1.0, 1.0)), run((5.0, 6.0), (7.0, 8.0))];
        balance_runs(&mut from, &mut to);
        assert_eq!(from.len(), 2);
        assert_eq!(to.len(), 2);
        assert_eq!(from[1], SubpathRun::degenerate(Point2::new(5.0, 6.0)));
        assert!(from[1].arc_length.abs() < f64::EPSILON);
    }

    #[test]
    fn pads_either_direction() {
        let mut from = vec![run((0.0, 0.0), (1.0, 0.0)), run((2.0, 2.0), (3.0, 3.0))];
        let mut to = Vec::new();
        balance_runs(&mut from, &mut to);
        assert_eq!(to.len(), 2);
        assert_eq!(to[0].start(), Some(Point2::new(0.0, 0.0)));
        assert_eq!(to[1].start(), Some(Point2::new(2.0, 2.0)));
    }

    #[test]
    fn equal_counts_are_untouched() {
        let mut from = vec![run((0.0, 0.0), (1.0, 0.0))];
        let mut to = vec![run((4.0, 0.0), (1.0, 0.0))];
        balance_runs(&mut from, &mut to);
        assert_eq!(from.len(), 1);
        assert_eq!(to.len(), 1);
    }
}
