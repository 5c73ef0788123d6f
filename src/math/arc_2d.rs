/// 2D elliptical arc math utilities.
///
/// Angles follow the SVG convention: positive angles turn from the +x axis
/// towards the +y axis, so with a y-down viewport a positive sweep is
/// clockwise on screen.
use std::f64::consts::TAU;

use super::{Point2, Vector2, TOLERANCE};

/// Center parameterization of an elliptical arc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcCenter {
    pub center: Point2,
    pub rx: f64,
    pub ry: f64,
    pub start_angle: f64,
    /// Signed angular extent. Positive when the SVG sweep flag is set.
    pub delta_angle: f64,
}

/// Converts SVG endpoint arc parameters to center form.
///
/// `x_rotation` is in radians. Radii that are too small to span the chord are
/// scaled up uniformly, and negative radii are taken by magnitude.
///
/// Returns `None` for the cases SVG treats as a straight line: coincident
/// endpoints or a zero radius.
#[must_use]
pub fn svg_arc_to_center(
    from: &Point2,
    to: &Point2,
    rx: f64,
    ry: f64,
    x_rotation: f64,
    large_arc: bool,
    sweep: bool,
) -> Option<ArcCenter> {
    let mut rx = rx.abs();
    let mut ry = ry.abs();
    if rx < TOLERANCE || ry < TOLERANCE || !rx.is_finite() || !ry.is_finite() {
        return None;
    }
    if (to - from).norm() < TOLERANCE {
        return None;
    }

    let (sin_phi, cos_phi) = x_rotation.sin_cos();
    let half = (from - to) * 0.5;
    // Endpoint in the ellipse-aligned frame.
    let x1 = cos_phi * half.x + sin_phi * half.y;
    let y1 = -sin_phi * half.x + cos_phi * half.y;

    let lambda = (x1 * x1) / (rx * rx) + (y1 * y1) / (ry * ry);
    if lambda > 1.0 {
        let scale = lambda.sqrt();
        rx *= scale;
        ry *= scale;
    }

    let rx2 = rx * rx;
    let ry2 = ry * ry;
    let num = rx2 * ry2 - rx2 * y1 * y1 - ry2 * x1 * x1;
    let den = rx2 * y1 * y1 + ry2 * x1 * x1;
    let coef = if den < TOLERANCE {
        0.0
    } else {
        (num / den).max(0.0).sqrt()
    };
    let sign = if large_arc == sweep { -1.0 } else { 1.0 };
    let cx1 = sign * coef * (rx * y1 / ry);
    let cy1 = sign * coef * (-ry * x1 / rx);

    let mid = Point2::new((from.x + to.x) * 0.5, (from.y + to.y) * 0.5);
    let center = Point2::new(
        cos_phi * cx1 - sin_phi * cy1 + mid.x,
        sin_phi * cx1 + cos_phi * cy1 + mid.y,
    );

    let u = Vector2::new((x1 - cx1) / rx, (y1 - cy1) / ry);
    let v = Vector2::new((-x1 - cx1) / rx, (-y1 - cy1) / ry);
    let start_angle = u.y.atan2(u.x);
    let mut delta_angle = (u.x * v.y - u.y * v.x).atan2(u.dot(&v));
    if sweep && delta_angle < 0.0 {
        delta_angle += TAU;
    } else if !sweep && delta_angle > 0.0 {
        delta_angle -= TAU;
    }

    Some(ArcCenter {
        center,
        rx,
        ry,
        start_angle,
        delta_angle,
    })
}

/// Evaluates a point on a rotated ellipse at the given angle.
#[must_use]
pub fn ellipse_point(center: &Point2, rx: f64, ry: f64, x_rotation: f64, angle: f64) -> Point2 {
    let (sin_phi, cos_phi) = x_rotation.sin_cos();
    let (sin_a, cos_a) = angle.sin_cos();
    let x = rx * cos_a;
    let y = ry * sin_a;
    Point2::new(
        center.x + cos_phi * x - sin_phi * y,
        center.y + sin_phi * x + cos_phi * y,
    )
}

/// Derivative of [`ellipse_point`] with respect to the angle.
#[must_use]
pub fn ellipse_derivative(rx: f64, ry: f64, x_rotation: f64, angle: f64) -> Vector2 {
    let (sin_phi, cos_phi) = x_rotation.sin_cos();
    let (sin_a, cos_a) = angle.sin_cos();
    let dx = -rx * sin_a;
    let dy = ry * cos_a;
    Vector2::new(cos_phi * dx - sin_phi * dy, sin_phi * dx + cos_phi * dy)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    const TOL: f64 = 1e-10;

    #[test]
    fn semicircle_with_sweep() {
        let from = Point2::new(0.0, 0.0);
        let to = Point2::new(2.0, 0.0);
        let arc = svg_arc_to_center(&from, &to, 1.0, 1.0, 0.0, false, true).unwrap();
        assert!((arc.center.x - 1.0).abs() < TOL, "cx={}", arc.center.x);
        assert!(arc.center.y.abs() < TOL, "cy={}", arc.center.y);
        assert!((arc.delta_angle - PI).abs() < TOL, "delta={}", arc.delta_angle);

        // Positive sweep from angle π passes through 3π/2 → (1, -1).
        let mid = ellipse_point(&arc.center, 1.0, 1.0, 0.0, arc.start_angle + arc.delta_angle * 0.5);
        assert!((mid.x - 1.0).abs() < TOL, "mid.x={}", mid.x);
        assert!((mid.y + 1.0).abs() < TOL, "mid.y={}", mid.y);
    }

    #[test]
    fn semicircle_without_sweep_goes_other_way() {
        let from = Point2::new(0.0, 0.0);
        let to = Point2::new(2.0, 0.0);
        let arc = svg_arc_to_center(&from, &to, 1.0, 1.0, 0.0, false, false).unwrap();
        assert!((arc.delta_angle + PI).abs() < TOL, "delta={}", arc.delta_angle);
        let mid = ellipse_point(&arc.center, 1.0, 1.0, 0.0, arc.start_angle + arc.delta_angle * 0.5);
        assert!((mid.y - 1.0).abs() < TOL, "mid.y={}", mid.y);
    }

    #[test]
    fn quarter_circle_center() {
        let from = Point2::new(1.0, 0.0);
        let to = Point2::new(0.0, 1.0);
        let arc = svg_arc_to_center(&from, &to, 1.0, 1.0, 0.0, false, true).unwrap();
        assert!(arc.center.x.abs() < TOL);
        assert!(arc.center.y.abs() < TOL);
        assert!(arc.start_angle.abs() < TOL);
        assert!((arc.delta_angle - FRAC_PI_2).abs() < TOL);
    }

    #[test]
    fn large_arc_flag_picks_long_way() {
        let from = Point2::new(1.0, 0.0);
        let to = Point2::new(0.0, 1.0);
        let arc = svg_arc_to_center(&from, &to, 1.0, 1.0, 0.0, true, true).unwrap();
        assert!((arc.delta_angle - 3.0 * FRAC_PI_2).abs() < 1e-9, "delta={}", arc.delta_angle);
        // The long way round has its center on the far side of the chord.
        assert!((arc.center.x - 1.0).abs() < 1e-9);
        assert!((arc.center.y - 1.0).abs() < 1e-9);
    }

    #[test]
    fn small_radius_is_scaled_up() {
        let from = Point2::new(0.0, 0.0);
        let to = Point2::new(4.0, 0.0);
        let arc = svg_arc_to_center(&from, &to, 1.0, 1.0, 0.0, false, true).unwrap();
        assert!((arc.rx - 2.0).abs() < TOL, "rx={}", arc.rx);
        assert!((arc.ry - 2.0).abs() < TOL, "ry={}", arc.ry);
        assert!((arc.center.x - 2.0).abs() < TOL);
    }

    #[test]
    fn degenerate_inputs_are_rejected() {
        let p = Point2::new(1.0, 1.0);
        let q = Point2::new(2.0, 1.0);
        assert!(svg_arc_to_center(&p, &p, 1.0, 1.0, 0.0, false, true).is_none());
        assert!(svg_arc_to_center(&p, &q, 0.0, 1.0, 0.0, false, true).is_none());
        assert!(svg_arc_to_center(&p, &q, 1.0, f64::NAN, 0.0, false, true).is_none());
    }

    #[test]
    fn endpoints_reproduced_with_rotation() {
        let from = Point2::new(3.0, 1.0);
        let to = Point2::new(7.0, 4.0);
        let rot = 0.5;
        let arc = svg_arc_to_center(&from, &to, 5.0, 2.0, rot, false, true).unwrap();
        let p0 = ellipse_point(&arc.center, arc.rx, arc.ry, rot, arc.start_angle);
        let p1 = ellipse_point(&arc.center, arc.rx, arc.ry, rot, arc.start_angle + arc.delta_angle);
        assert!((p0 - from).norm() < 1e-9, "p0={p0}");
        assert!((p1 - to).norm() < 1e-9, "p1={p1}");
    }

    #[test]
    fn derivative_is_perpendicular_on_circle() {
        let c = Point2::new(0.0, 0.0);
        let angle = 0.3;
        let p = ellipse_point(&c, 2.0, 2.0, 0.0, angle);
        let d = ellipse_derivative(2.0, 2.0, 0.0, angle);
        assert!((p - c).dot(&d).abs() < TOL);
    }
}
