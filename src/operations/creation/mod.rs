//! Profile builders.

mod make_ellipse_profile;
mod make_path_profile;
mod make_polyline_profile;
mod make_rect_profile;

pub use make_ellipse_profile::MakeEllipseProfile;
pub use make_path_profile::MakePathProfile;
pub use make_polyline_profile::MakePolylineProfile;
pub(crate) use make_polyline_profile::sharp_polyline;
pub use make_rect_profile::{CornerStyle, MakeRectProfile, RectCorners};

use crate::error::GeometryError;

fn check_finite(parameter: &'static str, value: f64) -> Result<(), GeometryError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(GeometryError::NonFinite { parameter, value })
    }
}

/// Sizes and radii must be finite and non-negative.
fn check_size(parameter: &'static str, value: f64) -> Result<(), GeometryError> {
    check_finite(parameter, value)?;
    if value < 0.0 {
        return Err(GeometryError::NegativeSize { parameter, value });
    }
    Ok(())
}
