//! Shape morphing between two curve profiles.
//!
//! Both profiles are split into subpath runs, the run lists are padded to
//! equal length, and every pair of runs is turned into two polygons with
//! the same number of points, ordered so that corresponding points travel
//! as little as possible. A [`ProfileInterpolator`] then blends those
//! polygons for any progress value.

mod balance;
mod resample;
mod rotate;

use tracing::{debug, trace};

use crate::error::{ConfigError, Result};
use crate::geometry::CurveProfile;
use crate::math::lerp_point;
use crate::operations::creation::sharp_polyline;
use crate::tessellation::{approximate_polygon, Polygon, TessellationParams};

use balance::balance_runs;
use resample::add_points;
use rotate::{align, round_polygon};

/// Largest accepted rounding precision.
const MAX_DECIMALS: u32 = 15;

/// Parameters for building a morph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MorphParams {
    tessellation: TessellationParams,
    decimals: u32,
}

impl MorphParams {
    /// Creates morph parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `decimals` exceeds 15.
    pub fn new(tessellation: TessellationParams, decimals: u32) -> Result<Self> {
        if decimals > MAX_DECIMALS {
            return Err(ConfigError::InvalidParameter {
                parameter: "decimals",
                value: f64::from(decimals),
                reason: "must be at most 15",
            }
            .into());
        }
        Ok(Self {
            tessellation,
            decimals,
        })
    }

    /// Polygon approximation settings.
    #[must_use]
    pub fn tessellation(&self) -> &TessellationParams {
        &self.tessellation
    }

    /// Number of decimal digits polygon coordinates are rounded to.
    #[must_use]
    pub fn decimals(&self) -> u32 {
        self.decimals
    }
}

impl Default for MorphParams {
    fn default() -> Self {
        Self {
            tessellation: TessellationParams::default(),
            decimals: 4,
        }
    }
}

/// Corresponding polygons for one pair of subpath runs.
///
/// Both polygons always have the same number of points.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonPair {
    pub from: Polygon,
    pub to: Polygon,
}

/// Prepares the morph from one profile to another.
pub struct MorphProfiles<'a> {
    from: &'a CurveProfile,
    to: &'a CurveProfile,
    params: MorphParams,
}

impl<'a> MorphProfiles<'a> {
    /// Creates a new `MorphProfiles` operation with default parameters.
    #[must_use]
    pub fn new(from: &'a CurveProfile, to: &'a CurveProfile) -> Self {
        Self {
            from,
            to,
            params: MorphParams::default(),
        }
    }

    /// Replaces the parameters.
    #[must_use]
    pub fn with_params(mut self, params: MorphParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the operation, pairing up the subpaths of both profiles.
    ///
    /// # Errors
    ///
    /// Does not currently fail; parameters are validated on construction.
    pub fn execute(&self) -> Result<ProfileInterpolator> {
        let mut from_runs = self.from.subpath_runs();
        let mut to_runs = self.to.subpath_runs();
        let (from_count, to_count) = (from_runs.len(), to_runs.len());
        balance_runs(&mut from_runs, &mut to_runs);

        let tessellation = self.params.tessellation();
        let pairs: Vec<PolygonPair> = from_runs
            .iter()
            .zip(&to_runs)
            .enumerate()
            .map(|(index, (from_run, to_run))| {
                let mut from = approximate_polygon(from_run, tessellation);
                let mut to = approximate_polygon(to_run, tessellation);
                let from_len = from.len();
                let to_len = to.len();
                if from_len < to_len {
                    add_points(&mut from.points, to_len - from_len);
                } else {
                    add_points(&mut to.points, from_len - to_len);
                }

                let offset = if !from.closed && to.closed {
                    align(&mut to, &from.points)
                } else {
                    align(&mut from, &to.points)
                };
                round_polygon(&mut from, self.params.decimals());
                round_polygon(&mut to, self.params.decimals());
                trace!(
                    index,
                    from_points = from_len,
                    to_points = to_len,
                    points = from.len(),
                    offset,
                    "paired subpaths"
                );
                PolygonPair { from, to }
            })
            .collect();

        debug!(
            from_runs = from_count,
            to_runs = to_count,
            pairs = pairs.len(),
            "built profile interpolator"
        );
        Ok(ProfileInterpolator { pairs })
    }
}

/// Blends the paired polygons of two profiles.
///
/// Immutable once built, so it can be shared between threads and
/// evaluated in any order.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileInterpolator {
    pairs: Vec<PolygonPair>,
}

impl ProfileInterpolator {
    /// The polygon pairs, one per subpath.
    #[must_use]
    pub fn pairs(&self) -> &[PolygonPair] {
        &self.pairs
    }

    /// Returns the profile at progress `t`.
    ///
    /// `t <= 0` reproduces the `from` polygons and `t >= 1` the `to`
    /// polygons exactly; in between, points are interpolated linearly. Each
    /// polygon becomes a closed polyline, and the result concatenates them
    /// with summed arc length and the smallest `min_sin`.
    #[must_use]
    pub fn evaluate(&self, t: f64) -> CurveProfile {
        let mut profile = CurveProfile::new();
        for pair in &self.pairs {
            let points = if t <= 0.0 {
                pair.from.points.clone()
            } else if t >= 1.0 {
                pair.to.points.clone()
            } else {
                pair.from
                    .points
                    .iter()
                    .zip(&pair.to.points)
                    .map(|(a, b)| lerp_point(a, b, t))
                    .collect()
            };
            profile.append(sharp_polyline(&points, true));
        }
        profile.closed = !self.pairs.is_empty()
            && self
                .pairs
                .iter()
                .all(|pair| pair.from.closed && pair.to.closed);
        profile
    }
}

/// Builds a morph from `from` to `to` with default parameters and
/// evaluates it once at `t`.
///
/// # Errors
///
/// Propagates errors from [`MorphProfiles::execute`].
pub fn interpolate_profiles(
    from: &CurveProfile,
    to: &CurveProfile,
    t: f64,
) -> Result<CurveProfile> {
    Ok(MorphProfiles::new(from, to).execute()?.evaluate(t))
}
