use super::{Point2, TOLERANCE};

/// Number of uniform parameter steps used when building a table.
pub const DEFAULT_SAMPLES: usize = 64;

/// Cumulative chord lengths of a parametric curve sampled at uniform
/// parameter steps over `[0, 1]`.
///
/// Maps arc-length fractions back to curve parameters by linear
/// interpolation between samples, which keeps the mapping monotonic.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcLengthTable {
    lengths: Vec<f64>,
}

impl ArcLengthTable {
    /// Samples `eval` at `samples + 1` uniform parameters.
    #[must_use]
    pub fn new<F>(eval: F, samples: usize) -> Self
    where
        F: Fn(f64) -> Point2,
    {
        let samples = samples.max(1);
        let mut lengths = Vec::with_capacity(samples + 1);
        lengths.push(0.0);
        let mut prev = eval(0.0);
        let mut total = 0.0;
        for i in 1..=samples {
            #[allow(clippy::cast_precision_loss)]
            let t = i as f64 / samples as f64;
            let p = eval(t);
            total += (p - prev).norm();
            lengths.push(total);
            prev = p;
        }
        Self { lengths }
    }

    /// Total approximated length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.lengths.last().copied().unwrap_or(0.0)
    }

    /// Returns the curve parameter at which the given fraction of the total
    /// length has been travelled.
    ///
    /// The fraction is clamped to `[0, 1]`, and the ends map to exactly 0 and
    /// 1. A zero-length table maps the fraction straight through.
    #[must_use]
    pub fn parameter_at(&self, fraction: f64) -> f64 {
        if fraction <= 0.0 {
            return 0.0;
        }
        if fraction >= 1.0 {
            return 1.0;
        }
        let total = self.length();
        if total < TOLERANCE {
            return fraction;
        }
        let target = fraction * total;
        let idx = self.lengths.partition_point(|&l| l < target);
        if idx == 0 {
            return 0.0;
        }
        let steps = self.lengths.len() - 1;
        if idx > steps {
            return 1.0;
        }
        let before = self.lengths[idx - 1];
        let span = self.lengths[idx] - before;
        let local = if span > 0.0 {
            (target - before) / span
        } else {
            0.0
        };
        #[allow(clippy::cast_precision_loss)]
        let t = ((idx - 1) as f64 + local) / steps as f64;
        t
    }
}
