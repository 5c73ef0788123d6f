//! Prints SVG path data for a morph between two shapes.
//!
//! Usage:
//! ```text
//! cargo run --example morph                          # square into a circle
//! cargo run --example morph -- "M0 0 L40 0 L20 30 Z" "M0 0 C0 40 40 40 40 0 Z" 8
//! RUST_LOG=curvemorph=trace cargo run --example morph
//! ```
//!
//! Arguments are the source path data, the target path data, and the number
//! of frames (at least 2). Path data given on the command line is parsed
//! strictly, so a typo is reported instead of skipped.

use curvemorph::geometry::CurveProfile;
use curvemorph::math::Point2;
use curvemorph::operations::creation::{MakeEllipseProfile, MakePathProfile, MakeRectProfile};
use curvemorph::operations::morph::MorphProfiles;
use curvemorph::path_data::PathData;
use curvemorph::Result;

const DEFAULT_FRAMES: u32 = 5;

fn main() -> Result<()> {
    // Default: WARN for everything, DEBUG for curvemorph.
    // Override with RUST_LOG env var (e.g. RUST_LOG=curvemorph=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("curvemorph=debug".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut args = std::env::args().skip(1);
    let (from, to) = match (args.next(), args.next()) {
        (Some(from), Some(to)) => (profile_from_args(&from)?, profile_from_args(&to)?),
        _ => default_shapes()?,
    };
    let frames = args
        .next()
        .and_then(|n| n.parse::<u32>().ok())
        .unwrap_or(DEFAULT_FRAMES)
        .max(2);

    let morph = MorphProfiles::new(&from, &to).execute()?;
    for frame in 0..frames {
        let t = f64::from(frame) / f64::from(frames - 1);
        let profile = morph.evaluate(t);
        println!(
            "t={t:.3} length={:.3} min_sin={:.3} d=\"{}\"",
            profile.arc_length,
            profile.min_sin,
            profile.to_path_data()
        );
    }
    Ok(())
}

fn profile_from_args(data: &str) -> Result<CurveProfile> {
    let data: PathData = data.parse()?;
    MakePathProfile::from_commands(data.into_commands()).execute()
}

fn default_shapes() -> Result<(CurveProfile, CurveProfile)> {
    let square = MakeRectProfile::new(Point2::new(-20.0, -20.0), 40.0, 40.0).execute()?;
    let circle = MakeEllipseProfile::circle(Point2::origin(), 25.0).execute()?;
    Ok((square, circle))
}
