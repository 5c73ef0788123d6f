pub mod draw;
mod profile;
pub mod segment;
mod subpath;

pub use draw::{draw_profile, DrawCommand, PathRecorder, PathSink};
pub use profile::CurveProfile;
pub use segment::{
    ArcSegment, CubicBezierSegment, CurvePoint, LineSegment, QuadBezierSegment, Segment,
    SegmentGeometry,
};
pub use subpath::SubpathRun;
