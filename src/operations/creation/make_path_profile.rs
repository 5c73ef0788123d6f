use crate::error::Result;
use crate::geometry::{ArcSegment, CurveProfile, Segment};
use crate::math::{Point2, TOLERANCE};
use crate::path_data::{self, CommandKind, PathCommand};

/// Builds a curve profile from SVG path data.
///
/// Parsing is lenient: unsupported commands and malformed argument groups
/// are skipped (with a warning) and the rest of the path is still built.
pub struct MakePathProfile {
    commands: Vec<PathCommand>,
}

impl MakePathProfile {
    /// Creates a new `MakePathProfile` operation from path data text.
    #[must_use]
    pub fn new(data: &str) -> Self {
        Self {
            commands: path_data::parse(data),
        }
    }

    /// Creates the operation from already parsed commands.
    #[must_use]
    pub fn from_commands(commands: Vec<PathCommand>) -> Self {
        Self { commands }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Does not fail for any input; the `Result` matches the other builders.
    pub fn execute(&self) -> Result<CurveProfile> {
        let mut builder = PathBuilder::default();
        for command in &self.commands {
            builder.apply(command);
        }
        let mut profile = builder.profile;
        profile.finish();
        Ok(profile)
    }
}

/// Pen state while replaying path commands.
#[derive(Default)]
struct PathBuilder {
    profile: CurveProfile,
    current: Point2,
    subpath_start: Point2,
    /// Control point of the previous segment when it was a quadratic.
    last_quad_control: Option<Point2>,
    /// Second control point of the previous segment when it was a cubic.
    last_cubic_control: Option<Point2>,
}

impl PathBuilder {
    fn resolve(&self, point: Point2, relative: bool) -> Point2 {
        if relative {
            self.current + point.coords
        } else {
            point
        }
    }

    /// Mirrors `control` through the current point, or returns the current
    /// point when there is nothing to mirror.
    fn reflect(&self, control: Option<Point2>) -> Point2 {
        control.map_or(self.current, |c| self.current + (self.current - c))
    }

    fn apply(&mut self, command: &PathCommand) {
        let relative = command.relative;
        let mut quad_control = None;
        let mut cubic_control = None;

        match command.kind {
            CommandKind::MoveTo(p) => {
                self.current = self.resolve(p, relative);
                self.subpath_start = self.current;
            }
            CommandKind::LineTo(p) => {
                let to = self.resolve(p, relative);
                self.line_to(to);
            }
            CommandKind::HorizontalTo(x) => {
                let x = if relative { self.current.x + x } else { x };
                self.line_to(Point2::new(x, self.current.y));
            }
            CommandKind::VerticalTo(y) => {
                let y = if relative { self.current.y + y } else { y };
                self.line_to(Point2::new(self.current.x, y));
            }
            CommandKind::QuadTo { control, to } => {
                let control = self.resolve(control, relative);
                let to = self.resolve(to, relative);
                self.profile.push(Segment::quad(self.current, control, to));
                self.current = to;
                quad_control = Some(control);
            }
            CommandKind::SmoothQuadTo(to) => {
                let control = self.reflect(self.last_quad_control);
                let to = self.resolve(to, relative);
                self.profile.push(Segment::quad(self.current, control, to));
                self.current = to;
                quad_control = Some(control);
            }
            CommandKind::CubicTo {
                control1,
                control2,
                to,
            } => {
                let control1 = self.resolve(control1, relative);
                let control2 = self.resolve(control2, relative);
                let to = self.resolve(to, relative);
                self.profile
                    .push(Segment::cubic(self.current, control1, control2, to));
                self.current = to;
                cubic_control = Some(control2);
            }
            CommandKind::SmoothCubicTo { control2, to } => {
                let control1 = self.reflect(self.last_cubic_control);
                let control2 = self.resolve(control2, relative);
                let to = self.resolve(to, relative);
                self.profile
                    .push(Segment::cubic(self.current, control1, control2, to));
                self.current = to;
                cubic_control = Some(control2);
            }
            CommandKind::ArcTo {
                rx,
                ry,
                x_rotation,
                large_arc,
                sweep,
                to,
            } => {
                let to = self.resolve(to, relative);
                match ArcSegment::from_svg(
                    self.current,
                    to,
                    rx,
                    ry,
                    x_rotation.to_radians(),
                    large_arc,
                    sweep,
                ) {
                    Some(arc) => {
                        self.profile.push(arc.into());
                        self.current = to;
                    }
                    // Zero radius draws a straight line; a zero-length arc is omitted.
                    None if (to - self.current).norm() >= TOLERANCE => self.line_to(to),
                    None => {}
                }
            }
            CommandKind::ClosePath => {
                if self.current != self.subpath_start {
                    self.line_to(self.subpath_start);
                }
                self.current = self.subpath_start;
            }
        }

        self.last_quad_control = quad_control;
        self.last_cubic_control = cubic_control;
    }

    fn line_to(&mut self, to: Point2) {
        self.profile.push(Segment::line(self.current, to));
        self.current = to;
    }
}
