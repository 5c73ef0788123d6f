//! SVG path data tokenizing.
//!
//! Supports `M L H V Q T C S A Z` in absolute (upper case) and relative
//! (lower case) form, implicit command repetition, and the implicit lineto
//! after a moveto. Numbers and flags are read by [`svgtypes::PathParser`].
//!
//! [`parse`] is lenient: unsupported commands, malformed argument groups and
//! non-finite numbers are skipped up to the next command letter and reported
//! through `tracing::warn!`. [`PathData::from_str`] is strict and fails on
//! the first such problem.

use std::str::FromStr;

use svgtypes::{PathParser, PathSegment};
use tracing::warn;

use crate::error::PathDataError;
use crate::math::Point2;

/// One path command with its arguments as written.
///
/// Coordinates are absolute or relative according to `relative`; the arc
/// x-axis rotation is in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathCommand {
    pub kind: CommandKind,
    pub relative: bool,
}

/// Command payloads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CommandKind {
    MoveTo(Point2),
    LineTo(Point2),
    HorizontalTo(f64),
    VerticalTo(f64),
    QuadTo {
        control: Point2,
        to: Point2,
    },
    SmoothQuadTo(Point2),
    CubicTo {
        control1: Point2,
        control2: Point2,
        to: Point2,
    },
    SmoothCubicTo {
        control2: Point2,
        to: Point2,
    },
    ArcTo {
        rx: f64,
        ry: f64,
        x_rotation: f64,
        large_arc: bool,
        sweep: bool,
        to: Point2,
    },
    ClosePath,
}

impl CommandKind {
    /// Whether every argument is a finite number.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        let point = |p: &Point2| p.x.is_finite() && p.y.is_finite();
        match self {
            Self::MoveTo(to) | Self::LineTo(to) | Self::SmoothQuadTo(to) => point(to),
            Self::HorizontalTo(v) | Self::VerticalTo(v) => v.is_finite(),
            Self::QuadTo { control, to } => point(control) && point(to),
            Self::CubicTo {
                control1,
                control2,
                to,
            } => point(control1) && point(control2) && point(to),
            Self::SmoothCubicTo { control2, to } => point(control2) && point(to),
            Self::ArcTo {
                rx,
                ry,
                x_rotation,
                to,
                ..
            } => rx.is_finite() && ry.is_finite() && x_rotation.is_finite() && point(to),
            Self::ClosePath => true,
        }
    }
}

impl From<PathSegment> for PathCommand {
    fn from(segment: PathSegment) -> Self {
        let (abs, kind) = match segment {
            PathSegment::MoveTo { abs, x, y } => (abs, CommandKind::MoveTo(Point2::new(x, y))),
            PathSegment::LineTo { abs, x, y } => (abs, CommandKind::LineTo(Point2::new(x, y))),
            PathSegment::HorizontalLineTo { abs, x } => (abs, CommandKind::HorizontalTo(x)),
            PathSegment::VerticalLineTo { abs, y } => (abs, CommandKind::VerticalTo(y)),
            PathSegment::CurveTo {
                abs,
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => (
                abs,
                CommandKind::CubicTo {
                    control1: Point2::new(x1, y1),
                    control2: Point2::new(x2, y2),
                    to: Point2::new(x, y),
                },
            ),
            PathSegment::SmoothCurveTo { abs, x2, y2, x, y } => (
                abs,
                CommandKind::SmoothCubicTo {
                    control2: Point2::new(x2, y2),
                    to: Point2::new(x, y),
                },
            ),
            PathSegment::Quadratic { abs, x1, y1, x, y } => (
                abs,
                CommandKind::QuadTo {
                    control: Point2::new(x1, y1),
                    to: Point2::new(x, y),
                },
            ),
            PathSegment::SmoothQuadratic { abs, x, y } => {
                (abs, CommandKind::SmoothQuadTo(Point2::new(x, y)))
            }
            PathSegment::EllipticalArc {
                abs,
                rx,
                ry,
                x_axis_rotation,
                large_arc,
                sweep,
                x,
                y,
            } => (
                abs,
                CommandKind::ArcTo {
                    rx,
                    ry,
                    x_rotation: x_axis_rotation,
                    large_arc,
                    sweep,
                    to: Point2::new(x, y),
                },
            ),
            PathSegment::ClosePath { abs } => (abs, CommandKind::ClosePath),
        };
        Self {
            kind,
            relative: !abs,
        }
    }
}

/// A strictly parsed sequence of path commands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathData {
    commands: Vec<PathCommand>,
}

impl PathData {
    /// Returns the parsed commands.
    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Consumes the path data, returning its commands.
    #[must_use]
    pub fn into_commands(self) -> Vec<PathCommand> {
        self.commands
    }
}

impl FromStr for PathData {
    type Err = PathDataError;

    fn from_str(src: &str) -> Result<Self, Self::Err> {
        let mut commands = Vec::new();
        for (offset, chunk) in command_chunks(src) {
            parse_chunk(&mut commands, offset, chunk)?;
        }
        Ok(Self { commands })
    }
}

/// Parses path data leniently, skipping anything unrecognised.
#[must_use]
pub fn parse(src: &str) -> Vec<PathCommand> {
    let mut commands = Vec::new();
    for (offset, chunk) in command_chunks(src) {
        if let Err(err) = parse_chunk(&mut commands, offset, chunk) {
            warn!(error = %err, "skipping path data");
        }
    }
    commands
}

fn is_supported(letter: char) -> bool {
    matches!(
        letter.to_ascii_uppercase(),
        'M' | 'L' | 'H' | 'V' | 'Q' | 'T' | 'C' | 'S' | 'A' | 'Z'
    )
}

/// Splits path data in front of every command letter, returning each piece
/// with its byte offset. `e` and `E` are number exponents, never commands.
fn command_chunks(src: &str) -> Vec<(usize, &str)> {
    let mut starts: Vec<usize> = src
        .char_indices()
        .filter(|&(_, c)| c.is_ascii_alphabetic() && !matches!(c, 'e' | 'E'))
        .map(|(i, _)| i)
        .collect();
    if starts.first() != Some(&0) {
        starts.insert(0, 0);
    }

    let mut chunks = Vec::with_capacity(starts.len());
    for (i, &start) in starts.iter().enumerate() {
        let end = starts.get(i + 1).copied().unwrap_or(src.len());
        let text = &src[start..end];
        let trimmed = text.trim_start();
        if !trimmed.is_empty() {
            chunks.push((start + text.len() - trimmed.len(), trimmed));
        }
    }
    chunks
}

/// Appends the commands of one chunk. Commands read before a failure stay
/// in `commands`.
fn parse_chunk(
    commands: &mut Vec<PathCommand>,
    offset: usize,
    chunk: &str,
) -> Result<(), PathDataError> {
    let Some(letter) = chunk.chars().next() else {
        return Ok(());
    };
    if letter.is_ascii_alphabetic() && !is_supported(letter) {
        return Err(PathDataError::UnsupportedCommand {
            command: letter,
            offset,
        });
    }
    if commands.is_empty() && !matches!(letter, 'M' | 'm') {
        return Err(PathDataError::MissingMoveTo { found: letter });
    }

    let invalid = |reason: String| PathDataError::InvalidArguments {
        command: letter,
        offset,
        reason,
    };
    // The parser wants a leading moveto; the anchor is dropped again.
    let anchored = format!("M0 0 {chunk}");
    for segment in PathParser::from(anchored.as_str()).skip(1) {
        let command = PathCommand::from(segment.map_err(|err| invalid(err.to_string()))?);
        if !command.kind.is_finite() {
            return Err(invalid("number out of range".to_owned()));
        }
        commands.push(command);
    }
    Ok(())
}
