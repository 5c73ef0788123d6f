use std::f64::consts::{PI, TAU};
use std::fmt::Write as _;

use crate::math::arc_2d::ellipse_point;
use crate::math::{round_to_decimals, Point2, TOLERANCE};

use super::profile::CurveProfile;
use super::segment::{CurvePoint, SegmentGeometry};

/// A 2D path-building surface, shaped after the canvas path API.
pub trait PathSink {
    fn move_to(&mut self, point: Point2);

    fn line_to(&mut self, point: Point2);

    fn quad_to(&mut self, control: Point2, point: Point2);

    fn cubic_to(&mut self, control1: Point2, control2: Point2, point: Point2);

    /// Adds an elliptical arc from `start_angle` to `end_angle`. Like the
    /// canvas API, a straight line joins the current point to the arc start.
    #[allow(clippy::too_many_arguments)]
    fn ellipse(
        &mut self,
        center: Point2,
        rx: f64,
        ry: f64,
        rotation: f64,
        start_angle: f64,
        end_angle: f64,
        counterclockwise: bool,
    );

    fn close_path(&mut self);
}

/// A single recorded [`PathSink`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    MoveTo(Point2),
    LineTo(Point2),
    QuadTo(Point2, Point2),
    CubicTo(Point2, Point2, Point2),
    Ellipse {
        center: Point2,
        rx: f64,
        ry: f64,
        rotation: f64,
        start_angle: f64,
        end_angle: f64,
        counterclockwise: bool,
    },
    ClosePath,
}

/// A [`PathSink`] that records every call.
#[derive(Debug, Clone, Default)]
pub struct PathRecorder {
    commands: Vec<DrawCommand>,
}

impl PathRecorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Renders the recording as SVG path data with absolute commands.
    ///
    /// Coordinates are rounded to four decimals. Ellipse calls become one or
    /// two `A` commands (a full turn is split in half).
    #[must_use]
    pub fn to_path_data(&self) -> String {
        let mut out = String::new();
        let mut current: Option<Point2> = None;
        let mut subpath_start: Option<Point2> = None;
        for cmd in &self.commands {
            match *cmd {
                DrawCommand::MoveTo(p) => {
                    push_command(&mut out, 'M', &[p.x, p.y]);
                    current = Some(p);
                    subpath_start = Some(p);
                }
                DrawCommand::LineTo(p) => {
                    push_command(&mut out, 'L', &[p.x, p.y]);
                    current = Some(p);
                }
                DrawCommand::QuadTo(c, p) => {
                    push_command(&mut out, 'Q', &[c.x, c.y, p.x, p.y]);
                    current = Some(p);
                }
                DrawCommand::CubicTo(c1, c2, p) => {
                    push_command(&mut out, 'C', &[c1.x, c1.y, c2.x, c2.y, p.x, p.y]);
                    current = Some(p);
                }
                DrawCommand::Ellipse {
                    center,
                    rx,
                    ry,
                    rotation,
                    start_angle,
                    end_angle,
                    counterclockwise,
                } => {
                    let start = ellipse_point(&center, rx, ry, rotation, start_angle);
                    match current {
                        Some(p) if (p - start).norm() < TOLERANCE => {}
                        Some(_) => push_command(&mut out, 'L', &[start.x, start.y]),
                        None => {
                            push_command(&mut out, 'M', &[start.x, start.y]);
                            subpath_start = Some(start);
                        }
                    }
                    let sweep = end_angle - start_angle;
                    let pieces = if sweep.abs() >= TAU - TOLERANCE { 2 } else { 1 };
                    let step = sweep / f64::from(pieces);
                    let mut angle = start_angle;
                    for _ in 0..pieces {
                        angle += step;
                        let p = ellipse_point(&center, rx, ry, rotation, angle);
                        let large = if step.abs() > PI { 1.0 } else { 0.0 };
                        let sweep_flag = if counterclockwise { 0.0 } else { 1.0 };
                        push_command(
                            &mut out,
                            'A',
                            &[rx, ry, rotation.to_degrees(), large, sweep_flag, p.x, p.y],
                        );
                        current = Some(p);
                    }
                }
                DrawCommand::ClosePath => {
                    out.push('Z');
                    current = subpath_start;
                }
            }
        }
        out
    }
}

impl PathSink for PathRecorder {
    fn move_to(&mut self, point: Point2) {
        self.commands.push(DrawCommand::MoveTo(point));
    }

    fn line_to(&mut self, point: Point2) {
        self.commands.push(DrawCommand::LineTo(point));
    }

    fn quad_to(&mut self, control: Point2, point: Point2) {
        self.commands.push(DrawCommand::QuadTo(control, point));
    }

    fn cubic_to(&mut self, control1: Point2, control2: Point2, point: Point2) {
        self.commands
            .push(DrawCommand::CubicTo(control1, control2, point));
    }

    fn ellipse(
        &mut self,
        center: Point2,
        rx: f64,
        ry: f64,
        rotation: f64,
        start_angle: f64,
        end_angle: f64,
        counterclockwise: bool,
    ) {
        self.commands.push(DrawCommand::Ellipse {
            center,
            rx,
            ry,
            rotation,
            start_angle,
            end_angle,
            counterclockwise,
        });
    }

    fn close_path(&mut self) {
        self.commands.push(DrawCommand::ClosePath);
    }
}

fn push_command(out: &mut String, letter: char, args: &[f64]) {
    out.push(letter);
    for (i, value) in args.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let rounded = round_to_decimals(*value, 4);
        // Avoid printing "-0".
        let rounded = if rounded == 0.0 { 0.0 } else { rounded };
        let _ = write!(out, "{rounded}");
    }
}

/// Draws the `[start, end]` arc-length fraction of `profile` into `sink`.
///
/// A `move_to` is issued for the first drawn segment and whenever a segment
/// does not begin where the previous one ended. A complete closed profile
/// is finished with `close_path`.
///
/// Returns the curve points at both ends of the drawn range, or `None` when
/// nothing was drawn.
pub fn draw_profile<S: PathSink + ?Sized>(
    sink: &mut S,
    profile: &CurveProfile,
    start: f64,
    end: f64,
) -> Option<(CurvePoint, CurvePoint)> {
    let start_distance = start.clamp(0.0, 1.0) * profile.arc_length;
    let end_distance = end.clamp(0.0, 1.0) * profile.arc_length;

    let mut first: Option<CurvePoint> = None;
    let mut last: Option<CurvePoint> = None;
    let mut offset = 0.0;
    for segment in &profile.segments {
        let length = segment.arc_length();
        let segment_start = offset;
        let segment_end = offset + length;
        offset = segment_end;

        let outside = if length > 0.0 {
            segment_end <= start_distance || segment_start >= end_distance
        } else {
            segment_start < start_distance || segment_start > end_distance
        };
        if outside {
            continue;
        }

        let (local_start, local_end) = if length > 0.0 {
            (
                ((start_distance - segment_start) / length).clamp(0.0, 1.0),
                ((end_distance - segment_start) / length).clamp(0.0, 1.0),
            )
        } else {
            (0.0, 1.0)
        };

        let entry = segment.point(local_start).position;
        let move_to = last.map_or(true, |p| p.position != entry);
        let (a, b) = segment.draw(sink, local_start, local_end, move_to);
        first.get_or_insert(a);
        last = Some(b);
    }

    if profile.closed && start <= 0.0 && end >= 1.0 {
        if let (Some(a), Some(b)) = (first, last) {
            if a.position == b.position {
                sink.close_path();
            }
        }
    }

    first.zip(last)
}
