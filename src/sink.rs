//! The drawing-surface seam between the interpreter and a host canvas, plus a
//! recording sink for headless use.

use csscolorparser::Color;
use glam::DVec2;

/// An immediate-mode 2D drawing surface driven by the interpreter.
///
/// The interpreter only ever writes to the sink; it never reads canvas
/// contents back. Every method except the path primitives has a no-op default.
pub trait DrawSink {
    /// Starts a new sub-path at `point` without drawing.
    fn move_to(&mut self, point: DVec2);

    /// Extends the pending path with a segment to `point`.
    fn line_to(&mut self, point: DVec2);

    /// Commits the pending path.
    fn stroke(&mut self);

    /// Colour for subsequent strokes.
    fn set_stroke_color(&mut self, _color: &Color) {}

    /// Fills the whole canvas with `color`.
    fn clear(&mut self, _color: &Color) {}

    /// Canvas `(width, height)`, when the surface has fixed bounds.
    fn dimensions(&self) -> Option<DVec2> {
        None
    }

    /// Polled before every turtle step; returning true aborts the render.
    fn is_cancelled(&self) -> bool {
        false
    }
}

/// A single recorded sink call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    MoveTo(DVec2),
    LineTo(DVec2),
    Stroke,
    StrokeColor(Color),
    Clear(Color),
}

/// A line segment extracted from a recorded drawing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: DVec2,
    pub to: DVec2,
}

/// Headless sink that records every call in order.
#[derive(Clone, Debug, Default)]
pub struct Drawing {
    pub commands: Vec<DrawCommand>,
    /// Canvas size reported through [`DrawSink::dimensions`].
    pub size: Option<DVec2>,
    /// Stop after this many `line_to` calls.
    cancel_after: Option<usize>,
    lines: usize,
}

impl Drawing {
    /// An empty recording with no fixed canvas size.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty recording that reports a `width` x `height` canvas.
    pub fn with_size(width: f64, height: f64) -> Self {
        Self {
            size: Some(DVec2::new(width, height)),
            ..Self::default()
        }
    }

    /// Reports cancellation once `lines` segments have been drawn.
    pub fn cancel_after(mut self, lines: usize) -> Self {
        self.cancel_after = Some(lines);
        self
    }

    /// Every recorded call, in order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Segments in drawing order, each starting at the preceding cursor position.
    pub fn segments(&self) -> Vec<Segment> {
        let mut cursor = DVec2::ZERO;
        let mut segments = Vec::new();
        for command in &self.commands {
            match command {
                DrawCommand::MoveTo(p) => cursor = *p,
                DrawCommand::LineTo(p) => {
                    segments.push(Segment {
                        from: cursor,
                        to: *p,
                    });
                    cursor = *p;
                }
                _ => {}
            }
        }
        segments
    }
}

impl DrawSink for Drawing {
    fn move_to(&mut self, point: DVec2) {
        self.commands.push(DrawCommand::MoveTo(point));
    }

    fn line_to(&mut self, point: DVec2) {
        self.lines += 1;
        self.commands.push(DrawCommand::LineTo(point));
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke);
    }

    fn set_stroke_color(&mut self, color: &Color) {
        self.commands.push(DrawCommand::StrokeColor(color.clone()));
    }

    fn clear(&mut self, color: &Color) {
        self.commands.push(DrawCommand::Clear(color.clone()));
    }

    fn dimensions(&self) -> Option<DVec2> {
        self.size
    }

    fn is_cancelled(&self) -> bool {
        self.cancel_after.is_some_and(|n| self.lines >= n)
    }
}
