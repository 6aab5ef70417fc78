//! Interpreter that walks an [`ExpandedSequence`] and drives a [`DrawSink`].
//!
//! The entry point is [`TurtleInterpreter`]. Configure it with a [`TurtleConfig`],
//! optionally remap symbols via [`TurtleInterpreter::set_op`], then call
//! [`TurtleInterpreter::interpret`].

use crate::config::FractalConfig;
use crate::error::{LSystemError, Result};
use crate::grammar::ExpandedSequence;
use crate::palette::Palette;
use crate::sink::DrawSink;
use crate::turtle::{TurtleOp, TurtleState};
use glam::DVec2;
use std::collections::HashMap;
use tracing::trace;

/// Configuration for turtle interpretation.
#[derive(Clone, Debug)]
pub struct TurtleConfig {
    /// Distance covered by each `Draw`/`Move` step.
    pub step_length: f64,
    /// Turn increment in radians.
    pub angle: f64,
    /// Canvas-space starting position.
    pub origin: DVec2,
    /// Starting heading in radians.
    pub initial_heading: f64,
    /// Maximum branch stack depth.
    pub max_stack_depth: usize,
    pub palette: Palette,
}

impl Default for TurtleConfig {
    fn default() -> Self {
        Self {
            step_length: 1.0,
            angle: 90.0f64.to_radians(),
            origin: DVec2::ZERO,
            initial_heading: 0.0,
            max_stack_depth: 1024,
            palette: Palette::default(),
        }
    }
}

impl TurtleConfig {
    /// Derives the turtle parameters of a `fractal` rendered at `iterations`
    /// generations. `step_length` is zero when `iterations` is zero.
    pub fn from_fractal(fractal: &FractalConfig, iterations: u32, origin: DVec2) -> Self {
        Self {
            step_length: fractal.step_length(iterations).unwrap_or(0.0),
            angle: fractal.angle.to_radians(),
            origin,
            initial_heading: fractal.initial_heading.to_radians(),
            ..Default::default()
        }
    }
}

/// What an interpretation produced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderSummary {
    /// Number of `line_to` segments emitted.
    pub segments: usize,
    /// Deepest branch stack reached.
    pub max_depth: usize,
    /// Turtle state after the last interpreted symbol.
    pub final_state: TurtleState,
    /// The sink asked to stop before the sequence was exhausted.
    pub cancelled: bool,
}

/// Interprets L-System output as turtle graphics.
pub struct TurtleInterpreter {
    op_map: HashMap<char, TurtleOp>,
    config: TurtleConfig,
}

impl TurtleInterpreter {
    /// Creates an interpreter with the standard symbol mappings.
    pub fn new(config: TurtleConfig) -> Self {
        let mut interpreter = Self {
            op_map: HashMap::new(),
            config,
        };
        interpreter.populate_standard_symbols();
        interpreter
    }

    /// The configuration this interpreter was built with.
    pub fn config(&self) -> &TurtleConfig {
        &self.config
    }

    /// Assigns a [`TurtleOp`] to a symbol, replacing any previous mapping.
    pub fn set_op(&mut self, symbol: char, op: TurtleOp) {
        self.op_map.insert(symbol, op);
    }

    /// The op registered for `symbol`; unmapped symbols are [`TurtleOp::Ignore`].
    pub fn op_for(&self, symbol: char) -> TurtleOp {
        self.op_map.get(&symbol).copied().unwrap_or(TurtleOp::Ignore)
    }

    /// Registers the conventional symbol-to-operation mappings.
    pub fn populate_standard_symbols(&mut self) {
        let mappings = [
            // Geometry
            ('F', TurtleOp::Draw),
            ('G', TurtleOp::Draw),
            ('A', TurtleOp::Draw),
            ('B', TurtleOp::Draw),
            ('f', TurtleOp::Move),
            // Heading
            ('+', TurtleOp::TurnRight),
            ('-', TurtleOp::TurnLeft),
            ('|', TurtleOp::TurnAround),
            // Flow
            ('[', TurtleOp::Push),
            (']', TurtleOp::Pop),
        ];
        for (symbol, op) in mappings {
            self.set_op(symbol, op);
        }
    }

    /// Walks `sequence` left to right, emitting drawing calls into `sink`.
    ///
    /// The turtle starts at `config.origin` heading `config.initial_heading`;
    /// the sink first receives a `move_to(origin)`. Each `Draw` emits
    /// `line_to`, a stroke colour and `stroke`. `]` restores the saved state and
    /// issues `move_to` so the next branch starts from the right point.
    ///
    /// # Errors
    ///
    /// A `]` with an empty stack fails with [`LSystemError::MalformedSequence`];
    /// nothing is drawn after that point. Pushing beyond `max_stack_depth`
    /// fails with [`LSystemError::ResourceLimitExceeded`].
    pub fn interpret(
        &self,
        sequence: &ExpandedSequence,
        sink: &mut dyn DrawSink,
    ) -> Result<RenderSummary> {
        let total_draws = sequence
            .symbols()
            .filter(|c| self.op_for(*c) == TurtleOp::Draw)
            .count();
        // Last stroke lands exactly on the secondary colour.
        let gradient_span = total_draws.saturating_sub(1).max(1) as f64;

        let mut turtle = TurtleState::new(self.config.origin, self.config.initial_heading);
        let mut stack: Vec<TurtleState> = Vec::new();
        let mut summary = RenderSummary {
            segments: 0,
            max_depth: 0,
            final_state: turtle,
            cancelled: false,
        };

        sink.move_to(turtle.position);

        for (index, symbol) in sequence.symbols().enumerate() {
            let op = self.op_for(symbol);
            if op.rotate(&mut turtle, self.config.angle) {
                continue;
            }
            match op {
                TurtleOp::Draw | TurtleOp::Move => {
                    if sink.is_cancelled() {
                        summary.cancelled = true;
                        break;
                    }
                    let to = turtle.advance(self.config.step_length);
                    if op == TurtleOp::Draw {
                        let color = self
                            .config
                            .palette
                            .at(summary.segments as f64 / gradient_span);
                        sink.line_to(to);
                        sink.set_stroke_color(&color);
                        sink.stroke();
                        summary.segments += 1;
                    } else {
                        sink.move_to(to);
                    }
                }
                TurtleOp::Push => {
                    if stack.len() >= self.config.max_stack_depth {
                        return Err(LSystemError::ResourceLimitExceeded {
                            resource: "branch stack depth",
                            requested: stack.len() + 1,
                            limit: self.config.max_stack_depth,
                        });
                    }
                    stack.push(turtle);
                    summary.max_depth = summary.max_depth.max(stack.len());
                    trace!(index, depth = stack.len(), "Push");
                }
                TurtleOp::Pop => {
                    turtle = stack
                        .pop()
                        .ok_or(LSystemError::MalformedSequence { index })?;
                    sink.move_to(turtle.position);
                    trace!(index, depth = stack.len(), "Pop");
                }
                TurtleOp::TurnRight
                | TurtleOp::TurnLeft
                | TurtleOp::TurnAround
                | TurtleOp::Ignore => {}
            }
        }

        summary.final_state = turtle;
        Ok(summary)
    }
}
