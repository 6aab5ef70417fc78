//! The expand-then-interpret pipeline for a single render.

use crate::config::FractalConfig;
use crate::error::Result;
use crate::grammar::{ExpandedSequence, GrammarEngine};
use crate::interpreter::{RenderSummary, TurtleConfig, TurtleInterpreter};
use crate::palette::Palette;
use crate::sink::DrawSink;
use crate::turtle::TurtleState;
use glam::DVec2;
use tracing::info;

/// Everything needed for one render.
#[derive(Clone, Debug)]
pub struct RenderRequest {
    pub config: FractalConfig,
    /// Replaces `config.iterations` when set.
    pub iterations: Option<u32>,
    pub palette: Palette,
}

impl RenderRequest {
    /// A request using the config's own iteration count and the default palette.
    pub fn new(config: FractalConfig) -> Self {
        Self {
            config,
            iterations: None,
            palette: Palette::default(),
        }
    }

    pub fn with_iterations(mut self, iterations: Option<u32>) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }
}

/// Canvas-space origin: horizontally centred, `offset` above the bottom edge.
pub fn origin_for(size: Option<DVec2>, offset: f64) -> DVec2 {
    match size {
        Some(size) => DVec2::new(size.x / 2.0, size.y - offset),
        None => DVec2::ZERO,
    }
}

/// Validates, expands and interprets `request` into `sink`.
///
/// The canvas is cleared to the palette background first. A render of zero
/// iterations draws nothing.
pub fn render(
    request: &RenderRequest,
    engine: &GrammarEngine,
    sink: &mut dyn DrawSink,
) -> Result<RenderSummary> {
    let config = &request.config;
    config.validate()?;
    let iterations = config.effective_iterations(request.iterations)?;

    sink.clear(&request.palette.background);
    let origin = origin_for(sink.dimensions(), config.canvas_offset);

    if config.step_length(iterations).is_none() {
        info!(config = %config.name, "Zero iterations, nothing to draw");
        return Ok(RenderSummary {
            segments: 0,
            max_depth: 0,
            final_state: TurtleState::new(origin, config.initial_heading.to_radians()),
            cancelled: false,
        });
    }

    let sequence: ExpandedSequence = engine.expand_n(config, iterations)?;
    let interpreter = TurtleInterpreter::new(TurtleConfig {
        palette: request.palette.clone(),
        ..TurtleConfig::from_fractal(config, iterations, origin)
    });
    let summary = interpreter.interpret(&sequence, sink)?;

    info!(
        config = %config.name,
        iterations,
        symbols = sequence.len(),
        segments = summary.segments,
        cancelled = summary.cancelled,
        "Rendered fractal"
    );
    Ok(summary)
}
