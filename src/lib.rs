//! # fractal-turtle
//!
//! Renders Lindenmayer-system fractals in two strictly ordered stages:
//!
//! 1. [`GrammarEngine`] expands a [`FractalConfig`]'s axiom for N generations,
//!    one full rewrite pass per generation.
//! 2. [`TurtleInterpreter`] walks the expanded symbols with a position/heading
//!    turtle and a branch stack, driving any [`DrawSink`] (a recording
//!    [`Drawing`], an [`SvgCanvas`], or a host canvas).
//!
//! [`render`] ties both together for a [`RenderRequest`], and [`Preset`] is
//! the built-in catalog of fractals.

pub mod canvas;
pub mod config;
pub mod error;
pub mod grammar;
pub mod interpreter;
pub mod palette;
pub mod presets;
pub mod render;
pub mod sink;
pub mod turtle;

pub use canvas::*;
pub use config::*;
pub use error::*;
pub use grammar::*;
pub use interpreter::*;
pub use palette::*;
pub use presets::*;
pub use render::*;
pub use sink::*;
pub use turtle::*;
