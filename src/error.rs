//! Error taxonomy shared by the grammar engine, the turtle interpreter and the
//! render pipeline.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LSystemError {
    /// The configuration record is malformed (empty axiom, bad rule shape, ...).
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Expansion or interpretation would exceed a configured bound.
    #[error("{resource} limit exceeded: requested {requested}, limit is {limit}")]
    ResourceLimitExceeded {
        resource: &'static str,
        requested: usize,
        limit: usize,
    },

    /// A `]` was reached with an empty branch stack.
    #[error("malformed sequence: branch stack underflow at symbol {index}")]
    MalformedSequence { index: usize },

    #[error("unknown preset: {0}")]
    UnknownPreset(String),

    #[error("invalid color: {0}")]
    InvalidColor(String),

    #[error("config format error: {0}")]
    ConfigFormat(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LSystemError>;
