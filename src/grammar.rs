//! Grammar engine: expands an axiom under a [`FractalConfig`]'s production rules.
//!
//! Each generation is a single left-to-right pass that reads the current
//! sequence and writes a fresh buffer, so rules never see their own output
//! within the same generation. Growth is exponential in the generation count;
//! the engine refuses to build any generation longer than
//! [`GrammarEngine::max_len`] symbols.

use crate::config::FractalConfig;
use crate::error::{LSystemError, Result};
use std::fmt;
use tracing::debug;

/// Default cap on the length of any expanded generation.
pub const DEFAULT_MAX_LEN: usize = 1 << 24;

/// The output of an expansion: an ordered sequence of single-character symbols.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ExpandedSequence(String);

impl ExpandedSequence {
    /// Wraps an already expanded symbol string.
    pub fn new(symbols: impl Into<String>) -> Self {
        Self(symbols.into())
    }

    /// The symbols as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of symbols (not bytes).
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Symbols in order.
    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars()
    }

    /// Occurrences of `symbol`.
    pub fn count(&self, symbol: char) -> usize {
        self.0.chars().filter(|c| *c == symbol).count()
    }

    /// True when every `]` closes an earlier `[` and none are left open.
    pub fn is_balanced(&self) -> bool {
        let mut depth = 0usize;
        for c in self.0.chars() {
            match c {
                '[' => depth += 1,
                ']' => match depth.checked_sub(1) {
                    Some(d) => depth = d,
                    None => return false,
                },
                _ => {}
            }
        }
        depth == 0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ExpandedSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ExpandedSequence {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Expands L-System axioms with a bounded output length.
#[derive(Clone, Debug)]
pub struct GrammarEngine {
    max_len: usize,
}

impl Default for GrammarEngine {
    fn default() -> Self {
        Self {
            max_len: DEFAULT_MAX_LEN,
        }
    }
}

impl GrammarEngine {
    /// An engine that rejects any generation longer than `max_len` symbols.
    pub fn new(max_len: usize) -> Self {
        Self { max_len }
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Expands `config.axiom` for `config.iterations` generations.
    pub fn expand(&self, config: &FractalConfig) -> Result<ExpandedSequence> {
        self.expand_n(config, config.iterations)
    }

    /// Expands `config.axiom` for exactly `iterations` generations.
    ///
    /// `iterations = 0` returns the axiom unchanged.
    pub fn expand_n(&self, config: &FractalConfig, iterations: u32) -> Result<ExpandedSequence> {
        let mut current = config.axiom.clone();
        self.check_len(current.chars().count())?;
        for generation in 1..=iterations {
            current = self.rewrite_once(config, &current)?;
            debug!(config = %config.name, generation, len = current.len(), "Expanded generation");
        }
        Ok(ExpandedSequence(current))
    }

    /// Applies one generation of rewriting to `current`.
    ///
    /// The length of the next generation is computed before anything is
    /// allocated, so an oversized generation fails without building it.
    pub fn rewrite_once(&self, config: &FractalConfig, current: &str) -> Result<String> {
        let next_len = current
            .chars()
            .map(|c| config.rule_for(c).map_or(1, |rhs| rhs.chars().count()))
            .try_fold(0usize, |acc, n| acc.checked_add(n))
            .unwrap_or(usize::MAX);
        self.check_len(next_len)?;

        let mut next = String::with_capacity(next_len);
        for c in current.chars() {
            match config.rule_for(c) {
                Some(replacement) => next.push_str(replacement),
                None => next.push(c),
            }
        }
        Ok(next)
    }

    /// Iterates over successive generations, starting with the axiom.
    ///
    /// The iterator yields an error once and then stops if a generation would
    /// exceed the length cap.
    pub fn generations<'a>(&'a self, config: &'a FractalConfig) -> Generations<'a> {
        Generations {
            engine: self,
            config,
            current: Some(config.axiom.clone()),
            started: false,
        }
    }

    fn check_len(&self, len: usize) -> Result<()> {
        if len > self.max_len {
            return Err(LSystemError::ResourceLimitExceeded {
                resource: "sequence length",
                requested: len,
                limit: self.max_len,
            });
        }
        Ok(())
    }
}

/// Iterator returned by [`GrammarEngine::generations`].
pub struct Generations<'a> {
    engine: &'a GrammarEngine,
    config: &'a FractalConfig,
    current: Option<String>,
    started: bool,
}

impl Iterator for Generations<'_> {
    type Item = Result<ExpandedSequence>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current.take()?;
        if !self.started {
            self.started = true;
            self.current = Some(current.clone());
            return Some(Ok(ExpandedSequence(current)));
        }
        match self.engine.rewrite_once(self.config, &current) {
            Ok(next) => {
                self.current = Some(next.clone());
                Some(Ok(ExpandedSequence(next)))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

/// Expands `config` with the default length cap.
pub fn expand(config: &FractalConfig) -> Result<ExpandedSequence> {
    GrammarEngine::default().expand(config)
}
