//! The [`FractalConfig`] preset record and its rule-string parsing.

use crate::error::{LSystemError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;
use tracing::warn;

/// Added to `length` before dividing by the iteration count.
const STEP_LENGTH_BIAS: f64 = 30.0;

/// A single production rule, `identifier -> replacement`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    pub identifier: char,
    pub replacement: String,
}

impl FromStr for Rule {
    type Err = LSystemError;

    /// Parses the `"X=F+[X]"` form. The right-hand side may be empty (`"F="`).
    fn from_str(s: &str) -> Result<Self> {
        let (lhs, rhs) = s
            .split_once('=')
            .ok_or_else(|| LSystemError::InvalidConfig(format!("rule `{s}` has no `=`")))?;
        let lhs = lhs.trim();
        let mut chars = lhs.chars();
        match (chars.next(), chars.next()) {
            (Some(identifier), None) => Ok(Rule {
                identifier,
                replacement: rhs.trim().to_string(),
            }),
            _ => Err(LSystemError::InvalidConfig(format!(
                "rule left-hand side `{lhs}` must be a single symbol"
            ))),
        }
    }
}

/// An immutable L-System preset: grammar plus rendering parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FractalConfig {
    pub name: String,
    /// Symbols eligible for rule substitution.
    pub variables: String,
    /// Structural/drawing symbols, never substituted.
    pub constants: String,
    /// Turn increment in degrees.
    pub angle: f64,
    /// Default number of rewrite generations.
    pub iterations: u32,
    #[serde(default)]
    pub max_iterations: Option<u32>,
    pub axiom: String,
    #[serde(default)]
    pub rules: BTreeMap<char, String>,
    /// Base segment length, see [`FractalConfig::step_length`].
    #[serde(default)]
    pub length: f64,
    /// Distance of the origin from the bottom edge of the canvas.
    #[serde(default)]
    pub canvas_offset: f64,
    /// Starting heading in degrees. `-90` points up in y-down screen space.
    #[serde(default = "default_heading")]
    pub initial_heading: f64,
}

fn default_heading() -> f64 {
    -90.0
}

impl FractalConfig {
    /// A config with no rules, a 90 degree angle and one iteration.
    pub fn new(
        name: impl Into<String>,
        variables: impl Into<String>,
        constants: impl Into<String>,
        axiom: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            variables: variables.into(),
            constants: constants.into(),
            angle: 90.0,
            iterations: 1,
            max_iterations: None,
            axiom: axiom.into(),
            rules: BTreeMap::new(),
            length: 0.0,
            canvas_offset: 0.0,
            initial_heading: default_heading(),
        }
    }

    /// Adds a rule. A later rule for the same identifier replaces the earlier one.
    pub fn with_rule(mut self, identifier: char, replacement: impl Into<String>) -> Self {
        self.rules.insert(identifier, replacement.into());
        self
    }

    /// Adds a rule given as `"X=..."`. An empty string adds nothing.
    pub fn with_rule_str(self, rule: &str) -> Result<Self> {
        if rule.trim().is_empty() {
            return Ok(self);
        }
        let Rule {
            identifier,
            replacement,
        } = rule.parse()?;
        Ok(self.with_rule(identifier, replacement))
    }

    /// Sets the turn increment in degrees.
    pub fn with_angle(mut self, degrees: f64) -> Self {
        self.angle = degrees;
        self
    }

    /// Sets the default generation count.
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    /// Caps the generation count a render may request.
    pub fn with_max_iterations(mut self, max: u32) -> Self {
        self.max_iterations = Some(max);
        self
    }

    /// Sets the base segment length.
    pub fn with_length(mut self, length: f64) -> Self {
        self.length = length;
        self
    }

    /// Sets the origin's distance from the bottom edge of the canvas.
    pub fn with_canvas_offset(mut self, offset: f64) -> Self {
        self.canvas_offset = offset;
        self
    }

    /// Sets the starting heading in degrees.
    pub fn with_initial_heading(mut self, degrees: f64) -> Self {
        self.initial_heading = degrees;
        self
    }

    pub fn is_variable(&self, symbol: char) -> bool {
        self.variables.contains(symbol)
    }

    pub fn is_constant(&self, symbol: char) -> bool {
        self.constants.contains(symbol)
    }

    /// The replacement for `symbol`, if it is a declared variable with a rule.
    pub fn rule_for(&self, symbol: char) -> Option<&str> {
        if !self.is_variable(symbol) {
            return None;
        }
        self.rules.get(&symbol).map(String::as_str)
    }

    /// Checks the documented rule shape.
    ///
    /// Symbols outside `variables ∪ constants` are tolerated (they pass through
    /// expansion and are no-ops for the turtle) but logged.
    pub fn validate(&self) -> Result<()> {
        if self.axiom.is_empty() {
            return Err(LSystemError::InvalidConfig(format!(
                "`{}` has an empty axiom",
                self.name
            )));
        }
        if !self.angle.is_finite() || self.angle <= 0.0 {
            return Err(LSystemError::InvalidConfig(format!(
                "`{}` has angle {}, expected a positive number of degrees",
                self.name, self.angle
            )));
        }
        if let Some(both) = self.variables.chars().find(|c| self.is_constant(*c)) {
            return Err(LSystemError::InvalidConfig(format!(
                "`{both}` is declared as both variable and constant"
            )));
        }
        if let Some(lhs) = self.rules.keys().find(|c| !self.is_variable(**c)) {
            return Err(LSystemError::InvalidConfig(format!(
                "rule for `{lhs}` does not name a declared variable of `{}`",
                self.name
            )));
        }

        let undefined: String = self
            .axiom
            .chars()
            .chain(self.rules.values().flat_map(|rhs| rhs.chars()))
            .filter(|c| !self.is_variable(*c) && !self.is_constant(*c))
            .collect();
        if !undefined.is_empty() {
            warn!(config = %self.name, symbols = %undefined, "Undefined symbols will be ignored");
        }
        Ok(())
    }

    /// Resolves the generation count for a render, substituting `requested` for
    /// the default when given.
    pub fn effective_iterations(&self, requested: Option<u32>) -> Result<u32> {
        let iterations = requested.unwrap_or(self.iterations);
        match self.max_iterations {
            Some(max) if iterations > max => Err(LSystemError::ResourceLimitExceeded {
                resource: "iteration",
                requested: iterations as usize,
                limit: max as usize,
            }),
            _ => Ok(iterations),
        }
    }

    /// Segment length for a render of `iterations` generations:
    /// `(length + 30) / iterations`. `None` when nothing should be drawn.
    pub fn step_length(&self, iterations: u32) -> Option<f64> {
        (iterations > 0).then(|| (self.length + STEP_LENGTH_BIAS) / iterations as f64)
    }

    /// Parses and validates a config written in RON.
    pub fn from_ron(text: &str) -> Result<Self> {
        let config: Self =
            ron::from_str(text).map_err(|e| LSystemError::ConfigFormat(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_ron(&self) -> Result<String> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| LSystemError::ConfigFormat(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> FractalConfig {
        FractalConfig::new("tree", "X", "F+-[]", "X").with_rule('X', "F+[[X]-X]-F[-FX]+X")
    }

    #[test]
    fn test_rule_parsing() {
        let rule: Rule = "X=X+YF+".parse().unwrap();
        assert_eq!(rule.identifier, 'X');
        assert_eq!(rule.replacement, "X+YF+");

        let seed: Rule = "F=".parse().unwrap();
        assert_eq!(seed.replacement, "");

        assert!(matches!(
            "XY=F".parse::<Rule>(),
            Err(LSystemError::InvalidConfig(_))
        ));
        assert!(matches!(
            "XF".parse::<Rule>(),
            Err(LSystemError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_last_rule_wins() {
        let config = tree()
            .with_rule_str("X=F")
            .unwrap()
            .with_rule_str("X=FF")
            .unwrap()
            .with_rule_str("")
            .unwrap();
        assert_eq!(config.rule_for('X'), Some("FF"));
        assert_eq!(config.rules.len(), 1);
    }

    #[test]
    fn test_validate() {
        assert!(tree().validate().is_ok());

        let mut empty = tree();
        empty.axiom.clear();
        assert!(matches!(
            empty.validate(),
            Err(LSystemError::InvalidConfig(_))
        ));

        let stray = tree().with_rule('Q', "F");
        assert!(matches!(
            stray.validate(),
            Err(LSystemError::InvalidConfig(_))
        ));

        let flat = tree().with_angle(0.0);
        assert!(flat.validate().is_err());

        let overlap = FractalConfig::new("overlap", "F", "F+-", "F");
        assert!(overlap.validate().is_err());
    }

    #[test]
    fn test_step_length() {
        let config = tree().with_length(20.0);
        assert_eq!(config.step_length(10), Some(5.0));
        assert_eq!(config.step_length(0), None);
    }

    #[test]
    fn test_iteration_override() {
        let config = tree().with_iterations(3).with_max_iterations(5);
        assert_eq!(config.effective_iterations(None).unwrap(), 3);
        assert_eq!(config.effective_iterations(Some(5)).unwrap(), 5);
        assert!(matches!(
            config.effective_iterations(Some(6)),
            Err(LSystemError::ResourceLimitExceeded { limit: 5, .. })
        ));
    }

    #[test]
    fn test_ron_config() {
        let text = r#"(
            name: "dragon",
            variables: "XY",
            constants: "F+-",
            angle: 90.0,
            iterations: 2,
            axiom: "FX",
            rules: { 'X': "X+YF+", 'Y': "-FX-Y" },
            length: 20.0,
        )"#;
        let config = FractalConfig::from_ron(text).unwrap();
        assert_eq!(config.rule_for('Y'), Some("-FX-Y"));
        assert_eq!(config.initial_heading, -90.0);
        assert_eq!(config.max_iterations, None);

        let again = FractalConfig::from_ron(&config.to_ron().unwrap()).unwrap();
        assert_eq!(again, config);

        assert!(matches!(
            FractalConfig::from_ron("(name: \"x\")"),
            Err(LSystemError::ConfigFormat(_))
        ));
    }
}
