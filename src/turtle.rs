//! Turtle state and operations for 2D fractal interpretation.

use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// The state of the drawing turtle.
///
/// Snapshots of this struct are what the branch stack stores on `[`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurtleState {
    /// Current canvas-space position of the cursor.
    pub position: DVec2,

    /// Current heading in radians. `0` points along `+X`.
    pub heading: f64,
}

impl Default for TurtleState {
    fn default() -> Self {
        Self {
            position: DVec2::ZERO,
            heading: 0.0,
        }
    }
}

impl TurtleState {
    pub fn new(position: DVec2, heading: f64) -> Self {
        Self { position, heading }
    }

    /// Unit vector along the current heading.
    pub fn direction(&self) -> DVec2 {
        DVec2::new(self.heading.cos(), self.heading.sin())
    }

    /// Moves the turtle `distance` along its heading and returns the new position.
    pub fn advance(&mut self, distance: f64) -> DVec2 {
        self.position += self.direction() * distance;
        self.position
    }

    /// Adds `delta` radians to the heading.
    pub fn turn(&mut self, delta: f64) {
        self.heading += delta;
    }
}

/// Operations that can be performed by the turtle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurtleOp {
    /// Advance one step and draw a segment (`F`, `G`, `A`, `B`).
    Draw,
    /// Advance one step without drawing (`f`).
    Move,
    /// Subtract the turn angle from the heading (`+`); clockwise on a y-down canvas.
    TurnRight,
    /// Add the turn angle to the heading (`-`).
    TurnLeft,
    /// Turn 180 degrees (`|`).
    TurnAround,
    /// Save the turtle state onto the branch stack (`[`).
    Push,
    /// Restore the most recently pushed turtle state (`]`).
    Pop,
    /// No-op: symbol has no registered meaning.
    Ignore,
}

impl TurtleOp {
    /// Applies a rotation op to `state`. Returns false for non-rotation ops.
    pub(crate) fn rotate(self, state: &mut TurtleState, angle: f64) -> bool {
        match self {
            TurtleOp::TurnRight => state.turn(-angle),
            TurtleOp::TurnLeft => state.turn(angle),
            TurtleOp::TurnAround => state.turn(PI),
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_advance() {
        let mut t = TurtleState::default();
        assert!(t.advance(10.0).abs_diff_eq(DVec2::new(10.0, 0.0), 1e-9));
        t.turn(-FRAC_PI_2);
        assert!(t.advance(10.0).abs_diff_eq(DVec2::new(10.0, -10.0), 1e-9));
    }

    #[test]
    fn test_rotation_ops() {
        let mut t = TurtleState::default();
        assert!(TurtleOp::TurnRight.rotate(&mut t, 0.5));
        assert_eq!(t.heading, -0.5);
        assert!(TurtleOp::TurnLeft.rotate(&mut t, 1.5));
        assert_eq!(t.heading, 1.0);
        assert!(TurtleOp::TurnAround.rotate(&mut t, 0.0));
        assert!((t.heading - (1.0 + PI)).abs() < 1e-12);
        assert!(!TurtleOp::Draw.rotate(&mut t, 1.0));
    }
}
