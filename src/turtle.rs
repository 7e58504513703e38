//! Turtle pose state and the drawing command vocabulary.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

/// A single drawn line segment in the turtle's local coordinate space.
///
/// No units are imposed; the consuming renderer scales and translates as
/// needed for display.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Where the pen went down.
    pub start: Vec2,
    /// Where the pen lifted.
    pub end: Vec2,
}

/// The pose of the turtle: where it is and which way it faces.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurtleState {
    /// Current position.
    pub position: Vec2,
    /// Heading in radians, counter-clockwise from the +X axis.
    pub heading: f32,
}

impl Default for TurtleState {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            heading: 0.0,
        }
    }
}

impl TurtleState {
    /// Unit vector pointing along the current heading.
    pub fn direction(&self) -> Vec2 {
        Vec2::new(self.heading.cos(), self.heading.sin())
    }

    /// Moves `distance` along the current heading.
    pub fn advance(&mut self, distance: f32) {
        self.position += distance * self.direction();
    }

    /// Rotates by `angle` radians (positive is counter-clockwise).
    ///
    /// The heading is kept wrapped into `[0, TAU)` so it cannot grow without
    /// bound over a long traversal.
    pub fn turn(&mut self, angle: f32) {
        self.heading = (self.heading + angle).rem_euclid(TAU);
    }
}

/// Operations that can be performed by the drawing turtle.
///
/// Symbols with no registered operation behave as [`TurtleOp::Ignore`], so a
/// generated string may freely contain symbols that exist purely for
/// rewriting purposes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum TurtleOp {
    /// Move forward by the step length, drawing a segment (`F`).
    Draw,
    /// Move forward by the step length without drawing (`f`).
    Move,
    /// Rotate by the configured turn angle times the given sign (`+`/`-`).
    Turn(f32),
    /// Save the current pose onto the stack (`[`).
    Push,
    /// Restore the most recently pushed pose (`]`).
    Pop,
    /// No-op — symbol has no registered meaning.
    Ignore,
}
