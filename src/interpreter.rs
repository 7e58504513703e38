//! Interpreter that converts an L-System symbol string into line segments.
//!
//! The entry point is [`TurtleInterpreter`]. Configure it with a
//! [`TurtleConfig`], register symbol-to-operation mappings via
//! [`TurtleInterpreter::set_op`] or
//! [`TurtleInterpreter::populate_standard_symbols`], then call
//! [`TurtleInterpreter::trace`] with a generated string.

use crate::turtle::{Segment, TurtleOp, TurtleState};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::f32::consts::FRAC_PI_2;
use std::str::Chars;

/// Configuration for geometric interpretation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TurtleConfig {
    /// Distance advanced per draw/move step.
    pub step_length: f32,
    /// Rotation (in radians) applied per turn step.
    pub turn_angle: f32,
}

impl Default for TurtleConfig {
    fn default() -> Self {
        Self {
            step_length: 1.0,
            turn_angle: FRAC_PI_2,
        }
    }
}

/// Interprets L-System output as a lazy sequence of 2D line segments.
///
/// The turtle starts at the origin facing `+X`. Symbols with no registered
/// mapping are silently ignored, and a pop against an empty stack is counted
/// rather than fatal, so malformed or hand-authored strings still render
/// partially instead of aborting.
pub struct TurtleInterpreter {
    op_map: HashMap<char, TurtleOp>,
    config: TurtleConfig,
    state: TurtleState,
    stack: Vec<TurtleState>,
    underflows: usize,
}

impl TurtleInterpreter {
    /// Creates a new interpreter with the given configuration and an empty
    /// symbol map.
    ///
    /// Register operations with [`set_op`](Self::set_op) or
    /// [`populate_standard_symbols`](Self::populate_standard_symbols) before
    /// calling [`trace`](Self::trace).
    pub fn new(config: TurtleConfig) -> Self {
        Self {
            op_map: HashMap::new(),
            config,
            state: TurtleState::default(),
            stack: Vec::new(),
            underflows: 0,
        }
    }

    /// Replaces the entire symbol-to-operation map in one step (builder
    /// pattern).
    pub fn with_map(mut self, map: HashMap<char, TurtleOp>) -> Self {
        self.op_map = map;
        self
    }

    /// Assigns a single [`TurtleOp`] to a symbol, overwriting any previous
    /// assignment.
    pub fn set_op(&mut self, symbol: char, op: TurtleOp) {
        self.op_map.insert(symbol, op);
    }

    /// Registers the conventional symbol-to-operation mappings.
    ///
    /// `F` draws forward, `f` moves without drawing, `+` turns left, `-`
    /// turns right, `[` pushes the pose and `]` pops it.
    pub fn populate_standard_symbols(&mut self) {
        let mappings = [
            ('F', TurtleOp::Draw),
            ('f', TurtleOp::Move),
            ('+', TurtleOp::Turn(1.0)),
            ('-', TurtleOp::Turn(-1.0)),
            ('[', TurtleOp::Push),
            (']', TurtleOp::Pop),
        ];

        for (symbol, op) in mappings {
            self.set_op(symbol, op);
        }
    }

    /// Executes one symbol against the current pose.
    ///
    /// Returns the drawn segment for [`TurtleOp::Draw`], `None` for every
    /// other operation. Popping with an empty stack leaves the pose untouched
    /// and bumps the underflow counter; traversal always continues.
    pub fn step(&mut self, symbol: char) -> Option<Segment> {
        let op = self
            .op_map
            .get(&symbol)
            .copied()
            .unwrap_or(TurtleOp::Ignore);

        match op {
            TurtleOp::Draw => {
                let start = self.state.position;
                self.state.advance(self.config.step_length);
                Some(Segment {
                    start,
                    end: self.state.position,
                })
            }
            TurtleOp::Move => {
                self.state.advance(self.config.step_length);
                None
            }
            TurtleOp::Turn(sign) => {
                self.state.turn(self.config.turn_angle * sign);
                None
            }
            TurtleOp::Push => {
                self.stack.push(self.state);
                None
            }
            TurtleOp::Pop => {
                match self.stack.pop() {
                    Some(saved) => self.state = saved,
                    None => self.underflows += 1,
                }
                None
            }
            TurtleOp::Ignore => None,
        }
    }

    /// Resets the interpreter and lazily traces `input`, yielding one
    /// [`Segment`] per drawing symbol.
    ///
    /// Every call starts from the default pose with an empty stack, so
    /// repeated traces of the same string produce identical segments. The
    /// returned iterator is finite and may be abandoned at any point.
    pub fn trace<'a>(&'a mut self, input: &'a str) -> Trace<'a> {
        self.reset();
        Trace {
            interpreter: self,
            symbols: input.chars(),
        }
    }

    /// Restores the default pose and clears the stack and underflow count.
    pub fn reset(&mut self) {
        self.state = TurtleState::default();
        self.stack.clear();
        self.underflows = 0;
    }

    /// The current pose.
    pub fn state(&self) -> TurtleState {
        self.state
    }

    /// The interpreter's configuration.
    pub fn config(&self) -> &TurtleConfig {
        &self.config
    }

    /// Number of poses currently saved on the stack.
    ///
    /// Zero after a traversal of a string with balanced push/pop symbols.
    pub fn stack_depth(&self) -> usize {
        self.stack.len()
    }

    /// Number of pops executed against an empty stack since the last reset.
    ///
    /// Nonzero means the input had unmatched pop symbols.
    pub fn underflows(&self) -> usize {
        self.underflows
    }
}

/// Lazy segment sequence produced by [`TurtleInterpreter::trace`].
pub struct Trace<'a> {
    interpreter: &'a mut TurtleInterpreter,
    symbols: Chars<'a>,
}

impl Iterator for Trace<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        for symbol in self.symbols.by_ref() {
            if let Some(segment) = self.interpreter.step(symbol) {
                return Some(segment);
            }
        }
        None
    }
}
