//! # lsys-turtle
//!
//! A deterministic Lindenmayer-system toolkit that separates the *grammar*
//! (parallel string rewriting over a [`RuleTable`]) from the *geometry*
//! (a 2D [`TurtleInterpreter`] that walks a generated string and lazily
//! yields line segments).
//!
//! Both halves produce plain data — generation strings and [`Segment`]
//! values — that can be ingested by any plotting or rendering backend.

pub mod interpreter;
pub mod rewrite;
pub mod rules;
pub mod turtle;

pub use interpreter::*;
pub use rewrite::*;
pub use rules::*;
pub use turtle::*;
