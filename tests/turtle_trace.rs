// tests/turtle_trace.rs
use glam::Vec2;
use lsys_turtle::{RuleTable, Segment, TurtleConfig, TurtleInterpreter, TurtleOp, apply_n};
use std::collections::HashMap;

const EPS: f32 = 1e-5;

fn setup() -> TurtleInterpreter {
    let mut interpreter = TurtleInterpreter::new(TurtleConfig::default());
    interpreter.populate_standard_symbols();
    interpreter
}

#[test]
fn single_draw_emits_unit_segment_along_x() {
    let mut interpreter = setup();
    let segments: Vec<Segment> = interpreter.trace("F").collect();

    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].start, Vec2::ZERO);
    assert_eq!(segments[0].end, Vec2::new(1.0, 0.0));
}

#[test]
fn turning_left_then_drawing_heads_up() {
    let mut interpreter = setup();
    let segments: Vec<Segment> = interpreter.trace("+F").collect();

    assert_eq!(segments.len(), 1);
    assert!(segments[0].end.abs_diff_eq(Vec2::new(0.0, 1.0), EPS));
}

#[test]
fn opposite_turns_cancel() {
    let mut interpreter = setup();
    let segments: Vec<Segment> = interpreter.trace("+-F").collect();

    assert_eq!(segments.len(), 1);
    assert!(segments[0].end.abs_diff_eq(Vec2::new(1.0, 0.0), EPS));
}

#[test]
fn bracketed_branch_is_undone_by_pop() {
    let mut interpreter = setup();
    let segments: Vec<Segment> = interpreter.trace("[F]F").collect();

    // Both segments start where the branch point was saved.
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].start, Vec2::ZERO);
    assert_eq!(segments[1].start, Vec2::ZERO);

    // The branch's movement was undone; only the second F counts.
    assert_eq!(interpreter.state().position, Vec2::new(1.0, 0.0));
    assert_eq!(interpreter.stack_depth(), 0);
    assert_eq!(interpreter.underflows(), 0);
}

#[test]
fn trace_resets_between_calls() {
    let mut interpreter = setup();

    // Leave the turtle somewhere else, facing somewhere else.
    let _ = interpreter.trace("F+F+]").count();
    assert_ne!(interpreter.state().position, Vec2::ZERO);

    let segments: Vec<Segment> = interpreter.trace("F").collect();
    assert_eq!(segments[0].start, Vec2::ZERO);
    assert_eq!(segments[0].end, Vec2::new(1.0, 0.0));
    assert_eq!(interpreter.underflows(), 0, "reset clears the diagnostic");
}

#[test]
fn pop_on_empty_stack_is_counted_not_fatal() {
    let mut interpreter = setup();
    let segments: Vec<Segment> = interpreter.trace("]F").collect();

    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].start, Vec2::ZERO, "pose untouched by underflow");
    assert_eq!(interpreter.underflows(), 1);
}

#[test]
fn deeply_nested_branches_stay_balanced() {
    // Every push must be honored, however deep the nesting, or later pops
    // would restore the wrong poses on well-formed input.
    let depth = 5000;
    let input = "[F".repeat(depth) + &"]".repeat(depth);

    let mut interpreter = setup();
    let segments: Vec<Segment> = interpreter.trace(&input).collect();

    assert_eq!(segments.len(), depth);
    assert_eq!(interpreter.underflows(), 0, "balanced input must not underflow");
    assert_eq!(interpreter.stack_depth(), 0);
    // The outermost pop restores the starting pose exactly.
    assert_eq!(interpreter.state().position, Vec2::ZERO);
}

#[test]
fn with_map_replaces_the_vocabulary() {
    let map = HashMap::from([
        ('D', TurtleOp::Draw),
        ('L', TurtleOp::Turn(1.0)),
    ]);
    let mut interpreter = TurtleInterpreter::new(TurtleConfig::default()).with_map(map);

    // 'F' means nothing in this vocabulary; 'D' draws.
    let segments: Vec<Segment> = interpreter.trace("FLD").collect();
    assert_eq!(segments.len(), 1);
    assert!(segments[0].end.abs_diff_eq(Vec2::new(0.0, 1.0), EPS));
}

#[test]
fn unmapped_symbols_pass_through() {
    let mut interpreter = setup();
    let segments: Vec<Segment> = interpreter.trace("XFY").collect();

    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].end, Vec2::new(1.0, 0.0));
}

#[test]
fn move_advances_without_drawing() {
    let mut interpreter = setup();
    let segments: Vec<Segment> = interpreter.trace("fF").collect();

    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].start, Vec2::new(1.0, 0.0));
    assert_eq!(segments[0].end, Vec2::new(2.0, 0.0));
}

#[test]
fn trace_is_lazy_and_abandonable() {
    let mut interpreter = setup();
    let first = interpreter.trace("FFFF").next();

    assert_eq!(
        first,
        Some(Segment {
            start: Vec2::ZERO,
            end: Vec2::new(1.0, 0.0),
        })
    );
    // Only the consumed prefix was executed.
    assert_eq!(interpreter.state().position, Vec2::new(1.0, 0.0));
}

#[test]
fn custom_step_and_angle() {
    let config = TurtleConfig {
        step_length: 2.0,
        turn_angle: std::f32::consts::PI,
        ..TurtleConfig::default()
    };
    let mut interpreter = TurtleInterpreter::new(config);
    interpreter.populate_standard_symbols();

    // Forward 2, turn around, forward 2: back at the origin.
    let segments: Vec<Segment> = interpreter.trace("F+F").collect();
    assert_eq!(segments.len(), 2);
    assert!(segments[1].end.abs_diff_eq(Vec2::ZERO, EPS));
}

#[test]
fn fractal_tree_end_to_end() {
    // Binary-tree system: leaves '0' and branches '1' both draw.
    let table = RuleTable::from_rules([('1', "11"), ('0', "1[0]0")]);
    let generation = apply_n(&table, "0", 4);

    let mut interpreter = TurtleInterpreter::new(TurtleConfig {
        turn_angle: std::f32::consts::FRAC_PI_4,
        ..TurtleConfig::default()
    });
    interpreter.set_op('0', TurtleOp::Draw);
    interpreter.set_op('1', TurtleOp::Draw);
    interpreter.set_op('[', TurtleOp::Push);
    interpreter.set_op(']', TurtleOp::Pop);

    let drawn = interpreter.trace(&generation).count();
    let expected = generation.chars().filter(|c| *c == '0' || *c == '1').count();
    assert_eq!(drawn, expected, "one segment per drawing symbol");

    // Brackets are balanced by construction of the rules.
    assert_eq!(interpreter.stack_depth(), 0);
    assert_eq!(interpreter.underflows(), 0);
}
