#![allow(clippy::float_cmp)]

use super::*;
use crate::consts::{DEFAULT_LINE_WIDTH, FALLBACK_PEN_COLOR};

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn remote_stroke(color: &str) -> Stroke {
    Stroke {
        points: vec![p(0.0, 0.0), p(20.0, 20.0)],
        line_width: 2.0,
        color: color.to_owned(),
    }
}

fn draw_line(core: &mut EngineCore) -> Action {
    core.pointer_down(p(0.0, 0.0));
    core.pointer_move(p(10.0, 0.0));
    core.pointer_move(p(20.0, 0.0));
    core.pointer_up()
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn core_defaults_are_empty_with_fallback_pen() {
    let core = EngineCore::new();
    assert!(core.strokes.is_empty());
    assert!(!core.capture.is_drawing());
    assert_eq!(core.pen_color, FALLBACK_PEN_COLOR);
    assert_eq!(core.pen_width, DEFAULT_LINE_WIDTH);
}

// =============================================================
// Commit lifecycle
// =============================================================

#[test]
fn finished_gesture_commits_a_stroke() {
    let mut core = EngineCore::new();
    core.set_pen_color("#336699".to_owned());

    let action = draw_line(&mut core);
    let Action::StrokeCommitted(stroke) = action else {
        panic!("expected a committed stroke, got {action:?}");
    };
    assert_eq!(stroke.points.len(), 3);
    assert_eq!(stroke.color, "#336699");
    assert_eq!(stroke.line_width, DEFAULT_LINE_WIDTH);
    assert_eq!(core.strokes.len(), 1);
}

#[test]
fn committed_stroke_matches_history_entry() {
    let mut core = EngineCore::new();
    let Action::StrokeCommitted(stroke) = draw_line(&mut core) else {
        panic!("expected a committed stroke");
    };
    assert_eq!(core.strokes[0], stroke);
}

#[test]
fn short_gesture_commits_nothing() {
    let mut core = EngineCore::new();
    core.pointer_down(p(5.0, 5.0));
    assert_eq!(core.pointer_up(), Action::None);
    assert!(core.strokes.is_empty());
}

#[test]
fn captured_move_reports_the_live_segment() {
    let mut core = EngineCore::new();
    core.pointer_down(p(0.0, 0.0));
    assert_eq!(
        core.pointer_move(p(5.0, 0.0)),
        Action::SegmentDrawn { from: p(0.0, 0.0), to: p(5.0, 0.0) }
    );
}

#[test]
fn thresholded_move_reports_nothing() {
    let mut core = EngineCore::new();
    core.pointer_down(p(0.0, 0.0));
    assert_eq!(core.pointer_move(p(1.0, 0.0)), Action::None);
}

// =============================================================
// Remote strokes and clearing
// =============================================================

#[test]
fn remote_strokes_append_to_history() {
    let mut core = EngineCore::new();
    draw_line(&mut core);
    core.apply_remote(vec![remote_stroke("#aa0000"), remote_stroke("#00aa00")]);
    assert_eq!(core.strokes.len(), 3);
    assert_eq!(core.strokes[1].color, "#aa0000");
    assert_eq!(core.strokes[2].color, "#00aa00");
}

#[test]
fn remote_strokes_keep_their_own_color() {
    let mut core = EngineCore::new();
    core.set_pen_color("#123456".to_owned());
    core.apply_remote(vec![remote_stroke("#fedcba")]);
    assert_eq!(core.strokes[0].color, "#fedcba");
}

#[test]
fn clear_empties_history() {
    let mut core = EngineCore::new();
    draw_line(&mut core);
    core.apply_remote(vec![remote_stroke("#aa0000")]);
    core.clear();
    assert!(core.strokes.is_empty());
}

#[test]
fn clear_does_not_end_an_active_gesture() {
    let mut core = EngineCore::new();
    core.pointer_down(p(0.0, 0.0));
    core.pointer_move(p(10.0, 0.0));
    core.clear();
    assert!(core.capture.is_drawing());
    assert!(matches!(core.pointer_up(), Action::StrokeCommitted(_)));
}
