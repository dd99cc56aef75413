use super::*;

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

// =============================================================
// State transitions
// =============================================================

#[test]
fn starts_idle() {
    let capture = Capture::new();
    assert!(!capture.is_drawing());
}

#[test]
fn pointer_down_enters_drawing() {
    let mut capture = Capture::new();
    assert_eq!(capture.pointer_down(p(10.0, 10.0)), CaptureAction::None);
    assert!(capture.is_drawing());
}

#[test]
fn pointer_up_returns_to_idle() {
    let mut capture = Capture::new();
    capture.pointer_down(p(10.0, 10.0));
    capture.pointer_up();
    assert!(!capture.is_drawing());
}

#[test]
fn move_while_idle_is_ignored() {
    let mut capture = Capture::new();
    assert_eq!(capture.pointer_move(p(50.0, 50.0)), CaptureAction::None);
    assert!(!capture.is_drawing());
}

#[test]
fn up_while_idle_is_ignored() {
    let mut capture = Capture::new();
    assert_eq!(capture.pointer_up(), CaptureAction::None);
}

#[test]
fn down_while_drawing_restarts_the_gesture() {
    let mut capture = Capture::new();
    capture.pointer_down(p(0.0, 0.0));
    capture.pointer_move(p(10.0, 0.0));
    capture.pointer_down(p(100.0, 100.0));
    // The restarted gesture has a single point, so release discards it.
    assert_eq!(capture.pointer_up(), CaptureAction::None);
}

// =============================================================
// Distance threshold
// =============================================================

#[test]
fn close_moves_are_dropped() {
    let mut capture = Capture::new();
    capture.pointer_down(p(0.0, 0.0));
    assert_eq!(capture.pointer_move(p(1.0, 1.0)), CaptureAction::None);
    assert_eq!(capture.pointer_move(p(2.0, 0.0)), CaptureAction::None);
}

#[test]
fn moves_at_the_threshold_are_kept() {
    let mut capture = Capture::new();
    capture.pointer_down(p(0.0, 0.0));
    assert_eq!(
        capture.pointer_move(p(3.0, 0.0)),
        CaptureAction::Segment { from: p(0.0, 0.0), to: p(3.0, 0.0) }
    );
}

#[test]
fn threshold_is_measured_from_the_last_captured_point() {
    let mut capture = Capture::new();
    capture.pointer_down(p(0.0, 0.0));
    capture.pointer_move(p(4.0, 0.0));
    // 2.5 px past the captured point, even though it is 6.5 px from origin.
    assert_eq!(capture.pointer_move(p(6.5, 0.0)), CaptureAction::None);
    assert_eq!(
        capture.pointer_move(p(7.0, 0.0)),
        CaptureAction::Segment { from: p(4.0, 0.0), to: p(7.0, 0.0) }
    );
}

// =============================================================
// Finalization
// =============================================================

#[test]
fn single_point_gesture_is_discarded() {
    let mut capture = Capture::new();
    capture.pointer_down(p(5.0, 5.0));
    assert_eq!(capture.pointer_up(), CaptureAction::None);
}

#[test]
fn gesture_with_only_dropped_moves_is_discarded() {
    let mut capture = Capture::new();
    capture.pointer_down(p(5.0, 5.0));
    capture.pointer_move(p(5.5, 5.5));
    capture.pointer_move(p(6.0, 5.0));
    assert_eq!(capture.pointer_up(), CaptureAction::None);
}

#[test]
fn two_captured_points_finalize() {
    let mut capture = Capture::new();
    capture.pointer_down(p(0.0, 0.0));
    capture.pointer_move(p(10.0, 0.0));
    assert_eq!(
        capture.pointer_up(),
        CaptureAction::Finished(vec![p(0.0, 0.0), p(10.0, 0.0)])
    );
}

#[test]
fn finalized_points_preserve_capture_order() {
    let mut capture = Capture::new();
    capture.pointer_down(p(0.0, 0.0));
    capture.pointer_move(p(10.0, 0.0));
    capture.pointer_move(p(10.0, 10.0));
    capture.pointer_move(p(0.0, 10.0));
    let CaptureAction::Finished(points) = capture.pointer_up() else {
        panic!("expected a finalized stroke");
    };
    assert_eq!(points, vec![p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0), p(0.0, 10.0)]);
}
