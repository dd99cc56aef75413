//! Pointer-capture state machine.
//!
//! A gesture runs `Idle -> Drawing -> Idle`, entered on pointer-down and left
//! on pointer-up (or cancel/leave, which the host maps to the same call).
//! While drawing, a move is captured only when it is at least
//! [`MIN_POINT_DISTANCE`](crate::consts::MIN_POINT_DISTANCE) away from the
//! last captured point; each captured move also yields the straight segment
//! to draw immediately, before the smoothed redraw on finalization.

#[cfg(test)]
#[path = "capture_test.rs"]
mod capture_test;

use crate::consts::MIN_POINT_DISTANCE;
use crate::stroke::Point;

/// Internal state of the capture machine.
#[derive(Clone, Debug, Default)]
pub enum CaptureState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// A gesture is in progress.
    Drawing {
        /// Points captured so far, press position first.
        points: Vec<Point>,
    },
}

/// What the host should do in response to a pointer event.
#[derive(Clone, Debug, PartialEq)]
pub enum CaptureAction {
    /// Nothing to do (move while idle, or a thresholded-out move).
    None,
    /// Draw an immediate straight segment for responsiveness.
    Segment {
        /// Last captured point before this event.
        from: Point,
        /// Newly captured point.
        to: Point,
    },
    /// The gesture ended with enough points to form a stroke.
    Finished(Vec<Point>),
}

/// The capture state machine.
#[derive(Clone, Debug, Default)]
pub struct Capture {
    state: CaptureState,
}

impl Capture {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a gesture is currently in progress.
    #[must_use]
    pub fn is_drawing(&self) -> bool {
        matches!(self.state, CaptureState::Drawing { .. })
    }

    /// Begin a gesture at the press position.
    ///
    /// A pointer-down while already drawing restarts the gesture; the
    /// in-flight sequence is discarded (matches a missed pointer-up).
    pub fn pointer_down(&mut self, at: Point) -> CaptureAction {
        self.state = CaptureState::Drawing { points: vec![at] };
        CaptureAction::None
    }

    /// Feed a pointer move; captures the point only past the distance
    /// threshold.
    pub fn pointer_move(&mut self, at: Point) -> CaptureAction {
        let CaptureState::Drawing { points } = &mut self.state else {
            return CaptureAction::None;
        };

        let Some(&last) = points.last() else {
            points.push(at);
            return CaptureAction::None;
        };

        if last.distance_to(at) < MIN_POINT_DISTANCE {
            return CaptureAction::None;
        }

        points.push(at);
        CaptureAction::Segment { from: last, to: at }
    }

    /// End the gesture. Sequences with fewer than 2 captured points are
    /// discarded rather than finalized.
    pub fn pointer_up(&mut self) -> CaptureAction {
        let state = std::mem::take(&mut self.state);
        match state {
            CaptureState::Idle => CaptureAction::None,
            CaptureState::Drawing { points } => {
                if points.len() > 1 {
                    CaptureAction::Finished(points)
                } else {
                    CaptureAction::None
                }
            }
        }
    }
}
