//! Top-level engine: pen state, stroke history, and the browser canvas.
//!
//! `EngineCore` holds everything that does not depend on the canvas element,
//! so the capture/commit/merge logic is testable natively. `Engine` wraps an
//! `HtmlCanvasElement`, owns its 2D context, and turns core actions into
//! pixels via [`crate::render`].

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::capture::{Capture, CaptureAction};
use crate::consts::{DEFAULT_LINE_WIDTH, FALLBACK_PEN_COLOR, SURFACE_HEIGHT, SURFACE_WIDTH};
use crate::render;
use crate::stroke::{Point, Stroke};

/// Actions returned from pointer handlers for the host to process.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    None,
    /// A straight segment was drawn live; no host work needed beyond render.
    SegmentDrawn { from: Point, to: Point },
    /// A stroke was committed to local history and should be uploaded once.
    StrokeCommitted(Stroke),
}

/// Core engine state, testable without WASM/browser dependencies.
#[derive(Clone, Debug)]
pub struct EngineCore {
    /// Committed strokes, local and remote, in arrival order.
    pub strokes: Vec<Stroke>,
    /// The active gesture, if any.
    pub capture: Capture,
    /// Pen color for strokes drawn in this session.
    pub pen_color: String,
    /// Pen width for strokes drawn in this session.
    pub pen_width: f64,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self {
            strokes: Vec::new(),
            capture: Capture::new(),
            pen_color: FALLBACK_PEN_COLOR.to_owned(),
            pen_width: DEFAULT_LINE_WIDTH,
        }
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pen color for subsequently committed strokes.
    pub fn set_pen_color(&mut self, color: String) {
        self.pen_color = color;
    }

    // --- Pointer events ---

    pub fn pointer_down(&mut self, at: Point) -> Action {
        self.capture.pointer_down(at);
        Action::None
    }

    pub fn pointer_move(&mut self, at: Point) -> Action {
        match self.capture.pointer_move(at) {
            CaptureAction::Segment { from, to } => Action::SegmentDrawn { from, to },
            CaptureAction::None | CaptureAction::Finished(_) => Action::None,
        }
    }

    /// End the gesture; commits the stroke when it captured enough points.
    pub fn pointer_up(&mut self) -> Action {
        match self.capture.pointer_up() {
            CaptureAction::Finished(points) => {
                let stroke = Stroke {
                    points,
                    line_width: self.pen_width,
                    color: self.pen_color.clone(),
                };
                self.strokes.push(stroke.clone());
                Action::StrokeCommitted(stroke)
            }
            CaptureAction::None | CaptureAction::Segment { .. } => Action::None,
        }
    }

    // --- Data inputs ---

    /// Merge strokes broadcast by other participants into local history.
    pub fn apply_remote(&mut self, strokes: Vec<Stroke>) {
        self.strokes.extend(strokes);
    }

    /// Drop all local history (local action only; peers are unaffected).
    pub fn clear(&mut self) {
        self.strokes.clear();
    }
}

/// The full easel engine. Wraps `EngineCore` and owns the browser canvas.
pub struct Engine {
    ctx: CanvasRenderingContext2d,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the element has no 2D context.
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let mut engine = Self { ctx, core: EngineCore::new() };
        engine.reset_surface(canvas);
        Ok(engine)
    }

    /// Reconfigure the backing store and pen defaults, then redraw history.
    ///
    /// Resizing a canvas resets its context state, so this runs both at
    /// startup and on window resize.
    pub fn reset_surface(&mut self, canvas: &HtmlCanvasElement) {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            canvas.set_width(SURFACE_WIDTH as u32);
            canvas.set_height(SURFACE_HEIGHT as u32);
        }
        render::apply_pen_defaults(&self.ctx, &self.core.pen_color, self.core.pen_width);
        self.render();
    }

    /// Set the pen color and reapply it to the context.
    pub fn set_pen_color(&mut self, color: String) {
        self.core.set_pen_color(color);
        render::apply_pen_defaults(&self.ctx, &self.core.pen_color, self.core.pen_width);
    }

    // --- Delegated pointer events ---

    pub fn pointer_down(&mut self, at: Point) -> Action {
        self.core.pointer_down(at)
    }

    /// Feed a pointer move and draw the live segment when one is captured.
    pub fn pointer_move(&mut self, at: Point) -> Action {
        let action = self.core.pointer_move(at);
        if let Action::SegmentDrawn { from, to } = action {
            render::draw_segment(&self.ctx, from, to);
        }
        action
    }

    pub fn pointer_up(&mut self) -> Action {
        let action = self.core.pointer_up();
        if matches!(action, Action::StrokeCommitted(_)) {
            self.render();
        }
        action
    }

    // --- Delegated data inputs ---

    pub fn apply_remote(&mut self, strokes: Vec<Stroke>) {
        self.core.apply_remote(strokes);
        self.render();
    }

    pub fn clear(&mut self) {
        self.core.clear();
        self.render();
    }

    // --- Render ---

    /// Redraw the full stroke history with smoothing.
    pub fn render(&self) {
        render::draw_scene(&self.ctx, &self.core.strokes, &self.core.pen_color, self.core.pen_width);
    }
}
