//! Rendering: draws stroke history and live segments to a 2D context.
//!
//! This module is the only place that touches
//! [`web_sys::CanvasRenderingContext2d`]. It receives read-only stroke data
//! and produces pixels; it does not mutate any engine state. Every call used
//! here is infallible in `web-sys`; fallible context acquisition lives in
//! [`crate::engine::Engine::new`].

use web_sys::CanvasRenderingContext2d;

use crate::consts::{SURFACE_HEIGHT, SURFACE_WIDTH};
use crate::smooth::{PathSeg, smooth_path};
use crate::stroke::{Point, Stroke};

/// Apply the session pen settings and the round cap/join the surface uses.
pub fn apply_pen_defaults(ctx: &CanvasRenderingContext2d, color: &str, width: f64) {
    ctx.set_line_cap("round");
    ctx.set_line_join("round");
    ctx.set_line_width(width);
    ctx.set_stroke_style_str(color);
}

/// Draw one straight live segment with the current pen settings.
pub fn draw_segment(ctx: &CanvasRenderingContext2d, from: Point, to: Point) {
    ctx.begin_path();
    ctx.move_to(from.x, from.y);
    ctx.line_to(to.x, to.y);
    ctx.stroke();
}

/// Clear the surface and redraw the full stroke history, smoothed.
///
/// Restores the session pen settings afterwards so live segments keep the
/// participant's own color.
pub fn draw_scene(ctx: &CanvasRenderingContext2d, strokes: &[Stroke], pen_color: &str, pen_width: f64) {
    ctx.clear_rect(0.0, 0.0, SURFACE_WIDTH, SURFACE_HEIGHT);

    for stroke in strokes {
        ctx.set_stroke_style_str(&stroke.color);
        ctx.set_line_width(stroke.line_width);
        draw_smoothed(ctx, &stroke.points);
    }

    ctx.set_stroke_style_str(pen_color);
    ctx.set_line_width(pen_width);
}

fn draw_smoothed(ctx: &CanvasRenderingContext2d, points: &[Point]) {
    let path = smooth_path(points);
    if path.is_empty() {
        return;
    }

    ctx.begin_path();
    for seg in path {
        match seg {
            PathSeg::MoveTo(p) => ctx.move_to(p.x, p.y),
            PathSeg::QuadTo { ctrl, to } => ctx.quadratic_curve_to(ctrl.x, ctrl.y, to.x, to.y),
        }
    }
    ctx.stroke();
}
