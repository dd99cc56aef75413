//! Drawing-board engine for the shared freehand canvas.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! full lifecycle of a stroke: translating pointer events into captured point
//! sequences, thresholding points by distance, smoothing the committed stroke
//! for redraw, and maintaining the append-only stroke history that remote
//! strokes are merged into. The `ui` crate is responsible only for wiring DOM
//! events to the engine and shipping finalized strokes to the server.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`capture`] | Pointer-capture state machine |
//! | [`stroke`] | Stroke and point wire types |
//! | [`smooth`] | Midpoint quadratic smoothing as path data |
//! | [`render`] | 2D-context rendering |
//! | [`consts`] | Shared numeric constants |

pub mod capture;
pub mod consts;
pub mod engine;
pub mod render;
pub mod smooth;
pub mod stroke;
