//! Stroke and point wire types.
//!
//! These shapes mirror the server's stroke payloads field for field. A
//! committed [`Stroke`] carries its color; the outgoing [`StrokeUpload`] does
//! not, because the server attaches the sender's assigned color before
//! fanning the stroke out to other participants.

#[cfg(test)]
#[path = "stroke_test.rs"]
mod stroke_test;

use serde::{Deserialize, Serialize};

/// A point on the drawing surface, in surface pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// One continuous freehand gesture, finalized and immutable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    /// Captured points in draw order.
    pub points: Vec<Point>,
    /// Pen width in pixels.
    #[serde(rename = "lineWidth")]
    pub line_width: f64,
    /// Pen color as `#rrggbb`.
    pub color: String,
}

/// Outgoing wire form of a finalized stroke.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StrokeUpload {
    /// Captured points in draw order.
    pub points: Vec<Point>,
    /// Pen width in pixels.
    #[serde(rename = "lineWidth")]
    pub line_width: f64,
}

impl Stroke {
    /// The upload form of this stroke (color stripped).
    #[must_use]
    pub fn to_upload(&self) -> StrokeUpload {
        StrokeUpload { points: self.points.clone(), line_width: self.line_width }
    }
}
