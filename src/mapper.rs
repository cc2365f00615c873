//! Coordinate mapping between device pixels and the logical canvas.
//!
//! The host renders the slide into a preview rectangle of arbitrary size.
//! Pointer events arrive in device pixels relative to the same origin as that
//! rectangle; element geometry lives in the fixed logical canvas
//! ([`CANVAS_WIDTH`] x [`CANVAS_HEIGHT`]). A preview with no area has not been
//! laid out yet, and every mapping through it yields `None`.

#[cfg(test)]
#[path = "mapper_test.rs"]
mod mapper_test;

use serde::{Deserialize, Serialize};

use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};

/// A point (or delta) in either device or logical space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise difference `self - origin`.
    #[must_use]
    pub fn delta_from(self, origin: Point) -> Point {
        Point { x: self.x - origin.x, y: self.y - origin.y }
    }
}

/// An axis-aligned rectangle in either device or logical space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Inclusive containment test.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }
}

/// Where the slide preview sits on screen, in device pixels.
pub type PreviewRect = Rect;

/// Per-axis factors that turn device pixels into logical units, or `None`
/// when the preview has not been laid out.
#[must_use]
pub fn scale(preview: &PreviewRect) -> Option<(f64, f64)> {
    let usable = |v: f64| v.is_finite() && v > 0.0;
    if !usable(preview.width) || !usable(preview.height) {
        return None;
    }
    Some((CANVAS_WIDTH / preview.width, CANVAS_HEIGHT / preview.height))
}

/// Convert a device-space point to logical canvas coordinates.
#[must_use]
pub fn to_logical(device: Point, preview: &PreviewRect) -> Option<Point> {
    let (sx, sy) = scale(preview)?;
    Some(Point { x: (device.x - preview.x) * sx, y: (device.y - preview.y) * sy })
}

/// Convert a device-space delta to a logical delta. The preview origin is irrelevant.
#[must_use]
pub fn delta_to_logical(delta: Point, preview: &PreviewRect) -> Option<Point> {
    let (sx, sy) = scale(preview)?;
    Some(Point { x: delta.x * sx, y: delta.y * sy })
}

/// Convert a logical rectangle to the device-space rectangle it occupies in the preview.
#[must_use]
pub fn to_display(logical: &Rect, preview: &PreviewRect) -> Option<Rect> {
    let (sx, sy) = scale(preview)?;
    Some(Rect {
        x: preview.x + logical.x / sx,
        y: preview.y + logical.y / sy,
        width: logical.width / sx,
        height: logical.height / sy,
    })
}
