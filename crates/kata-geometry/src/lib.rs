//! Plain geometry values.
//!
//! [`Rectangle`] stores its sides and computes the area on every call, so the
//! area is always consistent with the current fields.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rectangle {
    /// Horizontal side length.
    pub width: f64,
    /// Vertical side length.
    pub height: f64,
}

impl Rectangle {
    /// Create a rectangle from its sides.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// `width * height`, recomputed from the current fields.
    #[must_use]
    pub const fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// The bare data shape of a rectangle as it appears in JSON.
///
/// Deserialize into this, then convert, when the richer type should be built
/// from plain fields rather than parsed directly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectangleRecord {
    /// Horizontal side length.
    pub width: f64,
    /// Vertical side length.
    pub height: f64,
}

impl From<RectangleRecord> for Rectangle {
    fn from(record: RectangleRecord) -> Self {
        Self::new(record.width, record.height)
    }
}

impl From<Rectangle> for RectangleRecord {
    fn from(rectangle: Rectangle) -> Self {
        Self {
            width: rectangle.width,
            height: rectangle.height,
        }
    }
}
