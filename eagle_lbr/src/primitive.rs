// Copyright 2026 the Lbr Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::xml::Element;
use crate::COORD_PRECISION;

/// An axis-aligned filled rectangle on one layer.
///
/// Coordinates are in millimeters and normalized on construction so that `x1 <= x2` and
/// `y1 <= y2`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rectangle {
    layer: u16,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl Rectangle {
    /// Creates a rectangle from two opposite corners, in any order.
    pub fn new(layer: u16, x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            layer,
            x1: x1.min(x2),
            y1: y1.min(y2),
            x2: x1.max(x2),
            y2: y1.max(y2),
        }
    }

    /// The layer this rectangle is drawn on.
    pub fn layer(&self) -> u16 {
        self.layer
    }

    /// The corners as `(x1, y1, x2, y2)`, lower left first.
    pub fn coords(&self) -> (f64, f64, f64, f64) {
        (self.x1, self.y1, self.x2, self.y2)
    }

    /// Horizontal extent.
    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    /// Vertical extent.
    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    pub(crate) fn to_element(self) -> Element {
        Element::new("rectangle")
            .attr("layer", self.layer.to_string())
            .attr("x1", format_coord(self.x1))
            .attr("y1", format_coord(self.y1))
            .attr("x2", format_coord(self.x2))
            .attr("y2", format_coord(self.y2))
    }
}

/// A drawing primitive of a package.
#[derive(Clone, Copy, Debug, PartialEq)]
#[non_exhaustive]
pub enum Primitive {
    /// A filled rectangle.
    Rectangle(Rectangle),
}

impl Primitive {
    /// The layer the primitive is drawn on.
    pub fn layer(&self) -> u16 {
        match self {
            Self::Rectangle(rect) => rect.layer(),
        }
    }

    pub(crate) fn to_element(self) -> Element {
        match self {
            Self::Rectangle(rect) => rect.to_element(),
        }
    }
}

impl From<Rectangle> for Primitive {
    fn from(rect: Rectangle) -> Self {
        Self::Rectangle(rect)
    }
}

/// Formats a coordinate the way library files store them: fixed point with
/// [`COORD_PRECISION`] decimals.
///
/// Values that round to zero are always written without a sign.
pub fn format_coord(value: f64) -> String {
    let formatted = format!("{value:.prec$}", prec = COORD_PRECISION);
    match formatted.strip_prefix('-') {
        Some(magnitude) if magnitude.bytes().all(|b| b == b'0' || b == b'.') => {
            magnitude.to_owned()
        }
        _ => formatted,
    }
}
