// Copyright 2026 the Lbr Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::iter::FusedIterator;

use eagle_lbr::{Package, Rectangle, MM_PER_INCH};
use raster_runs::{Bitmap, RowSpans, RowsBottomUp};

use crate::{Error, InkOrigin, Placement, PlacementConfig};

/// Converts the ink of rasterized text into rectangles.
///
/// Every row is tiled on its own: each run of ink pixels becomes one rectangle spanning the row's
/// height (plus the overlap margin). Nothing is merged across rows or runs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphMapper {
    config: PlacementConfig,
}

impl GlyphMapper {
    /// Creates a mapper, rejecting an invalid resolution or overlap up front.
    pub fn new(config: PlacementConfig) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration this mapper was built with.
    pub fn config(&self) -> &PlacementConfig {
        &self.config
    }

    /// The placement used for `bitmap`.
    pub fn placement(&self, bitmap: &Bitmap, origin: InkOrigin) -> Placement {
        Placement::new_validated(&self.config, bitmap.width(), bitmap.height(), origin)
    }

    /// Lazily yields the rectangles for `bitmap`, bottom row first, left to right within a row.
    ///
    /// Coordinates are in millimeters.
    pub fn rectangles<'a>(&self, bitmap: &'a Bitmap, origin: InkOrigin) -> Rectangles<'a> {
        Rectangles {
            rows: bitmap.rows_bottom_up(),
            current: None,
            placement: self.placement(bitmap, origin),
            layer: self.config.layer,
        }
    }

    /// Collects the rectangles for `bitmap`.
    pub fn map(&self, bitmap: &Bitmap, origin: InkOrigin) -> Vec<Rectangle> {
        self.rectangles(bitmap, origin).collect()
    }

    /// Appends the rectangles for `bitmap` to `package` and returns how many were added.
    pub fn map_into(&self, bitmap: &Bitmap, origin: InkOrigin, package: &mut Package) -> usize {
        let before = package.primitives().len();
        package.extend(self.rectangles(bitmap, origin));
        let added = package.primitives().len() - before;
        log::debug!(
            "mapped {}x{} {} bitmap into {added} rectangles",
            bitmap.width(),
            bitmap.height(),
            bitmap.format()
        );
        added
    }
}

/// Iterator over the rectangles of one bitmap.
///
/// Returned by [`GlyphMapper::rectangles`].
#[derive(Clone, Debug)]
pub struct Rectangles<'a> {
    rows: RowsBottomUp<'a>,
    /// Spans of the row being tiled, with its bottom and top in inches.
    current: Option<(RowSpans<'a>, f64, f64)>,
    placement: Placement,
    layer: u16,
}

impl Iterator for Rectangles<'_> {
    type Item = Rectangle;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((spans, y1, y2)) = &mut self.current {
                if let Some(span) = spans.find(|span| span.value.is_foreground()) {
                    let (x1, x2) = self.placement.span_extent(span.start, span.end);
                    return Some(Rectangle::new(
                        self.layer,
                        x1 * MM_PER_INCH,
                        *y1 * MM_PER_INCH,
                        x2 * MM_PER_INCH,
                        *y2 * MM_PER_INCH,
                    ));
                }
            }
            let (y, spans) = self.rows.next()?;
            let (y1, y2) = self.placement.row_extent(y);
            log::trace!("row {y}: y1={y1:.6}in y2={y2:.6}in");
            self.current = Some((spans, y1, y2));
        }
    }
}

impl FusedIterator for Rectangles<'_> {}
