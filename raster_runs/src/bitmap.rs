// Copyright 2026 the Lbr Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::ops::Range;

use crate::pixel::PixelReader;
use crate::{Error, PixelFormat, PixelValue, RowSpans};

/// An immutable, row-major pixel buffer.
///
/// The geometry is validated once on construction: every row `y < height` occupies
/// `data[y * stride..y * stride + min_stride]`, so row access never goes out of bounds.
#[derive(Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: usize,
    height: usize,
    format: PixelFormat,
    stride: usize,
    data: Vec<u8>,
}

impl Bitmap {
    /// Wraps a pixel buffer.
    ///
    /// Zero-sized bitmaps are accepted; they simply have no spans.
    pub fn new(
        width: usize,
        height: usize,
        format: PixelFormat,
        stride: usize,
        data: Vec<u8>,
    ) -> Result<Self, Error> {
        if stride < format.min_stride(width) {
            return Err(Error::stride_too_small(format, width, height, stride));
        }
        let needed = stride.checked_mul(height);
        if needed.is_none_or(|needed| needed > data.len()) {
            return Err(Error::buffer_too_short(
                format,
                width,
                height,
                stride,
                data.len(),
            ));
        }
        Ok(Self {
            width,
            height,
            format,
            stride,
            data,
        })
    }

    /// A bitmap with no pixels.
    pub fn empty(format: PixelFormat) -> Self {
        Self {
            width: 0,
            height: 0,
            format,
            stride: 0,
            data: Vec::new(),
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the bitmap has no pixels at all.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// The pixel format.
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Bytes per row, including padding.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// The raw pixel buffer.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The bytes of row `y`, without trailing padding.
    pub fn row(&self, y: usize) -> Result<&[u8], Error> {
        if y >= self.height {
            return Err(Error::row_out_of_bounds(
                self.format,
                self.width,
                self.height,
                y,
            ));
        }
        Ok(&self.data[self.row_range(y)])
    }

    /// The pixel at `(x, y)`, or `None` if it lies outside the bitmap.
    pub fn pixel_at(&self, x: usize, y: usize) -> Option<PixelValue> {
        if x >= self.width {
            return None;
        }
        let row = self.row(y).ok()?;
        Some(PixelReader::for_format(self.format).read(row, x))
    }

    /// Decodes row `y` into runs of identical pixels.
    ///
    /// Each call returns a fresh decoder, so decoding the same row twice yields the same spans.
    pub fn row_spans(&self, y: usize) -> Result<RowSpans<'_>, Error> {
        let row = self.row(y)?;
        Ok(RowSpans::new(row, self.width, self.format))
    }

    /// Decodes every row, starting from the visually lowest one.
    ///
    /// Yields `(physical_row, spans)` where `physical_row` 0 is the last row of the buffer. This is
    /// the order in which rows map onto an upward-pointing y axis.
    pub fn rows_bottom_up(&self) -> RowsBottomUp<'_> {
        RowsBottomUp {
            bitmap: self,
            rows: 0..self.height,
        }
    }

    fn row_range(&self, y: usize) -> Range<usize> {
        let start = y * self.stride;
        start..start + self.format.min_stride(self.width)
    }
}

impl core::fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Bitmap")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("format", &self.format)
            .field("stride", &self.stride)
            .field("data", &format_args!("[{} bytes]", self.data.len()))
            .finish()
    }
}

/// Iterator over the rows of a [`Bitmap`], bottom row first.
///
/// Returned by [`Bitmap::rows_bottom_up`].
#[derive(Clone, Debug)]
pub struct RowsBottomUp<'a> {
    bitmap: &'a Bitmap,
    rows: Range<usize>,
}

impl<'a> Iterator for RowsBottomUp<'a> {
    type Item = (usize, RowSpans<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        let y = self.rows.next()?;
        let row = &self.bitmap.data[self.bitmap.row_range(self.bitmap.height - 1 - y)];
        Some((y, RowSpans::new(row, self.bitmap.width, self.bitmap.format)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.rows.size_hint()
    }
}

impl ExactSizeIterator for RowsBottomUp<'_> {}

impl core::iter::FusedIterator for RowsBottomUp<'_> {}
