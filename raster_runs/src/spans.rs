// Copyright 2026 the Lbr Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::iter::FusedIterator;
use core::ops::Range;

use crate::pixel::PixelReader;
use crate::{PixelFormat, PixelValue};

/// A maximal run of identical pixels within one row.
///
/// Covers the half-open pixel interval `start..end`, with `start < end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RowSpan {
    /// First pixel of the run.
    pub start: usize,
    /// One past the last pixel of the run.
    pub end: usize,
    /// The value shared by every pixel of the run.
    pub value: PixelValue,
}

impl RowSpan {
    /// The covered pixel interval.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Number of pixels in the run. Never zero.
    #[expect(
        clippy::len_without_is_empty,
        reason = "spans are never empty by construction"
    )]
    pub fn len(&self) -> usize {
        self.end - self.start
    }
}

/// Run-length decoder for a single bitmap row.
///
/// Yields [`RowSpan`]s in increasing order that together cover `0..width` exactly once. Created by
/// [`Bitmap::row_spans`](crate::Bitmap::row_spans).
#[derive(Clone, Debug)]
pub struct RowSpans<'a> {
    row: &'a [u8],
    width: usize,
    reader: PixelReader,
    /// Start of the next span.
    cursor: usize,
}

impl<'a> RowSpans<'a> {
    pub(crate) fn new(row: &'a [u8], width: usize, format: PixelFormat) -> Self {
        Self {
            row,
            width,
            reader: PixelReader::for_format(format),
            cursor: 0,
        }
    }
}

impl Iterator for RowSpans<'_> {
    type Item = RowSpan;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.width {
            return None;
        }
        let start = self.cursor;
        let value = self.reader.read(self.row, start);
        let mut end = start + 1;
        while end < self.width && self.reader.read(self.row, end) == value {
            end += 1;
        }
        self.cursor = end;
        Some(RowSpan { start, end, value })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.width.saturating_sub(self.cursor);
        (usize::from(remaining > 0), Some(remaining))
    }
}

impl FusedIterator for RowSpans<'_> {}
