// Copyright 2026 the Lbr Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::PixelFormat;

/// Error type for bitmap construction and row decoding.
///
/// Carries a non-exhaustive [`ErrorKind`] plus the bitmap geometry that was rejected, so callers
/// can report exactly what the rasterizer handed over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    format: PixelFormat,
    width: usize,
    height: usize,
    /// Stride for geometry errors, row index for [`ErrorKind::RowOutOfBounds`].
    value: usize,
    /// Buffer length for [`ErrorKind::BufferTooShort`].
    available: usize,
}

impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The pixel format of the offending bitmap.
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Width and height of the offending bitmap, in pixels.
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub(crate) fn stride_too_small(
        format: PixelFormat,
        width: usize,
        height: usize,
        stride: usize,
    ) -> Self {
        Self {
            kind: ErrorKind::StrideTooSmall,
            format,
            width,
            height,
            value: stride,
            available: 0,
        }
    }

    pub(crate) fn buffer_too_short(
        format: PixelFormat,
        width: usize,
        height: usize,
        stride: usize,
        available: usize,
    ) -> Self {
        Self {
            kind: ErrorKind::BufferTooShort,
            format,
            width,
            height,
            value: stride,
            available,
        }
    }

    pub(crate) fn row_out_of_bounds(
        format: PixelFormat,
        width: usize,
        height: usize,
        row: usize,
    ) -> Self {
        Self {
            kind: ErrorKind::RowOutOfBounds,
            format,
            width,
            height,
            value: row,
            available: 0,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            ErrorKind::StrideTooSmall => write!(
                f,
                "stride {} too small for {} pixels of {} (needs {})",
                self.value,
                self.width,
                self.format,
                self.format.min_stride(self.width)
            ),
            ErrorKind::BufferTooShort => write!(
                f,
                "buffer of {} bytes too short for {} rows of stride {}",
                self.available, self.height, self.value
            ),
            ErrorKind::RowOutOfBounds => write!(
                f,
                "row {} out of bounds for bitmap of height {}",
                self.value, self.height
            ),
        }
    }
}

impl core::error::Error for Error {}

/// The non-exhaustive category of an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The row stride cannot hold a full row of pixels.
    StrideTooSmall,

    /// The pixel buffer is shorter than `stride * height`.
    BufferTooShort,

    /// A row index at or past the bitmap's height was requested.
    RowOutOfBounds,
}
