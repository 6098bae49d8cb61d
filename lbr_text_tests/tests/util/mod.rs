// Copyright 2026 the Lbr Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Utility functions and types shared across tests.

mod fonts;
mod rasterizer;

pub(crate) use fonts::{
    bundled_options, bundled_rasterizer, CAP_HEIGHT, FONT_FAMILY, UNITS_PER_EM,
};
pub(crate) use rasterizer::{AsciiRasterizer, GLYPH_HEIGHT};

use eagle_lbr::LibraryFile;
use raster_runs::{Bitmap, PixelFormat};

/// Byte written into row padding, so stray reads show up as extra spans.
const PADDING: u8 = 0xa5;

/// Builds a bitmap from ASCII art, top row first.
///
/// `#` is full ink, `o` is a second, different ink value (for one-bit bitmaps it is plain ink),
/// anything else is paper. Rows use the 4-byte aligned stride with the padding filled with
/// garbage.
pub(crate) fn bitmap(format: PixelFormat, rows: &[&str]) -> Bitmap {
    let width = rows.first().map_or(0, |row| row.len());
    let stride = format.aligned_stride(width);
    let mut data = vec![PADDING; stride * rows.len()];

    for (row, dst) in rows.iter().zip(data.chunks_exact_mut(stride)) {
        assert_eq!(row.len(), width, "ragged ASCII art");
        match format.bytes_per_pixel() {
            Some(n) => {
                dst[..width * n].fill(0);
                for (x, c) in row.bytes().enumerate() {
                    let pixel = &mut dst[x * n..(x + 1) * n];
                    match c {
                        b'#' => pixel.fill(0xff),
                        b'o' => {
                            pixel.fill(0x01);
                            pixel[0] = 0x80;
                        }
                        _ => {}
                    }
                }
            }
            None => {
                dst[..width.div_ceil(8)].fill(0);
                for (x, c) in row.bytes().enumerate() {
                    if matches!(c, b'#' | b'o') {
                        dst[x / 8] |= 1 << (x % 8);
                    }
                }
            }
        }
    }
    Bitmap::new(width, rows.len(), format, stride, data).unwrap()
}

/// Number of ink runs over all rows.
pub(crate) fn ink_spans(bitmap: &Bitmap) -> usize {
    (0..bitmap.height())
        .map(|y| {
            bitmap
                .row_spans(y)
                .unwrap()
                .filter(|span| span.value.is_foreground())
                .count()
        })
        .sum()
}

/// Number of ink pixels.
pub(crate) fn ink_pixels(bitmap: &Bitmap) -> usize {
    (0..bitmap.height())
        .flat_map(|y| bitmap.row_spans(y).unwrap())
        .filter(|span| span.value.is_foreground())
        .map(|span| span.end - span.start)
        .sum()
}

/// Serializes a library into a string.
pub(crate) fn serialize(library: &LibraryFile) -> String {
    let mut out = Vec::new();
    library.write(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

/// Asserts that two floats agree to well below the serialized precision.
pub(crate) fn assert_close(actual: f64, expected: f64, what: &str) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "{what}: expected {expected}, got {actual}"
    );
}
