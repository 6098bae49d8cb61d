// Copyright 2026 the Lbr Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// The memory layout of a single pixel in a [`Bitmap`](crate::Bitmap).
///
/// These mirror the image surface formats of common 2D rasterizers. Multi-byte formats are stored
/// in native byte order; the decoder never interprets channels, it only compares whole pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// 32 bits per pixel, alpha in the upper 8 bits, then red, green and blue.
    Argb32,
    /// 32 bits per pixel, upper 8 bits unused, then red, green and blue.
    Rgb24,
    /// 8 bits of alpha per pixel.
    A8,
    /// 1 bit of alpha per pixel, packed starting at the least significant bit of each byte.
    A1,
    /// 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
    Rgb16_565,
    /// 32 bits per pixel, upper 2 bits unused, then 10 bits each of red, green and blue.
    Rgb30,
}

impl PixelFormat {
    /// All supported formats.
    pub const fn all() -> &'static [Self] {
        &[
            Self::Argb32,
            Self::Rgb24,
            Self::A8,
            Self::A1,
            Self::Rgb16_565,
            Self::Rgb30,
        ]
    }

    /// Storage size of one pixel in bits.
    ///
    /// Note that [`PixelFormat::Rgb30`] and [`PixelFormat::Rgb24`] occupy a full 32 bits.
    pub const fn bits_per_pixel(self) -> usize {
        match self {
            Self::Argb32 | Self::Rgb24 | Self::Rgb30 => 32,
            Self::Rgb16_565 => 16,
            Self::A8 => 8,
            Self::A1 => 1,
        }
    }

    /// Storage size of one pixel in bytes, or `None` for bit-packed formats.
    pub const fn bytes_per_pixel(self) -> Option<usize> {
        match self.bits_per_pixel() {
            1 => None,
            bits => Some(bits / 8),
        }
    }

    /// The smallest number of bytes able to hold a row of `width` pixels.
    pub const fn min_stride(self, width: usize) -> usize {
        match self.bytes_per_pixel() {
            Some(bytes) => width * bytes,
            None => width.div_ceil(8),
        }
    }

    /// The row stride rasterizers conventionally use: [`min_stride`](Self::min_stride) rounded up
    /// to a multiple of 4 bytes.
    pub const fn aligned_stride(self, width: usize) -> usize {
        self.min_stride(width).next_multiple_of(4)
    }
}

impl core::fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Self::Argb32 => "ARGB32",
            Self::Rgb24 => "RGB24",
            Self::A8 => "A8",
            Self::A1 => "A1",
            Self::Rgb16_565 => "RGB16_565",
            Self::Rgb30 => "RGB30",
        })
    }
}
