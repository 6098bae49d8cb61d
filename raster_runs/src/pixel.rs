// Copyright 2026 the Lbr Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::PixelFormat;

/// The value of a single pixel, as stored in the bitmap.
///
/// Byte-aligned formats carry their raw bytes (1, 2 or 4 of them); the 1-bit format carries a
/// single bit. Two values are equal when they hold the same bytes, or the same bit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PixelValue {
    /// A pixel of a bit-packed format.
    Bit(bool),
    /// A pixel of a byte-aligned format. Only the first `len` bytes are meaningful and the rest
    /// are always zero.
    Bytes {
        /// Raw pixel bytes, zero padded.
        bytes: [u8; 4],
        /// Number of meaningful bytes.
        len: u8,
    },
}

impl PixelValue {
    /// The stored bytes of this pixel. A bit pixel is reported as a single `0` or `1` byte.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Bit(false) => &[0],
            Self::Bit(true) => &[1],
            Self::Bytes { bytes, len } => &bytes[..usize::from(*len)],
        }
    }

    /// Whether this pixel counts as ink.
    ///
    /// This is a binary threshold on the encoded pixel: the first stored byte (or the bit) is
    /// nonzero. No alpha blending or coverage weighting is applied.
    pub fn is_foreground(&self) -> bool {
        match self {
            Self::Bit(bit) => *bit,
            Self::Bytes { bytes, .. } => bytes[0] != 0,
        }
    }
}

impl core::fmt::Display for PixelValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Bit(bit) => write!(f, "{}", u8::from(*bit)),
            Self::Bytes { .. } => {
                for byte in self.as_bytes() {
                    write!(f, "{byte:02x}")?;
                }
                Ok(())
            }
        }
    }
}

/// Reads pixels out of a row, with the per-format access rule chosen up front.
#[derive(Clone, Copy, Debug)]
pub(crate) enum PixelReader {
    /// `n` consecutive bytes per pixel.
    Bytes(usize),
    /// One bit per pixel, least significant bit first.
    Bit,
}

impl PixelReader {
    pub(crate) fn for_format(format: PixelFormat) -> Self {
        match format.bytes_per_pixel() {
            Some(n) => Self::Bytes(n),
            None => Self::Bit,
        }
    }

    /// Reads pixel `x` out of `row`, which must hold at least the minimal stride for `x + 1`
    /// pixels.
    #[inline]
    pub(crate) fn read(self, row: &[u8], x: usize) -> PixelValue {
        match self {
            Self::Bytes(n) => {
                let start = x * n;
                let mut bytes = [0_u8; 4];
                bytes[..n].copy_from_slice(&row[start..start + n]);
                #[expect(
                    clippy::cast_possible_truncation,
                    reason = "pixels are at most 4 bytes wide"
                )]
                let len = n as u8;
                PixelValue::Bytes { bytes, len }
            }
            Self::Bit => PixelValue::Bit((row[x / 8] >> (x % 8)) & 1 == 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{PixelReader, PixelValue};
    use crate::PixelFormat;

    #[test]
    fn bits_are_read_least_significant_first() {
        let reader = PixelReader::for_format(PixelFormat::A1);
        let row = [0b1000_0101, 0b0000_0001];
        let bits: [bool; 10] = core::array::from_fn(|x| reader.read(&row, x).is_foreground());
        assert_eq!(
            bits,
            [true, false, true, false, false, false, false, true, true, false]
        );
    }

    #[test]
    fn byte_pixels_compare_all_bytes() {
        let reader = PixelReader::for_format(PixelFormat::Rgb16_565);
        let row = [0x00, 0x01, 0x00, 0x02, 0x00, 0x01];
        assert_ne!(reader.read(&row, 0), reader.read(&row, 1));
        assert_eq!(reader.read(&row, 0), reader.read(&row, 2));
        assert_eq!(reader.read(&row, 1).as_bytes(), &[0x00, 0x02]);
    }

    #[test]
    fn foreground_looks_at_the_first_byte_only() {
        let ink = PixelValue::Bytes {
            bytes: [0xff, 0, 0, 0],
            len: 4,
        };
        let paper = PixelValue::Bytes {
            bytes: [0, 0xff, 0xff, 0xff],
            len: 4,
        };
        assert!(ink.is_foreground());
        assert!(!paper.is_foreground());
        assert!(PixelValue::Bit(true).is_foreground());
        assert!(!PixelValue::Bit(false).is_foreground());
    }
}
