// Copyright 2026 the Lbr Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Errors raised while turning text into library packages.
///
/// Configuration problems (`Invalid*`, [`Error::UnknownLayer`], [`Error::EmptyText`]) are detected
/// before any row of a bitmap is processed. Font problems are reported by the rasterizer. None of
/// these are retryable.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The resolution must be at least one pixel per inch.
    InvalidResolution(u32),
    /// The overlap percentage must be finite and not negative.
    InvalidOverlap(f64),
    /// The font size must be finite and positive.
    InvalidSize(f64),
    /// The target layer is not part of the library's layer table.
    UnknownLayer(u16),
    /// The text is empty, so no package name can be derived from it.
    EmptyText,
    /// The requested font face is not installed.
    FontUnavailable(String),
    /// Font data could not be read or a glyph outline could not be drawn.
    Font {
        /// The font family or file involved.
        face: String,
        /// What went wrong.
        message: String,
    },
    /// The rasterizer produced an inconsistent bitmap.
    Bitmap(raster_runs::Error),
    /// The library rejected the package or deviceset.
    Library(eagle_lbr::Error),
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidResolution(dpi) => {
                write!(f, "invalid resolution {dpi} dpi: must be greater than zero")
            }
            Self::InvalidOverlap(pct) => {
                write!(f, "invalid overlap {pct}%: must be a finite, non-negative number")
            }
            Self::InvalidSize(size) => {
                write!(f, "invalid font size {size}: must be a finite, positive number")
            }
            Self::UnknownLayer(layer) => write!(f, "layer {layer} is not an Eagle layer"),
            Self::EmptyText => f.write_str("cannot build a package from empty text"),
            Self::FontUnavailable(face) => write!(f, "font face {face:?} is not available"),
            Self::Font { face, message } => write!(f, "font {face:?}: {message}"),
            Self::Bitmap(_) => f.write_str("rasterizer produced an invalid bitmap"),
            Self::Library(_) => f.write_str("library rejected the generated package"),
        }
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Bitmap(err) => Some(err),
            Self::Library(err) => Some(err),
            _ => None,
        }
    }
}

impl From<raster_runs::Error> for Error {
    fn from(err: raster_runs::Error) -> Self {
        Self::Bitmap(err)
    }
}

impl From<eagle_lbr::Error> for Error {
    fn from(err: eagle_lbr::Error) -> Self {
        Self::Library(err)
    }
}
