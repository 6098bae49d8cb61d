// Copyright 2026 the Lbr Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Turn rasterized text into rectangle footprints for Eagle CAD libraries.
//!
//! The pipeline for each string is:
//!
//! 1. A [`Rasterizer`] renders the text into a [`Bitmap`] and reports the [`InkOrigin`].
//! 2. The [`GlyphMapper`] walks the bitmap bottom row first, decodes each row into runs with
//!    [`raster_runs`], and turns every ink run into a [`Rectangle`] in millimeters, placed
//!    according to the [`PlacementConfig`].
//! 3. [`TextLibrary`] collects the rectangles into a package plus a matching deviceset of an
//!    [`eagle_lbr::LibraryFile`].
//!
//! ## Features
//!
//! - `system` (enabled by default): the [`ParleyRasterizer`], which lays out text with Parley
//!   using system fonts and fills the glyph outlines with tiny-skia.
//!
//! ## Example
//!
//! ```
//! use lbr_text::{GlyphMapper, InkOrigin, PlacementConfig};
//! use raster_runs::{Bitmap, PixelFormat};
//!
//! let config = PlacementConfig {
//!     resolution_dpi: 100,
//!     overlap_pct: 0.0,
//!     ..PlacementConfig::default()
//! };
//! let mapper = GlyphMapper::new(config).unwrap();
//! let bitmap = Bitmap::new(2, 1, PixelFormat::A1, 4, vec![0b01, 0, 0, 0]).unwrap();
//!
//! let rects = mapper.map(&bitmap, InkOrigin::default());
//! assert_eq!(rects.len(), 1);
//! let (x1, _, x2, _) = rects[0].coords();
//! assert_eq!(x1, 0.0);
//! assert!((x2 - 0.254).abs() < 1e-12);
//! ```
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod library;
mod mapper;
mod naming;
mod placement;
pub mod raster;

pub use eagle_lbr::{self, LibraryFile, Package, Rectangle, MM_PER_INCH};
#[cfg(feature = "system")]
pub use parley;
pub use raster_runs::{self, Bitmap, PixelFormat};

pub use crate::error::Error;
pub use crate::library::{TextEntry, TextLibrary};
pub use crate::mapper::{GlyphMapper, Rectangles};
pub use crate::naming::package_name;
pub use crate::placement::{
    HorizontalAlignment, InkOrigin, ParseAlignmentError, Placement, PlacementConfig,
    VerticalAlignment,
};
#[cfg(feature = "system")]
pub use crate::raster::ParleyRasterizer;
pub use crate::raster::{Rasterizer, RenderOptions, RenderedText, Slant};
