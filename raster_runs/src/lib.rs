// Copyright 2026 the Lbr Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Run-length decoding of rasterized text bitmaps.
//!
//! This crate is the leaf of the text-to-library pipeline. It models the pixel buffer produced by
//! a text rasterizer ([`Bitmap`]) in any of the supported [`PixelFormat`]s and decodes one row at a
//! time into maximal runs of identical pixels ([`RowSpan`]).
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
//!
//! ## Example
//!
//! ```
//! use raster_runs::{Bitmap, PixelFormat};
//!
//! // Two pixels, one bit each: ink, then background.
//! let bitmap = Bitmap::new(2, 1, PixelFormat::A1, 4, vec![0b01, 0, 0, 0]).unwrap();
//! let spans: Vec<_> = bitmap
//!     .row_spans(0)
//!     .unwrap()
//!     .map(|span| (span.start, span.end, span.value.is_foreground()))
//!     .collect();
//! assert_eq!(spans, [(0, 1, true), (1, 2, false)]);
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
#![no_std]

extern crate alloc;

mod bitmap;
mod error;
mod format;
mod pixel;
mod spans;

pub use crate::bitmap::{Bitmap, RowsBottomUp};
pub use crate::error::{Error, ErrorKind};
pub use crate::format::PixelFormat;
pub use crate::pixel::PixelValue;
pub use crate::spans::{RowSpan, RowSpans};
