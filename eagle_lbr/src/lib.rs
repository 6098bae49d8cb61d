// Copyright 2026 the Lbr Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Build and serialize Eagle CAD component libraries.
//!
//! The document is an explicit tree of owned values: a [`LibraryFile`] owns its [`Package`]s and
//! [`DeviceSet`]s, which own their primitives and devices. Construction is append-only and
//! validated as it goes (names are unique, layers exist, devices point at known packages), and
//! [`LibraryFile::write`] is the single step that turns the tree into XML.
//!
//! ## Example
//!
//! ```
//! use eagle_lbr::{DeviceSet, LibraryFile, Package};
//!
//! let mut package = Package::new("PKG");
//! package.add_rectangle(21, 18.2448, 4.669, 19.685, 4.7836);
//!
//! let mut deviceset = DeviceSet::new("DEV");
//! deviceset.add_device("", "PKG");
//!
//! let mut lib = LibraryFile::new();
//! lib.add_package(package).unwrap();
//! lib.add_deviceset(deviceset).unwrap();
//!
//! let mut out = Vec::new();
//! lib.write(&mut out).unwrap();
//! let xml = String::from_utf8(out).unwrap();
//! assert!(xml.contains(r#"<rectangle layer="21" x1="18.244800" y1="4.669000""#));
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
mod layer;
mod library;
mod primitive;
mod xml;

pub use crate::error::{Error, ErrorKind};
pub use crate::layer::{Layer, LayerTable};
pub use crate::library::{Device, DeviceSet, LibraryFile, Package};
pub use crate::primitive::{format_coord, Primitive, Rectangle};

/// The Eagle file format version written to the document root.
pub const EAGLE_VERSION: &str = "6.5.0";

/// Millimeters per inch; Eagle library coordinates are in millimeters.
pub const MM_PER_INCH: f64 = 25.4;

/// Number of decimal digits written for every coordinate.
pub const COORD_PRECISION: usize = 6;
