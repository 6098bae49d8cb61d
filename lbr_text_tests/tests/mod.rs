// Copyright 2026 the Lbr Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate contains the integration test suite for `lbr_text`.
//!
//! - The `util` module holds an in-memory rasterizer driven by ASCII art, plus helpers for
//!   building bitmaps in every pixel format and for parsing serialized libraries.
//! - Tests of the Parley rasterizer use the fonts in `assets/fonts` only, never the host's
//!   installed fonts, so they give the same pixels everywhere.
//! - Like the other crates of the workspace, we use this `mod.rs` file as the single entry point
//!   instead of the default test harness layout, so the helpers are shared.
//! - Put tests into the module for their topic: `decode` for bitmaps and spans, `mapping` for
//!   geometry, `library` for whole documents. Start test names with the topic.

#![allow(missing_docs, reason = "we don't need docs for testing")]
#![allow(clippy::cast_possible_truncation, reason = "not critical for testing")]

mod library;
mod util;
