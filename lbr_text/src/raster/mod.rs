// Copyright 2026 the Lbr Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rendering text into bitmaps.
//!
//! The [`Rasterizer`] trait is the seam between the geometry pipeline and whatever draws the
//! glyphs. With the `system` feature, [`ParleyRasterizer`] provides an implementation backed by
//! the system fonts.

use raster_runs::Bitmap;

use crate::{Error, InkOrigin};

#[cfg(feature = "system")]
mod system;

#[cfg(feature = "system")]
pub use self::system::ParleyRasterizer;

/// Slant of the rendered glyphs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Slant {
    /// Upright glyphs.
    #[default]
    Normal,
    /// The italic face of the family.
    Italic,
    /// The upright face, sheared.
    Oblique,
}

/// How a string is drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderOptions {
    /// A font family name or a generic family such as `sans`, `serif` or `monospace`.
    pub font_face: String,
    /// Font size in inches.
    pub size: f64,
    /// Use the bold weight.
    pub bold: bool,
    /// Slant of the glyphs.
    pub slant: Slant,
    /// Keep partial coverage instead of thresholding to one bit per pixel.
    pub antialias: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            font_face: "sans".to_owned(),
            size: 0.2,
            bold: false,
            slant: Slant::Normal,
            antialias: false,
        }
    }
}

impl RenderOptions {
    /// Checks the font size.
    pub fn validate(&self) -> Result<(), Error> {
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(Error::InvalidSize(self.size));
        }
        Ok(())
    }
}

/// A rendered string: the bitmap of its ink box and where the text origin lies within it.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedText {
    /// The ink, with the top row first.
    pub bitmap: Bitmap,
    /// Offset from the top-left of `bitmap` to the start of the baseline.
    pub ink_origin: InkOrigin,
}

/// Draws strings into bitmaps.
pub trait Rasterizer {
    /// Renders `text` at `resolution_dpi` pixels per inch.
    ///
    /// The bitmap must be cropped to the ink. Text without ink yields an empty bitmap rather
    /// than an error.
    fn render(
        &mut self,
        text: &str,
        resolution_dpi: u32,
        options: &RenderOptions,
    ) -> Result<RenderedText, Error>;
}

impl<R: Rasterizer + ?Sized> Rasterizer for &mut R {
    fn render(
        &mut self,
        text: &str,
        resolution_dpi: u32,
        options: &RenderOptions,
    ) -> Result<RenderedText, Error> {
        (**self).render(text, resolution_dpi, options)
    }
}
