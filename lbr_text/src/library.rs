// Copyright 2026 the Lbr Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use eagle_lbr::{DeviceSet, LibraryFile, Package};

use crate::{
    package_name, Error, GlyphMapper, PlacementConfig, Rasterizer, RenderOptions, RenderedText,
};

/// Outcome of adding one string to a [`TextLibrary`].
#[derive(Clone, Debug, PartialEq)]
pub struct TextEntry {
    /// Name shared by the package and its deviceset.
    pub name: String,
    /// The bitmap the package was built from.
    pub rendered: RenderedText,
    /// Number of rectangles in the package.
    pub rectangles: usize,
}

/// Builds a library with one package per string.
///
/// Each string becomes a package of rectangles plus a deviceset of the same name with a single
/// device. Nothing is written until the caller serializes [`TextLibrary::finish`]'s result, so a
/// failure part way through leaves no partial output behind.
#[derive(Debug)]
pub struct TextLibrary<R> {
    rasterizer: R,
    mapper: GlyphMapper,
    render: RenderOptions,
    file: LibraryFile,
}

impl<R: Rasterizer> TextLibrary<R> {
    /// Creates an empty library, validating the configuration.
    pub fn new(
        rasterizer: R,
        placement: PlacementConfig,
        render: RenderOptions,
    ) -> Result<Self, Error> {
        let mapper = GlyphMapper::new(placement)?;
        render.validate()?;
        let file = LibraryFile::new();
        if !file.layers().contains(placement.layer) {
            return Err(Error::UnknownLayer(placement.layer));
        }
        Ok(Self {
            rasterizer,
            mapper,
            render,
            file,
        })
    }

    /// Renders `text` and adds its package and deviceset.
    pub fn add_text(&mut self, text: &str) -> Result<TextEntry, Error> {
        if text.is_empty() {
            return Err(Error::EmptyText);
        }
        let name = package_name(text);
        let config = self.mapper.config();
        let rendered = self
            .rasterizer
            .render(text, config.resolution_dpi, &self.render)?;

        let mut package = Package::new(name.clone());
        let rectangles = self
            .mapper
            .map_into(&rendered.bitmap, rendered.ink_origin, &mut package);
        if rectangles == 0 {
            log::warn!("package {name} is empty");
        }
        self.file.add_package(package)?;

        let mut deviceset = DeviceSet::new(name.clone());
        deviceset.add_device("", name.clone());
        self.file.add_deviceset(deviceset)?;

        log::info!("added {name} ({rectangles} rectangles)");
        Ok(TextEntry {
            name,
            rendered,
            rectangles,
        })
    }

    /// The document built so far.
    pub fn library(&self) -> &LibraryFile {
        &self.file
    }

    /// The rasterizer, for callers that need to query it between strings.
    pub fn rasterizer_mut(&mut self) -> &mut R {
        &mut self.rasterizer
    }

    /// Consumes the builder and returns the finished document.
    pub fn finish(self) -> LibraryFile {
        self.file
    }
}
