// Copyright 2026 the Lbr Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A font context over the fonts bundled with the test suite, independent of the host.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use lbr_text::parley::fontique::{
    Blob, Collection, CollectionOptions, GenericFamily, SourceCache,
};
use lbr_text::parley::FontContext;
use lbr_text::{ParleyRasterizer, RenderOptions};

/// The family of `assets/fonts/DejaVuSans.ttf`.
pub(crate) const FONT_FAMILY: &str = "DejaVu Sans";

/// Units per em of the bundled font.
pub(crate) const UNITS_PER_EM: f64 = 2048.0;

/// Top of the capital `I`, in font units above the baseline.
pub(crate) const CAP_HEIGHT: f64 = 1493.0;

fn font_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/fonts")
}

/// Builds a rasterizer that only sees the bundled fonts, which also serve as `sans-serif`.
pub(crate) fn bundled_rasterizer() -> ParleyRasterizer {
    let mut collection = Collection::new(CollectionOptions {
        shared: false,
        system_fonts: false,
    });
    let mut families = Vec::new();
    for entry in std::fs::read_dir(font_dir()).unwrap() {
        let path = entry.unwrap().path();
        if path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_none_or(|ext| !["ttf", "otf"].contains(&ext))
        {
            continue;
        }
        let font_data = std::fs::read(&path).unwrap();
        let registered = collection.register_fonts(Blob::new(Arc::new(font_data)), None);
        families.extend(registered.into_iter().map(|(family, _)| family));
    }
    collection
        .family_id(FONT_FAMILY)
        .unwrap_or_else(|| panic!("{FONT_FAMILY} font not found"));
    collection.set_generic_families(GenericFamily::SansSerif, families.into_iter());

    ParleyRasterizer::with_font_context(FontContext {
        collection,
        source_cache: SourceCache::default(),
    })
}

/// Options selecting the bundled font at 0.2 in.
pub(crate) fn bundled_options() -> RenderOptions {
    RenderOptions {
        font_face: FONT_FAMILY.to_owned(),
        ..RenderOptions::default()
    }
}
