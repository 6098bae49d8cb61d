// Copyright 2026 the Lbr Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use parley::{
    Alignment, AlignmentOptions, FontContext, FontFamily, FontStyle, FontWeight, GenericFamily,
    Layout, LayoutContext, PositionedLayoutItem, StyleProperty,
};
use raster_runs::{Bitmap, PixelFormat};
use skrifa::instance::{LocationRef, NormalizedCoord, Size};
use skrifa::outline::{DrawSettings, OutlinePen};
use skrifa::raw::FontRef;
use skrifa::{GlyphId, MetadataProvider};
use tiny_skia::{FillRule, LineJoin, Mask, Path, PathBuilder, Stroke, Transform};

use super::{Rasterizer, RenderOptions, RenderedText, Slant};
use crate::{Error, InkOrigin};

/// Coverage at or above which a pixel counts as ink in one-bit output.
const INK_THRESHOLD: u8 = 128;

/// Renders text with system fonts, or the fonts of a given [`FontContext`].
///
/// Text is laid out on a single line with Parley, the glyph outlines are extracted with Skrifa
/// and then filled with tiny-skia. The font and layout contexts are kept between calls, so one
/// rasterizer should be reused for a whole batch.
pub struct ParleyRasterizer {
    font_cx: FontContext,
    layout_cx: LayoutContext<()>,
}

impl ParleyRasterizer {
    /// Creates a rasterizer over the fonts installed on the system.
    pub fn new() -> Self {
        Self::with_font_context(FontContext::new())
    }

    /// Creates a rasterizer over the fonts of `font_cx`.
    ///
    /// Use this to render with fonts registered by the application instead of, or in addition
    /// to, the installed ones.
    pub fn with_font_context(font_cx: FontContext) -> Self {
        Self {
            font_cx,
            layout_cx: LayoutContext::new(),
        }
    }

    /// Whether `face` names a generic family or an installed family.
    pub fn has_face(&mut self, face: &str) -> bool {
        generic_family(face).is_some() || self.font_cx.collection.family_id(face).is_some()
    }

    fn layout(
        &mut self,
        text: &str,
        resolution_dpi: u32,
        options: &RenderOptions,
    ) -> Result<Layout<()>, Error> {
        let family = match generic_family(&options.font_face) {
            Some(generic) => FontFamily::from(generic),
            None if self.font_cx.collection.family_id(&options.font_face).is_some() => {
                FontFamily::Named(options.font_face.as_str().into())
            }
            None => return Err(Error::FontUnavailable(options.font_face.clone())),
        };
        let weight = if options.bold {
            FontWeight::BOLD
        } else {
            FontWeight::NORMAL
        };
        let style = match options.slant {
            Slant::Normal => FontStyle::Normal,
            Slant::Italic => FontStyle::Italic,
            Slant::Oblique => FontStyle::Oblique(None),
        };
        #[expect(
            clippy::cast_possible_truncation,
            reason = "font sizes in pixels are well within f32 range"
        )]
        let font_size = (options.size * f64::from(resolution_dpi)) as f32;

        let mut builder = self
            .layout_cx
            .ranged_builder(&mut self.font_cx, text, 1.0, false);
        builder.push_default(family);
        builder.push_default(StyleProperty::FontSize(font_size));
        builder.push_default(StyleProperty::FontWeight(weight));
        builder.push_default(StyleProperty::FontStyle(style));

        let mut layout = builder.build(text);
        layout.break_all_lines(None);
        layout.align(None, Alignment::Start, AlignmentOptions::default());
        Ok(layout)
    }
}

impl Default for ParleyRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for ParleyRasterizer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ParleyRasterizer").finish_non_exhaustive()
    }
}

impl Rasterizer for ParleyRasterizer {
    fn render(
        &mut self,
        text: &str,
        resolution_dpi: u32,
        options: &RenderOptions,
    ) -> Result<RenderedText, Error> {
        if resolution_dpi == 0 {
            return Err(Error::InvalidResolution(resolution_dpi));
        }
        options.validate()?;
        let layout = self.layout(text, resolution_dpi, options)?;
        let format = if options.antialias {
            PixelFormat::A8
        } else {
            PixelFormat::A1
        };

        let Some((glyphs, baseline)) = outline_layout(&layout, &options.font_face)? else {
            log::warn!("{text:?} has no ink");
            return Ok(empty(format));
        };
        let Some(filled) = fill_glyphs(&glyphs, options.antialias) else {
            log::warn!("{text:?} has no ink");
            return Ok(empty(format));
        };

        let bitmap = mask_to_bitmap(&filled.mask, format)?;
        let dpi = f64::from(resolution_dpi);
        let ink_origin = InkOrigin {
            x: f64::from(-filled.left) / dpi,
            y: f64::from(baseline - filled.top) / dpi,
        };
        log::debug!(
            "rendered {text:?} into a {}x{} {format} bitmap, origin ({:.4}, {:.4}) in",
            bitmap.width(),
            bitmap.height(),
            ink_origin.x,
            ink_origin.y
        );
        Ok(RenderedText { bitmap, ink_origin })
    }
}

fn empty(format: PixelFormat) -> RenderedText {
    RenderedText {
        bitmap: Bitmap::empty(format),
        ink_origin: InkOrigin::default(),
    }
}

/// Maps the keywords accepted for generic families. `sans` is a common shorthand.
fn generic_family(face: &str) -> Option<GenericFamily> {
    match face {
        "sans" => Some(GenericFamily::SansSerif),
        "mono" => Some(GenericFamily::Monospace),
        _ => GenericFamily::parse(face),
    }
}

/// Collects the outline of every glyph as its own path in layout pixels, with y pointing down.
///
/// Also returns the baseline of the first line. Returns `None` if the layout has no lines.
fn outline_layout(layout: &Layout<()>, face: &str) -> Result<Option<(Vec<Path>, f32)>, Error> {
    let mut pen = OutlineCollector::default();
    let mut glyphs = Vec::new();
    let mut baseline = None;

    for line in layout.lines() {
        for item in line.items() {
            let PositionedLayoutItem::GlyphRun(glyph_run) = item else {
                continue;
            };
            let mut run_x = glyph_run.offset();
            let run_y = glyph_run.baseline();
            baseline.get_or_insert(run_y);

            let run = glyph_run.run();
            let font = run.font();
            let font_ref = FontRef::from_index(font.data.as_ref(), font.index)
                .map_err(|err| font_error(face, err))?;
            let outlines = font_ref.outline_glyphs();
            let coords = run
                .normalized_coords()
                .iter()
                .map(|coord| NormalizedCoord::from_bits(*coord))
                .collect::<Vec<_>>();
            let size = Size::new(run.font_size());
            let synthesis = run.synthesis();
            pen.shear = synthesis
                .skew()
                .map_or(0.0, |degrees| degrees.to_radians().tan());
            let embolden = synthesis.embolden().then(|| {
                log::debug!("synthesizing bold for {face:?}");
                run.font_size() * EMBOLDEN_PER_EM
            });

            for glyph in glyph_run.glyphs() {
                pen.x = run_x + glyph.x;
                pen.y = run_y - glyph.y;
                run_x += glyph.advance;

                // Glyphs without an outline, such as spaces, leave no ink.
                let Some(outline) = outlines.get(GlyphId::from(glyph.id)) else {
                    continue;
                };
                let settings = DrawSettings::unhinted(size, LocationRef::new(&coords));
                outline
                    .draw(settings, &mut pen)
                    .map_err(|err| font_error(face, err))?;
                pen.finish_glyph(embolden, &mut glyphs);
            }
        }
    }

    Ok(baseline.map(|baseline| (glyphs, baseline)))
}

fn font_error(face: &str, err: impl core::fmt::Display) -> Error {
    Error::Font {
        face: face.to_owned(),
        message: err.to_string(),
    }
}

/// Stroke width for synthesized bold, relative to the font size.
const EMBOLDEN_PER_EM: f32 = 1.0 / 30.0;

/// Glyph coverage cropped to the ink box, with the box's corner in layout pixels.
struct FilledGlyphs {
    mask: Mask,
    left: f32,
    top: f32,
}

/// Fills every glyph path into one mask sized to the union of their bounds.
///
/// Each path is filled on its own, so contours of glyphs from fonts with opposite winding
/// directions cannot cancel out where they overlap. The box is rounded outward to whole pixels.
/// Returns `None` if there is nothing to fill.
fn fill_glyphs(glyphs: &[Path], antialias: bool) -> Option<FilledGlyphs> {
    let (left, top, right, bottom) = glyphs.iter().map(Path::bounds).fold(
        (f32::INFINITY, f32::INFINITY, f32::NEG_INFINITY, f32::NEG_INFINITY),
        |(left, top, right, bottom), rect| {
            (
                left.min(rect.left()),
                top.min(rect.top()),
                right.max(rect.right()),
                bottom.max(rect.bottom()),
            )
        },
    );
    if !(left < right && top < bottom) {
        return None;
    }
    let (left, top) = (left.floor(), top.floor());
    #[expect(
        clippy::cast_possible_truncation,
        reason = "the ink box is a small, non-negative number of pixels"
    )]
    let (width, height) = (
        (right.ceil() - left) as u32,
        (bottom.ceil() - top) as u32,
    );
    let mut mask = Mask::new(width, height)?;
    let transform = Transform::from_translate(-left, -top);
    for path in glyphs {
        mask.fill_path(path, FillRule::Winding, antialias, transform);
    }
    Some(FilledGlyphs { mask, left, top })
}

/// Thresholds or copies an 8-bit coverage mask into a bitmap with 4-byte aligned rows.
fn mask_to_bitmap(mask: &Mask, format: PixelFormat) -> Result<Bitmap, Error> {
    let width = mask.width() as usize;
    let height = mask.height() as usize;
    let stride = format.aligned_stride(width);
    let mut data = vec![0_u8; stride * height];

    for (src, dst) in mask
        .data()
        .chunks_exact(width)
        .zip(data.chunks_exact_mut(stride))
    {
        match format {
            PixelFormat::A1 => {
                for (x, _) in src
                    .iter()
                    .enumerate()
                    .filter(|(_, coverage)| **coverage >= INK_THRESHOLD)
                {
                    dst[x / 8] |= 1 << (x % 8);
                }
            }
            _ => dst[..width].copy_from_slice(src),
        }
    }
    Ok(Bitmap::new(width, height, format, stride, data)?)
}

/// Accumulates the outline of one glyph placed at a pen position.
///
/// Outline coordinates are y-up; the collected path is y-down. `shear` slants synthesized
/// oblique glyphs to the right.
#[derive(Default)]
struct OutlineCollector {
    path: PathBuilder,
    x: f32,
    y: f32,
    shear: f32,
}

impl OutlineCollector {
    fn map(&self, x: f32, y: f32) -> (f32, f32) {
        (self.x + x + y * self.shear, self.y - y)
    }

    /// Moves the outline drawn so far into `glyphs`.
    ///
    /// With `embolden`, the outline's stroke of that width is added too, widening the glyph by
    /// half the width on every side.
    fn finish_glyph(&mut self, embolden: Option<f32>, glyphs: &mut Vec<Path>) {
        let Some(path) = core::mem::take(&mut self.path).finish() else {
            return;
        };
        if let Some(width) = embolden {
            let stroke = Stroke {
                width,
                line_join: LineJoin::Round,
                ..Stroke::default()
            };
            glyphs.extend(path.stroke(&stroke, 1.0));
        }
        glyphs.push(path);
    }
}

impl OutlinePen for OutlineCollector {
    fn move_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.map(x, y);
        self.path.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.map(x, y);
        self.path.line_to(x, y);
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        let (cx0, cy0) = self.map(cx0, cy0);
        let (x, y) = self.map(x, y);
        self.path.quad_to(cx0, cy0, x, y);
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        let (cx0, cy0) = self.map(cx0, cy0);
        let (cx1, cy1) = self.map(cx1, cy1);
        let (x, y) = self.map(x, y);
        self.path.cubic_to(cx0, cy0, cx1, cy1, x, y);
    }

    fn close(&mut self) {
        self.path.close();
    }
}
