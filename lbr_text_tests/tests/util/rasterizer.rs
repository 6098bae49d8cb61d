// Copyright 2026 the Lbr Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A deterministic rasterizer that draws text from a small ASCII-art font.

use lbr_text::{Error, InkOrigin, Rasterizer, RenderOptions, RenderedText};
use raster_runs::{Bitmap, PixelFormat};

/// Rows in every glyph. The last row is below the baseline.
pub(crate) const GLYPH_HEIGHT: usize = 5;

/// Rows above the baseline.
const ASCENT: usize = 4;

fn glyph(c: char) -> Option<[&'static str; GLYPH_HEIGHT]> {
    Some(match c {
        'I' => ["###", ".#.", ".#.", "###", "..."],
        'L' => ["#..", "#..", "#..", "###", "..."],
        'O' => ["###", "#.#", "#.#", "###", "..."],
        'T' => ["###", ".#.", ".#.", ".#.", "..."],
        'j' => ["..#", "...", "..#", "..#", "##."],
        '-' => ["...", "...", "###", "...", "..."],
        ' ' => ["...", "...", "...", "...", "..."],
        _ => return None,
    })
}

/// Renders text from a built-in ASCII-art font, one blank column between glyphs.
///
/// The bitmap always spans the full glyph height; it is only trimmed horizontally, and becomes
/// empty when nothing is inked. Every call is recorded.
#[derive(Debug, Default)]
pub(crate) struct AsciiRasterizer {
    pub(crate) calls: Vec<(String, u32, RenderOptions)>,
}

impl Rasterizer for AsciiRasterizer {
    fn render(
        &mut self,
        text: &str,
        resolution_dpi: u32,
        options: &RenderOptions,
    ) -> Result<RenderedText, Error> {
        self.calls
            .push((text.to_owned(), resolution_dpi, options.clone()));

        let mut rows = vec![String::new(); GLYPH_HEIGHT];
        for (i, c) in text.chars().enumerate() {
            let art = glyph(c).ok_or_else(|| Error::Font {
                face: options.font_face.clone(),
                message: format!("no glyph for {c:?}"),
            })?;
            for (row, part) in rows.iter_mut().zip(art) {
                if i > 0 {
                    row.push('.');
                }
                row.push_str(part);
            }
        }

        let columns = |row: &String| -> Vec<usize> {
            row.bytes()
                .enumerate()
                .filter(|(_, c)| *c == b'#')
                .map(|(x, _)| x)
                .collect()
        };
        let inked: Vec<usize> = rows.iter().flat_map(columns).collect();
        let (Some(&left), Some(&right)) = (inked.iter().min(), inked.iter().max()) else {
            return Ok(RenderedText {
                bitmap: Bitmap::empty(PixelFormat::A1),
                ink_origin: InkOrigin::default(),
            });
        };

        let width = right + 1 - left;
        let stride = PixelFormat::A1.aligned_stride(width);
        let mut data = vec![0_u8; stride * GLYPH_HEIGHT];
        for (row, dst) in rows.iter().zip(data.chunks_exact_mut(stride)) {
            for x in columns(row) {
                let x = x - left;
                dst[x / 8] |= 1 << (x % 8);
            }
        }
        let dpi = f64::from(resolution_dpi);
        Ok(RenderedText {
            bitmap: Bitmap::new(width, GLYPH_HEIGHT, PixelFormat::A1, stride, data)?,
            ink_origin: InkOrigin {
                x: -(left as f64) / dpi,
                y: ASCENT as f64 / dpi,
            },
        })
    }
}
