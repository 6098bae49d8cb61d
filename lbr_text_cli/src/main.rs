// Copyright 2026 the Lbr Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `lbr-text`: rasterize strings and write them as rectangle packages of an Eagle library.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use lbr_text::{
    Bitmap, HorizontalAlignment, LibraryFile, ParleyRasterizer, PlacementConfig, RenderOptions,
    Slant, TextLibrary, VerticalAlignment,
};
use tiny_skia::{IntSize, Pixmap};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "lbr-text", version)]
#[command(about = "Generate an Eagle CAD library of text packages made of rectangles")]
struct Args {
    /// Strings to rasterize, one package each
    #[arg(required = true)]
    text: Vec<String>,

    /// Library file to create (default: standard output)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Layer to draw on
    #[arg(short, long, default_value_t = 21)]
    layer: u16,

    /// Resolution in pixels per inch
    #[arg(short, long, default_value_t = 600)]
    resolution: u32,

    /// Font face, either a family name or a generic family such as sans, serif or monospace
    #[arg(short, long, default_value = "sans")]
    font: String,

    /// Use the bold weight
    #[arg(short, long)]
    bold: bool,

    /// Use the italic face
    #[arg(short, long, conflicts_with = "oblique")]
    italic: bool,

    /// Slant the upright face
    #[arg(long)]
    oblique: bool,

    /// Font size in inches
    #[arg(short, long, default_value_t = 0.2)]
    size: f64,

    /// Horizontal alignment of the text relative to the package origin
    #[arg(long, value_enum, default_value_t = HAlign::Left)]
    halign: HAlign,

    /// Vertical alignment of the text relative to the package origin
    #[arg(long, value_enum, default_value_t = VAlign::Bottom)]
    valign: VAlign,

    /// Vertical overlap of neighbouring rows, in percent of a pixel
    #[arg(long, default_value_t = 10.0)]
    overlap: f64,

    /// Render with antialiasing
    #[arg(long)]
    antialias: bool,

    /// Write each rendered bitmap to DIR/<NAME>.png
    #[arg(long, value_name = "DIR")]
    dump_png: Option<PathBuf>,

    /// Log more; repeat for more detail
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum HAlign {
    Left,
    Right,
    Center,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum VAlign {
    Top,
    Bottom,
    Baseline,
    Center,
}

impl From<HAlign> for HorizontalAlignment {
    fn from(value: HAlign) -> Self {
        match value {
            HAlign::Left => Self::Left,
            HAlign::Right => Self::Right,
            HAlign::Center => Self::Center,
        }
    }
}

impl From<VAlign> for VerticalAlignment {
    fn from(value: VAlign) -> Self {
        match value {
            VAlign::Top => Self::Top,
            VAlign::Bottom => Self::Bottom,
            VAlign::Baseline => Self::Baseline,
            VAlign::Center => Self::Center,
        }
    }
}

impl Args {
    fn placement(&self) -> PlacementConfig {
        PlacementConfig {
            halign: self.halign.into(),
            valign: self.valign.into(),
            overlap_pct: self.overlap,
            resolution_dpi: self.resolution,
            layer: self.layer,
        }
    }

    fn render_options(&self) -> RenderOptions {
        let slant = if self.italic {
            Slant::Italic
        } else if self.oblique {
            Slant::Oblique
        } else {
            Slant::Normal
        };
        RenderOptions {
            font_face: self.font.clone(),
            size: self.size,
            bold: self.bold,
            slant,
            antialias: self.antialias,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Written directly, so a restrictive log filter cannot hide it.
            let _ = report(&err, io::stderr().lock());
            ExitCode::FAILURE
        }
    }
}

/// Writes the error and its causes on one line.
fn report(err: &anyhow::Error, mut out: impl Write) -> io::Result<()> {
    writeln!(out, "error: {err:#}")
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();
}

fn run(args: &Args) -> Result<()> {
    let mut rasterizer = ParleyRasterizer::new();
    if !rasterizer.has_face(&args.font) {
        anyhow::bail!("font face {:?} is not available", args.font);
    }
    let mut library = TextLibrary::new(rasterizer, args.placement(), args.render_options())
        .context("invalid settings")?;

    if let Some(dir) = &args.dump_png {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("cannot create {}", dir.display()))?;
    }

    for text in &args.text {
        let entry = library
            .add_text(text)
            .with_context(|| format!("cannot add {text:?}"))?;
        tracing::info!(
            name = %entry.name,
            width = entry.rendered.bitmap.width(),
            height = entry.rendered.bitmap.height(),
            rectangles = entry.rectangles,
            "package built"
        );
        if let Some(dir) = &args.dump_png {
            let path = dir.join(format!("{}.png", entry.name));
            dump_png(&entry.rendered.bitmap, &path)
                .with_context(|| format!("cannot write {}", path.display()))?;
        }
    }

    write_library(&library.finish(), args.output.as_deref())
}

fn write_library(file: &LibraryFile, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            let out = File::create(path)
                .with_context(|| format!("cannot create {}", path.display()))?;
            file.write(BufWriter::new(out))
                .with_context(|| format!("cannot write {}", path.display()))?;
            tracing::info!(path = %path.display(), "library written");
        }
        None => {
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            file.write(&mut out).context("cannot write to standard output")?;
            out.flush()?;
        }
    }
    Ok(())
}

/// Saves the ink as black on white.
fn dump_png(bitmap: &Bitmap, path: &Path) -> Result<()> {
    if bitmap.is_empty() {
        tracing::warn!(path = %path.display(), "no ink, skipping image");
        return Ok(());
    }
    let size = IntSize::from_wh(
        u32::try_from(bitmap.width())?,
        u32::try_from(bitmap.height())?,
    )
    .context("bitmap too large for an image")?;

    let mut rgba = Vec::with_capacity(bitmap.width() * bitmap.height() * 4);
    for y in 0..bitmap.height() {
        for x in 0..bitmap.width() {
            let ink = bitmap.pixel_at(x, y).is_some_and(|value| value.is_foreground());
            let shade = if ink { 0 } else { 0xff };
            rgba.extend_from_slice(&[shade, shade, shade, 0xff]);
        }
    }
    let pixmap = Pixmap::from_vec(rgba, size).context("bitmap too large for an image")?;
    pixmap.save_png(path)?;
    Ok(())
}
