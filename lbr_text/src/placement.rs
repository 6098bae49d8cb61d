// Copyright 2026 the Lbr Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::str::FromStr;

use crate::Error;

/// Where the text sits horizontally relative to the package origin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HorizontalAlignment {
    /// The left ink edge is at x = 0.
    #[default]
    Left,
    /// The right ink edge is at x = 0.
    Right,
    /// The ink is centered on x = 0.
    Center,
}

/// Where the text sits vertically relative to the package origin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum VerticalAlignment {
    /// The top ink edge is at y = 0.
    Top,
    /// The bottom ink edge is at y = 0.
    #[default]
    Bottom,
    /// The font baseline is at y = 0.
    Baseline,
    /// The ink is centered on y = 0.
    Center,
}

impl HorizontalAlignment {
    /// Keyword used on the command line and in diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Center => "center",
        }
    }
}

impl VerticalAlignment {
    /// Keyword used on the command line and in diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Baseline => "baseline",
            Self::Center => "center",
        }
    }
}

/// Error returned when parsing an unknown alignment keyword.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseAlignmentError(String);

impl core::fmt::Display for ParseAlignmentError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "unknown alignment {:?}", self.0)
    }
}

impl core::error::Error for ParseAlignmentError {}

impl FromStr for HorizontalAlignment {
    type Err = ParseAlignmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "center" => Ok(Self::Center),
            _ => Err(ParseAlignmentError(s.to_owned())),
        }
    }
}

impl FromStr for VerticalAlignment {
    type Err = ParseAlignmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            "baseline" => Ok(Self::Baseline),
            "center" => Ok(Self::Center),
            _ => Err(ParseAlignmentError(s.to_owned())),
        }
    }
}

/// Offset from the top-left corner of a bitmap to the font's drawing origin on the baseline, in
/// inches.
///
/// `y` is measured downwards, so for ordinary text it is the ink height above the baseline.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InkOrigin {
    /// Horizontal offset, in inches.
    pub x: f64,
    /// Vertical offset, downwards, in inches.
    pub y: f64,
}

/// How bitmaps are scaled and placed in library coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacementConfig {
    /// Horizontal alignment of the ink box.
    pub halign: HorizontalAlignment,
    /// Vertical alignment of the ink box.
    pub valign: VerticalAlignment,
    /// Vertical overlap between neighbouring rows, as a percentage of one pixel split over both
    /// edges of every row.
    pub overlap_pct: f64,
    /// Pixels per inch of the bitmaps.
    pub resolution_dpi: u32,
    /// Layer the rectangles are drawn on.
    pub layer: u16,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            halign: HorizontalAlignment::Left,
            valign: VerticalAlignment::Bottom,
            overlap_pct: 10.0,
            resolution_dpi: 600,
            // tPlace, the top silkscreen.
            layer: 21,
        }
    }
}

impl PlacementConfig {
    /// Checks the numeric parameters.
    pub fn validate(&self) -> Result<(), Error> {
        if self.resolution_dpi == 0 {
            return Err(Error::InvalidResolution(self.resolution_dpi));
        }
        if !self.overlap_pct.is_finite() || self.overlap_pct < 0.0 {
            return Err(Error::InvalidOverlap(self.overlap_pct));
        }
        Ok(())
    }
}

/// The placement of one bitmap, derived from a [`PlacementConfig`], the bitmap size and its
/// [`InkOrigin`].
///
/// All values are in inches. Output row `y` counts upwards from the bottom row of the bitmap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    resolution: f64,
    xoffset: f64,
    yoffset: f64,
    overlap: f64,
}

impl Placement {
    /// Computes the offsets for a `width` by `height` pixel bitmap.
    pub fn new(
        config: &PlacementConfig,
        width: usize,
        height: usize,
        origin: InkOrigin,
    ) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self::new_validated(config, width, height, origin))
    }

    /// Like [`Placement::new`], for a configuration that already passed
    /// [`PlacementConfig::validate`].
    pub(crate) fn new_validated(
        config: &PlacementConfig,
        width: usize,
        height: usize,
        origin: InkOrigin,
    ) -> Self {
        let resolution = f64::from(config.resolution_dpi);
        let width = width as f64;
        let height = height as f64;

        let yoffset = match config.valign {
            VerticalAlignment::Top => height / resolution,
            VerticalAlignment::Bottom => 0.0,
            VerticalAlignment::Baseline => height / resolution - origin.y,
            VerticalAlignment::Center => height / (2.0 * resolution),
        };
        let xoffset = match config.halign {
            HorizontalAlignment::Left => 0.0,
            HorizontalAlignment::Right => width / resolution,
            HorizontalAlignment::Center => width / (2.0 * resolution),
        };
        Self {
            resolution,
            xoffset,
            yoffset,
            overlap: config.overlap_pct / (200.0 * resolution),
        }
    }

    /// Distance the ink box is shifted left.
    pub fn xoffset(&self) -> f64 {
        self.xoffset
    }

    /// Distance the ink box is shifted down.
    pub fn yoffset(&self) -> f64 {
        self.yoffset
    }

    /// Extra height added to both the bottom and the top of every row.
    pub fn overlap(&self) -> f64 {
        self.overlap
    }

    /// Bottom and top of output row `y`.
    pub fn row_extent(&self, y: usize) -> (f64, f64) {
        let y = y as f64;
        (
            y / self.resolution - self.overlap - self.yoffset,
            (y + 1.0) / self.resolution + self.overlap - self.yoffset,
        )
    }

    /// Left and right of the pixel run `x1..x2`.
    pub fn span_extent(&self, x1: usize, x2: usize) -> (f64, f64) {
        (
            x1 as f64 / self.resolution - self.xoffset,
            x2 as f64 / self.resolution - self.xoffset,
        )
    }
}
