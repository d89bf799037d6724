// src/geometry.rs

//! Device geometry, derived font metrics, and the screen rectangle type.
//!
//! Everything here is plain data: the `Session` probes the framebuffer once
//! and derives a `FontMetrics` from the resolution tier; every other module
//! consumes these values read-only until the next re-probe.

use serde::{Deserialize, Serialize};

/// Base glyph cell size, in pixels, before scaling.
pub const GLYPH_SIZE: u32 = 8;

/// A screen region, in pixels. Matches the shape of the region passed to the
/// eInk controller for an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub top: u32,
    pub left: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(top: u32, left: u32, width: u32, height: u32) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }
}

/// Framebuffer geometry as probed from the device.
///
/// `line_length` is the byte stride of one row, which may exceed
/// `xres * bytes_per_pixel` on some panels. `mem_len` is the total length of
/// the mappable buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceGeometry {
    pub xres: u32,
    pub yres: u32,
    pub bits_per_pixel: u32,
    pub line_length: u32,
    pub mem_len: u32,
    pub rotate: u32,
}

impl DeviceGeometry {
    pub fn bytes_per_pixel(&self) -> u32 {
        self.bits_per_pixel / 8
    }
}

/// Font metrics derived from the device resolution.
///
/// The scale multiplier is a pure function of the larger screen dimension, so
/// the same physical device lands in the same tier regardless of rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontMetrics {
    /// Integer scale applied to the 8x8 base glyphs.
    pub multiplier: u32,
    /// Effective glyph cell width in pixels (`8 * multiplier`).
    pub cell_width: u32,
    /// Effective glyph cell height in pixels (`8 * multiplier`).
    pub cell_height: u32,
    /// Number of printable columns (`xres / cell_width`).
    pub max_cols: u32,
    /// Number of printable rows (`yres / cell_height`).
    pub max_rows: u32,
    /// True when the columns exactly consume the horizontal resolution,
    /// leaving no unaddressable pixel sliver at the right edge.
    pub perfect_fit: bool,
}

impl FontMetrics {
    /// Derives the metrics for a given resolution.
    ///
    /// Tiers roughly match the Pearl / Carta / Carta HD / 7" Carta HD panel
    /// generations.
    pub fn from_resolution(xres: u32, yres: u32) -> Self {
        // Compare against the larger dimension so Landscape devices don't
        // drop a tier.
        let screen_height = xres.max(yres);
        let multiplier = if screen_height <= 600 {
            1
        } else if screen_height <= 1024 {
            2
        } else if screen_height <= 1440 {
            3
        } else {
            4
        };

        let cell_width = GLYPH_SIZE * multiplier;
        let cell_height = GLYPH_SIZE * multiplier;
        let max_cols = xres / cell_width;
        let max_rows = yres / cell_height;
        let perfect_fit = cell_width * max_cols == xres;

        Self {
            multiplier,
            cell_width,
            cell_height,
            max_cols,
            max_rows,
            perfect_fit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn multiplier_tiers_are_boundary_inclusive() {
        assert_eq!(FontMetrics::from_resolution(600, 480).multiplier, 1);
        assert_eq!(FontMetrics::from_resolution(600, 800).multiplier, 2);
        assert_eq!(FontMetrics::from_resolution(758, 1024).multiplier, 2);
        assert_eq!(FontMetrics::from_resolution(1072, 1448).multiplier, 4);
        assert_eq!(FontMetrics::from_resolution(1080, 1440).multiplier, 3);
        assert_eq!(FontMetrics::from_resolution(1264, 1680).multiplier, 4);
    }

    #[test_log::test]
    fn multiplier_is_orientation_independent() {
        let portrait = FontMetrics::from_resolution(600, 800);
        let landscape = FontMetrics::from_resolution(800, 600);
        assert_eq!(portrait.multiplier, landscape.multiplier);
    }

    #[test_log::test]
    fn capacity_never_exceeds_resolution() {
        for &(x, y) in &[(600, 800), (758, 1024), (1072, 1448), (800, 600), (1448, 1072)] {
            let m = FontMetrics::from_resolution(x, y);
            assert!(m.max_cols * m.cell_width <= x, "{x}x{y} cols overflow");
            assert!(m.max_rows * m.cell_height <= y, "{x}x{y} rows overflow");
        }
    }

    #[test_log::test]
    fn perfect_fit_detection() {
        // 600 / 8 = 75 exactly.
        assert!(FontMetrics::from_resolution(600, 480).perfect_fit);
        // 1072 / 32 = 33.5, leaves a 16px sliver.
        assert!(!FontMetrics::from_resolution(1072, 1448).perfect_fit);
    }
}
