// src/font/mod.rs

//! Bitmap font lookup and glyph rasterization.
//!
//! The font is a fixed set of 8x8 bitmaps split into per-range tables (see
//! `tables`). Lookup walks a small static range list; codepoints outside
//! every range fall back to the blank glyph with a warning. Rasterization
//! scales a bitmap up by the integer multiplier from `FontMetrics` using
//! nearest-neighbor sampling, producing a `Pixmap` of coverage flags the
//! painter turns into foreground/background pixels.

mod tables;

use crate::geometry::{FontMetrics, GLYPH_SIZE};
use log::warn;

/// Result of mapping a codepoint to a bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphLookup {
    /// The codepoint is covered by one of the font tables.
    Found(&'static [u8; 8]),
    /// Not covered; the blank fallback glyph is substituted.
    Fallback(&'static [u8; 8]),
}

impl GlyphLookup {
    pub fn bitmap(&self) -> &'static [u8; 8] {
        match self {
            GlyphLookup::Found(b) | GlyphLookup::Fallback(b) => b,
        }
    }
}

struct GlyphRange {
    first: u32,
    last: u32,
    table: &'static [[u8; 8]],
}

static RANGES: &[GlyphRange] = &[
    GlyphRange { first: 0x0000, last: 0x007F, table: &tables::BASIC },
    GlyphRange { first: 0x0080, last: 0x009F, table: &tables::CONTROL },
    GlyphRange { first: 0x00A0, last: 0x00FF, table: &tables::EXT_LATIN },
    GlyphRange { first: 0x0390, last: 0x03C9, table: &tables::GREEK },
    GlyphRange { first: 0x2500, last: 0x257F, table: &tables::BOX },
    GlyphRange { first: 0x2580, last: 0x259F, table: &tables::BLOCK },
];

/// Maps a codepoint to its 8x8 bitmap.
///
/// Codepoints outside every covered range substitute the blank glyph, which
/// renders as an empty cell. That keeps column accounting intact for the
/// rest of the line.
pub fn lookup(ch: char) -> GlyphLookup {
    let cp = ch as u32;
    for range in RANGES {
        if cp >= range.first && cp <= range.last {
            return GlyphLookup::Found(&range.table[(cp - range.first) as usize]);
        }
    }
    warn!("no glyph for U+{cp:04X}, substituting blank");
    GlyphLookup::Fallback(&tables::BASIC[0])
}

/// A rendered glyph: a `side * side` square of coverage flags, row-major.
/// `true` marks a foreground pixel.
#[derive(Debug, Clone)]
pub struct Pixmap {
    pub side: u32,
    pub bits: Vec<bool>,
}

impl Pixmap {
    pub fn get(&self, x: u32, y: u32) -> bool {
        self.bits[(y * self.side + x) as usize]
    }
}

/// Rasterizes one codepoint at the metrics' scale.
///
/// Output pixel `(x, y)` samples source pixel `(x / mult, y / mult)`, so each
/// source pixel becomes a solid `mult x mult` square.
pub fn render_glyph(ch: char, metrics: &FontMetrics) -> Pixmap {
    let bitmap = lookup(ch).bitmap();
    let mult = metrics.multiplier;
    let side = GLYPH_SIZE * mult;
    let mut bits = vec![false; (side * side) as usize];

    for y in 0..side {
        let row = bitmap[(y / mult) as usize];
        for x in 0..side {
            if row & (1 << (x / mult)) != 0 {
                bits[(y * side + x) as usize] = true;
            }
        }
    }

    Pixmap { side, bits }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::FontMetrics;

    fn metrics_for_mult(mult: u32) -> FontMetrics {
        let xres = match mult {
            1 => 600,
            2 => 800,
            3 => 1440,
            _ => 1448,
        };
        let m = FontMetrics::from_resolution(xres, xres);
        assert_eq!(m.multiplier, mult);
        m
    }

    #[test_log::test]
    fn covered_codepoints_resolve_without_fallback() {
        for ch in ['A', ' ', '~', '\u{00E9}', '\u{03B1}', '\u{2502}', '\u{2588}'] {
            assert!(
                matches!(lookup(ch), GlyphLookup::Found(_)),
                "U+{:04X} should be covered",
                ch as u32
            );
        }
    }

    #[test_log::test]
    fn uncovered_codepoint_falls_back_blank() {
        let glyph = lookup('\u{4E2D}');
        assert!(matches!(glyph, GlyphLookup::Fallback(_)));
        assert_eq!(glyph.bitmap(), &[0u8; 8]);
    }

    #[test_log::test]
    fn scaling_preserves_source_pixels() {
        // Every output pixel must equal the source pixel it maps back to,
        // for every supported scale.
        let bitmap = lookup('A').bitmap();
        for mult in 1..=4 {
            let pm = render_glyph('A', &metrics_for_mult(mult));
            assert_eq!(pm.side, 8 * mult);
            for y in 0..pm.side {
                for x in 0..pm.side {
                    let src = bitmap[(y / mult) as usize] & (1 << (x / mult)) != 0;
                    assert_eq!(pm.get(x, y), src, "mult {mult} pixel ({x},{y})");
                }
            }
        }
    }

    #[test_log::test]
    fn lsb_is_leftmost_column() {
        // U+258F (left eighth block) is 0x01 on every row, so only column 0
        // may be set at scale 1.
        let pm = render_glyph('\u{258F}', &metrics_for_mult(1));
        for y in 0..8 {
            assert!(pm.get(0, y));
            for x in 1..8 {
                assert!(!pm.get(x, y));
            }
        }
    }

    #[test_log::test]
    fn full_block_is_solid_at_every_scale() {
        for mult in 1..=4 {
            let pm = render_glyph('\u{2588}', &metrics_for_mult(mult));
            assert!(pm.bits.iter().all(|&b| b));
        }
    }
}
