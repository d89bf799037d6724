// src/color.rs

//! Grayscale palette handling.
//!
//! Text is painted in logical grayscale indices; the pixel adapter expands an
//! index into device-native channels through the ramp defined here. On eInk
//! panels the palette is a straight identity ramp, but keeping the lookup
//! explicit preserves the seam where a non-linear palette would plug in.

use once_cell::sync::Lazy;

/// Logical black, the darkest grayscale index.
pub const BLACK: u8 = 0x00;
/// Logical white, the lightest grayscale index.
pub const WHITE: u8 = 0xFF;

/// Device-native channel values for one grayscale index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Channels {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Palette byte used verbatim in 8bpp grayscale mode.
    pub v: u8,
}

static GRAY_RAMP: Lazy<[Channels; 256]> = Lazy::new(|| {
    core::array::from_fn(|i| {
        let v = i as u8;
        Channels { r: v, g: v, b: v, v }
    })
});

/// Expands a grayscale index into its channel values.
pub fn channels(gray: u8) -> Channels {
    GRAY_RAMP[gray as usize]
}

/// Resolves the foreground/background pair for a print.
///
/// Normal polarity is black text on a white page; `inverted` swaps them.
pub fn resolve_pair(inverted: bool) -> (u8, u8) {
    if inverted {
        (WHITE, BLACK)
    } else {
        (BLACK, WHITE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn ramp_is_identity() {
        for gray in [0u8, 1, 127, 254, 255] {
            let c = channels(gray);
            assert_eq!((c.r, c.g, c.b, c.v), (gray, gray, gray, gray));
        }
    }

    #[test_log::test]
    fn inversion_swaps_polarity() {
        assert_eq!(resolve_pair(false), (BLACK, WHITE));
        assert_eq!(resolve_pair(true), (WHITE, BLACK));
    }
}
