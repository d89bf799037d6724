// src/render/tests.rs

use super::*;
use crate::config::{DeviceFamily, PrintConfig};
use crate::geometry::DeviceGeometry;

fn metrics(xres: u32, yres: u32) -> FontMetrics {
    FontMetrics::from_resolution(xres, yres)
}

fn gray8_session(xres: u32, yres: u32) -> Session {
    let geo = DeviceGeometry {
        xres,
        yres,
        bits_per_pixel: 8,
        line_length: xres,
        mem_len: xres * yres,
        rotate: 0,
    };
    Session::for_tests(geo, DeviceFamily::Kobo)
}

fn pixel(session: &Session, x: u32, y: u32) -> u8 {
    session.buffer()[(y * session.geometry().line_length + x) as usize]
}

// 320x240 at multiplier 1 gives a 40x30 character grid.
const WIDE: (u32, u32) = (320, 240);

#[test_log::test]
fn negative_coordinates_resolve_from_far_edge() {
    let m = metrics(WIDE.0, WIDE.1);
    let config = PrintConfig {
        col: -1,
        row: -2,
        ..PrintConfig::default()
    };
    let plan = plan_layout("x", &config, &m);
    assert_eq!(plan.lines[0].col, 39);
    assert_eq!(plan.start_row, 28);
}

#[test_log::test]
fn out_of_range_coordinates_clamp_to_last_cell() {
    let m = metrics(WIDE.0, WIDE.1);
    let config = PrintConfig {
        col: 120,
        row: 99,
        ..PrintConfig::default()
    };
    let plan = plan_layout("x", &config, &m);
    assert_eq!(plan.lines[0].col, 39);
    assert_eq!(plan.start_row, 29);
}

#[test_log::test]
fn wrapping_splits_at_exact_column_boundaries() {
    let m = metrics(WIDE.0, WIDE.1);
    let config = PrintConfig::default();

    let exactly_full = "a".repeat(40);
    let plan = plan_layout(&exactly_full, &config, &m);
    assert_eq!(plan.lines.len(), 1);
    assert_eq!(plan.lines[0].chars.len(), 40);

    let one_over = "a".repeat(41);
    let plan = plan_layout(&one_over, &config, &m);
    assert_eq!(plan.lines.len(), 2);
    assert_eq!(plan.lines[0].chars.len(), 40);
    assert_eq!(plan.lines[1].chars.len(), 1);
}

#[test_log::test]
fn starting_column_shrinks_the_wrap_width() {
    let m = metrics(WIDE.0, WIDE.1);
    let config = PrintConfig {
        col: 30,
        ..PrintConfig::default()
    };
    let plan = plan_layout(&"a".repeat(11), &config, &m);
    assert_eq!(plan.lines.len(), 2);
    assert_eq!(plan.lines[0].chars.len(), 10);
    assert_eq!(plan.lines[1].chars.len(), 1);
}

#[test_log::test]
fn too_tall_blocks_truncate_to_screen_height() {
    let m = metrics(WIDE.0, WIDE.1);
    let config = PrintConfig::default();
    let plan = plan_layout(&"a".repeat(40 * 30 + 1), &config, &m);
    assert!(plan.truncated);
    assert_eq!(plan.lines.len(), 30);
    assert_eq!(plan.start_row, 0);
}

#[test_log::test]
fn overflowing_blocks_shift_up_from_the_bottom() {
    let m = metrics(WIDE.0, WIDE.1);
    let config = PrintConfig {
        row: 29,
        ..PrintConfig::default()
    };
    let plan = plan_layout(&"a".repeat(81), &config, &m);
    assert_eq!(plan.lines.len(), 3);
    assert_eq!(plan.start_row, 27);
    assert!(!plan.truncated);
}

#[test_log::test]
fn centered_padding_splits_left_and_right() {
    let m = metrics(WIDE.0, WIDE.1);
    let config = PrintConfig {
        centered: true,
        padded: true,
        ..PrintConfig::default()
    };
    let plan = plan_layout(&"t".repeat(10), &config, &m);
    let line = &plan.lines[0];
    assert_eq!(line.col, 0);
    assert_eq!(line.chars.len(), 40);
    assert!(line.chars[..15].iter().all(|&c| c == ' '));
    assert!(line.chars[15..25].iter().all(|&c| c == 't'));
    assert!(line.chars[25..].iter().all(|&c| c == ' '));
}

#[test_log::test]
fn centered_padding_keeps_a_left_margin() {
    // 76px wide: 9 columns, no perfect fit, so centering leaves 8 usable.
    let m = metrics(76, 64);
    assert_eq!(m.max_cols, 9);
    assert!(!m.perfect_fit);
    let config = PrintConfig {
        centered: true,
        padded: true,
        ..PrintConfig::default()
    };
    let plan = plan_layout(&"t".repeat(8), &config, &m);
    let line = &plan.lines[0];
    // (9 - 8) / 2 would be 0, but one left cell is always enforced.
    assert_eq!(line.chars[0], ' ');
    assert_eq!(line.chars.len(), 9);
    assert!(line.chars[1..].iter().all(|&c| c == 't'));
}

#[test_log::test]
fn centering_without_padding_avoids_the_margin_column() {
    let m = metrics(76, 64);
    let config = PrintConfig {
        centered: true,
        ..PrintConfig::default()
    };
    let plan = plan_layout(&"t".repeat(8), &config, &m);
    // 9/2 - 8/2 lands on column 0, the reserved margin; nudged off it.
    assert_eq!(plan.lines[0].col, 1);
}

#[test_log::test]
fn padded_only_fills_to_the_right() {
    let m = metrics(WIDE.0, WIDE.1);
    let config = PrintConfig {
        col: 5,
        padded: true,
        ..PrintConfig::default()
    };
    let plan = plan_layout("hi", &config, &m);
    let line = &plan.lines[0];
    assert_eq!(line.col, 5);
    // 35 available columns from column 5, all consumed.
    assert_eq!(line.chars.len(), 35);
    assert_eq!(&line.chars[..2], &['h', 'i']);
    assert!(line.chars[2..].iter().all(|&c| c == ' '));
}

#[test_log::test]
fn print_paints_foreground_and_background() {
    // 64x64 at 8bpp: an 8x8 grid of 8px cells, perfect fit.
    let mut session = gray8_session(64, 64);
    let rect = session.print("A", &PrintConfig::default()).unwrap();
    assert_eq!(rect, Rect::new(0, 0, 8, 8));

    // Top row of 'A' is 0x0C: columns 2 and 3 set.
    assert_eq!(pixel(&session, 2, 0), 0x00);
    assert_eq!(pixel(&session, 3, 0), 0x00);
    assert_eq!(pixel(&session, 0, 0), 0xFF);
    // Outside the cell, nothing was touched.
    assert_eq!(pixel(&session, 9, 0), 0x00);
}

#[test_log::test]
fn inverted_print_swaps_polarity() {
    let mut session = gray8_session(64, 64);
    let config = PrintConfig {
        inverted: true,
        ..PrintConfig::default()
    };
    session.print("A", &config).unwrap();
    assert_eq!(pixel(&session, 2, 0), 0xFF);
    assert_eq!(pixel(&session, 0, 0), 0x00);
}

#[test_log::test]
fn cleared_print_reports_the_full_screen() {
    let mut session = gray8_session(64, 64);
    let config = PrintConfig {
        cleared: true,
        ..PrintConfig::default()
    };
    let rect = session.print("A", &config).unwrap();
    assert_eq!(rect, Rect::new(0, 0, 64, 64));
    // The far corner was blanked to the background.
    assert_eq!(pixel(&session, 63, 63), 0xFF);
}

#[test_log::test]
fn multiline_print_covers_all_its_rows() {
    let mut session = gray8_session(64, 64);
    let rect = session.print(&"A".repeat(9), &PrintConfig::default()).unwrap();
    // Two lines: the region spans the full width and both rows.
    assert_eq!(rect, Rect::new(0, 0, 64, 16));
    // First glyph of the second line sits at cell (0, 1).
    assert_eq!(pixel(&session, 2, 8), 0x00);
}

#[test_log::test]
fn full_line_on_imperfect_fit_blanks_the_edge_sliver() {
    // 68px wide: 8 columns worth 64px, with a 4px sliver at the right.
    let geo = DeviceGeometry {
        xres: 68,
        yres: 64,
        bits_per_pixel: 8,
        line_length: 68,
        mem_len: 68 * 64,
        rotate: 0,
    };
    let mut session = Session::for_tests(geo, DeviceFamily::Kobo);
    assert!(!session.metrics().perfect_fit);

    let rect = session.print(&"X".repeat(8), &PrintConfig::default()).unwrap();
    assert_eq!(rect, Rect::new(0, 0, 68, 8));
    for x in 64..68 {
        assert_eq!(pixel(&session, x, 3), 0xFF, "sliver column {x}");
    }
}

#[test_log::test]
fn print_fmt_formats_and_caps_to_one_page() {
    let mut session = gray8_session(64, 64);
    let config = PrintConfig::default();
    // 100 chars on a 64-cell page: capped, so exactly 8 full lines.
    let rect = session
        .print_fmt(&config, format_args!("{:>100}", "end"))
        .unwrap();
    assert_eq!(rect.height, 64);
}
