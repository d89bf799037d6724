// src/render/mod.rs

//! Text layout and painting.
//!
//! `plan_layout` turns a string plus a `PrintConfig` into concrete lines:
//! clamped coordinates, fixed-size codepoint chunks, centering and padding
//! already applied. `draw_line` paints one such line into the canvas and
//! reports the screen rectangle it touched. `Session::print` strings the two
//! together and hands the final rectangle to the refresh coordinator.

use anyhow::Result;
use log::{debug, warn};

use crate::color::resolve_pair;
use crate::config::PrintConfig;
use crate::font::render_glyph;
use crate::framebuffer::pixel::Canvas;
use crate::framebuffer::Session;
use crate::geometry::{FontMetrics, Rect};
use crate::mxcfb::WaveformMode;

/// One laid-out line: its starting column and its codepoints, padding
/// included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlannedLine {
    pub col: u32,
    pub chars: Vec<char>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LayoutPlan {
    pub start_row: u32,
    pub lines: Vec<PlannedLine>,
    /// True when the text needed more rows than the screen has.
    pub truncated: bool,
}

/// Computes line placement for a print.
///
/// Wrapping is strictly codepoint-count based: every line takes exactly
/// `available_cols` codepoints except the last. A block taller than the
/// screen is truncated; a block that would run past the last row is shifted
/// up instead, keeping its tail visible.
pub(crate) fn plan_layout(text: &str, config: &PrintConfig, metrics: &FontMetrics) -> LayoutPlan {
    let max_cols = metrics.max_cols as i32;
    let max_rows = metrics.max_rows as i32;

    // Negative coordinates count back from the far edge.
    let mut col = i32::from(config.col);
    let mut row = i32::from(config.row);
    if col < 0 {
        col = (max_cols + col).max(0);
    }
    if row < 0 {
        row = (max_rows + row).max(0);
    }
    col = col.min(max_cols - 1);
    row = row.min(max_rows - 1);

    let chars: Vec<char> = text.chars().collect();
    let charcount = chars.len();

    // When centered we reserve the first column as a margin, and the last
    // one too on perfect-fit panels, to keep text away from the bezel.
    let available_cols = if config.centered {
        let mut avail = max_cols - 1;
        if metrics.perfect_fit {
            avail -= 1;
        }
        avail
    } else {
        max_cols - col
    } as usize;

    let mut lines = charcount.div_ceil(available_cols).max(1);
    let mut truncated = false;
    if lines > max_rows as usize {
        warn!("can only print {max_rows} out of {lines} lines, truncating");
        lines = max_rows as usize;
        truncated = true;
    }
    if row + lines as i32 > max_rows {
        row = max_rows - lines as i32;
    }
    debug!("printing {charcount} chars as {lines} line(s) from ({col}, {row})");

    let mut planned = Vec::with_capacity(lines);
    let mut consumed = 0usize;
    for _ in 0..lines {
        let line_len = (charcount - consumed).min(available_cols);
        let mut line_chars = chars[consumed..consumed + line_len].to_vec();
        consumed += line_len;

        let mut line_col = col as u32;
        if config.centered {
            line_col = (metrics.max_cols / 2).saturating_sub(line_len as u32 / 2);
            // Without padding there is nothing covering the reserved margin
            // column, so step off it.
            if !config.padded && line_col == 0 {
                line_col = 1;
            }
        }
        if config.padded {
            if config.centered {
                // Padding spans the full width, split around the text with
                // at least one cell kept on the left.
                line_col = 0;
                let left_pad = ((metrics.max_cols as usize - line_len) / 2).max(1);
                let right_pad = metrics.max_cols as usize - line_len - left_pad;
                let mut padded = vec![' '; left_pad];
                padded.append(&mut line_chars);
                padded.resize(left_pad + line_len + right_pad, ' ');
                line_chars = padded;
            } else {
                line_chars.resize(available_cols, ' ');
            }
        }

        planned.push(PlannedLine {
            col: line_col,
            chars: line_chars,
        });
    }

    LayoutPlan {
        start_row: row as u32,
        lines: planned,
        truncated,
    }
}

/// Paints one line of codepoints and returns the rectangle covering the
/// whole print so far (every line from the first through this one).
#[allow(clippy::too_many_arguments)]
pub(crate) fn draw_line(
    canvas: &mut Canvas<'_>,
    metrics: &FontMetrics,
    line: &[char],
    row: u32,
    col: u32,
    fg: u8,
    bg: u8,
    centered: bool,
    multiline_offset: u32,
) -> Rect {
    let fw = metrics.cell_width;
    let fh = metrics.cell_height;
    let xres = canvas.geometry().xres;
    let charcount = line.len() as u32;

    let mut region = Rect {
        top: (row - multiline_offset) * fh,
        left: col * fw,
        // Continuation lines may start at a different column than the
        // first one, so from the second line on the region covers out to
        // the right edge.
        width: if multiline_offset > 0 {
            xres - col * fw
        } else {
            charcount * fw
        },
        height: (multiline_offset + 1) * fh,
    };

    // A completely full line on a panel where the columns don't consume the
    // whole width leaves a sliver of untouched pixels at the right edge.
    // Blank it to the background and fold it into the region, so the update
    // reaches the actual screen edge.
    if charcount == metrics.max_cols && !metrics.perfect_fit {
        let sliver = Rect {
            top: region.top + multiline_offset * fh,
            left: region.left + charcount * fw,
            width: xres - charcount * fw,
            height: fh,
        };
        canvas.fill_rect(sliver, bg);
        region.width += xres - charcount * fw;
        if region.width + region.left > xres {
            region.width = xres - region.left;
        }
    }

    // Centered continuation lines can land on wildly different columns, so
    // the region can't trust any single one of them.
    if multiline_offset > 0 && centered {
        region.left = 0;
        region.width = xres;
    }

    for (cn, &ch) in line.iter().enumerate() {
        let pixmap = render_glyph(ch, metrics);
        let cell_x = (col + cn as u32) * fw;
        let cell_y = row * fh;
        for y in 0..fh {
            for x in 0..fw {
                let gray = if pixmap.get(x, y) { fg } else { bg };
                canvas.set_pixel(cell_x + x, cell_y + y, gray);
            }
        }
    }

    region
}

impl Session {
    /// Prints a string and refreshes the covered region.
    ///
    /// Returns the rectangle that was painted and refreshed. A refresh
    /// failure is logged but does not fail the print: the pixels are
    /// already on the framebuffer by then.
    pub fn print(&mut self, text: &str, config: &PrintConfig) -> Result<Rect> {
        let metrics = self.metrics;
        let geo = self.geo;
        let (fg, bg) = resolve_pair(config.inverted);

        let plan = plan_layout(text, config, &metrics);

        let mut region = Rect::default();
        {
            let mut canvas = self.canvas()?;
            if config.cleared {
                canvas.clear(bg);
            }
            for (offset, line) in plan.lines.iter().enumerate() {
                let offset = offset as u32;
                region = draw_line(
                    &mut canvas,
                    &metrics,
                    &line.chars,
                    plan.start_row + offset,
                    line.col,
                    fg,
                    bg,
                    config.centered,
                    offset,
                );
            }
        }

        // A cleared screen means the whole screen changed, whatever the
        // text's own bounding box says.
        if config.cleared {
            region = Rect::new(0, 0, geo.xres, geo.yres);
        }

        if let Err(err) = self.request_refresh(region, WaveformMode::Auto, config.flashing) {
            warn!("failed to refresh after print: {err:#}");
        }

        Ok(region)
    }

    /// `format!`-style variant of [`print`](Session::print).
    ///
    /// The formatted text is capped to one page's worth of codepoints,
    /// which is all a single print can show anyway.
    pub fn print_fmt(&mut self, config: &PrintConfig, args: std::fmt::Arguments<'_>) -> Result<Rect> {
        let page = (self.metrics.max_cols * self.metrics.max_rows) as usize;
        let mut text = args.to_string();
        if let Some((idx, _)) = text.char_indices().nth(page) {
            text.truncate(idx);
        }
        self.print(&text, config)
    }
}

#[cfg(test)]
mod tests;
