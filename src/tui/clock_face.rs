//! Clock face widget
//!
//! Draws the digit blocks, colons, border frame and date line. Positions
//! come from the clock geometry and are relative to the top-left of the
//! render area. Cells that fall outside the area are skipped.

use ratatui::prelude::*;
use ratatui::symbols::line;
use ratatui::widgets::Widget;

use crate::app::DisplayOptions;
use crate::geometry::Geometry;
use crate::glyph::Digit;
use crate::time::SampledTime;

use super::theme::{theme, Theme};

/// Column offset between the two digits of a field
const DIGIT_STEP: i32 = 7;
/// Column of the hour/minute colon
const COLON_COL: i32 = 15;
/// Column of the first minute digit
const MINUTE_COL: i32 = 19;
/// Column of the minute/second colon
const SECONDS_COLON_COL: i32 = 34;
/// Column of the first second digit
const SECONDS_COL: i32 = 38;
/// Rows (from the origin) holding the two colon dots
const COLON_ROWS: [i32; 2] = [1, 3];
/// Date line column without / with seconds
const DATE_COL: i32 = 12;
const DATE_COL_SECONDS: i32 = 21;

/// Widget rendering one sampled time
pub struct ClockFace<'a> {
    time: &'a SampledTime,
    geometry: Geometry,
    options: DisplayOptions,
    theme: &'a Theme,
}

impl<'a> ClockFace<'a> {
    pub fn new(time: &'a SampledTime, geometry: Geometry, options: DisplayOptions) -> Self {
        Self {
            time,
            geometry,
            options,
            theme: theme(),
        }
    }

    /// Use a different theme
    pub fn theme(mut self, theme: &'a Theme) -> Self {
        self.theme = theme;
        self
    }

    fn draw_digit(&self, canvas: &mut Canvas<'_>, digit: Digit, col: i32) {
        let lit = self.theme.lit_style();
        let unlit = self.theme.unlit_style();
        for (dr, dc, on) in digit.cells() {
            let style = if on { lit } else { unlit };
            canvas.put(
                self.geometry.row + dr as i32,
                self.geometry.col + col + dc as i32,
                " ",
                style,
            );
        }
    }

    fn draw_pair(&self, canvas: &mut Canvas<'_>, pair: [Digit; 2], col: i32) {
        self.draw_digit(canvas, pair[0], col);
        self.draw_digit(canvas, pair[1], col + DIGIT_STEP);
    }

    fn draw_colon(&self, canvas: &mut Canvas<'_>, col: i32) {
        for dr in COLON_ROWS {
            canvas.put_str(
                self.geometry.row + dr,
                self.geometry.col + col,
                "  ",
                self.theme.lit_style(),
            );
        }
    }

    fn draw_frame(&self, canvas: &mut Canvas<'_>) {
        let style = self.theme.border_style();
        let Geometry {
            row,
            col,
            height,
            width,
        } = self.geometry;
        let (top, bottom) = (row - 1, row + height);
        let (left, right) = (col - 1, col + width);

        for c in left..right {
            canvas.put(top, c, line::HORIZONTAL, style);
            canvas.put(bottom, c, line::HORIZONTAL, style);
        }
        for r in top..bottom {
            canvas.put(r, left, line::VERTICAL, style);
            canvas.put(r, right, line::VERTICAL, style);
        }

        canvas.put(top, left, line::TOP_LEFT, style);
        canvas.put(bottom, left, line::BOTTOM_LEFT, style);
        canvas.put(top, right, line::TOP_RIGHT, style);
        canvas.put(bottom, right, line::BOTTOM_RIGHT, style);
    }

    fn draw_date(&self, canvas: &mut Canvas<'_>) {
        let offset = if self.options.show_seconds {
            DATE_COL_SECONDS
        } else {
            DATE_COL
        };
        canvas.put_str(
            self.geometry.row + self.geometry.height + 1,
            self.geometry.col + offset,
            &self.time.date_line(),
            self.theme.date_style(),
        );
    }
}

impl Widget for ClockFace<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut canvas = Canvas { area, buf };

        self.draw_pair(&mut canvas, self.time.hour, 0);
        self.draw_colon(&mut canvas, COLON_COL);
        self.draw_pair(&mut canvas, self.time.minute, MINUTE_COL);

        if self.options.show_seconds {
            if let Some(second) = self.time.second {
                self.draw_colon(&mut canvas, SECONDS_COLON_COL);
                self.draw_pair(&mut canvas, second, SECONDS_COL);
            }
        }

        self.draw_frame(&mut canvas);
        self.draw_date(&mut canvas);
    }
}

/// Signed-coordinate view of a buffer that drops off-screen writes
struct Canvas<'b> {
    area: Rect,
    buf: &'b mut Buffer,
}

impl Canvas<'_> {
    fn put(&mut self, row: i32, col: i32, symbol: &str, style: Style) {
        let x = i32::from(self.area.x) + col;
        let y = i32::from(self.area.y) + row;
        let inside = x >= i32::from(self.area.left())
            && x < i32::from(self.area.right())
            && y >= i32::from(self.area.top())
            && y < i32::from(self.area.bottom());
        if inside {
            self.buf
                .get_mut(x as u16, y as u16)
                .set_symbol(symbol)
                .set_style(style);
        }
    }

    fn put_str(&mut self, row: i32, col: i32, text: &str, style: Style) {
        let mut tmp = [0u8; 4];
        for (i, ch) in text.chars().enumerate() {
            self.put(row, col + i as i32, ch.encode_utf8(&mut tmp), style);
        }
    }
}
