//! Clock frame geometry
//!
//! Pure position/size arithmetic for the clock box. Nothing here touches the
//! terminal; callers pass the current terminal size in.

/// Width added to the frame when the seconds block is shown
pub const SECONDS_WIDTH_DELTA: i32 = 19;
/// Default frame width (hours and minutes only)
pub const DEFAULT_WIDTH: i32 = 33;
/// Frame height, equal to the digit block height
pub const DEFAULT_HEIGHT: i32 = 5;

/// Terminal dimensions in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermSize {
    pub width: u16,
    pub height: u16,
}

impl TermSize {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Direction for a one-cell move of the clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Position and size of the digit block
///
/// `row`/`col` is the top-left cell of the first digit; the border is drawn
/// one cell outside this box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub row: i32,
    pub col: i32,
    pub height: i32,
    pub width: i32,
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            row: 1,
            col: 1,
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
        }
    }
}

impl Geometry {
    /// Move the origin so the box sits in the middle of the terminal
    pub fn center_in(&mut self, term: TermSize) {
        self.row = i32::from(term.height) / 2 - self.height / 2;
        self.col = i32::from(term.width) / 2 - self.width / 2;
    }

    /// Widen or narrow the frame for the seconds block
    pub fn set_seconds_width(&mut self, show_seconds: bool) {
        if show_seconds {
            self.width += SECONDS_WIDTH_DELTA;
        } else {
            self.width -= SECONDS_WIDTH_DELTA;
        }
    }

    /// Shift the origin by one cell, keeping the bordered frame on screen
    ///
    /// Returns whether the origin changed.
    pub fn step(&mut self, direction: Direction, term: TermSize) -> bool {
        let max_h = i32::from(term.height);
        let max_w = i32::from(term.width);
        match direction {
            Direction::Up if self.row > 1 => self.row -= 1,
            Direction::Down if self.row + self.height + 2 < max_h => self.row += 1,
            Direction::Left if self.col > 1 => self.col -= 1,
            Direction::Right if self.col + self.width + 1 < max_w => self.col += 1,
            _ => return false,
        }
        true
    }
}
