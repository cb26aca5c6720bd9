//! Digit glyph table
//!
//! Each decimal digit is drawn as a block of 5 rows by 6 columns. The table
//! stores one flag per cell, row by row: flag `i` sits at row `i / 6`,
//! column `i % 6` of the block. Lit cells get the highlight color, unlit
//! cells the background color.

use crate::error::{ClockError, Result};

/// Number of flags per glyph
pub const GLYPH_CELLS: usize = 30;
/// Width of a digit block in terminal columns
pub const GLYPH_WIDTH: usize = 6;
/// Height of a digit block in terminal rows
pub const GLYPH_HEIGHT: usize = GLYPH_CELLS / GLYPH_WIDTH;

const X: bool = true;
const O: bool = false;

#[rustfmt::skip]
static GLYPHS: [[bool; GLYPH_CELLS]; 10] = [
    // 0
    [X,X,X,X,X,X, X,X,O,O,X,X, X,X,O,O,X,X, X,X,O,O,X,X, X,X,X,X,X,X],
    // 1
    [O,O,O,O,X,X, O,O,O,O,X,X, O,O,O,O,X,X, O,O,O,O,X,X, O,O,O,O,X,X],
    // 2
    [X,X,X,X,X,X, O,O,O,O,X,X, X,X,X,X,X,X, X,X,O,O,O,O, X,X,X,X,X,X],
    // 3
    [X,X,X,X,X,X, O,O,O,O,X,X, X,X,X,X,X,X, O,O,O,O,X,X, X,X,X,X,X,X],
    // 4
    [X,X,O,O,X,X, X,X,O,O,X,X, X,X,X,X,X,X, O,O,O,O,X,X, O,O,O,O,X,X],
    // 5
    [X,X,X,X,X,X, X,X,O,O,O,O, X,X,X,X,X,X, O,O,O,O,X,X, X,X,X,X,X,X],
    // 6
    [X,X,X,X,X,X, X,X,O,O,O,O, X,X,X,X,X,X, X,X,O,O,X,X, X,X,X,X,X,X],
    // 7
    [X,X,X,X,X,X, O,O,O,O,X,X, O,O,O,O,X,X, O,O,O,O,X,X, O,O,O,O,X,X],
    // 8
    [X,X,X,X,X,X, X,X,O,O,X,X, X,X,X,X,X,X, X,X,O,O,X,X, X,X,X,X,X,X],
    // 9
    [X,X,X,X,X,X, X,X,O,O,X,X, X,X,X,X,X,X, O,O,O,O,X,X, X,X,X,X,X,X],
];

/// Look up whether cell `index` of `digit` is lit
pub fn lit(digit: u32, index: usize) -> Result<bool> {
    Digit::new(digit)?.lit(index)
}

/// A decimal digit, guaranteed to be in 0..=9
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digit(u8);

impl Digit {
    /// Validate a digit value
    pub fn new(value: u32) -> Result<Self> {
        if value > 9 {
            return Err(ClockError::DigitOutOfRange(value));
        }
        Ok(Self(value as u8))
    }

    /// Split a value below 100 into its tens and units digits
    pub fn pair(value: u32) -> Result<[Digit; 2]> {
        if value > 99 {
            return Err(ClockError::FieldTooWide(value));
        }
        Ok([Self((value / 10) as u8), Self((value % 10) as u8)])
    }

    /// Numeric value of this digit
    pub fn value(self) -> u8 {
        self.0
    }

    /// The full 30-flag glyph
    pub fn glyph(self) -> &'static [bool; GLYPH_CELLS] {
        &GLYPHS[self.0 as usize]
    }

    /// Whether a single cell of the glyph is lit
    pub fn lit(self, index: usize) -> Result<bool> {
        self.glyph()
            .get(index)
            .copied()
            .ok_or(ClockError::CellOutOfRange(index))
    }

    /// Iterate over `(row, col, lit)` for every cell of the glyph
    pub fn cells(self) -> impl Iterator<Item = (usize, usize, bool)> {
        self.glyph()
            .iter()
            .enumerate()
            .map(|(i, &on)| (i / GLYPH_WIDTH, i % GLYPH_WIDTH, on))
    }
}
