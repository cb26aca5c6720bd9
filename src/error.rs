//! Error types for the clock library

use thiserror::Error;

/// Errors raised by the clock core
#[derive(Debug, Error)]
pub enum ClockError {
    /// A value outside 0..=9 was used as a digit
    #[error("digit out of range: {0} (expected 0-9)")]
    DigitOutOfRange(u32),

    /// A glyph cell index outside the digit block was requested
    #[error("glyph cell index out of range: {0} (expected 0-29)")]
    CellOutOfRange(usize),

    /// A two-digit field was given a value that does not fit
    #[error("value {0} does not fit in two digits")]
    FieldTooWide(u32),
}

pub type Result<T> = std::result::Result<T, ClockError>;
