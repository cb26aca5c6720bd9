//! tty-clock - a large segmented-digit clock for the terminal
//!
//! This library provides the clock core: glyph table, time sampling, frame
//! geometry, keyboard mapping, rendering and the main loop.

pub mod app;
pub mod config;
pub mod error;
pub mod geometry;
pub mod glyph;
pub mod input;
pub mod logging;
pub mod time;
pub mod tui;
