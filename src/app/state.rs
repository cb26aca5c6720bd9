//! Clock state management
//!
//! Contains the display options, frame geometry and run flag, plus the
//! operations that mutate them in response to keys and terminal resizes.

use crate::config::Config;
use crate::geometry::{Direction, Geometry, TermSize};
use crate::input::Action;

/// User-togglable display options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Draw the seconds block
    pub show_seconds: bool,
    /// Use the twelve-hour format with an AM/PM label
    pub twelve_hour: bool,
    /// Honour keyboard commands (the `-b` flag turns this off)
    pub input_enabled: bool,
    /// Keep the clock in the middle of the terminal
    pub centered: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_seconds: false,
            twelve_hour: false,
            input_enabled: true,
            centered: false,
        }
    }
}

/// All mutable state of a running clock
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockState {
    pub options: DisplayOptions,
    pub geometry: Geometry,
    /// Cleared once, by quit or a termination signal
    pub running: bool,
}

impl Default for ClockState {
    fn default() -> Self {
        Self {
            options: DisplayOptions::default(),
            geometry: Geometry::default(),
            running: true,
        }
    }
}

impl ClockState {
    /// Build the initial state from command line configuration
    ///
    /// Centering is applied later, once the terminal size is known.
    pub fn from_config(config: &Config) -> Self {
        let mut state = Self::default();
        state.options.twelve_hour = config.twelve_hour;
        state.options.input_enabled = !config.block_keys;
        if config.show_seconds {
            state.options.show_seconds = true;
            state.geometry.set_seconds_width(true);
        }
        if let Some(row) = config.start_row {
            state.geometry.row = row;
        }
        if let Some(col) = config.start_col {
            state.geometry.col = col;
        }
        state
    }

    /// Apply a user action against the current terminal size
    pub fn apply(&mut self, action: Action, term: TermSize) {
        match action {
            Action::Move(direction) => self.move_clock(direction, term),
            Action::ToggleSeconds => self.toggle_seconds(term),
            Action::ToggleTwelveHour => self.toggle_twelve_hour(),
            Action::ToggleCenter => self.toggle_center(term),
            Action::Quit => self.quit(),
        }
    }

    /// Show or hide seconds, keeping the box centered if it was
    pub fn toggle_seconds(&mut self, term: TermSize) {
        self.options.show_seconds = !self.options.show_seconds;
        self.geometry.set_seconds_width(self.options.show_seconds);
        if self.options.centered {
            self.options.centered = false;
            self.toggle_center(term);
        }
        tracing::debug!(
            show_seconds = self.options.show_seconds,
            width = self.geometry.width,
            "Toggled seconds"
        );
    }

    pub fn toggle_twelve_hour(&mut self) {
        self.options.twelve_hour = !self.options.twelve_hour;
        tracing::debug!(twelve_hour = self.options.twelve_hour, "Toggled 12h format");
    }

    /// Center the box, or leave centered mode
    ///
    /// Leaving centered mode keeps the origin where centering put it.
    pub fn toggle_center(&mut self, term: TermSize) {
        if self.options.centered {
            self.options.centered = false;
        } else {
            self.geometry.center_in(term);
            self.options.centered = true;
        }
        tracing::debug!(
            centered = self.options.centered,
            row = self.geometry.row,
            col = self.geometry.col,
            "Toggled centering"
        );
    }

    /// Move the box one cell; ignored while centered
    pub fn move_clock(&mut self, direction: Direction, term: TermSize) {
        if self.options.centered {
            return;
        }
        if !self.geometry.step(direction, term) {
            tracing::trace!(?direction, "Move blocked at terminal edge");
        }
    }

    /// React to a new terminal size
    ///
    /// Returns true when the screen must be reinitialized (centered mode).
    /// An uncentered box keeps its position even if it is now off-screen.
    pub fn on_resize(&mut self, term: TermSize) -> bool {
        if !self.options.centered {
            return false;
        }
        self.geometry.center_in(term);
        tracing::debug!(
            width = term.width,
            height = term.height,
            row = self.geometry.row,
            col = self.geometry.col,
            "Recentered after resize"
        );
        true
    }

    pub fn quit(&mut self) {
        self.running = false;
    }
}
