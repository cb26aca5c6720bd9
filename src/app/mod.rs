//! Application state and main event loop
//!
//! This module contains the clock state and the loop that samples the time,
//! draws the clock face and applies keyboard and signal events.

// Submodules
mod event_loop;
mod signals;
mod state;

pub use signals::SignalFlags;
pub use state::{ClockState, DisplayOptions};

use std::time::Duration;

use anyhow::Result;

use crate::config::Config;
use crate::time::TimeSource;
use crate::tui::Surface;

/// How long each tick waits for input before redrawing
pub const INPUT_WAIT: Duration = Duration::from_millis(100);

/// Main application struct
pub struct App<S: Surface, C: TimeSource> {
    /// Options, geometry and run flag
    pub(crate) state: ClockState,
    /// Terminal to draw on
    pub(crate) surface: S,
    /// Wall-clock source
    clock: C,
    /// Pending signal events
    signals: SignalFlags,
    /// Center once the terminal size is known
    center_on_start: bool,
}

impl<S: Surface, C: TimeSource> App<S, C> {
    /// Create a new application instance
    pub fn new(config: &Config, surface: S, clock: C, signals: SignalFlags) -> Self {
        Self {
            state: ClockState::from_config(config),
            surface,
            clock,
            signals,
            center_on_start: config.center,
        }
    }

    /// Current clock state
    pub fn state(&self) -> &ClockState {
        &self.state
    }

    /// Run the clock until quit or a termination signal
    pub fn run(&mut self) -> Result<()> {
        self.surface.enter()?;

        tracing::info!("tty-clock started. Press 'q' to quit.");

        let result = self.start().and_then(|()| self.event_loop());

        // Restore the terminal even if the loop failed
        let exit = self.surface.exit();

        result.and(exit)
    }

    fn start(&mut self) -> Result<()> {
        if self.center_on_start {
            let term = self.surface.size()?;
            self.state.toggle_center(term);
        }
        Ok(())
    }
}
