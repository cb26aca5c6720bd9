//! Terminal UI module
//!
//! This module handles terminal setup and teardown and draws the clock face
//! using Ratatui.

pub mod clock_face;
pub mod theme;

pub use clock_face::ClockFace;
pub use theme::{theme, Theme};

use std::io::{self, stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;

use crate::geometry::TermSize;
use crate::input::TermEvent;

/// The drawing and input primitives the clock loop needs from a terminal
pub trait Surface {
    /// Take over the terminal
    fn enter(&mut self) -> Result<()>;

    /// Give the terminal back
    fn exit(&mut self) -> Result<()>;

    /// Current terminal dimensions
    fn size(&self) -> Result<TermSize>;

    /// Draw one frame of the clock
    fn draw_clock(&mut self, face: ClockFace<'_>) -> Result<()>;

    /// Wait up to `timeout` for the next relevant terminal event
    fn next_event(&mut self, timeout: Duration) -> Result<Option<TermEvent>>;

    /// Reinitialize the screen after a size change
    fn reset(&mut self) -> Result<()>;
}

/// Terminal UI wrapper
///
/// Handles terminal setup, teardown, and provides the rendering surface.
pub struct Tui {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    /// Whether raw mode and the alternate screen are currently active
    active: bool,
}

/// Error handler for terminal cleanup operations
/// Used during both normal exit and panic/drop scenarios
enum ErrorHandler {
    /// Log errors via tracing (normal exit)
    Tracing,
    /// Print errors to stderr (panic/drop, tracing may be unavailable)
    Stderr,
}

impl ErrorHandler {
    fn handle(&self, context: &str, error: impl std::fmt::Display) {
        match self {
            ErrorHandler::Tracing => tracing::warn!("{}: {}", context, error),
            ErrorHandler::Stderr => eprintln!("TUI teardown: {}: {}", context, error),
        }
    }
}

impl Tui {
    /// Create a new TUI instance
    pub fn new() -> Result<Self> {
        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend).context("Failed to initialize terminal")?;
        Ok(Self {
            terminal,
            active: false,
        })
    }

    /// Restore the terminal, reporting failures through `handler`
    fn restore(&mut self, handler: &ErrorHandler) {
        if let Err(e) = self.terminal.show_cursor() {
            handler.handle("failed to show cursor", e);
        }
        if let Err(e) = stdout().execute(LeaveAlternateScreen) {
            handler.handle("failed to leave alternate screen", e);
        }
        if let Err(e) = disable_raw_mode() {
            handler.handle("failed to disable raw mode", e);
        }
        self.active = false;
    }
}

impl Surface for Tui {
    /// Enter TUI mode (raw mode + alternate screen)
    fn enter(&mut self) -> Result<()> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        self.active = true;
        stdout()
            .execute(EnterAlternateScreen)
            .context("Failed to enter alternate screen")?;
        self.terminal.hide_cursor()?;
        self.terminal.clear()?;
        tracing::debug!("Entered TUI mode");
        Ok(())
    }

    /// Exit TUI mode (restore terminal)
    fn exit(&mut self) -> Result<()> {
        if self.active {
            self.restore(&ErrorHandler::Tracing);
            tracing::debug!("TUI exit sequence completed");
        }
        Ok(())
    }

    fn size(&self) -> Result<TermSize> {
        let area = self.terminal.size()?;
        Ok(TermSize::new(area.width, area.height))
    }

    fn draw_clock(&mut self, face: ClockFace<'_>) -> Result<()> {
        self.terminal.draw(|frame| {
            let area = frame.size();
            frame.render_widget(face, area);
        })?;
        Ok(())
    }

    fn next_event(&mut self, timeout: Duration) -> Result<Option<TermEvent>> {
        if event::poll(timeout)? {
            Ok(TermEvent::from_crossterm(event::read()?))
        } else {
            Ok(None)
        }
    }

    fn reset(&mut self) -> Result<()> {
        self.terminal
            .autoresize()
            .context("Failed to resize terminal buffers")?;
        self.terminal.clear().context("Failed to clear terminal")?;
        self.terminal.hide_cursor()?;
        Ok(())
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        // Only reached with an active terminal if exit() was skipped, e.g. on panic.
        // Tracing may not be available, so errors go to stderr.
        if self.active {
            self.restore(&ErrorHandler::Stderr);
        }
    }
}
