//! Main event loop
//!
//! Each tick drains pending signals, draws the current time, then waits a
//! bounded time for one terminal event.

use anyhow::{Context, Result};

use super::{App, INPUT_WAIT};
use crate::geometry::TermSize;
use crate::input::{action_for_key, TermEvent};
use crate::time::{self, TimeSource};
use crate::tui::{ClockFace, Surface};

impl<S: Surface, C: TimeSource> App<S, C> {
    /// Main event loop
    pub(super) fn event_loop(&mut self) -> Result<()> {
        loop {
            self.drain_signals();
            if !self.state.running {
                break;
            }

            self.render()?;

            if let Some(event) = self.surface.next_event(INPUT_WAIT)? {
                self.handle_event(event)?;
            }

            if !self.state.running {
                break;
            }
        }

        tracing::info!("Clock loop finished");
        Ok(())
    }

    /// Apply signal events raised since the last tick
    fn drain_signals(&mut self) {
        if self.signals.take_terminate() && self.state.running {
            tracing::info!("Termination requested");
            self.state.quit();
        }
    }

    /// Sample the time and draw one frame
    fn render(&mut self) -> Result<()> {
        let now = self.clock.now();
        let sampled = time::sample(&now, &self.state.options)
            .with_context(|| format!("Failed to decompose time {}", now))?;
        let face = ClockFace::new(&sampled, self.state.geometry, self.state.options);
        self.surface.draw_clock(face)
    }

    fn handle_event(&mut self, event: TermEvent) -> Result<()> {
        match event {
            TermEvent::Key(key) => {
                if !self.state.options.input_enabled {
                    tracing::trace!(?key, "Keyboard disabled, ignoring key");
                    return Ok(());
                }
                if let Some(action) = action_for_key(key) {
                    tracing::debug!(?action, "Key action");
                    let term = self.surface.size()?;
                    self.state.apply(action, term);
                }
            }
            TermEvent::Resize(width, height) => {
                self.handle_resize(TermSize::new(width, height))?;
            }
            TermEvent::Interrupt => {
                // Raw mode swallows SIGINT; treat Ctrl+C the same way
                self.signals.request_terminate();
            }
        }
        Ok(())
    }

    fn handle_resize(&mut self, term: TermSize) -> Result<()> {
        tracing::debug!(width = term.width, height = term.height, "Terminal resized");
        if self.state.on_resize(term) {
            self.surface
                .reset()
                .context("Failed to reinitialize terminal after resize")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::time::Duration;

    use chrono::{NaiveDate, NaiveDateTime};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;
    use ratatui::widgets::Widget;

    use super::*;
    use crate::app::SignalFlags;
    use crate::config::Config;
    use crate::time::FixedClock;

    /// Surface that replays scripted events and keeps every drawn frame
    struct FakeSurface {
        size: TermSize,
        events: VecDeque<TermEvent>,
        frames: Vec<Buffer>,
        entered: usize,
        exited: usize,
        resets: usize,
        /// Raise a termination signal when this many events have been polled
        terminate_after: Option<(usize, SignalFlags)>,
        polls: usize,
    }

    impl FakeSurface {
        fn new(events: Vec<TermEvent>) -> Self {
            Self {
                size: TermSize::new(80, 24),
                events: events.into(),
                frames: Vec::new(),
                entered: 0,
                exited: 0,
                resets: 0,
                terminate_after: None,
                polls: 0,
            }
        }

        fn last_frame(&self) -> &Buffer {
            self.frames.last().expect("no frame drawn")
        }
    }

    impl Surface for FakeSurface {
        fn enter(&mut self) -> Result<()> {
            self.entered += 1;
            Ok(())
        }

        fn exit(&mut self) -> Result<()> {
            self.exited += 1;
            Ok(())
        }

        fn size(&self) -> Result<TermSize> {
            Ok(self.size)
        }

        fn draw_clock(&mut self, face: ClockFace<'_>) -> Result<()> {
            let area = Rect::new(0, 0, self.size.width, self.size.height);
            let mut buf = Buffer::empty(area);
            face.render(area, &mut buf);
            self.frames.push(buf);
            Ok(())
        }

        fn next_event(&mut self, _timeout: Duration) -> Result<Option<TermEvent>> {
            self.polls += 1;
            if let Some((after, flags)) = &self.terminate_after {
                if self.polls == *after {
                    flags.request_terminate();
                    return Ok(None);
                }
            }
            // An exhausted script behaves like Ctrl+C so every test terminates
            Ok(Some(self.events.pop_front().unwrap_or(TermEvent::Interrupt)))
        }

        fn reset(&mut self) -> Result<()> {
            self.resets += 1;
            Ok(())
        }
    }

    fn jan_2_2024(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    fn key(c: char) -> TermEvent {
        TermEvent::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    fn app_with(
        config: Config,
        surface: FakeSurface,
    ) -> (App<FakeSurface, FixedClock>, SignalFlags) {
        let signals = SignalFlags::new();
        let app = App::new(
            &config,
            surface,
            FixedClock(jan_2_2024(9, 5, 3)),
            signals.clone(),
        );
        (app, signals)
    }

    fn row_text(buf: &Buffer, row: u16, from: u16, len: u16) -> String {
        (from..from + len)
            .map(|x| buf.get(x, row).symbol().to_string())
            .collect()
    }

    #[test]
    fn test_default_run_draws_date_line() {
        let (mut app, _) = app_with(Config::default(), FakeSurface::new(vec![key('q')]));
        app.run().unwrap();

        let surface = &app.surface;
        assert_eq!(surface.frames.len(), 1);
        assert_eq!(row_text(surface.last_frame(), 7, 13, 11), "02/01/2024 ");
        // hour digits "0" and "9": top-left cell of a 9 is lit, its hole is not
        assert_eq!(surface.last_frame().get(8, 1).bg, ratatui::style::Color::Green);
        assert_ne!(surface.last_frame().get(10, 2).bg, ratatui::style::Color::Green);
    }

    #[test]
    fn test_enter_and_exit_once() {
        let (mut app, _) = app_with(Config::default(), FakeSurface::new(vec![key('q')]));
        app.run().unwrap();
        assert_eq!(app.surface.entered, 1);
        assert_eq!(app.surface.exited, 1);
    }

    #[test]
    fn test_seconds_toggle_changes_width() {
        let events = vec![key('s')];
        let (mut app, _) = app_with(Config::default(), FakeSurface::new(events));
        app.run().unwrap();
        assert_eq!(app.state().geometry.width, 52);
        assert!(app.state().options.show_seconds);

        let events = vec![key('s'), key('S')];
        let (mut app, _) = app_with(Config::default(), FakeSurface::new(events));
        app.run().unwrap();
        assert_eq!(app.state().geometry.width, 33);
    }

    #[test]
    fn test_terminate_signal_stops_rendering() {
        let mut surface = FakeSurface::new(vec![key('x'); 100]);
        let (mut app, signals) = {
            let signals = SignalFlags::new();
            surface.terminate_after = Some((3, signals.clone()));
            let app = App::new(
                &Config::default(),
                surface,
                FixedClock(jan_2_2024(9, 5, 3)),
                signals.clone(),
            );
            (app, signals)
        };

        app.run().unwrap();

        // Three ticks rendered, the signal raised during the third wait
        assert_eq!(app.surface.frames.len(), 3);
        assert!(!app.state().running);
        assert!(!signals.take_terminate());
        assert_eq!(app.surface.exited, 1);
    }

    #[test]
    fn test_pending_signal_before_first_tick() {
        let (mut app, signals) = app_with(Config::default(), FakeSurface::new(vec![]));
        signals.request_terminate();
        app.run().unwrap();
        assert!(app.surface.frames.is_empty());
    }

    #[test]
    fn test_ctrl_c_stops_before_next_render() {
        let (mut app, _) = app_with(
            Config::default(),
            FakeSurface::new(vec![key('l'), TermEvent::Interrupt, key('l')]),
        );
        app.run().unwrap();
        assert_eq!(app.surface.frames.len(), 2);
        assert_eq!(app.state().geometry.col, 2);
    }

    #[test]
    fn test_blocked_keyboard_ignores_keys() {
        let config = Config {
            block_keys: true,
            ..Default::default()
        };
        let events = vec![key('l'), key('s'), key('q'), key('c')];
        let (mut app, _) = app_with(config, FakeSurface::new(events));
        app.run().unwrap();

        // 'q' had no effect either; the script ran out and Ctrl+C ended the run
        assert_eq!(app.surface.frames.len(), 5);
        assert_eq!(app.state().geometry.col, 1);
        assert!(!app.state().options.show_seconds);
        assert!(!app.state().options.centered);
    }

    #[test]
    fn test_center_on_start() {
        let config = Config {
            center: true,
            ..Default::default()
        };
        let (mut app, _) = app_with(config, FakeSurface::new(vec![key('q')]));
        app.run().unwrap();
        assert!(app.state().options.centered);
        assert_eq!((app.state().geometry.row, app.state().geometry.col), (10, 24));
    }

    #[test]
    fn test_resize_recenters_and_resets() {
        let config = Config {
            center: true,
            ..Default::default()
        };
        let events = vec![TermEvent::Resize(120, 40), key('q')];
        let (mut app, _) = app_with(config, FakeSurface::new(events));
        app.run().unwrap();
        assert_eq!(app.surface.resets, 1);
        assert_eq!((app.state().geometry.row, app.state().geometry.col), (18, 44));
    }

    #[test]
    fn test_resize_uncentered_is_ignored() {
        let events = vec![TermEvent::Resize(20, 5), key('q')];
        let (mut app, _) = app_with(Config::default(), FakeSurface::new(events));
        app.run().unwrap();
        assert_eq!(app.surface.resets, 0);
        assert_eq!((app.state().geometry.row, app.state().geometry.col), (1, 1));
    }

    #[test]
    fn test_moves_are_clamped_through_loop() {
        let events = vec![key('h'); 5];
        let (mut app, _) = app_with(Config::default(), FakeSurface::new(events));
        app.run().unwrap();
        assert_eq!(app.state().geometry.col, 1);
    }
}
