#![forbid(unsafe_code)]

//! Terminal session lifecycle guard.
//!
//! [`TerminalSession`] owns raw mode and every optional terminal mode the app
//! turns on. Dropping it restores the terminal, in reverse order of enabling.
//!
//! # Lifecycle Guarantees
//!
//! 1. Each mode (raw, alt-screen, mouse, focus events) has a flag that is set
//!    only once the mode was actually enabled.
//! 2. Drop disables only what was enabled.
//! 3. A panic hook runs the same cleanup, so a panic with `panic = "abort"`
//!    still leaves a usable shell.
//!
//! # Cleanup Order
//!
//! 1. Disable focus events (if enabled)
//! 2. Disable mouse capture (if enabled)
//! 3. Show cursor (if raw mode is on)
//! 4. Leave alternate screen (if enabled)
//! 5. Exit raw mode (if enabled)
//! 6. Flush stdout

use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Duration;

use insight_core::event::Event;

#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Full-screen mode with the original scrollback preserved.
    pub alternate_screen: bool,
    /// Mouse press, drag, and release reporting.
    pub mouse_capture: bool,
    /// Focus in/out reporting; focus loss cancels an active drag.
    pub focus_events: bool,
}

impl SessionOptions {
    /// What the InSight UI needs.
    #[must_use]
    pub fn fullscreen() -> Self {
        Self {
            alternate_screen: true,
            mouse_capture: true,
            focus_events: true,
        }
    }
}

/// Owns raw mode; restores the terminal on drop.
///
/// Only one session should exist at a time.
#[derive(Debug)]
pub struct TerminalSession {
    options: SessionOptions,
    raw_mode_enabled: bool,
    alternate_screen_enabled: bool,
    mouse_enabled: bool,
    focus_events_enabled: bool,
}

impl TerminalSession {
    /// Enter raw mode and enable the requested modes.
    ///
    /// # Errors
    ///
    /// Returns an error if raw mode or any requested mode cannot be enabled.
    /// Modes enabled before the failure are restored by `Drop`.
    pub fn new(options: SessionOptions) -> io::Result<Self> {
        install_panic_hook();

        let mut session = Self {
            options: options.clone(),
            raw_mode_enabled: false,
            alternate_screen_enabled: false,
            mouse_enabled: false,
            focus_events_enabled: false,
        };

        crossterm::terminal::enable_raw_mode()?;
        session.raw_mode_enabled = true;
        tracing::info!("terminal raw mode enabled");

        let mut stdout = io::stdout();

        if options.alternate_screen {
            crossterm::execute!(
                stdout,
                crossterm::terminal::EnterAlternateScreen,
                crossterm::terminal::Clear(crossterm::terminal::ClearType::All),
                crossterm::cursor::MoveTo(0, 0)
            )?;
            session.alternate_screen_enabled = true;
            tracing::info!("alternate screen enabled");
        }

        if options.mouse_capture {
            crossterm::execute!(stdout, crossterm::event::EnableMouseCapture)?;
            session.mouse_enabled = true;
            tracing::info!("mouse capture enabled");
        }

        if options.focus_events {
            crossterm::execute!(stdout, crossterm::event::EnableFocusChange)?;
            session.focus_events_enabled = true;
            tracing::info!("focus events enabled");
        }

        Ok(session)
    }

    /// Current terminal size (columns, rows), never smaller than 2×2.
    pub fn size(&self) -> io::Result<(u16, u16)> {
        let (w, h) = crossterm::terminal::size()?;
        Ok((w.max(2), h.max(2)))
    }

    /// `Ok(true)` if an event is ready within `timeout`.
    pub fn poll_event(&self, timeout: Duration) -> io::Result<bool> {
        crossterm::event::poll(timeout)
    }

    /// Read one event, converted. Events InSight does not use map to `None`.
    pub fn read_event(&self) -> io::Result<Option<Event>> {
        let event = crossterm::event::read()?;
        Ok(Event::from_crossterm(event))
    }

    #[must_use]
    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    fn cleanup(&mut self) {
        let mut stdout = io::stdout();

        if self.focus_events_enabled {
            let _ = crossterm::execute!(stdout, crossterm::event::DisableFocusChange);
            self.focus_events_enabled = false;
            tracing::info!("focus events disabled");
        }

        if self.mouse_enabled {
            let _ = crossterm::execute!(stdout, crossterm::event::DisableMouseCapture);
            self.mouse_enabled = false;
            tracing::info!("mouse capture disabled");
        }

        if self.raw_mode_enabled {
            let _ = crossterm::execute!(stdout, crossterm::cursor::Show);
        }

        if self.alternate_screen_enabled {
            let _ = crossterm::execute!(stdout, crossterm::terminal::LeaveAlternateScreen);
            self.alternate_screen_enabled = false;
            tracing::info!("alternate screen disabled");
        }

        if self.raw_mode_enabled {
            let _ = crossterm::terminal::disable_raw_mode();
            self.raw_mode_enabled = false;
            tracing::info!("terminal raw mode disabled");
        }

        let _ = stdout.flush();
    }

    fn anything_enabled(&self) -> bool {
        self.raw_mode_enabled
            || self.alternate_screen_enabled
            || self.mouse_enabled
            || self.focus_events_enabled
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if self.anything_enabled() {
            self.cleanup();
        }
    }
}

fn install_panic_hook() {
    static HOOK: OnceLock<()> = OnceLock::new();
    HOOK.get_or_init(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            best_effort_cleanup();
            previous(info);
        }));
    });
}

fn best_effort_cleanup() {
    let mut stdout = io::stdout();
    let _ = crossterm::execute!(stdout, crossterm::event::DisableFocusChange);
    let _ = crossterm::execute!(stdout, crossterm::event::DisableMouseCapture);
    let _ = crossterm::execute!(stdout, crossterm::cursor::Show);
    let _ = crossterm::execute!(stdout, crossterm::terminal::LeaveAlternateScreen);
    let _ = crossterm::terminal::disable_raw_mode();
    let _ = stdout.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fullscreen_enables_everything_the_ui_uses() {
        let options = SessionOptions::fullscreen();
        assert!(options.alternate_screen);
        assert!(options.mouse_capture);
        assert!(options.focus_events);
    }

    #[test]
    fn default_options_are_minimal() {
        let options = SessionOptions::default();
        assert!(!options.alternate_screen && !options.mouse_capture && !options.focus_events);
    }

    #[test]
    fn cleanup_skips_modes_never_enabled() {
        let mut session = TerminalSession {
            options: SessionOptions::fullscreen(),
            raw_mode_enabled: false,
            alternate_screen_enabled: false,
            mouse_enabled: false,
            focus_events_enabled: false,
        };
        session.cleanup();
        assert!(!session.anything_enabled());
        // Second pass is a no-op.
        session.cleanup();
        assert!(!session.anything_enabled());
        drop(session);
    }
}
