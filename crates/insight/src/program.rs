#![forbid(unsafe_code)]

//! Terminal host loop.
//!
//! Owns the [`TerminalSession`] and a [`Frame`]; each iteration renders,
//! waits up to one tick for input, then advances time. Commands that reach
//! the host are `Quit` and `OpenUrl`; links are logged and shown in the
//! status bar since a terminal cannot open them itself.
//!
//! # Failure Modes
//!
//! - Terminal I/O errors end the loop and surface as
//!   [`InsightError::Terminal`]. The session's `Drop` restores the terminal
//!   on every exit path.

use std::io::{self, Write};
use std::time::Duration;

use insight_core::event::Event;
use web_time::Instant;

use crate::app::{App, AppSettings, Cmd};
use crate::error::{InsightError, Result};
use crate::frame::Frame;
use crate::presenter::present;
use crate::screens::Route;
use crate::terminal_session::{SessionOptions, TerminalSession};

/// What the host does after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Act on a host-level command.
pub fn handle_cmd(cmd: Cmd) -> Flow {
    match cmd {
        Cmd::Quit => Flow::Quit,
        Cmd::OpenUrl(url) => {
            tracing::info!(%url, "link requested");
            Flow::Continue
        }
        Cmd::Batch(cmds) => {
            let mut flow = Flow::Continue;
            for cmd in cmds {
                if handle_cmd(cmd) == Flow::Quit {
                    flow = Flow::Quit;
                }
            }
            flow
        }
        // Navigation is consumed by `App`.
        Cmd::None | Cmd::Push(_) | Cmd::Pop => Flow::Continue,
    }
}

pub fn run(settings: AppSettings, root: Route, tick: Duration) -> Result<()> {
    let session = TerminalSession::new(SessionOptions::fullscreen())
        .map_err(|e| InsightError::terminal(format!("failed to start terminal session: {e}")))?;
    let (width, height) = session.size()?;
    let mut frame = Frame::new(width, height);
    let mut app = App::new(settings, root);
    let mut stdout = io::stdout();
    let mut last = Instant::now();

    tracing::info!(width, height, ?root, "event loop started");
    loop {
        frame.clear();
        app.view(&mut frame);
        present(&mut stdout, &frame)?;
        stdout.flush()?;

        if session.poll_event(tick)? {
            if let Some(event) = session.read_event()? {
                if let Event::Resize { width, height } = event {
                    frame.resize(width.max(2), height.max(2));
                    tracing::debug!(width, height, "resize");
                }
                if handle_cmd(app.handle_event(&event, Instant::now())) == Flow::Quit {
                    break;
                }
            }
        }

        let now = Instant::now();
        let dt = now.duration_since(last);
        last = now;
        if handle_cmd(app.tick(dt, now)) == Flow::Quit {
            break;
        }
    }
    tracing::info!("event loop finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quit_anywhere_in_a_batch_stops() {
        let cmd = Cmd::Batch(vec![Cmd::open_url("https://example.com"), Cmd::Quit]);
        assert_eq!(handle_cmd(cmd), Flow::Quit);
        assert_eq!(handle_cmd(Cmd::open_url("https://example.com")), Flow::Continue);
        assert_eq!(handle_cmd(Cmd::None), Flow::Continue);
    }
}
