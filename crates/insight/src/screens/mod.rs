#![forbid(unsafe_code)]

//! Screens and their shared plumbing.
//!
//! Every screen owns its own state and is mounted fresh when pushed onto the
//! navigation stack. Layout rects computed in `view` are cached in
//! [`Cell`](std::cell::Cell)s so `update` can hit-test later input against
//! what was last drawn.

pub mod home;
pub mod login;
pub mod memo;
pub mod menu;
pub mod settings;
pub mod signup;
pub mod stats;

use std::time::Duration;

use insight_core::event::{KeyCode, KeyEvent};
use insight_core::geometry::Rect;
use insight_core::semantic_event::{Gesture, Position};

use crate::app::{AppSettings, Cmd};
use crate::frame::{Frame, GLASS, INK, TextStyle, display_width};

/// Destinations on the navigation stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    SignUp,
    Home,
    Settings,
    Menu,
    Stats,
    Memo,
}

impl Route {
    /// Build fresh state for this route.
    #[must_use]
    pub fn mount(self, settings: &AppSettings) -> Box<dyn Screen> {
        tracing::debug!(route = ?self, "mount screen");
        match self {
            Self::Login => Box::new(login::LoginScreen::new()),
            Self::SignUp => Box::new(signup::SignUpScreen::new()),
            Self::Home => Box::new(home::HomeScreen::new(settings.panel_motion)),
            Self::Settings => Box::new(settings::SettingsScreen),
            Self::Menu => Box::new(menu::MenuScreen::new()),
            Self::Stats => Box::new(stats::StatsScreen::new()),
            Self::Memo => Box::new(memo::MemoScreen::new(
                &settings.memo_phrase,
                settings.memo_words_per_second,
            )),
        }
    }
}

/// Input routed to a screen after global handling.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Key(KeyEvent),
    Gesture(Gesture),
}

impl Input {
    /// Position of a tap, if this is one.
    #[must_use]
    pub fn tap(&self) -> Option<Position> {
        match self {
            Self::Gesture(Gesture::Tap { pos }) => Some(*pos),
            _ => None,
        }
    }

    #[must_use]
    pub fn key(&self) -> Option<&KeyEvent> {
        match self {
            Self::Key(key) => Some(key),
            Self::Gesture(_) => None,
        }
    }

    #[must_use]
    pub fn is_key(&self, code: KeyCode) -> bool {
        self.key().is_some_and(|k| k.code == code)
    }
}

/// One line of the key hint bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpEntry {
    pub key: &'static str,
    pub action: &'static str,
}

pub trait Screen {
    fn route(&self) -> Route;

    fn update(&mut self, input: &Input) -> Cmd;

    fn tick(&mut self, _dt: Duration) {}

    /// Nothing is mid-gesture or mid-animation.
    fn is_settled(&self) -> bool {
        true
    }

    fn view(&self, frame: &mut Frame, area: Rect);

    fn keybindings(&self) -> Vec<HelpEntry>;

    fn title(&self) -> &'static str;
}

// ---------------------------------------------------------------------------
// Shared drawing helpers
// ---------------------------------------------------------------------------

pub(crate) fn contains(rect: Rect, pos: Position) -> bool {
    !rect.is_empty() && rect.contains(pos.x, pos.y)
}

/// `[ label ]` centered on row `y`. Returns its rect for hit testing.
pub(crate) fn draw_button(frame: &mut Frame, area: Rect, y: u16, label: &str, style: TextStyle) -> Rect {
    if y >= area.bottom() {
        return Rect::default();
    }
    frame.print_centered(area, y, &format!("[ {label} ]"), style)
}

/// Text field box: focus marker, frosted fill, value or placeholder.
pub(crate) fn draw_field(frame: &mut Frame, area: Rect, y: u16, text: &str, placeholder: bool, focused: bool) -> Rect {
    if y >= area.bottom() {
        return Rect::default();
    }
    let width = 32.min(area.width.saturating_sub(4));
    let rect = area.centered_row(y, width, 1);
    frame.fill_bg(rect, GLASS);
    let fg = if placeholder { crate::frame::MUTED_INK } else { INK };
    frame.print_clipped(rect.x + 1, y, text, TextStyle::fg(fg), rect.right());
    if focused && rect.x >= 2 {
        frame.print(rect.x - 2, y, "›", TextStyle::default().bold());
    }
    rect
}

/// Greedy word wrap to `width` columns.
pub(crate) fn wrap(text: &str, width: u16) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        let needed = if line.is_empty() {
            display_width(word)
        } else {
            display_width(&line) + 1 + display_width(word)
        };
        if needed > width && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}
