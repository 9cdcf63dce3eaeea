#![forbid(unsafe_code)]

//! Menu: voice memo, assistant link, statistics.

use std::cell::Cell;

use insight_core::event::KeyCode;
use insight_core::geometry::Rect;
use insight_widgets::menu::{ENTRIES, MenuEntry, MenuTarget};

use super::{HelpEntry, Input, Route, Screen, contains};
use crate::app::Cmd;
use crate::frame::{Frame, GLASS, INK, TextStyle, WHITE};

pub struct MenuScreen {
    selected: usize,
    rows: Cell<[Rect; 3]>,
}

impl MenuScreen {
    #[must_use]
    pub fn new() -> Self {
        Self {
            selected: 0,
            rows: Cell::new([Rect::default(); 3]),
        }
    }

    #[must_use]
    pub fn selected(&self) -> usize {
        self.selected
    }

    fn activate(entry: &MenuEntry) -> Cmd {
        match entry.target {
            MenuTarget::VoiceMemo => Cmd::Push(Route::Memo),
            MenuTarget::Link(url) => Cmd::open_url(url),
            MenuTarget::Statistics => Cmd::Push(Route::Stats),
        }
    }
}

impl Default for MenuScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for MenuScreen {
    fn route(&self) -> Route {
        Route::Menu
    }

    fn update(&mut self, input: &Input) -> Cmd {
        if let Some(pos) = input.tap() {
            for (entry, rect) in ENTRIES.iter().zip(self.rows.get()) {
                if contains(rect, pos) {
                    return Self::activate(entry);
                }
            }
            return Cmd::None;
        }
        let Some(key) = input.key() else {
            return Cmd::None;
        };
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.checked_sub(1).unwrap_or(ENTRIES.len() - 1);
            }
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
                self.selected = (self.selected + 1) % ENTRIES.len();
            }
            KeyCode::Enter | KeyCode::Char(' ') => return Self::activate(&ENTRIES[self.selected]),
            KeyCode::Char(c @ '1'..='3') => {
                let idx = c as usize - '1' as usize;
                self.selected = idx;
                return Self::activate(&ENTRIES[idx]);
            }
            _ => {}
        }
        Cmd::None
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        let mut rows = [Rect::default(); 3];
        let mut y = area.y + area.height / 4;
        frame.print_centered(area, y, "Menu", TextStyle::fg(WHITE).bold());
        y += 2;

        let width = 28.min(area.width);
        for (i, entry) in ENTRIES.iter().enumerate() {
            if y >= area.bottom() {
                break;
            }
            let rect = area.centered_row(y, width, 1);
            let style = if i == self.selected {
                frame.fill_bg(rect, GLASS);
                TextStyle::fg(INK).bold()
            } else {
                TextStyle::fg(WHITE)
            };
            let label = format!("{}. {}  {}", i + 1, entry.icon, entry.label);
            frame.print_clipped(rect.x + 2, y, &label, style, rect.right());
            rows[i] = rect;
            y += 2;
        }
        self.rows.set(rows);
    }

    fn keybindings(&self) -> Vec<HelpEntry> {
        vec![
            HelpEntry {
                key: "↑/↓",
                action: "Select",
            },
            HelpEntry {
                key: "Enter",
                action: "Open",
            },
        ]
    }

    fn title(&self) -> &'static str {
        "Menu"
    }
}
