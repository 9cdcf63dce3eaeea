#![forbid(unsafe_code)]

//! Profile settings placeholder.

use insight_core::geometry::Rect;

use super::{HelpEntry, Input, Route, Screen};
use crate::app::Cmd;
use crate::frame::{Frame, MUTED, TextStyle, WHITE};

pub struct SettingsScreen;

impl Screen for SettingsScreen {
    fn route(&self) -> Route {
        Route::Settings
    }

    fn update(&mut self, _input: &Input) -> Cmd {
        Cmd::None
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        let y = area.y + area.height / 3;
        frame.print_centered(area, y, "Profile", TextStyle::fg(WHITE).bold());
        frame.print_centered(area, y + 2, "Profile settings will appear here.", TextStyle::fg(MUTED));
    }

    fn keybindings(&self) -> Vec<HelpEntry> {
        Vec::new()
    }

    fn title(&self) -> &'static str {
        "Settings"
    }
}
