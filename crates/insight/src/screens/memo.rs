#![forbid(unsafe_code)]

//! Voice memo screen.

use std::cell::Cell;
use std::time::Duration;

use insight_core::event::KeyCode;
use insight_core::geometry::Rect;
use insight_widgets::memo::{ScriptedTranscriber, VoiceMemo};

use super::{HelpEntry, Input, Route, Screen, contains, draw_button, wrap};
use crate::app::Cmd;
use crate::frame::{Frame, MUTED, RECORDING, TextStyle, WHITE};

pub struct MemoScreen {
    memo: VoiceMemo<ScriptedTranscriber>,
    button: Cell<Rect>,
}

impl MemoScreen {
    #[must_use]
    pub fn new(phrase: &str, words_per_second: f64) -> Self {
        Self::with_memo(VoiceMemo::new(ScriptedTranscriber::new(phrase, words_per_second)))
    }

    #[must_use]
    pub fn with_memo(memo: VoiceMemo<ScriptedTranscriber>) -> Self {
        Self {
            memo,
            button: Cell::new(Rect::default()),
        }
    }

    #[must_use]
    pub fn memo(&self) -> &VoiceMemo<ScriptedTranscriber> {
        &self.memo
    }
}

impl Screen for MemoScreen {
    fn route(&self) -> Route {
        Route::Memo
    }

    fn update(&mut self, input: &Input) -> Cmd {
        let pressed = match input {
            Input::Key(_) => input.is_key(KeyCode::Char(' ')) || input.is_key(KeyCode::Enter),
            Input::Gesture(_) => input.tap().is_some_and(|pos| contains(self.button.get(), pos)),
        };
        if pressed {
            let status = self.memo.toggle();
            tracing::info!(?status, "voice memo toggled");
        }
        Cmd::None
    }

    fn tick(&mut self, dt: Duration) {
        self.memo.tick(dt);
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        let mut y = area.y + 1;
        let label_style = if self.memo.is_recording() {
            TextStyle::fg(RECORDING).bold()
        } else {
            TextStyle::fg(WHITE).bold()
        };
        frame.print_centered(area, y, self.memo.label(), label_style);
        y += 2;

        let button = draw_button(frame, area, y, self.memo.button_icon(), label_style);
        self.button.set(button);
        y += 2;

        if let Some(error) = self.memo.error() {
            frame.print_centered(area, y, &error.to_string(), TextStyle::fg(RECORDING));
            y += 2;
        }

        if y >= area.bottom() {
            return;
        }
        let x = area.x + 2;
        frame.print(x, y, "Recorded Text:", TextStyle::fg(MUTED));
        y += 1;
        let width = area.width.saturating_sub(4);
        for line in wrap(self.memo.text(), width) {
            if y >= area.bottom() {
                break;
            }
            frame.print_clipped(x, y, &line, TextStyle::fg(WHITE), x + width);
            y += 1;
        }
    }

    fn keybindings(&self) -> Vec<HelpEntry> {
        vec![HelpEntry {
            key: "Space",
            action: if self.memo.is_recording() { "Stop" } else { "Record" },
        }]
    }

    fn title(&self) -> &'static str {
        "Voice Memo"
    }
}
