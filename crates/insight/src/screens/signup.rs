#![forbid(unsafe_code)]

//! Sign-up screen. Nothing is validated or stored; Create Account goes home.

use std::cell::Cell;

use insight_core::event::KeyCode;
use insight_core::geometry::Rect;
use insight_widgets::forms::{SignUpField, SignUpForm};

use super::{HelpEntry, Input, Route, Screen, contains, draw_button, draw_field};
use crate::app::Cmd;
use crate::frame::{Frame, TextStyle, WHITE};

#[derive(Debug, Clone, Copy, Default)]
struct SignUpLayout {
    fields: [Rect; 5],
    curriculum: Rect,
    create: Rect,
}

pub struct SignUpScreen {
    form: SignUpForm,
    layout: Cell<SignUpLayout>,
}

impl SignUpScreen {
    #[must_use]
    pub fn new() -> Self {
        Self {
            form: SignUpForm::new(),
            layout: Cell::new(SignUpLayout::default()),
        }
    }

    #[must_use]
    pub fn form(&self) -> &SignUpForm {
        &self.form
    }
}

impl Default for SignUpScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for SignUpScreen {
    fn route(&self) -> Route {
        Route::SignUp
    }

    fn update(&mut self, input: &Input) -> Cmd {
        if let Some(pos) = input.tap() {
            let layout = self.layout.get();
            for (field, rect) in SignUpField::ORDER.iter().zip(layout.fields) {
                if contains(rect, pos) {
                    self.form.set_focus(*field);
                    return Cmd::None;
                }
            }
            if contains(layout.curriculum, pos) {
                self.form.set_focus(SignUpField::Curriculum);
                self.form.cycle_curriculum();
            } else if contains(layout.create, pos) {
                return Cmd::Push(Route::Home);
            }
            return Cmd::None;
        }

        let Some(key) = input.key() else {
            return Cmd::None;
        };
        let on_picker = self.form.focus() == SignUpField::Curriculum;
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.form.focus_next(),
            KeyCode::Enter => return Cmd::Push(Route::Home),
            KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') if on_picker => {
                self.form.cycle_curriculum();
            }
            KeyCode::Backspace => {
                if let Some(field) = self.form.focused_mut() {
                    field.backspace();
                }
            }
            KeyCode::Char(c) if !key.ctrl() => {
                if let Some(field) = self.form.focused_mut() {
                    field.push(c);
                }
            }
            _ => {}
        }
        Cmd::None
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        let mut layout = SignUpLayout::default();
        let mut y = area.y + 1;

        frame.print_centered(area, y, "Sign Up", TextStyle::fg(WHITE).bold());
        y += 2;

        let focus = self.form.focus();
        for (i, (field, input)) in self.form.text_fields().into_iter().enumerate() {
            layout.fields[i] = draw_field(frame, area, y, &input.display(), input.is_empty(), focus == field);
            y += 2;
        }

        if y < area.bottom() {
            let picker = format!("Curriculum: ‹ {} ›", self.form.curriculum.label());
            let style = if focus == SignUpField::Curriculum {
                TextStyle::fg(WHITE).bold()
            } else {
                TextStyle::fg(WHITE)
            };
            layout.curriculum = frame.print_centered(area, y, &picker, style);
        }
        y += 2;

        layout.create = draw_button(frame, area, y, "Create Account", TextStyle::fg(WHITE).bold());
        self.layout.set(layout);
    }

    fn keybindings(&self) -> Vec<HelpEntry> {
        vec![
            HelpEntry {
                key: "Tab",
                action: "Next field",
            },
            HelpEntry {
                key: "←/→",
                action: "Curriculum",
            },
            HelpEntry {
                key: "Enter",
                action: "Create Account",
            },
        ]
    }

    fn title(&self) -> &'static str {
        "Sign Up"
    }
}
