#![forbid(unsafe_code)]

//! Login screen.
//!
//! Social sign-in and Sign Up are offered only while both fields are blank.

use std::cell::Cell;

use insight_core::event::KeyCode;
use insight_core::geometry::Rect;
use insight_widgets::forms::{LoginField, LoginForm, SocialProvider};

use super::{HelpEntry, Input, Route, Screen, contains, draw_button, draw_field};
use crate::app::Cmd;
use crate::frame::{Frame, TextStyle, WHITE};

#[derive(Debug, Clone, Copy, Default)]
struct LoginLayout {
    username: Rect,
    password: Rect,
    social: [Rect; 3],
    login: Rect,
    sign_up: Rect,
}

pub struct LoginScreen {
    form: LoginForm,
    layout: Cell<LoginLayout>,
}

impl LoginScreen {
    #[must_use]
    pub fn new() -> Self {
        Self {
            form: LoginForm::new(),
            layout: Cell::new(LoginLayout::default()),
        }
    }

    #[must_use]
    pub fn form(&self) -> &LoginForm {
        &self.form
    }

    fn handle_tap(&mut self, input: &Input) -> Cmd {
        let Some(pos) = input.tap() else {
            return Cmd::None;
        };
        let layout = self.layout.get();
        if contains(layout.username, pos) {
            self.form.set_focus(LoginField::Username);
        } else if contains(layout.password, pos) {
            self.form.set_focus(LoginField::Password);
        } else if contains(layout.login, pos) {
            return Cmd::Push(Route::Home);
        } else if self.form.sign_up_visible() {
            if contains(layout.sign_up, pos) {
                return Cmd::Push(Route::SignUp);
            }
            for (provider, rect) in SocialProvider::ALL.iter().zip(layout.social) {
                if contains(rect, pos) {
                    return Cmd::open_url(provider.url());
                }
            }
        }
        Cmd::None
    }
}

impl Default for LoginScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for LoginScreen {
    fn route(&self) -> Route {
        Route::Login
    }

    fn update(&mut self, input: &Input) -> Cmd {
        let Some(key) = input.key() else {
            return self.handle_tap(input);
        };
        match key.code {
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Down | KeyCode::Up => {
                self.form.focus_next();
            }
            KeyCode::Enter => return Cmd::Push(Route::Home),
            KeyCode::Backspace => self.form.focused_mut().backspace(),
            KeyCode::Char(c) if !key.ctrl() => self.form.focused_mut().push(c),
            _ => {}
        }
        Cmd::None
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        let mut layout = LoginLayout::default();
        let mut y = area.y + area.height / 6;

        frame.print_centered(area, y, "Study.", TextStyle::fg(WHITE).bold());
        y += 1;
        frame.print_centered(area, y, "More Efficiently", TextStyle::fg(WHITE));
        y += 2;

        let focus = self.form.focus();
        let user = &self.form.username;
        layout.username = draw_field(frame, area, y, &user.display(), user.is_empty(), focus == LoginField::Username);
        y += 2;
        let pass = &self.form.password;
        layout.password = draw_field(frame, area, y, &pass.display(), pass.is_empty(), focus == LoginField::Password);
        y += 2;

        if self.form.sign_up_visible() && y < area.bottom() {
            let labels: Vec<String> = SocialProvider::ALL
                .iter()
                .map(|p| format!("[ {} ]", p.label()))
                .collect();
            let row = labels.join("  ");
            let start = frame.print_centered(area, y, &row, TextStyle::fg(WHITE)).x;
            let mut x = start;
            for (i, label) in labels.iter().enumerate() {
                let w = crate::frame::display_width(label);
                layout.social[i] = Rect::new(x, y, w, 1);
                x += w + 2;
            }
        }
        y += 2;

        layout.login = draw_button(frame, area, y, "Login", TextStyle::fg(WHITE).bold());
        y += 2;
        if self.form.sign_up_visible() {
            layout.sign_up = draw_button(frame, area, y, "Sign Up", TextStyle::fg(WHITE));
        }

        self.layout.set(layout);
    }

    fn keybindings(&self) -> Vec<HelpEntry> {
        vec![
            HelpEntry {
                key: "Tab",
                action: "Next field",
            },
            HelpEntry {
                key: "Enter",
                action: "Login",
            },
            HelpEntry {
                key: "Click",
                action: "Press button",
            },
        ]
    }

    fn title(&self) -> &'static str {
        "Login"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insight_core::event::KeyEvent;
    use insight_core::semantic_event::{Gesture, Position};

    fn render(screen: &LoginScreen) -> Frame {
        let mut frame = Frame::new(60, 24);
        screen.view(&mut frame, Rect::new(0, 0, 60, 23));
        frame
    }

    fn tap_center(rect: Rect) -> Input {
        Input::Gesture(Gesture::Tap {
            pos: Position::new(rect.x + rect.width / 2, rect.y),
        })
    }

    #[test]
    fn blank_form_shows_sign_up_and_social() {
        let screen = LoginScreen::new();
        let text = render(&screen).text();
        assert!(text.contains("Study."));
        assert!(text.contains("More Efficiently"));
        assert!(text.contains("[ Google ]"));
        assert!(text.contains("[ Sign Up ]"));
    }

    #[test]
    fn typing_hides_sign_up() {
        let mut screen = LoginScreen::new();
        screen.update(&Input::Key(KeyEvent::new(KeyCode::Char('a'))));
        let text = render(&screen).text();
        assert!(!text.contains("Sign Up"));
        assert!(!text.contains("Facebook"));
        assert!(text.contains("[ Login ]"));
    }

    #[test]
    fn social_tap_opens_link() {
        let mut screen = LoginScreen::new();
        render(&screen);
        let rect = screen.layout.get().social[2];
        assert_eq!(
            screen.update(&tap_center(rect)),
            Cmd::OpenUrl("https://facebook.com/login".into())
        );
    }

    #[test]
    fn hidden_sign_up_is_not_tappable() {
        let mut screen = LoginScreen::new();
        render(&screen);
        let sign_up = screen.layout.get().sign_up;
        screen.update(&Input::Key(KeyEvent::new(KeyCode::Char('x'))));
        render(&screen);
        assert_eq!(screen.update(&tap_center(sign_up)), Cmd::None);
    }

    #[test]
    fn tapping_password_moves_focus() {
        let mut screen = LoginScreen::new();
        render(&screen);
        let rect = screen.layout.get().password;
        screen.update(&tap_center(rect));
        assert_eq!(screen.form().focus(), LoginField::Password);
    }

    #[test]
    fn enter_logs_in() {
        let mut screen = LoginScreen::new();
        assert_eq!(
            screen.update(&Input::Key(KeyEvent::new(KeyCode::Enter))),
            Cmd::Push(Route::Home)
        );
    }
}
