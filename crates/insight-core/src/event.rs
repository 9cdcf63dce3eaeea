#![forbid(unsafe_code)]

//! Canonical input events consumed by InSight screens.
//!
//! The host (a terminal today) translates its native input into these types
//! before anything else sees it. Pointer coordinates are 0-indexed layout
//! cells with the origin at the top-left of the screen.

use bitflags::bitflags;

/// Canonical input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A keyboard event.
    Key(KeyEvent),

    /// A pointer (mouse or touch) event.
    Pointer(PointerEvent),

    /// The screen was resized.
    Resize {
        /// New width in cells.
        width: u16,
        /// New height in cells.
        height: u16,
    },

    /// Focus gained (`true`) or lost (`false`).
    Focus(bool),
}

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: Modifiers,
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// Create a press event with no modifiers.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::NONE,
            kind: KeyEventKind::Press,
        }
    }

    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    #[must_use]
    pub const fn with_kind(mut self, kind: KeyEventKind) -> Self {
        self.kind = kind;
        self
    }

    /// Check if this is a specific character key.
    #[must_use]
    pub fn is_char(&self, c: char) -> bool {
        matches!(self.code, KeyCode::Char(ch) if ch == c)
    }

    /// Check if Ctrl modifier is held.
    #[must_use]
    pub const fn ctrl(&self) -> bool {
        self.modifiers.contains(Modifiers::CTRL)
    }

    /// True for press and auto-repeat events.
    #[must_use]
    pub const fn is_press(&self) -> bool {
        matches!(self.kind, KeyEventKind::Press | KeyEventKind::Repeat)
    }
}

/// Key codes the screens react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Char(char),
    Enter,
    Escape,
    Backspace,
    Tab,
    BackTab,
    Up,
    Down,
    Left,
    Right,
    /// Any key InSight has no binding for.
    Other,
}

/// The type of key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyEventKind {
    #[default]
    Press,
    Repeat,
    Release,
}

bitflags! {
    /// Modifier keys held during an event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        const NONE  = 0b0000;
        const SHIFT = 0b0001;
        const ALT   = 0b0010;
        const CTRL  = 0b0100;
        const SUPER = 0b1000;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}

/// A pointer event at a cell position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub x: u16,
    pub y: u16,
}

impl PointerEvent {
    #[must_use]
    pub const fn new(kind: PointerKind, x: u16, y: u16) -> Self {
        Self { kind, x, y }
    }

    /// Primary-button press.
    #[must_use]
    pub const fn down(x: u16, y: u16) -> Self {
        Self::new(PointerKind::Down(PointerButton::Primary), x, y)
    }

    /// Primary-button movement while held.
    #[must_use]
    pub const fn drag(x: u16, y: u16) -> Self {
        Self::new(PointerKind::Drag(PointerButton::Primary), x, y)
    }

    /// Primary-button release.
    #[must_use]
    pub const fn up(x: u16, y: u16) -> Self {
        Self::new(PointerKind::Up(PointerButton::Primary), x, y)
    }

    #[must_use]
    pub const fn position(&self) -> (u16, u16) {
        (self.x, self.y)
    }
}

/// The type of pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerKind {
    Down(PointerButton),
    Up(PointerButton),
    /// Movement while a button is held.
    Drag(PointerButton),
    /// Movement with no button held.
    Moved,
    ScrollUp,
    ScrollDown,
}

/// Pointer buttons. Touch input always reports `Primary`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

#[cfg(all(feature = "crossterm", not(target_arch = "wasm32")))]
mod crossterm_compat {
    use super::*;
    use crossterm::event as ct;

    impl Event {
        /// Translate a crossterm event. Returns `None` for input InSight
        /// does not model (paste, horizontal scroll).
        #[must_use]
        pub fn from_crossterm(event: ct::Event) -> Option<Self> {
            match event {
                ct::Event::Key(key) => Some(Self::Key(KeyEvent {
                    code: key_code(key.code),
                    modifiers: modifiers(key.modifiers),
                    kind: match key.kind {
                        ct::KeyEventKind::Press => KeyEventKind::Press,
                        ct::KeyEventKind::Repeat => KeyEventKind::Repeat,
                        ct::KeyEventKind::Release => KeyEventKind::Release,
                    },
                })),
                ct::Event::Mouse(mouse) => {
                    let kind = match mouse.kind {
                        ct::MouseEventKind::Down(b) => PointerKind::Down(button(b)),
                        ct::MouseEventKind::Up(b) => PointerKind::Up(button(b)),
                        ct::MouseEventKind::Drag(b) => PointerKind::Drag(button(b)),
                        ct::MouseEventKind::Moved => PointerKind::Moved,
                        ct::MouseEventKind::ScrollUp => PointerKind::ScrollUp,
                        ct::MouseEventKind::ScrollDown => PointerKind::ScrollDown,
                        ct::MouseEventKind::ScrollLeft | ct::MouseEventKind::ScrollRight => {
                            return None;
                        }
                    };
                    Some(Self::Pointer(PointerEvent::new(
                        kind,
                        mouse.column,
                        mouse.row,
                    )))
                }
                ct::Event::Resize(width, height) => Some(Self::Resize { width, height }),
                ct::Event::FocusGained => Some(Self::Focus(true)),
                ct::Event::FocusLost => Some(Self::Focus(false)),
                ct::Event::Paste(_) => None,
            }
        }
    }

    fn key_code(code: ct::KeyCode) -> KeyCode {
        match code {
            ct::KeyCode::Char(c) => KeyCode::Char(c),
            ct::KeyCode::Enter => KeyCode::Enter,
            ct::KeyCode::Esc => KeyCode::Escape,
            ct::KeyCode::Backspace => KeyCode::Backspace,
            ct::KeyCode::Tab => KeyCode::Tab,
            ct::KeyCode::BackTab => KeyCode::BackTab,
            ct::KeyCode::Up => KeyCode::Up,
            ct::KeyCode::Down => KeyCode::Down,
            ct::KeyCode::Left => KeyCode::Left,
            ct::KeyCode::Right => KeyCode::Right,
            _ => KeyCode::Other,
        }
    }

    fn modifiers(m: ct::KeyModifiers) -> Modifiers {
        let mut out = Modifiers::NONE;
        if m.contains(ct::KeyModifiers::SHIFT) {
            out |= Modifiers::SHIFT;
        }
        if m.contains(ct::KeyModifiers::ALT) {
            out |= Modifiers::ALT;
        }
        if m.contains(ct::KeyModifiers::CONTROL) {
            out |= Modifiers::CTRL;
        }
        if m.contains(ct::KeyModifiers::SUPER) {
            out |= Modifiers::SUPER;
        }
        out
    }

    fn button(b: ct::MouseButton) -> PointerButton {
        match b {
            ct::MouseButton::Left => PointerButton::Primary,
            ct::MouseButton::Right => PointerButton::Secondary,
            ct::MouseButton::Middle => PointerButton::Middle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_event_is_char() {
        let event = KeyEvent::new(KeyCode::Char('q'));
        assert!(event.is_char('q'));
        assert!(!event.is_char('x'));
    }

    #[test]
    fn ctrl_modifier() {
        let event = KeyEvent::new(KeyCode::Char('c')).with_modifiers(Modifiers::CTRL);
        assert!(event.ctrl());
        assert!(!KeyEvent::new(KeyCode::Char('c')).ctrl());
    }

    #[test]
    fn release_is_not_press() {
        let event = KeyEvent::new(KeyCode::Enter).with_kind(KeyEventKind::Release);
        assert!(!event.is_press());
        assert!(KeyEvent::new(KeyCode::Enter).with_kind(KeyEventKind::Repeat).is_press());
    }

    #[test]
    fn pointer_helpers_use_primary_button() {
        assert_eq!(
            PointerEvent::down(3, 4).kind,
            PointerKind::Down(PointerButton::Primary)
        );
        assert_eq!(
            PointerEvent::drag(3, 5).kind,
            PointerKind::Drag(PointerButton::Primary)
        );
        assert_eq!(PointerEvent::up(3, 6).position(), (3, 6));
    }

    #[test]
    fn modifiers_default() {
        assert_eq!(Modifiers::default(), Modifiers::NONE);
    }

    #[cfg(feature = "crossterm")]
    #[test]
    fn crossterm_mouse_translates_to_pointer() {
        use crossterm::event as ct;
        let raw = ct::Event::Mouse(ct::MouseEvent {
            kind: ct::MouseEventKind::Drag(ct::MouseButton::Left),
            column: 7,
            row: 9,
            modifiers: ct::KeyModifiers::NONE,
        });
        assert_eq!(
            Event::from_crossterm(raw),
            Some(Event::Pointer(PointerEvent::drag(7, 9)))
        );
    }

    #[cfg(feature = "crossterm")]
    #[test]
    fn crossterm_paste_is_dropped() {
        use crossterm::event as ct;
        assert_eq!(Event::from_crossterm(ct::Event::Paste("x".into())), None);
    }
}
