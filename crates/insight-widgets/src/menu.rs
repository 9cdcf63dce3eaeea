#![forbid(unsafe_code)]

//! Menu entries.

/// Where a menu entry leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuTarget {
    VoiceMemo,
    /// Opened outside the app.
    Link(&'static str),
    Statistics,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub icon: &'static str,
    pub label: &'static str,
    pub target: MenuTarget,
}

pub const ASSISTANT_URL: &str = "https://chat.openai.com";

pub const ENTRIES: [MenuEntry; 3] = [
    MenuEntry {
        icon: "🎤",
        label: "Voice Memo",
        target: MenuTarget::VoiceMemo,
    },
    MenuEntry {
        icon: "💬",
        label: "Assistant",
        target: MenuTarget::Link(ASSISTANT_URL),
    },
    MenuEntry {
        icon: "📊",
        label: "Statistics",
        target: MenuTarget::Statistics,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assistant_is_external() {
        assert_eq!(ENTRIES[1].target, MenuTarget::Link("https://chat.openai.com"));
        assert!(!matches!(ENTRIES[0].target, MenuTarget::Link(_)));
    }
}
