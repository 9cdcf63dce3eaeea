#![forbid(unsafe_code)]

//! Today's schedule sample data shown in the closed panel.

/// Panel heading while closed.
pub const TITLE: &str = "Today's Schedule";

/// One slot in the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub start: &'static str,
    pub end: &'static str,
    pub activity: &'static str,
}

impl ScheduleEntry {
    const fn new(start: &'static str, end: &'static str, activity: &'static str) -> Self {
        Self {
            start,
            end,
            activity,
        }
    }

    /// Breaks and meals carry no subject.
    #[must_use]
    pub fn is_break(&self) -> bool {
        !self.activity.contains(':')
    }

    /// Text for the 1-based line `index`.
    ///
    /// Study slots read `"1. 3 - 4 Physics: Laws of Motion"`; breaks keep a
    /// colon before the label, `"2. 4 - 4.10: Break"`.
    #[must_use]
    pub fn line(&self, index: usize) -> String {
        if self.is_break() {
            format!("{index}. {} - {}: {}", self.start, self.end, self.activity)
        } else {
            format!("{index}. {} - {} {}", self.start, self.end, self.activity)
        }
    }
}

/// Hardcoded sample day.
pub const TODAY: [ScheduleEntry; 9] = [
    ScheduleEntry::new("3", "4", "Physics: Laws of Motion"),
    ScheduleEntry::new("4", "4.10", "Break"),
    ScheduleEntry::new("4.10", "5", "Chemistry: Periodic Table"),
    ScheduleEntry::new("5", "5.15", "Break"),
    ScheduleEntry::new("5.15", "6", "Maths: Rational Numbers"),
    ScheduleEntry::new("6", "7", "Break"),
    ScheduleEntry::new("7", "8", "Biology: Skeletal System"),
    ScheduleEntry::new("8", "8.30", "Dinner"),
    ScheduleEntry::new("8.30", "9.30", "History: Age of Guptas"),
];

/// Numbered display lines for [`TODAY`].
#[must_use]
pub fn lines() -> Vec<String> {
    TODAY
        .iter()
        .enumerate()
        .map(|(i, entry)| entry.line(i + 1))
        .collect()
}
