#![forbid(unsafe_code)]

//! Gestures derived from raw pointer input.
//!
//! [`Gesture`] values describe what the user meant (tap the handle, drag the
//! panel) rather than which cells the pointer crossed. They are produced by
//! [`GestureRecognizer`](crate::gesture::GestureRecognizer).
//!
//! # Invariants
//! 1. Every drag sequence is well-formed: `DragStart` → zero or more
//!    `DragMove` → `DragEnd` or `DragCancel`.
//! 2. A single press never produces both `Tap` and `DragEnd`.

use std::time::Duration;

/// A cell position on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: u16,
    pub y: u16,
}

impl Position {
    #[must_use]
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to another position.
    #[must_use]
    pub fn manhattan_distance(self, other: Self) -> u32 {
        u32::from(self.x.abs_diff(other.x)) + u32::from(self.y.abs_diff(other.y))
    }
}

impl From<(u16, u16)> for Position {
    fn from((x, y): (u16, u16)) -> Self {
        Self { x, y }
    }
}

/// A recognized pointer gesture.
#[derive(Debug, Clone, PartialEq)]
pub enum Gesture {
    /// Press and release in place, released before the long-press threshold.
    Tap { pos: Position },

    /// Pointer held stationary beyond the long-press threshold.
    LongPress { pos: Position, duration: Duration },

    /// Pointer moved past the drag threshold while held.
    DragStart { pos: Position },

    /// Ongoing drag movement.
    DragMove {
        start: Position,
        current: Position,
        /// Movement since the previous pointer sample (dx, dy).
        delta: (i16, i16),
    },

    /// Pointer released after a drag.
    DragEnd { start: Position, end: Position },

    /// Drag interrupted (Escape, focus loss).
    DragCancel,
}

impl Gesture {
    #[must_use]
    pub fn is_drag(&self) -> bool {
        matches!(
            self,
            Self::DragStart { .. } | Self::DragMove { .. } | Self::DragEnd { .. } | Self::DragCancel
        )
    }

    /// Whether this gesture finishes a drag sequence.
    #[must_use]
    pub fn ends_drag(&self) -> bool {
        matches!(self, Self::DragEnd { .. } | Self::DragCancel)
    }

    #[must_use]
    pub fn position(&self) -> Option<Position> {
        match self {
            Self::Tap { pos } | Self::LongPress { pos, .. } | Self::DragStart { pos } => Some(*pos),
            Self::DragMove { current, .. } => Some(*current),
            Self::DragEnd { end, .. } => Some(*end),
            Self::DragCancel => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(x: u16, y: u16) -> Position {
        Position::new(x, y)
    }

    #[test]
    fn manhattan_distance() {
        assert_eq!(pos(0, 0).manhattan_distance(pos(3, 4)), 7);
        assert_eq!(pos(5, 5).manhattan_distance(pos(5, 5)), 0);
        assert_eq!(pos(10, 0).manhattan_distance(pos(0, 10)), 20);
    }

    #[test]
    fn drag_classification() {
        assert!(Gesture::DragCancel.is_drag());
        assert!(Gesture::DragCancel.ends_drag());
        assert!(
            Gesture::DragEnd {
                start: pos(0, 0),
                end: pos(0, 3)
            }
            .ends_drag()
        );
        assert!(!Gesture::DragStart { pos: pos(1, 1) }.ends_drag());
        assert!(!Gesture::Tap { pos: pos(1, 1) }.is_drag());
    }

    #[test]
    fn position_of_each_variant() {
        assert_eq!(Gesture::Tap { pos: pos(2, 3) }.position(), Some(pos(2, 3)));
        assert_eq!(
            Gesture::DragMove {
                start: pos(0, 0),
                current: pos(0, 4),
                delta: (0, 1)
            }
            .position(),
            Some(pos(0, 4))
        );
        assert_eq!(Gesture::DragCancel.position(), None);
    }
}
