#![forbid(unsafe_code)]

//! Gesture recognition: turns raw pointer events into [`Gesture`]s.
//!
//! [`GestureRecognizer`] follows one press at a time on the primary button.
//!
//! # State Machine
//!
//! ```text
//! Idle --Down--> Pressed --move >= drag_threshold--> Dragging
//! Pressed --Up (within tap_tolerance, before long press)--> Idle  [Tap]
//! Dragging --Up--> Idle                                           [DragEnd]
//! Dragging --Escape | focus lost--> Idle                          [DragCancel]
//! ```
//!
//! # Invariants
//!
//! 1. Tap and DragEnd never both emit for the same press.
//! 2. The first `DragMove` after `DragStart` carries all movement since the
//!    press, so no travel is lost to the drag threshold.
//! 3. After `reset()` the recognizer is idle.
//!
//! # Failure Modes
//!
//! - A `Drag` sample without a preceding `Down` (the press happened outside
//!   the window) arms a press at that position instead of being dropped.
//! - Secondary and middle buttons are ignored.

use std::time::Duration;

use web_time::Instant;

use crate::event::{Event, KeyCode, PointerButton, PointerKind};
use crate::semantic_event::{Gesture, Position};

/// Thresholds for gesture recognition.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureConfig {
    /// Minimum manhattan distance (cells) before a drag starts (default: 1).
    pub drag_threshold: u16,
    /// Maximum travel (cells) between press and release for a tap (default: 1).
    pub tap_tolerance: u16,
    /// Hold time after which a stationary press is a long press (default: 500ms).
    pub long_press_threshold: Duration,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            drag_threshold: 1,
            tap_tolerance: 1,
            long_press_threshold: Duration::from_millis(500),
        }
    }
}

#[derive(Debug, Clone)]
struct Press {
    start: Position,
    last: Position,
    at: Instant,
    dragging: bool,
    long_press_fired: bool,
}

/// Stateful recognizer for tap, long-press and drag gestures.
///
/// Call [`process`](GestureRecognizer::process) for each incoming [`Event`]
/// and [`check_long_press`](GestureRecognizer::check_long_press) on tick.
#[derive(Debug)]
pub struct GestureRecognizer {
    config: GestureConfig,
    press: Option<Press>,
}

impl Default for GestureRecognizer {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}

impl GestureRecognizer {
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            press: None,
        }
    }

    /// Process a raw event, returning the gestures it completes.
    pub fn process(&mut self, event: &Event, now: Instant) -> Vec<Gesture> {
        let mut out = Vec::with_capacity(2);

        match event {
            Event::Pointer(pointer) => {
                let pos = Position::new(pointer.x, pointer.y);
                match pointer.kind {
                    PointerKind::Down(PointerButton::Primary) => self.on_down(pos, now),
                    PointerKind::Drag(PointerButton::Primary) => {
                        self.on_drag(pos, now, &mut out);
                    }
                    PointerKind::Up(PointerButton::Primary) => self.on_up(pos, now, &mut out),
                    _ => {}
                }
            }
            Event::Key(key) if key.is_press() && key.code == KeyCode::Escape => {
                self.cancel(&mut out);
            }
            Event::Focus(false) => self.cancel(&mut out),
            _ => {}
        }

        out
    }

    /// Check for a long press. Call periodically (e.g., on tick).
    pub fn check_long_press(&mut self, now: Instant) -> Option<Gesture> {
        let threshold = self.config.long_press_threshold;
        let press = self.press.as_mut()?;
        if press.dragging || press.long_press_fired {
            return None;
        }
        let held = now.saturating_duration_since(press.at);
        if held < threshold {
            return None;
        }
        press.long_press_fired = true;
        Some(Gesture::LongPress {
            pos: press.start,
            duration: held,
        })
    }

    /// Whether a drag is currently in progress.
    #[inline]
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.press.as_ref().is_some_and(|p| p.dragging)
    }

    /// Drop any in-progress press without emitting anything.
    pub fn reset(&mut self) {
        self.press = None;
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: GestureConfig) {
        self.config = config;
    }
}

impl GestureRecognizer {
    fn on_down(&mut self, pos: Position, now: Instant) {
        self.press = Some(Press {
            start: pos,
            last: pos,
            at: now,
            dragging: false,
            long_press_fired: false,
        });
    }

    fn on_drag(&mut self, pos: Position, now: Instant, out: &mut Vec<Gesture>) {
        let Some(press) = self.press.as_mut() else {
            self.on_down(pos, now);
            return;
        };

        if !press.dragging {
            if press.start.manhattan_distance(pos) < u32::from(self.config.drag_threshold) {
                return;
            }
            press.dragging = true;
            #[cfg(feature = "tracing")]
            tracing::trace!(x = press.start.x, y = press.start.y, "gesture.drag_start");
            out.push(Gesture::DragStart { pos: press.start });
        }

        let delta = (
            delta_axis(press.last.x, pos.x),
            delta_axis(press.last.y, pos.y),
        );
        out.push(Gesture::DragMove {
            start: press.start,
            current: pos,
            delta,
        });
        press.last = pos;
    }

    fn on_up(&mut self, pos: Position, now: Instant, out: &mut Vec<Gesture>) {
        let Some(press) = self.press.take() else {
            return;
        };

        if press.dragging {
            #[cfg(feature = "tracing")]
            tracing::trace!(x = pos.x, y = pos.y, "gesture.drag_end");
            out.push(Gesture::DragEnd {
                start: press.start,
                end: pos,
            });
            return;
        }

        let held = now.saturating_duration_since(press.at);
        if !press.long_press_fired
            && held < self.config.long_press_threshold
            && press.start.manhattan_distance(pos) <= u32::from(self.config.tap_tolerance)
        {
            out.push(Gesture::Tap { pos: press.start });
        }
    }

    fn cancel(&mut self, out: &mut Vec<Gesture>) {
        if let Some(press) = self.press.take()
            && press.dragging
        {
            #[cfg(feature = "tracing")]
            tracing::trace!("gesture.drag_cancel");
            out.push(Gesture::DragCancel);
        }
    }
}

fn delta_axis(from: u16, to: u16) -> i16 {
    let d = i32::from(to) - i32::from(from);
    d.clamp(i32::from(i16::MIN), i32::from(i16::MAX)) as i16
}
