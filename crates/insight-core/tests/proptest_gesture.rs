//! Property tests for gesture recognition over arbitrary pointer streams.

use std::time::Duration;

use insight_core::event::{Event, KeyCode, KeyEvent, PointerEvent};
use insight_core::gesture::GestureRecognizer;
use insight_core::semantic_event::Gesture;
use proptest::prelude::*;
use web_time::Instant;

#[derive(Debug, Clone)]
enum Input {
    Down(u16, u16),
    Drag(u16, u16),
    Up(u16, u16),
    Escape,
    FocusLost,
    Wait(u64),
}

fn input() -> impl Strategy<Value = Input> {
    prop_oneof![
        3 => (0u16..12, 0u16..12).prop_map(|(x, y)| Input::Down(x, y)),
        4 => (0u16..12, 0u16..12).prop_map(|(x, y)| Input::Drag(x, y)),
        3 => (0u16..12, 0u16..12).prop_map(|(x, y)| Input::Up(x, y)),
        1 => Just(Input::Escape),
        1 => Just(Input::FocusLost),
        2 => (1u64..800).prop_map(Input::Wait),
    ]
}

/// What one press has emitted so far.
#[derive(Debug, Default)]
struct PressLog {
    active: bool,
    started: bool,
    ended: bool,
    tapped: bool,
    long_pressed: bool,
}

impl PressLog {
    fn begin(&mut self) {
        *self = Self {
            active: true,
            ..Self::default()
        };
    }

    fn record(&mut self, gesture: &Gesture) -> Result<(), TestCaseError> {
        match gesture {
            Gesture::DragStart { .. } => {
                prop_assert!(!self.started, "second DragStart in one press");
                self.started = true;
            }
            Gesture::DragMove { .. } => prop_assert!(self.started, "DragMove before DragStart"),
            Gesture::DragEnd { .. } => {
                prop_assert!(self.started, "DragEnd without DragStart");
                prop_assert!(!self.tapped, "DragEnd after Tap");
                self.ended = true;
            }
            Gesture::DragCancel => prop_assert!(self.started, "DragCancel without a drag"),
            Gesture::Tap { .. } => {
                prop_assert!(!self.started && !self.ended, "Tap after a drag");
                prop_assert!(!self.long_pressed, "Tap after LongPress");
                self.tapped = true;
            }
            Gesture::LongPress { .. } => {
                prop_assert!(!self.started, "LongPress during a drag");
                prop_assert!(!self.long_pressed, "second LongPress");
                self.long_pressed = true;
            }
        }
        Ok(())
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn one_outcome_per_press(inputs in prop::collection::vec(input(), 1..80)) {
        let mut recognizer = GestureRecognizer::default();
        let mut now = Instant::now();
        let mut log = PressLog::default();

        for input in inputs {
            let (event, ends_press) = match input {
                Input::Down(x, y) => {
                    log.begin();
                    (Event::Pointer(PointerEvent::down(x, y)), false)
                }
                Input::Drag(x, y) => {
                    if !log.active {
                        log.begin();
                    }
                    (Event::Pointer(PointerEvent::drag(x, y)), false)
                }
                Input::Up(x, y) => (Event::Pointer(PointerEvent::up(x, y)), true),
                Input::Escape => (Event::Key(KeyEvent::new(KeyCode::Escape)), true),
                Input::FocusLost => (Event::Focus(false), true),
                Input::Wait(ms) => {
                    now += Duration::from_millis(ms);
                    if let Some(gesture) = recognizer.check_long_press(now) {
                        prop_assert!(log.active, "LongPress with no press");
                        log.record(&gesture)?;
                    }
                    continue;
                }
            };

            for gesture in recognizer.process(&event, now) {
                prop_assert!(log.active, "{:?} with no press", gesture);
                log.record(&gesture)?;
            }
            prop_assert_eq!(recognizer.is_dragging(), log.active && log.started && !ends_press);
            if ends_press {
                log = PressLog::default();
            }
        }
    }
}
