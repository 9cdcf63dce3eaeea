#![forbid(unsafe_code)]

//! Home screen: header chrome over the pull-up schedule panel.
//!
//! ```text
//!  👤              Home              ⊕      header (hidden while open)
//!               ━━━━━━━━━━                  drag handle
//!   Today's Schedule                        content (or month calendar)
//!   1. 3 - 4 Physics: Laws of Motion
//!   ...
//! ```
//!
//! The panel area is everything below the header. Its frosted background is
//! translated down by the displayed offset while the handle and content stay
//! anchored to the top, so opening the panel uncovers the calendar on the
//! gradient.
//!
//! The panel height is measured in `view` and fed to the panel at the start
//! of the next `update` or `tick`.

use std::cell::Cell;
use std::time::Duration;

use insight_core::event::KeyCode;
use insight_core::geometry::Rect;
use insight_core::semantic_event::Gesture;
use insight_widgets::calendar::{MonthGrid, WEEKDAY_HEADER};
use insight_widgets::schedule;
use insight_widgets::{PanelContent, PanelMotion, PullUpPanel};

use super::{HelpEntry, Input, Route, Screen, contains};
use crate::app::Cmd;
use crate::frame::{Frame, GLASS, INK, TextStyle, WHITE};

const HEADER_ROWS: u16 = 3;
const HANDLE_WIDE: &str = "━━━━━━━━━━";
const HANDLE_NARROW: &str = "━━━━━━";
const DAY_COLUMN: u16 = 4;

#[derive(Debug, Clone, Copy, Default)]
struct HomeLayout {
    profile: Rect,
    plus: Rect,
    panel: Rect,
    handle: Rect,
}

pub struct HomeScreen {
    panel: PullUpPanel,
    month: MonthGrid,
    /// The current pointer drag started inside the panel.
    dragging_panel: bool,
    layout: Cell<HomeLayout>,
}

impl HomeScreen {
    #[must_use]
    pub fn new(motion: PanelMotion) -> Self {
        Self::with_month(motion, MonthGrid::current())
    }

    #[must_use]
    pub fn with_month(motion: PanelMotion, month: MonthGrid) -> Self {
        Self {
            panel: PullUpPanel::new(motion),
            month,
            dragging_panel: false,
            layout: Cell::new(HomeLayout::default()),
        }
    }

    #[must_use]
    pub fn panel(&self) -> &PullUpPanel {
        &self.panel
    }

    fn sync_geometry(&mut self) {
        let height = self.layout.get().panel.height;
        self.panel.set_container_height(f64::from(height));
    }

    fn chrome_visible(&self) -> bool {
        self.panel.chrome_opacity() > 0.0
    }

    fn handle_gesture(&mut self, gesture: &Gesture) -> Cmd {
        let layout = self.layout.get();
        match gesture {
            Gesture::Tap { pos } => {
                if self.chrome_visible() && contains(layout.profile, *pos) {
                    return Cmd::Push(Route::Settings);
                }
                if self.chrome_visible() && contains(layout.plus, *pos) {
                    return Cmd::Push(Route::Menu);
                }
                if contains(layout.handle, *pos) {
                    self.panel.tap_handle();
                }
            }
            Gesture::DragStart { pos } => {
                if contains(layout.panel, *pos) {
                    self.dragging_panel = true;
                    self.panel.begin_drag();
                }
            }
            Gesture::DragMove { delta, .. } => {
                if self.dragging_panel {
                    self.panel.drag_by(f64::from(delta.1));
                }
            }
            Gesture::DragEnd { .. } => {
                if std::mem::take(&mut self.dragging_panel) {
                    self.panel.end_drag();
                }
            }
            Gesture::DragCancel => {
                if std::mem::take(&mut self.dragging_panel) {
                    self.panel.cancel_drag();
                }
            }
            Gesture::LongPress { .. } => {}
        }
        Cmd::None
    }

    fn view_header(&self, frame: &mut Frame, area: Rect, layout: &mut HomeLayout) {
        if !self.chrome_visible() || area.height == 0 {
            return;
        }
        let y = area.y + 1;
        let style = TextStyle::fg(WHITE).bold();
        let end = frame.print(area.x + 2, y, "👤", style);
        layout.profile = Rect::new(area.x + 2, y, end - (area.x + 2), 1);
        frame.print_centered(area, y, "Home", style);
        let plus_x = area.right().saturating_sub(4);
        let end = frame.print(plus_x, y, "⊕", style);
        layout.plus = Rect::new(plus_x, y, end.saturating_sub(plus_x).max(1), 1);
    }

    fn view_schedule(&self, frame: &mut Frame, body: Rect, glass_top: u16) {
        let ink = |y: u16| if y >= glass_top { INK } else { WHITE };
        let mut y = body.y;
        if y >= body.bottom() {
            return;
        }
        frame.print_clipped(body.x, y, schedule::TITLE, TextStyle::fg(ink(y)).bold(), body.right());
        y += 2;
        for line in schedule::lines() {
            if y >= body.bottom() {
                break;
            }
            frame.print_clipped(body.x, y, &line, TextStyle::fg(ink(y)), body.right());
            y += 1;
        }
    }

    fn view_calendar(&self, frame: &mut Frame, body: Rect, glass_top: u16) {
        let ink = |y: u16| if y >= glass_top { INK } else { WHITE };
        let grid_width = DAY_COLUMN * 7;
        let x0 = body.x + body.width.saturating_sub(grid_width) / 2;
        let mut y = body.y;

        let mut rows: Vec<(String, bool)> = vec![
            (self.month.title(), true),
            (String::new(), false),
            (header_row(), false),
        ];
        for week in self.month.weeks() {
            rows.push((week_row(week), false));
        }

        for (text, bold) in rows {
            if y >= body.bottom() {
                break;
            }
            let style = TextStyle::fg(ink(y));
            let style = if bold { style.bold() } else { style };
            if bold {
                frame.print_centered(body, y, &text, style);
            } else {
                frame.print_clipped(x0, y, &text, style, body.right());
            }
            y += 1;
        }

        // Highlight today.
        if let Some(today) = self.month.today() {
            for (row, week) in self.month.weeks().iter().enumerate() {
                if let Some(col) = week.iter().position(|d| *d == Some(today)) {
                    let ty = body.y + 3 + row as u16;
                    if ty < body.bottom() {
                        let tx = x0 + DAY_COLUMN * col as u16;
                        let text = format!("{today:>3}");
                        frame.print_clipped(tx, ty, &text, TextStyle::fg(ink(ty)).bold(), body.right());
                        frame.fill_bg(Rect::new(tx + 1, ty, 2, 1), crate::frame::MUTED);
                    }
                }
            }
        }
    }
}

fn header_row() -> String {
    WEEKDAY_HEADER
        .iter()
        .map(|d| format!("{d:>3} "))
        .collect::<String>()
}

fn week_row(week: &[Option<u32>; 7]) -> String {
    week.iter()
        .map(|d| match d {
            Some(day) => format!("{day:>3} "),
            None => "    ".to_string(),
        })
        .collect()
}

impl Screen for HomeScreen {
    fn route(&self) -> Route {
        Route::Home
    }

    fn update(&mut self, input: &Input) -> Cmd {
        self.sync_geometry();
        match input {
            Input::Gesture(gesture) => self.handle_gesture(gesture),
            Input::Key(key) => match key.code {
                KeyCode::Char(' ') | KeyCode::Enter => {
                    self.panel.tap_handle();
                    Cmd::None
                }
                KeyCode::Down if !self.panel.state().is_open => {
                    self.panel.tap_handle();
                    Cmd::None
                }
                KeyCode::Up if self.panel.state().is_open => {
                    self.panel.tap_handle();
                    Cmd::None
                }
                KeyCode::Char('p') if self.chrome_visible() => Cmd::Push(Route::Settings),
                KeyCode::Char('+') if self.chrome_visible() => Cmd::Push(Route::Menu),
                _ => Cmd::None,
            },
        }
    }

    fn tick(&mut self, dt: Duration) {
        self.sync_geometry();
        self.panel.tick(dt);
    }

    fn is_settled(&self) -> bool {
        !self.dragging_panel && self.panel.is_settled()
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        let mut layout = HomeLayout::default();
        let (header, panel) = area.split_top(HEADER_ROWS);
        self.view_header(frame, header, &mut layout);
        layout.panel = panel;

        let offset = self.panel.displayed_offset().round() as u16;
        let glass = panel.shifted_down(offset);
        frame.fill_bg(glass, GLASS);
        let glass_top = glass.y;

        if panel.height > 0 {
            let y = panel.y;
            let ink = if y >= glass_top { INK } else { WHITE };
            let wide = area.centered_row(y, crate::frame::display_width(HANDLE_WIDE), 1);
            let handle = if self.chrome_visible() { HANDLE_WIDE } else { HANDLE_NARROW };
            frame.print_centered(panel, y, handle, TextStyle::fg(ink).bold());
            layout.handle = wide;
        }

        let body = panel.inset(2, 0).split_top(2).1;
        match self.panel.content() {
            PanelContent::TodaySchedule => self.view_schedule(frame, body, glass_top),
            PanelContent::Calendar => self.view_calendar(frame, body, glass_top),
        }

        self.layout.set(layout);
    }

    fn keybindings(&self) -> Vec<HelpEntry> {
        let mut bindings = vec![
            HelpEntry {
                key: "Drag",
                action: "Pull panel",
            },
            HelpEntry {
                key: "Space",
                action: "Toggle panel",
            },
        ];
        if self.chrome_visible() {
            bindings.push(HelpEntry {
                key: "p",
                action: "Profile",
            });
            bindings.push(HelpEntry {
                key: "+",
                action: "Menu",
            });
        }
        bindings
    }

    fn title(&self) -> &'static str {
        "Home"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insight_core::semantic_event::Position;
    use insight_widgets::PanelPhase;

    const AREA: Rect = Rect::new(0, 0, 48, 23);

    fn screen() -> HomeScreen {
        HomeScreen::with_month(PanelMotion::default(), MonthGrid::month_of(2026, 10).unwrap())
    }

    fn render(screen: &HomeScreen) -> Frame {
        let mut frame = Frame::new(AREA.width, AREA.height + 1);
        screen.view(&mut frame, AREA);
        frame
    }

    fn settle(screen: &mut HomeScreen) {
        for _ in 0..60 {
            screen.tick(Duration::from_millis(16));
        }
    }

    fn gesture(g: Gesture) -> Input {
        Input::Gesture(g)
    }

    #[test]
    fn closed_panel_shows_schedule_and_chrome() {
        let screen = screen();
        let text = render(&screen).text();
        assert!(text.contains("Home"));
        assert!(text.contains("Today's Schedule"));
        assert!(text.contains("9. 8.30 - 9.30 History: Age of Guptas"));
        assert!(!text.contains("October 2026"));
    }

    #[test]
    fn panel_height_is_measured_from_layout() {
        let mut screen = screen();
        render(&screen);
        screen.tick(Duration::ZERO);
        assert_eq!(screen.panel().container_height(), 20.0);
    }

    #[test]
    fn handle_tap_opens_calendar_and_hides_chrome() {
        let mut screen = screen();
        render(&screen);
        let handle = screen.layout.get().handle;
        screen.update(&gesture(Gesture::Tap {
            pos: Position::new(handle.x + 1, handle.y),
        }));
        settle(&mut screen);

        assert_eq!(screen.panel().phase(), PanelPhase::Open);
        let text = render(&screen).text();
        assert!(text.contains("October 2026"));
        assert!(text.contains("Su  Mo  Tu"));
        assert!(!text.contains("Home"));
        assert!(!text.contains("Today's Schedule"));
    }

    #[test]
    fn drag_past_midpoint_snaps_open() {
        let mut screen = screen();
        render(&screen);
        let start = Position::new(10, 5);
        screen.update(&gesture(Gesture::DragStart { pos: start }));
        screen.update(&gesture(Gesture::DragMove {
            start,
            current: Position::new(10, 17),
            delta: (0, 12),
        }));
        assert_eq!(screen.panel().displayed_offset(), 12.0);
        screen.update(&gesture(Gesture::DragEnd {
            start,
            end: Position::new(10, 17),
        }));
        settle(&mut screen);
        assert_eq!(screen.panel().displayed_offset(), 15.0);
        assert!(screen.panel().state().is_open);
    }

    #[test]
    fn short_drag_snaps_back() {
        let mut screen = screen();
        render(&screen);
        let start = Position::new(10, 5);
        screen.update(&gesture(Gesture::DragStart { pos: start }));
        screen.update(&gesture(Gesture::DragMove {
            start,
            current: Position::new(10, 9),
            delta: (0, 4),
        }));
        screen.update(&gesture(Gesture::DragCancel));
        settle(&mut screen);
        assert_eq!(screen.panel().phase(), PanelPhase::Closed);
    }

    #[test]
    fn drag_outside_panel_is_ignored() {
        let mut screen = screen();
        render(&screen);
        let start = Position::new(10, 1);
        screen.update(&gesture(Gesture::DragStart { pos: start }));
        screen.update(&gesture(Gesture::DragMove {
            start,
            current: Position::new(10, 15),
            delta: (0, 14),
        }));
        assert_eq!(screen.panel().displayed_offset(), 0.0);
    }

    #[test]
    fn glass_moves_with_offset() {
        let mut screen = screen();
        render(&screen);
        screen.update(&Input::Key(insight_core::event::KeyEvent::new(KeyCode::Char(' '))));
        settle(&mut screen);
        let frame = render(&screen);
        // Panel starts at row 3; 15 rows of travel uncover rows 3..18.
        assert_ne!(frame.cell(0, 10).map(|c| c.bg), Some(GLASS));
        assert_eq!(frame.cell(0, 18).map(|c| c.bg), Some(GLASS));
    }

    #[test]
    fn profile_and_plus_navigate_while_closed() {
        let mut screen = screen();
        render(&screen);
        let layout = screen.layout.get();
        let tap = |r: Rect| gesture(Gesture::Tap {
            pos: Position::new(r.x, r.y),
        });
        assert_eq!(screen.update(&tap(layout.profile)), Cmd::Push(Route::Settings));
        assert_eq!(screen.update(&tap(layout.plus)), Cmd::Push(Route::Menu));
    }
}
