#![forbid(unsafe_code)]

//! Statistics: four placeholder bars scaled to the sample maximum.

use insight_core::geometry::Rect;
use insight_widgets::bar_chart::BarChart;

use super::{HelpEntry, Input, Route, Screen};
use crate::app::Cmd;
use crate::frame::{Frame, MUTED, TextStyle, WHITE};

const BAR_WIDTH: u16 = 3;
const BAR_GAP: u16 = 4;
const MAX_TRACK_ROWS: u16 = 15;

pub struct StatsScreen {
    chart: BarChart,
}

impl StatsScreen {
    #[must_use]
    pub fn new() -> Self {
        Self {
            chart: BarChart::default(),
        }
    }
}

impl Default for StatsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for StatsScreen {
    fn route(&self) -> Route {
        Route::Stats
    }

    fn update(&mut self, _input: &Input) -> Cmd {
        Cmd::None
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        let top = area.y + 1;
        frame.print_centered(area, top, "Statistics", TextStyle::fg(WHITE).bold());

        // Title, gap, track, value label.
        let track_rows = area.height.saturating_sub(5).min(MAX_TRACK_ROWS);
        if track_rows == 0 {
            return;
        }
        let track_top = top + 2;
        let track_bottom = track_top + track_rows;

        let count = self.chart.values().len() as u16;
        let total = count * BAR_WIDTH + count.saturating_sub(1) * BAR_GAP;
        let x0 = area.x + area.width.saturating_sub(total) / 2;

        let heights = self.chart.heights_in_rows(track_rows);
        for (i, (&value, &height)) in self.chart.values().iter().zip(&heights).enumerate() {
            let x = x0 + i as u16 * (BAR_WIDTH + BAR_GAP);
            frame.fill_bg(Rect::new(x, track_top, BAR_WIDTH, track_rows), MUTED);
            frame.fill_bg(Rect::new(x, track_bottom - height, BAR_WIDTH, height), WHITE);
            let label = format!("{}", value as i64);
            frame.print(x + 1, track_bottom, &label, TextStyle::fg(WHITE));
        }
    }

    fn keybindings(&self) -> Vec<HelpEntry> {
        Vec::new()
    }

    fn title(&self) -> &'static str {
        "Statistics"
    }
}
