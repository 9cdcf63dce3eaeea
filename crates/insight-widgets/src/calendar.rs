#![forbid(unsafe_code)]

//! Month grid shown when the panel is open.
//!
//! Weeks start on Sunday. Days outside the month are `None`.

use chrono::{Datelike, Local, NaiveDate};

pub const WEEKDAY_HEADER: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    year: i32,
    month: u32,
    today: Option<u32>,
    weeks: Vec<[Option<u32>; 7]>,
}

impl MonthGrid {
    /// Grid for the month containing `date`, with `date` highlighted.
    #[must_use]
    pub fn for_date(date: NaiveDate) -> Self {
        let mut grid = Self::month_of(date.year(), date.month()).unwrap_or_else(|| Self {
            year: date.year(),
            month: date.month(),
            today: None,
            weeks: Vec::new(),
        });
        grid.today = Some(date.day());
        grid
    }

    /// Grid for the current local month.
    #[must_use]
    pub fn current() -> Self {
        Self::for_date(Local::now().date_naive())
    }

    /// Grid for `year`/`month`, or `None` when the month is out of range.
    #[must_use]
    pub fn month_of(year: i32, month: u32) -> Option<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let days = days_in_month(first)?;
        let lead = first.weekday().num_days_from_sunday() as usize;

        let mut weeks = Vec::with_capacity(6);
        let mut week = [None; 7];
        let mut col = lead;
        for day in 1..=days {
            week[col] = Some(day);
            col += 1;
            if col == 7 {
                weeks.push(week);
                week = [None; 7];
                col = 0;
            }
        }
        if col > 0 {
            weeks.push(week);
        }

        Some(Self {
            year,
            month,
            today: None,
            weeks,
        })
    }

    #[inline]
    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    #[must_use]
    pub fn month(&self) -> u32 {
        self.month
    }

    #[inline]
    #[must_use]
    pub fn today(&self) -> Option<u32> {
        self.today
    }

    #[inline]
    #[must_use]
    pub fn weeks(&self) -> &[[Option<u32>; 7]] {
        &self.weeks
    }

    /// `"October 2026"`.
    #[must_use]
    pub fn title(&self) -> String {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .map(|d| d.format("%B %Y").to_string())
            .unwrap_or_default()
    }
}

fn days_in_month(first: NaiveDate) -> Option<u32> {
    let next = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)?
    };
    u32::try_from(next.signed_duration_since(first).num_days()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn october_2026_layout() {
        // Oct 1 2026 is a Thursday.
        let grid = MonthGrid::month_of(2026, 10).unwrap();
        assert_eq!(grid.weeks().len(), 5);
        assert_eq!(grid.weeks()[0], [None, None, None, None, Some(1), Some(2), Some(3)]);
        assert_eq!(grid.weeks()[4][6], Some(31));
        assert_eq!(grid.title(), "October 2026");
    }

    #[test]
    fn february_leap_year() {
        let grid = MonthGrid::month_of(2024, 2).unwrap();
        let days: Vec<u32> = grid.weeks().iter().flatten().flatten().copied().collect();
        assert_eq!(days.len(), 29);
        assert_eq!(days.last(), Some(&29));
    }

    #[test]
    fn december_rolls_over() {
        let grid = MonthGrid::month_of(2025, 12).unwrap();
        let days = grid.weeks().iter().flatten().flatten().count();
        assert_eq!(days, 31);
    }

    #[test]
    fn invalid_month_is_none() {
        assert!(MonthGrid::month_of(2026, 13).is_none());
    }

    #[test]
    fn for_date_marks_today() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let grid = MonthGrid::for_date(date);
        assert_eq!(grid.today(), Some(18));
        assert_eq!(grid.month(), 10);
    }
}
