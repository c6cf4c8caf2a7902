use chrono::{Datelike, Local, NaiveDate};
use std::fmt;

/// First through last day of one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl MonthWindow {
    /// `YYYY-MM`
    pub fn label(&self) -> String {
        self.start.format("%Y-%m").to_string()
    }
}

impl fmt::Display for MonthWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}

/// Walks backward one calendar month at a time, starting with the month before
/// `today`, and stops at the first window that does not end after `earliest`.
///
/// The month containing `earliest` is the last one emitted when it ends after
/// `earliest`; the month before it never is. With the default floor of
/// 2020-01-27 the walk ends at 2020-01, not 2019-12.
#[derive(Debug, Clone)]
pub struct MonthWindows {
    /// First day of the most recently emitted month (or of today's month).
    cursor: NaiveDate,
    earliest: NaiveDate,
}

impl MonthWindows {
    pub fn starting_from(today: NaiveDate, earliest: NaiveDate) -> Self {
        Self {
            cursor: today.with_day(1).unwrap_or(today),
            earliest,
        }
    }

    pub fn from_now(earliest: NaiveDate) -> Self {
        Self::starting_from(Local::now().date_naive(), earliest)
    }
}

impl Iterator for MonthWindows {
    type Item = MonthWindow;

    fn next(&mut self) -> Option<MonthWindow> {
        let end = self.cursor.pred_opt()?;
        if end <= self.earliest {
            return None;
        }
        let start = end.with_day(1)?;
        self.cursor = start;
        Some(MonthWindow { start, end })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn floor() -> NaiveDate {
        date(2020, 1, 27)
    }

    #[test]
    fn starts_with_previous_month() {
        let first = MonthWindows::starting_from(date(2024, 3, 15), floor())
            .next()
            .unwrap();
        assert_eq!(first.start, date(2024, 2, 1));
        assert_eq!(first.end, date(2024, 2, 29));
        assert_eq!(first.label(), "2024-02");
        assert_eq!(first.to_string(), "2024-02-01 - 2024-02-29");
    }

    #[test]
    fn crosses_year_boundary() {
        let windows: Vec<_> = MonthWindows::starting_from(date(2024, 2, 1), floor())
            .take(2)
            .collect();
        assert_eq!(windows[0].start, date(2024, 1, 1));
        assert_eq!(windows[0].end, date(2024, 1, 31));
        assert_eq!(windows[1].start, date(2023, 12, 1));
        assert_eq!(windows[1].end, date(2023, 12, 31));
    }

    #[test]
    fn windows_are_whole_contiguous_months() {
        let windows: Vec<_> = MonthWindows::starting_from(date(2025, 7, 4), floor()).collect();
        assert!(!windows.is_empty());
        for w in &windows {
            assert_eq!(w.start.day(), 1);
            assert_eq!(w.end.succ_opt().unwrap().day(), 1);
            assert_eq!(w.start.month(), w.end.month());
        }
        for pair in windows.windows(2) {
            assert_eq!(pair[1].end.succ_opt().unwrap(), pair[0].start);
            assert!(pair[1].end < pair[0].start);
        }
    }

    #[test]
    fn stops_at_floor_date() {
        let windows: Vec<_> = MonthWindows::starting_from(date(2020, 5, 10), floor()).collect();
        let labels: Vec<_> = windows.iter().map(MonthWindow::label).collect();
        assert_eq!(labels, ["2020-04", "2020-03", "2020-02", "2020-01"]);
        assert!(windows.iter().all(|w| w.end > floor()));
    }

    #[test]
    fn month_before_default_floor_is_never_requested() {
        let last = MonthWindows::starting_from(date(2026, 10, 19), floor())
            .last()
            .unwrap();
        assert_eq!(last.label(), "2020-01");
        assert_eq!(last.end, date(2020, 1, 31));
    }

    #[test]
    fn window_ending_on_floor_is_excluded() {
        let windows: Vec<_> =
            MonthWindows::starting_from(date(2021, 4, 2), date(2021, 1, 31)).collect();
        let labels: Vec<_> = windows.iter().map(MonthWindow::label).collect();
        assert_eq!(labels, ["2021-03", "2021-02"]);
    }

    #[test]
    fn empty_when_previous_month_ends_before_floor() {
        assert_eq!(
            MonthWindows::starting_from(date(2020, 1, 20), floor()).count(),
            0
        );
    }

    #[test]
    fn restartable_from_the_same_reference() {
        let a: Vec<_> = MonthWindows::starting_from(date(2022, 9, 30), floor()).collect();
        let b: Vec<_> = MonthWindows::starting_from(date(2022, 9, 1), floor()).collect();
        assert_eq!(a, b);
        assert_eq!(a.len(), 32);
    }
}
