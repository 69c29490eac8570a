//! Deterministic date-keyed selection over fixed content tables.
//!
//! [`select`] maps a calendar date to `table[day_of_month % table.len()]`; no
//! randomness is involved, so every call on the same date agrees. A
//! [`DailyPick`] freezes that choice for the lifetime of one view; a date
//! rollover while the view stays open is not picked up.
use chrono::{Datelike, NaiveDate};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod analysis;
pub mod content;

pub use analysis::{AnalysisConfig, AnalysisFlow, AnalysisRequest, AnalysisStep};
pub use content::{
    AnalysisText, DreamSymbol, Fortune, ZodiacPoint, ANALYSIS_TEXTS, DREAM_SYMBOLS, FORTUNES,
    ZODIAC_POINTS,
};

/// Source of the current calendar date.
pub trait Calendar: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Local date from the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalCalendar;

impl Calendar for LocalCalendar {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// Always the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedCalendar(pub NaiveDate);

impl Calendar for FixedCalendar {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Index selected for `date` in a table of `len` entries, or `None` for an empty table.
pub fn selection_index(date: NaiveDate, len: usize) -> Option<usize> {
    (len > 0).then(|| date.day() as usize % len)
}

/// Entry of the day. Entries are opaque to the selector.
pub fn select<T>(date: NaiveDate, table: &[T]) -> Option<&T> {
    selection_index(date, table.len()).map(|i| &table[i])
}

/// Selection frozen at the start of a view's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DailyPick {
    /// Date the pick was computed for.
    pub date: NaiveDate,
    /// Selected index, `None` when the table was empty.
    pub index: Option<usize>,
}

impl DailyPick {
    pub fn compute<T>(date: NaiveDate, table: &[T]) -> Self {
        Self {
            date,
            index: selection_index(date, table.len()),
        }
    }

    /// Looks the pick up in `table`. The table must be the one the pick was computed for.
    pub fn get<'a, T>(&self, table: &'a [T]) -> Option<&'a T> {
        self.index.and_then(|i| table.get(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn same_date_selects_same_entry() {
        let table = ["a", "b", "c", "d", "e"];
        let today = date(2026, 10, 19);
        assert_eq!(select(today, &table), select(today, &table));
        assert_eq!(select(today, &table), Some(&"e"));
    }

    #[test]
    fn advancing_by_table_length_repeats_the_index() {
        let table = [0, 1, 2, 3, 4];
        assert_eq!(selection_index(date(2026, 3, 1), table.len()), Some(1));
        assert_eq!(selection_index(date(2026, 3, 6), table.len()), Some(1));
        for day in 1..=26 {
            let a = select(date(2026, 3, day), &table);
            let b = select(date(2026, 3, day + 5), &table);
            assert_eq!(a, b, "day {day}");
        }
    }

    #[test]
    fn consecutive_days_step_through_table() {
        let table = ["x", "y", "z"];
        let picks: Vec<_> = (1..=6)
            .map(|d| *select(date(2026, 1, d), &table).unwrap())
            .collect();
        assert_eq!(picks, vec!["y", "z", "x", "y", "z", "x"]);
    }

    #[test]
    fn empty_table_selects_nothing() {
        let table: [u8; 0] = [];
        assert_eq!(select(date(2026, 1, 1), &table), None);
        let pick = DailyPick::compute(date(2026, 1, 1), &table);
        assert_eq!(pick.index, None);
        assert_eq!(pick.get(&table), None);
    }

    #[test]
    fn daily_pick_matches_select() {
        let today = date(2026, 10, 19);
        let pick = DailyPick::compute(today, FORTUNES);
        assert_eq!(pick.get(FORTUNES), select(today, FORTUNES));
        assert_eq!(pick.date, today);
    }
}
