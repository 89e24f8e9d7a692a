//! Relative due-date resolution.
//!
//! # Responsibility
//! - Map relative date keywords in a phrase to a concrete calendar date.
//!
//! # Invariants
//! - No hidden clock: the reference date is always supplied by the caller.
//! - At most one date per phrase; cue priority is
//!   today > tomorrow > next week > weekend > weekday name.
//! - A weekday name always resolves strictly after the reference date.
//! - `weekend` resolves to the reference date itself when it is a Saturday.

use crate::parse::lexicon::WEEKDAY_NAMES;
use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Relative date keyword recognised in a phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateCue {
    Today,
    Tomorrow,
    NextWeek,
    Weekend,
    /// Next occurrence of the weekday, never the same day.
    Weekday(Weekday),
}

impl DateCue {
    /// Resolves this cue against `reference`.
    ///
    /// Returns `None` only when the result would overflow the calendar range.
    pub fn resolve(self, reference: NaiveDate) -> Option<NaiveDate> {
        match self {
            Self::Today => Some(reference),
            Self::Tomorrow => reference.checked_add_days(Days::new(1)),
            Self::NextWeek => reference.checked_add_days(Days::new(7)),
            Self::Weekend => {
                reference.checked_add_days(Days::new(days_until(reference.weekday(), Weekday::Sat)))
            }
            Self::Weekday(target) => {
                let ahead = match days_until(reference.weekday(), target) {
                    0 => 7,
                    days => days,
                };
                reference.checked_add_days(Days::new(ahead))
            }
        }
    }
}

/// Finds the highest-priority date cue in `text`, case-insensitively.
///
/// When several weekday names appear, the one mentioned first wins.
pub fn detect_date_cue(text: &str) -> Option<DateCue> {
    let lowered = text.to_lowercase();

    if lowered.contains("today") {
        return Some(DateCue::Today);
    }
    if lowered.contains("tomorrow") {
        return Some(DateCue::Tomorrow);
    }
    if lowered.contains("next week") {
        return Some(DateCue::NextWeek);
    }
    if lowered.contains("weekend") {
        return Some(DateCue::Weekend);
    }

    WEEKDAY_NAMES
        .iter()
        .filter_map(|(name, weekday)| lowered.find(*name).map(|at| (at, *weekday)))
        .min_by_key(|(at, _)| *at)
        .map(|(_, weekday)| DateCue::Weekday(weekday))
}

/// Resolves the due date implied by `text` relative to `reference`.
///
/// Returns `None` when no keyword is present; this is an ordinary outcome.
pub fn resolve_due_date(text: &str, reference: NaiveDate) -> Option<NaiveDate> {
    detect_date_cue(text).and_then(|cue| cue.resolve(reference))
}

fn days_until(from: Weekday, to: Weekday) -> u64 {
    let from = u64::from(from.num_days_from_monday());
    let to = u64::from(to.num_days_from_monday());
    (to + 7 - from) % 7
}
