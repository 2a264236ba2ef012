//! Field normalizers: date-format reconciliation and the future-date test.
//!
//! Source portals write deadlines every way imaginable — `12/31/2026`,
//! `December 31, 2026`, `12/31/26`, with or without a clock time. Everything
//! funnels through [`parse_date`] into canonical `YYYY-MM-DD`, and unknown
//! dates fail open: a listing is never dropped just because its deadline
//! could not be read.

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};

/// Pure date formats, tried in order. `%m/%d/%y` must precede `%m/%d/%Y`:
/// chrono's `%Y` accepts 1–4 digit years, so a two-digit year would
/// otherwise parse as year 26 AD. `%y` rejects four-digit input, so the
/// ambiguity only cuts one way.
const DATE_FORMATS: &[&str] = &[
    "%m/%d/%y",
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%Y-%m-%d",
];

/// Formats carrying a clock time; only the date part is kept.
const DATETIME_FORMATS: &[&str] = &["%m/%d/%Y %I:%M%p", "%m/%d/%Y %I:%M %p"];

/// Try the known date formats against trimmed input; first match wins.
/// Matches that land before year 1000 are treated as misreads of an
/// unrecognized short-year format and rejected.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(text, fmt) {
            if d.year() >= 1000 {
                return Some(d);
            }
        }
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, fmt) {
            if dt.year() >= 1000 {
                return Some(dt.date());
            }
        }
    }
    None
}

/// True iff the date is strictly later than today. Unknown dates are kept
/// (fail open), and today itself is not future.
///
/// Wall-clock convenience over [`is_future_as_of`]; the extractors call
/// the explicit form with the run date so their output is deterministic.
pub fn is_future(date: Option<NaiveDate>) -> bool {
    is_future_as_of(date, Local::now().date_naive())
}

/// [`is_future`] with an explicit "today", for deterministic callers.
pub fn is_future_as_of(date: Option<NaiveDate>, today: NaiveDate) -> bool {
    match date {
        None => true,
        Some(d) => d > today,
    }
}

/// Bound a title to `max` characters on a char boundary.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        text.chars().take(max).collect()
    }
}
