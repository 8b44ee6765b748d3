//! Statement date parsing.

use chrono::{NaiveDate, NaiveDateTime};

/// Row date layout, e.g. `15/03/2023`
pub const DATE_FORMAT: &str = "%d/%m/%Y";
/// Same, with a time of day: `15/03/2023 10:00:00`
pub const DATE_FORMAT_ALT: &str = "%d/%m/%Y %H:%M:%S";

/// Parse a leading row token as a calendar date, dropping any time of day.
///
/// Returns `None` when neither layout fits; callers treat that as "this line
/// is not a transaction row".
pub fn parse_statement_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok().or_else(|| {
        NaiveDateTime::parse_from_str(s, DATE_FORMAT_ALT)
            .ok()
            .map(|dt| dt.date())
    })
}
