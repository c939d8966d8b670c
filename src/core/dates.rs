//! Strict `YYYY-MM-DD` date handling.

use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// Four-digit year, two-digit month and day, all zero padded.
const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Parse a strict `YYYY-MM-DD` date.
///
/// Anything other than ten bytes of digits with `-` at positions 4 and 7 is
/// rejected up front; `[year]` alone would accept a leading sign.
pub fn parse_date(s: &str) -> Option<Date> {
    let shape_ok = s.len() == 10
        && s.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !shape_ok {
        return None;
    }
    Date::parse(s, DATE_FORMAT).ok()
}

/// Format a date as `YYYY-MM-DD`.
pub fn format_date(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}
