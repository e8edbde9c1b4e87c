//! Clock and date formatting shared by the classifier and projector.
//!
//! The display contract is a 12-hour clock with no leading zero on the
//! hour, zero-padded minutes, and an uppercase AM/PM suffix: `"7:51 PM"`.

use chrono::{DateTime, Datelike, NaiveTime, TimeZone, Timelike};

/// Format a moment as `"7:51 PM"`.
pub fn clock<Tz: TimeZone>(dt: &DateTime<Tz>) -> String {
    clock_parts(dt.hour12(), dt.minute())
}

/// Format a naive wall-clock time the same way.
pub fn clock_naive(t: &NaiveTime) -> String {
    clock_parts(t.hour12(), t.minute())
}

fn clock_parts((is_pm, hour): (bool, u32), minute: u32) -> String {
    format!("{}:{:02} {}", hour, minute, if is_pm { "PM" } else { "AM" })
}

/// Format a date as `"Saturday, August 30, 2026"` (no zero-padded day).
pub fn date<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!(
        "{}, {} {}, {}",
        dt.format("%A"),
        dt.format("%B"),
        dt.day(),
        dt.year()
    )
}

/// Parse a human clock string (`"7:30 PM"`, `"07:30pm"`, `"19:30"`).
///
/// Returns `None` when the string is not a recognizable clock time; callers
/// fall back to their canonical value in that case.
pub fn parse_clock(s: &str) -> Option<NaiveTime> {
    let cleaned = s.trim().to_uppercase();
    for fmt in ["%I:%M %p", "%I:%M%p", "%H:%M"] {
        if let Ok(t) = NaiveTime::parse_from_str(&cleaned, fmt) {
            return Some(t);
        }
    }
    None
}

/// Re-render a scraped clock string in the canonical display form.
pub fn normalize_clock(s: &str) -> Option<String> {
    parse_clock(s).map(|t| clock_naive(&t))
}
