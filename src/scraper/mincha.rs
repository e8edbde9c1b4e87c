//! Locating today's Mincha time in the extracted calendar text.
//!
//! Calendar PDFs lay dates and times out unpredictably, so the search is
//! deliberately loose: find a line mentioning today's date in any of
//! several shapes, then look for a Mincha time on that line, shortly
//! before it (calendar grids often put times above dates), or shortly
//! after it. A document-wide match is the last resort before the
//! published summer default.

use chrono::{Datelike, NaiveDate};
use regex::Regex;

use crate::services::format;

/// Published default when the calendar yields nothing usable.
pub const SUMMER_FALLBACK: &str = "8:15 PM";

/// Lines to scan above/below a date hit. Grid layouts put the time near
/// the date but rarely on the same line.
const LINES_BEFORE: usize = 5;
const LINES_AFTER: usize = 10;

/// Search the calendar text for today's Mincha time.
///
/// The returned string is normalized to the canonical display form when
/// possible, and returned raw otherwise (the classifier re-validates it
/// before display). `None` means nothing Mincha-like was found at all.
pub fn find_mincha_time(text: &str, today: NaiveDate) -> Option<String> {
    let lines: Vec<&str> = text.lines().collect();
    let dates = date_patterns(today);
    let minchas = mincha_patterns();

    for (i, line) in lines.iter().enumerate() {
        if !dates.iter().any(|p| p.is_match(line)) {
            continue;
        }

        if let Some(time) = scan_line(line, &minchas) {
            return Some(normalize(time));
        }
        let before = i.saturating_sub(LINES_BEFORE)..i;
        let after = i + 1..(i + 1 + LINES_AFTER).min(lines.len());
        for j in before.chain(after) {
            if let Some(time) = scan_line(lines[j], &minchas) {
                return Some(normalize(time));
            }
        }
    }

    // Any Mincha time anywhere in the document, as a last resort.
    let anywhere = Regex::new(r"(?i)mincha\s*:?\s*(\d{1,2}:\d{2}\s*[ap]m)").expect("static pattern");
    anywhere
        .captures(text)
        .map(|caps| normalize(caps[1].trim().to_string()))
}

/// Date shapes seen across calendar revisions: "August 30", "30 August",
/// "August 30, 2026", and the bare day number of grid cells.
fn date_patterns(today: NaiveDate) -> Vec<Regex> {
    let month = today.format("%B").to_string();
    let day = today.day();
    [
        format!(r"(?i)\b{month}\s+{day}\b"),
        format!(r"(?i)\b{day}\s+{month}\b"),
        format!(r"(?i)\b{month}\s+{day},?\s+\d{{4}}\b"),
        format!(r"\b{day}\b"),
    ]
    .iter()
    .map(|p| Regex::new(p).expect("static pattern"))
    .collect()
}

struct MinchaPattern {
    regex: Regex,
    /// Bare patterns capture no meridiem; Mincha is always afternoon.
    assume_pm: bool,
    /// Dual-time entries ("5:55/7:20") mean early/late Mincha; the later
    /// one is the relevant capture.
    dual: bool,
}

fn mincha_patterns() -> Vec<MinchaPattern> {
    let pattern = |re: &str, assume_pm, dual| MinchaPattern {
        regex: Regex::new(re).expect("static pattern"),
        assume_pm,
        dual,
    };
    vec![
        pattern(r"(?i)mincha\s*:?\s*(\d{1,2}:\d{2})\s*/\s*(\d{1,2}:\d{2})", true, true),
        pattern(r"(?i)mincha\s*:?\s*(\d{1,2}:\d{2}\s*[ap]m)", false, false),
        pattern(r"(?i)(\d{1,2}:\d{2}\s*[ap]m)\s*mincha", false, false),
        pattern(r"(?i)mincha[-\s:]*(\d{1,2}:\d{2})\b", true, false),
    ]
}

fn scan_line(line: &str, patterns: &[MinchaPattern]) -> Option<String> {
    for p in patterns {
        if let Some(caps) = p.regex.captures(line) {
            let time = if p.dual { &caps[2] } else { &caps[1] };
            let time = time.trim();
            return Some(if p.assume_pm {
                format!("{} PM", time)
            } else {
                time.to_string()
            });
        }
    }
    None
}

fn normalize(raw: String) -> String {
    format::normalize_clock(&raw).unwrap_or(raw)
}
