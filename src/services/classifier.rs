//! Period classification: the window/selection engine.
//!
//! Given "now" and the day's [`TimeSet`], decide which liturgical period
//! it is and which named times are worth showing. The four windows are an
//! explicit ordered list of guard → window entries evaluated first-match,
//! so the priority order is auditable and each branch unit-testable.

use chrono::{DateTime, Datelike, Weekday};
use chrono_tz::Tz;

use crate::models::{Period, TimeSet, ZmanimResult};
use crate::services::format;

/// Optional per-query enrichment supplied by the external collaborators.
///
/// Every field may be absent; absence never fails classification.
#[derive(Debug, Clone, Default)]
pub struct Enrichment {
    /// Raw scraped Mincha time for today, substituted into the
    /// Mincha Ketana slot when it parses as a clock time.
    pub mincha_override: Option<String>,
    /// Hebrew date string for today ("Unknown" when the lookup failed).
    pub hebrew_date: Option<String>,
    /// This week's Torah reading ("Unknown" when the cache is empty).
    pub weekly_reading: Option<String>,
}

/// The classification result: everything the display needs for one query.
/// Produced fresh every time, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodSnapshot {
    pub period: Period,
    pub current_time: String,
    pub date: String,
    /// Ordered (label, formatted time) pairs for the current window.
    pub times: Vec<(String, String)>,
    pub location: String,
    pub hebrew_date: Option<String>,
    pub parasha: Option<String>,
}

/// The now-relative window of the day, before weekday renaming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Window {
    Morning,
    Afternoon,
    Evening,
    /// Safety net for a time set with no sunrise where no other guard
    /// matched. Unreachable with well-formed data; kept deliberately.
    MorningFallback,
}

/// Resolve which window `now` falls into.
///
/// Fails only when `chatzot` or `sunset` is absent.
pub(crate) fn resolve_window(now: DateTime<Tz>, times: &TimeSet) -> ZmanimResult<Window> {
    let (chatzot, sunset) = times.critical()?;

    let guards = [
        (
            times.sunrise.is_some_and(|sr| sr <= now) && now < chatzot,
            Window::Morning,
        ),
        (chatzot <= now && now < sunset, Window::Afternoon),
        (
            now >= sunset || times.sunrise.is_some_and(|sr| now < sr),
            Window::Evening,
        ),
        (true, Window::MorningFallback),
    ];

    for (hit, window) in guards {
        if hit {
            return Ok(window);
        }
    }
    unreachable!("final guard is unconditional")
}

/// Map a window to its weekday-renamed period.
pub(crate) fn period_for(window: Window, weekday: Weekday) -> Period {
    match window {
        Window::Morning => Period::morning(weekday),
        Window::Afternoon => Period::afternoon(weekday),
        Window::Evening => Period::evening(weekday),
        // The fallback reports plain "Morning" regardless of weekday.
        Window::MorningFallback => Period::Morning,
    }
}

/// Classify `now` against the day's time set.
///
/// Returns [`crate::models::ZmanimError::MissingCriticalTimes`] when
/// `chatzot` or `sunset` is absent; otherwise always succeeds, skipping
/// any displayed moment whose underlying value is missing.
pub fn classify(
    now: DateTime<Tz>,
    times: &TimeSet,
    location: &str,
    enrich: &Enrichment,
) -> ZmanimResult<PeriodSnapshot> {
    let window = resolve_window(now, times)?;
    let weekday = now.weekday();

    let entries = match window {
        Window::Morning | Window::MorningFallback => morning_times(times),
        Window::Afternoon => afternoon_times(times, weekday, enrich.mincha_override.as_deref()),
        Window::Evening => evening_times(times, weekday),
    };

    Ok(PeriodSnapshot {
        period: period_for(window, weekday),
        current_time: format::clock(&now),
        date: format::date(&now),
        times: entries,
        location: location.to_string(),
        hebrew_date: enrich.hebrew_date.clone(),
        parasha: enrich.weekly_reading.clone(),
    })
}

/// Shema/Tefilla deadlines plus Chatzos, in fixed order.
fn morning_times(times: &TimeSet) -> Vec<(String, String)> {
    collect(&[
        ("Shema (MGA)", times.sof_zman_shma_mga),
        ("Shema (GR'A)", times.sof_zman_shma),
        ("Tefilla (GR'A)", times.sof_zman_tfilla),
        ("Chatzos", times.chatzot),
    ])
}

/// The afternoon set differs per weekday in both cardinality and order;
/// this is an intentional liturgical difference, not an accident.
fn afternoon_times(
    times: &TimeSet,
    weekday: Weekday,
    mincha_override: Option<&str>,
) -> Vec<(String, String)> {
    let mut entries = Vec::new();

    if let Some(display) = mincha_display(times, mincha_override) {
        entries.push(("Mincha Ketana".to_string(), display));
    }

    match weekday {
        Weekday::Sat => {
            entries.extend(collect(&[
                ("Sunset", times.sunset),
                ("Maariv", times.maariv()),
                ("Havdalah", times.havdalah()),
            ]));
        }
        Weekday::Fri => {
            entries.extend(collect(&[
                ("Candle Lighting", times.candle_lighting()),
                ("Sunset", times.sunset),
            ]));
        }
        _ => {
            entries.extend(collect(&[("Sunset", times.sunset)]));
        }
    }

    entries
}

fn evening_times(times: &TimeSet, weekday: Weekday) -> Vec<(String, String)> {
    if weekday == Weekday::Sat {
        collect(&[
            ("Havdalah", times.havdalah()),
            ("Latest Maleve Malka", times.chatzot_night),
        ])
    } else {
        collect(&[
            ("Tzeis (72 min)", times.tzeit_72min),
            ("Chatzos Night", times.chatzot_night),
        ])
    }
}

/// The Mincha Ketana slot: a parseable override wins, otherwise the time
/// set's own value; an unparseable override falls back silently.
fn mincha_display(times: &TimeSet, mincha_override: Option<&str>) -> Option<String> {
    mincha_override
        .and_then(format::normalize_clock)
        .or_else(|| times.mincha_ketana.map(|t| format::clock(&t)))
}

fn collect(candidates: &[(&str, Option<DateTime<Tz>>)]) -> Vec<(String, String)> {
    candidates
        .iter()
        .filter_map(|(label, time)| time.map(|t| (label.to_string(), format::clock(&t))))
        .collect()
}
