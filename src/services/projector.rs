//! Next-event projection across the canonical full-day timeline.
//!
//! Independent of the classifier's displayed subsets: the projector walks
//! one ordered sequence spanning the whole day and reports the first
//! moment strictly after "now". Period and next-event are reported
//! together but derived from separate rules.

use chrono::{DateTime, Datelike, Weekday};
use chrono_tz::Tz;

use crate::models::{Period, TimeSet, ZmanimResult};
use crate::services::classifier::{period_for, resolve_window};
use crate::services::format;

/// The single soonest upcoming named time.
#[derive(Debug, Clone, PartialEq)]
pub struct NextEvent {
    pub label: String,
    pub time: String,
    pub at: DateTime<Tz>,
}

/// Projection result: current period plus the next tracked moment, if any
/// remains. `next: None` is the normal end-of-day terminal state.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    pub period: Period,
    pub next: Option<NextEvent>,
}

/// Project the next upcoming time from the canonical day ordering.
///
/// Entries whose underlying value is absent are simply not tracked.
/// Candle Lighting participates only on Friday.
pub fn next_event(now: DateTime<Tz>, times: &TimeSet) -> ZmanimResult<Projection> {
    let weekday = now.weekday();
    let period = period_for(resolve_window(now, times)?, weekday);

    let next = day_sequence(times, weekday)
        .into_iter()
        .find(|(_, at)| *at > now)
        .map(|(label, at)| NextEvent {
            label: label.to_string(),
            time: format::clock(&at),
            at,
        });

    Ok(Projection { period, next })
}

/// The canonical ordered sequence of (label, instant) pairs for one day,
/// with absent moments dropped.
fn day_sequence(times: &TimeSet, weekday: Weekday) -> Vec<(&'static str, DateTime<Tz>)> {
    let candidates = [
        ("Shema (MGA)", times.sof_zman_shma_mga),
        ("Shema (GR'A)", times.sof_zman_shma),
        ("Tefilla (GR'A)", times.sof_zman_tfilla),
        ("Chatzos", times.chatzot),
        ("Mincha Ketana", times.mincha_ketana),
        (
            "Candle Lighting",
            if weekday == Weekday::Fri {
                times.candle_lighting()
            } else {
                None
            },
        ),
        ("Sunset", times.sunset),
        ("Tzeis (72 min)", times.tzeit_72min),
        ("Chatzos Night", times.chatzot_night),
    ];

    candidates
        .into_iter()
        .filter_map(|(label, time)| time.map(|t| (label, t)))
        .collect()
}
