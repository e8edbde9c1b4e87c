//! The daily set of astronomical/halachic moments.
//!
//! An external provider writes one JSON file per day mapping moment names
//! (`sunrise`, `chatzot`, `sunset`, ...) to ISO-8601 timestamps. The set is
//! read-only for the lifetime of the serving process; every query re-reads
//! it from disk.

use std::collections::HashMap;

use chrono::{DateTime, Duration};
use chrono_tz::Tz;

use super::error::{ZmanimError, ZmanimResult};

/// One calendar day's worth of named moments, parsed into the display
/// timezone. Any moment may be absent; only `chatzot` and `sunset` are
/// mandatory for classification.
#[derive(Debug, Clone, Default)]
pub struct TimeSet {
    pub sunrise: Option<DateTime<Tz>>,
    pub sof_zman_shma_mga: Option<DateTime<Tz>>,
    pub sof_zman_shma: Option<DateTime<Tz>>,
    pub sof_zman_tfilla_mga: Option<DateTime<Tz>>,
    pub sof_zman_tfilla: Option<DateTime<Tz>>,
    pub chatzot: Option<DateTime<Tz>>,
    pub mincha_gedola: Option<DateTime<Tz>>,
    pub mincha_ketana: Option<DateTime<Tz>>,
    pub plag_ha_mincha: Option<DateTime<Tz>>,
    pub sunset: Option<DateTime<Tz>>,
    pub tzeit_72min: Option<DateTime<Tz>>,
    pub chatzot_night: Option<DateTime<Tz>>,
}

impl TimeSet {
    /// Build a time set from the raw `times` map of the provider file.
    ///
    /// Unknown keys are ignored; values that fail to parse are treated as
    /// absent rather than failing the whole set.
    pub fn from_raw(times: &HashMap<String, String>, tz: Tz) -> Self {
        let get = |key: &str| times.get(key).and_then(|s| parse_iso(s, tz));
        Self {
            sunrise: get("sunrise"),
            sof_zman_shma_mga: get("sofZmanShmaMGA"),
            sof_zman_shma: get("sofZmanShma"),
            sof_zman_tfilla_mga: get("sofZmanTfillaMGA"),
            sof_zman_tfilla: get("sofZmanTfilla"),
            chatzot: get("chatzot"),
            mincha_gedola: get("minchaGedola"),
            mincha_ketana: get("minchaKetana"),
            plag_ha_mincha: get("plagHaMincha"),
            sunset: get("sunset"),
            tzeit_72min: get("tzeit72min"),
            chatzot_night: get("chatzotNight"),
        }
    }

    /// The two moments nothing can be classified without.
    pub fn critical(&self) -> ZmanimResult<(DateTime<Tz>, DateTime<Tz>)> {
        match (self.chatzot, self.sunset) {
            (Some(chatzot), Some(sunset)) => Ok((chatzot, sunset)),
            _ => Err(ZmanimError::MissingCriticalTimes),
        }
    }

    /// Friday candle lighting: 18 minutes before sunset.
    pub fn candle_lighting(&self) -> Option<DateTime<Tz>> {
        self.sunset.map(|s| s - Duration::minutes(18))
    }

    /// Saturday-night Maariv: one hour after sunset.
    pub fn maariv(&self) -> Option<DateTime<Tz>> {
        self.sunset.map(|s| s + Duration::minutes(60))
    }

    /// Havdalah is an alias for nightfall at 72 minutes.
    pub fn havdalah(&self) -> Option<DateTime<Tz>> {
        self.tzeit_72min
    }
}

/// Parse an ISO-8601 timestamp (optionally `Z`-suffixed) into the display
/// timezone. Returns `None` on malformed input.
fn parse_iso(s: &str, tz: Tz) -> Option<DateTime<Tz>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&tz))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;
    use chrono_tz::America::Chicago;

    fn raw(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_parse_offset_and_zulu_forms() {
        let times = raw(&[
            ("sunset", "2026-08-29T19:45:00-05:00"),
            ("chatzot", "2026-08-29T17:57:00Z"),
        ]);
        let set = TimeSet::from_raw(&times, Chicago);

        let sunset = set.sunset.expect("sunset parsed");
        assert_eq!((sunset.hour(), sunset.minute()), (19, 45));

        // Zulu timestamps land on the same instant, rendered in local time.
        let chatzot = set.chatzot.expect("chatzot parsed");
        assert_eq!((chatzot.hour(), chatzot.minute()), (12, 57));
    }

    #[test]
    fn test_malformed_value_is_absent_not_fatal() {
        let times = raw(&[
            ("sunrise", "not-a-timestamp"),
            ("sunset", "2026-08-29T19:45:00-05:00"),
        ]);
        let set = TimeSet::from_raw(&times, Chicago);
        assert!(set.sunrise.is_none());
        assert!(set.sunset.is_some());
    }

    #[test]
    fn test_critical_requires_chatzot_and_sunset() {
        let only_sunset = TimeSet::from_raw(&raw(&[("sunset", "2026-08-29T19:45:00-05:00")]), Chicago);
        assert!(matches!(
            only_sunset.critical(),
            Err(ZmanimError::MissingCriticalTimes)
        ));

        let only_chatzot =
            TimeSet::from_raw(&raw(&[("chatzot", "2026-08-29T12:57:00-05:00")]), Chicago);
        assert!(matches!(
            only_chatzot.critical(),
            Err(ZmanimError::MissingCriticalTimes)
        ));

        let both = TimeSet::from_raw(
            &raw(&[
                ("chatzot", "2026-08-29T12:57:00-05:00"),
                ("sunset", "2026-08-29T19:45:00-05:00"),
            ]),
            Chicago,
        );
        assert!(both.critical().is_ok());
    }

    #[test]
    fn test_derived_moments() {
        let set = TimeSet::from_raw(
            &raw(&[
                ("sunset", "2026-08-29T19:45:00-05:00"),
                ("tzeit72min", "2026-08-29T20:57:00-05:00"),
            ]),
            Chicago,
        );

        let candles = set.candle_lighting().unwrap();
        assert_eq!((candles.hour(), candles.minute()), (19, 27));

        let maariv = set.maariv().unwrap();
        assert_eq!((maariv.hour(), maariv.minute()), (20, 45));

        assert_eq!(set.havdalah(), set.tzeit_72min);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let set = TimeSet::from_raw(
            &raw(&[
                ("alotHaShachar", "2026-08-29T04:55:00-05:00"),
                ("sunset", "2026-08-29T19:45:00-05:00"),
            ]),
            Chicago,
        );
        assert!(set.sunrise.is_none());
        assert!(set.sunset.is_some());
    }
}
