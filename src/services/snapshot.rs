//! Per-request orchestration: fresh reads, enrichment, classification.
//!
//! Each query recomputes everything from the current file/network state;
//! there is no in-process cache and no background refresh. Only the two
//! source-level failures ever fail the query (see the error taxonomy);
//! every enrichment degrades to "Unknown".

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::hebcal::HebcalClient;
use crate::models::ZmanimResult;
use crate::services::classifier::{classify, Enrichment, PeriodSnapshot};
use crate::services::projector::{next_event, Projection};
use crate::store::{MinchaOverrideStore, WeeklyReadingStore, ZmanimStore};

/// Build the display snapshot for an explicit moment.
pub async fn snapshot_at(
    now: DateTime<Tz>,
    zmanim: &ZmanimStore,
    mincha: &MinchaOverrideStore,
    reading: &WeeklyReadingStore,
    hebcal: &HebcalClient,
) -> ZmanimResult<PeriodSnapshot> {
    let (times, location) = zmanim.load()?;
    let today = now.date_naive();

    let enrich = Enrichment {
        mincha_override: mincha.load_for(today).map(|record| record.mincha_time),
        hebrew_date: Some(
            hebcal
                .hebrew_date_today(today)
                .await
                .unwrap_or_else(|| "Unknown".to_string()),
        ),
        weekly_reading: Some(
            reading
                .load()
                .map(|r| r.parasha)
                .unwrap_or_else(|| "Unknown".to_string()),
        ),
    };

    classify(now, &times, &location, &enrich)
}

/// Build the display snapshot for the current moment.
pub async fn current_snapshot(
    tz: Tz,
    zmanim: &ZmanimStore,
    mincha: &MinchaOverrideStore,
    reading: &WeeklyReadingStore,
    hebcal: &HebcalClient,
) -> ZmanimResult<PeriodSnapshot> {
    snapshot_at(Utc::now().with_timezone(&tz), zmanim, mincha, reading, hebcal).await
}

/// Project the next upcoming time for an explicit moment.
pub fn projection_at(now: DateTime<Tz>, zmanim: &ZmanimStore) -> ZmanimResult<Projection> {
    let (times, _) = zmanim.load()?;
    next_event(now, &times)
}

/// Project the next upcoming time for the current moment.
pub fn current_projection(tz: Tz, zmanim: &ZmanimStore) -> ZmanimResult<Projection> {
    projection_at(Utc::now().with_timezone(&tz), zmanim)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono_tz::America::Chicago;
    use std::fs;

    fn write_zmanim(dir: &tempfile::TempDir) -> ZmanimStore {
        let path = dir.path().join("hebcal_zmanim.json");
        fs::write(
            &path,
            r#"{
                "location": {"title": "Milwaukee, WI"},
                "times": {
                    "sunrise": "2026-08-26T06:19:00-05:00",
                    "chatzot": "2026-08-26T12:58:00-05:00",
                    "minchaKetana": "2026-08-26T16:52:00-05:00",
                    "sunset": "2026-08-26T19:38:00-05:00",
                    "tzeit72min": "2026-08-26T20:50:00-05:00"
                }
            }"#,
        )
        .unwrap();
        ZmanimStore::new(path, Chicago)
    }

    #[tokio::test]
    async fn test_snapshot_degrades_all_enrichment_to_unknown() {
        let dir = tempfile::tempdir().unwrap();
        let zmanim = write_zmanim(&dir);
        let mincha = MinchaOverrideStore::new(dir.path().join("missing_mincha.json"));
        let reading = WeeklyReadingStore::new(dir.path().join("missing_parasha.json"));
        let mut server = mockito::Server::new_async().await;
        let _m = server.mock("GET", "/hebcal").with_status(500).create_async().await;
        let hebcal = HebcalClient::new(server.url(), "53216").unwrap();

        let now = Chicago.with_ymd_and_hms(2026, 8, 26, 15, 0, 0).unwrap();
        let snap = snapshot_at(now, &zmanim, &mincha, &reading, &hebcal)
            .await
            .unwrap();

        assert_eq!(snap.hebrew_date.as_deref(), Some("Unknown"));
        assert_eq!(snap.parasha.as_deref(), Some("Unknown"));
        assert_eq!(snap.location, "Milwaukee, WI");
        assert_eq!(snap.times[0].0, "Mincha Ketana");
    }

    #[test]
    fn test_projection_uses_fresh_file_state() {
        let dir = tempfile::tempdir().unwrap();
        let zmanim = write_zmanim(&dir);
        let now = Chicago.with_ymd_and_hms(2026, 8, 26, 19, 0, 0).unwrap();
        let projection = projection_at(now, &zmanim).unwrap();
        assert_eq!(projection.next.unwrap().label, "Sunset");
    }
}
