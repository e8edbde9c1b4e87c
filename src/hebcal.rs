//! Remote Hebrew-calendar lookups.
//!
//! Two read-only queries against the public calendar API: today's Hebrew
//! date (display enrichment) and the week's Torah reading (refreshed on a
//! schedule by the `update-parasha` binary). The Hebrew-date lookup
//! degrades to "unknown" on any failure; the weekly-reading lookup
//! surfaces its error so the scheduled job can report it.

use std::time::Duration;

use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use tracing::warn;

use crate::models::{ZmanimError, ZmanimResult};
use crate::store::WeeklyReading;

/// Calendar feed item categories we care about.
const CATEGORY_HEBDATE: &str = "hebdate";
const CATEGORY_PARASHAT: &str = "parashat";

#[derive(Debug, Deserialize)]
struct Feed {
    #[serde(default)]
    items: Vec<FeedItem>,
}

#[derive(Debug, Deserialize)]
struct FeedItem {
    #[serde(default)]
    category: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    date: String,
    #[serde(default)]
    hebrew: Option<String>,
}

/// HTTP client for the calendar API, keyed to one postal location.
#[derive(Debug, Clone)]
pub struct HebcalClient {
    http: reqwest::Client,
    base_url: String,
    postal_code: String,
}

impl HebcalClient {
    /// Build a client with the short request timeout the serving path
    /// requires (a slow lookup degrades, it must not stall the query).
    pub fn new(base_url: impl Into<String>, postal_code: impl Into<String>) -> ZmanimResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| ZmanimError::Remote(e.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.into(),
            postal_code: postal_code.into(),
        })
    }

    /// Look up today's Hebrew date string.
    ///
    /// Any failure (network, status, shape) returns `None`; the caller
    /// displays "Unknown" for that one field.
    pub async fn hebrew_date_today(&self, today: NaiveDate) -> Option<String> {
        let day = today.to_string();
        match self
            .feed(&[("d", "on"), ("start", day.as_str()), ("end", day.as_str())])
            .await
        {
            Ok(feed) => feed
                .items
                .into_iter()
                .find(|item| item.category == CATEGORY_HEBDATE)
                .map(|item| item.hebrew.unwrap_or(item.title)),
            Err(e) => {
                warn!(error = %e, "hebrew date lookup failed");
                None
            }
        }
    }

    /// Look up the Torah reading for the Shabbat inside the given range.
    pub async fn weekly_reading(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> ZmanimResult<WeeklyReading> {
        let (start, end) = (start.to_string(), end.to_string());
        let feed = self
            .feed(&[("s", "on"), ("start", start.as_str()), ("end", end.as_str())])
            .await?;

        let item = feed
            .items
            .into_iter()
            .find(|item| item.category == CATEGORY_PARASHAT)
            .ok_or_else(|| ZmanimError::Remote("no parasha item in feed".to_string()))?;

        // Item dates may carry a time component; the day prefix is enough.
        let shabbat_date = item
            .date
            .get(..10)
            .and_then(|d| d.parse().ok())
            .ok_or_else(|| {
                ZmanimError::Remote(format!("unparseable parasha date '{}'", item.date))
            })?;

        Ok(WeeklyReading {
            parasha: item.title,
            updated: Utc::now(),
            shabbat_date,
        })
    }

    async fn feed(&self, params: &[(&str, &str)]) -> ZmanimResult<Feed> {
        let url = format!("{}/hebcal", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[("v", "1"), ("cfg", "json"), ("zip", self.postal_code.as_str())])
            .query(params)
            .send()
            .await
            .map_err(|e| ZmanimError::Remote(e.to_string()))?
            .error_for_status()
            .map_err(|e| ZmanimError::Remote(e.to_string()))?;

        response
            .json()
            .await
            .map_err(|e| ZmanimError::Remote(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(server: &mockito::ServerGuard) -> HebcalClient {
        HebcalClient::new(server.url(), "53216").unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 24).unwrap()
    }

    #[tokio::test]
    async fn test_hebrew_date_today_parses_hebdate_item() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/hebcal")
            .match_query(mockito::Matcher::UrlEncoded("d".into(), "on".into()))
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"items": [
                    {"category": "candles", "title": "Candle lighting"},
                    {"category": "hebdate", "title": "11th of Elul, 5786",
                     "hebrew": "י״א אלול תשפ״ו", "date": "2026-08-24"}
                ]}"#,
            )
            .create_async()
            .await;

        let date = client(&server).hebrew_date_today(today()).await;
        assert_eq!(date.as_deref(), Some("י״א אלול תשפ״ו"));
    }

    #[tokio::test]
    async fn test_hebrew_date_degrades_on_server_error() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/hebcal")
            .with_status(500)
            .create_async()
            .await;

        assert_eq!(client(&server).hebrew_date_today(today()).await, None);
    }

    #[tokio::test]
    async fn test_weekly_reading_finds_parashat_item() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/hebcal")
            .match_query(mockito::Matcher::UrlEncoded("s".into(), "on".into()))
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"items": [
                    {"category": "havdalah", "title": "Havdalah", "date": "2026-08-29T20:57:00-05:00"},
                    {"category": "parashat", "title": "Parashat Ki Seitzei", "date": "2026-08-29"}
                ]}"#,
            )
            .create_async()
            .await;

        let reading = client(&server)
            .weekly_reading(today(), today() + chrono::Duration::days(7))
            .await
            .unwrap();
        assert_eq!(reading.parasha, "Parashat Ki Seitzei");
        assert_eq!(
            reading.shabbat_date,
            NaiveDate::from_ymd_opt(2026, 8, 29).unwrap()
        );
    }

    #[tokio::test]
    async fn test_weekly_reading_without_item_is_remote_error() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/hebcal")
            .with_header("content-type", "application/json")
            .with_body(r#"{"items": []}"#)
            .create_async()
            .await;

        let err = client(&server)
            .weekly_reading(today(), today() + chrono::Duration::days(7))
            .await
            .unwrap_err();
        assert!(matches!(err, ZmanimError::Remote(_)));
    }
}
