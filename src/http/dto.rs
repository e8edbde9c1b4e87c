//! Data Transfer Objects for the HTTP API.

use serde::{Deserialize, Serialize};

use super::error::ErrorBody;
use crate::services::{NextEvent, PeriodSnapshot, Projection};

/// Response body for `GET /api/zmanim`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotDto {
    /// Current liturgical period name
    pub period: String,
    /// Current time, display-formatted
    pub current_time: String,
    /// Today's date, display-formatted
    pub date: String,
    /// Ordered (label, formatted time) pairs for the current period
    pub times: Vec<(String, String)>,
    /// Location title from the provider file
    pub location: String,
    /// Today's Hebrew date, or "Unknown"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hebrew_date: Option<String>,
    /// This week's Torah reading, or "Unknown"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parasha: Option<String>,
}

impl From<PeriodSnapshot> for SnapshotDto {
    fn from(snapshot: PeriodSnapshot) -> Self {
        Self {
            period: snapshot.period.to_string(),
            current_time: snapshot.current_time,
            date: snapshot.date,
            times: snapshot.times,
            location: snapshot.location,
            hebrew_date: snapshot.hebrew_date,
            parasha: snapshot.parasha,
        }
    }
}

/// Response body for `GET /api/next`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionDto {
    /// Current liturgical period name
    pub period: String,
    /// The next tracked moment; absent at end of day
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<NextEventDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NextEventDto {
    pub label: String,
    pub time: String,
}

impl From<Projection> for ProjectionDto {
    fn from(projection: Projection) -> Self {
        Self {
            period: projection.period.to_string(),
            next: projection.next.map(NextEventDto::from),
        }
    }
}

impl From<NextEvent> for NextEventDto {
    fn from(event: NextEvent) -> Self {
        Self {
            label: event.label,
            time: event.time,
        }
    }
}

/// Either the requested data or the error envelope, always well-formed
/// JSON and always HTTP 200.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ApiResponse<T> {
    Data(T),
    Error(ErrorBody),
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}
