//! The cached weekly Torah-reading designation.
//!
//! Refreshed by the `update-parasha` binary on a weekly schedule; the
//! server tolerates staleness and treats any read failure as "unknown".

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{ZmanimError, ZmanimResult};

/// The week's assigned Torah reading portion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyReading {
    pub parasha: String,
    pub updated: DateTime<Utc>,
    pub shabbat_date: NaiveDate,
}

/// Reader/writer for the parasha cache file.
#[derive(Debug, Clone)]
pub struct WeeklyReadingStore {
    path: PathBuf,
}

impl WeeklyReadingStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the cached designation. Staleness beyond a week is tolerated
    /// here; the scheduled refresh job owns freshness.
    pub fn load(&self) -> Option<WeeklyReading> {
        let text = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&text) {
            Ok(reading) => Some(reading),
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "ignoring unparseable parasha cache");
                None
            }
        }
    }

    /// Persist a refreshed designation (used by the updater binary).
    pub fn store(&self, reading: &WeeklyReading) -> ZmanimResult<()> {
        let json = serde_json::to_string_pretty(reading)
            .map_err(|e| ZmanimError::Storage(e.to_string()))?;
        fs::write(&self.path, json).map_err(|e| ZmanimError::Storage(e.to_string()))
    }
}
