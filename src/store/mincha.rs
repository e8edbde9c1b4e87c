//! The scraped Mincha override record.
//!
//! Written by the `mincha-scraper` binary, read by the server. The record
//! is only an override of the displayed Mincha Ketana slot, and only for
//! the date it was scraped for; anything else about it going wrong means
//! "no override", never an error.

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{ZmanimError, ZmanimResult};

/// One scraped Mincha time, keyed by the date it applies to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinchaOverride {
    pub date: NaiveDate,
    pub mincha_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scraped_at: Option<String>,
}

/// Reader/writer for the override file shared with the scraper process.
#[derive(Debug, Clone)]
pub struct MinchaOverrideStore {
    path: PathBuf,
}

impl MinchaOverrideStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the override record, if one exists and parses.
    pub fn load(&self) -> Option<MinchaOverride> {
        let text = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&text) {
            Ok(record) => Some(record),
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "ignoring unparseable mincha override");
                None
            }
        }
    }

    /// Read the override only when it applies to `today`.
    pub fn load_for(&self, today: NaiveDate) -> Option<MinchaOverride> {
        self.load().filter(|record| record.date == today)
    }

    /// Persist a freshly scraped record (used by the scraper binary).
    pub fn store(&self, record: &MinchaOverride) -> ZmanimResult<()> {
        let json = serde_json::to_string_pretty(record)
            .map_err(|e| ZmanimError::Storage(e.to_string()))?;
        fs::write(&self.path, json).map_err(|e| ZmanimError::Storage(e.to_string()))
    }
}
