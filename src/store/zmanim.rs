//! Loader for the daily zmanim file produced by the external provider.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use chrono_tz::Tz;
use serde::Deserialize;
use tracing::warn;

use crate::models::{TimeSet, ZmanimError, ZmanimResult};

/// On-disk shape of the provider file: a `times` map of ISO timestamps
/// plus a `location.title` string.
#[derive(Debug, Deserialize)]
struct RawZmanim {
    #[serde(default)]
    times: HashMap<String, String>,
    #[serde(default)]
    location: Option<RawLocation>,
}

#[derive(Debug, Deserialize)]
struct RawLocation {
    #[serde(default)]
    title: Option<String>,
}

/// Read-only access to today's precomputed times.
#[derive(Debug, Clone)]
pub struct ZmanimStore {
    path: PathBuf,
    tz: Tz,
}

impl ZmanimStore {
    pub fn new(path: impl Into<PathBuf>, tz: Tz) -> Self {
        Self { path: path.into(), tz }
    }

    /// Load today's time set and the location title.
    ///
    /// A missing or malformed file is the recoverable
    /// [`ZmanimError::SourceUnavailable`] condition, surfaced by the API
    /// as "no data available" rather than a crash.
    pub fn load(&self) -> ZmanimResult<(TimeSet, String)> {
        let text = fs::read_to_string(&self.path).map_err(|e| {
            warn!(path = %self.path.display(), error = %e, "zmanim file unreadable");
            ZmanimError::source_unavailable_from(e)
        })?;
        let raw: RawZmanim = serde_json::from_str(&text).map_err(|e| {
            warn!(path = %self.path.display(), error = %e, "zmanim file is not valid JSON");
            ZmanimError::source_unavailable_from(e)
        })?;

        let title = raw
            .location
            .and_then(|l| l.title)
            .unwrap_or_else(|| "Unknown Location".to_string());
        Ok((TimeSet::from_raw(&raw.times, self.tz), title))
    }
}
