//! Application state for the HTTP server.

use std::sync::Arc;

use chrono_tz::Tz;

use crate::config::AppConfig;
use crate::hebcal::HebcalClient;
use crate::models::ZmanimResult;
use crate::store::{MinchaOverrideStore, WeeklyReadingStore, ZmanimStore};

/// Shared application state passed to all handlers.
///
/// Holds only configuration and stateless adapters; every request
/// re-reads the underlying files.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<Inner>,
}

struct Inner {
    timezone: Tz,
    zmanim: ZmanimStore,
    mincha: MinchaOverrideStore,
    reading: WeeklyReadingStore,
    hebcal: HebcalClient,
}

impl AppState {
    /// Build the adapter set from configuration.
    pub fn new(config: &AppConfig) -> ZmanimResult<Self> {
        Ok(Self {
            inner: Arc::new(Inner {
                timezone: config.timezone,
                zmanim: ZmanimStore::new(&config.zmanim_file, config.timezone),
                mincha: MinchaOverrideStore::new(&config.mincha_file),
                reading: WeeklyReadingStore::new(&config.parasha_file),
                hebcal: HebcalClient::new(&config.hebcal_base_url, &config.postal_code)?,
            }),
        })
    }

    pub fn timezone(&self) -> Tz {
        self.inner.timezone
    }

    pub fn zmanim(&self) -> &ZmanimStore {
        &self.inner.zmanim
    }

    pub fn mincha(&self) -> &MinchaOverrideStore {
        &self.inner.mincha
    }

    pub fn reading(&self) -> &WeeklyReadingStore {
        &self.inner.reading
    }

    pub fn hebcal(&self) -> &HebcalClient {
        &self.inner.hebcal
    }
}
