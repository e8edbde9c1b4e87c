//! Weekly Parasha Updater Binary
//!
//! Scheduled job (run early Sunday morning): fetch the Torah reading for
//! the coming Shabbat from the remote calendar API and cache it for the
//! server. Exits nonzero on failure so the scheduler can flag it.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin update-parasha
//! ```

use chrono::{Duration, Utc};
use tracing::info;
use tracing_subscriber::EnvFilter;

use zmanim_tracker::config::AppConfig;
use zmanim_tracker::hebcal::HebcalClient;
use zmanim_tracker::store::WeeklyReadingStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    info!("Updating weekly parasha");

    let config = AppConfig::from_env().map_err(|e| anyhow::anyhow!(e))?;
    let client = HebcalClient::new(&config.hebcal_base_url, &config.postal_code)?;

    let today = Utc::now().with_timezone(&config.timezone).date_naive();
    let reading = client
        .weekly_reading(today, today + Duration::days(7))
        .await?;

    WeeklyReadingStore::new(&config.parasha_file).store(&reading)?;

    info!(parasha = %reading.parasha, shabbat = %reading.shabbat_date, "parasha updated");
    Ok(())
}
