//! Mincha Time Scraper Binary
//!
//! Scheduled job: fetch the shul calendar page, pick the current month's
//! PDF calendar, and extract today's Mincha time into the override file
//! the server reads. Best effort throughout; when nothing usable is
//! found, the published summer default is recorded.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin mincha-scraper
//! ```

use anyhow::Context;
use chrono::Utc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use zmanim_tracker::config::AppConfig;
use zmanim_tracker::scraper;
use zmanim_tracker::store::{MinchaOverride, MinchaOverrideStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env().map_err(|e| anyhow::anyhow!(e))?;
    let today = Utc::now().with_timezone(&config.timezone).date_naive();

    info!(url = %config.calendar_url, %today, "starting Mincha scraper");

    let http = scraper::calendar::client()?;
    let page = scraper::fetch_page(&http, &config.calendar_url).await?;

    let links = scraper::pdf_links(&page, &config.calendar_url);
    info!(count = links.len(), "PDF calendars found on page");
    let pdf_url = scraper::choose_calendar(&links, today)
        .context("no calendar PDF links found on the calendar page")?;

    info!(url = %pdf_url, "downloading calendar PDF");
    let bytes = scraper::download_pdf(&http, &pdf_url).await?;

    let text = tokio::task::spawn_blocking(move || scraper::extract_text(&bytes)).await??;

    let mincha_time = scraper::find_mincha_time(&text, today).unwrap_or_else(|| {
        warn!(
            fallback = scraper::SUMMER_FALLBACK,
            "no Mincha time found in calendar, using fallback"
        );
        scraper::SUMMER_FALLBACK.to_string()
    });

    let record = MinchaOverride {
        date: today,
        mincha_time: mincha_time.clone(),
        source: Some("Beth Jehudah Calendar".to_string()),
        scraped_at: Some(Utc::now().to_rfc3339()),
    };
    MinchaOverrideStore::new(&config.mincha_file).store(&record)?;

    info!(time = %mincha_time, file = %config.mincha_file.display(), "Mincha time saved");
    Ok(())
}
