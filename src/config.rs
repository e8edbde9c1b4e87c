//! Runtime configuration and environment variable handling.
//!
//! All file paths and remote endpoints that used to live as module-level
//! constants are gathered here into one explicit value that is passed to
//! the adapters at construction time.

use std::env;
use std::path::PathBuf;

use chrono_tz::Tz;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Path to the daily zmanim JSON produced by the external provider
    pub zmanim_file: PathBuf,
    /// Path to the scraped Mincha override JSON
    pub mincha_file: PathBuf,
    /// Path to the cached weekly Torah-reading JSON
    pub parasha_file: PathBuf,
    /// Timezone the display location lives in
    pub timezone: Tz,
    /// Base URL of the Hebrew-calendar API
    pub hebcal_base_url: String,
    /// Postal code used for Hebrew-calendar lookups
    pub postal_code: String,
    /// URL of the shul calendar page the Mincha scraper starts from
    pub calendar_url: String,
    /// Server bind host
    pub host: String,
    /// Server bind port
    pub port: u16,
}

impl AppConfig {
    /// Create a new configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `ZMANIM_FILE` (optional): daily times JSON path
    ///   (default: `/var/lib/homebridge/zmanim-js/hebcal_zmanim.json`)
    /// - `MINCHA_FILE` (optional, default: `mincha_today.json`)
    /// - `PARASHA_FILE` (optional, default: `parasha.json`)
    /// - `ZMANIM_TZ` (optional, default: `America/Chicago`)
    /// - `HEBCAL_URL` (optional, default: `https://www.hebcal.com`)
    /// - `ZMANIM_ZIP` (optional, default: `53216`)
    /// - `CALENDAR_URL` (optional, default: `https://bethjehudah.org/calendar/`)
    /// - `HOST` (optional, default: `0.0.0.0`)
    /// - `PORT` (optional, default: `5001`)
    ///
    /// # Errors
    /// Returns an error if `ZMANIM_TZ` is not a recognized timezone name
    /// or `PORT` is not a valid port number.
    pub fn from_env() -> Result<Self, String> {
        let zmanim_file = env::var("ZMANIM_FILE")
            .unwrap_or_else(|_| "/var/lib/homebridge/zmanim-js/hebcal_zmanim.json".to_string())
            .into();
        let mincha_file = env::var("MINCHA_FILE")
            .unwrap_or_else(|_| "mincha_today.json".to_string())
            .into();
        let parasha_file = env::var("PARASHA_FILE")
            .unwrap_or_else(|_| "parasha.json".to_string())
            .into();

        let tz_name = env::var("ZMANIM_TZ").unwrap_or_else(|_| "America/Chicago".to_string());
        let timezone: Tz = tz_name
            .parse()
            .map_err(|_| format!("ZMANIM_TZ '{}' is not a valid timezone", tz_name))?;

        let hebcal_base_url =
            env::var("HEBCAL_URL").unwrap_or_else(|_| "https://www.hebcal.com".to_string());
        let postal_code = env::var("ZMANIM_ZIP").unwrap_or_else(|_| "53216".to_string());
        let calendar_url = env::var("CALENDAR_URL")
            .unwrap_or_else(|_| "https://bethjehudah.org/calendar/".to_string());

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "5001".to_string())
            .parse()
            .map_err(|_| "PORT must be a valid port number".to_string())?;

        Ok(Self {
            zmanim_file,
            mincha_file,
            parasha_file,
            timezone,
            hebcal_base_url,
            postal_code,
            calendar_url,
            host,
            port,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            zmanim_file: "/var/lib/homebridge/zmanim-js/hebcal_zmanim.json".into(),
            mincha_file: "mincha_today.json".into(),
            parasha_file: "parasha.json".into(),
            timezone: chrono_tz::America::Chicago,
            hebcal_base_url: "https://www.hebcal.com".to_string(),
            postal_code: "53216".to_string(),
            calendar_url: "https://bethjehudah.org/calendar/".to_string(),
            host: "0.0.0.0".to_string(),
            port: 5001,
        }
    }
}
