//! Best-effort Mincha scraping from the shul's published PDF calendar.
//!
//! This is opportunistic text scraping, not systems engineering: the
//! calendar page is fetched, PDF links are collected with tolerant
//! scanning, the current month's calendar is downloaded, and the text is
//! regex-searched for today's Mincha time. Producing nothing is normal;
//! the serving core treats the result as an optional override only.

pub mod calendar;
pub mod mincha;
pub mod pdf;

pub use calendar::{choose_calendar, download_pdf, fetch_page, pdf_links};
pub use mincha::{find_mincha_time, SUMMER_FALLBACK};
pub use pdf::extract_text;
