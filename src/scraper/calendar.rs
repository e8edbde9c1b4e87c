//! Calendar page fetching and PDF link selection.

use std::time::Duration;

use anyhow::Context;
use chrono::{Datelike, NaiveDate};
use regex::Regex;
use url::Url;

/// The calendar site serves an empty page to unknown clients.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

const MONTHS: [&str; 12] = [
    "january", "february", "march", "april", "may", "june",
    "july", "august", "september", "october", "november", "december",
];

/// Build the scraping HTTP client: browser User-Agent, short page timeout.
pub fn client() -> anyhow::Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(10))
        .build()
        .context("building scraper client")
}

/// Fetch the calendar page HTML.
pub async fn fetch_page(http: &reqwest::Client, url: &str) -> anyhow::Result<String> {
    let body = http
        .get(url)
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .context("fetching calendar page")?
        .text()
        .await
        .context("reading calendar page body")?;
    Ok(body)
}

/// Collect every PDF link on the page, resolved against the page URL.
///
/// Tolerant scanning over the raw markup: attribute order, quoting style,
/// and surrounding noise don't matter, only `href="...pdf"`.
pub fn pdf_links(page_html: &str, base_url: &str) -> Vec<Url> {
    let href = Regex::new(r#"(?i)href\s*=\s*["']([^"']+\.pdf)["']"#).expect("static pattern");
    let base = match Url::parse(base_url) {
        Ok(base) => base,
        Err(_) => return Vec::new(),
    };

    href.captures_iter(page_html)
        .filter_map(|caps| base.join(&caps[1]).ok())
        .collect()
}

/// Pick the calendar PDF to scrape for `today`.
///
/// Prefer the link whose filename names the current month, then the
/// latest named month at or before it this year, then the first link.
pub fn choose_calendar(links: &[Url], today: NaiveDate) -> Option<Url> {
    let month_index = today.month0() as usize;

    let named_month = |url: &Url, month: &str| url.path().to_lowercase().contains(month);

    if let Some(url) = links.iter().find(|url| named_month(url, MONTHS[month_index])) {
        return Some(url.clone());
    }
    for earlier in (0..month_index).rev() {
        if let Some(url) = links.iter().find(|url| named_month(url, MONTHS[earlier])) {
            return Some(url.clone());
        }
    }
    links.first().cloned()
}

/// Download the chosen PDF. PDFs are bigger than pages, so the per-request
/// timeout is longer than the client default.
pub async fn download_pdf(http: &reqwest::Client, url: &Url) -> anyhow::Result<Vec<u8>> {
    let bytes = http
        .get(url.clone())
        .timeout(Duration::from_secs(30))
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .context("downloading calendar PDF")?
        .bytes()
        .await
        .context("reading calendar PDF body")?;
    Ok(bytes.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://bethjehudah.org/calendar/";

    #[test]
    fn test_pdf_links_tolerant_extraction() {
        let html = r#"
            <p>Calendars: <a class="doc" HREF='/files/August-2026-Calendar.PDF'>August</a>
            <a href="https://cdn.example.org/july_2026.pdf">July</a>
            <a href="/about">About us</a>
        "#;
        let links = pdf_links(html, BASE);
        assert_eq!(links.len(), 2);
        assert_eq!(
            links[0].as_str(),
            "https://bethjehudah.org/files/August-2026-Calendar.PDF"
        );
        assert_eq!(links[1].as_str(), "https://cdn.example.org/july_2026.pdf");
    }

    #[test]
    fn test_choose_prefers_current_month() {
        let links = vec![
            Url::parse("https://example.org/july_2026.pdf").unwrap(),
            Url::parse("https://example.org/august_2026.pdf").unwrap(),
        ];
        let today = NaiveDate::from_ymd_opt(2026, 8, 15).unwrap();
        assert_eq!(choose_calendar(&links, today), Some(links[1].clone()));
    }

    #[test]
    fn test_choose_falls_back_to_latest_earlier_month() {
        let links = vec![Url::parse("https://example.org/july_2026.pdf").unwrap()];
        let today = NaiveDate::from_ymd_opt(2026, 9, 2).unwrap();
        assert_eq!(choose_calendar(&links, today), Some(links[0].clone()));
    }

    #[test]
    fn test_choose_unnamed_links_takes_first() {
        let links = vec![
            Url::parse("https://example.org/calendar-current.pdf").unwrap(),
            Url::parse("https://example.org/calendar-next.pdf").unwrap(),
        ];
        let today = NaiveDate::from_ymd_opt(2026, 8, 15).unwrap();
        assert_eq!(choose_calendar(&links, today), Some(links[0].clone()));
    }

    #[test]
    fn test_no_links_is_none() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 15).unwrap();
        assert_eq!(choose_calendar(&[], today), None);
    }
}
