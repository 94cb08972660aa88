//! FDA warning-letter search-page scraper
//!
//! The warning-letter records have no API; they are scraped from the public
//! search page's results table. The HTML walk is kept in a standalone
//! function so it can be exercised against saved fixtures without network
//! access — the page layout is third-party and changes without notice.

use crate::core::config::WarningLetterConfig;
use crate::core::error::{GatewayError, Result};
use reqwest::Client;
use scraper::{Html, Selector};
use serde::Serialize;
use std::time::Duration;
use url::Url;

/// One row of the warning-letter results table.
///
/// ActionType and State are constants: the source table carries neither, and
/// downstream consumers expect the fields to be present anyway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WarningLetter {
    #[serde(rename = "LegalName")]
    pub legal_name: String,
    #[serde(rename = "ActionTakenDate")]
    pub action_taken_date: String,
    #[serde(rename = "ActionType")]
    pub action_type: String,
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "CaseInjunctionID")]
    pub case_injunction_id: String,
    pub warning_letter_url: String,
}

/// Fetches and parses the warning-letter search page
pub struct WarningLetterScraper {
    http: Client,
    config: WarningLetterConfig,
}

impl WarningLetterScraper {
    /// Create a new scraper from configuration
    pub fn new(config: WarningLetterConfig) -> Result<Self> {
        let http = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.request_timeout))
            .build()?;

        Ok(Self { http, config })
    }

    /// Search the letters page for a firm name and parse the results table
    pub async fn search(&self, firm_name: &str) -> Result<Vec<WarningLetter>> {
        // Form-encoded query pair: spaces in the firm name become '+'
        let url = Url::parse_with_params(
            &self.config.search_url,
            &[("search_api_views_fulltext", firm_name)],
        )
        .map_err(|e| GatewayError::ParseError(format!("invalid search URL: {}", e)))?;

        tracing::info!(url = %url, "Fetching warning-letter search page");

        let response = self.http.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::UpstreamStatus(status));
        }

        let html = response.text().await?;
        Ok(parse_warning_letters(&html, &url))
    }
}

/// Walk the results table of a warning-letters search page.
///
/// Each `table.views-table tbody tr` row with at least 3 cells yields one
/// record: company name and letter link from cell 1, posted date from
/// cell 3. Shorter rows (spacers, "no results" banners) are skipped, not
/// errors. Link hrefs are resolved against the page URL; a row without a
/// link yields an empty URL.
pub fn parse_warning_letters(html: &str, base: &Url) -> Vec<WarningLetter> {
    let document = Html::parse_document(html);

    let row_sel = Selector::parse("table.views-table tbody tr").unwrap();
    let cell_sel = Selector::parse("td").unwrap();
    let link_sel = Selector::parse("a").unwrap();

    let mut letters = Vec::new();

    for row in document.select(&row_sel) {
        let cells: Vec<_> = row.select(&cell_sel).collect();
        if cells.len() < 3 {
            continue;
        }

        let legal_name = cells[0].text().collect::<String>().trim().to_string();

        let letter_url = cells[0]
            .select(&link_sel)
            .next()
            .and_then(|a| a.value().attr("href"))
            .and_then(|href| base.join(href).ok())
            .map(|resolved| resolved.to_string())
            .unwrap_or_default();

        let action_taken_date = cells[2].text().collect::<String>().trim().to_string();

        letters.push(WarningLetter {
            legal_name,
            action_taken_date,
            action_type: "Warning Letter".to_string(),
            state: "N/A".to_string(),
            case_injunction_id: letter_url.clone(),
            warning_letter_url: letter_url,
        });
    }

    letters
}
