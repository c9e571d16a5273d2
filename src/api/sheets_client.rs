use anyhow::Result;
use log::info;

use crate::config::SignatureSettings;
use crate::errors::with_fetch_context;
use crate::http::HttpClient;

/// Client for a spreadsheet published as CSV
pub struct SheetsClient {
    http: HttpClient,
}

impl SheetsClient {
    pub fn new(settings: &SignatureSettings) -> Result<Self> {
        let http = HttpClient::new(settings.user_agent, settings.timeout_secs)?;
        Ok(Self { http })
    }

    pub async fn fetch_csv(&self, url: &str) -> Result<String> {
        info!("[Signatures] Fetching CSV from Google Sheets...");

        let response = with_fetch_context(self.http.get(url, &[]).await, url)?;
        let response = with_fetch_context(response.error_for_status(), url)?;
        let content = with_fetch_context(response.text().await, url)?;

        info!("[Signatures] Fetched {} bytes", content.len());
        Ok(content)
    }
}
