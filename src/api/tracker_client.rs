use anyhow::Result;
use log::info;
use reqwest::{StatusCode, Url};
use serde_json::Value;

use crate::config::TrackerSettings;
use crate::errors::FetchError;
use crate::http::{CookieJar, HttpClient};

/// Client for the tracker's rating-history endpoint
pub struct TrackerClient {
    http: HttpClient,
    api_url: String,
    page_url: String,
    origin: String,
}

impl TrackerClient {
    pub fn new(settings: &TrackerSettings) -> Result<Self> {
        let http = HttpClient::new(settings.user_agent, settings.timeout_secs)?;

        Ok(Self {
            http,
            api_url: settings.api_url.clone(),
            page_url: settings.page_url.clone(),
            origin: settings.origin.clone(),
        })
    }

    /// Fetch the raw history payload using exported browser cookies
    pub async fn fetch_history(&self, jar: &CookieJar) -> Result<Value, FetchError> {
        let host = Self::api_host(&self.api_url);
        let cookie_header = jar
            .header_for(&host)
            .ok_or_else(|| FetchError::NoCookiesForHost(host.clone()))?;

        info!("  Fetching from API...");
        let response = self
            .http
            .get(&self.api_url, &self.build_headers(cookie_header))
            .await?;

        info!("  Response: {}", response.status().as_u16());
        check_status(response.status())?;

        let body: Value = response.json().await.map_err(|_| FetchError::InvalidResponse)?;
        ensure_history_shape(body)
    }

    fn build_headers(&self, cookie_header: String) -> Vec<(&'static str, String)> {
        vec![
            ("Accept", "application/json".to_string()),
            ("Origin", self.origin.clone()),
            ("Referer", format!("{}/", self.origin)),
            ("Cookie", cookie_header),
        ]
    }

    pub fn page_url(&self) -> &str {
        &self.page_url
    }

    fn api_host(api_url: &str) -> String {
        Url::parse(api_url)
            .ok()
            .and_then(|url| url.host_str().map(str::to_string))
            .unwrap_or_default()
    }
}

fn check_status(status: StatusCode) -> Result<(), FetchError> {
    if status == StatusCode::FORBIDDEN {
        return Err(FetchError::CookiesExpired);
    }
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }
    Ok(())
}

fn ensure_history_shape(body: Value) -> Result<Value, FetchError> {
    if body.get("data").is_some() {
        Ok(body)
    } else {
        Err(FetchError::InvalidResponse)
    }
}
