use std::path::PathBuf;

use anyhow::Context as _;
use thiserror::Error;

/// Source data problems that end a conversion run without writing output
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("No playlist data found")]
    NoPlaylistData,

    #[error("No data points found in playlist {0}")]
    NoDataPoints(String),

    #[error("Archive has no data points")]
    EmptyArchive,
}

/// Failures of the cookie-authenticated tracker fetch
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("No cookies file found at {}", .0.display())]
    MissingCookies(PathBuf),

    #[error("Cookies file has no cookies for {0}")]
    NoCookiesForHost(String),

    #[error("Cookies expired - re-export from browser (403)")]
    CookiesExpired,

    #[error("HTTP {0}")]
    Status(u16),

    #[error("Invalid response format")]
    InvalidResponse,

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to read cookies file: {0}")]
    CookieFile(#[from] std::io::Error),
}

impl FetchError {
    /// Whether the user has to export fresh cookies before auto-fetch works again
    pub fn needs_reauth(&self) -> bool {
        matches!(self, FetchError::CookiesExpired)
    }

    pub fn is_missing_cookies(&self) -> bool {
        matches!(self, FetchError::MissingCookies(_))
    }
}

/// Invalid input while composing or saving a feed item
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("URL must be https:// (got: {0})")]
    InsecureUrl(String),

    #[error("Could not extract YouTube video id from that URL.")]
    NoVideoId,

    #[error("Invalid choice. Pick 1-5.")]
    InvalidMediaChoice,

    #[error("Embed height must be a whole number of pixels (got: {0})")]
    InvalidHeight(String),

    #[error("Invalid JSON in {}: {source}", .path.display())]
    InvalidJson {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Expected JSON object at top-level in {}", .0.display())]
    NotAnObject(PathBuf),
}

/// Add context to fetch errors
pub fn fetch_context(url: &str) -> String {
    format!("Failed to fetch from: {}", url)
}

/// Add context to parse errors
pub fn parse_context(data_type: &str) -> String {
    format!("Failed to parse {}", data_type)
}

/// Wrap result with fetch context
pub fn with_fetch_context<T, E>(result: Result<T, E>, url: &str) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.context(fetch_context(url))
}

/// Wrap result with parse context
pub fn with_parse_context<T, E>(result: Result<T, E>, data_type: &str) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.context(parse_context(data_type))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_expired_cookies_need_reauth() {
        assert!(FetchError::CookiesExpired.needs_reauth());
        assert!(!FetchError::Status(500).needs_reauth());
        assert!(
            FetchError::MissingCookies(PathBuf::from("tools/cookies.txt")).is_missing_cookies()
        );
    }

    #[test]
    fn test_context_messages() {
        let err =
            with_parse_context(serde_json::from_str::<u8>("x"), "tracker payload").unwrap_err();

        assert_eq!(err.to_string(), "Failed to parse tracker payload");
        assert_eq!(fetch_context("https://x"), "Failed to fetch from: https://x");
    }
}
