use anyhow::{Context, Result};
use regex::Regex;

use crate::errors::FeedError;

const YOUTUBE_ID_PATTERNS: [&str; 4] = [
    r"^https://www\.youtube\.com/watch\?v=([A-Za-z0-9_-]{6,})",
    r"^https://youtu\.be/([A-Za-z0-9_-]{6,})",
    r"^https://www\.youtube\.com/shorts/([A-Za-z0-9_-]{6,})",
    r"^https://www\.youtube\.com/embed/([A-Za-z0-9_-]{6,})",
];

/// Trimmed URL, empty input stays empty; anything but https:// is rejected
pub fn safe_https_url(url: &str) -> Result<String, FeedError> {
    let url = url.trim();
    if url.is_empty() {
        return Ok(String::new());
    }
    if !url.starts_with("https://") {
        return Err(FeedError::InsecureUrl(url.to_string()));
    }
    Ok(url.to_string())
}

/// Image paths are site-relative with forward slashes
pub fn normalize_asset_path(path: &str) -> String {
    let path = path.trim().replace('\\', "/");
    match path.strip_prefix('/') {
        Some(stripped) => stripped.to_string(),
        None => path,
    }
}

pub fn youtube_thumb(video_id: &str) -> String {
    format!("https://i.ytimg.com/vi/{}/hqdefault.jpg", video_id)
}

pub struct VideoLinkParser {
    patterns: Vec<Regex>,
}

impl VideoLinkParser {
    pub fn new() -> Result<Self> {
        let patterns = YOUTUBE_ID_PATTERNS
            .iter()
            .map(|pattern| {
                Regex::new(pattern)
                    .with_context(|| format!("Failed to compile video link regex {}", pattern))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// Video id from a watch, youtu.be, shorts or embed URL
    pub fn extract_id(&self, url: &str) -> Option<String> {
        self.patterns.iter().find_map(|pattern| {
            pattern
                .captures(url)
                .and_then(|captures| captures.get(1))
                .map(|m| m.as_str().to_string())
        })
    }
}
