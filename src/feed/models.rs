use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FeedKind {
    Posts,
    Updates,
}

impl FeedKind {
    pub fn default_title(&self) -> &'static str {
        match self {
            FeedKind::Posts => "Post",
            FeedKind::Updates => "Update",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FeedKind::Posts => "POST",
            FeedKind::Updates => "UPDATE",
        }
    }

    /// Only posts carry an inline link and media
    pub fn supports_media(&self) -> bool {
        matches!(self, FeedKind::Posts)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Media {
    Image {
        src: String,
        alt: String,
    },
    Video {
        platform: String,
        url: String,
        thumb: String,
        label: String,
    },
    Embed {
        url: String,
        title: String,
        height: u32,
    },
    Link {
        label: String,
        url: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedItem {
    pub date: String,
    pub title: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tz: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_link: Option<Link>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<Media>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_item_omits_optional_keys() {
        let item = FeedItem {
            date: "2025-01-01".to_string(),
            title: "Update".to_string(),
            body: "Hello".to_string(),
            time: None,
            tz: None,
            inline_link: None,
            media: None,
            links: Vec::new(),
        };

        let value = serde_json::to_value(&item).unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();

        assert_eq!(keys, vec!["body", "date", "title"]);
    }

    #[test]
    fn test_media_tagged_by_type() {
        let media = Media::Embed {
            url: "https://open.spotify.com/embed/track/1".to_string(),
            title: "Track".to_string(),
            height: 352,
        };

        let value = serde_json::to_value(&media).unwrap();

        assert_eq!(value["type"], "embed");
        assert_eq!(value["height"], 352);
    }

    #[test]
    fn test_inline_link_key_is_camel_case() {
        let item = FeedItem {
            date: "2025-01-01".to_string(),
            title: "Post".to_string(),
            body: String::new(),
            time: Some("10:00".to_string()),
            tz: None,
            inline_link: Some(Link {
                label: "Link".to_string(),
                url: "https://example.com".to_string(),
            }),
            media: None,
            links: Vec::new(),
        };

        let value = serde_json::to_value(&item).unwrap();

        assert_eq!(value["inlineLink"]["url"], "https://example.com");
        assert_eq!(value["time"], "10:00");
    }
}
