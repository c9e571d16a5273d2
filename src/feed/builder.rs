use anyhow::Result;
use chrono::{DateTime, Local};

use super::media::{VideoLinkParser, normalize_asset_path, safe_https_url, youtube_thumb};
use super::models::{FeedItem, FeedKind, Link, Media};
use super::prompt::Prompter;
use crate::errors::FeedError;

/// Defaults offered for the date and time questions
pub struct ClockDefaults {
    pub date: String,
    pub time: String,
    pub tz: String,
}

impl ClockDefaults {
    pub fn from_local(now: DateTime<Local>) -> Self {
        Self {
            date: now.format("%Y-%m-%d").to_string(),
            time: now.format("%H:%M").to_string(),
            tz: tz_label(now.offset().local_minus_utc()),
        }
    }
}

/// Eastern offsets get their short name; any other zone keeps its `+HH:MM` offset
pub fn tz_label(offset_secs: i32) -> String {
    match offset_secs {
        -18_000 => "EST".to_string(),
        -14_400 => "EDT".to_string(),
        _ => {
            let sign = if offset_secs < 0 { '-' } else { '+' };
            let minutes = offset_secs.unsigned_abs() / 60;
            format!("{}{:02}:{:02}", sign, minutes / 60, minutes % 60)
        }
    }
}

pub struct ItemBuilder<'a, P: Prompter> {
    prompter: &'a mut P,
    videos: VideoLinkParser,
}

impl<'a, P: Prompter> ItemBuilder<'a, P> {
    pub fn new(prompter: &'a mut P) -> Result<Self> {
        Ok(Self {
            prompter,
            videos: VideoLinkParser::new()?,
        })
    }

    /// Ask for every field of a new item of `kind`
    pub fn compose(&mut self, kind: FeedKind, clock: &ClockDefaults) -> Result<FeedItem> {
        let date = self.prompter.ask("Date (YYYY-MM-DD)", Some(clock.date.as_str()))?;
        let time = self.prompter.ask("Time (HH:MM)", Some(clock.time.as_str()))?;
        let tz = self.prompter.ask("TZ label (EST/EDT/ET)", Some(clock.tz.as_str()))?;

        let title = self.prompter.ask("Title", Some(kind.default_title()))?;
        let body = self.prompter.ask_multiline("Body (multiline):")?;

        let (inline_link, media) = if kind.supports_media() {
            (self.inline_link()?, self.media()?)
        } else {
            (None, None)
        };
        let links = self.links()?;

        Ok(FeedItem {
            date,
            title,
            body,
            time: non_empty(&time),
            tz: non_empty(&tz),
            inline_link,
            media,
            links,
        })
    }

    fn inline_link(&mut self) -> Result<Option<Link>> {
        if !self.prompter.confirm("Add inline link? (y/n)", false)? {
            return Ok(None);
        }

        let label = self.prompter.ask("Inline link label", Some("Link"))?;
        let url = self.https_url("Inline link url (https://...)")?;
        Ok(Some(Link { label, url }))
    }

    fn media(&mut self) -> Result<Option<Media>> {
        println!("Add media?");
        println!("  1) image (local assets path, png/jpg/webp/gif)");
        println!("  2) youtube preview card (auto thumbnail)");
        println!("  3) embed iframe (spotify/youtube/etc embed URL)");
        println!("  4) link card (label + url)");
        println!("  5) none");

        let choice = self.prompter.ask("Choose 1-5", Some("5"))?;
        let media = match choice.as_str() {
            "1" => {
                let src = self
                    .prompter
                    .ask("Image src (e.g. assets/img/example.png)", None)?;
                let alt = self.prompter.ask("Alt text", Some("Post image"))?;
                Media::Image {
                    src: normalize_asset_path(&src),
                    alt,
                }
            }
            "2" => {
                let url = self.https_url("YouTube URL (watch/shorts/youtu.be)")?;
                let video_id = self.videos.extract_id(&url).ok_or(FeedError::NoVideoId)?;
                let label = self.prompter.ask("Card label", Some("Watch on YouTube"))?;
                Media::Video {
                    platform: "youtube".to_string(),
                    url,
                    thumb: youtube_thumb(&video_id),
                    label,
                }
            }
            "3" => {
                let url =
                    self.https_url("Embed URL (e.g. https://open.spotify.com/embed/track/...)")?;
                let title = self.prompter.ask("Embed title", Some("Embedded media"))?;
                let height = self.prompter.ask("Embed height (px)", Some("352"))?;
                let height = height
                    .parse::<u32>()
                    .map_err(|_| FeedError::InvalidHeight(height.clone()))?;
                Media::Embed { url, title, height }
            }
            "4" => {
                let label = self.prompter.ask("Link label", Some("Open link"))?;
                let url = self.https_url("Link URL (https://...)")?;
                Media::Link { label, url }
            }
            "5" => return Ok(None),
            _ => return Err(FeedError::InvalidMediaChoice.into()),
        };

        Ok(Some(media))
    }

    fn links(&mut self) -> Result<Vec<Link>> {
        println!("Add links? (label + url). Leave label empty to stop.");

        let mut links = Vec::new();
        loop {
            let label = self.prompter.ask("Link label", Some(""))?;
            if label.is_empty() {
                break;
            }
            let url = self.https_url("Link url (https://...)")?;
            links.push(Link { label, url });
        }
        Ok(links)
    }

    fn https_url(&mut self, question: &str) -> Result<String> {
        let answer = self.prompter.ask(question, None)?;
        Ok(safe_https_url(&answer)?)
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
