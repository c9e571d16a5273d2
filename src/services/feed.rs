use anyhow::{Context, Result};
use chrono::Local;
use log::info;
use std::path::Path;

use crate::config::AppConfig;
use crate::feed::{ClockDefaults, FeedDocument, FeedKind, ItemBuilder, Prompter};
use crate::store::JsonStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedOutcome {
    Written,
    Aborted,
}

/// Interactive authoring of posts and updates
pub struct FeedService<'a, P: Prompter> {
    config: &'a AppConfig,
    store: JsonStore,
    prompter: P,
}

impl<'a, P: Prompter> FeedService<'a, P> {
    pub fn new(config: &'a AppConfig, prompter: P) -> Self {
        Self {
            config,
            store: JsonStore::new(&config.repo_root),
            prompter,
        }
    }

    pub fn run(&mut self, kind: FeedKind) -> Result<FeedOutcome> {
        self.add_item(kind, &ClockDefaults::from_local(Local::now()))
    }

    /// Compose an item, preview it and prepend it to the feed once confirmed
    pub fn add_item(&mut self, kind: FeedKind, clock: &ClockDefaults) -> Result<FeedOutcome> {
        let relative = self.feed_path(kind);
        let mut document = FeedDocument::load(&self.store, relative)?;

        let item = ItemBuilder::new(&mut self.prompter)?.compose(kind, clock)?;

        let preview =
            serde_json::to_string_pretty(&item).context("Failed to serialize feed item")?;
        println!("\nNew {} item preview:\n", kind.label());
        println!("{}", preview);

        let file_name = relative
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let question = format!("\nWrite to {}? (y/n)", file_name);
        if !self.prompter.confirm(&question, true)? {
            println!("Aborted. Nothing written.");
            return Ok(FeedOutcome::Aborted);
        }

        document.add_item_at_top(&item)?;
        document.save(&self.store, relative)?;
        info!(
            "Wrote {} to: {}",
            kind.default_title().to_lowercase(),
            self.store.path(relative).display()
        );
        Ok(FeedOutcome::Written)
    }

    fn feed_path(&self, kind: FeedKind) -> &'a Path {
        match kind {
            FeedKind::Posts => &self.config.paths.posts,
            FeedKind::Updates => &self.config.paths.updates,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::ConsolePrompter;
    use serde_json::Value;
    use std::io::Cursor;
    use std::path::PathBuf;

    fn scratch_repo(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "campaign_tools_feed_{}_{}",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    fn clock() -> ClockDefaults {
        ClockDefaults {
            date: "2025-03-01".to_string(),
            time: "20:00".to_string(),
            tz: "EST".to_string(),
        }
    }

    #[test]
    fn test_confirmed_update_is_prepended() {
        let repo = scratch_repo("written");
        let config = AppConfig::new(&repo);
        std::fs::create_dir_all(repo.join("data")).unwrap();
        std::fs::write(
            repo.join("data/updates.json"),
            r#"{"items": [{"date": "2025-01-01", "title": "Old", "body": ""}]}"#,
        )
        .unwrap();

        // date, time, tz, title, body + blank line, no links, confirm
        let input = "\n\n\nFresh\nHello there\n\n\n\n";
        let mut service = FeedService::new(&config, ConsolePrompter::new(Cursor::new(input)));

        let outcome = service.add_item(FeedKind::Updates, &clock()).unwrap();
        assert_eq!(outcome, FeedOutcome::Written);

        let text = std::fs::read_to_string(repo.join("data/updates.json")).unwrap();
        let saved: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(saved["items"][0]["title"], "Fresh");
        assert_eq!(saved["items"][0]["body"], "Hello there");
        assert_eq!(saved["items"][0]["tz"], "EST");
        assert_eq!(saved["items"][1]["title"], "Old");
        assert!(text.ends_with('\n'));

        let _ = std::fs::remove_dir_all(&repo);
    }

    #[test]
    fn test_declined_post_writes_nothing() {
        let repo = scratch_repo("aborted");
        let config = AppConfig::new(&repo);

        // date, time, tz, title, body + blank line, inline n, media none, no links, decline
        let input = "\n\n\n\nBody\n\nn\n5\n\nn\n";
        let mut service = FeedService::new(&config, ConsolePrompter::new(Cursor::new(input)));

        let outcome = service.add_item(FeedKind::Posts, &clock()).unwrap();

        assert_eq!(outcome, FeedOutcome::Aborted);
        assert!(!repo.join("data/posts.json").exists());

        let _ = std::fs::remove_dir_all(&repo);
    }

    #[test]
    fn test_invalid_feed_file_is_reported() {
        let repo = scratch_repo("invalid");
        let config = AppConfig::new(&repo);
        std::fs::create_dir_all(repo.join("data")).unwrap();
        std::fs::write(repo.join("data/posts.json"), "[]").unwrap();

        let mut service = FeedService::new(&config, ConsolePrompter::new(Cursor::new("")));
        let err = service.add_item(FeedKind::Posts, &clock()).unwrap_err();

        assert!(err.to_string().contains("Expected JSON object"));

        let _ = std::fs::remove_dir_all(&repo);
    }
}
