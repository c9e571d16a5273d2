use anyhow::Result;
use chrono::{Local, Utc};
use log::{info, warn};
use serde_json::Value;

use crate::api::TrackerClient;
use crate::config::AppConfig;
use crate::errors::FetchError;
use crate::http::CookieJar;
use crate::report;
use crate::services::conversion::{ConversionService, parse_payload};
use crate::store::JsonStore;
use crate::system::{
    CancelToken, FileWatcher, Notifier, SourceControl, WatchOutcome, commit_message, open_url,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Updated,
    TimedOut,
    Cancelled,
}

/// Fetch fresh ratings, falling back to a manual browser export, then convert
pub struct MmrUpdateService<'a, N: Notifier> {
    config: &'a AppConfig,
    tracker: TrackerClient,
    watcher: FileWatcher,
    store: JsonStore,
    notifier: N,
    opener: fn(&str) -> Result<()>,
}

impl<'a, N: Notifier> MmrUpdateService<'a, N> {
    pub fn new(config: &'a AppConfig, notifier: N) -> Result<Self> {
        Ok(Self {
            config,
            tracker: TrackerClient::new(&config.tracker)?,
            watcher: FileWatcher::new(&config.watch),
            store: JsonStore::new(&config.repo_root),
            notifier,
            opener: open_url,
        })
    }

    pub fn with_watcher(mut self, watcher: FileWatcher) -> Self {
        self.watcher = watcher;
        self
    }

    /// Replace how the tracker page is opened during the manual fallback
    pub fn with_opener(mut self, opener: fn(&str) -> Result<()>) -> Self {
        self.opener = opener;
        self
    }

    pub async fn run(&self, commit: bool, cancel: &CancelToken) -> Result<UpdateOutcome> {
        report::banner("MaGnetBear MMR Updater");

        info!("Trying auto-fetch with cookies...");
        let payload = match self.auto_fetch().await {
            Ok(payload) => {
                info!("  Success! Got data from API.");
                payload
            }
            Err(e) => {
                warn!("  Auto-fetch failed: {}", e);
                self.report_fetch_failure(&e);

                match self.manual_fetch(cancel).await? {
                    ManualFetch::Payload(payload) => payload,
                    ManualFetch::TimedOut => {
                        info!("  Timeout. Run again when ready.");
                        return Ok(UpdateOutcome::TimedOut);
                    }
                    ManualFetch::Cancelled => {
                        info!("  Cancelled. Nothing written.");
                        return Ok(UpdateOutcome::Cancelled);
                    }
                }
            }
        };

        info!("  Converting...");
        let conversion = ConversionService::new(self.config).convert(&payload, Utc::now())?;
        report::print_rating(&conversion.document);

        if commit {
            self.commit()?;
        }

        println!("\n  Done!");
        report::rule();
        Ok(UpdateOutcome::Updated)
    }

    async fn auto_fetch(&self) -> Result<Value, FetchError> {
        let cookies_path = self.config.resolve(&self.config.paths.cookies);
        let jar = CookieJar::load(&cookies_path)?;
        info!("  Loaded {} cookies", jar.len());

        self.tracker.fetch_history(&jar).await
    }

    fn report_fetch_failure(&self, error: &FetchError) {
        if error.needs_reauth() {
            self.notifier.notify(
                "MMR Updater: Cookies Expired!",
                "Re-export cookies from tracker.gg to continue auto-updates.",
                true,
            );
        }

        if error.is_missing_cookies() {
            println!(
                "
  To enable auto-fetch:
    1. Install \"Get cookies.txt LOCALLY\" browser extension
    2. Visit tracker.gg and export cookies
    3. Save as: {}
",
                self.config.paths.cookies.display()
            );
        }
    }

    async fn manual_fetch(&self, cancel: &CancelToken) -> Result<ManualFetch> {
        info!("  Falling back to manual mode...");

        let raw_path = self.config.resolve(&self.config.paths.raw_export);
        let baseline = FileWatcher::baseline(&raw_path);

        if let Err(e) = (self.opener)(self.tracker.page_url()) {
            warn!("  {:#}", e);
            println!("  Open this page manually: {}", self.tracker.page_url());
        }

        println!(
            "
  Browser opened! Now:

  1. F12 -> Network tab -> F5 refresh
  2. Filter: player-history
  3. Click request -> Response tab
  4. Ctrl+A -> Ctrl+C -> Save to: {}

  Waiting for file... (Ctrl+C to cancel)",
            self.config.paths.raw_export.display()
        );

        match self.watcher.wait_for_change(&raw_path, baseline, cancel).await {
            WatchOutcome::Changed => {}
            WatchOutcome::TimedOut => return Ok(ManualFetch::TimedOut),
            WatchOutcome::Cancelled => return Ok(ManualFetch::Cancelled),
        }

        info!("  File detected!");
        let text = self
            .store
            .read_text(&self.config.paths.raw_export)?
            .unwrap_or_default();
        Ok(ManualFetch::Payload(parse_payload(&text)?))
    }

    fn commit(&self) -> Result<()> {
        info!("  Committing...");
        SourceControl::new(&self.config.repo_root).commit_and_push(
            &self.config.paths.display,
            &commit_message(Local::now()),
        )?;
        Ok(())
    }
}

enum ManualFetch {
    Payload(Value),
    TimedOut,
    Cancelled,
}
