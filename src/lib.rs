pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod feed;
pub mod http;
pub mod rank;
pub mod report;
pub mod series;
pub mod services;
pub mod signatures;
pub mod store;
pub mod system;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;
use log::{info, warn};
use std::path::Path;

use crate::config::AppConfig;
use crate::feed::{ConsolePrompter, FeedKind};
use crate::services::conversion::ConversionService;
use crate::services::feed::FeedService;
use crate::services::mmr_update::MmrUpdateService;
use crate::services::signatures::SignatureService;
use crate::system::{CancelToken, DesktopNotifier};

pub fn interpret() -> Cli {
    Cli::parse()
}

pub fn handle_update(repo: &Path, commit: bool) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new(repo);
        let cancel = CancelToken::new();
        spawn_interrupt_listener(cancel.clone());

        let service = MmrUpdateService::new(&config, DesktopNotifier::new("MMR Updater"))?;
        let outcome = service.run(commit, &cancel).await?;
        info!("Update finished: {:?}", outcome);
        Ok(())
    })
}

pub fn handle_convert(repo: &Path, input: Option<&Path>) -> Result<()> {
    let config = AppConfig::new(repo);
    let service = ConversionService::new(&config);
    let report = service.run(input)?;

    report::print_rating(&report.document);
    Ok(())
}

pub fn handle_feed(repo: &Path, kind: FeedKind) -> Result<()> {
    let config = AppConfig::new(repo);
    let mut service = FeedService::new(&config, ConsolePrompter::stdin());
    service.run(kind)?;
    Ok(())
}

pub fn handle_signatures(repo: &Path) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new(repo);
        let service = SignatureService::new(&config)?;
        service.run().await?;
        Ok(())
    })
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}

/// Trip `cancel` on the first Ctrl-C
fn spawn_interrupt_listener(cancel: CancelToken) {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                warn!("Interrupted, stopping...");
                cancel.cancel();
            }
            Err(e) => warn!("Could not listen for Ctrl-C: {}", e),
        }
    });
}
