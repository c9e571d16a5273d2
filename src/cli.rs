use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::feed::FeedKind;

#[derive(Parser, Debug)]
#[command(author, version, about = "MaGnetBear campaign site data tools")]
pub struct Cli {
    /// Path to the site repository root
    #[arg(long, global = true, default_value = ".")]
    pub repo: PathBuf,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Fetch the latest ratings and rebuild the MMR chart data
    Update {
        /// Commit and push data/mmr-data.json when it changed
        #[arg(long)]
        commit: bool,
    },
    /// Convert a raw tracker export (stdin when piped, otherwise a file)
    Convert {
        /// Raw export to read instead of stdin or data/trn-raw.json
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Add a new item to data/posts.json or data/updates.json
    Feed {
        /// Which feed to edit
        #[arg(value_enum)]
        feed: FeedKind,
    },
    /// Rebuild signatures.json from the published sheet
    Signatures,
    /// Print shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}
