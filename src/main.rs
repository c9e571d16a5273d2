use anyhow::Result;

use campaign_tools::cli::{Cli, Command};
use campaign_tools::{
    handle_completions, handle_convert, handle_feed, handle_signatures, handle_update, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let cli = interpret();
    execute_command(&cli)
}

fn execute_command(cli: &Cli) -> Result<()> {
    match &cli.command {
        Command::Update { commit } => handle_update(&cli.repo, *commit),
        Command::Convert { input } => handle_convert(&cli.repo, input.as_deref()),
        Command::Feed { feed } => handle_feed(&cli.repo, *feed),
        Command::Signatures => handle_signatures(&cli.repo),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
