use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use log::info;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    NoChanges,
    Pushed,
}

/// Commits and pushes generated data files in the site repository
pub struct SourceControl {
    repo_root: PathBuf,
}

impl SourceControl {
    pub fn new<P: AsRef<Path>>(repo_root: P) -> Self {
        Self {
            repo_root: repo_root.as_ref().to_path_buf(),
        }
    }

    pub fn commit_and_push(&self, file: &Path, message: &str) -> Result<CommitOutcome> {
        let file_arg = file.to_string_lossy().into_owned();

        if !self.has_changes(&file_arg)? {
            info!("  No changes.");
            return Ok(CommitOutcome::NoChanges);
        }

        self.run(&["add", file_arg.as_str()])?;
        self.run(&["commit", "-m", message])?;
        self.run(&["push"])?;

        info!("  Pushed!");
        Ok(CommitOutcome::Pushed)
    }

    fn has_changes(&self, file: &str) -> Result<bool> {
        let status = self.status(&["diff", "--quiet", file])?;
        Ok(!status.success())
    }

    fn run(&self, args: &[&str]) -> Result<()> {
        let status = self.status(args)?;
        if !status.success() {
            anyhow::bail!("git {} failed with {}", args.join(" "), status);
        }
        Ok(())
    }

    fn status(&self, args: &[&str]) -> Result<ExitStatus> {
        Command::new("git")
            .args(args)
            .current_dir(&self.repo_root)
            .status()
            .with_context(|| format!("Failed to run git {}", args.join(" ")))
    }
}

pub fn commit_message(now: DateTime<Local>) -> String {
    format!("Update MMR [{}]", now.format("%Y-%m-%d %H:%M"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_commit_message_format() {
        let now = Local.with_ymd_and_hms(2025, 3, 9, 7, 5, 0).unwrap();

        assert_eq!(commit_message(now), "Update MMR [2025-03-09 07:05]");
    }
}
