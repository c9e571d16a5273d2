use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;
use std::process::Command;

/// Open `url` in a local browser, preferring an installed Chrome on Windows
pub fn open_url(url: &str) -> Result<()> {
    let mut command = match find_chrome() {
        Some(chrome) => {
            info!("  Opening Chrome: {}", chrome.display());
            let mut command = Command::new(chrome);
            command.arg(url);
            command
        }
        None => platform_opener(url),
    };

    command
        .spawn()
        .with_context(|| format!("Failed to open browser for {}", url))?;
    Ok(())
}

fn find_chrome() -> Option<PathBuf> {
    chrome_candidates().into_iter().find(|path| path.exists())
}

fn chrome_candidates() -> Vec<PathBuf> {
    if !cfg!(target_os = "windows") {
        return Vec::new();
    }

    let mut candidates = vec![
        PathBuf::from(r"C:\Program Files\Google\Chrome\Application\chrome.exe"),
        PathBuf::from(r"C:\Program Files (x86)\Google\Chrome\Application\chrome.exe"),
    ];

    if let Ok(local) = std::env::var("LOCALAPPDATA") {
        candidates.push(PathBuf::from(local).join(r"Google\Chrome\Application\chrome.exe"));
    }

    candidates
}

fn platform_opener(url: &str) -> Command {
    if cfg!(target_os = "windows") {
        let mut command = Command::new("cmd");
        command.args(["/C", "start", "", url]);
        command
    } else if cfg!(target_os = "macos") {
        let mut command = Command::new("open");
        command.arg(url);
        command
    } else {
        let mut command = Command::new("xdg-open");
        command.arg(url);
        command
    }
}
