use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// JSON file store rooted at the site repository
pub struct JsonStore {
    root: PathBuf,
}

impl JsonStore {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self, relative: &Path) -> PathBuf {
        self.root.join(relative)
    }

    /// Load and deserialize a file, `None` when it does not exist
    pub fn load<T: for<'de> Deserialize<'de>>(&self, relative: &Path) -> Result<Option<T>> {
        let file_path = self.path(relative);

        let Some(json) = self.read_text(relative)? else {
            return Ok(None);
        };

        let data = serde_json::from_str(&json).with_context(|| {
            format!(
                "Failed to parse JSON from {:?}. First 200 chars: {}",
                file_path,
                json.chars().take(200).collect::<String>()
            )
        })?;

        info!("Loaded data from: {}", file_path.display());
        Ok(Some(data))
    }

    /// Raw file contents, `None` when it does not exist
    pub fn read_text(&self, relative: &Path) -> Result<Option<String>> {
        let file_path = self.path(relative);

        if !file_path.exists() {
            return Ok(None);
        }

        let text = fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read {}", file_path.display()))?;
        Ok(Some(text))
    }

    /// Write pretty JSON with a trailing newline, replacing the file atomically
    pub fn save<T: Serialize>(&self, relative: &Path, data: &T) -> Result<()> {
        let file_path = self.path(relative);
        self.ensure_parent(&file_path)?;

        let mut json = serde_json::to_string_pretty(data).context("Failed to serialize data")?;
        json.push('\n');

        let temp_path = Self::temp_path(&file_path);
        fs::write(&temp_path, json)
            .with_context(|| format!("Failed to write {}", temp_path.display()))?;
        fs::rename(&temp_path, &file_path)
            .with_context(|| format!("Failed to replace {}", file_path.display()))?;

        info!("Saved data to: {}", file_path.display());
        Ok(())
    }

    pub fn exists(&self, relative: &Path) -> bool {
        self.path(relative).exists()
    }

    // --- Helper Methods ---

    fn ensure_parent(&self, file_path: &Path) -> Result<()> {
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
        Ok(())
    }

    fn temp_path(file_path: &Path) -> PathBuf {
        let mut name = file_path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        file_path.with_file_name(name)
    }
}
