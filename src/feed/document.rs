use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::path::Path;

use super::models::FeedItem;
use crate::errors::FeedError;
use crate::store::JsonStore;

const ITEMS_KEY: &str = "items";

/// A feed file; keys other than `items` are kept as they are
#[derive(Debug, Clone, PartialEq)]
pub struct FeedDocument {
    root: Map<String, Value>,
}

impl FeedDocument {
    pub fn empty() -> Self {
        let mut root = Map::new();
        root.insert(ITEMS_KEY.to_string(), Value::Array(Vec::new()));
        Self { root }
    }

    /// Load a feed file, starting empty when it does not exist
    pub fn load(store: &JsonStore, relative: &Path) -> Result<Self> {
        let Some(text) = store.read_text(relative)? else {
            return Ok(Self::empty());
        };
        Ok(Self::parse(&text, &store.path(relative))?)
    }

    pub fn parse(text: &str, path: &Path) -> Result<Self, FeedError> {
        let value: Value =
            serde_json::from_str(text).map_err(|source| FeedError::InvalidJson {
                path: path.to_path_buf(),
                source,
            })?;

        let Value::Object(mut root) = value else {
            return Err(FeedError::NotAnObject(path.to_path_buf()));
        };

        if !matches!(root.get(ITEMS_KEY), Some(Value::Array(_))) {
            root.insert(ITEMS_KEY.to_string(), Value::Array(Vec::new()));
        }

        Ok(Self { root })
    }

    pub fn len(&self) -> usize {
        self.items().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Newest items go first
    pub fn add_item_at_top(&mut self, item: &FeedItem) -> Result<()> {
        let value = serde_json::to_value(item).context("Failed to serialize feed item")?;

        match self.root.get_mut(ITEMS_KEY) {
            Some(Value::Array(items)) => items.insert(0, value),
            _ => {
                self.root
                    .insert(ITEMS_KEY.to_string(), Value::Array(vec![value]));
            }
        }
        Ok(())
    }

    pub fn save(&self, store: &JsonStore, relative: &Path) -> Result<()> {
        store.save(relative, &self.root)
    }

    fn items(&self) -> Option<&Vec<Value>> {
        self.root.get(ITEMS_KEY).and_then(Value::as_array)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::path::PathBuf;

    fn item(title: &str) -> FeedItem {
        FeedItem {
            date: "2025-01-01".to_string(),
            title: title.to_string(),
            body: String::new(),
            time: None,
            tz: None,
            inline_link: None,
            media: None,
            links: Vec::new(),
        }
    }

    fn path() -> PathBuf {
        PathBuf::from("data/posts.json")
    }

    #[test]
    fn test_missing_items_reset_to_empty_list() {
        let doc = FeedDocument::parse(r#"{"items": "oops", "version": 2}"#, &path()).unwrap();

        assert!(doc.is_empty());
        assert_eq!(doc.root["version"], 2);
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        let err = FeedDocument::parse("{not json", &path()).unwrap_err();

        assert!(matches!(err, FeedError::InvalidJson { .. }));
    }

    #[test]
    fn test_top_level_must_be_object() {
        let err = FeedDocument::parse("[1, 2]", &path()).unwrap_err();

        assert!(matches!(err, FeedError::NotAnObject(_)));
    }

    #[test]
    fn test_new_item_goes_first() {
        let mut doc = FeedDocument::parse(r#"{"items": [{"title": "old"}]}"#, &path()).unwrap();

        doc.add_item_at_top(&item("new")).unwrap();

        assert_eq!(doc.len(), 2);
        assert_eq!(doc.root["items"][0]["title"], "new");
        assert_eq!(doc.root["items"][1], json!({"title": "old"}));
    }

    #[test]
    fn test_load_missing_file_and_save() {
        let dir = std::env::temp_dir().join(format!("feed-doc-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        let store = JsonStore::new(&dir);
        let relative = Path::new("data/updates.json");

        let mut doc = FeedDocument::load(&store, relative).unwrap();
        assert!(doc.is_empty());

        doc.add_item_at_top(&item("first")).unwrap();
        doc.save(&store, relative).unwrap();

        let reloaded = FeedDocument::load(&store, relative).unwrap();
        assert_eq!(reloaded, doc);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
