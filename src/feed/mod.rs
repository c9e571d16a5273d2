pub mod builder;
pub mod document;
pub mod media;
pub mod models;
pub mod prompt;

pub use builder::{ClockDefaults, ItemBuilder};
pub use document::FeedDocument;
pub use models::{FeedItem, FeedKind, Link, Media};
pub use prompt::{ConsolePrompter, Prompter};
