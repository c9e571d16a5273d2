pub mod browser;
pub mod git;
pub mod notify;
pub mod watch;

pub use browser::open_url;
pub use git::{CommitOutcome, SourceControl, commit_message};
pub use notify::{DesktopNotifier, Notifier};
pub use watch::{CancelToken, FileWatcher, WatchOutcome};
