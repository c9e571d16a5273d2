pub mod archive;
mod consolidate;
mod dedup;
mod gaps;
pub mod pipeline;

pub use archive::{MergeOutcome, merge_into_archive, sanitize_archive};
pub use consolidate::consolidate_runs;
pub use dedup::dedup_daily;
pub use gaps::fill_gaps;
pub use pipeline::{DocumentInputs, build_display_document, format_timestamp, normalize_for_display};
