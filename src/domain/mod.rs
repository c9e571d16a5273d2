pub mod models;
pub mod tracker;

pub use models::*;
pub use tracker::{PlaylistHistory, extract_observations, parse_timestamp, select_playlist};
