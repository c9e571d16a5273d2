pub mod ranks;
pub mod settings;

pub use ranks::{FALLBACK_BAND_COLOR, TOP_TIER_SPAN, TierConfig, get_family_colors, get_rank_tiers};
pub use settings::{
    AppConfig, PathSettings, ProfileSettings, SignatureSettings, TrackerSettings, WatchSettings,
};
