pub mod bands;
pub mod resolver;
mod table;
pub mod types;

pub use bands::{BAND_MARGIN, build_bands, build_bands_for_ratings};
pub use resolver::resolve_rank;
pub use table::RankTable;
pub use types::{Division, Mmr, RankPosition, RankTier, UNRANKED};
