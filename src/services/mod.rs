pub mod conversion;
pub mod feed;
pub mod mmr_update;
pub mod signatures;
