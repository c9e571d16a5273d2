pub mod sheets_client;
pub mod tracker_client;

pub use sheets_client::SheetsClient;
pub use tracker_client::TrackerClient;
