pub mod parser;

pub use parser::{SignatureSummary, parse_signatures};
