pub mod client;
pub mod cookies;

pub use client::HttpClient;
pub use cookies::{Cookie, CookieJar};
