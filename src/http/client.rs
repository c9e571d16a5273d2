use anyhow::{Context, Result};
use reqwest::{Client, Response};
use std::time::Duration;

/// HTTP client with a fixed user agent and timeout
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(user_agent: &str, timeout_secs: u64) -> Result<Self> {
        let client = Self::build_client(user_agent, timeout_secs)?;
        Ok(Self { client })
    }

    /// Send a GET request with extra headers; status checks are left to the caller
    pub async fn get(&self, url: &str, headers: &[(&str, String)]) -> reqwest::Result<Response> {
        let mut request = self.client.get(url);

        for (name, value) in headers {
            request = request.header(*name, value.as_str());
        }

        request.send().await
    }

    fn build_client(user_agent: &str, timeout_secs: u64) -> Result<Client> {
        Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")
    }
}
