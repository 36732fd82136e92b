use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;

/// HTTP client for a PostgREST endpoint, carrying the service key on every request
pub struct RestClient {
    client: Client,
    service_key: String,
}

impl RestClient {
    pub fn new(user_agent: &str, timeout_secs: u64, service_key: &str) -> Result<Self> {
        let client = Self::build_client(user_agent, timeout_secs)?;

        Ok(Self {
            client,
            service_key: service_key.to_string(),
        })
    }

    pub async fn get(
        &self,
        url: &str,
        query: &[(String, String)],
    ) -> reqwest::Result<reqwest::Response> {
        self.client
            .get(url)
            .query(query)
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
            .header("Accept", "application/json")
            .send()
            .await
    }

    fn build_client(user_agent: &str, timeout_secs: u64) -> Result<Client> {
        Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")
    }
}
