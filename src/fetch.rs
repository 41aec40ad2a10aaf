//! Fetching pages. One GET per call, no retries.

use async_trait::async_trait;
use reqwest::Client;

use crate::config::SiteConfig;
use crate::error::{Error, Result};

#[async_trait]
pub trait Fetch: Send + Sync {
    /// Returns the body of `url` with `query` appended. Non-2xx responses are
    /// errors.
    async fn fetch(&self, url: &str, query: &[(&str, &str)]) -> Result<String>;
}

#[derive(Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &SiteConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(HttpFetcher { client })
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &str, query: &[(&str, &str)]) -> Result<String> {
        let response = self.client.get(url).query(query).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response.text().await?)
    }
}
