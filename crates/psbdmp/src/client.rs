use std::time::Duration;

use chrono::NaiveDate;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;

use psbdmp_core::dump::{ContentResponse, Dump, SearchResponse};
use psbdmp_core::{dates, paths};

use crate::prelude::Error;

pub const DEFAULT_BASE_URL: &str = "https://psbdmp.ws";

/// The service filters obvious bots, so the default User-Agent mimics a
/// desktop browser. Overridable via [`ClientConfig`].
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/66.0.3359.181 Safari/537.36";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(9);

/// Immutable client configuration, fixed at construction time.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Client for the psbdmp.ws dump search API.
///
/// Holds no per-request state; safe to reuse across calls. Every method
/// performs exactly one round trip, with no retries or caching.
#[derive(Debug, Clone)]
pub struct DumpClient {
    http: reqwest::Client,
    base_url: String,
}

impl DumpClient {
    /// Build a client from the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            // Handle base_url that may or may not have a trailing slash
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Search all dumps for a free-text keyword.
    pub async fn search(&self, keyword: &str) -> Result<Vec<Dump>, Error> {
        let envelope: SearchResponse = self.get(&paths::search(keyword)).await?;
        envelope.into_dumps().map_err(Error::Remote)
    }

    /// Search for dumps mentioning the given domain.
    pub async fn search_by_domain(&self, domain: &str) -> Result<Vec<Dump>, Error> {
        let envelope: SearchResponse = self.get(&paths::search_domain(domain)).await?;
        envelope.into_dumps().map_err(Error::Remote)
    }

    /// Search for dumps mentioning the given email address.
    pub async fn search_by_email(&self, email: &str) -> Result<Vec<Dump>, Error> {
        let envelope: SearchResponse = self.get(&paths::search_email(email)).await?;
        envelope.into_dumps().map_err(Error::Remote)
    }

    /// List dumps posted between the given dates.
    ///
    /// `from` and `to` go over the wire as `DD.MM.YYYY`. Ordering is not
    /// validated here; a reversed range is the remote service's call.
    pub async fn get_by_date(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<Dump>, Error> {
        let url = format!("{}/{}", self.base_url, paths::DUMPS_BY_DATE);
        log::debug!("POST {url}");

        let request = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(dates::date_range_body(from, to));

        let envelope: SearchResponse = Self::execute(request).await?;
        envelope.into_dumps().map_err(Error::Remote)
    }

    /// Fetch the full content of a single dump.
    pub async fn get_dump_content(&self, id: &str) -> Result<String, Error> {
        let envelope: ContentResponse = self.get(&paths::dump_content(id)).await?;
        envelope.into_content().map_err(Error::Remote)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = format!("{}/{path}", self.base_url);
        log::debug!("GET {url}");
        Self::execute(self.http.get(&url)).await
    }

    /// Send the request and decode the JSON body.
    ///
    /// The body is read as text and decoded separately so that malformed
    /// JSON surfaces as [`Error::Decode`] rather than a transport failure.
    async fn execute<T: DeserializeOwned>(request: reqwest::RequestBuilder) -> Result<T, Error> {
        let response = request.send().await?.error_for_status()?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
