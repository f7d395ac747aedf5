use crate::Result;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Blocking JSON client shared by the public job API sources.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
}

impl HttpClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let inner = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;
        Ok(Self { inner })
    }

    /// Fetch and decode a JSON document. A non-success status yields `None`.
    pub fn get_json(&self, url: &str) -> Result<Option<Value>> {
        debug!(url, "requesting");
        let response = self.inner.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            warn!(url, %status, "unexpected status, skipping source");
            return Ok(None);
        }

        Ok(Some(response.json()?))
    }
}
