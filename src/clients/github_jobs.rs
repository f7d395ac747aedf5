use crate::client::HttpClient;
use crate::crawler::Crawler;
use crate::utils::str_field;
use crate::{RawJob, Result};
use serde_json::Value;

const SOURCE: &str = "GitHub Jobs API";

/// The archived GitHub Jobs positions endpoint.
pub struct GithubJobsClient {
    url: String,
    http: HttpClient,
    limit: usize,
}

impl GithubJobsClient {
    pub fn new(http: HttpClient, limit: usize) -> Self {
        Self {
            url: "https://jobs.github.com/positions.json?description=software+engineer".to_string(),
            http,
            limit,
        }
    }

    pub fn parse_response(&self, data: &Value) -> Vec<RawJob> {
        let Some(positions) = data.as_array() else {
            return Vec::new();
        };

        positions
            .iter()
            .take(self.limit)
            .map(|job| {
                RawJob::new(
                    str_field(job, "title", "Software Engineer").to_string(),
                    str_field(job, "company", "Tech Company").to_string(),
                    str_field(job, "location", "Remote").to_string(),
                    str_field(job, "description", "Software engineering position").to_string(),
                )
                .with_source(SOURCE, str_field(job, "url", ""))
            })
            .collect()
    }
}

impl Crawler for GithubJobsClient {
    fn name(&self) -> &str {
        SOURCE
    }

    fn start_crawl(&self) -> Result<Vec<RawJob>> {
        Ok(self
            .http
            .get_json(&self.url)?
            .map(|data| self.parse_response(&data))
            .unwrap_or_default())
    }
}
