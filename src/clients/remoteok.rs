use crate::client::HttpClient;
use crate::crawler::Crawler;
use crate::utils::str_field;
use crate::{RawJob, Result};
use serde_json::Value;

const SOURCE: &str = "RemoteOK API";

pub struct RemoteOkClient {
    url: String,
    http: HttpClient,
    limit: usize,
}

impl RemoteOkClient {
    pub fn new(http: HttpClient, limit: usize) -> Self {
        Self {
            url: "https://remoteok.io/api".to_string(),
            http,
            limit,
        }
    }

    /// The first array element is a legal notice, not a posting.
    pub fn parse_response(&self, data: &Value) -> Vec<RawJob> {
        let Some(entries) = data.as_array() else {
            return Vec::new();
        };

        entries
            .iter()
            .skip(1)
            .take(self.limit)
            .filter(|job| !str_field(job, "description", "").is_empty())
            .map(|job| {
                RawJob::new(
                    str_field(job, "position", "Remote Developer").to_string(),
                    str_field(job, "company", "Remote Company").to_string(),
                    str_field(job, "location", "Remote").to_string(),
                    str_field(job, "description", "Remote software position").to_string(),
                )
                .with_source(SOURCE, str_field(job, "url", ""))
            })
            .collect()
    }
}

impl Crawler for RemoteOkClient {
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

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;

    #[test]
    fn test_parse_response_skips_notice_and_empty_descriptions() {
        let client = RemoteOkClient::new(HttpClient::new(Duration::from_secs(1)).unwrap(), 15);
        let data = json!([
            { "legal": "API terms of service" },
            { "position": "Backend Engineer", "company": "Nomad", "description": "Go services" },
            { "position": "No Description", "description": "" },
            { "company": "Quiet", "description": "Remote first team" }
        ]);

        let jobs = client.parse_response(&data);

        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].title, "Backend Engineer");
        assert_eq!(jobs[0].location, "Remote");
        assert_eq!(jobs[1].title, "Remote Developer");
        assert_eq!(jobs[1].company, "Quiet");
        assert_eq!(jobs[1].source, SOURCE);
    }
}
