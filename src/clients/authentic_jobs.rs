use crate::client::HttpClient;
use crate::crawler::Crawler;
use crate::utils::str_field;
use crate::{RawJob, Result};
use serde_json::Value;

const SOURCE: &str = "Authentic Jobs API";

pub struct AuthenticJobsClient {
    url: String,
    http: HttpClient,
    limit: usize,
}

impl AuthenticJobsClient {
    pub fn new(http: HttpClient, limit: usize) -> Self {
        Self {
            url: format!(
                "https://authenticjobs.com/api/?api_key=demo&method=aj.jobs.search&keywords=software+engineer&perpage={}",
                limit
            ),
            http,
            limit,
        }
    }

    pub fn parse_response(&self, data: &Value) -> Vec<RawJob> {
        let Some(listings) = data
            .pointer("/listings/listing")
            .and_then(|listing| listing.as_array())
        else {
            return Vec::new();
        };

        listings
            .iter()
            .take(self.limit)
            .map(|job| {
                let company = job.get("company").unwrap_or(&Value::Null);
                let location = company.get("location").unwrap_or(&Value::Null);
                RawJob::new(
                    str_field(job, "title", "Software Engineer").to_string(),
                    str_field(company, "name", "Tech Company").to_string(),
                    str_field(location, "name", "Remote").to_string(),
                    str_field(job, "description", "Software engineering role").to_string(),
                )
                .with_source(SOURCE, str_field(job, "url", ""))
            })
            .collect()
    }
}

impl Crawler for AuthenticJobsClient {
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
    fn test_parse_nested_company_fields() {
        let client =
            AuthenticJobsClient::new(HttpClient::new(Duration::from_secs(1)).unwrap(), 15);
        let data = json!({
            "listings": { "listing": [
                { "title": "Designer", "description": "Design systems",
                  "company": { "name": "Studio", "location": { "name": "Portland, OR" } } },
                { "title": "Engineer" }
            ]}
        });

        let jobs = client.parse_response(&data);

        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].company, "Studio");
        assert_eq!(jobs[0].location, "Portland, OR");
        assert_eq!(jobs[1].company, "Tech Company");
        assert_eq!(jobs[1].location, "Remote");
        assert_eq!(jobs[1].description, "Software engineering role");
    }

    #[test]
    fn test_missing_listings() {
        let client =
            AuthenticJobsClient::new(HttpClient::new(Duration::from_secs(1)).unwrap(), 15);
        assert!(client.parse_response(&json!({ "stat": "fail" })).is_empty());
    }
}
