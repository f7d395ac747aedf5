use crate::client::HttpClient;
use crate::clients::{AuthenticJobsClient, GithubJobsClient, RemoteOkClient, SampleGenerator, seed_jobs};
use crate::utils::random_delay;
use crate::{RawJob, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;
use tracing::{info, warn};

/// A source of raw job postings.
pub trait Crawler {
    fn name(&self) -> &str;

    fn start_crawl(&self) -> Result<Vec<RawJob>>;
}

#[derive(Debug, Clone)]
pub struct CollectConfig {
    /// Final number of postings kept.
    pub target_count: usize,
    /// Below this many collected postings, synthetic samples are added.
    pub min_count: usize,
    /// Maximum postings taken from each API.
    pub per_source_limit: usize,
    pub timeout: Duration,
    /// Pause between API sources, picked at random from these (milliseconds).
    pub delays_ms: Vec<u64>,
    /// Skip the public APIs and use only the bundled dataset and samples.
    pub offline: bool,
    /// Seed for sample generation; random when unset.
    pub seed: Option<u64>,
}

impl Default for CollectConfig {
    fn default() -> Self {
        Self {
            target_count: 60,
            min_count: 50,
            per_source_limit: 15,
            timeout: Duration::from_secs(10),
            delays_ms: vec![1000],
            offline: false,
            seed: None,
        }
    }
}

/// Gathers postings from every configured source, then pads with samples.
pub struct JobCollector {
    config: CollectConfig,
    sources: Vec<Box<dyn Crawler + Send + Sync>>,
}

impl JobCollector {
    /// Collector over the public job APIs (none when `offline`).
    pub fn new(config: CollectConfig) -> Result<Self> {
        let sources: Vec<Box<dyn Crawler + Send + Sync>> = if config.offline {
            Vec::new()
        } else {
            let http = HttpClient::new(config.timeout)?;
            let limit = config.per_source_limit;
            vec![
                Box::new(GithubJobsClient::new(http.clone(), limit)),
                Box::new(RemoteOkClient::new(http.clone(), limit)),
                Box::new(AuthenticJobsClient::new(http, limit)),
            ]
        };
        Ok(Self::with_sources(config, sources))
    }

    pub fn with_sources(config: CollectConfig, sources: Vec<Box<dyn Crawler + Send + Sync>>) -> Self {
        Self { config, sources }
    }

    fn crawl_sources(&self) -> Vec<RawJob> {
        let mut jobs = Vec::new();

        for (i, source) in self.sources.iter().enumerate() {
            match source.start_crawl() {
                Ok(found) => {
                    info!(source = source.name(), jobs = found.len(), "✅ source crawled");
                    jobs.extend(found);
                }
                Err(e) => warn!(source = source.name(), error = %e, "❌ source failed, skipping"),
            }

            if i + 1 < self.sources.len() {
                random_delay(&self.config.delays_ms);
            }
        }

        jobs
    }

    fn samples(&self, count: usize) -> Vec<RawJob> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        SampleGenerator::new().generate(count, &mut rng)
    }
}

impl Crawler for JobCollector {
    fn name(&self) -> &str {
        "collector"
    }

    fn start_crawl(&self) -> Result<Vec<RawJob>> {
        let mut jobs = self.crawl_sources();
        jobs.extend(seed_jobs());
        let real = jobs.len();
        info!(jobs = real, "real job postings collected");

        if real < self.config.min_count {
            let missing = self.config.target_count.saturating_sub(real);
            info!(samples = missing, "adding realistic samples");
            jobs.extend(self.samples(missing));
        }

        jobs.truncate(self.config.target_count);
        Ok(jobs)
    }
}
