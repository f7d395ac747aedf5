pub mod authentic_jobs;
pub mod github_jobs;
pub mod remoteok;
pub mod samples;
pub mod seed;

pub use authentic_jobs::AuthenticJobsClient;
pub use github_jobs::GithubJobsClient;
pub use remoteok::RemoteOkClient;
pub use samples::{SAMPLE_SOURCE, SampleGenerator};
pub use seed::{SEED_SOURCE, seed_jobs};
