//! Text normalization, skill extraction and de-duplication of raw postings.

use std::collections::{BTreeSet, HashSet};
use std::sync::LazyLock;

use regex::Regex;
use scraper::Html;
use tracing::{debug, info};

use crate::annotators::rules::word_pattern;
use crate::models::{CleanedJob, RawJob};

/// Descriptions shorter than this are too thin to annotate.
pub const MIN_DESCRIPTION_WORDS: usize = 30;

/// Characters of the description that go into the duplicate fingerprint.
const FINGERPRINT_PREFIX_CHARS: usize = 100;

const TECH_SKILLS: &[&str] = &[
    "python", "java", "javascript", "typescript", "react", "angular", "vue",
    "node.js", "django", "flask", "spring", "sql", "nosql", "mongodb",
    "postgresql", "mysql", "aws", "azure", "gcp", "docker", "kubernetes",
    "git", "jenkins", "agile", "scrum", "rest", "api", "microservices",
    "tensorflow", "pytorch", "machine learning", "ai", "ci/cd", "linux",
    "html", "css", "bootstrap", "tailwind", "redis", "kafka", "rabbitmq",
];

static SKILL_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    TECH_SKILLS
        .iter()
        .map(|&skill| (skill, word_pattern(skill)))
        .collect()
});

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());
static URL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"http\S+|www\.\S+").unwrap());
static SPECIAL_CHARS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s.,!?;:()-]").unwrap());
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

#[derive(Debug, Default)]
pub struct JobCleaner;

impl JobCleaner {
    pub fn new() -> Self {
        Self
    }

    /// Decode entities, drop markup and URLs, strip unusual punctuation,
    /// collapse whitespace and lowercase.
    pub fn clean_text(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let decoded: String = Html::parse_fragment(text)
            .root_element()
            .text()
            .collect();
        // Entities like "&lt;b&gt;" only become tags after decoding.
        let text = TAG_RE.replace_all(&decoded, "");
        let text = URL_RE.replace_all(&text, "");
        let text = SPECIAL_CHARS_RE.replace_all(&text, "");
        let text = WHITESPACE_RE.replace_all(&text, " ");

        text.trim().to_lowercase()
    }

    /// Skills from the fixed vocabulary found in the text, sorted and unique.
    pub fn extract_skills(&self, description: &str) -> Vec<String> {
        let text = description.to_lowercase();
        SKILL_PATTERNS
            .iter()
            .filter(|(_, re)| re.is_match(&text))
            .map(|&(skill, _)| skill)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Clean one raw posting, or `None` if it lacks a title or a usable description.
    pub fn clean_job(&self, job: &RawJob) -> Option<CleanedJob> {
        let title = self.clean_text(&job.title);
        let description = self.clean_text(&job.description);

        let word_count = description.split_whitespace().count();
        if title.is_empty() || word_count < MIN_DESCRIPTION_WORDS {
            debug!(title = %job.title, word_count, "skipping posting");
            return None;
        }

        Some(CleanedJob {
            skills: self.extract_skills(&description),
            char_count: description.chars().count(),
            word_count,
            title,
            company: self.clean_text(&job.company),
            location: self.clean_text(&job.location),
            description,
            source: job.source.clone(),
            url: job.url.clone(),
            extra: Default::default(),
        })
    }

    /// Keep the first posting for each title + description-prefix fingerprint.
    pub fn remove_duplicates(&self, jobs: Vec<CleanedJob>) -> Vec<CleanedJob> {
        let mut seen = HashSet::new();
        jobs.into_iter()
            .filter(|job| seen.insert(fingerprint(job)))
            .collect()
    }

    pub fn clean_dataset(&self, raw: &[RawJob]) -> Vec<CleanedJob> {
        let cleaned: Vec<_> = raw.iter().filter_map(|job| self.clean_job(job)).collect();
        let kept = cleaned.len();
        let unique = self.remove_duplicates(cleaned);

        info!(
            raw = raw.len(),
            too_short = raw.len() - kept,
            duplicates = kept - unique.len(),
            cleaned = unique.len(),
            "cleaned job descriptions"
        );
        unique
    }
}

fn fingerprint(job: &CleanedJob) -> String {
    let prefix: String = job
        .description
        .chars()
        .take(FINGERPRINT_PREFIX_CHARS)
        .collect();
    format!("{}_{}", job.title.to_lowercase(), prefix.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn long_description(topic: &str) -> String {
        format!(
            "We are looking for an engineer to work on {}. You will design, build and \
             operate services used by millions of people every day, collaborate with \
             product and design, review code, and mentor others on the team across \
             several time zones.",
            topic
        )
    }

    #[test]
    fn test_clean_text_strips_html_and_entities() {
        let cleaner = JobCleaner::new();
        assert_eq!(
            cleaner.clean_text("<p>Build <b>APIs</b> &amp; services</p>"),
            "build apis services"
        );
    }

    #[test]
    fn test_clean_text_removes_urls_and_symbols() {
        let cleaner = JobCleaner::new();
        assert_eq!(
            cleaner.clean_text("Apply at https://example.com/jobs or www.example.com now!"),
            "apply at or now!"
        );
        assert_eq!(cleaner.clean_text("C# and CI/CD, 5+ years"), "c and cicd, 5 years");
    }

    #[test]
    fn test_clean_text_normalizes_whitespace() {
        let cleaner = JobCleaner::new();
        assert_eq!(cleaner.clean_text("  Senior\n\n\tEngineer   "), "senior engineer");
        assert_eq!(cleaner.clean_text(""), "");
    }

    #[test]
    fn test_extract_skills_sorted_and_bounded() {
        let cleaner = JobCleaner::new();
        let skills = cleaner.extract_skills("react, python and docker. more react. javascripting");
        assert_eq!(skills, vec!["docker", "python", "react"]);
    }

    #[test]
    fn test_extract_multi_word_skill() {
        let cleaner = JobCleaner::new();
        let skills = cleaner.extract_skills("experience with machine learning and node.js");
        assert_eq!(skills, vec!["machine learning", "node.js"]);
    }

    #[test]
    fn test_clean_job_drops_short_descriptions() {
        let cleaner = JobCleaner::new();
        let job = RawJob::new(
            "Engineer".into(),
            "Acme".into(),
            "Remote".into(),
            "Too short to be useful.".into(),
        );
        assert!(cleaner.clean_job(&job).is_none());
    }

    #[test]
    fn test_clean_job_drops_missing_title() {
        let cleaner = JobCleaner::new();
        let job = RawJob::new(
            "<br>".into(),
            "Acme".into(),
            "Remote".into(),
            long_description("python"),
        );
        assert!(cleaner.clean_job(&job).is_none());
    }

    #[test]
    fn test_clean_job_fills_metadata() {
        let cleaner = JobCleaner::new();
        let job = RawJob::new(
            "Backend Engineer".into(),
            "Acme Corp".into(),
            "Seattle, WA".into(),
            long_description("Python and AWS"),
        )
        .with_source("Public Dataset", "https://acme.example/jobs/1");

        let cleaned = cleaner.clean_job(&job).unwrap();

        assert_eq!(cleaned.title, "backend engineer");
        assert_eq!(cleaned.company, "acme corp");
        assert_eq!(cleaned.location, "seattle, wa");
        assert_eq!(cleaned.skills, vec!["aws", "python"]);
        assert_eq!(cleaned.word_count, cleaned.description.split_whitespace().count());
        assert_eq!(cleaned.char_count, cleaned.description.chars().count());
        assert!(cleaned.word_count >= MIN_DESCRIPTION_WORDS);
        assert_eq!(cleaned.source, "Public Dataset");
        assert_eq!(cleaned.url, "https://acme.example/jobs/1");
    }

    #[test]
    fn test_clean_dataset_removes_duplicates() {
        let cleaner = JobCleaner::new();
        let first = RawJob::new(
            "Data Engineer".into(),
            "Acme".into(),
            "Remote".into(),
            long_description("spark"),
        );
        let mut repost = first.clone();
        repost.company = "Acme Staffing".into();
        let other = RawJob::new(
            "Data Engineer".into(),
            "Acme".into(),
            "Remote".into(),
            long_description("kafka"),
        );

        let cleaned = cleaner.clean_dataset(&[first, repost, other]);

        // Same title and same first 100 chars: the repost is dropped.
        assert_eq!(cleaned.len(), 2);
        assert_eq!(cleaned[0].company, "acme");
    }
}
