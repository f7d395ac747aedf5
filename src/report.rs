//! Stage summaries printed by the CLI after each step.

use std::collections::BTreeMap;
use std::fmt;

use crate::clients::SAMPLE_SOURCE;
use crate::labels::{EducationLevel, ExperienceLevel, JobCategory, RemotePossible};
use crate::models::{AnnotatedJob, CleanedJob, RawJob};
use crate::utils::title_case;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionSummary {
    pub total: usize,
    pub real: usize,
    pub samples: usize,
}

impl CollectionSummary {
    pub fn from_jobs(jobs: &[RawJob]) -> Self {
        let samples = jobs.iter().filter(|j| j.source == SAMPLE_SOURCE).count();
        Self {
            total: jobs.len(),
            real: jobs.len() - samples,
            samples,
        }
    }
}

impl fmt::Display for CollectionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Collected {} job descriptions", self.total)?;
        writeln!(f, "  Real data: {} entries", self.real)?;
        write!(f, "  Sample data: {} entries", self.samples)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CleaningSummary {
    pub records: usize,
    pub average_words: f64,
    pub total_skills: usize,
}

impl CleaningSummary {
    pub fn from_jobs(jobs: &[CleanedJob]) -> Self {
        let total_words: usize = jobs.iter().map(|j| j.word_count).sum();
        let average_words = if jobs.is_empty() {
            0.0
        } else {
            total_words as f64 / jobs.len() as f64
        };
        Self {
            records: jobs.len(),
            average_words,
            total_skills: jobs.iter().map(|j| j.skills.len()).sum(),
        }
    }
}

impl fmt::Display for CleaningSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Cleaning Statistics:")?;
        writeln!(f, "  Records kept: {}", self.records)?;
        writeln!(f, "  Average description length: {:.1} words", self.average_words)?;
        write!(f, "  Total skills identified: {}", self.total_skills)
    }
}

/// Label distributions over an annotated batch. Every label value is listed,
/// including those with a zero count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationSummary {
    pub experience: BTreeMap<ExperienceLevel, usize>,
    pub category: BTreeMap<JobCategory, usize>,
    pub education: BTreeMap<EducationLevel, usize>,
    pub remote: BTreeMap<RemotePossible, usize>,
}

impl AnnotationSummary {
    pub fn from_jobs(jobs: &[AnnotatedJob]) -> Self {
        let mut summary = Self {
            experience: ExperienceLevel::ALL.into_iter().map(|l| (l, 0)).collect(),
            category: JobCategory::ALL.into_iter().map(|c| (c, 0)).collect(),
            education: EducationLevel::ALL.into_iter().map(|e| (e, 0)).collect(),
            remote: RemotePossible::ALL.into_iter().map(|r| (r, 0)).collect(),
        };

        for job in jobs {
            let labels = &job.annotations;
            *summary.experience.entry(labels.experience_level).or_default() += 1;
            *summary.category.entry(labels.job_category).or_default() += 1;
            *summary.education.entry(labels.education_required).or_default() += 1;
            *summary.remote.entry(labels.remote_possible).or_default() += 1;
        }

        summary
    }
}

fn write_counts<K: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    counts: &BTreeMap<K, usize>,
) -> fmt::Result {
    let parts: Vec<String> = counts.iter().map(|(k, n)| format!("{}={}", k, n)).collect();
    write!(f, "  {}: {}", name, parts.join(", "))
}

impl fmt::Display for AnnotationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Annotation Statistics:")?;
        write_counts(f, "Experience Levels", &self.experience)?;
        writeln!(f)?;
        write_counts(f, "Job Categories", &self.category)?;
        writeln!(f)?;
        write_counts(f, "Education Requirements", &self.education)?;
        writeln!(f)?;
        write_counts(f, "Remote Possible", &self.remote)
    }
}

/// Human-readable preview of the first `limit` annotated records.
pub fn sample_annotations(jobs: &[AnnotatedJob], limit: usize) -> String {
    jobs.iter()
        .take(limit)
        .enumerate()
        .map(|(i, record)| {
            let job = &record.job;
            let labels = &record.annotations;
            let skills: Vec<&str> = job.skills.iter().take(3).map(String::as_str).collect();
            format!(
                "{}. {} at {}\n   Experience: {}\n   Category: {}\n   Education: {}\n   Remote: {}\n   Skills: {}...",
                i + 1,
                title_case(&job.title),
                title_case(&job.company),
                labels.experience_level,
                labels.job_category,
                labels.education_required,
                labels.remote_possible,
                skills.join(", "),
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
