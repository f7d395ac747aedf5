use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::labels::{AnnotationMethod, EducationLevel, ExperienceLevel, JobCategory, RemotePossible};

/// Keys written by the annotator; stale copies are dropped from `extra`.
const ANNOTATION_KEYS: [&str; 5] = [
    "experience_level",
    "job_category",
    "education_required",
    "remote_possible",
    "annotation_method",
];

/// APIs return `null` (or numbers) for fields they leave unset; treat any
/// non-string value as empty text.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        _ => String::new(),
    })
}

/// A job posting as collected from a source, before any cleanup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawJob {
    #[serde(deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(deserialize_with = "lenient_string")]
    pub company: String,
    #[serde(deserialize_with = "lenient_string")]
    pub location: String,
    #[serde(deserialize_with = "lenient_string")]
    pub description: String,
    #[serde(deserialize_with = "lenient_string")]
    pub source: String,
    #[serde(deserialize_with = "lenient_string")]
    pub url: String,
}

impl RawJob {
    pub fn new(title: String, company: String, location: String, description: String) -> Self {
        Self {
            title,
            company,
            location,
            description,
            ..Default::default()
        }
    }

    pub fn with_source(mut self, source: impl Into<String>, url: impl Into<String>) -> Self {
        self.source = source.into();
        self.url = url.into();
        self
    }
}

/// A normalized job posting, ready for annotation.
///
/// `title`, `description`, `location` and `skills` are required when loading
/// from disk; everything else defaults. Fields this type does not know about
/// are kept in `extra` and written back out unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CleanedJob {
    pub title: String,
    #[serde(default)]
    pub company: String,
    pub location: String,
    pub description: String,
    pub skills: Vec<String>,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub word_count: usize,
    #[serde(default)]
    pub char_count: usize,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The five fields the annotator appends to a cleaned record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotations {
    pub experience_level: ExperienceLevel,
    pub job_category: JobCategory,
    pub education_required: EducationLevel,
    pub remote_possible: RemotePossible,
    pub annotation_method: AnnotationMethod,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotatedJob {
    #[serde(flatten)]
    pub job: CleanedJob,
    #[serde(flatten)]
    pub annotations: Annotations,
}

impl AnnotatedJob {
    /// Labels from a previous run are replaced, not duplicated.
    pub fn new(mut job: CleanedJob, annotations: Annotations) -> Self {
        for key in ANNOTATION_KEYS {
            job.extra.remove(key);
        }
        Self { job, annotations }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn labels() -> Annotations {
        Annotations {
            experience_level: ExperienceLevel::Senior,
            job_category: JobCategory::Frontend,
            education_required: EducationLevel::None,
            remote_possible: RemotePossible::Unknown,
            annotation_method: AnnotationMethod::RuleBased,
        }
    }

    #[test]
    fn test_reannotation_replaces_stale_labels() {
        let job: CleanedJob = serde_json::from_value(json!({
            "title": "senior dev",
            "location": "",
            "description": "react",
            "skills": [],
            "job_category": "stale",
            "annotation_method": "manual",
            "team": "web"
        }))
        .unwrap();

        let output = serde_json::to_string(&AnnotatedJob::new(job, labels())).unwrap();

        assert_eq!(output.matches("\"job_category\"").count(), 1);
        assert_eq!(output.matches("\"annotation_method\"").count(), 1);
        let value: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["job_category"], "frontend");
        assert_eq!(value["annotation_method"], "rule_based");
        assert_eq!(value["team"], "web");
    }

    #[test]
    fn test_raw_job_treats_null_and_non_string_fields_as_empty() {
        let job: RawJob = serde_json::from_value(json!({
            "title": "Engineer",
            "company": 42,
            "location": null,
            "description": "Build things"
        }))
        .unwrap();

        assert_eq!(job.title, "Engineer");
        assert_eq!(job.company, "");
        assert_eq!(job.location, "");
        assert_eq!(job.url, "");
    }
}
