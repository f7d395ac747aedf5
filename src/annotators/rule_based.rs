use super::rules::{
    predict_education, predict_experience_level, predict_job_category, predict_remote,
};
use crate::Result;
use crate::annotator::{AnnotatorConfig, JobAnnotator};
use crate::labels::AnnotationMethod;
use crate::models::{AnnotatedJob, Annotations, CleanedJob};

/// Labels postings with the keyword/regex rules in [`super::rules`].
pub struct RuleBasedAnnotator {
    config: AnnotatorConfig,
}

impl RuleBasedAnnotator {
    pub fn new(config: AnnotatorConfig) -> Self {
        Self { config }
    }
}

impl Default for RuleBasedAnnotator {
    fn default() -> Self {
        Self::new(AnnotatorConfig::default())
    }
}

impl JobAnnotator for RuleBasedAnnotator {
    fn method(&self) -> AnnotationMethod {
        AnnotationMethod::RuleBased
    }

    fn annotate(&self, job: &CleanedJob) -> Annotations {
        Annotations {
            experience_level: predict_experience_level(&job.title, &job.description),
            job_category: predict_job_category(&job.description, &job.skills),
            education_required: predict_education(&job.description),
            remote_possible: predict_remote(&job.description, &job.location),
            annotation_method: self.method(),
        }
    }

    fn start_annotate(&self, jobs: Vec<CleanedJob>) -> Result<Vec<AnnotatedJob>> {
        self.annotate_all(jobs, self.config.thread_count)
    }
}
