use crate::Result;
use crate::labels::AnnotationMethod;
use crate::models::{AnnotatedJob, Annotations, CleanedJob};
use rayon::ThreadPoolBuilder;
use rayon::prelude::*;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct AnnotatorConfig {
    /// Worker threads used for a batch; 1 annotates sequentially.
    pub thread_count: usize,
}

impl Default for AnnotatorConfig {
    fn default() -> Self {
        Self {
            thread_count: std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4),
        }
    }
}

pub trait JobAnnotator: Sync {
    /// Provenance tag written to every record this annotator labels.
    fn method(&self) -> AnnotationMethod;

    fn annotate(&self, job: &CleanedJob) -> Annotations;

    fn start_annotate(&self, jobs: Vec<CleanedJob>) -> Result<Vec<AnnotatedJob>>;

    /// Label every job, returning results in input order.
    fn annotate_all(&self, jobs: Vec<CleanedJob>, thread_count: usize) -> Result<Vec<AnnotatedJob>> {
        info!(
            records = jobs.len(),
            threads = thread_count,
            method = %self.method(),
            "annotating job descriptions"
        );

        if thread_count <= 1 {
            return Ok(jobs
                .into_iter()
                .map(|job| self.annotate_one(job))
                .collect());
        }

        let pool = ThreadPoolBuilder::new().num_threads(thread_count).build()?;
        let annotated: Vec<AnnotatedJob> = pool.install(|| {
            jobs.into_par_iter()
                .map(|job| self.annotate_one(job))
                .collect()
        });

        Ok(annotated)
    }

    fn annotate_one(&self, job: CleanedJob) -> AnnotatedJob {
        let annotations = self.annotate(&job);
        debug!(
            thread = ?rayon::current_thread_index(),
            title = %job.title,
            experience = %annotations.experience_level,
            category = %annotations.job_category,
            "annotated"
        );
        AnnotatedJob::new(job, annotations)
    }
}
