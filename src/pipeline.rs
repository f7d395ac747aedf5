use crate::annotator::JobAnnotator;
use crate::cleaner::JobCleaner;
use crate::crawler::Crawler;
use crate::reader::{load_cleaned, load_records};
use crate::writer::{CsvProjection, save_records};
use crate::{AnnotatedJob, CleanedJob, RawJob, Result};
use serde::Serialize;
use std::path::Path;
use tracing::{error, info};

pub struct JobPipeline;

#[must_use = "pipeline must end with .save() to persist records"]
pub struct PipelineWithRecords<T> {
    records: Vec<T>,
}

impl JobPipeline {
    pub fn new() -> Self {
        Self
    }

    pub fn crawl(self, crawler: &impl Crawler) -> Result<PipelineWithRecords<RawJob>> {
        info!(source = crawler.name(), "collecting job descriptions");
        let records = crawler.start_crawl()?;
        Ok(PipelineWithRecords { records })
    }

    /// Resume from a saved raw collection; a missing file gives an empty stage.
    pub fn load_raw(self, path: impl AsRef<Path>) -> Result<PipelineWithRecords<RawJob>> {
        let records = load_records(path.as_ref())?;
        Ok(PipelineWithRecords { records })
    }

    /// Resume from saved cleaned records; a missing file gives an empty stage.
    pub fn load_cleaned(self, path: impl AsRef<Path>) -> Result<PipelineWithRecords<CleanedJob>> {
        let records = load_cleaned(path.as_ref())?;
        Ok(PipelineWithRecords { records })
    }
}

impl Default for JobPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PipelineWithRecords<T> {
    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_records(self) -> Vec<T> {
        self.records
    }
}

impl<T> PipelineWithRecords<T>
where
    T: Serialize,
    for<'a> &'a T: CsvProjection,
{
    /// Persist an intermediate stage. Failures are logged, not fatal.
    #[must_use = "save_and_then() returns Self to allow chaining"]
    pub fn save_and_then(self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match save_records(&self.records, path) {
            Ok(csv_path) => info!(
                records = self.records.len(),
                json = %path.display(),
                csv = %csv_path.display(),
                "✅ saved"
            ),
            Err(e) => error!(path = %path.display(), error = %e, "❌ save failed"),
        }
        self
    }

    pub fn save(self, path: impl AsRef<Path>) -> Result<Vec<T>> {
        let path = path.as_ref();
        let csv_path = save_records(&self.records, path)?;
        info!(
            records = self.records.len(),
            json = %path.display(),
            csv = %csv_path.display(),
            "✅ saved"
        );
        Ok(self.records)
    }
}

impl PipelineWithRecords<RawJob> {
    pub fn clean(self, cleaner: &JobCleaner) -> PipelineWithRecords<CleanedJob> {
        PipelineWithRecords {
            records: cleaner.clean_dataset(&self.records),
        }
    }
}

impl PipelineWithRecords<CleanedJob> {
    pub fn annotate(self, annotator: &impl JobAnnotator) -> Result<PipelineWithRecords<AnnotatedJob>> {
        let records = annotator.start_annotate(self.records)?;
        Ok(PipelineWithRecords { records })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotator::AnnotatorConfig;
    use crate::annotators::RuleBasedAnnotator;
    use crate::config::PipelineConfig;
    use crate::crawler::{CollectConfig, JobCollector};
    use crate::labels::AnnotationMethod;

    fn offline_collector() -> JobCollector {
        JobCollector::new(CollectConfig {
            offline: true,
            delays_ms: Vec::new(),
            seed: Some(3),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_full_pipeline_offline() {
        let dir = tempfile::tempdir().unwrap();
        let config = PipelineConfig::with_data_dir(dir.path());
        let annotator = RuleBasedAnnotator::new(AnnotatorConfig { thread_count: 2 });

        let annotated = JobPipeline::new()
            .crawl(&offline_collector())
            .unwrap()
            .save_and_then(config.raw_path())
            .clean(&JobCleaner::new())
            .save_and_then(config.cleaned_path())
            .annotate(&annotator)
            .unwrap()
            .save(config.annotated_path())
            .unwrap();

        assert!(!annotated.is_empty());
        assert!(
            annotated
                .iter()
                .all(|r| r.annotations.annotation_method == AnnotationMethod::RuleBased)
        );
        assert!(config.raw_path().exists());
        assert!(config.cleaned_path().with_extension("csv").exists());
        assert!(config.annotated_path().with_extension("csv").exists());
    }

    #[test]
    fn test_stages_resume_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let config = PipelineConfig::with_data_dir(dir.path());

        let collected = JobPipeline::new()
            .crawl(&offline_collector())
            .unwrap()
            .save(config.raw_path())
            .unwrap();

        let cleaned = JobPipeline::new()
            .load_raw(config.raw_path())
            .unwrap()
            .clean(&JobCleaner::new())
            .save(config.cleaned_path())
            .unwrap();
        assert!(cleaned.len() <= collected.len());

        let annotated = JobPipeline::new()
            .load_cleaned(config.cleaned_path())
            .unwrap()
            .annotate(&RuleBasedAnnotator::default())
            .unwrap();

        assert_eq!(annotated.len(), cleaned.len());
        for (input, output) in cleaned.iter().zip(annotated.records()) {
            assert_eq!(input.url, output.job.url);
        }
    }

    #[test]
    fn test_missing_cleaned_file_annotates_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let stage = JobPipeline::new()
            .load_cleaned(dir.path().join("missing.json"))
            .unwrap();

        assert!(stage.is_empty());
        let annotated = stage.annotate(&RuleBasedAnnotator::default()).unwrap();
        assert_eq!(annotated.len(), 0);
    }
}
