use crate::annotator::AnnotatorConfig;
use crate::crawler::CollectConfig;
use std::path::{Path, PathBuf};

pub const RAW_FILE: &str = "raw_job_descriptions.json";
pub const CLEANED_FILE: &str = "cleaned_job_descriptions.json";
pub const ANNOTATED_FILE: &str = "annotated_job_descriptions.json";

/// Settings for a full collect/clean/annotate run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Directory holding every stage's JSON and CSV output.
    pub data_dir: PathBuf,
    pub collect: CollectConfig,
    pub annotator: AnnotatorConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            collect: CollectConfig::default(),
            annotator: AnnotatorConfig::default(),
        }
    }
}

impl PipelineConfig {
    pub fn with_data_dir(data_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            ..Default::default()
        }
    }

    pub fn raw_path(&self) -> PathBuf {
        self.data_dir.join(RAW_FILE)
    }

    pub fn cleaned_path(&self) -> PathBuf {
        self.data_dir.join(CLEANED_FILE)
    }

    pub fn annotated_path(&self) -> PathBuf {
        self.data_dir.join(ANNOTATED_FILE)
    }
}
