pub mod annotator;
pub mod annotators;
pub mod cleaner;
pub mod client;
pub mod clients;
pub mod config;
pub mod crawler;
pub mod error;
pub mod labels;
pub mod models;
pub mod pipeline;
pub mod reader;
pub mod report;
pub mod utils;
pub mod writer;

pub use annotator::{AnnotatorConfig, JobAnnotator};
pub use annotators::RuleBasedAnnotator;
pub use cleaner::JobCleaner;
pub use config::PipelineConfig;
pub use crawler::{CollectConfig, Crawler, JobCollector};
pub use error::Error;
pub use labels::{AnnotationMethod, EducationLevel, ExperienceLevel, JobCategory, RemotePossible};
pub use models::{AnnotatedJob, Annotations, CleanedJob, RawJob};
pub use pipeline::{JobPipeline, PipelineWithRecords};
pub use writer::save_records;

pub type Result<T> = std::result::Result<T, Error>;
