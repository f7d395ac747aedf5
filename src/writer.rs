use crate::Result;
use crate::models::{AnnotatedJob, CleanedJob, RawJob};
use crate::utils::preview;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Number of skills shown in the annotated CSV.
const ANNOTATED_CSV_SKILLS: usize = 5;

/// A reduced, spreadsheet-friendly view of a record.
pub trait CsvProjection {
    type Row: Serialize;

    fn csv_row(&self) -> Self::Row;
}

#[derive(Debug, Serialize)]
pub struct RawRow<'a> {
    pub title: &'a str,
    pub company: &'a str,
    pub location: &'a str,
    pub description: String,
    pub source: &'a str,
    pub url: &'a str,
}

#[derive(Debug, Serialize)]
pub struct CleanedRow<'a> {
    pub title: &'a str,
    pub company: &'a str,
    pub location: &'a str,
    pub description: String,
    pub skills: String,
    pub word_count: usize,
    pub source: &'a str,
}

#[derive(Debug, Serialize)]
pub struct AnnotatedRow<'a> {
    pub title: &'a str,
    pub company: &'a str,
    pub experience_level: &'static str,
    pub job_category: &'static str,
    pub education_required: &'static str,
    pub remote_possible: &'static str,
    pub skills: String,
    pub source: &'a str,
}

// Rows borrow from the record, so the projection is implemented on references.
impl<'a> CsvProjection for &'a RawJob {
    type Row = RawRow<'a>;

    fn csv_row(&self) -> RawRow<'a> {
        let job: &'a RawJob = *self;
        RawRow {
            title: &job.title,
            company: &job.company,
            location: &job.location,
            description: preview(&job.description, 300),
            source: &job.source,
            url: &job.url,
        }
    }
}

impl<'a> CsvProjection for &'a CleanedJob {
    type Row = CleanedRow<'a>;

    fn csv_row(&self) -> CleanedRow<'a> {
        let job: &'a CleanedJob = *self;
        CleanedRow {
            title: &job.title,
            company: &job.company,
            location: &job.location,
            description: preview(&job.description, 200),
            skills: job.skills.join(", "),
            word_count: job.word_count,
            source: &job.source,
        }
    }
}

impl<'a> CsvProjection for &'a AnnotatedJob {
    type Row = AnnotatedRow<'a>;

    fn csv_row(&self) -> AnnotatedRow<'a> {
        let record: &'a AnnotatedJob = *self;
        let job = &record.job;
        let labels = &record.annotations;
        AnnotatedRow {
            title: &job.title,
            company: &job.company,
            experience_level: labels.experience_level.as_str(),
            job_category: labels.job_category.as_str(),
            education_required: labels.education_required.as_str(),
            remote_possible: labels.remote_possible.as_str(),
            skills: job
                .skills
                .iter()
                .take(ANNOTATED_CSV_SKILLS)
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", "),
            source: &job.source,
        }
    }
}

pub fn save_to_json<T: Serialize>(records: &[T], file_path: &Path) -> Result<()> {
    let writer = BufWriter::new(File::create(file_path)?);
    serde_json::to_writer_pretty(writer, records)?;
    Ok(())
}

pub fn save_to_csv<T>(records: &[T], file_path: &Path) -> Result<()>
where
    for<'a> &'a T: CsvProjection,
{
    let mut writer = csv::Writer::from_path(file_path)?;

    for record in records {
        writer.serialize(record.csv_row())?;
    }

    writer.flush()?;
    Ok(())
}

/// Write the full records as JSON at `json_path` and their projection next to
/// it with a `.csv` extension. Returns the CSV path.
pub fn save_records<T>(records: &[T], json_path: &Path) -> Result<PathBuf>
where
    T: Serialize,
    for<'a> &'a T: CsvProjection,
{
    if let Some(parent) = json_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    save_to_json(records, json_path)?;
    let csv_path = json_path.with_extension("csv");
    save_to_csv(records, &csv_path)?;
    Ok(csv_path)
}
