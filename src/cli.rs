use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use jd_annotator::report::{
    AnnotationSummary, CleaningSummary, CollectionSummary, sample_annotations,
};
use jd_annotator::{
    AnnotatorConfig, CleanedJob, CollectConfig, JobCleaner, JobCollector, JobPipeline,
    PipelineConfig, PipelineWithRecords, RawJob, RuleBasedAnnotator,
};
use std::path::PathBuf;

/// Number of annotated records previewed after annotation.
const PREVIEW_RECORDS: usize = 3;

#[derive(Parser, Debug)]
#[command(
    name = "jd-annotator",
    version,
    about = "Collect, clean and rule-annotate job descriptions"
)]
pub struct Cli {
    /// Directory for raw, cleaned and annotated data files
    #[arg(long, global = true, env = "JD_DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch postings from public APIs, topping up with samples
    Collect(CollectArgs),
    /// Normalize raw postings and extract skills
    Clean,
    /// Label cleaned postings with the rule-based annotator
    Annotate(AnnotateArgs),
    /// Collect, clean and annotate in one go
    Run(RunArgs),
}

#[derive(Args, Debug, Clone)]
pub struct CollectArgs {
    /// Number of postings to keep
    #[arg(long, env = "JD_TARGET_COUNT", default_value_t = 60)]
    pub target: usize,

    /// Add samples when fewer than this many real postings were found
    #[arg(long, default_value_t = 50)]
    pub min: usize,

    /// Do not call the public APIs
    #[arg(long)]
    pub offline: bool,

    /// Seed for reproducible sample generation
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Args, Debug, Clone)]
pub struct AnnotateArgs {
    /// Worker threads (defaults to available parallelism)
    #[arg(long, env = "JD_THREADS")]
    pub threads: Option<usize>,
}

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    #[command(flatten)]
    pub collect: CollectArgs,

    #[command(flatten)]
    pub annotate: AnnotateArgs,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let mut config = PipelineConfig::with_data_dir(&self.data_dir);

        match self.command {
            Commands::Collect(args) => {
                apply_collect_args(&mut config, &args);
                let _raw = collect(&config)?;
            }
            Commands::Clean => {
                let raw = JobPipeline::new()
                    .load_raw(config.raw_path())
                    .context("loading raw data")?;
                clean(&config, raw)?;
            }
            Commands::Annotate(args) => {
                apply_annotate_args(&mut config, &args);
                let cleaned = JobPipeline::new()
                    .load_cleaned(config.cleaned_path())
                    .context("loading cleaned data")?;
                annotate(&config, cleaned)?;
            }
            Commands::Run(args) => {
                apply_collect_args(&mut config, &args.collect);
                apply_annotate_args(&mut config, &args.annotate);
                let raw = collect(&config)?;
                if let Some(cleaned) = clean(&config, raw)? {
                    annotate(&config, cleaned)?;
                }
            }
        }

        Ok(())
    }
}

fn apply_collect_args(config: &mut PipelineConfig, args: &CollectArgs) {
    config.collect = CollectConfig {
        target_count: args.target,
        min_count: args.min,
        offline: args.offline,
        seed: args.seed,
        ..config.collect.clone()
    };
}

fn apply_annotate_args(config: &mut PipelineConfig, args: &AnnotateArgs) {
    if let Some(threads) = args.threads {
        config.annotator = AnnotatorConfig {
            thread_count: threads.max(1),
        };
    }
}

fn collect(config: &PipelineConfig) -> Result<PipelineWithRecords<RawJob>> {
    let collector = JobCollector::new(config.collect.clone())?;
    let stage = JobPipeline::new()
        .crawl(&collector)?
        .save_and_then(config.raw_path());

    println!("{}", CollectionSummary::from_jobs(stage.records()));
    Ok(stage)
}

fn clean(
    config: &PipelineConfig,
    raw: PipelineWithRecords<RawJob>,
) -> Result<Option<PipelineWithRecords<CleanedJob>>> {
    if raw.is_empty() {
        println!("No raw data found. Exiting.");
        return Ok(None);
    }
    println!("Loaded {} raw job descriptions", raw.len());

    let stage = raw
        .clean(&JobCleaner::new())
        .save_and_then(config.cleaned_path());

    println!("{}", CleaningSummary::from_jobs(stage.records()));
    Ok(Some(stage))
}

fn annotate(config: &PipelineConfig, cleaned: PipelineWithRecords<CleanedJob>) -> Result<()> {
    if cleaned.is_empty() {
        println!("No cleaned data found. Exiting.");
        return Ok(());
    }
    println!("Loaded {} cleaned job descriptions", cleaned.len());

    let annotator = RuleBasedAnnotator::new(config.annotator.clone());
    let annotated = cleaned
        .annotate(&annotator)?
        .save(config.annotated_path())
        .context("saving annotated data")?;

    println!("\n{}", AnnotationSummary::from_jobs(&annotated));
    println!("\nSample Annotations:\n");
    println!("{}", sample_annotations(&annotated, PREVIEW_RECORDS));
    Ok(())
}
