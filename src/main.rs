use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use termclass::report::log_rankings;
use termclass::{
    Catalogue, ClassificationPipeline, ClassifierConfig, DeadAlias, RankMetric, RankedEntry,
    SchemaDefinition,
};
use tracing::{info, Level};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Offline term sheet classifier
#[derive(Parser, Debug)]
#[command(name = "termclass")]
#[command(about = "Classify extracted term sheets against known instrument schemas", long_about = None)]
struct Args {
    /// JSON file with instrument types and aliases (defaults to the built-in catalogue)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (RUST_LOG takes precedence when set)
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify a single JSON document
    Classify {
        file: PathBuf,

        /// Only print the ranking for this metric
        #[arg(long)]
        metric: Option<RankMetric>,
    },

    /// Classify every <ROOT>/<group>/versions/*.json file
    Batch {
        root: PathBuf,

        /// Worker threads
        #[arg(short, long, default_value_t = 1)]
        jobs: usize,

        /// Write the JSON report here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the active instrument catalogue
    Schemas,
}

#[derive(Serialize)]
struct CatalogueView<'a> {
    types: Vec<&'a SchemaDefinition>,
    alias_count: usize,
    dead_aliases: Vec<DeadAlias>,
}

#[derive(Serialize)]
struct MetricView<'a> {
    metric: RankMetric,
    primary_type: Option<&'a str>,
    ranked: &'a [RankedEntry],
}

/// JSON output of the `classify` command
///
/// A document without keys yields `null`; missing or unparsable input is an error.
fn classify_to_json(
    pipeline: &ClassificationPipeline,
    file: &Path,
    metric: Option<RankMetric>,
) -> anyhow::Result<String> {
    info!("Loading JSON from {:?}", file);
    let Some(classification) = pipeline
        .classify_file(file)
        .with_context(|| format!("cannot classify {}", file.display()))?
    else {
        info!("Could not extract any keys from {:?}, cannot classify", file);
        return Ok("null".to_string());
    };
    log_rankings(&classification);

    let json = match metric {
        Some(metric) => serde_json::to_string_pretty(&MetricView {
            metric,
            primary_type: classification.ranked_by(metric).first().map(|r| r.type_name.as_str()),
            ranked: classification.ranked_by(metric),
        })?,
        None => serde_json::to_string_pretty(&classification)?,
    };
    Ok(json)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(log_level).into())
        .from_env_lossy();
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting termclass v{}", env!("CARGO_PKG_VERSION"));

    let config = match &args.config {
        Some(path) => {
            info!("Loading classifier configuration from {:?}", path);
            ClassifierConfig::from_path(path)?
        }
        None => ClassifierConfig::builtin(),
    };
    let catalogue = Catalogue::from_config(&config).context("invalid classifier configuration")?;
    info!(
        "Catalogue ready: {} instrument types, {} aliases",
        catalogue.registry().len(),
        catalogue.aliases().len()
    );

    match args.command {
        Command::Classify { file, metric } => {
            let pipeline = ClassificationPipeline::new(catalogue);
            println!("{}", classify_to_json(&pipeline, &file, metric)?);
        }
        Command::Batch { root, jobs, output } => {
            let pipeline = ClassificationPipeline::new(catalogue).with_jobs(jobs);
            let report = pipeline.run(&root);
            match output {
                Some(path) => {
                    report.write_to(&path)?;
                    info!("Report written to {:?}", path);
                }
                None => println!("{}", report.to_json_pretty()?),
            }
        }
        Command::Schemas => {
            let view = CatalogueView {
                types: catalogue.registry().iter().collect(),
                alias_count: catalogue.aliases().len(),
                dead_aliases: catalogue.dead_aliases(),
            };
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
    }

    Ok(())
}
