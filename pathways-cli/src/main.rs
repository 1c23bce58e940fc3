//! riasec-pathways - career pathway compatibility from RIASEC scores
//!
//! **Usage:**
//! ```bash
//! riasec-pathways --score R=80 --score I=10 --score A=5
//! riasec-pathways --input scores.json --format json
//! riasec-pathways --input - --export report.json --student-name "A. Student"
//! riasec-pathways --write-default-config ~/.config/riasec-pathways/config.toml
//! ```

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use pathways_cli::{parse_score_arg, read_input, ExportEnvelope, TableFormatter};
use pathways_common::config::{write_toml_config, ConfigResolver};
use pathways_common::{RiasecScore, TomlConfig};
use pathways_engine::{PathwayEngine, PathwayReport};
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, prelude::*, reload, EnvFilter, Registry};

type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// Career pathway compatibility engine
#[derive(Parser, Debug)]
#[clap(name = "riasec-pathways", version)]
#[clap(about = "Rank aspiring fields and career paths against a RIASEC profile")]
struct Args {
    /// JSON file with `[{"code": "R", "score": 80}, ...]` ("-" reads stdin)
    #[clap(long, value_name = "FILE", conflicts_with = "score")]
    input: Option<PathBuf>,

    /// Trait score as CODE=VALUE (repeatable)
    #[clap(long = "score", value_name = "CODE=VALUE", value_parser = parse_score_arg)]
    score: Vec<RiasecScore>,

    /// Output format for stdout
    #[clap(long, value_enum, default_value = "table")]
    format: OutputFormat,

    /// Show only the first N table rows
    #[clap(long, value_name = "N")]
    limit: Option<usize>,

    /// Write the report document to a JSON file
    #[clap(long, value_name = "FILE")]
    export: Option<PathBuf>,

    /// Student label recorded in the exported report
    #[clap(long, value_name = "NAME")]
    student_name: Option<String>,

    /// Configuration file (overrides RIASEC_PATHWAYS_CONFIG)
    #[clap(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write a default configuration file and exit
    #[clap(long, value_name = "FILE")]
    write_default_config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let filter_handle = init_tracing();

    if let Some(path) = &args.write_default_config {
        write_toml_config(&TomlConfig::default(), path)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        println!("✓ Default configuration written to {}", path.display());
        return Ok(());
    }

    let (config, source) = ConfigResolver::new(args.config.clone())
        .load()
        .context("Failed to load configuration")?;

    if let Some(handle) = &filter_handle {
        if let Err(e) = handle.reload(EnvFilter::new(&config.logging.level)) {
            warn!("Failed to apply log level '{}': {}", config.logging.level, e);
        }
    }
    info!(
        "Starting riasec-pathways v{} (config: {:?})",
        env!("CARGO_PKG_VERSION"),
        source
    );

    let engine = PathwayEngine::new(config.engine);
    let report = evaluate(&engine, &args)?;

    match args.format {
        OutputFormat::Table => print!("{}", TableFormatter::format_report(&report, args.limit)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    if let Some(export_path) = &args.export {
        match ExportEnvelope::new(&report, args.student_name.clone()).export_json(export_path) {
            Ok(()) => info!("Report exported to {}", export_path.display()),
            Err(e) => {
                error!("Failed to export report: {}", e);
                return Err(e).with_context(|| format!("Export to {} failed", export_path.display()));
            }
        }
    }

    Ok(())
}

/// Single engine invocation shared by every output
fn evaluate(engine: &PathwayEngine, args: &Args) -> Result<PathwayReport> {
    if let Some(path) = &args.input {
        let text = read_input(path)
            .with_context(|| format!("Failed to read scores from {}", path.display()))?;
        return Ok(engine.evaluate_json_str(&text));
    }
    if args.score.is_empty() {
        bail!("No scores supplied: use --input FILE or --score CODE=VALUE");
    }
    Ok(engine.evaluate(&args.score))
}

/// Install the stderr subscriber before anything logs
///
/// `RUST_LOG` fixes the filter for the whole run. Otherwise logging starts at
/// `info` and the returned handle switches to the configured level once the
/// config file is loaded.
fn init_tracing() -> Option<FilterHandle> {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal());

    let (filter, from_env) = match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, true),
        Err(_) => (EnvFilter::new("info"), false),
    };
    let (filter, handle) = reload::Layer::new(filter);
    tracing_subscriber::registry().with(filter).with(fmt_layer).init();

    (!from_env).then_some(handle)
}
