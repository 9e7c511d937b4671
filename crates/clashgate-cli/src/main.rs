//! clashgate - clash report triage
//!
//! Parses a clash-detection report, judges each clash against the discipline
//! approval matrix and writes per-discipline ledgers, a defects ledger and a
//! conflict summary.

use std::fmt::Display;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use clashgate_analysis::reporters::{available_formats, create_reporter};
use clashgate_analysis::{classify, ClashPipeline, RunInputs};
use clashgate_core::config::{AggregationScope, CliOverrides};
use clashgate_core::{ClashConfig, ClashErrorCode};

/// clashgate - clash report triage
#[derive(Parser, Debug)]
#[command(name = "clashgate")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Log filter (trace, debug, info, warn, error, or a full directive)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the full pipeline on one report
    Run(RunArgs),

    /// Print the discipline resolved for an element path
    Classify {
        /// Element path, e.g. `Model.dwg>Layer>PRJ-RG-PH-ST-LT-KM-RV-H2-001-TR`
        path: String,
    },

    /// Print the resolved configuration as TOML
    Config {
        /// Project root holding `clashgate.toml`
        #[arg(long, default_value = ".")]
        root: PathBuf,
    },
}

#[derive(clap::Args, Debug)]
struct RunArgs {
    /// Clash report (line-oriented text)
    #[arg(short, long)]
    report: PathBuf,

    /// Matrix workbook directory (one `<sheet>.csv` per sheet)
    #[arg(short, long)]
    matrix: PathBuf,

    /// Output directory for ledgers, defects and summary
    #[arg(short, long, default_value = "clashgate-out")]
    out: PathBuf,

    /// Project root holding `clashgate.toml`
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Records feeding the conflict summary (reportable, all-valid)
    #[arg(long)]
    scope: Option<AggregationScope>,

    /// Name of the approval matrix sheet
    #[arg(long)]
    matrix_sheet: Option<String>,

    /// Name of the exception list sheet
    #[arg(long)]
    exception_sheet: Option<String>,

    /// Do not seed ledger deduplication from ledgers already on disk
    #[arg(long)]
    no_resume: bool,

    /// Summary format (text, json)
    #[arg(long, default_value = "text")]
    format: String,

    /// Shorthand for `--format json`
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    clashgate_core::tracing::init_tracing_with(cli.log_level.as_deref());

    match dispatch(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn dispatch(command: Commands) -> Result<()> {
    match command {
        Commands::Run(args) => run(args),
        Commands::Classify { path } => {
            println!("{}", classify(&path).unwrap_or("unrecognized"));
            Ok(())
        }
        Commands::Config { root } => {
            let config = ClashConfig::load(&root, None).map_err(clash_error)?;
            print!("{}", config.resolved().to_toml().map_err(clash_error)?);
            Ok(())
        }
    }
}

fn run(args: RunArgs) -> Result<()> {
    let format = if args.json { "json" } else { args.format.as_str() };
    let reporter = create_reporter(format).ok_or_else(|| {
        anyhow!(
            "unknown format '{format}' (expected one of: {})",
            available_formats().join(", ")
        )
    })?;

    let overrides = CliOverrides {
        matrix_sheet: args.matrix_sheet,
        exception_sheet: args.exception_sheet,
        aggregation_scope: args.scope,
        resume_ledgers: args.no_resume.then_some(false),
    };
    let config = ClashConfig::load(&args.root, Some(&overrides)).map_err(clash_error)?;

    let inputs = RunInputs {
        report: args.report,
        matrix: args.matrix,
        out_dir: args.out,
    };
    let summary = ClashPipeline::new(config)
        .run(&inputs)
        .map_err(clash_error)?;
    tracing::debug!(reporter = reporter.name(), "rendering run summary");

    print!("{}", reporter.generate(&summary).map_err(|e| anyhow!(e))?);
    Ok(())
}

/// Collapse a library error into its single `[CODE] message` line.
fn clash_error<E: ClashErrorCode + Display>(err: E) -> anyhow::Error {
    anyhow!(err.display_string())
}
