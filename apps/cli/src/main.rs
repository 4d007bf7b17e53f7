use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use l10n_fixer_core::{BatchRunner, FileStatus, FixPipeline, FixerConfig, FixerError, RunReport};

/// Batch localization fixer for Flutter projects: inserts the
/// generated-l10n import and accessor, swaps literal display strings
/// for translation lookups, and cleans up deprecated or now-illegal
/// constructs.
#[derive(Debug, Parser)]
#[command(name = "l10n-fixer", version, about)]
struct Args {
    /// Project root (defaults to the current directory).
    root: Option<PathBuf>,

    /// Which pass to run.
    #[arg(long, value_enum, default_value_t = Pass::All)]
    pass: Pass,

    /// Keep a timestamped copy of each file before overwriting it.
    #[arg(long)]
    backup: bool,

    /// Optional JSON config overriding scan scopes and extension.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Pass {
    /// Screen files only (lib/screens), no const correction.
    Screens,
    /// Whole source tree (lib) including const correction.
    Source,
    /// Screens pass followed by the full-source pass.
    All,
}

impl Pass {
    fn pipelines(self) -> Vec<FixPipeline> {
        match self {
            Pass::Screens => vec![FixPipeline::screens()],
            Pass::Source => vec![FixPipeline::full_source()],
            Pass::All => vec![FixPipeline::screens(), FixPipeline::full_source()],
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let root = match args.root {
        Some(path) => path,
        None => std::env::current_dir()?,
    };

    let mut config = match &args.config {
        Some(path) => FixerConfig::from_json_file(path).map_err(|e| anyhow::anyhow!(e))?,
        None => FixerConfig::default(),
    };
    if args.backup {
        config.backup = true;
    }

    run_passes(&args.pass.pipelines(), &config, &root);
    Ok(())
}

/// Run each selected pass in turn. The passes are independent stages:
/// a missing scope directory skips only its own pass, and a missing
/// root ends the run since no pass can see any file. Neither is worth
/// a failing exit code; nothing was processed.
fn run_passes(pipelines: &[FixPipeline], config: &FixerConfig, root: &Path) {
    for &pipeline in pipelines {
        let runner = BatchRunner::new(pipeline, config.clone());
        match runner.run(root) {
            Ok(report) => print_report(pipeline, &report),
            Err(err @ FixerError::MissingRoot(_)) => {
                eprintln!("{err}");
                return;
            }
            Err(err @ FixerError::MissingSourceDir(_)) => {
                eprintln!("{err} (skipping {} pass)", pipeline.kind().name());
            }
        }
    }
}

fn print_report(pipeline: FixPipeline, report: &RunReport) {
    println!("== {} pass ==", pipeline.kind().name());
    for file in &report.files {
        match file.status {
            FileStatus::Changed => println!("  fixed      {}", file.relative_path),
            FileStatus::Unchanged => println!("  unchanged  {}", file.relative_path),
            FileStatus::Error => println!(
                "  error      {} ({})",
                file.relative_path,
                file.detail.as_deref().unwrap_or("unknown")
            ),
        }
    }
    let s = &report.summary;
    println!(
        "  {} processed, {} fixed, {} unchanged, {} errors",
        s.processed, s.changed, s.unchanged, s.errors
    );
}
