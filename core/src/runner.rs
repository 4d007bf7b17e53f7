/// Sequential batch execution of one fixer pass over a project tree.
///
/// The walk is single-threaded and stateless across files: each file is
/// read, transformed, and conditionally rewritten before the next one
/// is touched. Counters are bumped strictly after a file completes.
use log::{debug, info, warn};
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::backup;
use crate::config::FixerConfig;
use crate::error::FixerError;
use crate::pipeline::FixPipeline;
use crate::scanner::FileScanner;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    Changed,
    Unchanged,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub relative_path: String,
    pub status: FileStatus,
    /// Underlying error message for `Error` entries.
    pub detail: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct RunSummary {
    pub processed: usize,
    pub changed: usize,
    pub unchanged: usize,
    pub errors: usize,
}

impl RunSummary {
    fn record(&mut self, status: FileStatus) {
        self.processed += 1;
        match status {
            FileStatus::Changed => self.changed += 1,
            FileStatus::Unchanged => self.unchanged += 1,
            FileStatus::Error => self.errors += 1,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub summary: RunSummary,
    pub files: Vec<FileReport>,
}

#[derive(Debug)]
pub struct BatchRunner {
    pipeline: FixPipeline,
    config: FixerConfig,
}

impl BatchRunner {
    pub fn new(pipeline: FixPipeline, config: FixerConfig) -> Self {
        Self { pipeline, config }
    }

    pub fn pipeline(&self) -> &FixPipeline {
        &self.pipeline
    }

    /// Run the pass under `root`. Missing root or scope directory is
    /// fatal and aborts before any file is touched; once the walk has
    /// started, per-file failures are logged and counted but never
    /// stop the batch.
    pub fn run(&self, root: &Path) -> Result<RunReport, FixerError> {
        if !root.exists() {
            return Err(FixerError::MissingRoot(root.to_path_buf()));
        }

        let source_dir = root.join(self.config.subdir_for(self.pipeline.kind()));
        if !source_dir.exists() {
            return Err(FixerError::MissingSourceDir(source_dir));
        }

        info!(
            "{} pass: scanning {}",
            self.pipeline.kind().name(),
            source_dir.display()
        );

        let scanner = FileScanner::new(&self.config.extension);
        let files = scanner.scan(&source_dir);

        let mut summary = RunSummary::default();
        let mut reports = Vec::with_capacity(files.len());

        for file in files {
            let (status, detail) = match self.process_file(&file.path) {
                Ok(true) => {
                    debug!("changed: {}", file.relative_path);
                    (FileStatus::Changed, None)
                }
                Ok(false) => (FileStatus::Unchanged, None),
                Err(err) => {
                    warn!("error processing {}: {}", file.relative_path, err);
                    (FileStatus::Error, Some(err.to_string()))
                }
            };

            summary.record(status);
            reports.push(FileReport {
                relative_path: file.relative_path,
                status,
                detail,
            });
        }

        info!(
            "{} pass: {} processed, {} changed, {} unchanged, {} errors",
            self.pipeline.kind().name(),
            summary.processed,
            summary.changed,
            summary.unchanged,
            summary.errors
        );

        Ok(RunReport {
            summary,
            files: reports,
        })
    }

    /// Returns whether the file was rewritten. Read and write errors
    /// bubble up to the caller, which downgrades them to a report.
    fn process_file(&self, path: &Path) -> Result<bool, std::io::Error> {
        let content = fs::read_to_string(path)?;
        let outcome = self.pipeline.apply(&content);

        if outcome.changed {
            backup::overwrite(path, outcome.text.as_bytes(), self.config.backup)?;
        }
        Ok(outcome.changed)
    }
}
