use std::path::PathBuf;
use thiserror::Error;

/// Fatal, pre-walk failures. I/O errors during the walk never surface
/// here: the scanner skips unreadable entries and the runner downgrades
/// per-file failures to reports, so one bad file or directory cannot
/// abort the batch.
#[derive(Debug, Error)]
pub enum FixerError {
    #[error("directory not found: {}", .0.display())]
    MissingRoot(PathBuf),

    #[error("source directory not found: {}", .0.display())]
    MissingSourceDir(PathBuf),
}
