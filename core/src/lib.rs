pub mod backup;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod replacements;
pub mod runner;
pub mod scanner;
pub mod transform;


pub use backup::{overwrite, WriteOutcome};
pub use config::FixerConfig;
pub use error::FixerError;
pub use pipeline::{FixPipeline, PassKind, TransformOutcome};
pub use runner::{BatchRunner, FileReport, FileStatus, RunReport, RunSummary};
pub use scanner::{FileScanner, ScannedFile};
