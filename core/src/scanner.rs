/// Recursive file discovery with a fixed extension filter. Files are
/// visited in directory-traversal order; no sorting, no parallelism.
///
/// Traversal never fails: an unreadable directory or a vanished entry
/// is logged and skipped so the batch always sees every file that can
/// still be reached.
use log::warn;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize)]
pub struct ScannedFile {
    pub path: PathBuf,
    pub relative_path: String,
}

#[derive(Debug, Clone)]
pub struct FileScanner {
    extension: String,
}

impl FileScanner {
    pub fn new(extension: &str) -> Self {
        Self {
            extension: extension.to_string(),
        }
    }

    /// Walk `root` and collect every matching file beneath it.
    pub fn scan(&self, root: &Path) -> Vec<ScannedFile> {
        let mut files = Vec::new();
        self.scan_recursive(root, root, &mut files);
        files
    }

    fn scan_recursive(&self, root: &Path, current: &Path, files: &mut Vec<ScannedFile>) {
        let entries = match fs::read_dir(current) {
            Ok(entries) => entries,
            Err(err) => {
                warn!("skipping unreadable directory {}: {}", current.display(), err);
                return;
            }
        };

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!("skipping entry under {}: {}", current.display(), err);
                    continue;
                }
            };
            let path = entry.path();

            if path.is_dir() {
                self.scan_recursive(root, &path, files);
            } else if path.is_file() && self.matches_extension(&path) {
                let relative_path = path
                    .strip_prefix(root)
                    .ok()
                    .and_then(|p| p.to_str())
                    .unwrap_or("")
                    .to_string();

                files.push(ScannedFile {
                    path,
                    relative_path,
                });
            }
        }
    }

    fn matches_extension(&self, path: &Path) -> bool {
        path.extension().and_then(|ext| ext.to_str()) == Some(self.extension.as_str())
    }
}
