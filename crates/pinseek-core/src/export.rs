//! Export artifacts — rendered documents parked on disk for upload.
//!
//! Each artifact owns a private temporary directory, so the file name can be
//! derived from the user's query without colliding with a concurrent export
//! of the same query. Dropping the artifact removes the directory and the
//! file with it; the caller only has to keep it alive until the upload is
//! done.

use crate::error::ExportError;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Longest sanitized query stem embedded in a file name.
const MAX_STEM_LEN: usize = 60;

/// Reduce a query to a filesystem-safe file name stem.
///
/// ASCII alphanumerics, `.`, `_` and `-` pass through; everything else
/// becomes `_`. The stem is capped at [`MAX_STEM_LEN`] characters, and a
/// query with nothing printable left falls back to `results`.
pub fn sanitize_file_name(query: &str) -> String {
    let mut stem: String = query
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    stem.truncate(MAX_STEM_LEN);

    if stem.trim_matches('_').is_empty() {
        "results".to_string()
    } else {
        stem
    }
}

/// A rendered document written under its own temporary directory.
#[derive(Debug)]
pub struct ExportArtifact {
    // Held for its Drop; removing the directory removes the file.
    _dir: TempDir,
    path: PathBuf,
    file_name: String,
}

impl ExportArtifact {
    /// Park `bytes` on disk as `pincode_results_<query>.pdf`.
    pub fn write(query: &str, bytes: &[u8]) -> Result<Self, ExportError> {
        let dir = TempDir::new()?;
        let file_name = format!("pincode_results_{}.pdf", sanitize_file_name(query));
        let path = dir.path().join(&file_name);
        fs::write(&path, bytes)?;

        Ok(Self {
            _dir: dir,
            path,
            file_name,
        })
    }

    /// On-disk location; valid for the lifetime of the artifact.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name presented to the receiving side of the upload.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}
