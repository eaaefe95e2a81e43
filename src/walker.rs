//! Batch directory compression.
//!
//! Walks a directory tree with `walkdir`, compresses every regular file whose
//! suffix is on the compressor's allow-list, and collects the output paths.
//! A failure on one file never aborts the walk: it is logged and the remaining
//! entries are still processed.

use std::path::{Path, PathBuf};

use tracing::warn;
use walkdir::WalkDir;

use crate::compress::Compressor;
use crate::CompressorError;

/// Compresses all supported files under `root`, recursing into subdirectories.
///
/// Entries whose suffix is not on the allow-list are silently skipped. Per-file
/// failures (unreadable files, write errors) are reported via `tracing::warn!`
/// and excluded from the result; they do not stop the walk. The returned
/// sequence therefore contains only the successful output paths, in visit order.
///
/// # Errors
///
/// [`CompressorError::NotADirectory`] if `root` is not an existing directory.
/// This is checked up front, before any file is touched.
pub fn compress_tree(
    compressor: &Compressor,
    root: impl AsRef<Path>,
) -> Result<Vec<PathBuf>, CompressorError> {
    let root = root.as_ref();
    if !root.is_dir() {
        return Err(CompressorError::NotADirectory { path: root.to_path_buf() });
    }

    let mut compressed_files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                // Unreadable subdirectory or broken link; skip and keep walking.
                warn!("Error walking tree under {}: {}", root.display(), e);
                continue;
            }
        };
        if !entry.file_type().is_file() || !compressor.is_supported(entry.path()) {
            continue;
        }
        match compressor.compress_file(entry.path()) {
            Ok(output_path) => compressed_files.push(output_path),
            Err(e) => warn!("Error compressing {}: {}", entry.path().display(), e),
        }
    }

    Ok(compressed_files)
}
