//! # Single-File Transforms
//!
//! This module implements the core compress/decompress logic for `gzipper`. Each
//! operation validates its preconditions, streams the file through the `flate2`
//! gzip codec in one pass, and returns the deterministically-computed output path.
//!
//! ## Naming contract
//!
//! - Compressing `report.txt` produces `report.txt.gz`, leaving the source untouched.
//! - Decompressing `report.txt.gz` strips exactly the `.gz` suffix, producing `report.txt`.
//!
//! This suffix convention is the only wire-format contract with the outside world;
//! archives produced by one run stay unpackable by any later run.

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::ffi::OsString;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use crate::CompressorError;

/// The file extension appended to compressed output, without the leading dot.
pub const PACKED_EXTENSION: &str = "gz";

/// The default set of file suffixes eligible for compression.
pub const DEFAULT_EXTENSIONS: [&str; 5] = [".txt", ".csv", ".json", ".xml", ".log"];

/// Handles file compression and decompression operations.
///
/// A `Compressor` holds an immutable allow-list of file suffixes; only files whose
/// final extension is an exact, case-sensitive member of that list can be
/// compressed. Decompression accepts any `.gz` file regardless of the list.
#[derive(Debug, Clone)]
pub struct Compressor {
    allowed_extensions: Vec<String>,
}

impl Compressor {
    /// Creates a compressor with the default allow-list
    /// (`.txt`, `.csv`, `.json`, `.xml`, `.log`).
    pub fn new() -> Self {
        Self::with_extensions(DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect())
    }

    /// Creates a compressor with a custom allow-list. Each entry should include
    /// the leading dot (e.g. `".md"`); matching is exact and case-sensitive.
    pub fn with_extensions(allowed_extensions: Vec<String>) -> Self {
        Self { allowed_extensions }
    }

    /// The allow-list this instance was built with.
    pub fn allowed_extensions(&self) -> &[String] {
        &self.allowed_extensions
    }

    /// Returns true if the path's final suffix is a member of the allow-list.
    pub fn is_supported(&self, path: &Path) -> bool {
        match final_suffix(path) {
            Some(suffix) => self.allowed_extensions.iter().any(|e| *e == suffix),
            None => false,
        }
    }

    /// Compresses a single file with gzip.
    ///
    /// The output is written next to the source as `<path>.gz`; the source file is
    /// left untouched. Returns the path to the compressed file.
    ///
    /// # Errors
    ///
    /// - [`CompressorError::NotFound`] if `path` does not exist.
    /// - [`CompressorError::UnsupportedFormat`] if the file's suffix is not allowed.
    /// - [`CompressorError::Io`] on any read/write failure.
    pub fn compress_file(&self, path: impl AsRef<Path>) -> Result<PathBuf, CompressorError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CompressorError::NotFound { path: path.to_path_buf() });
        }
        if !self.is_supported(path) {
            return Err(CompressorError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension: final_suffix(path).unwrap_or_default(),
            });
        }

        let output_path = packed_path(path);

        let mut input = File::open(path)
            .map_err(|e| CompressorError::Io { source: e, path: path.to_path_buf() })?;
        let output = File::create(&output_path)
            .map_err(|e| CompressorError::Io { source: e, path: output_path.clone() })?;
        let mut encoder = GzEncoder::new(output, Compression::default());
        io::copy(&mut input, &mut encoder)
            .map_err(|e| CompressorError::Io { source: e, path: path.to_path_buf() })?;
        // finish() flushes the trailer; dropping without it would truncate the stream
        encoder
            .finish()
            .map_err(|e| CompressorError::Io { source: e, path: output_path.clone() })?;

        Ok(output_path)
    }

    /// Decompresses a gzip-compressed file.
    ///
    /// The output path is formed by stripping exactly the `.gz` suffix; the
    /// compressed file is left untouched. Returns the path to the decompressed file.
    ///
    /// # Errors
    ///
    /// - [`CompressorError::NotFound`] if `path` does not exist.
    /// - [`CompressorError::InvalidFormat`] if `path` does not end in `.gz`.
    /// - [`CompressorError::Io`] on any read/write failure, including a corrupt
    ///   gzip stream.
    pub fn decompress_file(&self, path: impl AsRef<Path>) -> Result<PathBuf, CompressorError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CompressorError::NotFound { path: path.to_path_buf() });
        }
        if path.extension().and_then(|e| e.to_str()) != Some(PACKED_EXTENSION) {
            return Err(CompressorError::InvalidFormat { path: path.to_path_buf() });
        }

        let output_path = path.with_extension("");

        let input = File::open(path)
            .map_err(|e| CompressorError::Io { source: e, path: path.to_path_buf() })?;
        let mut decoder = GzDecoder::new(input);
        let mut output = File::create(&output_path)
            .map_err(|e| CompressorError::Io { source: e, path: output_path.clone() })?;
        io::copy(&mut decoder, &mut output)
            .map_err(|e| CompressorError::Io { source: e, path: path.to_path_buf() })?;

        Ok(output_path)
    }
}

impl Default for Compressor {
    fn default() -> Self {
        Self::new()
    }
}

/// The final suffix of a filename with its leading dot (e.g. `".txt"`), or `None`
/// for extension-less files. Case is preserved; `.JSON` is distinct from `.json`.
fn final_suffix(path: &Path) -> Option<String> {
    path.extension().map(|ext| format!(".{}", ext.to_string_lossy()))
}

/// Appends the packed extension to a path without replacing the existing one.
fn packed_path(path: &Path) -> PathBuf {
    let mut packed = OsString::from(path.as_os_str());
    packed.push(".");
    packed.push(PACKED_EXTENSION);
    PathBuf::from(packed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packed_path_appends_suffix() {
        assert_eq!(packed_path(Path::new("/d/a.txt")), PathBuf::from("/d/a.txt.gz"));
    }

    #[test]
    fn final_suffix_is_case_sensitive() {
        assert_eq!(final_suffix(Path::new("a.JSON")), Some(".JSON".to_string()));
        assert_eq!(final_suffix(Path::new("no_extension")), None);
    }

    #[test]
    fn default_allow_list_matches_exactly() {
        let c = Compressor::new();
        assert!(c.is_supported(Path::new("notes.txt")));
        assert!(c.is_supported(Path::new("data.csv")));
        assert!(!c.is_supported(Path::new("data.JSON")));
        assert!(!c.is_supported(Path::new("binary.exe")));
        assert!(!c.is_supported(Path::new("README")));
    }
}
