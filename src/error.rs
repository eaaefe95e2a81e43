use std::path::PathBuf;

/// The primary error type for all operations in the `gzipper` crate.
#[derive(Debug)]
pub enum CompressorError {
    /// The input path does not exist on the filesystem.
    NotFound { path: PathBuf },

    /// The input file's suffix is not in the allow-list (compress path only).
    UnsupportedFormat { path: PathBuf, extension: String },

    /// The input file lacks the `.gz` suffix (decompress path only).
    InvalidFormat { path: PathBuf },

    /// The batch root is not an existing directory.
    NotADirectory { path: PathBuf },

    /// An I/O error occurred, typically while reading or writing a file.
    /// Includes the path where the error happened.
    Io { source: std::io::Error, path: PathBuf },
}

impl std::fmt::Display for CompressorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompressorError::NotFound { path } => write!(f, "File not found: {}", path.display()),
            CompressorError::UnsupportedFormat { path, extension } => {
                write!(f, "Unsupported file type '{}': {}", extension, path.display())
            }
            CompressorError::InvalidFormat { path } => {
                write!(f, "File must be a gzip file (.gz extension): {}", path.display())
            }
            CompressorError::NotADirectory { path } => write!(f, "Not a directory: {}", path.display()),
            CompressorError::Io { source, path } => write!(f, "I/O error on path '{}': {}", path.display(), source),
        }
    }
}

impl std::error::Error for CompressorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CompressorError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
