//! # Gzipper Core Library
//!
//! This crate provides the core functionality for the `gzipper` utility.
//!
//! It is designed to be used by the `gzipper` command-line application, but its public API
//! can also be used programmatically to pack and unpack `.gz` files.
//!
//! ## Key Modules
//!
//! - [`compress`]: Single-file compression and decompression using `flate2` gzip.
//! - [`walker`]: Recursive directory compression with per-file failure isolation.
//!
//! ## Examples
//!
//! ```no_run
//! use gzipper::compress::Compressor;
//!
//! let compressor = Compressor::new();
//! let packed = compressor.compress_file("notes.txt")?;
//! let restored = compressor.decompress_file(&packed)?;
//! assert_eq!(restored, std::path::PathBuf::from("notes.txt"));
//! # Ok::<(), gzipper::CompressorError>(())
//! ```

pub mod cli;
pub mod compress;
pub mod error;
pub use error::CompressorError;

pub mod walker;
