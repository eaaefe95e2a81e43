use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// Compress files or whole directory trees with gzip.
    #[command(alias = "c")]
    Compress {
        /// One or more input files or directories. Each file becomes `<file>.gz`;
        /// directories are walked recursively and every supported file is compressed.
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Override the allow-list of supported suffixes (repeatable, e.g. --ext .md).
        /// Matching is exact and case-sensitive. Defaults to .txt, .csv, .json, .xml, .log.
        #[arg(long = "ext", value_name = "EXT")]
        extensions: Vec<String>,
    },

    /// Decompress gzip files, stripping the `.gz` suffix.
    #[command(alias = "d")]
    Decompress {
        /// One or more `.gz` files to decompress.
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
    },
}

/// Parses command-line arguments using `clap` and returns the command to execute.
pub fn run() -> Result<Commands, Box<dyn std::error::Error>> {
    let args = Args::parse();
    Ok(args.command)
}
