//! Main entry point for the gzipper CLI app

use gzipper::cli::{self, Commands};
use gzipper::compress::Compressor;
use gzipper::walker;
use tracing_subscriber::EnvFilter;

fn main() -> std::process::ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run_app() {
        if e.downcast_ref::<clap::Error>().is_none() {
            eprintln!("Error: {}", e);
        }
        return std::process::ExitCode::FAILURE;
    }
    std::process::ExitCode::SUCCESS
}

fn run_app() -> Result<(), Box<dyn std::error::Error>> {
    let command = cli::run()?;

    match &command {
        Commands::Compress { inputs, extensions } => {
            let compressor = if extensions.is_empty() {
                Compressor::new()
            } else {
                Compressor::with_extensions(extensions.clone())
            };
            for input in inputs {
                if input.is_dir() {
                    let outputs = walker::compress_tree(&compressor, input)?;
                    for path in &outputs {
                        println!("Compressed: {}", path.display());
                    }
                    println!("Compressed {} file(s) under {}", outputs.len(), input.display());
                } else {
                    let output = compressor.compress_file(input)?;
                    println!("Compressed: {}", output.display());
                }
            }
        }
        Commands::Decompress { inputs } => {
            let compressor = Compressor::new();
            for input in inputs {
                let output = compressor.decompress_file(input)?;
                println!("Decompressed: {}", output.display());
            }
        }
    }

    Ok(())
}
