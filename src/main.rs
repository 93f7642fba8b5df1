// src/main.rs
mod config;
mod document;
mod extractors;
mod models;
mod output;
mod pipeline;
mod utils;

use std::path::PathBuf;

use clap::Parser;

use config::SectionMarkers;
use pipeline::PipelineConfig;
use utils::AppError;

/// Command Line Interface for the resume field extractor
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the resume PDF to parse
    input: PathBuf,

    /// Write the JSON record to this file instead of standard output
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON file overriding the built-in section marker-fallback table
    #[arg(short, long)]
    markers: Option<PathBuf>,
}

fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::info!("Starting extraction for args: {:?}", args);

    // 3. Resolve the section marker table
    let markers = match &args.markers {
        Some(path) => SectionMarkers::from_file(path)?,
        None => SectionMarkers::default(),
    };

    // 4. Run the pipeline: acquire text, extract fields, emit the record
    let config = PipelineConfig {
        input: args.input,
        output: args.output,
        markers,
    };
    pipeline::run(&config)
}
