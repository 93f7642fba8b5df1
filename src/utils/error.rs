// src/utils/error.rs
use std::path::PathBuf;
use thiserror::Error;

// Define specific error types for different parts of the application
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Could not open document {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        source: lopdf::Error,
    },

    #[error("Could not decode text on page {page}: {source}")]
    PageText { page: u32, source: lopdf::Error },
}

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error), // Automatically convert IO errors

    #[error("Document acquisition failed: {0}")]
    Document(#[from] DocumentError),

    #[error("Output failed: {0}")]
    Output(#[from] OutputError),
}
