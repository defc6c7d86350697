//! Error handling for the skill analyzer

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkillAnalyzerError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("Invalid skill database: {0}")]
    InvalidDatabase(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SkillAnalyzerError>;

impl SkillAnalyzerError {
    /// Map an I/O failure on `path` to the error kind the user should see.
    pub fn from_io(err: std::io::Error, path: &std::path::Path) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => SkillAnalyzerError::FileNotFound(path.to_path_buf()),
            _ => SkillAnalyzerError::Io(err),
        }
    }
}
