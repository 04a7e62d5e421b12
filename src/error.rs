//! Error handling for the resume analyzer application

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeAnalyzerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("DOCX extraction error: {0}")]
    DocxExtraction(String),

    #[error("Corrupt document: {0}")]
    CorruptDocument(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Tokenization error: {0}")]
    Tokenization(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Feedback service error: {0}")]
    Feedback(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, ResumeAnalyzerError>;

/// Convert HTTP client errors into feedback-path errors
impl From<reqwest::Error> for ResumeAnalyzerError {
    fn from(err: reqwest::Error) -> Self {
        ResumeAnalyzerError::Feedback(err.to_string())
    }
}

impl ResumeAnalyzerError {
    /// Extraction failures are degraded to empty text by the pipeline
    /// instead of aborting the keyword analysis.
    pub fn is_extraction_failure(&self) -> bool {
        matches!(
            self,
            ResumeAnalyzerError::PdfExtraction(_)
                | ResumeAnalyzerError::DocxExtraction(_)
                | ResumeAnalyzerError::CorruptDocument(_)
        )
    }
}
