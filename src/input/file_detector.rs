//! File type detection

use crate::error::{Result, ResumeAnalyzerError};
use std::path::Path;

/// Supported resume document formats. Resolved once at the input boundary so
/// the rest of the pipeline never branches on extension strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "pdf" => Some(DocumentFormat::Pdf),
            "docx" => Some(DocumentFormat::Docx),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path.extension().and_then(|e| e.to_str()).ok_or_else(|| {
            ResumeAnalyzerError::UnsupportedFormat(format!(
                "File has no extension: {}",
                path.display()
            ))
        })?;

        Self::from_extension(ext).ok_or_else(|| {
            ResumeAnalyzerError::UnsupportedFormat(format!(
                "Unsupported resume format '.{}' (expected .pdf or .docx)",
                ext
            ))
        })
    }
}

/// Accepted job description file types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobFileType {
    Text,
    Markdown,
}

impl JobFileType {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "txt" => Ok(JobFileType::Text),
            "md" | "markdown" => Ok(JobFileType::Markdown),
            _ => Err(ResumeAnalyzerError::UnsupportedFormat(format!(
                "Unsupported job description file: {} (expected .txt or .md)",
                path.display()
            ))),
        }
    }
}
