//! CLI interface for the resume analyzer

use clap::{Parser, Subcommand};
use std::path::Path;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-analyzer")]
#[command(about = "Resume keyword analyzer with AI-powered feedback")]
#[command(
    long_about = "Score a resume against a job description's significant keywords and optionally request AI-generated improvement feedback"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a resume against a job description
    Analyze {
        /// Path to resume file (PDF or DOCX)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to job description file (TXT, MD)
        #[arg(short, long)]
        job: PathBuf,

        /// Request AI-generated feedback from the text-generation service
        #[arg(short, long)]
        ai_feedback: bool,

        /// Output detailed analysis
        #[arg(short, long)]
        detailed: bool,

        /// Output format: console, json, markdown
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_output_format() {
        assert!(parse_output_format("console").is_ok());
        assert!(parse_output_format("JSON").is_ok());
        assert!(parse_output_format("md").is_ok());
        assert!(parse_output_format("html").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        let path = PathBuf::from("resume.PDF");
        assert!(validate_file_extension(&path, &["pdf", "docx"]).is_ok());

        let path = PathBuf::from("resume.txt");
        assert!(validate_file_extension(&path, &["pdf", "docx"]).is_err());

        let path = PathBuf::from("resume");
        assert!(validate_file_extension(&path, &["pdf", "docx"]).is_err());
    }
}
