//! Output formatters for console, JSON, and markdown

use crate::config::OutputFormat;
use crate::error::{Result, ResumeAnalyzerError};
use crate::output::report::{score_verdict, AnalysisReport};
use colored::Colorize;
use std::path::Path;

/// Trait for formatting analysis reports
pub trait OutputFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String>;
}

/// Console formatter with colors and a score meter
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for structured output
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for shareable reports
pub struct MarkdownFormatter;

const METER_WIDTH: usize = 25;

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            use_colors,
            detailed,
        }
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        match color {
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            "red" => text.red().to_string(),
            "bold" => text.bold().to_string(),
            _ => text.to_string(),
        }
    }

    fn score_color(score: f64) -> &'static str {
        if score >= 60.0 {
            "green"
        } else if score >= 40.0 {
            "yellow"
        } else {
            "red"
        }
    }

    fn score_meter(score: f64) -> String {
        let filled = ((score / 100.0) * METER_WIDTH as f64).round() as usize;
        let filled = filled.min(METER_WIDTH);
        format!("[{}{}]", "█".repeat(filled), "░".repeat(METER_WIDTH - filled))
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let mut out = String::new();
        let result = &report.match_result;

        out.push_str(&self.paint("Keyword Analysis\n", "bold"));
        out.push_str(&format!(
            "{} {}\n",
            Self::score_meter(result.score),
            self.paint(
                &format!("Keyword Match Score: {:.2}%", result.score),
                Self::score_color(result.score)
            )
        ));
        out.push_str(&format!("{}\n\n", score_verdict(result.score)));

        out.push_str(&self.paint(
            &format!("Matched Keywords ({})\n", result.matched_count()),
            "green",
        ));
        if result.matched_keywords.is_empty() {
            out.push_str("  No keywords matched.\n");
        } else {
            out.push_str(&format!("  {}\n", result.matched_keywords.join(", ")));
        }

        out.push_str(&self.paint(
            &format!("\nMissing Keywords ({})\n", result.missing_count()),
            "red",
        ));
        if result.missing_keywords.is_empty() {
            out.push_str("  Great job! No critical keywords are missing.\n");
        } else {
            out.push_str(&format!("  {}\n", result.missing_keywords.join(", ")));
        }

        if self.detailed {
            out.push_str(&format!(
                "\nResume text: {} characters | Job keywords: {}\n",
                report.resume_char_count, report.jd_keyword_count
            ));
        }

        if let Some(feedback) = &report.feedback {
            out.push_str(&self.paint("\nAI-Powered Feedback\n", "bold"));
            out.push_str(feedback.text());
            out.push('\n');
        }

        Ok(out)
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let result = &report.match_result;
        let mut out = String::new();

        out.push_str("# Resume Keyword Analysis\n\n");
        out.push_str(&format!("- **Resume:** `{}`\n", report.resume_path));
        out.push_str(&format!("- **Job description:** `{}`\n", report.job_path));
        out.push_str(&format!(
            "- **Generated:** {}\n\n",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M UTC")
        ));

        out.push_str(&format!(
            "## Keyword Match Score: {:.2}%\n\n{}\n\n",
            result.score,
            score_verdict(result.score)
        ));

        out.push_str(&format!(
            "## Matched Keywords ({})\n\n",
            result.matched_count()
        ));
        if result.matched_keywords.is_empty() {
            out.push_str("No keywords matched.\n\n");
        } else {
            for keyword in &result.matched_keywords {
                out.push_str(&format!("- {}\n", keyword));
            }
            out.push('\n');
        }

        out.push_str(&format!(
            "## Missing Keywords ({})\n\n",
            result.missing_count()
        ));
        if result.missing_keywords.is_empty() {
            out.push_str("Great job! No critical keywords are missing.\n\n");
        } else {
            for keyword in &result.missing_keywords {
                out.push_str(&format!("- {}\n", keyword));
            }
            out.push('\n');
        }

        if let Some(feedback) = &report.feedback {
            out.push_str("## AI-Powered Feedback\n\n");
            out.push_str(feedback.text());
            out.push('\n');
        }

        Ok(out)
    }
}

/// Dispatches to the right formatter and optionally saves to file
pub struct ReportGenerator {
    use_colors: bool,
    detailed: bool,
}

impl ReportGenerator {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            use_colors,
            detailed,
        }
    }

    pub fn generate(&self, report: &AnalysisReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => {
                ConsoleFormatter::new(self.use_colors, self.detailed).format_report(report)
            }
            OutputFormat::Json => JsonFormatter::new(true).format_report(report),
            OutputFormat::Markdown => MarkdownFormatter.format_report(report),
        }
    }

    pub fn save_to_file(&self, content: &str, path: &Path) -> Result<()> {
        std::fs::write(path, content).map_err(|e| {
            ResumeAnalyzerError::OutputFormatting(format!(
                "Failed to save report to {}: {}",
                path.display(),
                e
            ))
        })
    }
}
