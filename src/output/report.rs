//! Analysis report structures

use crate::feedback::Feedback;
use crate::processing::matcher::MatchResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Complete result of one analysis run. Built once, rendered, discarded;
/// nothing here is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub resume_path: String,
    pub job_path: String,

    /// Character count of the extracted resume text. Zero when extraction
    /// degraded to empty text.
    pub resume_char_count: usize,

    /// Number of significant keywords derived from the job description.
    pub jd_keyword_count: usize,

    pub match_result: MatchResult,

    /// Present only when AI feedback was requested.
    pub feedback: Option<Feedback>,

    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub tool_version: String,
}

impl ReportMetadata {
    pub fn now() -> Self {
        Self {
            generated_at: Utc::now(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// One-line verdict for a score in [0, 100].
pub fn score_verdict(score: f64) -> &'static str {
    if score >= 80.0 {
        "Excellent keyword alignment"
    } else if score >= 60.0 {
        "Good keyword alignment"
    } else if score >= 40.0 {
        "Fair keyword alignment"
    } else {
        "Poor keyword alignment"
    }
}
