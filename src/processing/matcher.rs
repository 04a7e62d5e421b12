//! Resume-to-keyword matching and scoring

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Result of scoring one resume against one job-description keyword set.
/// Computed once per analysis, rendered, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Keywords found in the resume text, sorted lexicographically.
    pub matched_keywords: Vec<String>,
    /// Keywords absent from the resume text, sorted lexicographically.
    pub missing_keywords: Vec<String>,
    /// Percentage of job keywords matched, in [0, 100].
    pub score: f64,
}

impl MatchResult {
    pub fn matched_count(&self) -> usize {
        self.matched_keywords.len()
    }

    pub fn missing_count(&self) -> usize {
        self.missing_keywords.len()
    }

    pub fn keyword_count(&self) -> usize {
        self.matched_keywords.len() + self.missing_keywords.len()
    }
}

/// Partition the job-description keywords by contiguous substring presence in
/// the lowercased resume text and compute the match percentage.
///
/// Matching is substring containment, not word-boundary matching: "manager"
/// in the resume satisfies the keyword "man". Total over all inputs; an
/// empty keyword set scores 0 by policy rather than erroring on division.
pub fn analyze(resume_text: &str, jd_keywords: &HashSet<String>) -> MatchResult {
    let haystack = resume_text.to_lowercase();

    let (mut matched_keywords, mut missing_keywords): (Vec<String>, Vec<String>) = jd_keywords
        .iter()
        .cloned()
        .partition(|keyword| haystack.contains(keyword.as_str()));

    matched_keywords.sort();
    missing_keywords.sort();

    let score = if jd_keywords.is_empty() {
        0.0
    } else {
        (matched_keywords.len() as f64 / jd_keywords.len() as f64) * 100.0
    };

    MatchResult {
        matched_keywords,
        missing_keywords,
        score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keyword_set(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_matched_and_missing_partition_keywords() {
        let keywords = keyword_set(&["python", "sql", "communication"]);
        let result = analyze("Experienced in Python and SQL development.", &keywords);

        let matched: HashSet<String> = result.matched_keywords.iter().cloned().collect();
        let missing: HashSet<String> = result.missing_keywords.iter().cloned().collect();

        assert!(matched.is_disjoint(&missing));
        let union: HashSet<String> = matched.union(&missing).cloned().collect();
        assert_eq!(union, keywords);
    }

    #[test]
    fn test_scenario_python_sql_communication() {
        let keywords = keyword_set(&["python", "sql", "communication"]);
        let result = analyze("Experienced in Python and SQL development.", &keywords);

        assert_eq!(result.matched_keywords, vec!["python", "sql"]);
        assert_eq!(result.missing_keywords, vec!["communication"]);
        assert!((result.score - 200.0 / 3.0).abs() < 1e-9);
        assert_eq!(format!("{:.2}", result.score), "66.67");
    }

    #[test]
    fn test_empty_keyword_set_scores_zero() {
        let result = analyze("any resume text at all", &HashSet::new());

        assert!(result.matched_keywords.is_empty());
        assert!(result.missing_keywords.is_empty());
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_empty_resume_text() {
        let keywords = keyword_set(&["java"]);
        let result = analyze("", &keywords);

        assert!(result.matched_keywords.is_empty());
        assert_eq!(result.missing_keywords, vec!["java"]);
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_substring_containment_is_not_word_boundary() {
        // "man" matches inside "manager"; containment is deliberate.
        let keywords = keyword_set(&["man"]);
        let result = analyze("senior project manager", &keywords);

        assert_eq!(result.matched_keywords, vec!["man"]);
        assert!(result.missing_keywords.is_empty());
        assert_eq!(result.score, 100.0);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let keywords = keyword_set(&["kubernetes"]);
        let result = analyze("Deployed services on KUBERNETES clusters", &keywords);

        assert_eq!(result.matched_keywords, vec!["kubernetes"]);
        assert_eq!(result.score, 100.0);
    }

    #[test]
    fn test_score_bounds() {
        let keywords = keyword_set(&["rust", "go", "zig", "cobol"]);
        let result = analyze("I write Rust and Go.", &keywords);

        assert!(result.score >= 0.0 && result.score <= 100.0);
        assert_eq!(result.score, 50.0);
    }

    #[test]
    fn test_idempotence() {
        let keywords = keyword_set(&["python", "terraform"]);
        let text = "Python and Terraform platform engineer";

        assert_eq!(analyze(text, &keywords), analyze(text, &keywords));
    }
}
