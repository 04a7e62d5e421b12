//! English stop-word lexicon, loaded once before analysis

use crate::config::AnalysisConfig;
use crate::error::{Result, ResumeAnalyzerError};
use std::collections::HashSet;
use std::path::Path;

/// Fixed English stop-word list. The embedded default mirrors the standard
/// NLTK English list; a config override replaces it wholesale.
pub struct Lexicon {
    stop_words: HashSet<String>,
}

impl Lexicon {
    /// Load the lexicon according to configuration. Missing or unreadable
    /// override files are a startup failure, not a per-request one.
    pub fn load(config: &AnalysisConfig) -> Result<Self> {
        match &config.stop_words_path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::english()),
        }
    }

    pub fn english() -> Self {
        Self {
            stop_words: ENGLISH_STOP_WORDS
                .iter()
                .map(|&w| w.to_string())
                .collect(),
        }
    }

    /// Load a stop-word list from a file, one word per line. Blank lines and
    /// `#` comments are skipped.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ResumeAnalyzerError::Tokenization(format!(
                "Stop-word list unavailable at {}: {}",
                path.display(),
                e
            ))
        })?;

        let stop_words: HashSet<String> = content
            .lines()
            .map(|line| line.trim().to_lowercase())
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .collect();

        if stop_words.is_empty() {
            return Err(ResumeAnalyzerError::Tokenization(format!(
                "Stop-word list at {} contains no words",
                path.display()
            )));
        }

        Ok(Self { stop_words })
    }

    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

const ENGLISH_STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
    "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
    "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
    "who", "whom", "this", "that", "these", "those", "am", "is", "are", "was", "were", "be",
    "been", "being", "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an",
    "the", "and", "but", "if", "or", "because", "as", "until", "while", "of", "at", "by",
    "for", "with", "about", "against", "between", "into", "through", "during", "before",
    "after", "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over",
    "under", "again", "further", "then", "once", "here", "there", "when", "where", "why",
    "how", "all", "any", "both", "each", "few", "more", "most", "other", "some", "such",
    "no", "nor", "not", "only", "own", "same", "so", "than", "too", "very", "s", "t", "can",
    "will", "just", "don", "should", "now", "d", "ll", "m", "o", "re", "ve", "y", "ain",
    "aren", "couldn", "didn", "doesn", "hadn", "hasn", "haven", "isn", "ma", "mightn",
    "mustn", "needn", "shan", "shouldn", "wasn", "weren", "won", "wouldn",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_english_lexicon() {
        let lexicon = Lexicon::english();

        assert!(lexicon.is_stop_word("the"));
        assert!(lexicon.is_stop_word("and"));
        assert!(lexicon.is_stop_word("with"));
        assert!(!lexicon.is_stop_word("python"));
        assert!(!lexicon.is_stop_word("engineer"));
        assert!(lexicon.len() > 100);
    }

    #[test]
    fn test_lexicon_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# custom list").unwrap();
        writeln!(file, "Foo").unwrap();
        writeln!(file, "bar").unwrap();
        writeln!(file).unwrap();

        let lexicon = Lexicon::from_file(file.path()).unwrap();
        assert_eq!(lexicon.len(), 2);
        assert!(lexicon.is_stop_word("foo"));
        assert!(lexicon.is_stop_word("bar"));
        assert!(!lexicon.is_stop_word("the"));
    }

    #[test]
    fn test_missing_override_is_startup_failure() {
        let result = Lexicon::from_file(Path::new("/nonexistent/stopwords.txt"));
        assert!(matches!(
            result,
            Err(ResumeAnalyzerError::Tokenization(_))
        ));
    }

    #[test]
    fn test_empty_override_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# only a comment").unwrap();

        let result = Lexicon::from_file(file.path());
        assert!(matches!(
            result,
            Err(ResumeAnalyzerError::Tokenization(_))
        ));
    }
}
