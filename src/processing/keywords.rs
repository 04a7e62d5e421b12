//! Keyword-set construction from raw text

use crate::processing::lexicon::Lexicon;
use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

/// Builds normalized keyword sets: lowercase, alphabetic-only tokens with
/// stop words removed. Membership is exact string equality; no stemming.
pub struct KeywordExtractor {
    lexicon: Lexicon,
}

impl KeywordExtractor {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// Turn arbitrary text into a deduplicated, unordered keyword set.
    /// Iteration order carries no meaning; callers sort for display.
    pub fn build_keyword_set(&self, text: &str) -> HashSet<String> {
        let lowered = text.to_lowercase();
        let mut keywords = HashSet::new();

        for word in lowered.unicode_words() {
            if word.is_empty() || !word.chars().all(|c| c.is_alphabetic()) {
                continue;
            }
            if self.lexicon.is_stop_word(word) {
                continue;
            }
            keywords.insert(word.to_string());
        }

        keywords
    }
}
