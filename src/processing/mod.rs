//! Keyword extraction and matching engine

pub mod keywords;
pub mod lexicon;
pub mod matcher;

pub use keywords::KeywordExtractor;
pub use lexicon::Lexicon;
pub use matcher::{analyze, MatchResult};
