//! Word lists loaded from disk: stopwords and the sentiment lexicon.
pub mod sentiment;
pub mod stopwords;
