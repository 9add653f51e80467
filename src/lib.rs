/// This crate turns POS-tagged Chinese Q&A text into keyword lists, dense
/// TF-IDF vectors and a hybrid TF-IDF + sentiment feature matrix.
pub mod classify;
pub mod config;
pub mod error;
pub mod features;
pub mod lexicon;
pub mod pipeline;
pub mod vectorizer;

/// TF-IDF Vectorizer
/// Holds the filtered term frequency of every document of a corpus and the
/// document frequencies derived from them.
/// From it you get per-document TF-IDF scores, top-k keywords and a dense
/// matrix over the sorted vocabulary.
///
/// `TfIdfVectorizer<N, E>` has the following generic parameters:
/// - `N`: weight type (`f32`, `f64`)
/// - `E`: TF-IDF calculation engine (e.g. `SmoothTfIdfEngine`)
///
/// The same `TermFilter` is applied to the term frequency and the document
/// frequency pass, so both always agree on which words count.
pub use vectorizer::TfIdfVectorizer;

/// Corpus statistics
/// Document count and, per term, the number of documents containing it.
/// A term is counted at most once per document.
pub use vectorizer::corpus::Corpus;

/// Term Frequency structure
/// Counts of the kept terms of one document, in first-occurrence order.
pub use vectorizer::term::{TermFilter, TermFrequency};

/// Tagged tokens and documents
/// `word/pos` tokens parsed from one line of tagger output.
/// Malformed tokens are dropped, never rejected.
pub use vectorizer::token::{Document, TaggedToken};

/// TF-IDF Calculation Engine Trait
/// `SmoothTfIdfEngine` computes `count * (ln((N + 1) / (df + 1)) + 1)` and
/// supports `f32` and `f64` weights.
pub use vectorizer::tfidf::{SmoothTfIdfEngine, TfIdfEngine, TfIdfScores};

/// Keyword lists
/// Top-k terms by TF-IDF; equal scores keep first-occurrence order.
pub use vectorizer::keyword::{DocumentKeywords, Keyword};

/// Dense TF-IDF rows and their vocabulary
pub use vectorizer::dense::{DenseTfIdfMatrix, Vocabulary};

/// Stopwords and the sentiment lexicon
/// The lexicon merges repeated words pairwise (`(old + new) / 2`) in load order.
pub use lexicon::{
    sentiment::{CategoryWeights, LexiconEncoding, SentimentLexicon},
    stopwords::StopwordSet,
};

/// Hybrid features
/// N-gram TF-IDF over keyword texts with a sentiment score column appended.
pub use features::{
    keywords_to_text, matrix::FeatureMatrix, ngram::NgramTfidfVectorizer, HybridFeatureBuilder,
    HybridFeatures,
};

/// Classifier hand-off
pub use classify::{LabeledDataset, SentimentTrainer};

pub use config::PipelineConfig;
pub use error::{Error, Result};
