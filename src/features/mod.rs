//! Hybrid feature matrix: n-gram TF-IDF of extracted keywords plus one
//! sentiment-lexicon score column.
pub mod matrix;
pub mod ngram;

use num::Float;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    error::Result,
    features::{matrix::FeatureMatrix, ngram::NgramTfidfVectorizer},
    lexicon::sentiment::SentimentLexicon,
    vectorizer::keyword::DocumentKeywords,
};

/// Space-joined keyword text of every document, scores dropped
pub fn keywords_to_text<N: Float>(keywords: &[DocumentKeywords<N>]) -> Vec<String> {
    keywords.iter().map(DocumentKeywords::to_text).collect()
}

/// Output of `HybridFeatureBuilder::build`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HybridFeatures {
    /// n-gram columns followed by the sentiment column
    pub matrix: FeatureMatrix,
    /// fitted vectorizer, reusable on unseen texts
    pub vectorizer: NgramTfidfVectorizer,
    /// sentiment score per document
    pub sentiment: Vec<f64>,
}

impl HybridFeatures {
    /// Column index of the sentiment score
    pub fn sentiment_column(&self) -> usize {
        self.matrix.cols() - 1
    }
}

/// Builds the classifier input from keyword texts and a sentiment lexicon
#[derive(Debug, Clone)]
pub struct HybridFeatureBuilder<'a> {
    lexicon: &'a SentimentLexicon,
    ngram_range: (usize, usize),
    max_features: Option<usize>,
}

impl<'a> HybridFeatureBuilder<'a> {
    /// unigram + bigram, at most 1000 n-gram columns
    pub fn new(lexicon: &'a SentimentLexicon) -> Self {
        Self {
            lexicon,
            ngram_range: (1, 2),
            max_features: Some(1000),
        }
    }

    pub fn ngram_range(mut self, ngram_range: (usize, usize)) -> Self {
        self.ngram_range = ngram_range;
        self
    }

    pub fn max_features(mut self, max_features: Option<usize>) -> Self {
        self.max_features = max_features;
        self
    }

    /// Build from extracted keywords
    pub fn build<N: Float>(&self, keywords: &[DocumentKeywords<N>]) -> Result<HybridFeatures> {
        self.build_from_texts(&keywords_to_text(keywords))
    }

    /// Build from keyword texts
    ///
    /// 1. fit the n-gram vectorizer on the texts
    /// 2. score each text with the lexicon
    /// 3. append the scores as the last column
    pub fn build_from_texts<S: AsRef<str>>(&self, texts: &[S]) -> Result<HybridFeatures> {
        let mut vectorizer = NgramTfidfVectorizer::new(self.ngram_range, self.max_features);
        let tfidf = vectorizer.fit_transform(texts)?;
        let sentiment: Vec<f64> = texts
            .iter()
            .map(|text| self.lexicon.score(text.as_ref()))
            .collect();
        let matrix = matrix::hstack_column(&tfidf, &sentiment)?;
        info!(rows = matrix.rows(), cols = matrix.cols(), "hybrid feature matrix built");
        Ok(HybridFeatures {
            matrix,
            vectorizer,
            sentiment,
        })
    }
}
